//! Ordered operation chain
//!
//! Builder over a list of boxed operations. Running a `Pipeline` is the same
//! as calling [`run`] on its operation slice.

use crate::algorithms::run;
use crate::domain::entities::GasState;
use crate::ports::outbound::{OpOutcome, Operation};

/// An ordered, immutable-once-built list of operations.
#[derive(Default)]
pub struct Pipeline {
    operations: Vec<Box<dyn Operation>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation (builder style).
    pub fn then<O>(mut self, operation: O) -> Self
    where
        O: Operation + 'static,
    {
        self.operations.push(Box::new(operation));
        self
    }

    /// Append an already boxed operation.
    pub fn then_boxed(mut self, operation: Box<dyn Operation>) -> Self {
        self.operations.push(operation);
        self
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn operations(&self) -> &[Box<dyn Operation>] {
        &self.operations
    }

    /// Numbered description of each step, starting at 1.
    pub fn describe(&self) -> Vec<String> {
        describe_operations(&self.operations)
    }

    pub fn run(&self, initial: GasState) -> OpOutcome {
        run(&self.operations, initial)
    }
}

impl FromIterator<Box<dyn Operation>> for Pipeline {
    fn from_iter<T: IntoIterator<Item = Box<dyn Operation>>>(iter: T) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.operations.iter().map(|op| op.name()))
            .finish()
    }
}

pub(crate) fn describe_operations(operations: &[Box<dyn Operation>]) -> Vec<String> {
    operations
        .iter()
        .enumerate()
        .map(|(i, op)| format!("{}. {}", i + 1, op.describe()))
        .collect()
}

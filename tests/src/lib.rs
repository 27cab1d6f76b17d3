//! # Gas-Chain Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks for the runner
//! └── src/integration/  # Cross-crate flows
//!     ├── reference_flow.rs   # Built-in and file scenarios end to end
//!     ├── failures.rs         # Fail-fast and error propagation
//!     └── properties.rs       # Property tests over generated pipelines
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gc-tests
//! cargo test -p gc-tests integration::failures
//! cargo bench -p gc-tests
//! ```

pub mod integration;

//! Energy unit conversion

use rust_decimal::Decimal;

/// Gigajoules in one MMBtu.
pub const GJ_PER_MMBTU: Decimal = Decimal::from_parts(1_055_056, 0, 0, false, 6);

/// `None` when the result leaves the decimal range.
pub fn mmbtu_to_gj(mmbtu: Decimal) -> Option<Decimal> {
    mmbtu.checked_mul(GJ_PER_MMBTU)
}

pub fn gj_to_mmbtu(gj: Decimal) -> Option<Decimal> {
    gj.checked_div(GJ_PER_MMBTU)
}

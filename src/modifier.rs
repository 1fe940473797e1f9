//! Attribute score to modifier conversion

/// Score at which the modifier is zero
pub const MODIFIER_PIVOT: i32 = 10;

/// Derived modifier for a raw attribute score: `floor((score - 10) / 2)`
///
/// Rounds toward negative infinity, so a score of 9 yields -1.
#[inline]
pub fn modifier(score: i32) -> i32 {
    (score - MODIFIER_PIVOT).div_euclid(2)
}

use crate::*;

/// Points for one delete step.
///
/// A plain run of three is worth 100, each extra tile adds 100 and every
/// cascade level reached within the same turn adds a flat 200.
///
/// # Panics
///
/// When fewer than three tiles were removed, a delete step always follows a
/// successful match scan.
pub const fn score_for(removed: CellCount, combo: u32) -> u32 {
    assert!(removed >= 3, "score_for called without a match");
    (removed as u32 - 2) * 100 + combo * 200
}

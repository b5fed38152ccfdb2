//! Ascending ordering of a drawn set

use crate::consts::PICK_COUNT;

/// Return the values of a draw in strictly ascending order. The input is
/// left untouched; draws never contain duplicates, so an unstable sort is
/// fine.
pub fn ascending(values: &[u8; PICK_COUNT]) -> [u8; PICK_COUNT] {
    let mut out = *values;
    out.sort_unstable();
    out
}

//! Restricted-growth strings.
//!
//! A restricted-growth string of length `n` starts at 0 and never exceeds
//! its running maximum by more than one. Each such string names one set
//! partition of `n` leaves, so there are `Bell(n)` of them; unranking walks
//! positions left to right, charging each candidate value with the number
//! of completions recorded in [`Tables::rgs_count`].
//!
//! [`Tables::rgs_count`]: crate::tables::Tables::rgs_count

use crate::bignat::BigNat;
use crate::tables::Tables;

/// Returns the restricted-growth string of the given length at lexicographic
/// position `index`.
///
/// Position 0 is the all-zero string; position `Bell(len) - 1` is the
/// strictly increasing string `0, 1, …, len-1`. Length 0 yields the empty
/// string.
///
/// # Panics
///
/// Panics if `index >= Bell(len)`; honoring that bound is the caller's
/// contract.
pub fn unrank_rgs(tables: &Tables, len: usize, index: &BigNat) -> Vec<usize> {
    assert!(
        index < tables.bell(len),
        "rgs index {} out of range (Bell[{}] = {})",
        index,
        len,
        tables.bell(len)
    );
    if len == 0 {
        return Vec::new();
    }
    let mut out = vec![0; len];
    let mut max = 0;
    let mut rem = index.clone();
    for pos in 1..len {
        let tail = len - pos - 1;
        let mut v = 0;
        loop {
            let count = tables.rgs_count(tail, v.max(max));
            if &rem < count {
                break;
            }
            rem = &rem - count;
            v += 1;
        }
        out[pos] = v;
        max = max.max(v);
    }
    out
}

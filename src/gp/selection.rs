//! Rank-biased parent selection.
//!
//! Parents are drawn from a population already sorted best-first. The index
//! distribution is geometric: rank `k` is chosen with probability
//! proportional to `skew^k`, so lower skew concentrates selection on the
//! fittest individuals without cutting off the rest.

// Selection truncates a float draw to an index
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use rand::Rng;

/// Draw an index in `0..len` favouring low (better) ranks.
///
/// Computes `floor(ln(u) / ln(skew))` for uniform `u` and clamps it to the
/// last valid index. `skew` must lie strictly between 0 and 1.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn select_index<R: Rng + ?Sized>(skew: f64, len: usize, rng: &mut R) -> usize {
    assert!(len > 0, "cannot select from an empty population");
    let draw: f64 = rng.r#gen();
    let index = (draw.ln() / skew.ln()).floor();
    // Casting saturates: a zero draw yields +inf and lands on the last index.
    (index as usize).min(len - 1)
}

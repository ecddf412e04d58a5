//! Prime sizing for the slot array
//!
//! Only called when a table is created or resized, never per lookup.

/// Trial division up to `x / 2`
pub fn is_prime(x: usize) -> bool {
    if x < 2 {
        return false;
    }
    (2..=x / 2).all(|d| x % d != 0)
}

/// Smallest prime `>= x`, found by scanning upward
///
/// `None` if no such prime fits in a `usize`.
pub fn next_prime(x: usize) -> Option<usize> {
    let mut candidate = x.max(2);
    while !is_prime(candidate) {
        candidate = candidate.checked_add(1)?;
    }
    Some(candidate)
}

//! Double hashing
//!
//! One DJB2-style hash per key, split two ways against the table size:
//! - `index`: the first slot probed
//! - `stride`: the step between probes, never zero
//!
//! Because every table size is prime, any stride in `1..size` visits all
//! slots before repeating.

use std::fmt;

/// DJB2 seed
pub const HASH_SEED: u64 = 5381;

/// DJB2 multiplier
pub const HASH_MULTIPLIER: u64 = 33;

/// Bernstein hash, xor variant: `hash = hash * 33 ^ c` for every byte.
///
/// Bytes are widened as signed chars, so bytes `>= 0x80` are sign-extended
/// before the xor.
#[inline]
pub fn djb2_xor(bytes: &[u8]) -> u64 {
    bytes.iter().fold(HASH_SEED, |hash, &c| {
        hash.wrapping_mul(HASH_MULTIPLIER) ^ (c as i8 as i64 as u64)
    })
}

/// Starting slot and step for one key in a table of a given size
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Probe {
    pub index: usize,
    pub stride: usize,
}

impl Probe {
    /// Split a hash value against `table_size`
    #[inline(always)]
    pub fn from_hash(hash: u64, table_size: usize) -> Self {
        debug_assert!(table_size > 0);
        let size = table_size as u64;
        Probe {
            index: (hash % size) as usize,
            stride: ((hash / size) % size).max(1) as usize,
        }
    }

    /// Hash `bytes` and split the result against `table_size`
    #[inline]
    pub fn for_bytes(bytes: &[u8], table_size: usize) -> Self {
        Self::from_hash(djb2_xor(bytes), table_size)
    }

    /// Slots visited for this key: `index + n * stride (mod size)` for
    /// `n` in `0..size`.
    pub fn sequence(self, table_size: usize) -> ProbeSequence {
        ProbeSequence {
            slot: self.index,
            stride: self.stride,
            table_size,
            remaining: table_size,
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Probe(index={}, stride={})", self.index, self.stride)
    }
}

/// Iterator over the slots of one probe sequence
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    slot: usize,
    stride: usize,
    table_size: usize,
    remaining: usize,
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let slot = self.slot;
        self.slot = (self.slot + self.stride) % self.table_size;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

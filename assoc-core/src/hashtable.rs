//! Associative array over caller-owned keys and data
//!
//! Provides:
//! - Open addressing with double hashing (see [`crate::probe`])
//! - String or fixed-width key equality (see [`KeyKind`])
//! - Growth to the next prime size once the load factor is crossed
//!
//! The table only borrows: it stores `&'a K` and `&'a V` and never copies,
//! clones or drops the payloads behind them.

use crate::config::{TableConfig, INIT_SIZE};
use crate::error::AssocError;
use crate::key::{KeyBytes, KeyKind};
use crate::prime::next_prime;
use crate::probe::Probe;
use log::{debug, trace, warn};
use std::fmt;

/// Occupied slot: borrowed key and borrowed data
pub(crate) struct Slot<'a, K: ?Sized, V: ?Sized> {
    pub(crate) key: &'a K,
    pub(crate) data: &'a V,
}

impl<K: ?Sized, V: ?Sized> Clone for Slot<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized, V: ?Sized> Copy for Slot<'_, K, V> {}

/// Outcome of [`AssocTable::insert`]
///
/// Only `Inserted` changes the table's contents. The other two outcomes are
/// silent no-ops, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The pair was stored in an empty slot
    Inserted,
    /// An equal key is already present; its data was kept, the new data
    /// was dropped on the floor
    Duplicate,
    /// Every slot of the probe sequence was occupied by other keys; the pair
    /// was not stored
    Saturated,
}

/// Hash table mapping borrowed keys to borrowed data
pub struct AssocTable<'a, K: ?Sized, V: ?Sized> {
    /// Slot array, length is always prime
    pub(crate) slots: Vec<Option<Slot<'a, K, V>>>,

    /// Number of occupied slots
    pub(crate) item_count: usize,

    /// Key equality rule, fixed for the table's lifetime
    pub(crate) kind: KeyKind,

    pub(crate) config: TableConfig,
}

impl<'a, K, V> AssocTable<'a, K, V>
where
    K: KeyBytes + ?Sized,
    V: ?Sized,
{
    /// Create an empty table with the default sizing (17 slots)
    pub fn new(kind: KeyKind) -> Self {
        let config = TableConfig::default();
        trace!("creating {} table with {} slots", kind, INIT_SIZE);

        AssocTable {
            slots: vec![None; INIT_SIZE],
            item_count: 0,
            kind,
            config,
        }
    }

    /// Create an empty table from the integer key size discriminator
    ///
    /// `0` selects NUL-terminated string keys, `n > 0` selects `n`-byte
    /// binary keys.
    pub fn with_keysize(keysize: usize) -> Self {
        Self::new(KeyKind::from_keysize(keysize))
    }

    /// Create an empty table with custom sizing
    ///
    /// # Arguments
    /// * `kind` - Key equality rule
    /// * `config` - Sizing parameters; `initial_size` is rounded up to a prime
    pub fn with_config(kind: KeyKind, config: TableConfig) -> Result<Self, AssocError> {
        config.validate()?;
        let slots = alloc_slots(config.initial_size)?;
        trace!("creating {} table with {} slots", kind, slots.len());

        Ok(AssocTable {
            slots,
            item_count: 0,
            kind,
            config,
        })
    }

    /// Insert a key/data pair
    ///
    /// Grows the table first if it has reached its load factor. An equal key
    /// that is already present is left alone: its data is **not** replaced,
    /// and the call reports [`Insertion::Duplicate`].
    ///
    /// # Errors
    /// * [`AssocError::KeyTooShort`] - fixed-width key shorter than the key size
    /// * [`AssocError::AllocationFailure`] - growing the table failed; the
    ///   table is unchanged
    pub fn insert(&mut self, key: &'a K, data: &'a V) -> Result<Insertion, AssocError> {
        self.kind.check(key.key_bytes())?;

        if self.item_count >= self.config.resize_threshold(self.slots.len()) {
            self.resize()?;
        }

        let outcome = Self::place(&mut self.slots, self.kind, Slot { key, data });
        if outcome == Insertion::Inserted {
            self.item_count += 1;
        }
        Ok(outcome)
    }

    /// Get the data stored under a key equal to `key`
    ///
    /// Probing stops at the first empty slot.
    pub fn lookup<Q>(&self, key: &Q) -> Option<&'a V>
    where
        Q: KeyBytes + ?Sized,
    {
        let bytes = key.key_bytes();
        self.kind.compared_bytes(bytes)?;

        let table_size = self.slots.len();
        let probe = Probe::for_bytes(self.kind.hashed_bytes(bytes), table_size);
        for idx in probe.sequence(table_size) {
            let slot = self.slots[idx].as_ref()?;
            if self.kind.same_key(slot.key.key_bytes(), bytes) {
                return Some(slot.data);
            }
        }

        None
    }

    /// Check whether a key equal to `key` is stored
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: KeyBytes + ?Sized,
    {
        self.lookup(key).is_some()
    }

    /// Release the slot array
    ///
    /// Keys and data stay with the caller; they are borrowed, not owned.
    pub fn destroy(self) {
        trace!(
            "destroying {} table ({} slots, {} items)",
            self.kind,
            self.slots.len(),
            self.item_count
        );
    }

    /// Place a pair along its probe sequence in `slots`
    fn place(
        slots: &mut [Option<Slot<'a, K, V>>],
        kind: KeyKind,
        slot: Slot<'a, K, V>,
    ) -> Insertion {
        let table_size = slots.len();
        let bytes = slot.key.key_bytes();
        let probe = Probe::for_bytes(kind.hashed_bytes(bytes), table_size);

        for idx in probe.sequence(table_size) {
            let occupant = slots[idx].map(|s| s.key);
            match occupant {
                None => {
                    slots[idx] = Some(slot);
                    return Insertion::Inserted;
                }
                Some(existing) if kind.same_key(existing.key_bytes(), bytes) => {
                    return Insertion::Duplicate;
                }
                Some(_) => {}
            }
        }

        warn!("{} exhausted all {} slots, pair dropped", probe, table_size);
        Insertion::Saturated
    }

    /// Grow to the next prime `>= size * scale_factor` and rehash every pair
    ///
    /// Nothing is touched until the new slot array exists.
    fn resize(&mut self) -> Result<(), AssocError> {
        let old_size = self.slots.len();
        let mut grown = alloc_slots(self.config.scaled_size(old_size)?)?;
        let new_size = grown.len();

        let mut moved = 0;
        for slot in self.slots.iter().flatten() {
            if Self::place(&mut grown, self.kind, *slot) == Insertion::Inserted {
                moved += 1;
            }
        }
        debug_assert_eq!(moved, self.item_count);

        self.slots = grown;
        self.item_count = moved;
        debug!(
            "resized table from {} to {} slots, {} items rehashed",
            old_size, new_size, moved
        );
        Ok(())
    }
}

impl<K: ?Sized, V: ?Sized> AssocTable<'_, K, V> {
    /// Number of stored pairs
    pub fn count(&self) -> usize {
        self.item_count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Current slot count (always prime)
    pub fn table_size(&self) -> usize {
        self.slots.len()
    }

    /// Get key kind
    pub fn key_kind(&self) -> KeyKind {
        self.kind
    }

    /// Get sizing parameters
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Occupied fraction of the slot array
    pub fn load_factor(&self) -> f64 {
        self.item_count as f64 / self.slots.len() as f64
    }
}

impl<'a, K, V> Default for AssocTable<'a, K, V>
where
    K: KeyBytes + ?Sized,
    V: ?Sized,
{
    fn default() -> Self {
        Self::new(KeyKind::Str)
    }
}

impl<K: ?Sized, V: ?Sized> fmt::Debug for AssocTable<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssocTable")
            .field("kind", &self.kind)
            .field("count", &self.item_count)
            .field("table_size", &self.slots.len())
            .finish()
    }
}

/// Allocate an empty slot array of the smallest prime size `>= min_size`
/// without aborting on exhaustion
fn alloc_slots<T>(min_size: usize) -> Result<Vec<Option<T>>, AssocError> {
    let mut slots = Vec::new();
    // Sizes the allocator cannot satisfy fail here, before the prime search
    slots
        .try_reserve_exact(min_size)
        .map_err(|_| AssocError::AllocationFailure { slots: min_size })?;

    let table_size =
        next_prime(min_size).ok_or(AssocError::AllocationFailure { slots: min_size })?;
    slots
        .try_reserve_exact(table_size)
        .map_err(|_| AssocError::AllocationFailure { slots: table_size })?;
    slots.resize_with(table_size, || None);
    Ok(slots)
}

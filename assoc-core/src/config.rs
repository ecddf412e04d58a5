//! Sizing parameters

use crate::error::AssocError;

/// Slot count of a freshly created table
pub const INIT_SIZE: usize = 17;

/// Growth multiplier applied before rounding up to the next prime
pub const SCALE_FACTOR: usize = 2;

/// Occupancy ratio that triggers a resize on the next insert
pub const LOAD_FACTOR: f64 = 0.75;

/// Sizing parameters for an [`AssocTable`](crate::AssocTable)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TableConfig {
    /// Requested initial slot count, rounded up to a prime on use
    pub initial_size: usize,
    /// Multiplier applied to the slot count on resize
    pub scale_factor: usize,
    /// Occupancy ratio in `(0, 1)` at which the table grows
    pub load_factor: f64,
}

impl TableConfig {
    pub fn new(initial_size: usize, scale_factor: usize, load_factor: f64) -> Self {
        TableConfig {
            initial_size,
            scale_factor,
            load_factor,
        }
    }

    pub fn validate(&self) -> Result<(), AssocError> {
        if self.initial_size < 2 {
            return Err(AssocError::InvalidConfig(format!(
                "initial_size must be at least 2, got {}",
                self.initial_size
            )));
        }
        if self.scale_factor < 2 {
            return Err(AssocError::InvalidConfig(format!(
                "scale_factor must be at least 2, got {}",
                self.scale_factor
            )));
        }
        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(AssocError::InvalidConfig(format!(
                "load_factor must be in (0, 1), got {}",
                self.load_factor
            )));
        }
        Ok(())
    }

    /// Minimum slot count that replaces `table_size` on resize, before
    /// rounding up to a prime
    ///
    /// # Errors
    /// [`AssocError::AllocationFailure`] if the product overflows `usize`.
    pub fn scaled_size(&self, table_size: usize) -> Result<usize, AssocError> {
        table_size
            .checked_mul(self.scale_factor)
            .ok_or(AssocError::AllocationFailure { slots: usize::MAX })
    }

    /// Item count at which a table of `table_size` slots must grow before
    /// accepting another insert. Truncates, so 17 slots at 0.75 grow at 12.
    pub fn resize_threshold(&self, table_size: usize) -> usize {
        (table_size as f64 * self.load_factor) as usize
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(INIT_SIZE, SCALE_FACTOR, LOAD_FACTOR)
    }
}

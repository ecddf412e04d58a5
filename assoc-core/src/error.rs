//! Error types for the `assoc-core` crate

/// Errors returned by table construction and insertion
///
/// A missing key is not an error: [`AssocTable::lookup`] returns `None`.
/// Duplicate keys and exhausted probe sequences are reported through
/// [`Insertion`], not here.
///
/// [`AssocTable::lookup`]: crate::AssocTable::lookup
/// [`Insertion`]: crate::Insertion
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AssocError {
    /// The slot array for a new or resized table could not be reserved.
    ///
    /// The table is left exactly as it was before the call.
    #[error("failed to allocate a slot array of {slots} slots")]
    AllocationFailure { slots: usize },

    /// A fixed-width table was handed a key with too few bytes.
    #[error("key has {found} bytes but the table compares {expected}-byte keys")]
    KeyTooShort { expected: usize, found: usize },

    /// A [`TableConfig`](crate::TableConfig) failed validation.
    #[error("invalid table configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = AssocError::KeyTooShort { expected: 4, found: 2 };
        assert_eq!(
            err.to_string(),
            "key has 2 bytes but the table compares 4-byte keys"
        );

        let err = AssocError::AllocationFailure { slots: 37 };
        assert!(err.to_string().contains("37"));
    }
}

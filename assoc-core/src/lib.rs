//! Assoc - open addressing hash table over caller-owned keys and data
//!
//! Core library providing:
//! - Double hashing with a DJB2-style hash (index and stride)
//! - NUL-terminated string keys or fixed-width binary keys
//! - Growth to the next prime size past a 0.75 load factor
//! - Borrowed keys and data: the table never copies or frees them

pub mod config;
pub mod error;
pub mod hashtable;
pub mod key;
pub mod prime;
pub mod probe;

pub use config::{TableConfig, INIT_SIZE, LOAD_FACTOR, SCALE_FACTOR};
pub use error::AssocError;
pub use hashtable::{AssocTable, Insertion};
pub use key::{KeyBytes, KeyKind};
pub use probe::Probe;

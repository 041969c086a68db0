// crates/phonebook-core/src/lib.rs

//! # phonebook-core
//!
//! An in-memory contact collection. Entries are stored unordered and every
//! lookup re-sorts the live region by the comparator for its dimension
//! (full name, first name, last name, phone, city or state) before
//! binary-searching it. Multi-match lookups expand from the binary-search
//! anchor to the surrounding run of matching entries.
//!
//! ```rust
//! use phonebook_core::prelude::*;
//!
//! let mut book = PhoneBook::new();
//! let home = Address::new("114 Market St", "St Louis", "MO", "63403")?;
//! book.insert(Record::from_full_name("Doe, John", "6366435698", home)?);
//!
//! let hit = book.search_by_phone("(636)-643-5698")?;
//! assert_eq!(hit.map(Record::full_name), Some("Doe, John"));
//! # Ok::<(), PhoneBookError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod book;
pub mod common;
pub mod compare;
pub mod error;
pub mod format;
pub mod loader;
pub mod model;
pub mod prelude;
#[doc(hidden)]
pub mod raw;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::book::PhoneBook;
pub use crate::common::{BookStats, MIN_CAPACITY};
pub use crate::compare::SearchField;
pub use crate::error::{PhoneBookError, Result, ValidationError};
pub use crate::loader::StorageFormat;
pub use crate::model::{Address, Record};
pub use crate::traits::ContactSearch;

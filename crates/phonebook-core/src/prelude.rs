//! phonebook-rs prelude: bring common types and traits into scope.

pub use crate::book::PhoneBook;
pub use crate::common::BookStats;
pub use crate::compare::SearchField;
pub use crate::error::{PhoneBookError, Result, ValidationError};
pub use crate::model::{Address, Record};
pub use crate::traits::ContactSearch;

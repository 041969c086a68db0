use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a phone book.
///
/// Returned by [`PhoneBook::stats`](crate::PhoneBook::stats). `capacity` is
/// the logical slot capacity, which doubles on growth and halves when the
/// book drops to a quarter full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStats {
    pub entries: usize,
    pub capacity: usize,
}

/// Capacity of a fresh phone book; the book never shrinks below it.
pub const MIN_CAPACITY: usize = 2;

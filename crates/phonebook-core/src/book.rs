// crates/phonebook-core/src/book.rs
use crate::common::{BookStats, MIN_CAPACITY};
use crate::compare::SearchField;
use crate::error::{PhoneBookError, Result, ValidationError};
use crate::format::format_phone;
use crate::model::Record;
use std::ops::Range;
use tracing::{debug, info, warn};

/// The in-memory contact collection.
///
/// Entries are stored unordered; every lookup sorts the live region by the
/// comparator for its dimension and binary-searches it. The logical
/// capacity doubles when an insert finds the book full and halves when a
/// delete leaves it a quarter full, never dropping below
/// [`MIN_CAPACITY`].
#[derive(Debug, Clone)]
pub struct PhoneBook {
    pub(crate) entries: Vec<Record>,
    capacity: usize,
}

impl Default for PhoneBook {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneBook {
    pub fn new() -> Self {
        PhoneBook {
            entries: Vec::with_capacity(MIN_CAPACITY),
            capacity: MIN_CAPACITY,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical slot capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> BookStats {
        BookStats {
            entries: self.len(),
            capacity: self.capacity,
        }
    }

    /// Entries in storage order (unspecified between operations).
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    /// All entries, sorted by full name.
    pub fn sorted_entries(&mut self) -> &[Record] {
        self.sort_by(SearchField::FullName);
        &self.entries
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.entries.len());
        debug!(from = self.capacity, to = capacity, "resizing phone book");
        if capacity > self.capacity {
            self.entries.reserve_exact(capacity - self.entries.len());
        } else {
            self.entries.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    fn push(&mut self, record: Record) {
        if self.entries.len() == self.capacity {
            self.resize((self.entries.len() * 2).max(1));
        }
        self.entries.push(record);
    }

    /// Appends a record. No ordering work happens here; duplicates are the
    /// caller's concern.
    pub fn insert(&mut self, record: Record) {
        info!(name = %record.full_name(), "entry added");
        self.push(record);
    }

    /// Bulk-appends records without duplicate checks, growing capacity as
    /// needed. Returns the number of records appended.
    pub fn extend_entries<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = Record>,
    {
        let before = self.len();
        for record in records {
            self.push(record);
        }
        self.len() - before
    }

    // -----------------------------------------------------------------------
    // SORT + BINARY SEARCH PRIMITIVES
    // -----------------------------------------------------------------------

    pub(crate) fn sort_by(&mut self, field: SearchField) {
        self.entries.sort_by(field.comparator());
    }

    /// Sorts by `field` and returns the anchor index of some entry whose key
    /// equals `query`.
    pub(crate) fn locate(&mut self, field: SearchField, query: &str) -> Option<usize> {
        self.sort_by(field);
        let anchor = self
            .entries
            .binary_search_by(|r| field.cmp_key(r, query))
            .ok();
        debug!(?field, query, ?anchor, "anchor lookup");
        anchor
    }

    /// Sorts by `field` and returns the full run of entries whose key
    /// equals `query` (empty when there is none).
    pub(crate) fn equal_run(&mut self, field: SearchField, query: &str) -> Range<usize> {
        self.sort_by(field);
        let start = self
            .entries
            .partition_point(|r| field.cmp_key(r, query).is_lt());
        let end = self
            .entries
            .partition_point(|r| field.cmp_key(r, query).is_le());
        start..end
    }

    /// Index of the entry equal to `query`, falling back to the first entry
    /// sharing its full-name key.
    pub(crate) fn position_of(&mut self, query: &Record) -> Option<usize> {
        let run = self.equal_run(SearchField::FullName, query.full_name());
        if run.is_empty() {
            return None;
        }
        let exact = self.entries[run.clone()].iter().position(|r| r == query);
        Some(run.start + exact.unwrap_or(0))
    }

    // -----------------------------------------------------------------------
    // DELETE
    // -----------------------------------------------------------------------

    /// Swap-with-last removal, then shrink if the book is a quarter full.
    fn remove_at(&mut self, index: usize) -> Record {
        let removed = self.entries.swap_remove(index);
        let len = self.entries.len();
        if len > 0 && len == self.capacity / 4 {
            self.resize((self.capacity / 2).max(MIN_CAPACITY));
        }
        info!(name = %removed.full_name(), "entry deleted");
        removed
    }

    fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PhoneBookError::EmptyCollection);
        }
        Ok(())
    }

    fn not_found(what: String) -> PhoneBookError {
        warn!(query = %what, "no such entry");
        PhoneBookError::NotFound(what)
    }

    /// Deletes the entry matching `query` by full-name key and returns it.
    ///
    /// Fails with [`PhoneBookError::EmptyCollection`] on an empty book and
    /// with [`PhoneBookError::NotFound`] when no entry matches; neither
    /// failure mutates the book.
    ///
    /// ```rust
    /// use phonebook_core::prelude::*;
    ///
    /// let mut book = PhoneBook::new();
    /// let home = Address::new("114 Market St", "St Louis", "MO", "63403").unwrap();
    /// let john = Record::from_full_name("Doe, John", "6366435698", home).unwrap();
    ///
    /// assert!(matches!(book.delete(&john), Err(PhoneBookError::EmptyCollection)));
    /// book.insert(john.clone());
    /// assert_eq!(book.delete(&john).unwrap(), john);
    /// assert!(book.is_empty());
    /// ```
    pub fn delete(&mut self, query: &Record) -> Result<Record> {
        self.ensure_not_empty()?;
        match self.position_of(query) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(Self::not_found(query.full_name().to_owned())),
        }
    }

    /// Deletes the entry with the given `"Last, First Middle"` key.
    pub fn delete_by_full_name(&mut self, full_name: &str) -> Result<Record> {
        self.ensure_not_empty()?;
        match self.locate(SearchField::FullName, full_name.trim()) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(Self::not_found(full_name.trim().to_owned())),
        }
    }

    /// Deletes the entry with the given phone number.
    pub fn delete_by_phone(&mut self, phone: &str) -> Result<Record> {
        self.ensure_not_empty()?;
        let phone = format_phone(phone)?;
        match self.locate(SearchField::Phone, &phone) {
            Some(index) => Ok(self.remove_at(index)),
            None => Err(Self::not_found(phone)),
        }
    }

    // -----------------------------------------------------------------------
    // UPDATE
    // -----------------------------------------------------------------------

    /// Applies `edit` to a copy of the entry at `index` and commits it only
    /// if every step succeeded.
    fn update_at<F>(&mut self, index: usize, edit: F) -> Result<&Record>
    where
        F: FnOnce(&mut Record) -> std::result::Result<(), ValidationError>,
    {
        let mut draft = self.entries[index].clone();
        edit(&mut draft)?;
        info!(
            old = %self.entries[index].full_name(),
            new = %draft.full_name(),
            "entry updated"
        );
        self.entries[index] = draft;
        Ok(&self.entries[index])
    }

    /// Edits the entry with the given full-name key in place.
    ///
    /// ```rust
    /// use phonebook_core::prelude::*;
    ///
    /// let mut book = PhoneBook::new();
    /// let home = Address::new("114 Market St", "St Louis", "MO", "63403").unwrap();
    /// book.insert(Record::from_full_name("Doe, John", "6366435698", home).unwrap());
    ///
    /// book.update_by_full_name("Doe, John", |r| r.set_name("Jane", "", "Doe")).unwrap();
    /// assert!(book.search_by_full_name("Doe, Jane").is_some());
    /// assert!(book.search_by_full_name("Doe, John").is_none());
    /// ```
    pub fn update_by_full_name<F>(&mut self, full_name: &str, edit: F) -> Result<&Record>
    where
        F: FnOnce(&mut Record) -> std::result::Result<(), ValidationError>,
    {
        let full_name = full_name.trim();
        match self.locate(SearchField::FullName, full_name) {
            Some(index) => self.update_at(index, edit),
            None => Err(Self::not_found(full_name.to_owned())),
        }
    }

    /// Edits the entry with the given phone number in place.
    pub fn update_by_phone<F>(&mut self, phone: &str, edit: F) -> Result<&Record>
    where
        F: FnOnce(&mut Record) -> std::result::Result<(), ValidationError>,
    {
        let phone = format_phone(phone)?;
        match self.locate(SearchField::Phone, &phone) {
            Some(index) => self.update_at(index, edit),
            None => Err(Self::not_found(phone)),
        }
    }
}

impl<'a> IntoIterator for &'a PhoneBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<Record> for PhoneBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = PhoneBook::new();
        book.extend_entries(iter);
        book
    }
}

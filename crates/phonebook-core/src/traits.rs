// crates/phonebook-core/src/traits.rs
use crate::error::ValidationError;
use crate::model::Record;

/// Lookup operations over a phone book.
///
/// Every method re-sorts the live region with the comparator for its
/// dimension before binary-searching it, which is why they all take
/// `&mut self`. Absence is never an error: exact lookups return `None`,
/// multi-match lookups an empty `Vec`.
pub trait ContactSearch {
    /// Exact lookup by full-name key, preferring the entry that is equal to
    /// `query` (same key and phone) when several share the key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phonebook_core::prelude::*;
    ///
    /// let mut book = PhoneBook::new();
    /// let home = Address::new("114 Market St", "St Louis", "MO", "63403").unwrap();
    /// let john = Record::from_full_name("Doe, John", "6366435698", home).unwrap();
    /// book.insert(john.clone());
    ///
    /// assert_eq!(book.search_by_record(&john), Some(&john));
    /// ```
    fn search_by_record(&mut self, query: &Record) -> Option<&Record>;

    /// Exact, case-insensitive lookup on the `"Last, First Middle"` key.
    fn search_by_full_name(&mut self, full_name: &str) -> Option<&Record>;

    /// Exact lookup by phone number. The query is normalized first, so
    /// `"6366435698"` and `"(636)-643-5698"` are the same query.
    fn search_by_phone(&mut self, phone: &str) -> Result<Option<&Record>, ValidationError>;

    /// All entries whose first name equals `query`, widened to the
    /// neighbouring entries whose rendered text still contains it.
    fn search_by_first_name(&mut self, query: &str) -> Vec<&Record>;

    /// Same as [`ContactSearch::search_by_first_name`], keyed on last name.
    ///
    /// ```rust
    /// use phonebook_core::prelude::*;
    ///
    /// let mut book = PhoneBook::new();
    /// for (name, phone) in [("Doe, John", "6366435698"), ("Dole, Bob", "2125550100")] {
    ///     let addr = Address::new("1 Main St", "Chicago", "IL", "60616").unwrap();
    ///     book.insert(Record::from_full_name(name, phone, addr).unwrap());
    /// }
    ///
    /// let hits = book.search_by_last_name("doe");
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].full_name(), "Doe, John");
    /// ```
    fn search_by_last_name(&mut self, query: &str) -> Vec<&Record>;

    fn search_by_city(&mut self, query: &str) -> Vec<&Record>;

    /// All entries in a state. Accepts a code or a full state name.
    fn search_by_state(&mut self, query: &str) -> Result<Vec<&Record>, ValidationError>;
}

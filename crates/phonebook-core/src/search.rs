// crates/phonebook-core/src/search.rs
use crate::book::PhoneBook;
use crate::compare::SearchField;
use crate::error::ValidationError;
use crate::format::{format_phone, normalize_state};
use crate::model::Record;
use crate::text::fold_key;
use crate::traits::ContactSearch;
use tracing::debug;

// -----------------------------------------------------------------------------
// THE CRAWLER
// -----------------------------------------------------------------------------

/// Expands from `anchor` over a region sorted by the searched dimension:
/// walks left while `matches` holds, then collects rightwards and stops at
/// the first entry that fails. Matches are assumed contiguous because the
/// region is sorted by the field being matched.
fn crawl<'a, F>(sorted: &'a [Record], anchor: usize, matches: F) -> Vec<&'a Record>
where
    F: Fn(&Record) -> bool,
{
    debug_assert!(anchor < sorted.len());
    let mut start = anchor;
    while start > 0 && matches(&sorted[start - 1]) {
        start -= 1;
    }

    // Result buffer starts at two slots and doubles when full, then is
    // trimmed to the number of hits.
    let mut out = Vec::with_capacity(2);
    for record in &sorted[start..] {
        if !matches(record) {
            break;
        }
        if out.len() == out.capacity() {
            out.reserve_exact(out.len());
        }
        out.push(record);
    }
    out.shrink_to_fit();
    out
}

impl PhoneBook {
    /// Anchor on an exact (case-insensitive) key match for `field`, then
    /// crawl over entries whose accent-folded line contains `query`.
    fn substring_search(&mut self, field: SearchField, query: &str) -> Vec<&Record> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }
        let Some(anchor) = self.locate(field, query) else {
            return Vec::new();
        };

        let needle = fold_key(query);
        let hits = crawl(&self.entries, anchor, |r| {
            fold_key(&r.to_string()).contains(&needle)
        });
        debug!(?field, query, hits = hits.len(), "substring search");
        hits
    }
}

impl ContactSearch for PhoneBook {
    fn search_by_record(&mut self, query: &Record) -> Option<&Record> {
        let index = self.position_of(query)?;
        Some(&self.entries[index])
    }

    fn search_by_full_name(&mut self, full_name: &str) -> Option<&Record> {
        let index = self.locate(SearchField::FullName, full_name.trim())?;
        Some(&self.entries[index])
    }

    fn search_by_phone(&mut self, phone: &str) -> Result<Option<&Record>, ValidationError> {
        let phone = format_phone(phone)?;
        Ok(self
            .locate(SearchField::Phone, &phone)
            .map(|index| &self.entries[index]))
    }

    fn search_by_first_name(&mut self, query: &str) -> Vec<&Record> {
        self.substring_search(SearchField::FirstName, query)
    }

    fn search_by_last_name(&mut self, query: &str) -> Vec<&Record> {
        self.substring_search(SearchField::LastName, query)
    }

    fn search_by_city(&mut self, query: &str) -> Vec<&Record> {
        self.substring_search(SearchField::City, query)
    }

    fn search_by_state(&mut self, query: &str) -> Result<Vec<&Record>, ValidationError> {
        let code = normalize_state(query)?;
        let Some(anchor) = self.locate(SearchField::State, code) else {
            return Ok(Vec::new());
        };
        Ok(crawl(&self.entries, anchor, |r| {
            r.address().state().contains(code)
        }))
    }
}

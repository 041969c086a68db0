// crates/phonebook-core/src/compare.rs

//! The comparator set. Every lookup sorts the live region with one of these
//! and then binary-searches it with the matching key comparison from
//! [`SearchField`].

use crate::model::Record;
use crate::text::cmp_ignore_case;
use std::cmp::Ordering;

pub type Comparator = fn(&Record, &Record) -> Ordering;

/// Case-insensitive on the canonical `"Last, First Middle"` key.
pub fn by_full_name(a: &Record, b: &Record) -> Ordering {
    cmp_ignore_case(a.full_name(), b.full_name())
}

pub fn by_first_name(a: &Record, b: &Record) -> Ordering {
    cmp_ignore_case(a.first_name(), b.first_name())
}

/// Last name first, full-name key as the tie-break. Refines
/// [`by_full_name`] so that a bare last-name probe is monotone over the
/// sorted region even when a last name contains characters that sort
/// before the key's `", "` separator.
pub fn by_last_name(a: &Record, b: &Record) -> Ordering {
    cmp_ignore_case(a.last_name(), b.last_name()).then_with(|| by_full_name(a, b))
}

/// Lexicographic on the canonical formatted number.
pub fn by_phone(a: &Record, b: &Record) -> Ordering {
    a.phone().cmp(b.phone())
}

pub fn by_city(a: &Record, b: &Record) -> Ordering {
    cmp_ignore_case(a.address().city(), b.address().city())
}

/// Exact on the 2-letter code.
pub fn by_state(a: &Record, b: &Record) -> Ordering {
    a.address().state().cmp(b.address().state())
}

/// The dimension a lookup is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    FullName,
    FirstName,
    LastName,
    Phone,
    City,
    State,
}

impl SearchField {
    pub fn comparator(self) -> Comparator {
        match self {
            SearchField::FullName => by_full_name,
            SearchField::FirstName => by_first_name,
            SearchField::LastName => by_last_name,
            SearchField::Phone => by_phone,
            SearchField::City => by_city,
            SearchField::State => by_state,
        }
    }

    /// The raw field this dimension reads from a record.
    pub fn key(self, record: &Record) -> &str {
        match self {
            SearchField::FullName => record.full_name(),
            SearchField::FirstName => record.first_name(),
            SearchField::LastName => record.last_name(),
            SearchField::Phone => record.phone(),
            SearchField::City => record.address().city(),
            SearchField::State => record.address().state(),
        }
    }

    /// Orders `record` against a bare key. Consistent with
    /// [`SearchField::comparator`], so it can drive a binary search over a
    /// region sorted by that comparator. `query` must already be in
    /// canonical form for `Phone` and `State`.
    pub fn cmp_key(self, record: &Record, query: &str) -> Ordering {
        match self {
            SearchField::Phone | SearchField::State => self.key(record).cmp(query),
            _ => cmp_ignore_case(self.key(record), query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Address;

    fn rec(full: &str, phone: &str, city: &str, state: &str) -> Record {
        let addr = Address::new("1 Main St", city, state, "00000").unwrap();
        Record::from_full_name(full, phone, addr).unwrap()
    }

    #[test]
    fn comparators_read_their_own_field() {
        let a = rec("Doe, John", "6366435698", "st louis", "MO");
        let b = rec("Dole, Bob", "2125550100", "St Charles", "IL");

        assert_eq!(by_full_name(&a, &b), Ordering::Less);
        assert_eq!(by_first_name(&a, &b), Ordering::Greater);
        assert_eq!(by_last_name(&a, &b), Ordering::Less);
        assert_eq!(by_phone(&a, &b), Ordering::Greater);
        assert_eq!(by_city(&a, &b), Ordering::Greater);
        assert_eq!(by_state(&a, &b), Ordering::Greater);
    }

    #[test]
    fn key_probe_agrees_with_comparator() {
        let r = rec("Doe, John E", "8475390126", "St Charles", "MO");
        assert_eq!(SearchField::LastName.cmp_key(&r, "doe"), Ordering::Equal);
        assert_eq!(SearchField::City.cmp_key(&r, "ST CHARLES"), Ordering::Equal);
        assert_eq!(SearchField::State.cmp_key(&r, "MO"), Ordering::Equal);
        assert_eq!(SearchField::State.cmp_key(&r, "mo"), Ordering::Less);
        assert_eq!(SearchField::Phone.cmp_key(&r, "(847)-539-0126"), Ordering::Equal);
    }
}

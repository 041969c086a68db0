// crates/phonebook-core/src/model.rs
use crate::error::ValidationError;
use crate::format::{
    format_phone, normalize_state, split_full_name_key, title_case, validate_zip,
};
use crate::raw::{AddressRaw, RecordRaw};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address. The state is always a canonical 2-letter code and the
/// zip always five digits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AddressRaw")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zip: String,
}

/// A single phone book entry.
///
/// The canonical full-name key (`"Last, First Middle"`) is derived from the
/// name parts and recomputed by every name setter. Two records are equal
/// when both the key and the phone number match.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RecordRaw")]
pub struct Record {
    first_name: String,
    middle_name: String,
    last_name: String,
    #[serde(skip_serializing)]
    full_name_key: String,
    phone: String,
    address: Address,
}

// Commas delimit fields in the line format.
fn clean_field(s: &str) -> String {
    s.replace(',', "").trim().to_owned()
}

// First and last names are single words so that the line format's
// "First Middle Last" splits back into the same parts.
fn clean_name(s: &str, part: &'static str) -> Result<String, ValidationError> {
    let s = clean_field(s);
    if s.is_empty() {
        return Err(ValidationError::EmptyName(part));
    }
    if s.contains(char::is_whitespace) {
        return Err(ValidationError::MultiWordName(part, s));
    }
    Ok(title_case(&s))
}

impl Address {
    pub fn new(street: &str, city: &str, state: &str, zip: &str) -> Result<Self, ValidationError> {
        Ok(Address {
            street: clean_field(street),
            city: clean_field(city),
            state: normalize_state(state)?.to_owned(),
            zip: validate_zip(zip)?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    /// Two-letter state code, e.g. `"MO"`.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.street, self.city, self.state, self.zip)
    }
}

impl Record {
    /// Builds a record from its parts, normalizing casing and the phone
    /// number. `middle` may be empty.
    ///
    /// ```rust
    /// use phonebook_core::{Address, Record};
    ///
    /// let home = Address::new("114 Market St", "St Louis", "Missouri", "63403").unwrap();
    /// let r = Record::new("john", "", "doe", "6366435698", home).unwrap();
    /// assert_eq!(r.full_name(), "Doe, John");
    /// assert_eq!(r.phone(), "(636)-643-5698");
    /// assert_eq!(r.address().state(), "MO");
    /// ```
    pub fn new(
        first: &str,
        middle: &str,
        last: &str,
        phone: &str,
        address: Address,
    ) -> Result<Self, ValidationError> {
        let mut record = Record {
            first_name: String::new(),
            middle_name: String::new(),
            last_name: String::new(),
            full_name_key: String::new(),
            phone: format_phone(phone)?,
            address,
        };
        record.set_name(first, middle, last)?;
        Ok(record)
    }

    /// Builds a record from a canonical key such as `"Doe, John E"`.
    pub fn from_full_name(
        full_name: &str,
        phone: &str,
        address: Address,
    ) -> Result<Self, ValidationError> {
        let (first, middle, last) = split_full_name_key(full_name)?;
        Record::new(first, &middle, last, phone, address)
    }

    /// Replaces all name parts and recomputes the full-name key.
    pub fn set_name(&mut self, first: &str, middle: &str, last: &str) -> Result<(), ValidationError> {
        let first = clean_name(first, "first")?;
        let last = clean_name(last, "last")?;
        let middle = clean_field(middle)
            .split_whitespace()
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");

        self.first_name = first;
        self.middle_name = middle;
        self.last_name = last;
        self.full_name_key = full_name_key(&self.first_name, &self.middle_name, &self.last_name);
        Ok(())
    }

    /// Replaces the name from a canonical `"Last, First Middle"` key.
    pub fn set_full_name(&mut self, full_name: &str) -> Result<(), ValidationError> {
        let (first, middle, last) = split_full_name_key(full_name)?;
        self.set_name(first, &middle, last)
    }

    /// Replaces the phone number; the record is untouched on error.
    pub fn set_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phone = format_phone(phone)?;
        Ok(())
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = address;
    }

    /// The canonical `"Last, First Middle"` key.
    pub fn full_name(&self) -> &str {
        &self.full_name_key
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn middle_name(&self) -> Option<&str> {
        (!self.middle_name.is_empty()).then_some(self.middle_name.as_str())
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"First Middle Last"`, the form used by the line format.
    pub fn display_name(&self) -> String {
        match self.middle_name() {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Canonical `(ddd)-ddd-dddd` phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

fn full_name_key(first: &str, middle: &str, last: &str) -> String {
    if middle.is_empty() {
        format!("{last}, {first}")
    } else {
        format!("{last}, {first} {middle}")
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.full_name_key == other.full_name_key && self.phone == other.phone
    }
}

impl Eq for Record {}

/// Renders the line-format representation,
/// `First Middle Last, Street, City, ST, Zip, (ddd)-ddd-dddd`.
/// The substring crawler matches against this text.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.display_name(), self.address, self.phone)
    }
}

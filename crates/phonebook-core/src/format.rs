// crates/phonebook-core/src/format.rs

//! Boundary normalization: everything that enters the collection passes
//! through here first, so the core can rely on canonical phone numbers,
//! 2-letter state codes and 5-digit zips.

use crate::error::ValidationError;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Length of a canonical phone number, `(ddd)-ddd-dddd`.
pub const PHONE_LEN: usize = 14;

/// (name, code) for the 50 states plus DC.
const STATES: [(&str, &str); 51] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

// Uppercased name or code -> code.
static STATE_LOOKUP: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(STATES.len() * 2);
    for (name, code) in STATES {
        map.insert(name.to_ascii_uppercase(), code);
        map.insert(code.to_owned(), code);
    }
    map
});

/// Capitalizes the first character and leaves the rest untouched
/// (`"mcGrath"` -> `"McGrath"`).
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Normalizes a phone number to `(ddd)-ddd-dddd`.
///
/// Accepts either exactly ten digits or the canonical punctuated form.
///
/// ```rust
/// use phonebook_core::format::format_phone;
///
/// assert_eq!(format_phone("6366435698").unwrap(), "(636)-643-5698");
/// assert_eq!(format_phone("(636)-643-5698").unwrap(), "(636)-643-5698");
/// assert!(format_phone("636-643-569").is_err());
/// ```
pub fn format_phone(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    let invalid = || ValidationError::InvalidPhoneNumber(raw.to_owned());

    let digits: String = if raw.len() == 10 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.to_owned()
    } else if raw.len() == PHONE_LEN && is_canonical_phone(raw) {
        raw.bytes().filter(u8::is_ascii_digit).map(char::from).collect()
    } else {
        return Err(invalid());
    };

    Ok(format!("({})-{}-{}", &digits[0..3], &digits[3..6], &digits[6..10]))
}

fn is_canonical_phone(s: &str) -> bool {
    s.bytes().enumerate().all(|(i, b)| match i {
        0 => b == b'(',
        4 => b == b')',
        5 | 9 => b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Maps a full state name or 2-letter code (any case) to its code.
///
/// ```rust
/// use phonebook_core::format::normalize_state;
///
/// assert_eq!(normalize_state("missouri").unwrap(), "MO");
/// assert_eq!(normalize_state("il").unwrap(), "IL");
/// ```
pub fn normalize_state(raw: &str) -> Result<&'static str, ValidationError> {
    let key = raw.trim().to_ascii_uppercase();
    STATE_LOOKUP
        .get(&key)
        .copied()
        .ok_or_else(|| ValidationError::InvalidState(raw.trim().to_owned()))
}

/// Accepts exactly five ASCII digits.
pub fn validate_zip(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    if raw.len() == 5 && raw.bytes().all(|b| b.is_ascii_digit()) {
        Ok(raw.to_owned())
    } else {
        Err(ValidationError::InvalidZipCode(raw.to_owned()))
    }
}

/// Splits a display name, `"First Middle... Last"`, into
/// `(first, middle, last)`. Everything between the first and last word
/// becomes the middle name.
pub fn split_display_name(name: &str) -> Result<(&str, String, &str), ValidationError> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => Err(ValidationError::EmptyName("first")),
        [_] => Err(ValidationError::EmptyName("last")),
        [first, middle @ .., last] => Ok((*first, middle.join(" "), *last)),
    }
}

/// Splits a canonical key, `"Last, First Middle..."`, into
/// `(first, middle, last)`.
pub fn split_full_name_key(key: &str) -> Result<(&str, String, &str), ValidationError> {
    let (last, rest) = key
        .split_once(',')
        .ok_or(ValidationError::EmptyName("last"))?;
    let last = last.trim();
    if last.is_empty() {
        return Err(ValidationError::EmptyName("last"));
    }
    let mut words = rest.split_whitespace();
    let first = words.next().ok_or(ValidationError::EmptyName("first"))?;
    let middle = words.collect::<Vec<_>>().join(" ");
    Ok((first, middle, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_rejects_wrong_length_and_letters() {
        assert!(matches!(
            format_phone("12345"),
            Err(ValidationError::InvalidPhoneNumber(_))
        ));
        assert!(format_phone("63664356ab").is_err());
        assert!(format_phone("636-643-5698xx").is_err());
        assert_eq!(format_phone(" 8475390126 ").unwrap(), "(847)-539-0126");
    }

    #[test]
    fn state_accepts_names_and_codes() {
        assert_eq!(normalize_state("District of Columbia").unwrap(), "DC");
        assert_eq!(normalize_state("NEW YORK").unwrap(), "NY");
        assert_eq!(normalize_state("wy").unwrap(), "WY");
        assert_eq!(
            normalize_state("Ontario"),
            Err(ValidationError::InvalidState("Ontario".into()))
        );
        // Substrings of valid names are not states.
        assert!(normalize_state("New").is_err());
    }

    #[test]
    fn zip_must_be_five_digits() {
        assert_eq!(validate_zip("63303").unwrap(), "63303");
        assert!(validate_zip("6330").is_err());
        assert!(validate_zip("6330a").is_err());
        assert!(validate_zip("633031").is_err());
    }

    #[test]
    fn names_split_both_ways() {
        let (first, middle, last) = split_display_name("John Michael West Doe").unwrap();
        assert_eq!((first, middle.as_str(), last), ("John", "Michael West", "Doe"));

        let (first, middle, last) = split_full_name_key("Doe, John").unwrap();
        assert_eq!((first, middle.as_str(), last), ("John", "", "Doe"));

        assert_eq!(
            split_display_name("Cher"),
            Err(ValidationError::EmptyName("last"))
        );
        assert!(split_full_name_key("Doe John").is_err());
    }

    #[test]
    fn title_case_only_touches_first_letter() {
        assert_eq!(title_case("mcGrath"), "McGrath");
        assert_eq!(title_case(""), "");
    }
}

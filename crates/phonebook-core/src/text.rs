// crates/phonebook-core/src/text.rs

//! Text helpers shared by the comparators and the match crawler.
//!
//! Key comparisons are case-insensitive only, so `"Müller"` and `"Muller"`
//! stay distinct names. Accent folding is reserved for the crawler's
//! substring containment.

use std::cmp::Ordering;

/// Iterates the lowercase form of `s`.
///
/// Comparators walk this iterator directly so sorting never allocates.
pub fn lowered_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Case-insensitive total order on `a` and `b`.
#[inline]
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    lowered_chars(a).cmp(lowered_chars(b))
}

/// Iterates the folded form of `s`: each character is transliterated to
/// ASCII (via `deunicode`) and lowercased.
pub fn folded_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .flat_map(|c| deunicode::deunicode_char(c).unwrap_or("").chars())
        .flat_map(char::to_lowercase)
}

/// Convert a string into a folded key suitable for containment checks.
///
/// ```rust
/// use phonebook_core::text::fold_key;
///
/// assert_eq!(fold_key("Zoë"), "zoe");
/// assert_eq!(fold_key("ST LOUIS"), "st louis");
/// ```
pub fn fold_key(s: &str) -> String {
    folded_chars(s).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_ignores_case_but_not_accents() {
        assert_eq!(cmp_ignore_case("MÜLLER", "müller"), Ordering::Equal);
        assert_ne!(cmp_ignore_case("Müller", "MULLER"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("doe", "Dole"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Doe", "doe, john"), Ordering::Less);
    }

    #[test]
    fn folding_drops_accents() {
        assert_eq!(fold_key("Müller"), fold_key("MULLER"));
    }
}

use phonebook_core::prelude::*;
use phonebook_core::StorageFormat;
use std::path::Path;
use tempfile::tempdir;

const SAVED: &str = "\
Jake Kimball McGrath, 120 E. Cullerton St., Chicago, IL, 60616, 7089164236
John Doe, 114 Market St, St Louis, MO, 63403, (636)-643-5698
John Elmer Doe, 324 Main St, St Charles, missouri, 63303, 8475390126
Paul Jared Daniel Craft, 1600 Lilly Ave., Montrose, AK, 59846, 9706880123
";

fn loaded() -> PhoneBook {
    let mut book = PhoneBook::new();
    assert_eq!(book.read_lines(SAVED.as_bytes()).unwrap(), 4);
    book
}

#[test]
fn line_format_bulk_load() {
    let mut book = loaded();
    assert_eq!(book.len(), 4);
    assert!(book.capacity() >= 4);

    let craft = book.search_by_full_name("Craft, Paul Jared Daniel").unwrap();
    assert_eq!(craft.middle_name(), Some("Jared Daniel"));
    assert_eq!(craft.phone(), "(970)-688-0123");

    assert_eq!(book.search_by_last_name("Doe").len(), 2);
    assert_eq!(book.search_by_state("MO").unwrap().len(), 2);
}

#[test]
fn bulk_load_does_not_check_duplicates() {
    let mut book = loaded();
    book.read_lines(SAVED.as_bytes()).unwrap();
    assert_eq!(book.len(), 8);
    assert_eq!(book.search_by_last_name("McGrath").len(), 2);
}

fn round_trip(path: &Path) {
    let mut original = loaded();
    original.save_to_path(path).unwrap();

    let mut reloaded = PhoneBook::load_from_path(path).unwrap();
    assert_eq!(reloaded.len(), original.len());

    let expected: Vec<Record> = original.sorted_entries().to_vec();
    let actual: Vec<Record> = reloaded.sorted_entries().to_vec();
    assert_eq!(actual, expected);
    for (a, b) in actual.iter().zip(&expected) {
        assert_eq!(a.address(), b.address());
    }
}

#[test]
fn text_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = PhoneBook::default_path_in(dir.path());
    round_trip(&path);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("John Elmer Doe, 324 Main St, St Charles, MO, 63303, (847)-539-0126"));
}

#[test]
fn snapshot_round_trip() {
    let dir = tempdir().unwrap();
    round_trip(&dir.path().join("contacts.bin"));
}

#[cfg(feature = "json")]
#[test]
fn json_round_trip() {
    let dir = tempdir().unwrap();
    round_trip(&dir.path().join("contacts.json"));
}

#[cfg(feature = "json")]
#[test]
fn json_import_normalizes_fields() {
    let json = r#"[{
        "first_name": "ada",
        "middle_name": "",
        "last_name": "lovelace",
        "phone": "2125550100",
        "address": { "street": "1 Analytical Way", "city": "Albany", "state": "new york", "zip": "12207" }
    }]"#;
    let mut book = PhoneBook::read_json(json.as_bytes()).unwrap();
    let ada = book.search_by_phone("2125550100").unwrap().unwrap();
    assert_eq!(ada.full_name(), "Lovelace, Ada");
    assert_eq!(ada.address().state(), "NY");

    let bad = json.replace("12207", "1220");
    assert!(matches!(
        PhoneBook::read_json(bad.as_bytes()),
        Err(PhoneBookError::Json(_))
    ));
}

#[test]
fn saved_names_reload_with_the_same_key() {
    let home = Address::new("1600 Lilly Ave.", "Montrose", "AK", "59846").unwrap();
    let craft =
        Record::from_full_name("Craft, Paul Jared Daniel", "9706880123", home.clone()).unwrap();
    let mut book = PhoneBook::new();
    book.insert(craft.clone());

    let mut text = Vec::new();
    book.write_lines(&mut text).unwrap();
    let mut reloaded = PhoneBook::new();
    reloaded.read_lines(text.as_slice()).unwrap();
    assert_eq!(
        reloaded.search_by_full_name("Craft, Paul Jared Daniel"),
        Some(&craft)
    );

    // A multi-word last name could not be split back out of
    // "Martin Van Buren", so it is refused up front.
    assert!(matches!(
        Record::from_full_name("Van Buren, Martin", "2025550100", home),
        Err(ValidationError::MultiWordName("last", _))
    ));
    assert!(matches!(
        "Mary Ann Smith Jones, 1 Main St, Chicago, IL, 60616, 3125550100".parse::<Record>(),
        Ok(r) if r.full_name() == "Jones, Mary Ann Smith"
    ));
}

#[test]
fn format_follows_extension() {
    assert_eq!(StorageFormat::from_path(Path::new("a/PhoneBook.txt")), StorageFormat::Lines);
    assert_eq!(StorageFormat::from_path(Path::new("book")), StorageFormat::Lines);
    assert_eq!(StorageFormat::from_path(Path::new("b.BIN")), StorageFormat::Snapshot);
    assert_eq!(StorageFormat::from_path(Path::new("c.json")), StorageFormat::Json);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        PhoneBook::load_from_path(dir.path().join("nope.txt")),
        Err(PhoneBookError::Io(_))
    ));
}

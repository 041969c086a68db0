//! Error handling example for phonebook-core
//!
//! This example demonstrates the errors callers are expected to handle.

use phonebook_core::format::format_phone;
use phonebook_core::prelude::*;

fn main() -> Result<()> {
    println!("=== phonebook-rs Error Handling Example ===\n");

    // Example 1: Validation happens at construction
    println!("--- Example 1: Rejected input ---");
    let attempts = [
        ("Nowhere", "63303"),
        ("MO", "633"),
        ("MO", "63303"),
    ];
    for (state, zip) in attempts {
        match Address::new("1 Main St", "Springfield", state, zip) {
            Ok(addr) => println!("  Accepted: {addr}"),
            Err(e) => println!("  Rejected: {e}"),
        }
    }
    for phone in ["636-643-569", "(636)-643-5698", "6366435698x"] {
        match format_phone(phone) {
            Ok(p) => println!("  Phone ok: {p}"),
            Err(e) => println!("  Rejected: {e}"),
        }
    }
    println!();

    // Example 2: Deleting from an empty book
    println!("--- Example 2: Empty collection ---");
    let mut book = PhoneBook::new();
    match book.delete_by_full_name("Doe, John") {
        Err(PhoneBookError::EmptyCollection) => println!("  Nothing to delete yet"),
        other => println!("  Unexpected: {other:?}"),
    }
    println!();

    // Example 3: Misses are errors for delete, empty results for search
    println!("--- Example 3: Missing entries ---");
    let home = Address::new("114 Market St", "St Louis", "MO", "63403")?;
    book.insert(Record::from_full_name("Doe, John", "6366435698", home)?);

    println!("  search_by_full_name: {:?}", book.search_by_full_name("Roe, Jane").is_some());
    println!("  search_by_last_name: {} hits", book.search_by_last_name("Roe").len());
    if let Err(e) = book.delete_by_full_name("Roe, Jane") {
        println!("  delete: {e}");
    }
    println!();

    // Example 4: Bad lines abort the load
    println!("--- Example 4: Parse errors ---");
    let text = "Jane Roe, 1 Main St, Chicago, IL, 60616, 3125550100\nnot a record\n";
    match book.read_lines(text.as_bytes()) {
        Ok(n) => println!("  Loaded {n}"),
        Err(e) => println!("  {e} (book still has {} entries)", book.len()),
    }

    Ok(())
}

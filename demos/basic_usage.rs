//! Basic usage example for phonebook-core
//!
//! This example demonstrates how to:
//! - Build a book from fields and from saved lines
//! - Run every kind of search
//! - Update and delete entries
//! - Watch the capacity grow and shrink

use phonebook_core::prelude::*;

const SAVED: &str = "\
John Doe, 114 Market St, St Louis, MO, 63403, 6366435698
John Elmer Doe, 324 Main St, St Charles, missouri, 63303, 8475390126
Jake Kimball McGrath, 120 E. Cullerton St., Chicago, IL, 60616, 7089164236
Paul Jared Daniel Craft, 1600 Lilly Ave., Montrose, AK, 59846, 9706880123
";

fn main() -> Result<()> {
    println!("=== phonebook-rs Basic Usage Example ===\n");

    // Example 1: Load entries in the line format
    println!("--- Example 1: Bulk load ---");
    let mut book = PhoneBook::new();
    let loaded = book.read_lines(SAVED.as_bytes())?;
    println!("Loaded {loaded} entries, capacity {}\n", book.capacity());

    // Example 2: Insert a record built from parts
    println!("--- Example 2: Insert ---");
    let home = Address::new("9 Elm St", "Austin", "Texas", "73301")?;
    book.insert(Record::new("ada", "", "lovelace", "5125550100", home)?);
    for record in book.sorted_entries() {
        println!("  {record}");
    }
    println!();

    // Example 3: Exact lookups
    println!("--- Example 3: Exact lookups ---");
    if let Some(r) = book.search_by_full_name("Doe, John Elmer") {
        println!("By name:  {r}");
    }
    if let Some(r) = book.search_by_phone("(708)-916-4236")? {
        println!("By phone: {r}");
    }
    println!();

    // Example 4: Multi-match lookups
    println!("--- Example 4: Range lookups ---");
    for r in book.search_by_last_name("Doe") {
        println!("Last name Doe: {}", r.display_name());
    }
    for r in book.search_by_state("Missouri")? {
        println!("In MO: {}", r.display_name());
    }
    for r in book.search_by_city("chicago") {
        println!("In Chicago: {}", r.display_name());
    }
    println!();

    // Example 5: Update in place
    println!("--- Example 5: Update ---");
    let moved = book.update_by_phone("6366435698", |r| {
        r.set_address(Address::new("1 Wacker Dr", "Chicago", "IL", "60601")?);
        Ok(())
    })?;
    println!("Moved: {moved}\n");

    // Example 6: Delete until the book shrinks
    println!("--- Example 6: Delete ---");
    for name in ["Craft, Paul Jared Daniel", "McGrath, Jake Kimball", "Lovelace, Ada"] {
        let removed = book.delete_by_full_name(name)?;
        let stats = book.stats();
        println!(
            "Removed {} -> {} entries, capacity {}",
            removed.display_name(),
            stats.entries,
            stats.capacity
        );
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}

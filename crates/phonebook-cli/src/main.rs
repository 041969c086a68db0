//! phonebook: command-line front end for phonebook-core
//!
//! Every run loads the book file (an empty book if it does not exist yet),
//! executes one command and writes the file back if the command changed
//! anything.
//!
//! Usage examples
//! --------------
//!
//! - Add a contact
//!   $ phonebook add --first John --last Doe --street "114 Market St" \
//!       --city "St Louis" --state MO --zip 63403 --phone 6366435698
//!   $ phonebook add-line "John Elmer Doe, 324 Main St, St Charles, MO, 63303, 8475390126"
//!
//! - Search
//!   $ phonebook search last Doe
//!   $ phonebook search full "Doe, John"
//!   $ phonebook search state missouri
//!
//! - Change or remove a contact
//!   $ phonebook update --phone 6366435698 --city Chicago --state IL --zip 60616
//!   $ phonebook delete --name "Doe, John Elmer"
//!
//! Set `RUST_LOG=phonebook_core=debug` to trace sorts and resizes.
mod args;

use crate::args::{CliArgs, Commands, SearchBy, Target};
use anyhow::{bail, Context};
use clap::Parser;
use phonebook_core::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,phonebook_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();
    let path = match args.input {
        Some(p) => p,
        None => default_path()?,
    };

    let mut book = open_book(&path)?;
    if run(&mut book, args.command)? {
        book.save_to_path(&path)
            .with_context(|| format!("saving {}", path.display()))?;
    }
    Ok(())
}

fn default_path() -> anyhow::Result<PathBuf> {
    let home = dirs::home_dir().context("no home directory; pass --input")?;
    Ok(PhoneBook::default_path_in(home))
}

fn open_book(path: &Path) -> anyhow::Result<PhoneBook> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no phone book file yet, starting empty");
        return Ok(PhoneBook::new());
    }
    PhoneBook::load_from_path(path).with_context(|| format!("loading {}", path.display()))
}

/// Executes one command. Returns whether the book changed.
fn run(book: &mut PhoneBook, command: Commands) -> anyhow::Result<bool> {
    match command {
        Commands::Add {
            name,
            address,
            phone,
            overwrite,
        } => {
            let address = Address::new(&address.street, &address.city, &address.state, &address.zip)?;
            let record = Record::new(&name.first, &name.middle, &name.last, &phone, address)?;
            add(book, record, overwrite)?;
        }

        Commands::AddLine { line, overwrite } => {
            let record: Record = line.parse()?;
            add(book, record, overwrite)?;
        }

        Commands::Delete { target } => {
            let removed = match target {
                Target { name: Some(name), .. } => book.delete_by_full_name(&name)?,
                Target { phone: Some(phone), .. } => book.delete_by_phone(&phone)?,
                Target { .. } => bail!("pass --name or --phone"),
            };
            println!("Deleted: {removed}");
        }

        Commands::Update { target, changes } => {
            if changes.is_empty() {
                bail!("nothing to change");
            }
            let updated = match target {
                Target { name: Some(name), .. } => {
                    book.update_by_full_name(&name, |r| changes.apply(r))?
                }
                Target { phone: Some(phone), .. } => {
                    book.update_by_phone(&phone, |r| changes.apply(r))?
                }
                Target { .. } => bail!("pass --name or --phone"),
            };
            println!("Updated: {updated}");
        }

        Commands::Search { by, query } => {
            let hits: Vec<&Record> = match by {
                SearchBy::Full => book.search_by_full_name(&query).into_iter().collect(),
                SearchBy::Phone => book.search_by_phone(&query)?.into_iter().collect(),
                SearchBy::First => book.search_by_first_name(&query),
                SearchBy::Last => book.search_by_last_name(&query),
                SearchBy::City => book.search_by_city(&query),
                SearchBy::State => book.search_by_state(&query)?,
            };
            if hits.is_empty() {
                println!("No contacts found for: {query}");
            }
            for record in hits {
                println!("{record}");
            }
            return Ok(false);
        }

        Commands::List { json } => {
            list(book, json)?;
            return Ok(false);
        }

        Commands::Stats => {
            let stats = book.stats();
            println!("Phone book statistics:");
            println!("  Entries: {}", stats.entries);
            println!("  Capacity: {}", stats.capacity);
            return Ok(false);
        }
    }
    Ok(true)
}

/// Inserts `record` unless a contact with the same full name or phone
/// exists. With `overwrite`, those contacts are removed first.
fn add(book: &mut PhoneBook, record: Record, overwrite: bool) -> anyhow::Result<()> {
    let mut clashes: Vec<Record> = Vec::new();
    if let Some(same_name) = book.search_by_full_name(record.full_name()) {
        clashes.push(same_name.clone());
    }
    if let Some(same_phone) = book.search_by_phone(record.phone())? {
        if !clashes.contains(same_phone) {
            clashes.push(same_phone.clone());
        }
    }

    if !clashes.is_empty() {
        if !overwrite {
            let listed: Vec<String> = clashes.iter().map(ToString::to_string).collect();
            bail!(
                "contact already exists (use --overwrite to replace):\n  {}",
                listed.join("\n  ")
            );
        }
        for clash in &clashes {
            book.delete(clash)?;
        }
    }

    println!("Added: {record}");
    book.insert(record);
    Ok(())
}

fn list(book: &mut PhoneBook, json: bool) -> anyhow::Result<()> {
    if json {
        #[cfg(feature = "json")]
        {
            println!("{}", serde_json::to_string_pretty(book.sorted_entries())?);
            return Ok(());
        }
        #[cfg(not(feature = "json"))]
        bail!("JSON output requires the 'json' feature");
    }
    for record in book.sorted_entries() {
        println!("{record}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Commands {
        let mut full = vec!["phonebook"];
        full.extend_from_slice(argv);
        CliArgs::try_parse_from(full).unwrap().command
    }

    fn seeded() -> PhoneBook {
        let mut book = PhoneBook::new();
        let cmd = parse(&[
            "add-line",
            "John Doe, 114 Market St, St Louis, MO, 63403, 6366435698",
        ]);
        assert!(run(&mut book, cmd).unwrap());
        book
    }

    #[test]
    fn duplicate_add_needs_overwrite() {
        let mut book = seeded();
        let line = "John Doe, 9 Elm St, Chicago, IL, 60616, 3125550100";
        assert!(run(&mut book, parse(&["add-line", line])).is_err());
        assert_eq!(book.len(), 1);

        assert!(run(&mut book, parse(&["add-line", line, "--overwrite"])).unwrap());
        assert_eq!(book.len(), 1);
        let john = book.search_by_full_name("Doe, John").unwrap();
        assert_eq!(john.address().city(), "Chicago");
    }

    #[test]
    fn update_keeps_untouched_fields() {
        let mut book = seeded();
        let cmd = parse(&["update", "--phone", "6366435698", "--middle", "elmer", "--state", "illinois"]);
        assert!(run(&mut book, cmd).unwrap());

        let john = book.search_by_full_name("Doe, John Elmer").unwrap();
        assert_eq!(john.address().state(), "IL");
        assert_eq!(john.address().city(), "St Louis");
        assert_eq!(john.phone(), "(636)-643-5698");
    }

    #[test]
    fn queries_do_not_mark_the_book_dirty() {
        let mut book = seeded();
        assert!(!run(&mut book, parse(&["search", "last", "Doe"])).unwrap());
        assert!(!run(&mut book, parse(&["stats"])).unwrap());
        assert!(!run(&mut book, parse(&["list"])).unwrap());
    }

    #[test]
    fn delete_requires_exactly_one_target() {
        assert!(CliArgs::try_parse_from(["phonebook", "delete"]).is_err());
        assert!(CliArgs::try_parse_from([
            "phonebook", "delete", "--name", "Doe, John", "--phone", "6366435698"
        ])
        .is_err());

        let mut book = seeded();
        assert!(run(&mut book, parse(&["delete", "--name", "doe, john"])).unwrap());
        assert!(book.is_empty());
    }
}

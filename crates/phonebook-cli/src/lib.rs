//! phonebook-cli
//! =============
//!
//! Command-line interface for the `phonebook-core` contact collection.
//!
//! The binary (`phonebook`) is the deliverable. This library target only
//! exists so docs.rs renders an overview page.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cargo install phonebook-cli
//! phonebook --help
//! phonebook add-line "John Doe, 114 Market St, St Louis, MO, 63403, 6366435698"
//! phonebook search last Doe
//! phonebook list --json
//! ```
//!
//! The book lives in `~/PhoneBook.txt` unless `--input` or `PHONEBOOK_FILE`
//! names another file. A `.json` or `.bin` extension switches the storage
//! format.
//!
//! For programmatic access use [`phonebook-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

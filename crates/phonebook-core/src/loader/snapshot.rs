// crates/phonebook-core/src/loader/snapshot.rs
use crate::book::PhoneBook;
use crate::error::Result;
use crate::model::Record;
use bincode::Options;
use std::io::{Read, Write};

// Upper bound on a snapshot's decoded size, against corrupt length prefixes.
const SNAPSHOT_LIMIT: u64 = 64 * 1024 * 1024;

fn options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(SNAPSHOT_LIMIT)
}

impl PhoneBook {
    /// Serializes the live entries with bincode. Capacity is not stored; a
    /// reloaded book grows back to fit.
    pub fn write_snapshot<W: Write>(&self, writer: W) -> Result<()> {
        options().serialize_into(writer, &self.entries)?;
        Ok(())
    }

    /// Rebuilds a book from [`PhoneBook::write_snapshot`] output. Every
    /// record is re-validated on the way in.
    pub fn read_snapshot<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = options().deserialize_from(reader)?;
        Ok(records.into_iter().collect())
    }
}

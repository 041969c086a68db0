// crates/phonebook-core/src/loader/json.rs
#![cfg(feature = "json")]

use crate::book::PhoneBook;
use crate::error::Result;
use crate::model::Record;
use std::io::{Read, Write};

impl PhoneBook {
    /// Pretty-printed JSON array of entries, in storage order.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    /// Reads a JSON array of entries. Names, phones, states and zips are
    /// normalized exactly as if the entries had been typed in.
    pub fn read_json<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_reader(reader)?;
        Ok(records.into_iter().collect())
    }
}

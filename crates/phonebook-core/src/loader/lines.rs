// crates/phonebook-core/src/loader/lines.rs

//! The line format: one entry per line,
//! `First Middle Last, Street, City, State, Zip, Phone`.

use crate::book::PhoneBook;
use crate::error::{PhoneBookError, Result};
use crate::format::split_display_name;
use crate::model::{Address, Record};
use std::io::{BufRead, Write};
use std::str::FromStr;

impl FromStr for Record {
    type Err = PhoneBookError;

    /// Parses one line of the line format. The state may be a full name
    /// and the phone either form accepted by
    /// [`format_phone`](crate::format::format_phone).
    ///
    /// ```rust
    /// use phonebook_core::Record;
    ///
    /// let r: Record = "John Elmer Doe, 324 Main St, St Charles, missouri, 63303, 8475390126"
    ///     .parse()
    ///     .unwrap();
    /// assert_eq!(r.full_name(), "Doe, John Elmer");
    /// assert_eq!(r.address().state(), "MO");
    /// ```
    fn from_str(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [name, street, city, state, zip, phone] = fields.as_slice() else {
            return Err(PhoneBookError::InvalidData(format!(
                "expected 6 comma-separated fields, found {}",
                fields.len()
            )));
        };

        let (first, middle, last) = split_display_name(name)?;
        let address = Address::new(street, city, state, zip)?;
        Ok(Record::new(first, &middle, last, phone, address)?)
    }
}

impl PhoneBook {
    /// Bulk-loads entries from the line format, skipping blank lines. No
    /// duplicate checks are made. A bad line aborts the whole load and
    /// leaves the book untouched.
    pub fn read_lines<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let mut records = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let record = line.parse::<Record>().map_err(|e| PhoneBookError::Parse {
                line: i + 1,
                message: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(self.extend_entries(records))
    }

    /// Writes every entry in storage order, one per line.
    pub fn write_lines<W: Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        for record in &self.entries {
            writeln!(writer, "{record}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_wrong_field_count() {
        let err = "John Doe, 1 Main St, Chicago, IL, 60616".parse::<Record>();
        assert!(matches!(err, Err(PhoneBookError::InvalidData(_))));
    }

    #[test]
    fn surfaces_validation_errors() {
        let err = "John Doe, 1 Main St, Chicago, IL, 6061, 7089164236".parse::<Record>();
        assert!(matches!(err, Err(PhoneBookError::Validation(_))));
    }

    #[test]
    fn bad_line_reports_its_number_and_loads_nothing() {
        let text = "\
John Doe, 114 Market St, St Louis, MO, 63403, 6366435698

Jane Roe, 1 Main St, Chicago, Illinois, 60616, 555
";
        let mut book = PhoneBook::new();
        match book.read_lines(text.as_bytes()) {
            Err(PhoneBookError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
        assert!(book.is_empty());
    }
}

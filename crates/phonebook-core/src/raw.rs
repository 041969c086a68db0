// crates/phonebook-core/src/raw.rs

//! Unvalidated mirrors of [`Record`] and [`Address`] as they appear in
//! JSON exports and binary snapshots. Deserialization lands here first and
//! is then pushed through the validating constructors, so a tampered file
//! can never put a non-canonical phone number or state into the book.

use crate::error::ValidationError;
use crate::model::{Address, Record};
use serde::Deserialize;

/// Field order must match the `Serialize` layout of [`Address`].
#[derive(Debug, Deserialize)]
pub struct AddressRaw {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Field order must match the `Serialize` layout of [`Record`].
#[derive(Debug, Deserialize)]
pub struct RecordRaw {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: AddressRaw,
}

impl TryFrom<AddressRaw> for Address {
    type Error = ValidationError;

    fn try_from(raw: AddressRaw) -> Result<Self, Self::Error> {
        Address::new(&raw.street, &raw.city, &raw.state, &raw.zip)
    }
}

impl TryFrom<RecordRaw> for Record {
    type Error = ValidationError;

    fn try_from(raw: RecordRaw) -> Result<Self, Self::Error> {
        let address = Address::try_from(raw.address)?;
        Record::new(
            &raw.first_name,
            &raw.middle_name,
            &raw.last_name,
            &raw.phone,
            address,
        )
    }
}

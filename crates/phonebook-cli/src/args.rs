use clap::{Args, Parser, Subcommand, ValueEnum};
use phonebook_core::{Address, Record, ValidationError};
use std::path::PathBuf;

/// CLI arguments for phonebook
#[derive(Debug, Parser)]
#[command(
    name = "phonebook",
    version,
    about = "Add, find, update and delete contacts in a phone book file"
)]
pub struct CliArgs {
    /// Phone book file (default: ~/PhoneBook.txt). The extension picks the
    /// format: .txt lines, .json, or a .bin snapshot.
    #[arg(short = 'i', long = "input", env = "PHONEBOOK_FILE", global = true)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add a contact from individual fields
    Add {
        #[command(flatten)]
        name: NameArgs,

        #[command(flatten)]
        address: AddressArgs,

        /// Phone number, 10 digits or (ddd)-ddd-dddd
        #[arg(long)]
        phone: String,

        /// Replace existing contacts with the same name or phone
        #[arg(long)]
        overwrite: bool,
    },

    /// Add a contact from one line: "First Middle Last, Street, City, State, Zip, Phone"
    AddLine {
        line: String,

        /// Replace existing contacts with the same name or phone
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete one contact by full name or phone
    Delete {
        #[command(flatten)]
        target: Target,
    },

    /// Change fields of one contact
    Update {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        changes: Changes,
    },

    /// Search contacts by one field
    Search {
        #[arg(value_enum)]
        by: SearchBy,

        /// Exact value to anchor on (full name as "Last, First Middle")
        query: String,
    },

    /// Print every contact sorted by full name
    List {
        /// Print as JSON instead of the line format (needs the 'json' feature)
        #[arg(long)]
        json: bool,
    },

    /// Show entry count and capacity
    Stats,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(long)]
    pub first: String,

    #[arg(long, default_value = "")]
    pub middle: String,

    #[arg(long)]
    pub last: String,
}

#[derive(Debug, Args)]
pub struct AddressArgs {
    #[arg(long)]
    pub street: String,

    #[arg(long)]
    pub city: String,

    /// Two-letter code or full state name
    #[arg(long)]
    pub state: String,

    #[arg(long)]
    pub zip: String,
}

/// Selects the contact to delete or update.
#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Target {
    /// Full name as "Last, First Middle"
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,
}

#[derive(Debug, Args)]
pub struct Changes {
    #[arg(long)]
    pub first: Option<String>,

    #[arg(long)]
    pub middle: Option<String>,

    #[arg(long)]
    pub last: Option<String>,

    #[arg(long)]
    pub street: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long = "new-phone")]
    pub new_phone: Option<String>,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
            && self.middle.is_none()
            && self.last.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip.is_none()
            && self.new_phone.is_none()
    }

    fn touches_name(&self) -> bool {
        self.first.is_some() || self.middle.is_some() || self.last.is_some()
    }

    fn touches_address(&self) -> bool {
        self.street.is_some() || self.city.is_some() || self.state.is_some() || self.zip.is_some()
    }

    /// Applies the changes on top of `record`, keeping unchanged fields.
    pub fn apply(&self, record: &mut Record) -> Result<(), ValidationError> {
        if self.touches_name() {
            let first = self.first.as_deref().unwrap_or(record.first_name()).to_owned();
            let middle = match &self.middle {
                Some(m) => m.clone(),
                None => record.middle_name().unwrap_or_default().to_owned(),
            };
            let last = self.last.as_deref().unwrap_or(record.last_name()).to_owned();
            record.set_name(&first, &middle, &last)?;
        }
        if self.touches_address() {
            let current = record.address();
            let address = Address::new(
                self.street.as_deref().unwrap_or(current.street()),
                self.city.as_deref().unwrap_or(current.city()),
                self.state.as_deref().unwrap_or(current.state()),
                self.zip.as_deref().unwrap_or(current.zip()),
            )?;
            record.set_address(address);
        }
        if let Some(phone) = &self.new_phone {
            record.set_phone(phone)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchBy {
    First,
    Last,
    Full,
    Phone,
    City,
    State,
}

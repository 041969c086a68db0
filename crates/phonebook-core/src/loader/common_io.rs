// crates/phonebook-core/src/loader/common_io.rs
use crate::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::{read::GzDecoder, write::GzEncoder, Compression};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMode {
    Gzip,
    None,
}

impl CompressionMode {
    /// Binary snapshots are gzipped whenever 'compact' is enabled.
    pub fn for_snapshots() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

/// Opens a file, buffers it, and optionally wraps it in a Gzip decoder.
pub fn open_stream(path: &Path, compression: CompressionMode) -> Result<Box<dyn Read>> {
    let reader = BufReader::new(File::open(path)?);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                Ok(Box::new(GzDecoder::new(reader)))
            }
            #[cfg(not(feature = "compact"))]
            {
                drop(reader);
                Err(crate::error::PhoneBookError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ))
            }
        }
        CompressionMode::None => Ok(Box::new(reader)),
    }
}

/// Creates `path` and hands `body` a (possibly compressing) writer. The
/// gzip trailer and buffers are flushed before returning.
pub fn write_with<F>(path: &Path, compression: CompressionMode, body: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut writer = BufWriter::new(File::create(path)?);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                body(&mut encoder)?;
                encoder.finish()?.flush()?;
            }
            #[cfg(not(feature = "compact"))]
            {
                drop(body);
                return Err(crate::error::PhoneBookError::InvalidData(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            body(&mut writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

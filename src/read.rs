use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{Result, TestingFilesError, BUFFER_CAPACITY, LOG_PREFIX};

/// What to do when fewer bytes arrive than announced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    /// A short read is an error
    #[default]
    Strict,
    /// A short read is logged and the received bytes are kept
    Lenient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Complete(Vec<u8>),
    Short { bytes: Vec<u8>, expected: u64 },
}

impl ReadOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    pub fn resolve(self, mode: ReadMode) -> Result<Vec<u8>> {
        match (self, mode) {
            (Self::Complete(bytes), _) => Ok(bytes),
            (Self::Short { bytes, expected }, ReadMode::Strict) => {
                Err(TestingFilesError::ShortRead {
                    expected,
                    actual: bytes.len() as u64,
                })
            }
            (Self::Short { bytes, expected }, ReadMode::Lenient) => {
                warn!(
                    "{} content is truncated by {} bytes",
                    LOG_PREFIX,
                    expected.saturating_sub(bytes.len() as u64)
                );
                Ok(bytes)
            }
        }
    }
}

/// Read up to `expected` bytes, telling a clean end apart from an early EOF.
///
/// Bytes past `expected` are left in the reader.
pub fn read_expected<R: Read + ?Sized>(
    reader: &mut R,
    expected: u64,
) -> io::Result<ReadOutcome> {
    // the announced count is not trusted for the allocation
    let mut bytes =
        Vec::with_capacity(expected.min(BUFFER_CAPACITY as u64) as usize);
    Read::take(&mut *reader, expected).read_to_end(&mut bytes)?;

    if bytes.len() as u64 == expected {
        Ok(ReadOutcome::Complete(bytes))
    } else {
        Ok(ReadOutcome::Short { bytes, expected })
    }
}

fn read_sized<R: Read + ?Sized>(
    reader: &mut R,
    expected: u64,
    mode: ReadMode,
) -> Result<Vec<u8>> {
    read_expected(reader, expected)?.resolve(mode)
}

/// Read a whole file, sized by its metadata.
///
/// The content is a snapshot of the length seen when the file was opened:
/// bytes appended after that are not read.
pub fn read_file<P: AsRef<Path>>(path: P, mode: ReadMode) -> Result<Vec<u8>> {
    let mut file = File::open(path.as_ref())?;
    let expected = file.metadata()?.len();
    read_sized(&mut file, expected, mode)
}

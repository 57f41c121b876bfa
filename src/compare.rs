use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;

use log::{debug, trace};

use crate::Result;

/// Location of the first divergence between a got and a want byte source.
///
/// When one side is a strict prefix of the other, `offset` is the length
/// of the shorter side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub offset: u64,
    pub got_len: u64,
    pub want_len: u64,
}

impl Mismatch {
    /// Signed difference `got_len - want_len`
    pub fn len_delta(&self) -> i64 {
        self.got_len as i64 - self.want_len as i64
    }

    pub fn is_len_mismatch(&self) -> bool {
        self.got_len != self.want_len
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "first difference at byte {} (got {} bytes, want {} bytes, delta {})",
            self.offset,
            self.got_len,
            self.want_len,
            self.len_delta()
        )
    }
}

/// Byte-for-byte comparison shared by every comparator.
///
/// Returns `None` only when both slices have the same length and the same
/// content.
pub fn compare_bytes(got: &[u8], want: &[u8]) -> Option<Mismatch> {
    let offset = got
        .iter()
        .zip(want.iter())
        .position(|(g, w)| g != w)
        .unwrap_or_else(|| got.len().min(want.len()));

    if offset == got.len() && got.len() == want.len() {
        return None;
    }

    Some(Mismatch {
        offset: offset as u64,
        got_len: got.len() as u64,
        want_len: want.len() as u64,
    })
}

fn check(got: &[u8], want: &[u8], want_path: &Path) -> Result<()> {
    match compare_bytes(got, want) {
        None => {
            trace!("{} bytes match {}", got.len(), want_path.display());
            Ok(())
        }
        Some(mismatch) => {
            debug!("{} differs: {}", want_path.display(), mismatch);
            Err(mismatch.into())
        }
    }
}

/// Compare the content of the got file with the want file
pub fn file_compare<P: AsRef<Path>, Q: AsRef<Path>>(
    got_path: P,
    want_path: Q,
) -> Result<()> {
    trace!(
        "Comparing {} with {}",
        got_path.as_ref().display(),
        want_path.as_ref().display()
    );
    let got = fs::read(got_path.as_ref())?;
    let want = fs::read(want_path.as_ref())?;
    check(&got, &want, want_path.as_ref())
}

/// Compare the current content of a buffer with the want file
pub fn buffer_compare<P: AsRef<Path>>(got: &[u8], want_path: P) -> Result<()> {
    let want = fs::read(want_path.as_ref())?;
    check(got, &want, want_path.as_ref())
}

/// Drain the reader and compare what it yielded with the want file.
///
/// The reader must be positioned at the start of the content. It is
/// borrowed, closing it stays with the owner.
pub fn reader_compare<R: Read + ?Sized, P: AsRef<Path>>(
    got: &mut R,
    want_path: P,
) -> Result<()> {
    let mut got_bytes = vec![];
    got.read_to_end(&mut got_bytes)?;
    let want = fs::read(want_path.as_ref())?;
    check(&got_bytes, &want, want_path.as_ref())
}

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::trace;

use crate::{Result, BUFFER_CAPACITY};

/// Write a fixed byte slice to the path, creating or truncating the file.
///
/// The parent directory must exist. On error the file may be left
/// incomplete.
pub fn string_to_file<P: AsRef<Path>, B: AsRef<[u8]>>(
    path: P,
    bytes: B,
) -> Result<()> {
    let bytes = bytes.as_ref();
    let mut file = File::create(path.as_ref())?;
    file.write_all(bytes)?;
    file.flush()?;

    trace!("{} bytes written to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

/// Drain the buffer into the path.
///
/// The buffer is empty once this returns `Ok`, and left as it was on error.
pub fn buffer_to_file<P: AsRef<Path>>(
    path: P,
    buffer: &mut Vec<u8>,
) -> Result<()> {
    string_to_file(path, buffer.as_slice())?;
    buffer.clear();
    Ok(())
}

/// Copy everything the reader yields into the path and return the byte
/// count. The reader is borrowed and stays open.
pub fn reader_to_file<P: AsRef<Path>, R: Read + ?Sized>(
    path: P,
    reader: &mut R,
) -> Result<u64> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::with_capacity(BUFFER_CAPACITY, file);
    let copied = io::copy(reader, &mut writer)?;
    writer.flush()?;

    trace!("{} bytes copied to {}", copied, path.as_ref().display());
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{Cursor, ErrorKind};
    use tempdir::TempDir;

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "source broke"))
        }
    }

    #[test]
    fn string_to_file_truncates() {
        let dir = TempDir::new("string_to_file").unwrap();
        let path = dir.path().join("a.txt");

        string_to_file(&path, "a much longer first version").unwrap();
        string_to_file(&path, "short").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"short");
    }

    #[test]
    fn missing_parent_fails() {
        let dir = TempDir::new("string_to_file").unwrap();
        let path = dir.path().join("missing").join("a.txt");

        let err = string_to_file(&path, "content").unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn buffer_is_drained() {
        let dir = TempDir::new("buffer_to_file").unwrap();
        let path = dir.path().join("buffer.txt");
        let mut buffer = b"buffered content".to_vec();

        buffer_to_file(&path, &mut buffer).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(fs::read(&path).unwrap(), b"buffered content");
    }

    #[test]
    fn buffer_kept_on_failure() {
        let dir = TempDir::new("buffer_to_file").unwrap();
        let path = dir.path().join("missing").join("buffer.txt");
        let mut buffer = b"buffered content".to_vec();

        assert!(buffer_to_file(&path, &mut buffer).is_err());
        assert_eq!(buffer, b"buffered content");
    }

    #[test]
    fn reader_copied() {
        let dir = TempDir::new("reader_to_file").unwrap();
        let path = dir.path().join("reader.txt");
        let content = vec![7u8; 3 * BUFFER_CAPACITY + 5];
        let mut reader = Cursor::new(content.clone());

        let copied = reader_to_file(&path, &mut reader).unwrap();
        assert_eq!(copied, content.len() as u64);
        assert_eq!(fs::read(&path).unwrap(), content);
    }

    #[test]
    fn reader_failure_surfaces() {
        let dir = TempDir::new("reader_to_file").unwrap();
        let path = dir.path().join("reader.txt");

        let err = reader_to_file(&path, &mut FailingReader).unwrap_err();
        assert!(err.is_io());
    }
}

pub mod compare;
mod errors;
pub mod fixture;
pub mod output_dir;
pub mod read;
pub mod write;

pub use compare::{
    buffer_compare, compare_bytes, file_compare, reader_compare, Mismatch,
};
pub use errors::{Result, TestingFilesError};
pub use fixture::{replace_all, Fixture, FixtureConfig};
pub use output_dir::{output_dir, scratch_path};
pub use read::{read_expected, read_file, ReadMode, ReadOutcome};
pub use write::{buffer_to_file, reader_to_file, string_to_file};

pub const LOG_PREFIX: &str = "[testing-files]";

pub const WANT_FILENAME: &str = "originalpage.html";
pub const UPDATED_FILENAME: &str = "updatedpage.html";
pub const OUTPUT_DIR: &str = "output";

pub const TECH_NAME: &str = "Google";
pub const MY_TECH: &str = "MyTech";

const KILOBYTE: usize = 1024;
const BUFFER_CAPACITY: usize = 64 * KILOBYTE;

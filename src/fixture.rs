use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::output_dir::{output_dir, scratch_path};
use crate::read::{read_file, ReadMode};
use crate::write::string_to_file;
use crate::{
    Result, LOG_PREFIX, MY_TECH, OUTPUT_DIR, TECH_NAME, UPDATED_FILENAME,
    WANT_FILENAME,
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub want_file: PathBuf,
    pub updated_file: PathBuf,
    pub output_dir: PathBuf,
    pub read_mode: ReadMode,
    pub term: String,
    pub replacement: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            want_file: PathBuf::from(WANT_FILENAME),
            updated_file: PathBuf::from(UPDATED_FILENAME),
            output_dir: PathBuf::from(OUTPUT_DIR),
            read_mode: ReadMode::default(),
            term: TECH_NAME.to_owned(),
            replacement: MY_TECH.to_owned(),
        }
    }
}

impl FixtureConfig {
    /// Load a config from JSON, missing fields take their default value
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = fs::File::open(path.as_ref())?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }
}

/// Reference page shared by the checks of one test or benchmark.
///
/// Built once by the caller and passed around explicitly.
#[derive(Debug, Clone)]
pub struct Fixture {
    config: FixtureConfig,
    want: Vec<u8>,
}

impl Fixture {
    /// Build the fixture from a freshly obtained page.
    ///
    /// The want file is only written when it does not exist yet, an
    /// existing one is kept as the reference on disk.
    pub fn from_reader<R: Read + ?Sized>(
        config: FixtureConfig,
        reader: &mut R,
    ) -> Result<Self> {
        output_dir(&config.output_dir)?;

        let mut want = vec![];
        reader.read_to_end(&mut want)?;

        if !config.want_file.exists() {
            info!(
                "{} creating {} file",
                LOG_PREFIX,
                config.want_file.display()
            );
            string_to_file(&config.want_file, &want)?;
        }

        Ok(Self { config, want })
    }

    /// Build the fixture from the want file already on disk
    pub fn from_want_file(config: FixtureConfig) -> Result<Self> {
        output_dir(&config.output_dir)?;
        let want = read_file(&config.want_file, config.read_mode)?;
        Ok(Self { config, want })
    }

    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    pub fn want(&self) -> &[u8] {
        &self.want
    }

    pub fn want_path(&self) -> &Path {
        &self.config.want_file
    }

    pub fn updated_path(&self) -> PathBuf {
        self.scratch(&self.config.updated_file.to_string_lossy())
    }

    /// Path in the output directory for the given identifier
    pub fn scratch(&self, name: &str) -> PathBuf {
        scratch_path(&self.config.output_dir, name)
    }

    /// The reference page with every occurrence of the term replaced
    pub fn updated(&self) -> Vec<u8> {
        replace_all(
            &self.want,
            self.config.term.as_bytes(),
            self.config.replacement.as_bytes(),
        )
    }
}

/// Replace every non-overlapping occurrence of `from` in `haystack`
pub fn replace_all(haystack: &[u8], from: &[u8], to: &[u8]) -> Vec<u8> {
    if from.is_empty() {
        return haystack.to_vec();
    }

    let mut result = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest.windows(from.len()).position(|w| w == from) {
        result.extend_from_slice(&rest[..pos]);
        result.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    result.extend_from_slice(rest);
    result
}

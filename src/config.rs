use crate::{Cursor, DEFAULT_MAX_POINTER_HOPS};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::Read, path::PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error in opening file: {0}")]
    Open(#[source] std::io::Error),

    #[error("error in reading file contents: {0}")]
    Read(#[source] std::io::Error),

    #[error("error in parsing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub decoder: DecoderConfig,
    pub input: InputConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DecoderConfig {
    #[serde(default = "default_max_pointer_hops")]
    pub max_pointer_hops: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_pointer_hops: default_max_pointer_hops(),
        }
    }
}

impl DecoderConfig {
    pub fn cursor<'a>(&self, message: &'a [u8]) -> Cursor<'a> {
        Cursor::new(message).with_max_pointer_hops(self.max_pointer_hops)
    }
}

/// A raw capture of one DNS message and where its records start.
#[derive(Debug, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    /// Offset of the first record's owner name.
    #[serde(default)]
    pub offset: usize,
    pub records: usize,
}

fn default_max_pointer_hops() -> usize {
    DEFAULT_MAX_POINTER_HOPS
}

impl Config {
    const FILENAME: &'static str = "config.toml";

    pub fn parse(mut filename: &str) -> Result<Config, ConfigError> {
        if filename.is_empty() {
            filename = Config::FILENAME;
        }

        let mut f = File::open(filename).map_err(ConfigError::Open)?;
        let mut contents = String::new();
        f.read_to_string(&mut contents)
            .map_err(ConfigError::Read)?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(contents)?;

        if config.decoder.max_pointer_hops == 0 {
            return Err(ConfigError::Invalid("decoder.max_pointer_hops must be > 0"));
        }

        Ok(config)
    }
}

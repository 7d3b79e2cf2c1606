use std::{fmt, num::NonZeroUsize, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::collections::DEFAULT_CAPACITY;

/// The sequence type backing the validator's stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// [`DynamicArray`](crate::DynamicArray).
    #[default]
    Array,
    /// [`LinkedSequence`](crate::LinkedSequence).
    Linked,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Array => "array",
            Self::Linked => "linked",
        })
    }
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown backend '{0}' (expected 'array' or 'linked')")]
pub struct UnknownBackend(String);

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(Self::Array),
            "linked" => Ok(Self::Linked),
            _ => Err(UnknownBackend(s.to_string())),
        }
    }
}

/// Errors from loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    /// The configuration file is not valid TOML for a [`Config`].
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration could not be rendered as TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// The configuration file could not be written.
    #[error("failed to write config file: {0}")]
    Write(#[source] std::io::Error),
    /// `initial_capacity` is larger than [`MAX_INITIAL_CAPACITY`].
    #[error("initial_capacity {requested} exceeds the maximum of {max}", max = MAX_INITIAL_CAPACITY)]
    CapacityTooLarge {
        /// The capacity found in the file.
        requested: NonZeroUsize,
    },
}

/// The largest `initial_capacity` a configuration file may request.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Settings for a validation run.
///
/// Missing keys take their default values, so an empty file is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The sequence type backing the stack of open elements.
    pub backend: Backend,

    /// The starting capacity of a [`Backend::Array`] stack.
    ///
    /// Ignored by [`Backend::Linked`].
    pub initial_capacity: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            initial_capacity: default_capacity(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the TOML content is
    /// invalid, or if `initial_capacity` exceeds [`MAX_INITIAL_CAPACITY`].
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path).map_err(Error::Read)?;
        let config: Self = toml::from_str(&content)?;
        if config.initial_capacity.get() > MAX_INITIAL_CAPACITY {
            return Err(Error::CapacityTooLarge {
                requested: config.initial_capacity,
            });
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(Error::Write)
    }
}

const fn default_capacity() -> NonZeroUsize {
    match NonZeroUsize::new(DEFAULT_CAPACITY) {
        Some(capacity) => capacity,
        None => NonZeroUsize::MIN,
    }
}

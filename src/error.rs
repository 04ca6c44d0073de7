// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

/// Errors raised while building the localization engine or touching disk.
///
/// Rendering never produces an error: missing attributes, keys, and targets
/// are skipped or resolved through the fallback locale.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Storage Error: {0}")]
    Storage(String),

    /// A locale code that does not name any known locale.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A required message is missing for a locale and for the fallback locale.
    #[error("Missing translation '{key}' for locale '{locale}'")]
    MissingTranslation { locale: String, key: String },

    /// A translation resource failed to parse or register.
    #[error("Translation Error: {0}")]
    Translation(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl<T: std::fmt::Debug> From<ciborium::de::Error<T>> for Error {
    fn from(err: ciborium::de::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

impl<T: std::fmt::Debug> From<ciborium::ser::Error<T>> for Error {
    fn from(err: ciborium::ser::Error<T>) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

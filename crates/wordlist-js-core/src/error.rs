//! Error types for wordlist-js-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while converting a word list.
///
/// Every variant is fatal: the conversion stops at the first failure and
/// nothing already appended to the output is rolled back.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input word list could not be opened or read.
    #[error("failed to read word list {path}")]
    ReadInput {
        /// Path of the input file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input word list is not valid UTF-8.
    #[error("word list {path} is not valid UTF-8")]
    InvalidEncoding {
        /// Path of the input file.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The output module could not be opened for appending or written.
    #[error("failed to append module to {path}")]
    WriteOutput {
        /// Path of the output file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias using [`ConvertError`].
pub type ConvertResult<T> = Result<T, ConvertError>;

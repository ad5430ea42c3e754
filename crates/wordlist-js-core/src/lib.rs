//! Core library for wordlist-js.
//!
//! Turns a newline-delimited word list into a JavaScript module that exports
//! the words as `export const WORDS = [...]`, appending it to an output file.
//!
//! # Modules
//!
//! - [`words`] - Word list loading and line splitting
//! - [`module`] - Module rendering and append-mode output
//! - [`convert`] - The end-to-end conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//!
//! let report = wordlist_js_core::convert(
//!     Utf8Path::new("diccionario.txt"),
//!     Utf8Path::new("palabras.js"),
//! )
//! .expect("conversion failed");
//!
//! println!("wrote {} words", report.words);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod convert;
pub mod error;
pub mod module;
pub mod words;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use convert::{ConvertOptions, ConvertReport, Converter, DEFAULT_INPUT, DEFAULT_OUTPUT, convert};
pub use error::{ConfigError, ConfigResult, ConvertError, ConvertResult};
pub use module::{QuoteStyle, render_module};
pub use words::{WordList, read_word_list};

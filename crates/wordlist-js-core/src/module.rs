//! JavaScript module rendering and output.
//!
//! The generated module always has the same shape:
//!
//! ```text
//! export const WORDS = ['gato',
//! 'perro',
//! ]
//! ```
//!
//! The opening bracket is followed directly by the first entry, every entry
//! ends with `',` and a newline, and nothing follows the closing bracket.

use std::io::Write;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};
use crate::words::WordList;

/// Text written before the first entry.
pub const MODULE_PREFIX: &str = "export const WORDS = [";

/// Text written after the last entry.
pub const MODULE_SUFFIX: &str = "]";

/// How quote characters inside a word are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum QuoteStyle {
    /// Copy words verbatim. A word containing `'` produces invalid JavaScript.
    #[default]
    Verbatim,
    /// Backslash-escape `\` and `'`, and write line breaks (`\n`, `\r`,
    /// U+2028, U+2029) as escape sequences, so every entry is a valid string
    /// literal.
    Escaped,
}

impl QuoteStyle {
    /// Returns the style name as used in config files and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Verbatim => "verbatim",
            Self::Escaped => "escaped",
        }
    }

    fn push_word(self, out: &mut String, word: &str) {
        match self {
            Self::Verbatim => out.push_str(word),
            Self::Escaped => {
                for ch in word.chars() {
                    match ch {
                        '\'' | '\\' => {
                            out.push('\\');
                            out.push(ch);
                        }
                        '\n' => out.push_str("\\n"),
                        '\r' => out.push_str("\\r"),
                        '\u{2028}' => out.push_str("\\u2028"),
                        '\u{2029}' => out.push_str("\\u2029"),
                        _ => out.push(ch),
                    }
                }
            }
        }
    }
}

impl std::fmt::Display for QuoteStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a word list as a JavaScript module exporting `WORDS`.
pub fn render_module(words: &WordList, style: QuoteStyle) -> String {
    // prefix + suffix + quotes, comma and newline per entry
    let capacity = MODULE_PREFIX.len()
        + MODULE_SUFFIX.len()
        + words.iter().map(|w| w.len() + 4).sum::<usize>();
    let mut out = String::with_capacity(capacity);

    out.push_str(MODULE_PREFIX);
    for word in words.iter() {
        out.push('\'');
        style.push_word(&mut out, word);
        out.push_str("',\n");
    }
    out.push_str(MODULE_SUFFIX);
    out
}

/// Append rendered module text to a file, creating it if needed.
///
/// Existing content is never truncated, so running twice against the same
/// file leaves two modules back to back. Returns the number of bytes written.
#[tracing::instrument(skip_all, fields(path = %path, bytes = text.len()))]
pub fn append_module(path: &Utf8Path, text: &str) -> ConvertResult<u64> {
    let write_err = |source| ConvertError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_std_path())
        .map_err(write_err)?;
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!("module appended");
    Ok(text.len() as u64)
}

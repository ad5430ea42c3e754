//! Word list to module conversion.
//!
//! Reads the input word list, renders it as a module and appends the result
//! to the output file, in one sequential pass.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::error::ConvertResult;
use crate::module::{QuoteStyle, append_module, render_module};
use crate::words::read_word_list;

/// Input file used when no other path is configured.
pub const DEFAULT_INPUT: &str = "diccionario.txt";

/// Output file used when no other path is configured.
pub const DEFAULT_OUTPUT: &str = "palabras.js";

/// Everything a conversion run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Word list to read.
    pub input: Utf8PathBuf,
    /// Module file to append to.
    pub output: Utf8PathBuf,
    /// How quotes inside words are rendered.
    pub quote_style: QuoteStyle,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input: Utf8PathBuf::from(DEFAULT_INPUT),
            output: Utf8PathBuf::from(DEFAULT_OUTPUT),
            quote_style: QuoteStyle::default(),
        }
    }
}

/// Summary of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertReport {
    /// Word list that was read.
    pub input: Utf8PathBuf,
    /// Module file that was appended to.
    pub output: Utf8PathBuf,
    /// Number of entries in the generated module.
    pub words: usize,
    /// Bytes appended to the output file.
    pub bytes_written: u64,
    /// Quote style used for the entries.
    pub quote_style: QuoteStyle,
}

/// Runs conversions with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    /// Create a converter for the given options.
    pub const fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// The options this converter runs with.
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Read, render and append.
    ///
    /// Stops at the first I/O or decoding failure. If the append fails part
    /// way, whatever was already written stays in the output file.
    #[tracing::instrument(
        name = "convert",
        skip_all,
        fields(input = %self.options.input, output = %self.options.output)
    )]
    pub fn run(&self) -> ConvertResult<ConvertReport> {
        let words = read_word_list(&self.options.input)?;
        let text = render_module(&words, self.options.quote_style);
        let bytes_written = append_module(&self.options.output, &text)?;

        tracing::info!(
            words = words.len(),
            bytes = bytes_written,
            quote_style = self.options.quote_style.as_str(),
            "module written"
        );

        Ok(ConvertReport {
            input: self.options.input.clone(),
            output: self.options.output.clone(),
            words: words.len(),
            bytes_written,
            quote_style: self.options.quote_style,
        })
    }
}

/// Convert `input` into a module appended to `output`, quoting verbatim.
pub fn convert(input: &Utf8Path, output: &Utf8Path) -> ConvertResult<ConvertReport> {
    Converter::new(ConvertOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        quote_style: QuoteStyle::Verbatim,
    })
    .run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::fs;
    use tempfile::TempDir;

    struct Scratch {
        _tmp: TempDir,
        input: Utf8PathBuf,
        output: Utf8PathBuf,
    }

    fn scratch(input_text: &[u8]) -> Scratch {
        let tmp = TempDir::new().unwrap();
        let root = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let input = root.join(DEFAULT_INPUT);
        let output = root.join(DEFAULT_OUTPUT);
        fs::write(&input, input_text).unwrap();
        Scratch {
            _tmp: tmp,
            input,
            output,
        }
    }

    #[test]
    fn converts_spanish_sample() {
        let s = scratch(b"gato\nperro\nsol\n");

        let report = convert(&s.input, &s.output).unwrap();

        assert_eq!(
            fs::read_to_string(&s.output).unwrap(),
            "export const WORDS = ['gato',\n'perro',\n'sol',\n]"
        );
        assert_eq!(report.words, 3);
        assert_eq!(report.bytes_written, fs::metadata(&s.output).unwrap().len());
    }

    #[test]
    fn empty_input_gives_empty_array() {
        let s = scratch(b"");

        let report = convert(&s.input, &s.output).unwrap();

        assert_eq!(fs::read_to_string(&s.output).unwrap(), "export const WORDS = []");
        assert_eq!(report.words, 0);
    }

    #[test]
    fn second_run_appends_second_block() {
        let s = scratch(b"sol\n");

        convert(&s.input, &s.output).unwrap();
        convert(&s.input, &s.output).unwrap();

        let out = fs::read_to_string(&s.output).unwrap();
        assert_eq!(out, "export const WORDS = ['sol',\n]export const WORDS = ['sol',\n]");
        assert_eq!(out.matches("export const WORDS = [").count(), 2);
    }

    #[test]
    fn entries_match_input_lines() {
        let lines = ["uno", " dos", "tres ", "", "cuatro"];
        let s = scratch(format!("{}\n", lines.join("\n")).as_bytes());

        convert(&s.input, &s.output).unwrap();

        let out = fs::read_to_string(&s.output).unwrap();
        let body = out
            .strip_prefix("export const WORDS = [")
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap();
        let entries: Vec<&str> = body
            .split_terminator('\n')
            .map(|e| e.strip_prefix('\'').unwrap().strip_suffix("',").unwrap())
            .collect();
        assert_eq!(entries, lines);
    }

    #[test]
    fn apostrophe_is_copied_verbatim_by_default() {
        let s = scratch(b"don't\n");

        convert(&s.input, &s.output).unwrap();

        assert_eq!(
            fs::read_to_string(&s.output).unwrap(),
            "export const WORDS = ['don't',\n]"
        );
    }

    #[test]
    fn escaped_converter_escapes_apostrophe() {
        let s = scratch(b"don't\n");
        let converter = Converter::new(ConvertOptions {
            input: s.input.clone(),
            output: s.output.clone(),
            quote_style: QuoteStyle::Escaped,
        });

        let report = converter.run().unwrap();

        assert_eq!(report.quote_style, QuoteStyle::Escaped);
        assert_eq!(
            fs::read_to_string(&s.output).unwrap(),
            "export const WORDS = ['don\\'t',\n]"
        );
    }

    #[test]
    fn missing_input_leaves_output_untouched() {
        let s = scratch(b"");
        fs::remove_file(&s.input).unwrap();

        let err = convert(&s.input, &s.output).unwrap_err();

        assert!(matches!(err, ConvertError::ReadInput { .. }));
        assert!(!s.output.exists());
    }

    #[test]
    fn unwritable_output_is_write_error() {
        let s = scratch(b"sol\n");
        let output = s.input.with_file_name("missing-dir").join(DEFAULT_OUTPUT);

        let err = convert(&s.input, &output).unwrap_err();

        assert!(matches!(err, ConvertError::WriteOutput { .. }));
    }

    #[test]
    fn default_options_use_dictionary_paths() {
        let options = ConvertOptions::default();
        assert_eq!(options.input, "diccionario.txt");
        assert_eq!(options.output, "palabras.js");
        assert_eq!(options.quote_style, QuoteStyle::Verbatim);
        assert_eq!(Converter::default().options(), &options);
    }
}

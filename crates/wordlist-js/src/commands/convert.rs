//! Convert command — append a `WORDS` module built from a word list.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordlist_js_core::config::Config;
use wordlist_js_core::{ConvertOptions, Converter, QuoteStyle};

/// Arguments for the `convert` subcommand.
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Word list to read, one word per line [default: diccionario.txt]
    pub input: Option<Utf8PathBuf>,

    /// Module file to append to [default: palabras.js]
    pub output: Option<Utf8PathBuf>,

    /// How quotes inside words are rendered
    #[arg(long, value_enum)]
    pub quote_style: Option<QuoteStyle>,
}

impl ConvertArgs {
    /// Layer command-line values over the configured options.
    fn resolve(self, config: &Config) -> ConvertOptions {
        let configured = config.convert_options();
        ConvertOptions {
            input: self.input.unwrap_or(configured.input),
            output: self.output.unwrap_or(configured.output),
            quote_style: self.quote_style.unwrap_or(configured.quote_style),
        }
    }
}

/// Convert a word list into a module appended to the output file.
#[instrument(name = "cmd_convert", skip_all)]
pub fn cmd_convert(args: ConvertArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let options = args.resolve(config);
    debug!(
        input = %options.input,
        output = %options.output,
        quote_style = %options.quote_style,
        "executing convert command"
    );

    let report = Converter::new(options)
        .run()
        .context("word list conversion failed")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} appended {} words from {} to {}",
            "OK:".green(),
            report.words.bold(),
            report.input,
            report.output.cyan(),
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    #[test]
    fn args_override_config() {
        let config = Config {
            input: Some("config.txt".into()),
            output: Some("config.js".into()),
            quote_style: Some(QuoteStyle::Escaped),
            ..Config::default()
        };
        let args = ConvertArgs {
            input: Some("cli.txt".into()),
            output: None,
            quote_style: Some(QuoteStyle::Verbatim),
        };

        let options = args.resolve(&config);

        assert_eq!(options.input, "cli.txt");
        assert_eq!(options.output, "config.js");
        assert_eq!(options.quote_style, QuoteStyle::Verbatim);
    }

    #[test]
    fn empty_args_use_defaults() {
        let options = ConvertArgs::default().resolve(&Config::default());
        assert_eq!(options, ConvertOptions::default());
    }

    #[test]
    fn cmd_convert_writes_module() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);
        fs::write(root.join("words.txt"), "gato\nsol\n").unwrap();

        let args = ConvertArgs {
            input: Some(root.join("words.txt")),
            output: Some(root.join("words.js")),
            quote_style: None,
        };
        cmd_convert(args, false, &Config::default()).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("words.js")).unwrap(),
            "export const WORDS = ['gato',\n'sol',\n]"
        );
    }

    #[test]
    fn cmd_convert_missing_input_fails() {
        let tmp = TempDir::new().unwrap();
        let root = utf8_root(&tmp);

        let args = ConvertArgs {
            input: Some(root.join("missing.txt")),
            output: Some(root.join("words.js")),
            quote_style: None,
        };
        let err = cmd_convert(args, true, &Config::default()).unwrap_err();

        assert!(format!("{err:#}").contains("missing.txt"));
    }
}

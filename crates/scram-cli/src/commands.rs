use std::io::Write;

use anyhow::Context;
use colored::Colorize;
use tracing::info_span;

use scram_dictionary::Dictionary;
use scram_finder::Finder;
use scram_input::InputSet;
use scram_types::CaseResult;

use crate::cli::{Cli, OutputFormat};
use crate::config::AppConfig;

pub fn run(cli: &Cli, config: &AppConfig) -> anyhow::Result<()> {
    if cli.verbose {
        print_config(config)?;
    }

    let results = find(cli, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &results, cli.format)?;
    out.flush()?;
    Ok(())
}

/// Load the dictionary and the inputs named on the command line and search.
fn find(cli: &Cli, config: &AppConfig) -> anyhow::Result<Vec<CaseResult>> {
    let span = info_span!("scrambled_strings");

    let mut dictionary = Dictionary::from_config(config.dictionary.clone(), span.clone())
        .context("invalid dictionary configuration")?;
    dictionary
        .load_from_file(&cli.dictionary)
        .with_context(|| format!("error loading dictionary {}", cli.dictionary.display()))?;

    let inputs = InputSet::from_file(&cli.input, &config.input)
        .with_context(|| format!("error loading input file {}", cli.input.display()))?;

    if cli.verbose {
        eprintln!(
            "{} {} words ({} characters, {} storage), {} cases",
            "✓".green().bold(),
            dictionary.len().to_string().bold(),
            dictionary.total_length(),
            dictionary.strategy().to_string().cyan(),
            inputs.len().to_string().bold(),
        );
    }

    Ok(Finder::with_span(&dictionary, span).find_matches(inputs.lines()))
}

fn print_config(config: &AppConfig) -> anyhow::Result<()> {
    for (name, entries) in config.sections()? {
        let title = format!("{name} configuration:");
        eprintln!("{}", title.bold());
        eprintln!("{}", "-".repeat(title.len()));
        for (key, value) in entries {
            eprintln!("  {key}: {}", value.yellow());
        }
    }
    Ok(())
}

pub fn write_report<W: Write>(
    out: &mut W,
    results: &[CaseResult],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for result in results {
                writeln!(out, "{result}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, results)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn cli(dictionary: &Path, input: &Path, extra: &[&str]) -> Cli {
        let mut args = vec![
            "scrambled-strings".to_string(),
            "--dictionary".into(),
            dictionary.display().to_string(),
            "--input".into(),
            input.display().to_string(),
        ];
        args.extend(extra.iter().map(|s| s.to_string()));
        Cli::try_parse_from(args).unwrap()
    }

    fn small_words() -> AppConfig {
        AppConfig::from_toml_str("[dictionary]\nmin_word_length = 2\nmax_word_length = 105\nmax_sum_lengths_of_all_words = 105").unwrap()
    }

    #[test]
    fn text_report() {
        let mut out = Vec::new();
        let results = [CaseResult::new(1, 2), CaseResult::new(2, 0)];
        write_report(&mut out, &results, OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Case #1: 2\nCase #2: 0\n");
    }

    #[test]
    fn json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &[CaseResult::new(1, 2)], OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, serde_json::json!([{ "case": 1, "count": 2 }]));
    }

    #[test]
    fn finds_matches_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = dir.path().join("dictionary.txt");
        let input = dir.path().join("input.txt");
        std::fs::write(&dictionary, "eaxmple\ntihs\n").unwrap();
        std::fs::write(&input, "scrambled_example_this_tihs\nnothing\n").unwrap();

        for storage in ["eager", "lazy"] {
            let cli = cli(&dictionary, &input, &["--storage", storage]);
            let config = small_words().with_overrides(&cli);
            let results = find(&cli, &config).unwrap();
            assert_eq!(results, vec![CaseResult::new(1, 2), CaseResult::new(2, 0)]);
        }
    }

    #[test]
    fn dictionary_errors_carry_context() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = dir.path().join("dictionary.txt");
        let input = dir.path().join("input.txt");
        std::fs::write(&dictionary, "tihs\ntihs\n").unwrap();
        std::fs::write(&input, "tihs\n").unwrap();

        let cli = cli(&dictionary, &input, &[]);
        let err = find(&cli, &small_words()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("error loading dictionary"));
        assert!(message.contains("duplicate word found: 'tihs'"));
    }

    #[test]
    fn missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let dictionary = dir.path().join("dictionary.txt");
        std::fs::write(&dictionary, "tihs\n").unwrap();

        let cli = cli(&dictionary, &dir.path().join("absent.txt"), &[]);
        let err = find(&cli, &small_words()).unwrap_err();
        assert!(format!("{err:#}").contains("error loading input file"));
    }
}

//! Subcommand implementations for the rangesum CLI.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use rangesum_core::config::{
    find_config_file, home_dir, load_config, OutputFormat, RangesumConfig,
};
use serde::Serialize;

/// Input used when no subcommand is given.
pub const DEMO_INPUT: &str = "5,4,-4,-2,1,3,6,9";

/// Config file values merged with command-line overrides.
pub struct Settings {
    pub config: RangesumConfig,
    pub source: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Settings {
    pub fn load(format_override: Option<OutputFormat>) -> Result<Self> {
        let cwd = std::env::current_dir().context("reading current directory")?;
        let source = find_config_file(&cwd, home_dir().as_deref());
        let config = match &source {
            Some(path) => load_config(path)?,
            None => RangesumConfig::default(),
        };
        let format = format_override.unwrap_or_else(|| config.format());
        log::info!(
            "config source: {}, format: {format}",
            source
                .as_deref()
                .map_or_else(|| "defaults".to_string(), |p| p.display().to_string())
        );
        Ok(Settings {
            config,
            source,
            format,
        })
    }
}

#[derive(Serialize)]
struct SummaryOutput<'a> {
    numbers: &'a [i32],
    summary: &'a str,
}

#[derive(Serialize)]
struct NumbersOutput<'a> {
    numbers: &'a [i32],
}

fn join_numbers(numbers: &[i32]) -> String {
    numbers
        .iter()
        .map(i32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Use the argument when given, otherwise read all of stdin.
fn read_input(input: Option<String>) -> Result<String> {
    match input {
        Some(s) => Ok(s),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

// ---------------------------------------------------------------------------
// Summarize
// ---------------------------------------------------------------------------

pub fn cmd_summarize(settings: &Settings, input: Option<String>) -> Result<()> {
    let input = read_input(input)?;
    let numbers = rangesum_core::collect(Some(input.as_str()))?;
    print_summary(settings, &numbers)
}

/// Summarize the fixed demonstration input.
pub fn cmd_demo(settings: &Settings) -> Result<()> {
    let numbers = rangesum_core::collect(Some(DEMO_INPUT))?;
    print_summary(settings, &numbers)
}

fn print_summary(settings: &Settings, numbers: &[i32]) -> Result<()> {
    let summary = rangesum_core::summarize_collection(numbers.iter().copied());
    match settings.format {
        OutputFormat::Text => println!("{summary}"),
        OutputFormat::Json => {
            let out = SummaryOutput {
                numbers,
                summary: &summary,
            };
            println!("{}", serde_json::to_string(&out)?);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Collect
// ---------------------------------------------------------------------------

pub fn cmd_collect(settings: &Settings, input: Option<String>, sort: bool) -> Result<()> {
    let input = read_input(input)?;
    let mut numbers = rangesum_core::collect(Some(input.as_str()))?;
    if sort || settings.config.sort_collected() {
        numbers.sort_unstable();
    }
    print_numbers(settings, &numbers)
}

// ---------------------------------------------------------------------------
// Expand
// ---------------------------------------------------------------------------

pub fn cmd_expand(settings: &Settings, summary: &str) -> Result<()> {
    let numbers = rangesum_core::expand(summary)?;
    print_numbers(settings, &numbers)
}

fn print_numbers(settings: &Settings, numbers: &[i32]) -> Result<()> {
    match settings.format {
        OutputFormat::Text => println!("{}", join_numbers(numbers)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&NumbersOutput { numbers })?);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Config — print effective settings as TOML
// ---------------------------------------------------------------------------

pub fn cmd_config(settings: &Settings) -> Result<()> {
    let effective = RangesumConfig {
        sort_collected: Some(settings.config.sort_collected()),
        format: Some(settings.format),
    };
    let toml_str =
        toml::to_string_pretty(&effective).context("failed to serialize config to TOML")?;
    match &settings.source {
        Some(path) => println!("# Loaded from {}", path.display()),
        None => println!("# No config file found, showing defaults"),
    }
    println!();
    print!("{toml_str}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_numbers_uses_bare_commas() {
        assert_eq!(join_numbers(&[-1, 0, 7]), "-1,0,7");
        assert_eq!(join_numbers(&[]), "");
    }

    #[test]
    fn summary_json_shape() {
        let out = SummaryOutput {
            numbers: &[1, 2, 4],
            summary: "1-2, 4",
        };
        assert_eq!(
            serde_json::to_string(&out).unwrap(),
            r#"{"numbers":[1,2,4],"summary":"1-2, 4"}"#
        );
    }

    #[test]
    fn read_input_prefers_argument() {
        assert_eq!(read_input(Some("1,2".to_string())).unwrap(), "1,2");
    }
}

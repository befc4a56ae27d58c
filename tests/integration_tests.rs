use std::path::Path;

use anyhow::Result;
use csv_preview::process::Preview;
use csv_preview::types::{Config, Outcome};

static FIXTURES: &str = "tests/fixtures";

fn fixture(name: &str) -> String {
	Path::new(FIXTURES).join(name).to_string_lossy().into_owned()
}

fn run_with(path: &str, config: Config) -> Result<(Outcome, String)> {
	let mut output = Vec::new();
	let outcome = Preview::new(config).run(path, &mut output)?;
	Ok((outcome, String::from_utf8(output)?))
}

fn config(max_rows: i64, no_headers: bool) -> Config {
	Config {
		max_rows,
		no_headers,
		..Config::default()
	}
}

#[test]
fn test_missing_file() -> Result<()> {
	let (outcome, output) = run_with("bla", Config::default())?;
	assert!(output.contains("File \"bla\" does not exist"), "{}", output);
	assert_eq!(outcome.exit_code(), 1);
	Ok(())
}

#[test]
fn test_directory_is_not_readable() -> Result<()> {
	let (outcome, output) = run_with(FIXTURES, Config::default())?;
	assert_eq!(outcome, Outcome::NotReadable);
	assert!(output.starts_with("[ERROR] File \""), "{}", output);
	Ok(())
}

#[test]
fn test_no_data() -> Result<()> {
	let (outcome, output) = run_with(&fixture("empty.csv"), Config::default())?;
	assert!(output.contains("No rows found in CSV file"), "{}", output);
	assert_eq!(outcome, Outcome::NoRows);
	assert_eq!(outcome.exit_code(), 0);
	Ok(())
}

#[test]
fn test_max_rows() -> Result<()> {
	let (outcome, output) = run_with(&fixture("valid.csv"), config(1, true))?;
	assert!(output.contains("row1"), "{}", output);
	assert!(!output.contains("row2"), "{}", output);
	assert!(!output.contains("row3"), "{}", output);
	assert_eq!(outcome, Outcome::Rendered { rows: 1 });
	assert_eq!(outcome.exit_code(), 0);
	Ok(())
}

#[test]
fn test_table_output() -> Result<()> {
	let (outcome, output) = run_with(&fixture("valid.csv"), Config::default())?;
	assert!(output.contains("row1"), "{}", output);
	assert!(output.contains("row2"), "{}", output);
	assert!(output.contains("row3"), "{}", output);
	// row1 is the header, so only two data rows
	assert_eq!(outcome, Outcome::Rendered { rows: 2 });
	Ok(())
}

#[test]
fn test_zero_max_without_headers_renders_nothing() -> Result<()> {
	let (outcome, output) = run_with(&fixture("valid.csv"), config(0, true))?;
	assert_eq!(outcome, Outcome::Rendered { rows: 0 });
	assert!(!output.contains("row1"), "{}", output);
	Ok(())
}

#[test]
fn test_semicolon_delimiter_and_ragged_rows() -> Result<()> {
	let config = Config {
		delimiter: b';',
		..Config::default()
	};
	let (outcome, output) = run_with(&fixture("semicolon.csv"), config)?;
	assert_eq!(outcome, Outcome::Rendered { rows: 3 });
	for text in ["population", "Oslo", "Bergen; Vestland", "Lyon"] {
		assert!(output.contains(text), "missing {:?} in {}", text, output);
	}
	Ok(())
}

#[test]
fn test_malformed_input_is_reported() -> Result<()> {
	let (outcome, output) = run_with(&fixture("invalid-utf8.csv"), Config::default())?;
	assert_eq!(outcome, Outcome::Malformed);
	assert_eq!(outcome.exit_code(), 1);
	assert!(output.starts_with("[ERROR] Malformed CSV"), "{}", output);
	// No partial table
	assert!(!output.contains("fine"), "{}", output);
	Ok(())
}

#[test]
fn test_runs_are_idempotent() -> Result<()> {
	let path = fixture("semicolon.csv");
	let before = std::fs::read(&path)?;
	let config = Config {
		delimiter: b';',
		max_rows: 2,
		..Config::default()
	};
	let first = run_with(&path, config.clone())?;
	let second = run_with(&path, config)?;
	assert_eq!(first, second);
	assert_eq!(before, std::fs::read(&path)?);
	Ok(())
}

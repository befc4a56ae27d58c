//! Global type definitions.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// One parsed line of the input: an ordered list of opaque text fields.
pub type Record = Vec<String>;

/// Column labels, empty when headers are disabled.
pub type HeaderList = Vec<String>;

/// The bounded, ordered set of records selected for display.
pub type RowWindow = Vec<Record>;

pub const DEFAULT_DELIMITER: u8 = b',';
pub const DEFAULT_MAX_ROWS: i64 = 100;

#[derive(Debug, Error)]
pub enum PreviewError {
	#[error("File \"{}\" does not exist", .path.display())]
	NotReadable { path: PathBuf },

	#[error("Malformed CSV: {0}")]
	Malformed(#[from] csv::Error),
}

/// Settings for a single preview invocation.
#[derive(Debug, Clone)]
pub struct Config {
	pub delimiter: u8,
	// Signed so that out-of-range user input can be coerced rather than rejected
	pub max_rows: i64,
	pub no_headers: bool,
	pub row_delay: Option<Duration>,
}

/// Render Job
///
/// The finished header/row pair handed to the renderer. Fields are private so a job can't be
/// altered once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
	headers: HeaderList,
	rows: RowWindow,
}

/// How a preview invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Rendered { rows: usize },
	NoRows,
	NotReadable,
	Malformed,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			delimiter: DEFAULT_DELIMITER,
			max_rows: DEFAULT_MAX_ROWS,
			no_headers: false,
			row_delay: None,
		}
	}
}

impl Config {
	/// The row budget, with negative values clamped to zero and oversized ones to `usize::MAX`.
	pub fn max_rows(&self) -> usize {
		usize::try_from(self.max_rows.max(0)).unwrap_or(usize::MAX)
	}
}

impl RenderJob {
	pub fn new(headers: HeaderList, rows: RowWindow) -> Self {
		Self { headers, rows }
	}

	pub fn headers(&self) -> &[String] {
		&self.headers
	}

	pub fn rows(&self) -> &[Record] {
		&self.rows
	}
}

impl Outcome {
	/// An empty file parsed fine, so it is reported but not treated as a failure.
	pub fn exit_code(&self) -> u8 {
		match self {
			Outcome::Rendered { .. } | Outcome::NoRows => 0,
			Outcome::NotReadable | Outcome::Malformed => 1,
		}
	}
}

//! Preview controller: header policy, row windowing and presentation.

use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::render::{self, BoxTable, ProgressBar};
use crate::source::{is_trivial, RowSource};
use crate::types::{Config, Outcome, PreviewError, RenderJob};

static NO_ROWS_MSG: &str = "No rows found in CSV file";

/// Drives a single preview of a CSV file with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Preview {
	config: Config,
}

impl Preview {
	pub fn new(config: Config) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Run
	///
	/// Preview the file at `path`, writing diagnostics, progress and the rendered table to `output`
	/// (trait bound `std::io::Write`). Problems with the file or its contents are reported on
	/// `output` and reflected in the returned `Outcome`; only failures to write to `output` are
	/// returned as errors.
	pub fn run<P: AsRef<Path>, W: Write>(&self, path: P, output: &mut W) -> Result<Outcome> {
		let path = path.as_ref();
		let mut source = match RowSource::open(path, self.config.delimiter) {
			Ok(source) => source,
			Err(e) => {
				log::warn!("{}", e);
				writeln!(output, "[ERROR] {}", e)?;
				return Ok(outcome_for(&e));
			}
		};

		let job = match self.build_job(&mut source) {
			Ok(Some(job)) => job,
			Ok(None) => {
				log::info!("'{}' has no rows", path.display());
				writeln!(output, "[INFO] {}", NO_ROWS_MSG)?;
				return Ok(Outcome::NoRows);
			}
			Err(e) => {
				log::warn!("Failed reading '{}': {}", path.display(), e);
				writeln!(output, "[ERROR] {}", e)?;
				return Ok(outcome_for(&e));
			}
		};
		// Everything needed is buffered in the job, release the file before drawing
		drop(source);

		render::present(
			&job,
			&mut BoxTable::new(),
			&mut ProgressBar::new(),
			output,
			self.config.row_delay,
		)?;
		output.flush()?;
		Ok(Outcome::Rendered {
			rows: job.rows().len(),
		})
	}

	/// Build Job
	///
	/// Apply the header policy and row limit to `source`. Returns `None` if the first record is
	/// missing or has no content, whatever follows it. With headers enabled the first record
	/// becomes the header list and up to `max_rows` further records are taken. With headers
	/// disabled the first record is kept as data and counts towards the `max_rows` budget.
	pub fn build_job(&self, source: &mut RowSource) -> Result<Option<RenderJob>, PreviewError> {
		let first = match source.next_record()? {
			Some(first) if !is_trivial(&first) => first,
			_ => return Ok(None),
		};
		let max_rows = self.config.max_rows();

		let job = if self.config.no_headers {
			let mut rows = Vec::new();
			if max_rows > 0 {
				rows.push(first);
				rows.extend(source.take_records(max_rows - 1)?);
			}
			RenderJob::new(Vec::new(), rows)
		} else {
			let rows = source.take_records(max_rows)?;
			RenderJob::new(first, rows)
		};
		log::debug!(
			"{} headers, {} rows (max {})",
			job.headers().len(),
			job.rows().len(),
			max_rows
		);
		Ok(Some(job))
	}
}

fn outcome_for(err: &PreviewError) -> Outcome {
	match err {
		PreviewError::NotReadable { .. } => Outcome::NotReadable,
		PreviewError::Malformed(_) => Outcome::Malformed,
	}
}

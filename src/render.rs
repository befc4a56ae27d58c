//! Table and progress output.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use prettytable::{format, Cell, Row, Table};

use crate::types::RenderJob;

const BAR_WIDTH: usize = 28;

/// Something that assembles rows into a table and draws it.
pub trait TableSink {
	fn begin_table(&mut self, headers: &[String]);
	fn add_row(&mut self, record: &[String]);
	fn render(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// Something that reports how far through the rows we are.
pub trait ProgressSink {
	fn start(&mut self, out: &mut dyn Write, total: usize) -> io::Result<()>;
	fn advance(&mut self, out: &mut dyn Write) -> io::Result<()>;
	fn finish(&mut self, out: &mut dyn Write) -> io::Result<()>;
}

/// Box-drawn terminal table.
pub struct BoxTable {
	table: Table,
}

/// Single-line progress bar, redrawn in place with a carriage return.
#[derive(Debug, Default)]
pub struct ProgressBar {
	current: usize,
	total: usize,
}

/// Present
///
/// Drive `table` and `progress` in lockstep over the rows of `job`: each row is added to the table
/// and then the progress bar advances once. Once all rows are in, the bar is finished and the table
/// is drawn. `delay`, if set, pauses after each row.
pub fn present<T: TableSink, P: ProgressSink>(
	job: &RenderJob,
	table: &mut T,
	progress: &mut P,
	out: &mut dyn Write,
	delay: Option<Duration>,
) -> io::Result<()> {
	table.begin_table(job.headers());
	progress.start(out, job.rows().len())?;
	for record in job.rows() {
		table.add_row(record);
		if let Some(delay) = delay {
			thread::sleep(delay);
		}
		progress.advance(out)?;
	}
	progress.finish(out)?;
	log::debug!("Rendering {} rows", job.rows().len());
	table.render(out)
}

impl BoxTable {
	pub fn new() -> Self {
		let mut table = Table::new();
		table.set_format(*format::consts::FORMAT_BOX_CHARS);
		Self { table }
	}
}

impl Default for BoxTable {
	fn default() -> Self {
		Self::new()
	}
}

fn to_row(fields: &[String]) -> Row {
	Row::new(fields.iter().map(|field| Cell::new(field)).collect())
}

impl TableSink for BoxTable {
	fn begin_table(&mut self, headers: &[String]) {
		if !headers.is_empty() {
			self.table.set_titles(to_row(headers));
		}
	}

	fn add_row(&mut self, record: &[String]) {
		self.table.add_row(to_row(record));
	}

	fn render(&self, mut out: &mut dyn Write) -> io::Result<()> {
		self.table.print(&mut out)?;
		Ok(())
	}
}

impl ProgressBar {
	pub fn new() -> Self {
		Self::default()
	}

	fn draw(&self, out: &mut dyn Write) -> io::Result<()> {
		let filled = if self.total == 0 {
			BAR_WIDTH
		} else {
			BAR_WIDTH * self.current / self.total
		};
		let percent = if self.total == 0 {
			100
		} else {
			100 * self.current / self.total
		};
		let mut bar = "=".repeat(filled);
		if filled < BAR_WIDTH {
			bar.push('>');
			bar.push_str(&"-".repeat(BAR_WIDTH - filled - 1));
		}
		write!(
			out,
			"\r {}/{} [{}] {:>3}%",
			self.current, self.total, bar, percent
		)?;
		out.flush()
	}
}

impl ProgressSink for ProgressBar {
	fn start(&mut self, out: &mut dyn Write, total: usize) -> io::Result<()> {
		self.current = 0;
		self.total = total;
		self.draw(out)
	}

	fn advance(&mut self, out: &mut dyn Write) -> io::Result<()> {
		// Never run past the end, the bar would overflow its width
		self.current = (self.current + 1).min(self.total);
		self.draw(out)
	}

	fn finish(&mut self, out: &mut dyn Write) -> io::Result<()> {
		self.current = self.total;
		self.draw(out)?;
		writeln!(out)
	}
}

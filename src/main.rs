//! Program entrypoint and argument parsing.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;

use csv_preview::process::Preview;
use csv_preview::types::Config;

/// Render the first rows of a CSV file as a table.
///
/// Exits with 1 if the file can't be read or parsed. A file without any rows is reported but
/// still exits with 0.
#[derive(Debug, Parser)]
#[command(name = "csv-preview", version, about)]
struct Args {
	/// CSV file to read from.
	filename: PathBuf,

	/// Field delimiter, a single ASCII character.
	#[arg(long, default_value_t = Delimiter(Config::default().delimiter), value_parser = parse_delimiter)]
	delimiter: Delimiter,

	/// Max rows to show.
	#[arg(long, default_value_t = Config::default().max_rows, allow_negative_numbers = true)]
	max: i64,

	/// Use this if the CSV contains no headers as first row.
	#[arg(long)]
	no_headers: bool,

	/// Pause after each row, in milliseconds.
	#[arg(long, value_name = "MS", default_value_t = 0)]
	row_delay: u64,
}

/// Delimiter byte, shown as its character in help output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Delimiter(u8);

impl fmt::Display for Delimiter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0 as char)
	}
}

/// Parse Delimiter
///
/// The tokenizer splits on bytes, so only a single ASCII character makes sense.
fn parse_delimiter(s: &str) -> Result<Delimiter, String> {
	match s.as_bytes() {
		[b] if b.is_ascii() => Ok(Delimiter(*b)),
		_ => Err(format!("expected a single ASCII character, got {:?}", s)),
	}
}

impl From<Args> for Config {
	fn from(args: Args) -> Self {
		Config {
			delimiter: args.delimiter.0,
			max_rows: args.max,
			no_headers: args.no_headers,
			row_delay: (args.row_delay > 0).then(|| Duration::from_millis(args.row_delay)),
		}
	}
}

fn main() -> ExitCode {
	env_logger::init();
	let args = Args::parse();
	let filename = args.filename.clone();
	let preview = Preview::new(args.into());

	let mut output = io::stdout().lock();
	match preview.run(&filename, &mut output) {
		Ok(outcome) => ExitCode::from(outcome.exit_code()),
		Err(e) => {
			log::error!("{:#}", e);
			eprintln!("[ERROR] {:#}", e);
			ExitCode::FAILURE
		}
	}
}

//! Row source adapter over the CSV tokenizer.

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use csv::{Position, StringRecord};

use crate::types::{PreviewError, Record};

/// Row Source
///
/// Pull-based cursor over the records of a delimited file. Every physical line is yielded as a
/// record (no header handling happens here) and ragged rows are passed through untouched. The
/// underlying file handle is released when the source is dropped.
pub struct RowSource {
	rdr: csv::Reader<BufReader<File>>,
	buf: StringRecord,
	peeked: VecDeque<Record>,
}

impl RowSource {
	/// Open
	///
	/// Check that `path` is a readable regular file and open it for tokenizing with `delimiter`.
	/// Any failure here is reported as `NotReadable` so it never gets confused with a parse error.
	pub fn open<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Self, PreviewError> {
		let path = path.as_ref();
		let not_readable = || PreviewError::NotReadable {
			path: path.to_path_buf(),
		};
		match fs::metadata(path) {
			Ok(meta) if meta.is_file() => {}
			Ok(_) => {
				log::debug!("'{}' is not a regular file", path.display());
				return Err(not_readable());
			}
			Err(e) => {
				log::debug!("Can't stat '{}': {}", path.display(), e);
				return Err(not_readable());
			}
		}
		let file = File::open(path).map_err(|e| {
			log::debug!("Can't open '{}': {}", path.display(), e);
			not_readable()
		})?;

		let rdr = csv::ReaderBuilder::new()
			.delimiter(delimiter)
			.has_headers(false)
			.flexible(true)
			.from_reader(BufReader::new(file));
		log::debug!("Opened '{}'", path.display());

		Ok(Self {
			rdr,
			buf: StringRecord::new(),
			peeked: VecDeque::new(),
		})
	}

	/// Next Record
	///
	/// Pull the next record, or `None` once the file is exhausted.
	pub fn next_record(&mut self) -> Result<Option<Record>, PreviewError> {
		match self.peeked.pop_front() {
			Some(record) => Ok(Some(record)),
			None => self.read_record(),
		}
	}

	/// Is Empty
	///
	/// True if no record in the source has any content. Records are read ahead only as far as the
	/// first non-trivial one and are buffered, so `next_record` still returns all of them in order.
	pub fn is_empty(&mut self) -> Result<bool, PreviewError> {
		if self.peeked.iter().any(|r| !is_trivial(r)) {
			return Ok(false);
		}
		while let Some(record) = self.read_record()? {
			let trivial = is_trivial(&record);
			self.peeked.push_back(record);
			if !trivial {
				return Ok(false);
			}
		}
		Ok(true)
	}

	fn read_record(&mut self) -> Result<Option<Record>, PreviewError> {
		if self.rdr.read_record(&mut self.buf)? {
			Ok(Some(self.buf.iter().map(String::from).collect()))
		} else {
			Ok(None)
		}
	}

	/// Take
	///
	/// Pull up to `n` further records. Fewer are returned if the source runs out first.
	pub fn take_records(&mut self, n: usize) -> Result<Vec<Record>, PreviewError> {
		let mut records = Vec::with_capacity(n.min(1024));
		while records.len() < n {
			match self.next_record()? {
				Some(record) => records.push(record),
				None => break,
			}
		}
		Ok(records)
	}

	/// Rewind
	///
	/// Restart iteration from the first record of the file.
	pub fn rewind(&mut self) -> Result<(), PreviewError> {
		self.peeked.clear();
		self.rdr.seek(Position::new())?;
		Ok(())
	}
}

impl Iterator for RowSource {
	type Item = Result<Record, PreviewError>;

	fn next(&mut self) -> Option<Self::Item> {
		self.next_record().transpose()
	}
}

/// A record is trivial when none of its fields hold any text.
pub fn is_trivial(record: &[String]) -> bool {
	record.iter().all(|field| field.is_empty())
}

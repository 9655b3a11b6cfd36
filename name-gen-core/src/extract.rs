use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::NameGenError;
use crate::io::{ensure_parent, write_list};

/// Column holding the two-letter country code.
pub const CODE_COLUMN: usize = 0;
/// Column holding the place name.
pub const NAME_COLUMN: usize = 1;

/// Collects the place name of every row whose country code is in `codes`.
///
/// # Notes
/// - Rows are in CSV format; quoted fields may contain commas and `""`
/// - Codes are compared case-insensitively after trimming
/// - Rows with fewer than two fields are skipped with a warning
/// - Names keep the table order and are trimmed; blank names are dropped
pub fn extract_places<R: BufRead, S: AsRef<str>>(reader: R, codes: &[S]) -> Result<Vec<String>, NameGenError> {
	let codes: Vec<String> = codes.iter().map(|c| c.as_ref().trim().to_ascii_uppercase()).collect();
	let mut places = Vec::new();

	for (number, line) in reader.lines().enumerate() {
		let line = line.map_err(|e| NameGenError::io("<csv input>", e))?;
		if line.trim().is_empty() {
			continue;
		}
		let fields = split_record(&line);
		let (Some(code), Some(name)) = (fields.get(CODE_COLUMN), fields.get(NAME_COLUMN)) else {
			log::warn!("skipping row {}: expected at least 2 fields", number + 1);
			continue;
		};
		if codes.iter().any(|c| c.eq_ignore_ascii_case(code.trim())) {
			let name = name.trim();
			if !name.is_empty() {
				places.push(name.to_owned());
			}
		}
	}

	log::debug!("extracted {} places for {:?}", places.len(), codes);
	Ok(places)
}

/// Reads `csv_path`, extracts the places of `codes` and writes them to
/// `<output_dir>/<CODES joined by spaces>.txt`.
///
/// Returns the output path and the extracted names.
pub fn extract_to_file<S: AsRef<str>>(
	csv_path: &Path,
	output_dir: &Path,
	codes: &[S],
) -> Result<(PathBuf, Vec<String>), NameGenError> {
	let file = File::open(csv_path).map_err(|e| NameGenError::io(csv_path, e))?;
	let places = extract_places(BufReader::new(file), codes)?;

	let output = output_dir.join(seed_file_name(codes));
	ensure_parent(&output)?;
	write_list(&output, &places)?;
	Ok((output, places))
}

/// Seed file named after the requested codes, e.g. `UZ QA ZW.txt`.
pub fn seed_file_name<S: AsRef<str>>(codes: &[S]) -> String {
	let joined: Vec<String> = codes.iter().map(|c| c.as_ref().trim().to_ascii_uppercase()).collect();
	format!("{}.txt", joined.join(" "))
}

/// Splits one CSV record into fields.
fn split_record(line: &str) -> Vec<String> {
	let mut fields = Vec::new();
	let mut field = String::new();
	let mut quoted = false;
	let mut chars = line.chars().peekable();

	while let Some(c) = chars.next() {
		match c {
			'"' if quoted => {
				if chars.peek() == Some(&'"') {
					field.push('"');
					chars.next();
				} else {
					quoted = false;
				}
			}
			'"' if field.is_empty() => quoted = true,
			',' if !quoted => fields.push(std::mem::take(&mut field)),
			_ => field.push(c),
		}
	}
	fields.push(field);
	fields
}

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::error::NameGenError;

/// Reads a line-delimited name list.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Trims every line and drops the blank ones
pub(crate) fn read_list<P: AsRef<Path>>(filename: P) -> Result<Vec<String>, NameGenError> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|e| NameGenError::io(path, e))?;

	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect())
}

/// Overwrites `filename` with one name per line, in the given order.
pub(crate) fn write_list<P: AsRef<Path>>(filename: P, names: &[String]) -> Result<(), NameGenError> {
	let path = filename.as_ref();
	let file = File::create(path).map_err(|e| NameGenError::io(path, e))?;
	let mut writer = BufWriter::new(file);
	for name in names {
		writeln!(writer, "{name}").map_err(|e| NameGenError::io(path, e))?;
	}
	writer.flush().map_err(|e| NameGenError::io(path, e))
}

/// Builds the path a list is exported to.
///
/// Example:
/// `"out"` + `"Places"` → `out/Places_new.txt`
pub(crate) fn build_export_path(export_dir: &str, list_name: &str) -> PathBuf {
	let mut output = normalize_folder(export_dir);
	output.push(format!("{list_name}_new.txt"));
	output
}

/// Normalize a folder path.
///
/// - `"."`, `"./"` or `""` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &str) -> PathBuf {
	if input.is_empty() || input == "." || input == "./" {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		PathBuf::from(input)
	}
}

/// Creates the parent directory of `path` when it does not exist yet.
pub(crate) fn ensure_parent<P: AsRef<Path>>(path: P) -> Result<(), NameGenError> {
	let path = path.as_ref();
	match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
			fs::create_dir_all(parent).map_err(|e| NameGenError::io(parent, e))
		}
		_ => Ok(()),
	}
}

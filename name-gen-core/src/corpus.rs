use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::PathsConfig;
use crate::error::NameGenError;
use crate::io::{build_export_path, ensure_parent, read_list, write_list};
use crate::model::title_case;

/// The two lists an operator may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
	/// Accepted generated names.
	Fictional,
	/// Names the operator turned down.
	Rejects,
}

impl ListKind {
	/// Label used in menus and export file names.
	pub fn label(self) -> &'static str {
		match self {
			ListKind::Fictional => "Places",
			ListKind::Rejects => "Rejects",
		}
	}
}

impl fmt::Display for ListKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Where the three name lists live on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusPaths {
	pub fictional: PathBuf,
	pub real: PathBuf,
	pub rejects: PathBuf,
}

impl From<&PathsConfig> for CorpusPaths {
	fn from(paths: &PathsConfig) -> Self {
		Self {
			fictional: paths.fictional.clone(),
			real: paths.real.clone(),
			rejects: paths.rejects.clone(),
		}
	}
}

/// Accepted, real and rejected names, plus the files they came from.
///
/// # Responsibilities
/// - Provide the training corpus (fictional names followed by real names)
/// - Answer membership questions used for duplicate suppression
/// - Apply keep / reject / add / remove decisions
/// - Persist the fictional and rejected lists (the real list is never written)
///
/// # Invariants
/// - Every stored name is trimmed and non-empty
/// - Order is insertion order and is preserved on save
/// - Lookups compare title-cased forms, so `"Al Khor"` on disk matches the
///   generated `"Al khor"`; stored spelling is left as is
#[derive(Debug, Clone, Default)]
pub struct CorpusState {
	fictional: Vec<String>,
	real: Vec<String>,
	rejects: Vec<String>,
	paths: Option<CorpusPaths>,
}

impl CorpusState {
	/// Creates an in-memory state with no backing files.
	///
	/// Names are trimmed and blank entries dropped.
	pub fn new<S: AsRef<str>>(fictional: &[S], real: &[S], rejects: &[S]) -> Self {
		Self {
			fictional: clean(fictional),
			real: clean(real),
			rejects: clean(rejects),
			paths: None,
		}
	}

	/// Loads the three lists from disk.
	///
	/// # Errors
	/// Returns `Io` if any of the three files cannot be read.
	pub fn load(paths: CorpusPaths) -> Result<Self, NameGenError> {
		let fictional = read_list(&paths.fictional)?;
		let real = read_list(&paths.real)?;
		let rejects = read_list(&paths.rejects)?;
		log::info!(
			"loaded corpus: {} fictional, {} real, {} rejected",
			fictional.len(),
			real.len(),
			rejects.len()
		);
		Ok(Self { fictional, real, rejects, paths: Some(paths) })
	}

	/// Overwrites the fictional and rejected lists on disk.
	///
	/// A state created with [`CorpusState::new`] has nowhere to save to and
	/// this is a no-op.
	///
	/// # Errors
	/// Returns `Io` if a file cannot be written.
	pub fn save(&self) -> Result<(), NameGenError> {
		let Some(paths) = &self.paths else {
			log::debug!("corpus has no backing files, skipping save");
			return Ok(());
		};
		self.save_to(&paths.fictional, &paths.rejects)
	}

	/// Writes the fictional and rejected lists to explicit locations.
	pub fn save_to<P: AsRef<Path>>(&self, fictional: P, rejects: P) -> Result<(), NameGenError> {
		ensure_parent(&fictional)?;
		write_list(&fictional, &self.fictional)?;
		ensure_parent(&rejects)?;
		write_list(&rejects, &self.rejects)?;
		log::debug!(
			"saved {} fictional names to {} and {} rejects to {}",
			self.fictional.len(),
			fictional.as_ref().display(),
			self.rejects.len(),
			rejects.as_ref().display()
		);
		Ok(())
	}

	pub fn paths(&self) -> Option<&CorpusPaths> {
		self.paths.as_ref()
	}

	/// Training input: fictional names followed by real names.
	pub fn training_names(&self) -> impl Iterator<Item = &str> {
		self.fictional.iter().chain(self.real.iter()).map(String::as_str)
	}

	pub fn fictional(&self) -> &[String] {
		&self.fictional
	}

	pub fn real(&self) -> &[String] {
		&self.real
	}

	pub fn rejects(&self) -> &[String] {
		&self.rejects
	}

	/// `true` if `name` is in the corpus (fictional or real) or in the rejects.
	pub fn is_known(&self, name: &str) -> bool {
		let name = title_case(name);
		contains(&self.fictional, &name) || contains(&self.real, &name) || contains(&self.rejects, &name)
	}

	/// `true` if `name` is a real seed name or a reject.
	///
	/// Batch previews use this narrower test: previously accepted names may
	/// come up again.
	pub fn is_real_or_rejected(&self, name: &str) -> bool {
		let name = title_case(name);
		contains(&self.real, &name) || contains(&self.rejects, &name)
	}

	/// Appends an accepted name.
	pub fn keep(&mut self, name: String) {
		self.fictional.push(name);
	}

	/// Appends a rejected name.
	pub fn reject(&mut self, name: String) {
		self.rejects.push(name);
	}

	pub fn list(&self, kind: ListKind) -> &[String] {
		match kind {
			ListKind::Fictional => &self.fictional,
			ListKind::Rejects => &self.rejects,
		}
	}

	/// Direct mutable access to an editable list.
	pub fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
		match kind {
			ListKind::Fictional => &mut self.fictional,
			ListKind::Rejects => &mut self.rejects,
		}
	}

	/// Title-cases `raw` and appends it to `kind`.
	///
	/// Returns the stored form.
	///
	/// # Errors
	/// Returns `InvalidInput` if `raw` is blank.
	pub fn add(&mut self, kind: ListKind, raw: &str) -> Result<String, NameGenError> {
		let name = title_case(raw.trim());
		if name.is_empty() {
			return Err(NameGenError::invalid_input(raw));
		}
		self.list_mut(kind).push(name.clone());
		Ok(name)
	}

	/// Title-cases `raw` and removes its first occurrence from `kind`.
	///
	/// # Errors
	/// Returns `NotFound` if the list does not contain the name.
	pub fn remove(&mut self, kind: ListKind, raw: &str) -> Result<String, NameGenError> {
		let name = title_case(raw.trim());
		let list = self.list_mut(kind);
		match list.iter().position(|n| title_case(n) == name) {
			Some(position) => Ok(list.remove(position)),
			None => Err(NameGenError::NotFound { name }),
		}
	}

	/// Writes a copy of `kind` to `<export_dir>/<Label>_new.txt`.
	///
	/// Returns the path written.
	pub fn export(&self, kind: ListKind, export_dir: &str) -> Result<PathBuf, NameGenError> {
		let path = build_export_path(export_dir, kind.label());
		ensure_parent(&path)?;
		write_list(&path, self.list(kind))?;
		log::info!("exported {} names from {} to {}", self.list(kind).len(), kind, path.display());
		Ok(path)
	}
}

/// `needle` must already be title-cased.
fn contains(list: &[String], needle: &str) -> bool {
	list.iter().any(|n| title_case(n) == needle)
}

fn clean<S: AsRef<str>>(names: &[S]) -> Vec<String> {
	names
		.iter()
		.map(|n| n.as_ref().trim())
		.filter(|n| !n.is_empty())
		.map(str::to_owned)
		.collect()
}

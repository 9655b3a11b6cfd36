use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::NameGenError;

/// Smallest accepted prefix length.
pub const MIN_PREFIX_LENGTH: usize = 1;
/// Largest accepted prefix length.
pub const MAX_PREFIX_LENGTH: usize = 10;

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "NAMEGEN_CONFIG";
/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "namegen.toml";

/// Complete generator configuration.
///
/// Every section and field is optional in the TOML file; missing values
/// fall back to their defaults.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct GeneratorConfig {
	#[serde(default)]
	pub model: ModelConfig,
	#[serde(default)]
	pub session: SessionConfig,
	#[serde(default)]
	pub batch: BatchConfig,
	#[serde(default)]
	pub paths: PathsConfig,
}

impl GeneratorConfig {
	/// Loads the configuration.
	///
	/// Resolution order:
	/// - `explicit` path (usually the first command line argument)
	/// - `NAMEGEN_CONFIG` environment variable
	/// - `namegen.toml` in the working directory
	/// - built-in defaults
	///
	/// An explicitly named file that does not exist is an error; the implicit
	/// `namegen.toml` is optional.
	///
	/// # Errors
	/// Returns `Io`, `ConfigParse` or `Configuration` errors.
	pub fn load(explicit: Option<&Path>) -> Result<Self, NameGenError> {
		let (path, required) = match explicit {
			Some(path) => (path.to_path_buf(), true),
			None => match env::var(CONFIG_ENV) {
				Ok(path) => (PathBuf::from(path), true),
				Err(_) => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
			},
		};

		if !required && !path.exists() {
			log::debug!("no {} found, using defaults", path.display());
			return Ok(Self::default());
		}

		let raw = fs::read_to_string(&path).map_err(|e| NameGenError::io(&path, e))?;
		let config = Self::from_toml(&raw).map_err(|e| match e {
			NameGenError::ConfigParse { source, .. } => NameGenError::ConfigParse { path: path.clone(), source },
			other => other,
		})?;
		log::debug!("loaded configuration from {}", path.display());
		Ok(config)
	}

	/// Parses and validates a TOML document.
	pub fn from_toml(raw: &str) -> Result<Self, NameGenError> {
		let config: Self = toml::from_str(raw)
			.map_err(|source| NameGenError::ConfigParse { path: PathBuf::from("<inline>"), source })?;
		config.validate()?;
		Ok(config)
	}

	/// Checks every value that would make generation impossible.
	///
	/// # Errors
	/// Returns `Configuration` on the first invalid value.
	pub fn validate(&self) -> Result<(), NameGenError> {
		validate_prefix_length(self.model.prefix_length)?;
		if self.model.max_length == 0 {
			return Err(NameGenError::Configuration { reason: "max_length must be at least 1".to_owned() });
		}
		if self.session.duplicate_budget == 0 {
			return Err(NameGenError::Configuration { reason: "duplicate_budget must be at least 1".to_owned() });
		}
		if self.batch.attempt_budget == 0 {
			return Err(NameGenError::Configuration { reason: "attempt_budget must be at least 1".to_owned() });
		}
		Ok(())
	}
}

/// Checks that a prefix length lies in `1..=10`.
pub fn validate_prefix_length(prefix_length: usize) -> Result<(), NameGenError> {
	if !(MIN_PREFIX_LENGTH..=MAX_PREFIX_LENGTH).contains(&prefix_length) {
		return Err(NameGenError::Configuration {
			reason: format!(
				"prefix length must be between {MIN_PREFIX_LENGTH} and {MAX_PREFIX_LENGTH}, got {prefix_length}"
			),
		});
	}
	Ok(())
}

/// Parameters of the statistical model.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct ModelConfig {
	/// Number of characters used as the lookup key.
	#[serde(default = "default_prefix_length")]
	pub prefix_length: usize,
	/// Hard cap on the length of a generated name.
	#[serde(default = "default_max_length")]
	pub max_length: usize,
	/// Rebuild the model after every kept name instead of once per session.
	#[serde(default)]
	pub rebuild_on_accept: bool,
}

impl Default for ModelConfig {
	fn default() -> Self {
		Self {
			prefix_length: default_prefix_length(),
			max_length: default_max_length(),
			rebuild_on_accept: false,
		}
	}
}

fn default_prefix_length() -> usize {
	2
}

fn default_max_length() -> usize {
	9
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct SessionConfig {
	/// Consecutive already-known draws tolerated before sampling gives up.
	#[serde(default = "default_attempt_budget")]
	pub duplicate_budget: usize,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self { duplicate_budget: default_attempt_budget() }
	}
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct BatchConfig {
	/// Number of names a batch preview produces.
	#[serde(default = "default_batch_size")]
	pub size: usize,
	/// Consecutive non-novel draws tolerated before a batch ends early.
	#[serde(default = "default_attempt_budget")]
	pub attempt_budget: usize,
}

impl Default for BatchConfig {
	fn default() -> Self {
		Self {
			size: default_batch_size(),
			attempt_budget: default_attempt_budget(),
		}
	}
}

fn default_batch_size() -> usize {
	100
}

fn default_attempt_budget() -> usize {
	10_000
}

/// Locations of the three name lists and of exported copies.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PathsConfig {
	#[serde(default = "default_fictional_path")]
	pub fictional: PathBuf,
	#[serde(default = "default_real_path")]
	pub real: PathBuf,
	#[serde(default = "default_rejects_path")]
	pub rejects: PathBuf,
	#[serde(default = "default_export_dir")]
	pub export_dir: String,
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			fictional: default_fictional_path(),
			real: default_real_path(),
			rejects: default_rejects_path(),
			export_dir: default_export_dir(),
		}
	}
}

fn default_fictional_path() -> PathBuf {
	PathBuf::from("data/places.txt")
}

fn default_real_path() -> PathBuf {
	PathBuf::from("data/real_names.txt")
}

fn default_rejects_path() -> PathBuf {
	PathBuf::from("data/rejects.txt")
}

fn default_export_dir() -> String {
	".".to_owned()
}

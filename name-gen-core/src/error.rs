use std::io;
use std::path::PathBuf;

/// Errors raised by the name generator.
///
/// `InvalidInput` and `NotFound` are always recovered locally by the
/// interactive loops (report and re-prompt); the other variants are fatal
/// for the operation that raised them.
#[derive(Debug, thiserror::Error)]
pub enum NameGenError {
	#[error("invalid configuration: {reason}")]
	Configuration { reason: String },

	#[error("the model has no starting transition (empty corpus)")]
	EmptyModel,

	#[error("invalid input: {input:?}")]
	InvalidInput { input: String },

	#[error("name not found: {name}")]
	NotFound { name: String },

	#[error("i/o error on {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse configuration {}: {source}", .path.display())]
	ConfigParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("console error: {0}")]
	Console(#[from] io::Error),
}

impl NameGenError {
	/// Builds an `Io` error bound to the file that caused it.
	pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}

	/// Builds an `InvalidInput` error from the raw operator response.
	pub(crate) fn invalid_input(input: &str) -> Self {
		Self::InvalidInput { input: input.to_owned() }
	}
}

//! Error types for semantic data loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building the semantic data registry.
///
/// All of these are fatal: a registry is either fully constructed or not
/// constructed at all.
#[derive(Debug, Error)]
pub enum SemanticDataError {
	/// The section/keyword table is not valid JSON or has the wrong shape.
	#[error("failed to parse section keyword table: {0}")]
	Json(#[from] serde_json::Error),

	/// The section/keyword table parsed but defines no sections.
	#[error("section keyword table defines no sections")]
	NoSections,

	/// Error reading a semantic data file from disk.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// An embedded asset is missing or is not valid UTF-8.
	#[error("missing semantic data asset: {0}")]
	MissingAsset(&'static str),
}

/// Result type for semantic data operations.
pub type Result<T> = std::result::Result<T, SemanticDataError>;

//! Inputs used to build [`SemanticData`](crate::SemanticData).
//!
//! The registry is built from three static inputs: the section/keyword JSON
//! table, systemd's gperf key table, and a store of per-key documentation
//! blurbs. By default all three come from the assets embedded in
//! `unitfile-runtime`; hosts can point at an on-disk copy instead, or hand in
//! the tables directly.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use crate::error::{Result, SemanticDataError};

/// File name of the section/keyword metadata table inside a data directory.
pub const SECTION_KEYWORDS_FILE: &str = "sectionToKeywordMap.json";

/// File name of the gperf validator table inside a data directory.
pub const LOAD_FRAGMENT_FILE: &str = "load-fragment-gperf.gperf";

/// Relative path of the completion document for `section` / `key`.
pub fn completion_document_path(section: &str, key: &str) -> String {
	format!("documents/completion/{section}/{key}.html")
}

/// Lookup of documentation blurbs by relative path.
///
/// A missing document is `Ok(None)`; `Err` is reserved for documents that
/// exist but could not be read.
pub trait DocumentStore: fmt::Debug + Send + Sync {
	fn get(&self, path: &str) -> io::Result<Option<Cow<'_, [u8]>>>;
}

/// Documents compiled into the binary.
#[cfg(feature = "embedded")]
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDocuments;

#[cfg(feature = "embedded")]
impl DocumentStore for EmbeddedDocuments {
	fn get(&self, path: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
		Ok(unitfile_runtime::document(path).map(Cow::Borrowed))
	}
}

/// Documents read from a directory on disk at lookup time.
#[derive(Debug, Clone)]
pub struct DirectoryDocuments {
	root: PathBuf,
}

impl DirectoryDocuments {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}
}

impl DocumentStore for DirectoryDocuments {
	fn get(&self, path: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
		match fs::read(self.root.join(path)) {
			Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
			Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
			Err(e) => Err(e),
		}
	}
}

/// A store with no documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocuments;

impl DocumentStore for NoDocuments {
	fn get(&self, _path: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
		Ok(None)
	}
}

/// The complete set of inputs for one registry.
#[derive(Debug)]
pub struct SemanticSources {
	pub(crate) section_keywords: Cow<'static, str>,
	pub(crate) load_fragment: Cow<'static, str>,
	pub(crate) documents: Box<dyn DocumentStore>,
}

impl SemanticSources {
	/// Sources backed by the assets embedded in `unitfile-runtime`.
	#[cfg(feature = "embedded")]
	pub fn embedded() -> Result<Self> {
		let section_keywords = unitfile_runtime::section_keywords_json()
			.ok_or(SemanticDataError::MissingAsset(unitfile_runtime::SECTION_KEYWORDS_FILE))?;
		let load_fragment = unitfile_runtime::load_fragment_gperf()
			.ok_or(SemanticDataError::MissingAsset(unitfile_runtime::LOAD_FRAGMENT_FILE))?;

		Ok(Self {
			section_keywords: Cow::Borrowed(section_keywords),
			load_fragment: Cow::Borrowed(load_fragment),
			documents: Box::new(EmbeddedDocuments),
		})
	}

	/// Sources read from a directory laid out like `runtime/semantic/`.
	///
	/// Both tables are read eagerly; documents are read on lookup.
	pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
		let root = root.as_ref();
		let read = |name: &str| {
			let path = root.join(name);
			fs::read_to_string(&path).map_err(|error| SemanticDataError::Io { path, error })
		};

		Ok(Self {
			section_keywords: Cow::Owned(read(SECTION_KEYWORDS_FILE)?),
			load_fragment: Cow::Owned(read(LOAD_FRAGMENT_FILE)?),
			documents: Box::new(DirectoryDocuments::new(root)),
		})
	}

	/// Sources from in-memory tables, with no documents.
	pub fn from_strs(
		section_keywords: impl Into<Cow<'static, str>>,
		load_fragment: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			section_keywords: section_keywords.into(),
			load_fragment: load_fragment.into(),
			documents: Box::new(NoDocuments),
		}
	}

	/// Replaces the document store.
	pub fn with_documents(mut self, documents: impl DocumentStore + 'static) -> Self {
		self.documents = Box::new(documents);
		self
	}
}

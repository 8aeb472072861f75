//! Embedded runtime assets for unit-file semantic data.
//!
//! The files under `runtime/semantic/` at the workspace root are compiled into
//! the binary so the semantic registry can be built without touching the disk:
//!
//! - `sectionToKeywordMap.json`: section → key → documentation metadata
//! - `load-fragment-gperf.gperf`: systemd's key → parser table
//! - `documents/completion/<Section>/<Key>.html`: per-key documentation blurbs

use include_dir::{Dir, include_dir};

/// Embedded semantic data from `runtime/semantic/`.
static SEMANTIC_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../../runtime/semantic");

/// File name of the section/keyword metadata table.
pub const SECTION_KEYWORDS_FILE: &str = "sectionToKeywordMap.json";

/// File name of the gperf-derived validator table.
pub const LOAD_FRAGMENT_FILE: &str = "load-fragment-gperf.gperf";

/// Directory holding the per-key completion documents.
pub const COMPLETION_DOCUMENTS_DIR: &str = "documents/completion";

/// Returns the embedded section/keyword JSON table.
pub fn section_keywords_json() -> Option<&'static str> {
	SEMANTIC_DIR.get_file(SECTION_KEYWORDS_FILE)?.contents_utf8()
}

/// Returns the embedded gperf validator table.
pub fn load_fragment_gperf() -> Option<&'static str> {
	SEMANTIC_DIR.get_file(LOAD_FRAGMENT_FILE)?.contents_utf8()
}

/// Returns the raw bytes of an embedded document by relative path.
pub fn document(path: &str) -> Option<&'static [u8]> {
	SEMANTIC_DIR.get_file(path).map(|file| file.contents())
}

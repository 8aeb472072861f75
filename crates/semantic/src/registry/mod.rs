//! Section/key registry for unit files.
//!
//! [`SemanticData`] answers every question the editing layer asks about a
//! `(section, key)` pair: whether it is known, where it is documented, and
//! which [`OptionValidator`] applies to its value. It is built once from
//! [`SemanticSources`] and is read-only afterwards; share it with `Arc`.
//!
//! Unknown sections and keys are never errors. They simply have no metadata,
//! no documentation and the [`OptionValidator::Null`] validator.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::{Result, SemanticDataError};
use crate::gperf::ValidatorTable;
use crate::sections;
use crate::sources::{DocumentStore, SemanticSources, completion_document_path};
use crate::validators::OptionValidator;

#[cfg(test)]
mod tests;

/// Documentation metadata for one key of one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordData {
	/// Key whose documentation also covers this one (e.g. `After=` is
	/// documented under `Before=`).
	#[serde(default)]
	pub declared_under_keyword: Option<String>,
	/// Manual page that defines the key (e.g. `systemd.exec`).
	#[serde(default)]
	pub declared_in_file: Option<String>,
}

type SectionKeywords = BTreeMap<String, BTreeMap<String, KeywordData>>;

/// The section/key registry and validator dispatch.
#[derive(Debug)]
pub struct SemanticData {
	sections: SectionKeywords,
	validators: ValidatorTable,
	documents: Box<dyn DocumentStore>,
}

impl SemanticData {
	/// Builds the registry from the embedded assets.
	#[cfg(feature = "embedded")]
	pub fn load() -> Result<Self> {
		Self::from_sources(SemanticSources::embedded()?)
	}

	/// Builds the registry from explicit sources.
	///
	/// Fails if the keyword table cannot be parsed or defines no sections.
	/// Malformed lines in the gperf table are skipped.
	pub fn from_sources(sources: SemanticSources) -> Result<Self> {
		let sections: SectionKeywords = serde_json::from_str(&sources.section_keywords)?;
		if sections.is_empty() {
			return Err(SemanticDataError::NoSections);
		}
		let validators = ValidatorTable::parse(&sources.load_fragment);
		if validators.is_empty() {
			tracing::warn!("validator table has no records; every value will be accepted");
		}

		tracing::debug!(
			sections = sections.len(),
			keywords = sections.values().map(BTreeMap::len).sum::<usize>(),
			validated_keys = validators.len(),
			"loaded unit file semantic data"
		);

		Ok(Self {
			sections,
			validators,
			documents: sources.documents,
		})
	}

	/// All section names with known keys.
	pub fn section_names(&self) -> BTreeSet<&str> {
		self.sections.keys().map(String::as_str).collect()
	}

	pub fn is_known_section(&self, section: &str) -> bool {
		self.sections.contains_key(section)
	}

	/// Keys allowed in `section`; empty for unknown sections.
	pub fn keywords_in_section(&self, section: &str) -> BTreeSet<&str> {
		self.sections
			.get(section)
			.into_iter()
			.flat_map(|keys| keys.keys().map(String::as_str))
			.collect()
	}

	pub fn is_known_keyword(&self, section: &str, key: &str) -> bool {
		self.keyword_data(section, key).is_some()
	}

	pub fn keyword_data(&self, section: &str, key: &str) -> Option<&KeywordData> {
		self.sections.get(section)?.get(key)
	}

	/// Key to link documentation to when `key` shares its documentation.
	pub fn keyword_documentation_anchor(&self, section: &str, key: &str) -> Option<&str> {
		self.keyword_data(section, key)?.declared_under_keyword.as_deref()
	}

	/// Manual page that defines `key`.
	///
	/// Many keys are shared between unit types (`WorkingDirectory=` is
	/// defined in `systemd.exec` but allowed in `[Service]`, `[Socket]`, ...).
	pub fn keyword_documentation_file(&self, section: &str, key: &str) -> Option<&str> {
		self.keyword_data(section, key)?.declared_in_file.as_deref()
	}

	pub fn section_reference_url(&self, section: &str) -> Option<&'static str> {
		sections::section_reference_url(section)
	}

	pub fn section_description(&self, section: &str) -> Option<&'static str> {
		sections::section_description(section)
	}

	/// HTML documentation blurb for `key` in `section`, if one is stored.
	///
	/// Unreadable or non-UTF-8 documents are logged and treated as missing.
	pub fn key_documentation(&self, section: &str, key: &str) -> Option<String> {
		if !is_plain_name(section) || !is_plain_name(key) {
			return None;
		}

		let path = completion_document_path(section, key);
		let bytes = match self.documents.get(&path) {
			Ok(bytes) => bytes?,
			Err(e) => {
				tracing::warn!(path = %path, error = %e, "could not read documentation");
				return None;
			}
		};

		match String::from_utf8(bytes.into_owned()) {
			Ok(doc) => Some(doc),
			Err(e) => {
				tracing::warn!(path = %path, error = %e, "documentation is not valid UTF-8");
				None
			}
		}
	}

	/// Name of the validator registered for `section` / `key`.
	pub fn validator_name(&self, section: &str, key: &str) -> Option<&str> {
		self.validators.get(section, key)
	}

	/// Validator for the value of `section` / `key`.
	///
	/// Falls back to [`OptionValidator::Null`] when no validator is registered
	/// or the registered name is not one this crate implements.
	pub fn validator_for(&self, section: &str, key: &str) -> OptionValidator {
		self.validator_name(section, key)
			.and_then(OptionValidator::from_name)
			.unwrap_or_default()
	}
}

/// Section and key names become path components of the document lookup.
fn is_plain_name(name: &str) -> bool {
	!name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

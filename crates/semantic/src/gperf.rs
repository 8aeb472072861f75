//! Parsing of systemd's `load-fragment-gperf.gperf` key table.
//!
//! Each interesting line looks like
//!
//! ```text
//! Service.Type,    config_parse_service_type,    0,    offsetof(Service, type)
//! ```
//!
//! Only the section, key and parser name are kept. The parser name doubles as
//! the validator name. Preprocessor directives, gperf declarations and any
//! other line that does not fit the record shape are skipped.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap as HashMap;

static RECORD: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?<section>[A-Z][a-z]+)\.(?<key>\w+),\s*(?<validator>\w+)\s*,.+$")
		.expect("gperf record pattern is valid")
});

/// One `(section, key) -> validator` mapping borrowed from a table line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorRecord<'a> {
	pub section: &'a str,
	pub key: &'a str,
	pub validator: &'a str,
}

/// Parses a single table line, returning `None` if it is not a key record.
pub fn parse_record(line: &str) -> Option<ValidatorRecord<'_>> {
	let caps = RECORD.captures(line)?;
	Some(ValidatorRecord {
		section: caps.name("section")?.as_str(),
		key: caps.name("key")?.as_str(),
		validator: caps.name("validator")?.as_str(),
	})
}

/// Validator names keyed by section, then key.
#[derive(Debug, Clone, Default)]
pub struct ValidatorTable {
	by_section: HashMap<String, HashMap<String, String>>,
	len: usize,
}

impl ValidatorTable {
	/// Builds a table from the full gperf file contents.
	///
	/// A later record for the same `(section, key)` replaces an earlier one.
	pub fn parse(input: &str) -> Self {
		let mut table = Self::default();
		let mut skipped = 0usize;

		for line in input.lines() {
			match parse_record(line) {
				Some(record) => table.insert(record),
				None => {
					skipped += 1;
					tracing::trace!(line, "skipping non-record gperf line");
				}
			}
		}

		tracing::trace!(records = table.len, skipped, "parsed gperf validator table");
		table
	}

	fn insert(&mut self, record: ValidatorRecord<'_>) {
		let previous = self
			.by_section
			.entry(record.section.to_string())
			.or_default()
			.insert(record.key.to_string(), record.validator.to_string());
		if previous.is_none() {
			self.len += 1;
		}
	}

	/// Returns the validator name registered for `section` / `key`.
	pub fn get(&self, section: &str, key: &str) -> Option<&str> {
		self.by_section.get(section)?.get(key).map(String::as_str)
	}

	/// Number of distinct `(section, key)` mappings.
	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}
}

//! Problem reporting for systemd unit files.
//!
//! Inspections run over [`Property`] values that a unit-file parser has
//! already extracted, and report [`Problem`]s with the byte span to
//! highlight. How a problem is shown, and at what severity, is up to the
//! caller.
//!
//! Keys the semantic data does not know about are never reported: they are
//! validated with the no-op validator and accepted.

use std::ops::Range;

mod invalid_value;

#[cfg(test)]
mod tests;

pub use invalid_value::InvalidValueInspection;

/// One `Key=Value` assignment inside a `[Section]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
	pub section: String,
	pub key: String,
	/// Value text, `None` when the line has no `=`.
	pub value: Option<String>,
	/// Byte range of the key in the unit file.
	pub key_span: Range<usize>,
	/// Byte range of the value in the unit file.
	pub value_span: Range<usize>,
}

impl Property {
	pub fn new(section: impl Into<String>, key: impl Into<String>, value: Option<&str>) -> Self {
		Self {
			section: section.into(),
			key: key.into(),
			value: value.map(str::to_owned),
			key_span: 0..0,
			value_span: 0..0,
		}
	}

	pub fn with_spans(mut self, key_span: Range<usize>, value_span: Range<usize>) -> Self {
		self.key_span = key_span;
		self.value_span = value_span;
		self
	}
}

/// A diagnostic attached to a span of the unit file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
	pub span: Range<usize>,
	pub section: String,
	pub key: String,
	pub message: String,
}

/// A check over extracted properties.
pub trait Inspection {
	/// Appends problems found in `property` to `problems`.
	fn inspect(&self, property: &Property, problems: &mut Vec<Problem>);

	/// Runs the inspection over every property, in order.
	fn check(&self, properties: &[Property]) -> Vec<Problem> {
		let mut problems = Vec::new();
		for property in properties {
			self.inspect(property, &mut problems);
		}
		problems
	}
}

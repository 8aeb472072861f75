use std::sync::Arc;

use unitfile_semantic::SemanticData;

use crate::{Inspection, Problem, Property};

/// Reports values rejected by the validator registered for their key.
///
/// Keys without a registered validator, including keys missing from the
/// keyword table, are never reported.
#[derive(Debug, Clone)]
pub struct InvalidValueInspection {
	data: Arc<SemanticData>,
}

impl InvalidValueInspection {
	pub fn new(data: Arc<SemanticData>) -> Self {
		Self { data }
	}

	/// Validates a single value, returning the diagnostic message if rejected.
	pub fn check_value(&self, section: &str, key: &str, value: &str) -> Option<String> {
		self.data.validator_for(section, key).validate(value)
	}
}

impl Inspection for InvalidValueInspection {
	fn inspect(&self, property: &Property, problems: &mut Vec<Problem>) {
		let Some(value) = property.value.as_deref() else {
			return;
		};
		let Some(message) = self.check_value(&property.section, &property.key, value) else {
			return;
		};

		tracing::debug!(
			section = %property.section,
			key = %property.key,
			%message,
			"invalid value"
		);
		problems.push(Problem {
			span: property.value_span.clone(),
			section: property.section.clone(),
			key: property.key.clone(),
			message,
		});
	}
}

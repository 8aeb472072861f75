//! Enumerated values for a single key.

/// The fixed vocabulary of one key.
#[derive(Debug, Clone, Copy)]
pub(super) struct Choice {
	/// Key the vocabulary belongs to, used in diagnostics.
	pub key: &'static str,
	pub values: &'static [&'static str],
}

pub(super) const SERVICE_TYPE: Choice = Choice {
	key: "Type",
	values: &["simple", "exec", "forking", "oneshot", "dbus", "notify", "notify-reload", "idle"],
};

pub(super) const RESTART: Choice = Choice {
	key: "Restart",
	values: &[
		"no",
		"on-success",
		"on-failure",
		"on-abnormal",
		"on-watchdog",
		"on-abort",
		"always",
	],
};

pub(super) const KILL_MODE: Choice = Choice {
	key: "KillMode",
	values: &["control-group", "process", "mixed", "none"],
};

impl Choice {
	pub(super) fn validate(&self, value: &str) -> Option<String> {
		let value = value.trim();
		if self.values.contains(&value) {
			return None;
		}

		let expected = self.values.join(", ");
		Some(match self.suggest(value) {
			Some(suggestion) => format!(
				"'{value}' is not a valid value for {}= (expected one of: {expected}; did you mean '{suggestion}'?)",
				self.key
			),
			None => format!(
				"'{value}' is not a valid value for {}= (expected one of: {expected})",
				self.key
			),
		})
	}

	/// Closest accepted value within a small edit distance.
	fn suggest(&self, value: &str) -> Option<&'static str> {
		if value.is_empty() {
			return None;
		}
		self.values
			.iter()
			.copied()
			.min_by_key(|candidate| strsim::levenshtein(value, candidate))
			.filter(|candidate| strsim::levenshtein(value, candidate) <= 2)
	}
}

//! systemd boolean values.

const TRUE_VALUES: &[&str] = &["1", "yes", "y", "true", "t", "on"];
const FALSE_VALUES: &[&str] = &["0", "no", "n", "false", "f", "off"];

/// Parses a boolean the way systemd's `parse_boolean()` does (case-insensitive).
pub fn parse_boolean(value: &str) -> Result<bool, String> {
	let value = value.trim();
	if TRUE_VALUES.iter().any(|t| t.eq_ignore_ascii_case(value)) {
		Ok(true)
	} else if FALSE_VALUES.iter().any(|f| f.eq_ignore_ascii_case(value)) {
		Ok(false)
	} else {
		Err(format!(
			"'{value}' is not a valid boolean (expected yes/no, true/false, on/off, 1/0)"
		))
	}
}

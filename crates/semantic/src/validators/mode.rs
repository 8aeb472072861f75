//! Octal file access modes.

/// Parses a 3 or 4 digit octal mode such as `644` or `0755`.
pub fn parse_mode(value: &str) -> Result<u32, String> {
	let value = value.trim();
	if !value.bytes().all(|b| b.is_ascii_digit()) || !(3..=4).contains(&value.len()) {
		return Err(format!(
			"'{value}' is not a valid file mode (expected 3 or 4 octal digits, e.g. 0644)"
		));
	}

	u32::from_str_radix(value, 8)
		.map_err(|_| format!("'{value}' is not a valid file mode (octal digits are 0-7)"))
}

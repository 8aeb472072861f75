//! `Documentation=` reference lists.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// URI schemes systemd accepts in `Documentation=`.
pub const DOCUMENTATION_SCHEMES: &[&str] = &["http", "https", "file", "info", "man"];

static MAN_PAGE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[A-Za-z0-9_.:@+-]+\([0-9][A-Za-z0-9]*\)$")
		.expect("man page reference pattern is valid")
});

/// Returns `true` for a URI with one of the [`DOCUMENTATION_SCHEMES`].
///
/// `http`/`https` need a host; the other schemes need something after the colon.
pub fn is_documentation_uri(token: &str) -> bool {
	let Ok(url) = Url::parse(token) else {
		return false;
	};
	if !DOCUMENTATION_SCHEMES.contains(&url.scheme()) {
		return false;
	}
	match url.scheme() {
		"http" | "https" => url.host_str().is_some_and(|host| !host.is_empty()),
		_ => token.split_once(':').is_some_and(|(_, rest)| !rest.is_empty()),
	}
}

/// Returns `true` for a bare man page reference such as `systemd.unit(5)`.
pub fn is_man_page_reference(token: &str) -> bool {
	MAN_PAGE_REFERENCE.is_match(token)
}

/// Entries are separated by whitespace or commas. An empty list is valid: it
/// resets previously assigned documentation.
pub(super) fn validate(value: &str) -> Option<String> {
	let invalid: Vec<&str> = value
		.split(|c: char| c.is_whitespace() || c == ',')
		.filter(|token| !token.is_empty())
		.filter(|token| !is_documentation_uri(token) && !is_man_page_reference(token))
		.collect();

	let expected = format!(
		"expected URIs with scheme {} or man page references such as systemd.unit(5)",
		DOCUMENTATION_SCHEMES.join(", ")
	);
	match invalid.as_slice() {
		[] => None,
		[token] => Some(format!("'{token}' is not a valid documentation reference ({expected})")),
		tokens => {
			let listed: Vec<String> = tokens.iter().map(|token| format!("'{token}'")).collect();
			Some(format!("invalid documentation references {} ({expected})", listed.join(", ")))
		}
	}
}

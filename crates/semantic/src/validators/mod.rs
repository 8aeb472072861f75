//! Value validators for unit-file keys.
//!
//! Every validator is a pure function from the value text to an optional
//! diagnostic. The set is closed: each variant of [`OptionValidator`] is named
//! after the systemd parser function it mirrors, which is also the name used
//! in the gperf key table.

mod boolean;
mod choice;
mod documentation;
mod mode;

pub use boolean::parse_boolean;
pub use documentation::{DOCUMENTATION_SCHEMES, is_documentation_uri, is_man_page_reference};
pub use mode::parse_mode;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// A named value grammar.
#[derive(
	Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter,
)]
pub enum OptionValidator {
	/// systemd boolean: `yes`/`no`, `true`/`false`, `on`/`off`, `1`/`0`, ...
	#[strum(serialize = "config_parse_bool")]
	Boolean,
	/// `Type=` of a service.
	#[strum(serialize = "config_parse_service_type")]
	ServiceType,
	/// `Restart=` of a service.
	#[strum(serialize = "config_parse_service_restart")]
	RestartPolicy,
	/// `KillMode=` of any unit with processes.
	#[strum(serialize = "config_parse_kill_mode")]
	KillMode,
	/// Octal file mode such as `0644`.
	#[strum(serialize = "config_parse_mode")]
	ModeString,
	/// `Documentation=` URI list.
	#[strum(serialize = "config_parse_documentation")]
	Documentation,
	/// Accepts anything.
	#[default]
	#[strum(serialize = "NULL")]
	Null,
}

impl OptionValidator {
	/// Looks up a validator by its table name.
	pub fn from_name(name: &str) -> Option<Self> {
		name.parse().ok()
	}

	pub fn name(self) -> &'static str {
		self.into()
	}

	pub fn is_null(self) -> bool {
		self == Self::Null
	}

	/// Validates `value`, returning a diagnostic message if it is not accepted.
	pub fn validate(self, value: &str) -> Option<String> {
		match self {
			Self::Boolean => parse_boolean(value).err(),
			Self::ServiceType => choice::SERVICE_TYPE.validate(value),
			Self::RestartPolicy => choice::RESTART.validate(value),
			Self::KillMode => choice::KILL_MODE.validate(value),
			Self::ModeString => parse_mode(value).err(),
			Self::Documentation => documentation::validate(value),
			Self::Null => None,
		}
	}
}

//! Fixed metadata for the section types systemd documents.

use strum::{EnumIter, EnumString, IntoStaticStr};

/// A section name with a dedicated manual page.
///
/// Names match case-sensitively, the same way systemd matches `[Section]`
/// headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum KnownSection {
	Automount,
	Install,
	Mount,
	Path,
	Service,
	Slice,
	Socket,
	Swap,
	Timer,
	Unit,
}

impl KnownSection {
	pub fn from_name(name: &str) -> Option<Self> {
		name.parse().ok()
	}

	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Canonical freedesktop.org manual URL for this section.
	pub fn reference_url(self) -> &'static str {
		match self {
			Self::Mount => "https://www.freedesktop.org/software/systemd/man/systemd.mount.html",
			Self::Automount => {
				"https://www.freedesktop.org/software/systemd/man/systemd.automount.html"
			}
			Self::Install => {
				"https://www.freedesktop.org/software/systemd/man/systemd.unit.html#%5BInstall%5D%20Section%20Options"
			}
			Self::Path => "https://www.freedesktop.org/software/systemd/man/systemd.path.html",
			Self::Service => "https://www.freedesktop.org/software/systemd/man/systemd.service.html",
			Self::Slice => "https://www.freedesktop.org/software/systemd/man/systemd.slice.html",
			Self::Socket => "https://www.freedesktop.org/software/systemd/man/systemd.socket.html",
			Self::Swap => "https://www.freedesktop.org/software/systemd/man/systemd.swap.html",
			Self::Timer => "https://www.freedesktop.org/software/systemd/man/systemd.timer.html",
			Self::Unit => {
				"https://www.freedesktop.org/software/systemd/man/systemd.unit.html#%5BUnit%5D%20Section%20Options"
			}
		}
	}

	/// Short HTML description of the section, with links to related pages.
	pub fn description(self) -> &'static str {
		match self {
			Self::Mount => concat!(
				" Mount files must include a [Mount] section, which carries information\n",
				"       about the file system mount points it supervises. A number of options\n",
				"       that may be used in this section are shared with other unit types.\n",
				"       These options are documented in <a href=\"http://man7.org/linux/man-pages/man5/systemd.exec.5.html\">",
				"systemd.exec(5)</a> and <a href=\"http://man7.org/linux/man-pages/man5/systemd.kill.5.html\">systemd.kill(5)</a>.",
			),
			Self::Automount => concat!(
				"Automount files must include an [Automount] section, which carries\n",
				"       information about the file system automount points it supervises.",
			),
			Self::Install => concat!(
				"Unit files may include an \"[Install]\" section, which carries\n",
				"       installation information for the unit. This section is not\n",
				"       interpreted by <a href=\"http://man7.org/linux/man-pages/man1/systemd.1.html\">systemd(1)</a> during runtime; it is",
				"       used by the <b>enable</b> and <b>disable </b>commands of the",
				"       <a href=\"http://man7.org/linux/man-pages/man1/systemctl.1.html\">systemctl(1)</a> tool during installation of\n",
				"       a unit. ",
			),
			Self::Path => concat!(
				"Path files must include a [Path] section, which carries information\n",
				"       about the path(s) it monitors",
			),
			Self::Service => concat!(
				"Service files must include a \"[Service]\" section, which carries\n",
				"information about the service and the process it supervises. A number\n",
				"of options that may be used in this section are shared with other\n",
				"unit types. These options are documented in <a href=\"http://man7.org/linux/man-pages/man5/systemd.exec.5.html\">systemd.exec(5)</a>,\n",
				"<a href=\"http://man7.org/linux/man-pages/man5/systemd.kill.5.html\">systemd.kill(5)</a> and ",
				"<a href=\"http://man7.org/linux/man-pages/man5/systemd.resource-control.5.html\">systemd.resource-control(5)</a>.",
			),
			Self::Slice => concat!(
				"The slice specific configuration\n",
				"       options are configured in the [Slice] section. Currently, only\n",
				"       generic resource control settings as described in\n",
				"       <a href=\"http://man7.org/linux/man-pages/man5/systemd.resource-control.5.html\">systemd.resource-control(5)</a> are allowed.\n",
			),
			Self::Socket => concat!(
				"Socket files must include a [Socket] section, which carries\n",
				"       information about the socket or FIFO it supervises. A number of\n",
				"       options that may be used in this section are shared with other unit\n",
				"       types. These options are documented in <a href=\"http://man7.org/linux/man-pages/man5/systemd.exec.5.html\">",
				"       systemd.exec(5)</a> and <a href=\"http://man7.org/linux/man-pages/man5/systemd.kill.5.html\">systemd.kill(5)</a>.",
			),
			Self::Swap => concat!(
				"Swap files must include a [Swap] section, which carries information\n",
				" about the swap device it supervises. A number of options that may be\n",
				" used in this section are shared with other unit types. These options\n",
				" are documented in <a href=\"http://man7.org/linux/man-pages/man5/systemd.exec.5.html\">systemd.exec(5)</a>",
				" and <a href=\"http://man7.org/linux/man-pages/man5/systemd.kill.5.html\">systemd.kill(5)</a>",
			),
			Self::Timer => concat!(
				" Timer files must include a [Timer] section, which carries information\n",
				" about the timer it defines.",
			),
			Self::Unit => concat!(
				"The unit file may include a [Unit] section, which carries generic\n",
				" information about the unit that is not dependent on the type of unit.",
			),
		}
	}
}

/// Returns the manual URL for `section`, or `None` for unrecognised names.
pub fn section_reference_url(section: &str) -> Option<&'static str> {
	KnownSection::from_name(section).map(KnownSection::reference_url)
}

/// Returns the HTML description for `section`, or `None` for unrecognised names.
pub fn section_description(section: &str) -> Option<&'static str> {
	KnownSection::from_name(section).map(KnownSection::description)
}

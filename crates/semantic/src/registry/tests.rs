use std::borrow::Cow;
use std::io;

use super::*;

const KEYWORDS: &str = r#"{
	"Service": {
		"Type": { "declaredUnderKeyword": null, "declaredInFile": "systemd.service" },
		"Restart": { "declaredInFile": "systemd.service" },
		"KillMode": { "declaredInFile": "systemd.kill" },
		"ExecStartPost": { "declaredUnderKeyword": "ExecStartPre", "declaredInFile": "systemd.service" }
	},
	"Unit": {
		"After": { "declaredUnderKeyword": "Before", "declaredInFile": "systemd.unit" },
		"Before": {}
	}
}"#;

const GPERF: &str = "\
%%
Service.Type,       config_parse_service_type,    0, offsetof(Service, type)
Service.Restart,    config_parse_service_restart, 0, offsetof(Service, restart)
Service.KillMode,   config_parse_kill_mode,       0, offsetof(KillContext, kill_mode)
Service.ExecStart,  config_parse_exec,            0, offsetof(Service, exec_command)
Unit.After
";

fn fixture() -> SemanticData {
	SemanticData::from_sources(SemanticSources::from_strs(KEYWORDS, GPERF)).unwrap()
}

#[derive(Debug)]
struct FakeDocuments;

impl DocumentStore for FakeDocuments {
	fn get(&self, path: &str) -> io::Result<Option<Cow<'_, [u8]>>> {
		match path {
			"documents/completion/Service/Type.html" => Ok(Some(Cow::Borrowed(&b"<p>Type</p>"[..]))),
			"documents/completion/Service/Restart.html" => {
				Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
			}
			"documents/completion/Service/KillMode.html" => {
				Ok(Some(Cow::Owned(vec![0xff, 0xfe])))
			}
			_ => Ok(None),
		}
	}
}

#[test]
fn test_section_names() {
	let data = fixture();
	assert_eq!(data.section_names().into_iter().collect::<Vec<_>>(), ["Service", "Unit"]);
	assert!(data.is_known_section("Unit"));
	assert!(!data.is_known_section("Timer"));
}

#[test]
fn test_keywords_in_section() {
	let data = fixture();
	let keys = data.keywords_in_section("Service");
	assert_eq!(keys.len(), 4);
	assert!(keys.contains("Type"));
	assert_eq!(keys, data.keywords_in_section("Service"));
	assert!(data.keywords_in_section("Bogus").is_empty());
	assert!(data.is_known_keyword("Unit", "Before"));
	assert!(!data.is_known_keyword("Unit", "Type"));
}

#[test]
fn test_keyword_documentation() {
	let data = fixture();
	assert_eq!(data.keyword_documentation_anchor("Unit", "After"), Some("Before"));
	assert_eq!(data.keyword_documentation_file("Unit", "After"), Some("systemd.unit"));
	assert_eq!(data.keyword_documentation_anchor("Service", "Type"), None);
	assert_eq!(data.keyword_documentation_file("Service", "KillMode"), Some("systemd.kill"));
	assert_eq!(data.keyword_data("Unit", "Before"), Some(&KeywordData::default()));
	assert_eq!(data.keyword_documentation_file("Unit", "Before"), None);

	assert_eq!(data.keyword_documentation_anchor("Service", "Bogus"), None);
	assert_eq!(data.keyword_documentation_file("Bogus", "Type"), None);
}

#[test]
fn test_validator_dispatch() {
	let data = fixture();
	assert_eq!(data.validator_for("Service", "Type"), OptionValidator::ServiceType);
	assert_eq!(data.validator_for("Service", "Restart"), OptionValidator::RestartPolicy);
	assert_eq!(data.validator_for("Service", "KillMode"), OptionValidator::KillMode);

	// registered, but not a validator this crate implements
	assert_eq!(data.validator_name("Service", "ExecStart"), Some("config_parse_exec"));
	assert_eq!(data.validator_for("Service", "ExecStart"), OptionValidator::Null);

	// malformed line contributes nothing
	assert_eq!(data.validator_name("Unit", "After"), None);
	assert_eq!(data.validator_for("Unit", "After"), OptionValidator::Null);
	assert_eq!(data.validator_for("Bogus", "Type"), OptionValidator::Null);
}

#[test]
fn test_section_lookups() {
	let data = fixture();
	assert_eq!(
		data.section_reference_url("Timer"),
		Some("https://www.freedesktop.org/software/systemd/man/systemd.timer.html")
	);
	assert!(data.section_description("Timer").unwrap().contains("[Timer]"));
	assert_eq!(data.section_reference_url("Bogus"), None);
	assert_eq!(data.section_description("Bogus"), None);
}

#[test]
fn test_key_documentation() {
	let data = SemanticData::from_sources(
		SemanticSources::from_strs(KEYWORDS, GPERF).with_documents(FakeDocuments),
	)
	.unwrap();

	assert_eq!(data.key_documentation("Service", "Type").as_deref(), Some("<p>Type</p>"));
	// read failure and bad encoding both degrade to "no documentation"
	assert_eq!(data.key_documentation("Service", "Restart"), None);
	assert_eq!(data.key_documentation("Service", "KillMode"), None);
	assert_eq!(data.key_documentation("Service", "ExecStart"), None);
	assert_eq!(data.key_documentation("../Service", "Type"), None);
	assert_eq!(data.key_documentation("Service", ""), None);
}

#[test]
fn test_without_documents() {
	assert_eq!(fixture().key_documentation("Service", "Type"), None);
}

#[test]
fn test_invalid_keyword_table_is_fatal() {
	let err = SemanticData::from_sources(SemanticSources::from_strs("{ not json", GPERF)).unwrap_err();
	assert!(matches!(err, SemanticDataError::Json(_)), "{err:?}");

	let err = SemanticData::from_sources(SemanticSources::from_strs(r#"{"Service": []}"#, GPERF))
		.unwrap_err();
	assert!(matches!(err, SemanticDataError::Json(_)), "{err:?}");

	let err = SemanticData::from_sources(SemanticSources::from_strs("{}", GPERF)).unwrap_err();
	assert!(matches!(err, SemanticDataError::NoSections), "{err:?}");
}

#[test]
fn test_empty_validator_table_is_not_fatal() {
	let data = SemanticData::from_sources(SemanticSources::from_strs(KEYWORDS, "")).unwrap();
	assert_eq!(data.validator_for("Service", "Type"), OptionValidator::Null);
}

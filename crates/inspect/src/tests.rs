use std::sync::Arc;

use rstest::rstest;
use unitfile_semantic::{SemanticData, SemanticSources};

use super::*;

const KEYWORDS: &str = r#"{
	"Service": {
		"Type": {},
		"Restart": {},
		"RemainAfterExit": {},
		"ExecStart": {}
	}
}"#;

const GPERF: &str = "\
Service.Type, config_parse_service_type, 0, 0
Service.Restart, config_parse_service_restart, 0, 0
Service.RemainAfterExit, config_parse_bool, 0, 0
Service.ExecStart, config_parse_exec, 0, 0
";

fn data() -> Arc<SemanticData> {
	Arc::new(SemanticData::from_sources(SemanticSources::from_strs(KEYWORDS, GPERF)).unwrap())
}

#[rstest]
#[case("Type", "oneshot", false)]
#[case("Type", "bogus", true)]
#[case("RemainAfterExit", "yes", false)]
#[case("RemainAfterExit", "maybe", true)]
#[case("ExecStart", "/bin/true", false)]
#[case("Unregistered", "anything", false)]
fn check_value(#[case] key: &str, #[case] value: &str, #[case] rejected: bool) {
	let inspection = InvalidValueInspection::new(data());
	assert_eq!(inspection.check_value("Service", key, value).is_some(), rejected);
}

#[test]
fn invalid_value_uses_value_span() {
	let inspection = InvalidValueInspection::new(data());
	let properties = [
		Property::new("Service", "Type", Some("simple")).with_spans(10..14, 15..21),
		Property::new("Service", "Restart", Some("sometimes")).with_spans(22..29, 30..39),
	];

	let problems = inspection.check(&properties);
	assert_eq!(problems.len(), 1);
	assert_eq!(problems[0].span, 30..39);
	assert_eq!(problems[0].section, "Service");
	assert_eq!(problems[0].key, "Restart");
	assert!(problems[0].message.contains("Restart="), "{}", problems[0].message);
}

#[test]
fn properties_without_value_are_skipped() {
	let inspection = InvalidValueInspection::new(data());
	assert!(inspection.check(&[Property::new("Service", "Type", None)]).is_empty());
}

#[rstest]
#[case("Service", "AmbientCapabilities")]
#[case("Service", "ReadWritePaths")]
#[case("Service", "X-Custom")]
#[case("Unit", "ConditionUser")]
#[case("X-Vendor", "Anything")]
fn uncataloged_keys_are_accepted(#[case] section: &str, #[case] key: &str) {
	let inspection = InvalidValueInspection::new(data());
	for value in ["", "no", "bogus", "0799", "not a uri"] {
		assert!(inspection.check(&[Property::new(section, key, Some(value))]).is_empty(), "{key}={value}");
	}
}

use std::io::Write;

use ph_widgets::WidgetError;
use ph_widgets::config::DemoConfig;
use ph_widgets::instant::parse_instant;
use tempfile::NamedTempFile;

#[test]
fn loads_demo_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "birthdate": "1990-02-28",
            "include_weeks": true,
            "log_level": "debug",
            "number_input": {{ "value": 3, "min": 1, "max": 9, "step": 2 }}
        }}"#
    )
    .unwrap();

    let config = DemoConfig::from_file(file.path()).unwrap();
    assert_eq!(config.birthdate, parse_instant("1990-02-28").unwrap());
    assert!(config.age.include_weeks);
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.number_input.step, 2);
    assert_eq!(config.reference, None);
}

#[test]
fn reports_malformed_json() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        DemoConfig::from_file(file.path()),
        Err(WidgetError::Json(_))
    ));
}

#[test]
fn reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    assert!(matches!(
        DemoConfig::from_file(&missing),
        Err(WidgetError::Io(_))
    ));
}

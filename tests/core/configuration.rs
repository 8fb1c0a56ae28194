//! Clocks described by TOML configuration.

use crate::common::*;

#[test]
fn mixed_digit_kinds() {
    let config = ClockConfig::from_toml_str(
        r#"
        digits = [2, ["A", "B"], { start = 1, stop = 20, step = 2 }]
        "#,
    )
    .unwrap();
    let clock = ClockRange::from_config(&config).unwrap();
    assert_eq!(clock.len(), 40);
    assert_eq!(
        clock.at(3).unwrap().rendered,
        vec![int(0), s("A"), int(7)]
    );
}

#[test]
fn file_round_trip_through_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(clockrange::CONFIG_FILE_NAME);
    std::fs::write(&path, ClockConfig::default_toml()).unwrap();

    let clock = ClockConfig::from_file(&path).unwrap().build().unwrap();
    assert_eq!(clock, hms());
}

#[test]
fn invalid_toml_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "digits = [").unwrap();

    match ClockConfig::from_file(&path) {
        Err(Error::Config { reason }) => assert!(reason.contains("broken.toml")),
        other => panic!("expected Config error, got {:?}", other),
    }
}

#[test]
fn degenerate_digit_in_config() {
    let config = ClockConfig::from_toml_str("digits = [4, []]").unwrap();
    assert!(matches!(
        config.build(),
        Err(Error::DegenerateBase { position: 1, .. })
    ));
}

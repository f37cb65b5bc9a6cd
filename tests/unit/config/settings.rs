use super::*;

#[test]
fn empty_document_yields_defaults() {
    let s = EngineSettings::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(s, EngineSettings::default());
    assert_eq!(s.scroll_spy_strategy, ScanStrategy::LastMatchBottomUp);
}

#[test]
fn partial_document_overrides_fields() {
    let s = EngineSettings::from_reader(
        r#"{"assetBase": "media", "probeOffset": 40, "scrollSpyStrategy": "firstMatchTopDown"}"#
            .as_bytes(),
    )
    .unwrap();
    assert_eq!(s.asset_base, "media");
    assert_eq!(s.probe_offset, 40.0);
    assert_eq!(s.scroll_spy_strategy, ScanStrategy::FirstMatchTopDown);
    assert_eq!(s.scroll_breathing_room, 20.0);
}

#[test]
fn negative_offsets_are_rejected() {
    let err = EngineSettings::from_reader(r#"{"scrollBreathingRoom": -1}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("scrollBreathingRoom"));
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = EngineSettings::from_reader("{".as_bytes()).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = EngineSettings::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

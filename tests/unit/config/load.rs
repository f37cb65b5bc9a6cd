use super::*;

#[test]
fn minimal_document_parses() {
    let cfg = ProductConfig::from_json_str(
        r#"{"product": {"brand": "Acme", "name": "Tube Pre"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.product.brand, "Acme");
    assert!(cfg.navigation.is_empty());
    assert!(cfg.modules.is_empty());
    cfg.validate().unwrap();
}

#[test]
fn missing_product_is_a_config_error() {
    let err = ProductConfig::from_json_str(r#"{"navigation": []}"#).unwrap_err();
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().contains("product"));
}

#[test]
fn reader_and_str_agree() {
    let s = r#"{"product": {"brand": "Acme", "name": "X"}, "modules": {"faq": {"enabled": true}}}"#;
    let a = ProductConfig::from_json_str(s).unwrap();
    let b = ProductConfig::from_reader(s.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn validate_wraps_issues_in_validation_error() {
    let cfg = ProductConfig::from_json_str(
        r#"{"product": {"brand": "", "name": "X"}}"#,
    )
    .unwrap();
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, PageError::Validation(_)));
    assert!(err.to_string().contains("$.product.brand"));
}

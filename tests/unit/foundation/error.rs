use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PageError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PageError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(PageError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("disk gone");
    let err = PageError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("disk gone"));
}

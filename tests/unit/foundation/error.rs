use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        HourwaveError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        HourwaveError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        HourwaveError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        HourwaveError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = HourwaveError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

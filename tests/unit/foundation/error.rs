use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RevealError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        RevealError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        RevealError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_configuration_reports_as_configuration() {
    assert!(RevealError::configuration("late").is_configuration());
    assert!(!RevealError::validation("dup").is_configuration());
}

#[test]
fn json_errors_map_to_serde() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = RevealError::from(err);
    assert!(matches!(err, RevealError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RevealError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

use super::*;

#[test]
fn port_defaults_when_unset() {
    assert_eq!(listen_port(None), Ok(3000));
    assert_eq!(listen_port(Some("  ")), Ok(3000));
}

#[test]
fn port_parses_value() {
    assert_eq!(listen_port(Some("8080")), Ok(8080));
}

#[test]
fn port_rejects_garbage() {
    assert_eq!(listen_port(Some("http")), Err(ConfigError::InvalidPort("http".to_owned())));
    assert_eq!(listen_port(Some("70000")), Err(ConfigError::InvalidPort("70000".to_owned())));
}

//! Tests for session construction.

use pcore::{Config, Error, ErrorKind};
use parley_cli::session::build_session;

#[test]
fn missing_key_fails_construction() {
    let mut config = Config::default();
    config.llm.api_key = String::new();

    let err = build_session(&config).err().expect("missing key must fail");
    let err = err.downcast::<Error>().expect("typed session error");
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn invalid_temperature_fails_construction() {
    let mut config = Config::default();
    config.llm.api_key = "gsk-test".to_owned();
    config.llm.general.temperature = -1.0;
    assert!(build_session(&config).is_err());
}

#[test]
fn missing_persona_file_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Config::default();
    config.llm.api_key = "gsk-test".to_owned();
    config.persona.path = Some(dir.path().join("missing.md"));
    assert!(build_session(&config).is_err());
}

#[test]
fn session_starts_empty() {
    let mut config = Config::default();
    config.llm.api_key = "gsk-test".to_owned();
    config.llm.base_url = Some("http://localhost:9/v1/chat/completions".to_owned());
    config.llm.timeout_secs = Some(5);

    let session = build_session(&config).unwrap();
    assert!(session.state().history.is_empty());
    assert_eq!(session.general(), &config.llm.general);
}

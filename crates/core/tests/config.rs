//! Configuration tests.

use parley_core::{API_KEY_ENV, Config, ErrorKind, expand_env_vars};

#[test]
fn empty_toml_is_default() {
    let config = Config::from_toml("").unwrap();
    assert_eq!(config.llm.general, llm::General::default());
    assert_eq!(config.persona.greeting, "Welcome to WeHouse!!");
    assert_eq!(config.log.file.to_str(), Some("parley.log"));
    assert!(config.llm.base_url.is_none());
    assert!(config.llm.timeout_secs.is_none());
}

#[test]
fn parse_full_config() {
    let toml = r#"
[llm]
model = "llama-3.1-70b-versatile"
api_key = "gsk-test"
base_url = "http://localhost:8080/v1/chat/completions"
temperature = 0.2
max_tokens = 256
timeout_secs = 30

[persona]
path = "persona.md"
greeting = "Hello!"

[log]
file = "/tmp/parley.log"
"#;
    let config = Config::from_toml(toml).unwrap();
    assert_eq!(config.llm.general.model, "llama-3.1-70b-versatile");
    assert_eq!(config.llm.general.temperature, 0.2);
    assert_eq!(config.llm.general.max_tokens, 256);
    assert_eq!(config.api_key().unwrap(), "gsk-test");
    assert_eq!(
        config.llm.base_url.as_deref(),
        Some("http://localhost:8080/v1/chat/completions")
    );
    assert_eq!(config.llm.timeout_secs, Some(30));
    assert_eq!(config.persona.path.as_deref().and_then(|p| p.to_str()), Some("persona.md"));
    assert_eq!(config.persona.greeting, "Hello!");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_llm_section_keeps_sampling_defaults() {
    let config = Config::from_toml("[llm]\nmodel = \"m\"\napi_key = \"k\"\n").unwrap();
    assert_eq!(config.llm.general.model, "m");
    assert_eq!(config.llm.general.temperature, 0.7);
    assert_eq!(config.llm.general.max_tokens, 1000);
}

#[test]
fn expand_env_vars_replaces_known_and_drops_unknown() {
    let dir = env!("CARGO_MANIFEST_DIR");
    assert_eq!(
        expand_env_vars("a ${CARGO_MANIFEST_DIR} b"),
        format!("a {dir} b")
    );
    assert_eq!(expand_env_vars("x${PARLEY_TEST_UNSET_VAR}y"), "xy");
    assert_eq!(expand_env_vars("$HOME {plain}"), "$HOME {plain}");
}

#[test]
fn api_key_expands_from_env() {
    let config = Config::from_toml("[llm]\napi_key = \"${CARGO_MANIFEST_DIR}\"\n").unwrap();
    assert_eq!(config.api_key().unwrap(), env!("CARGO_MANIFEST_DIR"));
}

#[test]
fn expansion_applies_to_key_and_url_only() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let config = Config::from_toml(
        r#"
[llm]
api_key = "${CARGO_MANIFEST_DIR}"
base_url = "${CARGO_MANIFEST_DIR}/v1"

[persona]
greeting = "Hi ${CARGO_MANIFEST_DIR}"
"#,
    )
    .unwrap();
    assert_eq!(config.llm.api_key, dir);
    assert_eq!(config.llm.base_url, Some(format!("{dir}/v1")));
    assert_eq!(config.persona.greeting, "Hi ${CARGO_MANIFEST_DIR}");
}

#[test]
fn missing_api_key_is_config_error() {
    let config = Config::from_toml("[llm]\napi_key = \"${PARLEY_TEST_NEVER_SET}\"\n").unwrap();
    let err = config.api_key().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
    assert_eq!(
        err.to_string(),
        format!("{API_KEY_ENV} not found in environment variables")
    );
}

#[test]
fn validate_rejects_out_of_range_sampling() {
    let mut config = Config::default();
    config.llm.general.temperature = 3.0;
    assert_eq!(config.validate().unwrap_err().kind(), ErrorKind::Config);

    let mut config = Config::default();
    config.llm.general.max_tokens = 0;
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.llm.general.model = "".into();
    assert!(config.validate().is_err());
}

#[test]
fn persona_defaults_to_built_in() {
    let persona = Config::default().persona().unwrap();
    assert_eq!(persona.text(), parley_core::DEFAULT_PERSONA);
}

#[test]
fn persona_loads_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("persona.md");
    std::fs::write(&path, "You are Ada.").unwrap();

    let mut config = Config::default();
    config.persona.path = Some(path);
    assert_eq!(config.persona().unwrap().text(), "You are Ada.");
}

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[log]\nfile = \"chat.log\"\n").unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.log.file.to_str(), Some("chat.log"));
}

#[test]
fn default_config_roundtrips_through_toml() {
    let text = toml::to_string_pretty(&Config::default()).unwrap();
    assert!(text.contains("${GROQ_API_KEY}"), "{text}");
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, Config::default());
}

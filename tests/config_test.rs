//! Tests for loading game configuration from disk.

use std::io::Write;
use std::time::Duration;
use strictly_grid::{GameConfig, LlmProvider, Mark};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
llm_provider = "openai"
llm_model = "gpt-4o-mini"
llm_max_tokens = 200
llm_temperature = 0.7
request_timeout_secs = 15
board_size = 6
human_marker = "O"
"#
    )
    .unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.llm_provider(), LlmProvider::OpenAI);
    assert_eq!(config.llm_model(), "gpt-4o-mini");
    assert_eq!(config.llm_max_tokens(), 200);
    assert_eq!(config.llm_temperature(), 0.7);
    assert_eq!(config.request_timeout(), Duration::from_secs(15));
    assert_eq!(config.board_size(), 6);
    assert_eq!(config.human_marker(), Mark::O);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.llm_provider(), LlmProvider::Anthropic);
    assert_eq!(config.board_size(), 3);
}

#[test]
fn test_invalid_file_reports_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "board_size = \"large\"").unwrap();
    let err = GameConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_temperature_out_of_range_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "llm_temperature = 1.5").unwrap();
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_operator_key_builds_llm_config() {
    let config = GameConfig::default().with_llm_model("claude-3-5-haiku-20241022".to_string());
    let llm = config.llm_config_with_key("sk-test".to_string());
    assert_eq!(llm.provider(), LlmProvider::Anthropic);
    assert_eq!(llm.api_key(), "sk-test");
    assert_eq!(llm.model(), "claude-3-5-haiku-20241022");
}

//! Integration test for LLM client connectivity.

use strictly_grid::{
    AiMovePolicy, Board, CompletionRequest, GameConfig, LlmClient, LlmConfig, LlmProvider, Mark,
    TextCompletion,
};
use tracing::instrument;

fn hello_request() -> CompletionRequest {
    CompletionRequest {
        system: "You are a helpful assistant.".to_string(),
        prompt: "Say 'Hello, world!' and nothing else.".to_string(),
        temperature: 0.0,
        max_tokens: 50,
    }
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_anthropic_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY not set");

    let config = LlmConfig::new(
        LlmProvider::Anthropic,
        api_key,
        "claude-3-5-haiku-20241022".to_string(),
    );

    let client = LlmClient::new(config);

    let response = client
        .complete(&hello_request())
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_openai_connectivity() {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");

    let config = LlmConfig::new(LlmProvider::OpenAI, api_key, "gpt-4o-mini".to_string());

    let client = LlmClient::new(config);

    let response = client
        .complete(&hello_request())
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_live_ai_move_is_legal() {
    dotenvy::dotenv().ok();

    let config = GameConfig::default();
    let client = LlmClient::new(config.create_llm_config().expect("API key not set"));
    let policy = AiMovePolicy::new(Box::new(client), &config);

    let board: Board = "XX__ O___ ____ ____".parse().unwrap();
    let decision = policy
        .decide(&board, Mark::O, Mark::X)
        .await
        .expect("board has empty cells");

    assert!(board.is_empty(decision.index));
    assert_eq!(decision.notice(), None, "model call should succeed");
    eprintln!("Decision: {:?}", decision);
}

use std::sync::Arc;

use pretty_assertions::assert_eq;
use vocab_wordgen::{
    ErrorKind, GeminiClient, LlmClient, LlmRequest, ProviderConfig, ValidationError,
    WordGenError, WordGenerator, WordPreferences,
};
use wiremock::matchers::{body_partial_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/v1beta/models/gemini-2.0-flash-001:generateContent";

const EPHEMERAL: &str = r#"{"word":"ephemeral","meaning":"lasting a short time","rephrasedMeaning":"doesn't last long","synonyms":["transient","fleeting","momentary"],"antonyms":["permanent","enduring"],"exampleSentence":"Fame can be ephemeral."}"#;

fn gemini_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [{ "text": text }],
                    "role": "model"
                },
                "finishReason": "STOP",
                "index": 0
            }
        ],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 64,
            "totalTokenCount": 184
        },
        "modelVersion": "gemini-2.0-flash-001"
    })
}

fn config_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig::builder("test-key")
        .api_base_url(server.uri())
        .timeout_secs(5)
        .build()
}

fn generator_for(server: &MockServer) -> WordGenerator {
    let config = config_for(server);
    let client = GeminiClient::new(&config).expect("client creation");
    WordGenerator::new(Arc::new(client), &config)
}

#[tokio::test]
async fn test_successful_word_e2e() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(EPHEMERAL)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let record = generator.generate().await.expect("word should be generated");

    let expected: serde_json::Value = serde_json::from_str(EPHEMERAL).expect("fixture");
    assert_eq!(record.into_value(), expected);
}

#[tokio::test]
async fn test_fenced_reply_is_cleaned() {
    let mock_server = MockServer::start().await;

    let fenced = format!("```json\n{EPHEMERAL}\n```\n");
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(&fenced)))
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let record = generator.generate().await.expect("fenced word");
    assert_eq!(record.word(), Some("ephemeral"));
}

#[tokio::test]
async fn test_prompt_is_sent_as_single_user_turn() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
            "generationConfig": { "temperature": 1.2, "candidateCount": 1 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response("hi")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::new(&config_for(&mock_server)).expect("client creation");
    let response = client
        .complete(&LlmRequest {
            prompt: "hello".into(),
            temperature: Some(1.2),
        })
        .await
        .expect("completion");

    assert_eq!(response.content, "hi");
    assert_eq!(response.input_tokens, 120);
    assert_eq!(response.output_tokens, 64);
}

#[tokio::test]
async fn test_api_error_handling() {
    let mock_server = MockServer::start().await;

    let error_resp = serde_json::json!({
        "error": {
            "code": 400,
            "message": "API key not valid. Please pass a valid API key.",
            "status": "INVALID_ARGUMENT"
        }
    });

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(&error_resp))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let err = generator.generate().await.expect_err("should be an error");

    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
    let err_str = err.to_string();
    assert!(
        err_str.contains("API key not valid"),
        "Error should contain API message: {err_str}"
    );
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let err = generator.generate().await.expect_err("should be an error");

    assert!(matches!(
        err,
        WordGenError::ProviderApi { status: 503, ref message } if message == "overloaded"
    ));
}

#[tokio::test]
async fn test_missing_candidates_is_empty_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let err = generator.generate().await.expect_err("no candidates");

    assert!(matches!(err, WordGenError::EmptyResponse));
    assert_eq!(err.kind(), ErrorKind::UpstreamUnavailable);
}

#[tokio::test]
async fn test_invalid_json_text_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_response("{\"word\": \"laconic\", \"meaning\": ")),
        )
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let err = generator.generate().await.expect_err("truncated");

    assert_eq!(err.kind(), ErrorKind::MalformedUpstreamResponse);
    assert!(matches!(
        err,
        WordGenError::Malformed(ValidationError::ParseFailure { .. })
    ));
}

#[tokio::test]
async fn test_undecodable_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let err = generator.generate().await.expect_err("html body");

    assert!(matches!(err, WordGenError::ProviderResponseParse(_)));
}

#[tokio::test]
async fn test_personalized_word_and_quiz_e2e() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_string_contains("interested in astronomy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(EPHEMERAL)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let quiz = r#"```json
[
  {"question": "What does ephemeral mean?", "options": ["brief", "eternal", "heavy"], "correct_answer": "brief"},
  {"question": "Which is a synonym?", "options": ["fleeting", "permanent"], "correct_answer": "fleeting"}
]
```"#;
    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_string_contains("multiple-choice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(quiz)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = generator_for(&mock_server);
    let preferences = WordPreferences {
        interests: Some("astronomy".into()),
        difficulty: None,
    };
    let record = generator
        .generate_for(&preferences)
        .await
        .expect("personalized word");
    let word = record.word().expect("word field");

    let questions = generator.generate_quiz(word).await.expect("quiz");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1].options, vec!["fleeting", "permanent"]);

    let score = vocab_wordgen::score_quiz(&questions, &[Some("brief"), Some("permanent")]);
    assert_eq!(score, 50.0);
}

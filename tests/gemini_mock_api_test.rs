#![cfg(feature = "google")]

use paperscan::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL_PATH: &str = "/models/gemini-2.0-flash:generateContent";

fn page() -> ImageInput {
    ImageInput::new(b"fake-png".to_vec(), "image/png").unwrap()
}

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::builder()
        .api_key("test-api-key")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn text_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }],
        "usageMetadata": { "promptTokenCount": 1290, "candidatesTokenCount": 40, "totalTokenCount": 1330 },
        "modelVersion": "gemini-2.0-flash"
    })
}

#[tokio::test]
async fn sends_image_and_instruction_and_extracts_questions() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": "image/png", "data": "ZmFrZS1wbmc=" } },
                    { "text": "find the questions" }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(
            "Here is the result: {\"questions\":[{\"que\":1,\"type\":\"mcq\",\"bbox\":[10,20,30,40]},{\"que\":2,\"type\":\"nat\",\"bbox\":[50,20,90,40]}]}",
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scanner = QuestionScanner::new(client(&mock_server)).with_instruction("find the questions");
    let result = scanner.scan(&page()).await.expect("scan should succeed");

    assert_eq!(result.questions.len(), 2);
    assert_eq!(result.questions[0].kind, QuestionKind::MultipleChoice);
    assert_eq!(result.questions[1].kind, QuestionKind::NumericAnswer);
    assert_eq!(result.questions[1].bounding_box.to_array(), [50.0, 20.0, 90.0, 40.0]);
}

#[tokio::test]
async fn structured_output_sends_response_schema() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {
                "temperature": 0.0,
                "responseMimeType": "application/json",
                "responseSchema": paperscan::prompt::gemini_response_schema()
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("{\"questions\":[]}")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::builder()
        .api_key("test-api-key")
        .base_url(mock_server.uri())
        .temperature(0.0)
        .structured_output(true)
        .build()
        .unwrap();

    let result = QuestionScanner::new(client).try_scan(&page()).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn custom_model_changes_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("{\"questions\":[]}")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::builder()
        .api_key("test-api-key")
        .base_url(format!("{}/", mock_server.uri()))
        .model("gemini-1.5-pro")
        .build()
        .unwrap();

    let text = client.generate(&page(), "x").await.unwrap();
    assert_eq!(text, "{\"questions\":[]}");
}

#[tokio::test]
async fn api_errors_are_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        })))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).generate(&page(), "x").await.unwrap_err();
    match err {
        LlmError::ApiError { code, message, .. } => {
            assert_eq!(code, 400);
            assert!(message.starts_with("API key not valid"));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_and_auth_errors_become_service_failures() {
    for (status, category) in [(429u16, ErrorCategory::RateLimit), (403, ErrorCategory::Authentication)] {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("denied"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let scanner = QuestionScanner::new(client(&mock_server));
        match scanner.try_scan(&page()).await.unwrap_err() {
            ScanError::Service(inner) => assert_eq!(inner.category(), category),
            other => panic!("unexpected: {other:?}"),
        }
    }
}

#[tokio::test]
async fn blocked_prompt_is_a_service_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "PROHIBITED_CONTENT" }
        })))
        .mount(&mock_server)
        .await;

    let scanner = QuestionScanner::new(client(&mock_server));
    assert!(scanner.scan(&page()).await.is_none());
    let err = scanner.try_scan(&page()).await.unwrap_err();
    assert_eq!(err.kind(), ScanFailureKind::Service);
    assert!(err.to_string().contains("PROHIBITED_CONTENT"));
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server).generate(&page(), "x").await.unwrap_err();
    assert!(matches!(err, LlmError::ParseError(_)));
}

#[tokio::test]
async fn unparseable_model_text_is_not_a_service_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_reply("{\"questions\":[{\"que\":1,\"type\":\"essay\",\"bbox\":[1,2,3,4]}]}")),
        )
        .mount(&mock_server)
        .await;

    let err = QuestionScanner::new(client(&mock_server))
        .try_scan(&page())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ScanFailureKind::SchemaMismatch);
}

#[tokio::test]
async fn unreachable_server_is_an_http_error() {
    let client = GeminiClient::builder()
        .api_key("test-api-key")
        .base_url("http://127.0.0.1:1/v1beta")
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .unwrap();
    let err = client.generate(&page(), "x").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}

#[tokio::test]
async fn sub_second_timeout_still_allows_fast_responses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_reply("{\"questions\":[{\"que\":1,\"type\":\"mcq\",\"bbox\":[1,2,3,4]}]}")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = GeminiClient::builder()
        .api_key("test-api-key")
        .base_url(mock_server.uri())
        .timeout(std::time::Duration::from_millis(800))
        .build()
        .unwrap();
    assert_eq!(
        client.config().timeout,
        Some(std::time::Duration::from_millis(800))
    );

    let result = QuestionScanner::new(client).try_scan(&page()).await.unwrap();
    assert_eq!(result.len(), 1);
}

#[tokio::test]
async fn slow_responses_hit_the_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(MODEL_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(text_reply("{\"questions\":[]}"))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = GeminiClient::builder()
        .api_key("test-api-key")
        .base_url(mock_server.uri())
        .timeout(std::time::Duration::from_millis(200))
        .build()
        .unwrap();
    let err = client.generate(&page(), "x").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Network);
}

//! HTTP-level tests for `GeminiClient` against a local mock server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zenboard_core::{ChatMessage, NarrationProvider, RemoteServiceError, TextGenerator};
use zenboard_genai::{GeminiClient, GeminiConfig};

const TEXT_PATH: &str = "/models/gemini-3-flash-preview:generateContent";
const TTS_PATH: &str = "/models/gemini-2.5-flash-preview-tts:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        GeminiConfig::new()
            .with_base_url(server.uri())
            .with_api_key("test-key"),
    )
    .unwrap()
}

fn text_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    }))
}

#[tokio::test]
async fn chat_sends_persona_and_history() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "Be kind." }] },
            "contents": [
                { "role": "user", "parts": [{ "text": "I'm nervous" }] },
                { "role": "model", "parts": [{ "text": "That's normal." }] },
                { "role": "user", "parts": [{ "text": "What now?" }] }
            ]
        })))
        .respond_with(text_reply("### Try this\n- Breathe"))
        .expect(1)
        .mount(&server)
        .await;

    let history = [
        ChatMessage::user("I'm nervous"),
        ChatMessage::model("That's normal."),
        ChatMessage::user("What now?"),
    ];
    let reply = client_for(&server).chat("Be kind.", &history).await.unwrap();
    assert_eq!(reply, "### Try this\n- Breathe");
}

#[tokio::test]
async fn generate_sends_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Scenario: test" }] }],
            "generationConfig": { "temperature": 0.5 }
        })))
        .respond_with(text_reply("Skip it and come back."))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .generate("Scenario: test", 0.5)
        .await
        .unwrap();
    assert_eq!(reply, "Skip it and come back.");
}

#[tokio::test]
async fn narrate_requests_audio_and_decodes_pcm() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TTS_PATH))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Breathe in slowly." }] }],
            "generationConfig": {
                "responseModalities": ["AUDIO"],
                "speechConfig": { "voiceConfig": { "prebuiltVoiceConfig": { "voiceName": "Kore" } } }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "audio/L16;codec=pcm;rate=24000", "data": "AAD/fw==" } }
            ] } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let audio = client_for(&server)
        .narrate("Breathe in slowly.")
        .await
        .unwrap();
    assert_eq!(audio.pcm, vec![0x00, 0x00, 0xff, 0x7f]);
    assert_eq!(audio.sample_rate, 24_000);
    assert_eq!(audio.channels, 1);
}

#[tokio::test]
async fn error_status_maps_to_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("x", 0.7).await.unwrap_err();
    assert_eq!(
        err,
        RemoteServiceError::Rejected {
            status: 400,
            message: "API key not valid.".into()
        }
    );
}

#[tokio::test]
async fn missing_key_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_reply("unreachable"))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(GeminiConfig::new().with_base_url(server.uri())).unwrap();
    assert_eq!(
        client.narrate("hello").await.unwrap_err(),
        RemoteServiceError::NotConfigured
    );
    assert_eq!(
        client.generate("hello", 0.7).await.unwrap_err(),
        RemoteServiceError::NotConfigured
    );
}

#[tokio::test]
async fn empty_candidates_are_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("x", 0.7).await.unwrap_err();
    assert!(matches!(err, RemoteServiceError::InvalidResponse(_)));
}

#[tokio::test]
async fn text_reply_to_speech_request_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TTS_PATH))
        .respond_with(text_reply("no audio here"))
        .mount(&server)
        .await;

    let err = client_for(&server).narrate("x").await.unwrap_err();
    assert!(matches!(err, RemoteServiceError::InvalidResponse(msg) if msg.contains("no audio")));
}

#[tokio::test]
async fn slow_server_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(text_reply("late").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        GeminiConfig::new()
            .with_base_url(server.uri())
            .with_api_key("test-key")
            .with_timeout(Duration::from_millis(200)),
    )
    .unwrap();

    assert_eq!(
        client.generate("x", 0.7).await.unwrap_err(),
        RemoteServiceError::Timeout
    );
}

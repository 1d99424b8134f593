//! HTTP-level tests for the director client against a mock Messages API.

use std::time::Duration;

use camlens_director::{
    generate_insights_or_placeholder, DirectorClient, DirectorConfig, DirectorError,
    NarrativeGenerator,
};
use camlens_models::{MotionLabel, Shot, ShotAnalysis, ShotType};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> DirectorConfig {
    DirectorConfig {
        api_key: Some("test-key".to_string()),
        base_url: server.uri(),
        request_timeout: Duration::from_secs(5),
        max_retries: 1,
        ..Default::default()
    }
}

fn shots() -> Vec<ShotAnalysis> {
    vec![
        ShotAnalysis {
            shot: Shot::new(0.0, 3.0).unwrap(),
            duration: 3.0,
            shot_type: ShotType::Wide,
            primary_motion: MotionLabel::PanLeft,
            secondary_motions: vec![],
            intensity: 0.35,
            dominant_entities: vec![],
            description: "Wide shot with camera pan-left".to_string(),
        },
        ShotAnalysis {
            shot: Shot::new(3.0, 6.5).unwrap(),
            duration: 3.5,
            shot_type: ShotType::CloseUp,
            primary_motion: MotionLabel::Static,
            secondary_motions: vec![],
            intensity: 0.0,
            dominant_entities: vec![],
            description: "Close-up shot with 1 face".to_string(),
        },
    ]
}

fn text_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "msg_01",
        "type": "message",
        "role": "assistant",
        "content": [{"type": "text", "text": text}],
        "stop_reason": "end_turn"
    }))
}

#[tokio::test]
async fn test_generate_parses_insights() {
    let server = MockServer::start().await;
    let reply = r#"```json
[
  {"intent": "Reveal the location", "technical": "Slow pan", "context": "Opening", "suggestions": ["Start wider"]},
  {"intent": "Connect with the subject", "technical": "Tight framing", "context": "Reaction", "suggestions": []}
]
```"#;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .and(header("anthropic-version", "2023-06-01"))
        .respond_with(text_reply(reply))
        .expect(1)
        .mount(&server)
        .await;

    let client = DirectorClient::new(config(&server)).unwrap();
    let insights = client.generate(&shots()).await.unwrap();

    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].intent, "Reveal the location");
    assert_eq!(insights[0].suggestions, vec!["Start wider".to_string()]);
    assert_eq!(insights[1].context, "Reaction");
}

#[tokio::test]
async fn test_retries_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(529).set_body_string("overloaded"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(text_reply(r#"[{"intent": "a"}, {"intent": "b"}]"#))
        .mount(&server)
        .await;

    let client = DirectorClient::new(config(&server)).unwrap();
    let insights = client.generate(&shots()).await.unwrap();
    assert_eq!(insights[1].intent, "b");
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid x-api-key"))
        .expect(1)
        .mount(&server)
        .await;

    let client = DirectorClient::new(config(&server)).unwrap();
    let err = client.generate(&shots()).await.unwrap_err();
    assert!(matches!(err, DirectorError::RequestFailed(_)));
}

#[tokio::test]
async fn test_malformed_reply_falls_back_to_placeholders() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(text_reply("I'd be happy to help with these shots!"))
        .mount(&server)
        .await;

    let client = DirectorClient::new(config(&server)).unwrap();
    let shots = shots();
    let insights =
        generate_insights_or_placeholder(&client, &shots, Duration::from_secs(5)).await;

    assert_eq!(insights.len(), 2);
    assert!(insights.iter().all(|i| i.is_unavailable()));
}

//! Chat exchanges end to end: orchestrator + HTTP client + mock server.

use genie::configuration::ConversationSettings;
use genie::connectors::{init_analytics_service, AnalyticsServiceConfig};
use genie::models::{Message, Sender};
use genie::services::{ChatOrchestrator, SendOutcome};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn orchestrator_for(server: &MockServer) -> ChatOrchestrator {
    let config = AnalyticsServiceConfig::default().with_base_url(server.uri());
    let connector = init_analytics_service(&config).expect("connector");
    ChatOrchestrator::new(connector, ConversationSettings::default())
}

fn contents(messages: &[Message]) -> Vec<String> {
    messages.iter().map(|m| m.content().to_string()).collect()
}

#[tokio::test]
async fn test_session_round_trips_between_exchanges() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({"session_id": null})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Overall rate is 35%.",
            "graphs": [],
            "query_type": "analytics",
            "session_id": "sess-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_partial_json(json!({"session_id": "sess-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Gujarat leads.",
            "graphs": null,
            "query_type": "analytics",
            "session_id": "sess-1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let orch = orchestrator_for(&server);
    orch.send("Overall recovery?").await;
    orch.send("Best state?").await;

    assert_eq!(
        contents(&orch.visible_messages()),
        vec!["Overall recovery?", "Overall rate is 35%.", "Best state?", "Gujarat leads."]
    );
    assert_eq!(orch.session_handle().as_deref(), Some("sess-1"));
    assert_eq!(orch.with_store(|s| s.conversations().len()), 1);
}

#[tokio::test]
async fn test_graph_failure_does_not_stop_later_graphs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "Here are the charts.",
            "graphs": ["g1", "g2"],
            "query_type": "graph",
            "session_id": "s"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/g1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/graph/g2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(vec![1u8, 2, 3])
                .insert_header("content-type", "image/png"),
        )
        .mount(&server)
        .await;

    let orch = orchestrator_for(&server);
    let outcome = orch.send("Show charts").await;

    let SendOutcome::Completed { replies } = outcome else {
        panic!("expected completion, got {outcome:?}");
    };
    assert_eq!(replies.len(), 3);
    assert_eq!(replies[0].content(), "Here are the charts.");
    assert_eq!(replies[1].content(), "Failed to load graph g1");
    assert!(replies[2].is_image());
    assert_eq!(replies[2].caption(), Some("Graph g2"));
    assert_eq!(replies[2].image().map(|i| i.len()), Some(3));

    let visible = orch.visible_messages();
    assert_eq!(visible.len(), 4);
    assert!(visible[1..].iter().all(|m| m.sender() == Sender::Bot));
}

#[tokio::test]
async fn test_remote_error_becomes_bot_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let orch = orchestrator_for(&server);
    let outcome = orch.send("Hello").await;

    assert!(matches!(outcome, SendOutcome::Failed { .. }));
    assert_eq!(
        contents(&orch.visible_messages()),
        vec![
            "Hello",
            "Failed to fetch response: Analytics API error 500: Internal Server Error"
        ]
    );
    assert!(!orch.is_pending());
    assert_eq!(orch.session_handle(), None);
}

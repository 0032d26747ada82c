use serde::{Deserialize, Serialize};

/// Wire body for `POST /chat`. `session_id` is always present, `null`
/// before the first exchange.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub message: &'a str,
    pub session_id: Option<&'a str>,
}

/// Wire body returned by `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub graphs: Option<Vec<String>>,
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Parsed chat reply handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatReply {
    pub reply_text: String,
    pub session_handle: Option<String>,
    pub graph_references: Vec<String>,
    pub query_type: Option<String>,
}

impl From<ChatResponse> for ChatReply {
    fn from(resp: ChatResponse) -> Self {
        Self {
            reply_text: resp.response,
            session_handle: resp.session_id.filter(|s| !s.is_empty()),
            graph_references: resp.graphs.unwrap_or_default(),
            query_type: resp.query_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_null_session() {
        let req = ChatRequest {
            message: "Show monthly recovery trends",
            session_id: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"message": "Show monthly recovery trends", "session_id": null})
        );
    }

    #[test]
    fn test_reply_from_full_response() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "response": "Gujarat leads with 45.2%",
            "graphs": ["g1", "g2"],
            "query_type": "analytics",
            "session_id": "abc"
        }))
        .unwrap();
        let reply = ChatReply::from(resp);
        assert_eq!(reply.reply_text, "Gujarat leads with 45.2%");
        assert_eq!(reply.graph_references, vec!["g1", "g2"]);
        assert_eq!(reply.session_handle.as_deref(), Some("abc"));
        assert_eq!(reply.query_type.as_deref(), Some("analytics"));
    }

    #[test]
    fn test_reply_null_graphs_and_empty_session() {
        let resp: ChatResponse = serde_json::from_value(json!({
            "response": "ok",
            "graphs": null,
            "query_type": "general",
            "session_id": ""
        }))
        .unwrap();
        let reply = ChatReply::from(resp);
        assert!(reply.graph_references.is_empty());
        assert!(reply.session_handle.is_none());
    }
}

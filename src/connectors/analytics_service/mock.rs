use async_trait::async_trait;
use std::collections::{HashSet, VecDeque};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;
use tokio_util::sync::CancellationToken;

use super::{AnalyticsServiceConnector, ChatReply};
use crate::connectors::errors::ConnectorError;
use crate::models::GraphImage;

/// One scripted answer to `send_chat_message`.
pub struct ScriptedReply {
    result: Result<ChatReply, ConnectorError>,
    gate: Option<Arc<Notify>>,
    honour_cancel: bool,
}

impl ScriptedReply {
    pub fn ok(text: &str, session: Option<&str>, graphs: &[&str]) -> Self {
        Self {
            result: Ok(ChatReply {
                reply_text: text.to_string(),
                session_handle: session.map(str::to_string),
                graph_references: graphs.iter().map(|g| g.to_string()).collect(),
                query_type: Some("analytics".to_string()),
            }),
            gate: None,
            honour_cancel: true,
        }
    }

    pub fn err(status: u16, message: &str) -> Self {
        Self {
            result: Err(ConnectorError::RemoteService {
                status,
                message: message.to_string(),
            }),
            gate: None,
            honour_cancel: true,
        }
    }

    /// Hold the reply until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Keep waiting on the gate even after cancellation, like a network
    /// layer that ignores the abort signal.
    pub fn ignoring_cancel(mut self) -> Self {
        self.honour_cancel = false;
        self
    }
}

/// Scripted connector: replies are consumed in order, graph ids listed in
/// `failing_graphs` answer 404, every other graph returns three bytes.
#[derive(Default)]
pub struct MockAnalyticsServiceConnector {
    script: Mutex<VecDeque<ScriptedReply>>,
    failing_graphs: HashSet<String>,
    graph_gate: Option<(Arc<Notify>, bool)>,
    chat_requests: Mutex<Vec<(String, Option<String>)>>,
    graph_requests: Mutex<Vec<String>>,
}

impl MockAnalyticsServiceConnector {
    pub fn new(script: Vec<ScriptedReply>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            ..Default::default()
        }
    }

    pub fn with_failing_graphs(mut self, ids: &[&str]) -> Self {
        self.failing_graphs = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    /// Every graph fetch waits for `gate`. With `honour_cancel` false the
    /// fetch keeps waiting after cancellation and then succeeds.
    pub fn with_graph_gate(mut self, gate: Arc<Notify>, honour_cancel: bool) -> Self {
        self.graph_gate = Some((gate, honour_cancel));
        self
    }

    pub fn chat_requests(&self) -> Vec<(String, Option<String>)> {
        self.chat_requests.lock().unwrap().clone()
    }

    pub fn graph_requests(&self) -> Vec<String> {
        self.graph_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyticsServiceConnector for MockAnalyticsServiceConnector {
    async fn send_chat_message(
        &self,
        text: &str,
        session_handle: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<ChatReply, ConnectorError> {
        self.chat_requests
            .lock()
            .unwrap()
            .push((text.to_string(), session_handle.map(str::to_string)));
        let scripted = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("mock connector ran out of scripted replies");

        if let Some(gate) = scripted.gate {
            if scripted.honour_cancel {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(ConnectorError::Cancelled),
                    _ = gate.notified() => {}
                }
            } else {
                gate.notified().await;
            }
        }
        scripted.result
    }

    async fn fetch_graph_image(
        &self,
        graph_id: &str,
        cancel: &CancellationToken,
    ) -> Result<GraphImage, ConnectorError> {
        self.graph_requests.lock().unwrap().push(graph_id.to_string());
        if let Some((gate, honour_cancel)) = &self.graph_gate {
            if *honour_cancel {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(ConnectorError::Cancelled),
                    _ = gate.notified() => {}
                }
            } else {
                gate.notified().await;
            }
        }
        if self.failing_graphs.contains(graph_id) {
            return Err(ConnectorError::RemoteService {
                status: 404,
                message: "Not Found".to_string(),
            });
        }
        Ok(GraphImage::new(
            graph_id,
            Some("image/png".to_string()),
            vec![0x89, b'P', b'N'],
        ))
    }
}

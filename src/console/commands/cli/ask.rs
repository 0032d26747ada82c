use std::path::PathBuf;

use crate::banner::ASSISTANT_NAME;
use crate::cli::error::CliError;
use crate::cli::progress;
use crate::connectors::init_analytics_service;
use crate::console::commands::cli::{build_runtime, load_settings, render_body};
use crate::console::commands::CallableTrait;
use crate::services::{ChatOrchestrator, SendOutcome};

/// `genie ask <MESSAGE> [--session ID] [--graph-dir DIR]`
///
/// One exchange with the analytics service. Replies go to stdout, the
/// session id to stderr so it can be passed back with `--session`.
pub struct AskCommand {
    pub message: String,
    pub session: Option<String>,
    pub graph_dir: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl AskCommand {
    pub fn new(message: String, session: Option<String>, graph_dir: Option<PathBuf>) -> Self {
        Self {
            message,
            session,
            graph_dir,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }
}

impl CallableTrait for AskCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = load_settings(self.base_url.as_deref())?;
        let connector = init_analytics_service(&settings.analytics).map_err(CliError::from)?;
        let orchestrator = ChatOrchestrator::new(connector, settings.conversation.clone())
            .with_session_handle(self.session.clone());

        let rt = build_runtime()?;
        let outcome = rt.block_on(async {
            let pb = progress::typing_spinner(ASSISTANT_NAME);
            let outcome = orchestrator.send(&self.message).await;
            progress::finish_clear(&pb);
            outcome
        });

        match outcome {
            SendOutcome::Skipped => {
                eprintln!("Nothing to send: the message is empty.");
            }
            SendOutcome::Completed { replies } => {
                for reply in &replies {
                    println!("{}", render_body(reply, self.graph_dir.as_deref())?);
                }
            }
            SendOutcome::Failed { error, reply } => {
                println!("{}", reply.content());
                return Err(Box::new(CliError::from(error)));
            }
            SendOutcome::Superseded => {
                eprintln!("Request cancelled.");
            }
        }

        if let Some(session) = orchestrator.session_handle() {
            eprintln!("Session: {}", session);
        }

        Ok(())
    }
}

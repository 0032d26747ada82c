use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::banner::{self, ASSISTANT_NAME};
use crate::cli::error::CliError;
use crate::cli::progress;
use crate::cli::repl::{parse_line, ReplCommand, ReplInput, HELP};
use crate::connectors::init_analytics_service;
use crate::console::commands::cli::{build_runtime, load_settings, render_transcript_entry};
use crate::console::commands::CallableTrait;
use crate::services::{ChatOrchestrator, SendOutcome};
use crate::shell::{format_updated_at, AppState, Page};

/// `genie chat [--graph-dir DIR]`
///
/// Interactive chat with the analytics bot. Lines starting with `/` are
/// commands (see `/help`), everything else is sent as a question.
pub struct ChatCommand {
    pub graph_dir: Option<PathBuf>,
    pub base_url: Option<String>,
}

impl ChatCommand {
    pub fn new(graph_dir: Option<PathBuf>) -> Self {
        Self {
            graph_dir,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }
}

/// One row of `/history`: position in the full list, title, last update,
/// whether it is the open conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub updated: String,
    pub active: bool,
}

pub fn history_entries(orchestrator: &ChatOrchestrator, query: Option<&str>) -> Vec<HistoryEntry> {
    let now = Utc::now();
    orchestrator.with_store(|store| {
        store
            .conversations()
            .iter()
            .enumerate()
            .filter(|(_, c)| query.map_or(true, |q| c.matches(q)))
            .map(|(i, c)| HistoryEntry {
                index: i + 1,
                id: c.id().to_string(),
                title: c.title().to_string(),
                updated: format_updated_at(c.updated_at(), now),
                active: store.active_id() == Some(c.id()),
            })
            .collect()
    })
}

/// Resolve a 1-based `/history` position to a conversation id.
pub fn conversation_id_at(orchestrator: &ChatOrchestrator, index: usize) -> Result<String, CliError> {
    orchestrator.with_store(|store| {
        let available = store.conversations().len();
        index
            .checked_sub(1)
            .and_then(|i| store.conversations().get(i))
            .map(|c| c.id().to_string())
            .ok_or(CliError::ConversationIndexOutOfRange { index, available })
    })
}

pub fn preferences_text(app: &AppState) -> String {
    format!(
        "dark_mode              {}\nnotifications          {}\ndata_refresh_interval  {}\nsidebar_collapsed      {}",
        app.settings.dark_mode,
        app.settings.notifications,
        app.settings.data_refresh_interval,
        app.sidebar_collapsed,
    )
}

enum Flow {
    Continue,
    Quit,
}

struct ChatSession<'a> {
    orchestrator: ChatOrchestrator,
    app: AppState,
    graph_dir: Option<&'a Path>,
}

impl ChatSession<'_> {
    async fn exchange(&mut self, text: &str) -> Result<(), CliError> {
        let pb = progress::typing_spinner(ASSISTANT_NAME);
        let outcome = tokio::select! {
            outcome = self.orchestrator.send(text) => outcome,
            _ = tokio::signal::ctrl_c() => {
                self.orchestrator.cancel_pending();
                SendOutcome::Superseded
            }
        };
        progress::finish_clear(&pb);

        match outcome {
            SendOutcome::Skipped => {}
            SendOutcome::Completed { replies } => {
                for reply in &replies {
                    println!("{}", render_transcript_entry(reply, self.graph_dir)?);
                }
            }
            SendOutcome::Failed { error, reply } => {
                tracing::warn!("Chat request failed: {}", error);
                println!("{}", render_transcript_entry(&reply, self.graph_dir)?);
            }
            SendOutcome::Superseded => println!("(cancelled)\n"),
        }
        Ok(())
    }

    fn command(&mut self, command: ReplCommand) -> Result<Flow, CliError> {
        match command {
            ReplCommand::New => {
                self.orchestrator.new_chat();
                self.app.navigate(Page::Chatbot);
                println!("Started a new conversation.\n");
                println!("{}", banner::starter_prompts());
            }
            ReplCommand::History(query) => {
                self.app.navigate(Page::History);
                let entries = history_entries(&self.orchestrator, query.as_deref());
                if entries.is_empty() {
                    println!("No conversations found.\n");
                } else {
                    for e in &entries {
                        let marker = if e.active { "*" } else { " " };
                        println!("{}{:>3}. {:<52} {}", marker, e.index, e.title, e.updated);
                    }
                    println!();
                }
            }
            ReplCommand::Load(index) => {
                let id = conversation_id_at(&self.orchestrator, index)?;
                self.orchestrator.load_conversation(&id)?;
                self.app.navigate(Page::Chatbot);
                for message in self.orchestrator.visible_messages() {
                    println!("{}", render_transcript_entry(&message, self.graph_dir)?);
                }
            }
            ReplCommand::Delete(index) => {
                let id = conversation_id_at(&self.orchestrator, index)?;
                self.orchestrator.delete_conversation(&id)?;
                println!("Deleted conversation #{}.\n", index);
            }
            ReplCommand::Session => match self.orchestrator.session_handle() {
                Some(session) => println!("Session: {}\n", session),
                None => println!("No session yet.\n"),
            },
            ReplCommand::ToggleDarkMode => {
                let on = self.app.toggle_dark_mode();
                println!("Dark mode {}.\n", if on { "on" } else { "off" });
            }
            ReplCommand::ToggleNotifications => {
                let on = self.app.toggle_notifications();
                println!("Notifications {}.\n", if on { "on" } else { "off" });
            }
            ReplCommand::ToggleSidebar => {
                self.app.toggle_sidebar();
                let state = if self.app.sidebar_collapsed { "collapsed" } else { "expanded" };
                println!("Sidebar {}.\n", state);
            }
            ReplCommand::Refresh(interval) => {
                self.app.set_refresh_interval(interval);
                println!("Data refresh every {}.\n", interval);
            }
            ReplCommand::Preferences => {
                self.app.navigate(Page::Settings);
                println!("{}\n", preferences_text(&self.app));
            }
            ReplCommand::Help => println!("{}\n", HELP),
            ReplCommand::Quit => return Ok(Flow::Quit),
            ReplCommand::Invalid(msg) => eprintln!("{}", msg),
        }
        Ok(Flow::Continue)
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

impl CallableTrait for ChatCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let settings = load_settings(self.base_url.as_deref())?;
        let connector = init_analytics_service(&settings.analytics).map_err(CliError::from)?;

        banner::print_banner(&settings.analytics.base_url);
        println!("{}", banner::welcome());
        println!("Type /help for commands.\n");

        let mut session = ChatSession {
            orchestrator: ChatOrchestrator::new(connector, settings.conversation.clone()),
            app: AppState::default(),
            graph_dir: self.graph_dir.as_deref(),
        };

        let rt = build_runtime()?;
        rt.block_on(async {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            loop {
                prompt();
                let line = tokio::select! {
                    line = lines.next_line() => line.map_err(CliError::from)?,
                    _ = tokio::signal::ctrl_c() => None,
                };
                let Some(line) = line else {
                    println!();
                    break;
                };

                let result = match parse_line(&line) {
                    ReplInput::Empty => Ok(Flow::Continue),
                    ReplInput::Message(text) => session.exchange(&text).await.map(|_| Flow::Continue),
                    ReplInput::Command(command) => session.command(command),
                };
                match result {
                    Ok(Flow::Continue) => {}
                    Ok(Flow::Quit) => break,
                    Err(err) => eprintln!("Error: {}\n", err),
                }
            }
            Ok::<(), CliError>(())
        })?;

        Ok(())
    }
}

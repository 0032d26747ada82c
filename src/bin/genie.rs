//! `genie` command-line client for the loan-recovery analytics bot.
//!
//! ```text
//! genie chat
//! genie ask "Show monthly recovery trends" --graph-dir ./graphs
//! genie render --file reply.txt
//! genie dashboard
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use genie::configuration::get_configuration;
use genie::console::commands::cli;
use genie::console::commands::CallableTrait;
use genie::telemetry::{get_subscriber, init_subscriber};

#[derive(Parser, Debug)]
#[command(
    name = "genie",
    version,
    about = "Chat with the loan-recovery analytics bot",
    long_about = "MithaasGenie: ask questions about loan recovery in plain language.\n\n\
        Answers that contain JSON or markdown tables are drawn as tables, and\n\
        graphs returned by the analytics service can be saved as images."
)]
struct Cli {
    /// Analytics API base URL (overrides configuration)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
    #[command(subcommand)]
    command: GenieCommands,
}

#[derive(Debug, Subcommand)]
enum GenieCommands {
    /// Start an interactive chat
    Chat {
        /// Save graph images into this directory
        #[arg(long, value_name = "DIR")]
        graph_dir: Option<PathBuf>,
    },
    /// Ask a single question and print the answer
    Ask {
        /// The question to ask
        message: String,
        /// Continue an existing session
        #[arg(long, value_name = "ID")]
        session: Option<String>,
        /// Save graph images into this directory
        #[arg(long, value_name = "DIR")]
        graph_dir: Option<PathBuf>,
    },
    /// Render a reply as the chat would display it (reads stdin by default)
    Render {
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Print the classification as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the recovery dashboard with sample data
    Dashboard,
    /// List the starter questions
    Suggestions,
    /// Settings management
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Debug, Subcommand)]
enum SettingsCommands {
    /// Show effective settings
    Show {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = get_configuration()
        .map(|s| s.log_level)
        .unwrap_or_else(|_| "warn".to_string());
    let subscriber = get_subscriber("genie".into(), log_level, std::io::stderr);
    if let Err(err) = init_subscriber(subscriber) {
        eprintln!("Warning: logging disabled: {}", err);
    }

    let command = get_command(cli)?;
    if let Err(err) = command.call() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
    Ok(())
}

fn get_command(args: Cli) -> Result<Box<dyn CallableTrait>, Box<dyn std::error::Error>> {
    let base_url = args.base_url;
    let cmd: Box<dyn CallableTrait> = match args.command {
        GenieCommands::Chat { graph_dir } => {
            Box::new(cli::chat::ChatCommand::new(graph_dir).with_base_url(base_url))
        }
        GenieCommands::Ask {
            message,
            session,
            graph_dir,
        } => Box::new(
            cli::ask::AskCommand::new(message, session, graph_dir).with_base_url(base_url),
        ),
        GenieCommands::Render { file, json } => {
            Box::new(cli::render::RenderCommand::new(file, json))
        }
        GenieCommands::Dashboard => Box::new(cli::dashboard::DashboardCommand::new()),
        GenieCommands::Suggestions => Box::new(cli::suggestions::SuggestionsCommand::new()),
        GenieCommands::Settings { command } => match command {
            SettingsCommands::Show { json } => Box::new(
                cli::settings::SettingsShowCommand::new(json).with_base_url(base_url),
            ),
        },
    };

    Ok(cmd)
}

//! Reply rendering
//!
//! Decides how a chat reply should be displayed. Each stage is a pure
//! function returning `None` when it does not apply; [`classify`] tries them
//! in order and falls back to plain text:
//!
//! 1. JSON inside a fenced code block
//! 2. the whole text as JSON
//! 3. a markdown pipe table
//! 4. plain text, line breaks kept

mod json_table;
mod markdown_table;
pub mod terminal;

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

pub use json_table::json_table;
pub use markdown_table::markdown_table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableSource {
    Json,
    Markdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub source: TableSource,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "lowercase")]
pub enum RenderedContent {
    Table(Table),
    Plain(String),
}

impl RenderedContent {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            Self::Plain(_) => None,
        }
    }
}

fn fence_pattern() -> Option<&'static Regex> {
    static FENCE: OnceLock<Option<Regex>> = OnceLock::new();
    FENCE
        .get_or_init(|| Regex::new(r"(?is)```(?:json)?[ \t]*\r?\n?(.*?)```").ok())
        .as_ref()
}

/// Inner text of the first fenced code block, if any.
pub fn fenced_block(text: &str) -> Option<&str> {
    fence_pattern()?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify `text` and build its displayable form.
pub fn classify(text: &str) -> RenderedContent {
    let table = fenced_block(text)
        .and_then(json_table)
        .or_else(|| json_table(text))
        .or_else(|| markdown_table(text));

    match table {
        Some(table) => RenderedContent::Table(table),
        None => RenderedContent::Plain(text.to_string()),
    }
}

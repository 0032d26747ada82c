use std::io::Read;
use std::path::PathBuf;

use crate::cli::error::CliError;
use crate::console::commands::CallableTrait;
use crate::render::{classify, terminal, RenderedContent};

/// `genie render [--file PATH] [--json]`
///
/// Classifies a reply (stdin by default) the way the chat displays it.
pub struct RenderCommand {
    pub file: Option<PathBuf>,
    pub json: bool,
}

impl RenderCommand {
    pub fn new(file: Option<PathBuf>, json: bool) -> Self {
        Self { file, json }
    }

    fn read_input(&self) -> Result<String, CliError> {
        match &self.file {
            Some(path) => Ok(std::fs::read_to_string(path)?),
            None => {
                let mut input = String::new();
                std::io::stdin().read_to_string(&mut input)?;
                Ok(input)
            }
        }
    }
}

/// Text printed for `content`, either the drawn table or JSON.
pub fn render_output(content: &RenderedContent, json: bool) -> Result<String, CliError> {
    if json {
        Ok(serde_json::to_string_pretty(content)?)
    } else {
        Ok(terminal::format(content))
    }
}

impl CallableTrait for RenderCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        let input = self.read_input()?;
        let content = classify(input.trim_end_matches(['\r', '\n']));
        println!("{}", render_output(&content, self.json)?);
        Ok(())
    }
}

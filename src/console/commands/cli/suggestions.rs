use crate::banner;
use crate::console::commands::CallableTrait;

/// `genie suggestions`
pub struct SuggestionsCommand;

impl SuggestionsCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SuggestionsCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CallableTrait for SuggestionsCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        print!("{}", banner::starter_prompts());
        Ok(())
    }
}

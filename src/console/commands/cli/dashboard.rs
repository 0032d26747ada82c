use crate::console::commands::CallableTrait;
use crate::render::terminal;
use crate::shell::demo_data::{monthly_table, overall_recovery_rate, state_table, total_recovered};

/// `genie dashboard`
///
/// Prints the sample recovery figures.
pub struct DashboardCommand;

impl DashboardCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DashboardCommand {
    fn default() -> Self {
        Self::new()
    }
}

pub fn dashboard_text() -> String {
    format!(
        "Overall recovery rate: {:.1}%\nTotal recovered: ₹{:.1}L\n\nRegional performance\n{}\n\nMonthly trend\n{}",
        overall_recovery_rate(),
        total_recovered(),
        terminal::format_table(&state_table()),
        terminal::format_table(&monthly_table()),
    )
}

impl CallableTrait for DashboardCommand {
    fn call(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{}", dashboard_text());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_lists_states_and_months() {
        let text = dashboard_text();
        assert!(text.contains("Total recovered: ₹44.6L"), "Got:\n{text}");
        assert!(text.contains("| Gujarat "));
        assert!(text.contains("| Jun "));
    }
}

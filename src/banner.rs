use crate::shell::demo_data::STARTER_PROMPTS;

pub const ASSISTANT_NAME: &str = "MithaasGenie";

pub const WELCOME_MESSAGE: &str = "Hello! I'm MithaasGenie, your AI-powered analytics assistant. \
I can help you with any kind of analytics related to Mithaas. What would you like to know?";

/// Display a banner with version and the analytics endpoint in use
pub fn banner(base_url: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    format!(
        r#"
╭────────────────────────────────────────────────────────╮
│  {:<54}│
│  Version: {:<45}│
│  Analytics: {:<43}│
╰────────────────────────────────────────────────────────╯
"#,
        capitalize(name),
        version,
        truncate(base_url, 43),
    )
}

/// Welcome text followed by the numbered starter prompts
pub fn welcome() -> String {
    let mut out = format!("{}\n\nTry one of these:\n", WELCOME_MESSAGE);
    out.push_str(&starter_prompts());
    out
}

pub fn starter_prompts() -> String {
    STARTER_PROMPTS
        .iter()
        .enumerate()
        .map(|(i, (title, prompt))| format!("  {}. {}: \"{}\"\n", i + 1, title, prompt))
        .collect()
}

pub fn print_banner(base_url: &str) {
    println!("{}", banner(base_url));
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

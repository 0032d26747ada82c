pub mod banner;
pub mod cli;
pub mod configuration;
pub mod connectors;
pub mod console;
pub mod models;
pub mod render;
pub mod services;
pub mod shell;
pub mod telemetry;

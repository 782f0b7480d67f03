//! Core TubeFlow library (markdown renderer, strategy client, providers, config).

pub mod config;
pub mod markdown;
pub mod prompts;
pub mod providers;
pub mod strategy;

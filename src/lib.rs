pub mod arxiv;
pub mod cache;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod llm;
pub mod outlet;
pub mod research;
pub mod types;
pub mod workflow;

// Re-export commonly used types
pub use config::Config;
pub use research::ResearchEvent;
pub use types::{ResearchRequest, ResearchTree};
pub use workflow::launch;

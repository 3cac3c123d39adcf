#[path = "config.rs"]
pub mod config;

#[path = "env_source.rs"]
pub mod env_source;

#[path = "report_writer.rs"]
pub mod report_writer;

#[path = "types.rs"]
pub mod types;

#[path = "error.rs"]
pub mod error;

//! Shared utilities and common types for the Hireline server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Common response envelopes

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, CorsConfig, DatabaseConfig, EmailConfig, Environment, ServerConfig};
pub use types::ApiMessage;

//! HTTP route handlers

pub mod reset;

pub use reset::AppState;

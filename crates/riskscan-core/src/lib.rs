//! Core types, traits, errors, config, and tracing for the Riskscan EDA engine.

pub mod config;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

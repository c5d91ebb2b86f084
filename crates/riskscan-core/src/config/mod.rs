//! Configuration system for Riskscan.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod eda_config;

pub use eda_config::EdaConfig;

//! Configuration loading and management for the worked-time engine.
//!
//! This module provides functionality to load agreement configurations from
//! YAML files: agreement metadata, legal limits, premiums, overtime brackets
//! and monthly-hour divisors. [`EngineConfig::default`] carries the same
//! values as the shipped `config/idcc_1760` directory.
//!
//! # Example
//!
//! ```no_run
//! use jardinerie_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/idcc_1760").unwrap();
//! println!("Loaded agreement: {}", loader.config().agreement().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AgreementMetadata, EngineConfig, LimitsConfig, NightWindow, OvertimeConfig, PremiumConfig,
    RatesConfig,
};

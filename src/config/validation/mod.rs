//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: validators for the api, ui and logging sections
//! - `tests`: Test suite for all validators

mod config_validators;
mod trait_def;

pub use trait_def::Validate;

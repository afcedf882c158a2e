#![forbid(unsafe_code)]

//! Core model for estimating blood alcohol content.
//!
//! This crate provides:
//! - Drinks and the grams of ethanol they carry
//! - A person with BMI-adjusted Widmark factor
//! - BAC and time-to-sobriety estimates
//! - Session files, configuration and logging setup

pub mod constants;
pub mod error;
pub mod drink;
pub mod person;
pub mod session;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use constants::METABOLIC_RATE;
pub use drink::{Beer, Drink, DrinkKind, DrinkSpec, Spirit, Wine};
pub use person::{compute_bmi, compute_widmark_factor, BacReport, Person, Sex};
pub use session::Session;
pub use config::Config;

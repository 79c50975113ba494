//! boxjoint Settings Crate
//!
//! Loads, validates and saves the material, layout and output defaults used
//! when generating box plans.

pub mod config;
pub mod error;

pub use config::{Config, LayoutSettings, MaterialSettings, OutputSettings};
pub use error::{SettingsError, SettingsResult};

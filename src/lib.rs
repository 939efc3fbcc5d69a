//! Parameter bundle for an external nested-sampling engine

pub mod config;
pub mod settings;
pub mod storage;

pub use settings::{Overrides, Settings, SettingsBuilder, SettingsError};

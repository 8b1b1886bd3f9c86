pub mod config;

pub use config::{current_year, RawConfig, RawValue, Validation};

//! gplgen - GIMP ramp palette generator
//!
//! Configuration loading, palette delivery and error reporting around the
//! `gpl-ramp` core. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;

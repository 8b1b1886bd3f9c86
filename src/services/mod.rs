pub mod generator;
pub mod output;

pub use generator::{generate, load_settings, GenerateError, GenerateOptions, Outcome};
pub use output::{deliver, Delivery};

pub mod error;
pub mod prompt;
pub mod telemetry;
pub mod types;
pub mod utils;

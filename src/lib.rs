pub mod config;
pub mod error;
pub mod input;
pub mod logging;

// Re-export commonly used types for easier access
pub use config::{EmulatorInputs, ValidatedInputs};
pub use error::{AppError, AppResult};

pub mod definitions;
pub mod normalization;
pub mod validation;

// Re-export commonly used items from definitions
pub use definitions::{
    Channel, TriState, MAX_PORT, MIN_API_LEVEL, MIN_PORT, VALID_ARCHS, VALID_CHANNELS,
};
pub use normalization::normalize_target_alias;
pub use validation::*;

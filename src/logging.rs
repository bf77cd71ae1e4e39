use crate::error::{AppError, AppResult};

/// Install a fmt subscriber so validation progress is printed
///
/// Hosts that already configure `tracing` should skip this. Fails if a
/// global subscriber is already set.
pub fn init() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Configuration(format!("Failed to initialize logging: {}", e)))
}

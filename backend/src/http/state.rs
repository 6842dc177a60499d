//! Application state for the HTTP server.

use std::sync::Arc;

use super::error::AppError;
use crate::config::{LimitSettings, ServerConfig};
use crate::models::RangeBounds;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration, fixed at startup
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    fn limits(&self) -> &LimitSettings {
        &self.config.limits
    }

    /// Reject starting numbers outside `1..=max_number`.
    pub fn check_number(&self, number: u64) -> Result<u64, AppError> {
        if number == 0 {
            return Err(AppError::BadRequest(
                "Number must be a positive integer".to_string(),
            ));
        }
        if number > self.limits().max_number {
            return Err(AppError::BadRequest(format!(
                "Number {} exceeds the maximum of {}",
                number,
                self.limits().max_number
            )));
        }
        Ok(number)
    }

    /// Reject reversed, zero-bounded, oversized or too-wide ranges.
    pub fn check_range(&self, start: u64, end: u64) -> Result<RangeBounds, AppError> {
        let range = RangeBounds::new(start, end)?;
        self.check_number(range.end())?;
        if range.span() > self.limits().max_range_span {
            return Err(AppError::BadRequest(format!(
                "Range [{}, {}] covers {} numbers, the maximum is {}",
                start,
                end,
                range.span(),
                self.limits().max_range_span
            )));
        }
        Ok(range)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{Result, TranslateError};
use std::time::Duration;

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl TranslatorConfig {
    /// Reject settings that would make every call fail before it starts.
    pub fn validate(&self) -> Result<()> {
        if self.client.timeout_seconds == 0 {
            return Err(TranslateError::Config(
                "timeout_seconds must be greater than zero".to_string(),
            ));
        }
        if self.endpoints.is_empty() {
            return Err(TranslateError::Config("endpoint pool is empty".to_string()));
        }
        Ok(())
    }
}

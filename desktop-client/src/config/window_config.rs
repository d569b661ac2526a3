use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigError, Validate};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::Invalid(
                "window size must be a finite number".to_string(),
            ));
        }
        if self.width < 240.0 || self.height < 320.0 {
            return Err(ConfigError::Invalid(
                "window must be at least 240x320".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 560.0,
        }
    }
}

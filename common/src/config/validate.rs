use super::ConfigError;

pub trait Validate {
    /// Checks value ranges; failures are reported as [`ConfigError::Invalid`].
    fn validate(&self) -> Result<(), ConfigError>;
}

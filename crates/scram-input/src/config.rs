use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult};

/// Length bounds for input lines, in characters after trimming.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    pub min_line_length: usize,
    pub max_line_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_line_length: 2,
            max_line_length: 500,
        }
    }
}

impl InputConfig {
    /// Build and validate a configuration.
    pub fn new(min_line_length: usize, max_line_length: usize) -> InputResult<Self> {
        let config = Self {
            min_line_length,
            max_line_length,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that both bounds are positive and `min <= max`.
    pub fn validate(&self) -> InputResult<()> {
        if self.min_line_length == 0 || self.max_line_length == 0 {
            return Err(InputError::InvalidConfig(
                "line length bounds must be positive".into(),
            ));
        }
        if self.min_line_length > self.max_line_length {
            return Err(InputError::InvalidConfig(format!(
                "`max_line_length` ({}) must be greater than or equal to `min_line_length` ({})",
                self.max_line_length, self.min_line_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = InputConfig::default();
        assert_eq!(c.min_line_length, 2);
        assert_eq!(c.max_line_length, 500);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_bounds_are_invalid() {
        assert!(InputConfig::new(10, 5).is_err());
        assert!(InputConfig::new(0, 5).is_err());
        assert!(InputConfig::new(5, 5).is_ok());
    }

    #[test]
    fn toml_partial_section() {
        let c: InputConfig = toml::from_str("max_line_length = 80").unwrap();
        assert_eq!(c, InputConfig { min_line_length: 2, max_line_length: 80 });
    }
}

use std::fmt;

/// Invalid counter or indicator configuration. The messages are shown to the
/// presenter as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidStart,
    InvalidGoal,
    GoalNotAboveStart,
    InvalidRange { min_value: i32, max_value: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStart => write!(f, "The start value must be an integer"),
            ConfigError::InvalidGoal => write!(f, "The goal value must be an integer"),
            ConfigError::GoalNotAboveStart => {
                write!(f, "The goal value must be larger than the start value")
            }
            ConfigError::InvalidRange {
                min_value,
                max_value,
            } => write!(
                f,
                "indicator range is empty: min_value ({min_value}) >= max_value ({max_value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Reject `min_value >= max_value` before any indicator state is built.
pub fn ensure_range(min_value: i32, max_value: i32) -> Result<(), ConfigError> {
    if min_value >= max_value {
        return Err(ConfigError::InvalidRange {
            min_value,
            max_value,
        });
    }
    Ok(())
}

//! Error types
//!
//! Nothing here is transient: a `ConfigError` means the tuning values can never
//! produce a playable corridor, a `LevelError` means the caller handed the
//! field an input outside its domain.

use std::fmt;

//=== ConfigError =========================================================

/// Invalid or unreadable configuration. Fatal at construction.
#[derive(Debug)]
pub enum ConfigError {
    /// A tuning value is out of range
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    /// Config file could not be read
    Io(std::io::Error),
    /// Config file is not valid JSON for `GameConfig`
    Parse(serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { field, reason } => write!(f, "invalid config `{}`: {}", field, reason),
            Self::Io(e) => write!(f, "failed to read config: {}", e),
            Self::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid { .. } => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

//=== LevelError ==========================================================

/// Errors returned by the obstacle field.
#[derive(Debug)]
pub enum LevelError {
    /// Field construction rejected the configuration
    Config(ConfigError),
    /// Scroll distance was negative, NaN, infinite or above one barrier interval
    InvalidScroll(f32),
    /// Horizontal position was NaN
    InvalidPosition(f32),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "{}", e),
            Self::InvalidScroll(d) => {
                write!(
                    f,
                    "scroll distance must be finite, non-negative and at most `barrier_interval`, got {}",
                    d
                )
            }
            Self::InvalidPosition(x) => write!(f, "horizontal position must be a number, got {}", x),
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for LevelError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

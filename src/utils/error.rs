use thiserror::Error;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl InspectError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            InspectError::ConfigParseError { .. } | InspectError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            InspectError::IoError(e) => format!("Could not read input: {}", e),
            InspectError::ConfigParseError { message } => {
                format!("The config file is not valid TOML: {}", message)
            }
            InspectError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    /// Config problems exit with 1, everything else with 2.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    #[error("Invalid value for '{field}' ({value:?}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl GreeterError {
    /// One-line message suitable for stderr.
    pub fn user_friendly_message(&self) -> String {
        match self {
            GreeterError::Io(e) => format!("I/O failure: {}", e),
            GreeterError::ConfigParse { message } => {
                format!("Could not read configuration: {}", message)
            }
            GreeterError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl WidgetError {
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            WidgetError::ConfigError { .. }
                | WidgetError::InvalidConfigValueError { .. }
                | WidgetError::MissingConfigError { .. }
        )
    }

    /// 1 for configuration problems, 2 for anything else.
    pub fn exit_code(&self) -> i32 {
        if self.is_config_error() {
            1
        } else {
            2
        }
    }

    /// Short message suitable for the terminal, without the error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            WidgetError::ApiError(e) if e.is_connect() => {
                "Could not reach the widget API".to_string()
            }
            WidgetError::ApiError(_) => "The widget API request failed".to_string(),
            WidgetError::IoError(e) => format!("File access failed: {}", e),
            WidgetError::SerializationError(_) => {
                "The widget API returned a body that is not JSON".to_string()
            }
            WidgetError::UrlError(e) => format!("Bad endpoint URL: {}", e),
            WidgetError::ConfigError { message } => message.clone(),
            WidgetError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
            WidgetError::MissingConfigError { field } => {
                format!("'{}' must be provided", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;

use crate::errors::TabnavError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid tracker '{tracker}'. Valid trackers: {valid_trackers}")]
    InvalidTracker {
        tracker: String,
        valid_trackers: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("IO error reading config: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn is_file_not_found(&self) -> bool {
        matches!(self, ConfigError::IoError { source } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

impl TabnavError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidTracker { .. } => "INVALID_TRACKER",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::ConfigParseError { .. }
                | ConfigError::InvalidTracker { .. }
                | ConfigError::InvalidConfiguration { .. }
        )
    }
}

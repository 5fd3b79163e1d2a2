use std::path::PathBuf;

use crate::errors::TabnavError;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse script: {message}")]
    ParseError { message: String },

    #[error("Unknown recipe '{name}'. Available recipes: {available}")]
    UnknownRecipe { name: String, available: String },
}

impl TabnavError for ScriptError {
    fn error_code(&self) -> &'static str {
        match self {
            ScriptError::IoError { .. } => "SCRIPT_IO_ERROR",
            ScriptError::ParseError { .. } => "SCRIPT_PARSE_ERROR",
            ScriptError::UnknownRecipe { .. } => "UNKNOWN_RECIPE",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

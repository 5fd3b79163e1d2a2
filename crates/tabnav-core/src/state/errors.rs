use crate::errors::TabnavError;

#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error("router is busy: '{operation}' was called while another router operation was running")]
    Reentrant { operation: &'static str },
}

impl TabnavError for HandleError {
    fn error_code(&self) -> &'static str {
        match self {
            HandleError::Reentrant { .. } => "ROUTER_REENTRANT",
        }
    }

    fn is_user_error(&self) -> bool {
        false
    }
}

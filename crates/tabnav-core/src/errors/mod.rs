use std::error::Error;

/// Base trait for all tabnav errors
pub trait TabnavError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as a warning rather than an error
    fn is_user_error(&self) -> bool {
        false
    }
}

impl TabnavError for tabnav_paths::PathError {
    fn error_code(&self) -> &'static str {
        match self {
            tabnav_paths::PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("test error")]
    struct TestError;

    impl TabnavError for TestError {
        fn error_code(&self) -> &'static str {
            "TEST_ERROR"
        }
    }

    #[test]
    fn test_default_is_not_user_error() {
        let error = TestError;
        assert_eq!(error.error_code(), "TEST_ERROR");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_path_error() {
        let error = tabnav_paths::PathError::HomeNotFound;
        assert_eq!(error.error_code(), "HOME_NOT_FOUND");
        assert!(error.is_user_error());
    }
}

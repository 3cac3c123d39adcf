use std::fmt;

#[derive(Debug)]
pub enum EnvCheckError {
    /// Represents required environment variables that are unset or empty
    MissingEnvVars(Vec<String>),
    /// Represents a `.env` file that exists but could not be loaded
    DotEnv(dotenv::Error),
    /// Represents I/O errors while writing notices or reports
    Io(std::io::Error),
    /// Represents JSON serialization errors
    Parse(serde_json::Error),
    /// Represents CSV serialization errors
    Csv(csv::Error),
}

impl std::error::Error for EnvCheckError {}

impl fmt::Display for EnvCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvCheckError::MissingEnvVars(vars) => {
                write!(f, "Missing environment variables: {}", vars.join(", "))
            }
            EnvCheckError::DotEnv(e) => write!(f, "Failed to load .env file: {e}"),
            EnvCheckError::Io(e) => write!(f, "I/O error: {e}"),
            EnvCheckError::Parse(e) => write!(f, "Parse error: {e}"),
            EnvCheckError::Csv(e) => write!(f, "CSV error: {e}"),
        }
    }
}

impl From<dotenv::Error> for EnvCheckError {
    fn from(err: dotenv::Error) -> Self {
        EnvCheckError::DotEnv(err)
    }
}

impl From<std::io::Error> for EnvCheckError {
    fn from(err: std::io::Error) -> Self {
        EnvCheckError::Io(err)
    }
}

impl From<serde_json::Error> for EnvCheckError {
    fn from(err: serde_json::Error) -> Self {
        EnvCheckError::Parse(err)
    }
}

impl From<csv::Error> for EnvCheckError {
    fn from(err: csv::Error) -> Self {
        EnvCheckError::Csv(err)
    }
}

/// Helper type for Result with `EnvCheckError`
pub type Result<T> = std::result::Result<T, EnvCheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vars_message_is_comma_joined() {
        let err = EnvCheckError::MissingEnvVars(vec![
            "RAZORPAY_KEY_ID".to_string(),
            "RAZORPAY_WEBHOOK_SECRET".to_string(),
        ]);

        assert_eq!(
            err.to_string(),
            "Missing environment variables: RAZORPAY_KEY_ID, RAZORPAY_WEBHOOK_SECRET"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: EnvCheckError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();

        assert!(matches!(err, EnvCheckError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: pipe closed");
    }
}

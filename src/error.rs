use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// A single input value failed validation.
    InvalidConfigurationValue {
        field: String,
        value: String,
        expected: String,
    },
    Configuration(String),
    Yaml(serde_yaml::Error),
}

impl AppError {
    pub fn invalid_value(field: &str, value: &str, expected: impl Into<String>) -> Self {
        AppError::InvalidConfigurationValue {
            field: field.to_string(),
            value: value.to_string(),
            expected: expected.into(),
        }
    }

    /// Name of the offending input, if this error is about one.
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::InvalidConfigurationValue { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidConfigurationValue {
                field,
                value,
                expected,
            } => write!(
                f,
                "Invalid value for input {}: '{}'. Expected {}.",
                field, value, expected
            ),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::Yaml(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Yaml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Yaml(err)
    }
}

pub type AppResult<T> = Result<T, AppError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Relay request failed: {0}")]
    RelayError(#[from] reqwest::Error),

    #[error("Relay responded with HTTP {status}")]
    RelayStatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingFieldError { field: String },

    #[error("Invalid value for field {field}: {reason}")]
    InvalidFieldError { field: String, reason: String },

    #[error("The {form} form is not on screen at route {route}")]
    FormNotMountedError { form: String, route: String },
}

impl SiteError {
    /// Validation errors are raised before any network call is attempted.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SiteError::MissingFieldError { .. } | SiteError::InvalidFieldError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::RelayError(_) | SiteError::RelayStatusError { .. } => {
                "There was an error. Try again later.".to_string()
            }
            SiteError::IoError(e) => format!("File system error: {}", e),
            SiteError::ConfigValidationError { field, .. } => {
                format!("Configuration file could not be read ({})", field)
            }
            SiteError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value {} is invalid: {}", field, reason)
            }
            SiteError::MissingFieldError { field } => {
                format!("Please fill out the {} field.", field)
            }
            SiteError::InvalidFieldError { field, reason } => {
                format!("Please correct the {} field: {}", field, reason)
            }
            SiteError::FormNotMountedError { form, .. } => {
                format!("Open the page with the {} form first.", form)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_flagged() {
        let missing = SiteError::MissingFieldError {
            field: "trackingNumber".to_string(),
        };
        assert!(missing.is_validation());
        assert_eq!(
            missing.user_friendly_message(),
            "Please fill out the trackingNumber field."
        );

        let status = SiteError::RelayStatusError { status: 500 };
        assert!(!status.is_validation());
        assert_eq!(status.to_string(), "Relay responded with HTTP 500");
    }
}

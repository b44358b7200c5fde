//! Error types for address book operations
//
// Validation failures come from the field constructors; everything else is
// raised by command handlers and turned into a reply by the command processor.

/// A field value that failed its format check
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid phone number format. It should be 10 digits.")]
    Phone,
    #[error("Invalid email format.")]
    Email,
    #[error("Invalid date format. Use DD.MM.YYYY")]
    Birthday,
}

/// Custom error type for address book commands
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressBookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Contact {0} not found.")]
    NotFound(String),
    #[error("Insufficient arguments. Usage: {0}")]
    InsufficientArguments(&'static str),
    #[error("{0}")]
    InvalidArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Phone.to_string(),
            "Invalid phone number format. It should be 10 digits."
        );
        assert_eq!(ValidationError::Email.to_string(), "Invalid email format.");
        assert_eq!(ValidationError::Birthday.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: AddressBookError = ValidationError::Email.into();
        assert_eq!(err.to_string(), "Invalid email format.");
    }

    #[test]
    fn test_not_found_message() {
        let err = AddressBookError::NotFound("Ghost".to_string());
        assert_eq!(err.to_string(), "Contact Ghost not found.");
    }
}

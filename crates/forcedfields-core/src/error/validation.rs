use super::Error;

/// Error when a value fails a field's validation constraints.
#[derive(Debug)]
pub(super) struct ValidationError {
    pub(super) kind: ValidationErrorKind,
}

#[derive(Debug)]
pub(super) enum ValidationErrorKind {
    /// String length exceeds the column length
    Length { value_len: usize, max: usize },

    /// `NULL` assigned to a non-nullable field
    Null,

    /// Value of the wrong type for the field
    Type { expected: &'static str },
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.kind {
            ValidationErrorKind::Length { value_len, max } => write!(
                f,
                "value length {} is too long (maximum: {})",
                value_len, max
            ),
            ValidationErrorKind::Null => f.write_str("value cannot be null"),
            ValidationErrorKind::Type { expected } => {
                write!(f, "value is not a valid {}", expected)
            }
        }
    }
}

impl Error {
    /// Creates a length validation error.
    pub fn validation_length(value_len: usize, max: usize) -> Error {
        Error::validation(ValidationErrorKind::Length { value_len, max })
    }

    /// Creates a validation error for `NULL` on a non-nullable field.
    pub fn validation_null() -> Error {
        Error::validation(ValidationErrorKind::Null)
    }

    /// Creates a validation error for a value of the wrong type.
    pub fn validation_type(expected: &'static str) -> Error {
        Error::validation(ValidationErrorKind::Type { expected })
    }

    fn validation(kind: ValidationErrorKind) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError { kind }))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// validation error.
    pub fn is_validation(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::Validation(_)))
    }
}

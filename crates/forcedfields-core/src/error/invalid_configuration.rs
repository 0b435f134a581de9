use super::Error;

/// Error when a field descriptor is declared with an invalid set of options.
///
/// This occurs when:
/// - Mutually exclusive automatic-value options are combined
/// - More than one option defines the column's DEFAULT clause
/// - A required option is missing (a fixed char field without a length)
/// - A configured default cannot be interpreted as the field's type
///
/// These errors surface at model declaration time and are not recoverable.
#[derive(Debug)]
pub(super) struct InvalidConfiguration {
    message: Box<str>,
}

impl std::error::Error for InvalidConfiguration {}

impl core::fmt::Display for InvalidConfiguration {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid configuration: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConfiguration(
            InvalidConfiguration {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error, or any error in its context chain, is an
    /// invalid configuration error.
    pub fn is_invalid_configuration(&self) -> bool {
        self.chain()
            .any(|err| matches!(err.kind(), super::ErrorKind::InvalidConfiguration(_)))
    }
}

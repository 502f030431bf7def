use thiserror::Error;

/// Errors raised while building entities or loading an inventory.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A required field was not supplied
    #[error("Missing value for {field}")]
    MissingValue {
        /// Name of the absent field
        field: &'static str,
    },

    /// A supplied value is out of range or not one of the accepted values
    #[error("Invalid {field}: {value}")]
    InvalidValue {
        /// Name of the rejected field
        field: &'static str,
        /// The rejected value as the caller supplied it
        value: String,
    },

    /// An inventory file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong, including the underlying I/O or TOML error
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

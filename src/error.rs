use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
/// Mapper error
pub enum MapperError {
    /// A cell could not be coerced to the declared type of its field.
    #[error("MalformedValue: cannot parse '{value}' as {expected}")]
    MalformedValue { value: String, expected: String },

    /// The target entity type cannot be default-constructed.
    #[error("UninstantiableType: {0}")]
    UninstantiableType(String),

    /// A writer was invoked with values that do not match its parameter list.
    #[error("WriterMismatch on {accessor}: {reason}")]
    WriterMismatch { accessor: String, reason: String },

    /// The configured separator pattern does not compile.
    #[error("InvalidSeparator: {0}")]
    InvalidSeparator(String),

    /// Reading or writing the underlying text failed.
    #[error("Io from: {0}")]
    Io(String),
}

impl MapperError {
    /// Errors that stop a whole deserialize call instead of a single entity.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MapperError::UninstantiableType(_)
                | MapperError::InvalidSeparator(_)
                | MapperError::Io(_)
        )
    }
}

impl From<std::io::Error> for MapperError {
    fn from(error: std::io::Error) -> Self {
        MapperError::Io(error.to_string())
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SortError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("could not allocate a merge buffer of {requested} elements")]
    AllocationFailure { requested: usize },

    #[error("indeterminate ratio: fastest run ({algorithm}) measured zero seconds")]
    DivideByZero { algorithm: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("output error: {0}")]
    Io(String),
}

impl SortError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SortError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SortError {
    fn from(err: std::io::Error) -> Self {
        SortError::Io(err.to_string())
    }
}

pub type SortResult<T> = Result<T, SortError>;

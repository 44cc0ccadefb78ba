use crate::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Server(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

impl Error {
    /// Field errors carried by a rejected submission, `None` for any other failure.
    pub fn field_errors(&self) -> Option<FieldErrors> {
        match self {
            Error::Validate(errors) => Some(FieldErrors::from(errors)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

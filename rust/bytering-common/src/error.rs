use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn allocation(capacity: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::Allocation { capacity, source }.into())
    }

    pub fn empty() -> Error {
        Error(ErrorKind::Empty.into())
    }

    pub fn insufficient(requested: usize, available: usize) -> Error {
        Error(
            ErrorKind::Insufficient {
                requested,
                available,
            }
            .into(),
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("failed to allocate {capacity} bytes of backing storage: {source}")]
    Allocation {
        capacity: usize,
        source: TryReserveError,
    },

    #[error("buffer holds no unread data")]
    Empty,

    #[error("requested {requested} bytes, but only {available} are available")]
    Insufficient { requested: usize, available: usize },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

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

    pub fn out_of_range(index: usize, len: usize) -> Error {
        ErrorKind::OutOfRange { index, len }.into()
    }

    pub fn allocation_failed(requested: usize, source: TryReserveError) -> Error {
        ErrorKind::AllocationFailed { requested, source }.into()
    }

    pub fn capacity_overflow(requested: impl Into<String>) -> Error {
        ErrorKind::CapacityOverflow {
            requested: requested.into(),
        }
        .into()
    }

    /// Returns `true` if this is an out-of-range access error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    /// Returns `true` if the error was caused by a failed or impossible allocation.
    pub fn is_allocation_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::AllocationFailed { .. } | ErrorKind::CapacityOverflow { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("failed to allocate a buffer of {requested} elements")]
    AllocationFailed {
        requested: usize,
        source: TryReserveError,
    },

    #[error("capacity overflow: {requested}")]
    CapacityOverflow { requested: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

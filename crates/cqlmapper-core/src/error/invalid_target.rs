use super::{Error, ErrorKind};

/// Error when the introspection target is not a mutable reference to a record.
#[derive(Debug)]
pub(super) struct InvalidTargetError {
    found: Box<str>,
}

impl std::error::Error for InvalidTargetError {}

impl core::fmt::Display for InvalidTargetError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "expected a mutable reference to a record, found `{}`",
            self.found
        )
    }
}

impl Error {
    /// Creates an invalid target error.
    ///
    /// `found` describes what was passed instead, e.g. `MyTable` for a record
    /// moved by value or `&MyTable` for a shared reference.
    pub fn invalid_target(found: impl Into<Box<str>>) -> Error {
        Error::from(ErrorKind::InvalidTarget(InvalidTargetError {
            found: found.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid target error.
    pub fn is_invalid_target(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::InvalidTarget(_)))
    }
}

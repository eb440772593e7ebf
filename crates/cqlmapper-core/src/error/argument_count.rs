use super::{Error, ErrorKind};

/// Error when the arguments given for a query do not match its placeholders.
#[derive(Debug)]
pub(super) struct ArgumentCountError {
    expected: usize,
    found: usize,
}

impl std::error::Error for ArgumentCountError {}

impl core::fmt::Display for ArgumentCountError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "query expects {} arguments, {} given",
            self.expected, self.found
        )
    }
}

impl Error {
    /// Creates an argument count error.
    pub fn argument_count(expected: usize, found: usize) -> Error {
        Error::from(ErrorKind::ArgumentCount(ArgumentCountError { expected, found }))
    }

    /// Returns `true` if this error, or any error it wraps, is an argument count error.
    pub fn is_argument_count(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::ArgumentCount(_)))
    }
}

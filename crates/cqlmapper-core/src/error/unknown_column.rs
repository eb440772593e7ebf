use super::{Error, ErrorKind};

/// Error when a key or filter column does not belong to the mapped table.
#[derive(Debug)]
pub(super) struct UnknownColumnError {
    column: Box<str>,
    table: Box<str>,
}

impl std::error::Error for UnknownColumnError {}

impl core::fmt::Display for UnknownColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "table `{}` has no column `{}`", self.table, self.column)
    }
}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(column: impl Into<Box<str>>, table: impl Into<Box<str>>) -> Error {
        Error::from(ErrorKind::UnknownColumn(UnknownColumnError {
            column: column.into(),
            table: table.into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        self.any_kind(|kind| matches!(kind, ErrorKind::UnknownColumn(_)))
    }
}

use super::Record;
use crate::{Error, Result};

/// Something that can be introspected.
///
/// Only a mutable reference to a record yields a record: the mapping hands out
/// addressable slots into the record's fields. Records passed by value, shared
/// references and `None` are rejected with an invalid target error.
pub trait Target<'a> {
    fn into_record(self) -> Result<&'a mut dyn Record>;
}

impl<'a, R: Record + 'a> Target<'a> for &'a mut R {
    fn into_record(self) -> Result<&'a mut dyn Record> {
        Ok(self)
    }
}

impl<'a, R: Record + 'a> Target<'a> for &'a R {
    fn into_record(self) -> Result<&'a mut dyn Record> {
        Err(Error::invalid_target(format!("&{}", R::schema().name)))
    }
}

impl<'a, R: Record + 'a> Target<'a> for Option<&'a mut R> {
    fn into_record(self) -> Result<&'a mut dyn Record> {
        match self {
            Some(record) => Ok(record),
            None => Err(Error::invalid_target(format!(
                "Option<&mut {}>::None",
                R::schema().name
            ))),
        }
    }
}

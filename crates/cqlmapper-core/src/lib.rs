mod error;
pub use error::{Error, IntoError};

pub mod mapper;
pub use mapper::{Mapper, NameConverter, Quoting};

pub mod mapping;
pub use mapping::{FieldDescriptor, RecordMapping};

pub mod schema;
pub use schema::{Record, RecordSchema, Target};

pub mod stmt;
pub use stmt::{Primitive, Slot, Value};

/// A Result type alias that uses cqlmapper's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

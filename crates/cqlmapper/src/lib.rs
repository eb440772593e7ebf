// Generated code refers to `cqlmapper::...`, including inside this crate's tests.
extern crate self as cqlmapper;

mod instance;
pub use instance::InstanceMapper;

pub mod session;
pub use session::Session;

pub use cqlmapper_core::{
    bail, err,
    mapper::{self, NameConverter, Quoting},
    schema, FieldDescriptor, Mapper, Primitive, Record, RecordMapping, RecordSchema, Slot, Target,
    Value,
};
pub use cqlmapper_core::{Error, Result};
pub use cqlmapper_sql::Query;

pub use cqlmapper_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use cqlmapper_core::{
        schema::{FieldDef, FieldMut, FieldRef, Tag},
        Error, Primitive, Record, RecordSchema, Result, Target, Value,
    };
    pub use std::{any::TypeId, sync::OnceLock};
}

use crate::{FieldDescriptor, Mapper, Query, Result, Slot, Target, Value};

use cqlmapper_core::RecordMapping;
use cqlmapper_sql::{
    stmt::{Count, Delete, Insert, Select, Update},
    Serializer, Statement,
};

/// Maps one record instance to its table.
///
/// Wraps the mapping produced by [`Mapper::introspect`] and builds the query
/// text and parameter lists for that record.
#[derive(Debug)]
pub struct InstanceMapper<'a> {
    mapping: RecordMapping<'a>,
    serializer: Serializer,
}

impl<'a> InstanceMapper<'a> {
    pub fn new(mapper: &Mapper, target: impl Target<'a>) -> Result<InstanceMapper<'a>> {
        Ok(InstanceMapper {
            mapping: mapper.introspect(target)?,
            serializer: Serializer::new(),
        })
    }

    pub fn table_name(&self) -> &str {
        self.mapping.table_name()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.mapping.column_names()
    }

    pub fn columns(&self) -> &[FieldDescriptor] {
        self.mapping.columns()
    }

    pub fn mapping(&self) -> &RecordMapping<'a> {
        &self.mapping
    }

    pub fn field_values(&self) -> Vec<Value> {
        self.mapping.field_values()
    }

    pub fn field_addresses(&mut self) -> Vec<&mut dyn Slot> {
        self.mapping.field_addresses()
    }

    pub fn update_arguments(&self, arguments: Vec<Value>, keys: &[&str]) -> Vec<Value> {
        self.mapping.update_arguments(arguments, keys)
    }

    pub fn select_query(&self, filter: &[&str]) -> Query {
        self.serialize(Select::new(&self.mapping, filter))
    }

    pub fn insert_query(&self) -> Query {
        self.serialize(Insert::new(&self.mapping))
    }

    pub fn update_query(&self, keys: &[&str]) -> Query {
        self.serialize(Update::new(&self.mapping, keys))
    }

    pub fn delete_query(&self, keys: &[&str]) -> Query {
        self.serialize(Delete::new(&self.mapping, keys))
    }

    pub fn count_query(&self, filter: &[&str]) -> Query {
        self.serialize(Count::new(&self.mapping, filter))
    }

    fn serialize(&self, stmt: impl Into<Statement>) -> Query {
        self.serializer.serialize(&stmt.into())
    }
}

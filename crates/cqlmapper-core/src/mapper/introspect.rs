use super::Mapper;
use crate::{
    mapping::{FieldDescriptor, RecordMapping},
    schema::{RecordSchema, Target},
    Result,
};

use std::sync::Arc;

impl Mapper {
    /// Resolves the table and columns of a record instance.
    ///
    /// Fails with an invalid target error unless `target` is a mutable
    /// reference to a record.
    pub fn introspect<'a>(&self, target: impl Target<'a>) -> Result<RecordMapping<'a>> {
        let record = target.into_record()?;
        let schema = record.record_schema();
        let columns = self.columns(schema);

        let table = match record.table_name() {
            Some(table) => table,
            None => (self.table_name_converter)(schema.name),
        };
        let table = self.quoting.apply(&table);

        tracing::debug!(
            record = schema.name,
            table = %table,
            columns = columns.len(),
            "introspected record"
        );

        Ok(RecordMapping::new(table, columns, self.quoting, record))
    }

    /// Returns the resolved columns of a record type, in column order.
    pub fn columns(&self, schema: &'static RecordSchema) -> Arc<[FieldDescriptor]> {
        self.cache
            .get_or_insert_with(schema.id, || self.resolve_columns(schema))
    }

    fn resolve_columns(&self, schema: &'static RecordSchema) -> Arc<[FieldDescriptor]> {
        let mut columns = vec![];
        self.flatten(schema, false, &mut columns);

        tracing::debug!(
            record = schema.name,
            columns = columns.len(),
            "resolved record columns"
        );

        columns.into()
    }

    /// Depth-first walk over the declared fields, splicing embedded records in
    /// place.
    fn flatten(
        &self,
        schema: &'static RecordSchema,
        embedded: bool,
        columns: &mut Vec<FieldDescriptor>,
    ) {
        for field in &schema.fields {
            if let Some(embedded_schema) = field.embedded {
                self.flatten(embedded_schema(), true, columns);
                continue;
            }

            let tagged = self
                .column_tag
                .as_deref()
                .and_then(|key| field.tag(key))
                .filter(|name| !name.is_empty());

            let name = match tagged {
                Some(name) => name.to_string(),
                None => (self.column_name_converter)(field.name),
            };

            columns.push(FieldDescriptor {
                field: field.name,
                name: self.quoting.apply(&name),
                ordinal: columns.len(),
                embedded,
            });
        }
    }
}

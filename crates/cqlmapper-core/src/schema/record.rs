use super::FieldDef;
use crate::stmt::Slot;

use std::any::TypeId;

/// Static shape of a record type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Identifies the record type. Resolved columns are cached by this id.
    pub id: TypeId,

    /// Type name, the input of the table name converter
    pub name: &'static str,

    /// Declared fields, in declaration order
    pub fields: Vec<FieldDef>,
}

/// Borrowed access to one declared field.
pub enum FieldRef<'a> {
    Column(&'a dyn Slot),
    Embedded(&'a dyn Record),
}

/// Mutable access to one declared field.
pub enum FieldMut<'a> {
    Column(&'a mut dyn Slot),
    Embedded(&'a mut dyn Record),
}

/// A struct whose fields map to the columns of a table.
///
/// Usually implemented with `#[derive(Record)]`. The accessors must yield one
/// entry per declared field, in the same order as [`RecordSchema::fields`],
/// with [`FieldRef::Embedded`] exactly for the fields marked as embedded.
pub trait Record {
    fn schema() -> &'static RecordSchema
    where
        Self: Sized;

    /// Object safe access to [`Record::schema`].
    fn record_schema(&self) -> &'static RecordSchema;

    /// Overrides the table name. The returned name is used verbatim instead of
    /// converting the type name.
    fn table_name(&self) -> Option<String> {
        None
    }

    fn fields(&self) -> Vec<FieldRef<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

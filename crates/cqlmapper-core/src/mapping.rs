use crate::{
    mapper::Quoting,
    schema::{FieldMut, FieldRef, Record},
    stmt::{Slot, Value},
    Error, Result,
};

use std::sync::Arc;

/// A column resolved from a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Declared field name
    pub field: &'static str,

    /// Resolved column identifier, quoted when the mapper quotes identifiers
    pub name: String,

    /// Position in the flattened column list
    pub ordinal: usize,

    /// True when the field belongs to an embedded record
    pub embedded: bool,
}

/// The result of introspecting one record instance.
///
/// Holds the resolved table and columns along with a live reference into the
/// record, so values and slots always reflect the record's current state.
pub struct RecordMapping<'a> {
    table: String,
    columns: Arc<[FieldDescriptor]>,
    quoting: Quoting,
    record: &'a mut dyn Record,
}

impl<'a> RecordMapping<'a> {
    pub(crate) fn new(
        table: String,
        columns: Arc<[FieldDescriptor]>,
        quoting: Quoting,
        record: &'a mut dyn Record,
    ) -> Self {
        Self {
            table,
            columns,
            quoting,
            record,
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[FieldDescriptor] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| &column.name[..]).collect()
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    /// Writes a column name given by the caller the way resolved identifiers
    /// are written.
    pub fn quote(&self, column: &str) -> String {
        self.quoting.apply(column)
    }

    /// Returns `true` if the resolved `column` is one of `keys`.
    ///
    /// `keys` are unquoted column names. Both the UPDATE statement and
    /// [`RecordMapping::update_arguments`] select their columns with this test.
    pub fn is_key_column(&self, column: &str, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.quoting.apply(key) == column)
    }

    /// Current field values, in column order. `None` maps to [`Value::Null`].
    pub fn field_values(&self) -> Vec<Value> {
        let mut values = Vec::with_capacity(self.columns.len());
        collect_values(&*self.record, &mut values);
        debug_assert_eq!(values.len(), self.columns.len());
        values
    }

    /// Addressable field slots, in column order.
    pub fn field_addresses(&mut self) -> Vec<&mut dyn Slot> {
        let mut slots = Vec::with_capacity(self.columns.len());
        collect_slots(&mut *self.record, &mut slots);
        debug_assert_eq!(slots.len(), self.columns.len());
        slots
    }

    /// Keeps the arguments of the columns that are not in `keys`.
    ///
    /// `arguments` is in column order, e.g. the output of
    /// [`RecordMapping::field_values`]. The result lines up with the SET
    /// clause of the UPDATE statement for the same keys.
    pub fn update_arguments(&self, arguments: Vec<Value>, keys: &[&str]) -> Vec<Value> {
        self.columns
            .iter()
            .zip(arguments)
            .filter(|(column, _)| !self.is_key_column(&column.name, keys))
            .map(|(_, argument)| argument)
            .collect()
    }

    /// Values of the given columns, in the order given.
    ///
    /// Fails with an unknown column error when a key does not name a column
    /// of the mapping.
    pub fn key_values(&self, keys: &[&str]) -> Result<Vec<Value>> {
        let values = self.field_values();
        keys.iter()
            .map(|key| {
                let quoted = self.quoting.apply(key);
                self.columns
                    .iter()
                    .position(|column| column.name == quoted)
                    .map(|index| values[index].clone())
                    .ok_or_else(|| Error::unknown_column(*key, self.table.as_str()))
            })
            .collect()
    }
}

fn collect_values(record: &dyn Record, values: &mut Vec<Value>) {
    for field in record.fields() {
        match field {
            FieldRef::Column(slot) => values.push(slot.value()),
            FieldRef::Embedded(embedded) => collect_values(embedded, values),
        }
    }
}

fn collect_slots<'b>(record: &'b mut dyn Record, slots: &mut Vec<&'b mut dyn Slot>) {
    for field in record.fields_mut() {
        match field {
            FieldMut::Column(slot) => slots.push(slot),
            FieldMut::Embedded(embedded) => collect_slots(embedded, slots),
        }
    }
}

impl core::fmt::Debug for RecordMapping<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecordMapping")
            .field("table", &self.table)
            .field("columns", &self.columns)
            .field("quoting", &self.quoting)
            .finish_non_exhaustive()
    }
}

use super::Ident;

use cqlmapper_core::RecordMapping;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub table: Ident,

    /// Every mapped column, in column order. One placeholder is written per column.
    pub columns: Vec<Ident>,
}

impl Insert {
    pub fn new(mapping: &RecordMapping<'_>) -> Insert {
        Insert {
            table: Ident::from(mapping.table_name()),
            columns: mapping
                .columns()
                .iter()
                .map(|column| Ident(column.name.clone()))
                .collect(),
        }
    }
}

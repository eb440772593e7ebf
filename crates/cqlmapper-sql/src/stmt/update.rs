use super::{Filter, Ident};

use cqlmapper_core::RecordMapping;

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub table: Ident,

    /// Columns assigned in the SET clause: every mapped column that is not a
    /// key, in column order
    pub assignments: Vec<Ident>,

    /// Key predicates, in the order the keys were given
    pub filter: Filter,
}

impl Update {
    pub fn new(mapping: &RecordMapping<'_>, keys: &[&str]) -> Update {
        let assignments: Vec<_> = mapping
            .columns()
            .iter()
            .filter(|column| !mapping.is_key_column(&column.name, keys))
            .map(|column| Ident(column.name.clone()))
            .collect();

        if assignments.is_empty() {
            tracing::warn!(
                table = mapping.table_name(),
                "UPDATE statement has no columns to set"
            );
        }

        Update {
            table: Ident::from(mapping.table_name()),
            assignments,
            filter: Filter::new(mapping, keys),
        }
    }
}

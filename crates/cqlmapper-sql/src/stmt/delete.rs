use super::{Filter, Ident};

use cqlmapper_core::RecordMapping;

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub table: Ident,
    pub filter: Filter,
}

impl Delete {
    pub fn new(mapping: &RecordMapping<'_>, keys: &[&str]) -> Delete {
        if keys.is_empty() {
            tracing::warn!(
                table = mapping.table_name(),
                "DELETE statement without key columns matches every row"
            );
        }

        Delete {
            table: Ident::from(mapping.table_name()),
            filter: Filter::new(mapping, keys),
        }
    }
}

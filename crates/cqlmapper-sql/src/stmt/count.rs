use super::{Filter, Ident};

use cqlmapper_core::RecordMapping;

/// `SELECT count(1)` over the mapped table.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    pub table: Ident,
    pub filter: Filter,
}

impl Count {
    pub fn new(mapping: &RecordMapping<'_>, filter: &[&str]) -> Count {
        Count {
            table: Ident::from(mapping.table_name()),
            filter: Filter::new(mapping, filter),
        }
    }
}

use super::{Filter, Ident};

use cqlmapper_core::RecordMapping;

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub table: Ident,

    /// Every mapped column, in column order
    pub columns: Vec<Ident>,

    pub filter: Filter,
}

impl Select {
    pub fn new(mapping: &RecordMapping<'_>, filter: &[&str]) -> Select {
        Select {
            table: Ident::from(mapping.table_name()),
            columns: mapping
                .columns()
                .iter()
                .map(|column| Ident(column.name.clone()))
                .collect(),
            filter: Filter::new(mapping, filter),
        }
    }
}

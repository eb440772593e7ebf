use super::Ident;

use cqlmapper_core::RecordMapping;

/// Equality predicates joined with `AND`, one positional parameter each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub columns: Vec<Ident>,
}

impl Filter {
    /// Builds a filter over unquoted column names, written the way the
    /// mapping writes its identifiers. Order is preserved.
    pub fn new(mapping: &RecordMapping<'_>, columns: &[&str]) -> Filter {
        Filter {
            columns: columns
                .iter()
                .map(|column| Ident(mapping.quote(column)))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{And, Comma};

mod ident;

mod params;
use params::{Assignment, Placeholder};

mod query;
pub use query::Query;

mod statement;

use crate::stmt::Statement;

/// Serialize a statement to CQL / SQL text with positional `?` parameters.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized query
    dst: &'a mut String,

    /// Number of placeholders written so far
    params: usize,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    pub fn serialize(&self, stmt: &Statement) -> Query {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params: 0,
        };

        stmt.to_sql(&mut fmt);

        let params = fmt.params;
        Query::new(ret, params)
    }
}

use super::{Formatter, ToSql};

use crate::stmt::Ident;

/// A positional parameter marker.
pub(super) struct Placeholder;

/// `<column> = ?`, used by SET lists and WHERE predicates.
pub(super) struct Assignment<'a>(pub(super) &'a Ident);

impl ToSql for Placeholder {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.params += 1;
        f.dst.push('?');
    }
}

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, self.0 " = " Placeholder);
    }
}

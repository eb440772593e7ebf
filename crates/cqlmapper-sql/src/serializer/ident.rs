use super::{Formatter, ToSql};

use crate::stmt::Ident;

impl ToSql for &Ident {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(&self.0);
    }
}

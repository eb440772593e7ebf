use super::{Formatter, ToSql};

/// `, ` delimited
pub(super) struct Comma<L>(pub(super) L);

/// ` AND ` delimited
pub(super) struct And<L>(pub(super) L);

impl<L> ToSql for Comma<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        delimited(self.0, ", ", f);
    }
}

impl<L> ToSql for And<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        delimited(self.0, " AND ", f);
    }
}

fn delimited<L>(items: L, delimiter: &str, f: &mut Formatter<'_>)
where
    L: IntoIterator,
    L::Item: ToSql,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            fmt!(f, delimiter);
        }
        fmt!(f, item);
    }
}

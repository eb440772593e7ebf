use super::{And, Assignment, Comma, Formatter, Placeholder, ToSql};

use crate::stmt::{self, Statement};

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
            Statement::Count(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "SELECT " columns " FROM " table filter);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        let placeholders = Comma(self.columns.iter().map(|_| Placeholder));
        let table = &self.table;
        fmt!(f, "INSERT INTO " table " (" columns ") VALUES(" placeholders ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let assignments = Comma(self.assignments.iter().map(Assignment));
        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "UPDATE " table " SET " assignments filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "DELETE FROM " table filter);
    }
}

impl ToSql for &stmt::Count {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let table = &self.table;
        let filter = &self.filter;
        fmt!(f, "SELECT count(1) FROM " table filter);
    }
}

impl ToSql for &stmt::Filter {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if self.is_empty() {
            return;
        }

        let predicates = And(self.columns.iter().map(Assignment));
        fmt!(f, " WHERE " predicates);
    }
}

//! Running mapped queries against a database session.

use crate::{err, Error, InstanceMapper, Query, Result, Slot, Value};

/// A connection able to run parameterized queries.
///
/// Drivers implement this trait. Parameters are bound to the `?` placeholders
/// of the query text in order.
pub trait Session {
    /// Runs a statement that returns no rows.
    fn execute(&mut self, query: &Query, params: Vec<Value>) -> Result<()>;

    /// Runs a query and writes the columns of the first row into `slots`.
    ///
    /// Returns `false`, leaving the slots untouched, when the query matched no
    /// row.
    fn scan(&mut self, query: &Query, params: Vec<Value>, slots: Vec<&mut dyn Slot>)
        -> Result<bool>;
}

impl<S: Session + ?Sized> Session for &mut S {
    fn execute(&mut self, query: &Query, params: Vec<Value>) -> Result<()> {
        (**self).execute(query, params)
    }

    fn scan(
        &mut self,
        query: &Query,
        params: Vec<Value>,
        slots: Vec<&mut dyn Slot>,
    ) -> Result<bool> {
        (**self).scan(query, params, slots)
    }
}

impl InstanceMapper<'_> {
    /// Inserts the record, binding every column value.
    pub fn insert(&self, session: &mut impl Session) -> Result<()> {
        let query = self.insert_query();
        let params = self.field_values();

        tracing::debug!(query = %query, params = params.len(), "insert");
        session
            .execute(&query, params)
            .map_err(|e| e.context(err!("failed to insert into {}", self.table_name())))
    }

    /// Updates the non-key columns of the row identified by `keys`.
    ///
    /// Every key must name a column of the record.
    pub fn update(&self, session: &mut impl Session, keys: &[&str]) -> Result<()> {
        let query = self.update_query(keys);
        let key_values = self.mapping().key_values(keys)?;
        let mut params = self.update_arguments(self.field_values(), keys);
        params.extend(key_values);
        check_arguments(&query, &params)?;

        tracing::debug!(query = %query, params = params.len(), "update");
        session
            .execute(&query, params)
            .map_err(|e| e.context(err!("failed to update {}", self.table_name())))
    }

    /// Deletes the row identified by `keys`.
    ///
    /// Every key must name a column of the record.
    pub fn delete(&self, session: &mut impl Session, keys: &[&str]) -> Result<()> {
        let query = self.delete_query(keys);
        let params = self.mapping().key_values(keys)?;

        tracing::debug!(query = %query, params = params.len(), "delete");
        session
            .execute(&query, params)
            .map_err(|e| e.context(err!("failed to delete from {}", self.table_name())))
    }

    /// Loads the first row matching `filter` into the record.
    ///
    /// `args` are bound to the filter columns in order, one per column.
    /// Returns `false` when no row matched.
    pub fn select(
        &mut self,
        session: &mut impl Session,
        filter: &[&str],
        args: Vec<Value>,
    ) -> Result<bool> {
        let query = self.select_query(filter);
        let table = self.table_name().to_string();
        check_arguments(&query, &args)?;

        tracing::debug!(query = %query, params = args.len(), "select");
        session
            .scan(&query, args, self.field_addresses())
            .map_err(|e| e.context(err!("failed to select from {table}")))
    }

    /// Counts the rows matching `filter`.
    pub fn count(
        &self,
        session: &mut impl Session,
        filter: &[&str],
        args: Vec<Value>,
    ) -> Result<i64> {
        let query = self.count_query(filter);
        let mut count = 0i64;
        check_arguments(&query, &args)?;

        tracing::debug!(query = %query, params = args.len(), "count");
        session
            .scan(&query, args, vec![&mut count as &mut dyn Slot])
            .map_err(|e| e.context(err!("failed to count {}", self.table_name())))?;

        Ok(count)
    }
}

fn check_arguments(query: &Query, params: &[Value]) -> Result<()> {
    if query.params() != params.len() {
        return Err(Error::argument_count(query.params(), params.len()));
    }
    Ok(())
}

use cqlmapper::{Query, Result, Session, Slot, Value};

use std::collections::VecDeque;

/// An in-memory session that records every operation it receives.
///
/// Rows queued with [`RecordingSession::push_row`] are returned by `scan` in
/// order; `scan` reports no match once the queue is empty.
#[derive(Debug, Default)]
pub struct RecordingSession {
    /// Log of all operations run through this session
    pub ops: Vec<SessionOp>,

    rows: VecDeque<Vec<Value>>,

    /// When set, every operation fails with this message
    fail_with: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOp {
    Execute { query: String, params: Vec<Value> },
    Scan { query: String, params: Vec<Value> },
}

impl RecordingSession {
    pub fn new() -> RecordingSession {
        RecordingSession::default()
    }

    pub fn push_row(&mut self, row: impl IntoIterator<Item = Value>) {
        self.rows.push_back(row.into_iter().collect());
    }

    pub fn fail_with(&mut self, message: &str) {
        self.fail_with = Some(message.to_string());
    }

    fn check_failure(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!("{message}").into()),
            None => Ok(()),
        }
    }
}

impl Session for RecordingSession {
    fn execute(&mut self, query: &Query, params: Vec<Value>) -> Result<()> {
        assert_eq!(query.params(), params.len(), "{query}");

        self.ops.push(SessionOp::Execute {
            query: query.to_string(),
            params,
        });
        self.check_failure()
    }

    fn scan(
        &mut self,
        query: &Query,
        params: Vec<Value>,
        slots: Vec<&mut dyn Slot>,
    ) -> Result<bool> {
        assert_eq!(query.params(), params.len(), "{query}");

        self.ops.push(SessionOp::Scan {
            query: query.to_string(),
            params,
        });
        self.check_failure()?;

        let Some(row) = self.rows.pop_front() else {
            return Ok(false);
        };

        assert_eq!(row.len(), slots.len(), "{query}");
        for (slot, value) in slots.into_iter().zip(row) {
            slot.assign(value)?;
        }

        Ok(true)
    }
}

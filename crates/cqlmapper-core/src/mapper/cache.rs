use crate::mapping::FieldDescriptor;

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

/// Resolved columns per record type.
#[derive(Default)]
pub(super) struct ColumnCache {
    entries: RwLock<HashMap<TypeId, Arc<[FieldDescriptor]>>>,
}

impl ColumnCache {
    pub(super) fn get_or_insert_with(
        &self,
        id: TypeId,
        resolve: impl FnOnce() -> Arc<[FieldDescriptor]>,
    ) -> Arc<[FieldDescriptor]> {
        // The cached data is a pure function of the key, a poisoned lock
        // cannot hold a partial entry.
        if let Some(columns) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
        {
            tracing::trace!(columns = columns.len(), "column cache hit");
            return columns.clone();
        }

        let columns = resolve();

        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(id)
            .or_insert(columns)
            .clone()
    }
}

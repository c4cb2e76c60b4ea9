use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::error::RelayError;
use crate::types::files::{FileRecord, FileUpdate, NewFile};

#[derive(Default)]
struct FileTable {
    next_id: u64,
    records: BTreeMap<u64, FileRecord>,
}

/// Process-local file records backing the desktop's file browser. Lost on restart.
#[derive(Clone, Default)]
pub struct FileStore {
    inner: Arc<RwLock<FileTable>>,
}

impl FileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create(&self, file: NewFile) -> FileRecord {
        let mut table = self.inner.write().await;
        table.next_id += 1;
        let id = table.next_id;
        let record = FileRecord {
            id: id.to_string(),
            name: file.name,
            content: file.content,
            is_folder: file.is_folder,
            parent_id: file.parent_id,
            kind: None,
            metadata: None,
        };
        table.records.insert(id, record.clone());
        debug!(id, name = %record.name, "file created");
        record
    }

    /// Records whose parent equals `parent_id`; `None` lists top-level records.
    pub async fn list(&self, parent_id: Option<&str>) -> Vec<FileRecord> {
        self.inner
            .read()
            .await
            .records
            .values()
            .filter(|r| r.parent_id.as_deref() == parent_id)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Result<FileRecord, RelayError> {
        let key = parse_id(id)?;
        self.inner
            .read()
            .await
            .records
            .get(&key)
            .cloned()
            .ok_or_else(|| RelayError::FileNotFound(id.to_string()))
    }

    pub async fn update(&self, id: &str, patch: FileUpdate) -> Result<FileRecord, RelayError> {
        let key = parse_id(id)?;
        let mut table = self.inner.write().await;
        let record = table
            .records
            .get_mut(&key)
            .ok_or_else(|| RelayError::FileNotFound(id.to_string()))?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(content) = patch.content {
            record.content = Some(content);
        }
        if let Some(parent_id) = patch.parent_id {
            record.parent_id = Some(parent_id);
        }
        if let Some(kind) = patch.kind {
            record.kind = Some(kind);
        }
        if let Some(metadata) = patch.metadata {
            record.metadata = Some(metadata);
        }
        Ok(record.clone())
    }
}

fn parse_id(id: &str) -> Result<u64, RelayError> {
    id.parse()
        .map_err(|_| RelayError::FileNotFound(id.to_string()))
}

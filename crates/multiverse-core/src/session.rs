//! Session flag persistence.
//!
//! The whole session is a single marker under the `auth` key: present means
//! authenticated, absent means not. There is no token, expiry or identity.
//!
//! Components never touch storage directly; they receive a [`SessionStore`]
//! so tests can swap in [`MemorySessionStore`].

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::error::{ExplorerError, ExplorerResult};

/// Key under which the session marker lives.
pub const SESSION_KEY: &str = "auth";

/// Marker written on successful login.
pub const SESSION_MARKER: &str = "ok";

const SESSION_TABLE: TableDefinition<&str, &str> = TableDefinition::new("session");

/// Read/write/clear access to the persisted session flag.
pub trait SessionStore: Send + Sync {
    /// Current marker, if any.
    fn read(&self) -> ExplorerResult<Option<String>>;

    /// Store the authenticated marker.
    fn write(&self, marker: &str) -> ExplorerResult<()>;

    /// Remove the marker. Clearing an absent flag is not an error.
    fn clear(&self) -> ExplorerResult<()>;

    /// Whether the flag is present. Read failures count as "not authenticated".
    fn is_authenticated(&self) -> bool {
        match self.read() {
            Ok(marker) => marker.is_some(),
            Err(e) => {
                tracing::warn!(error = %e, "Session flag unreadable, treating as signed out");
                false
            }
        }
    }
}

/// Process-local store, used by tests and as a scratch store.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    slots: Arc<RwLock<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> ExplorerResult<Option<String>> {
        Ok(self.slots.read().get(SESSION_KEY).cloned())
    }

    fn write(&self, marker: &str) -> ExplorerResult<()> {
        self.slots
            .write()
            .insert(SESSION_KEY.to_string(), marker.to_string());
        Ok(())
    }

    fn clear(&self) -> ExplorerResult<()> {
        self.slots.write().remove(SESSION_KEY);
        Ok(())
    }
}

/// Session flag persisted in a redb file so it survives restarts.
#[derive(Clone)]
pub struct RedbSessionStore {
    db: Arc<RwLock<Database>>,
}

impl RedbSessionStore {
    /// Open (or create) the session database at `path`.
    pub fn open(path: impl AsRef<Path>) -> ExplorerResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl SessionStore for RedbSessionStore {
    fn read(&self) -> ExplorerResult<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;
        let marker = table.get(SESSION_KEY)?.map(|v| v.value().to_string());
        Ok(marker)
    }

    fn write(&self, marker: &str) -> ExplorerResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.insert(SESSION_KEY, marker)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn clear(&self) -> ExplorerResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            table.remove(SESSION_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Stand-in used when no persisted store could be opened.
///
/// Reads always come back empty and writes fail, so every gated route
/// bounces to the login page.
#[derive(Clone, Debug)]
pub struct DisabledSessionStore {
    reason: String,
}

impl DisabledSessionStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SessionStore for DisabledSessionStore {
    fn read(&self) -> ExplorerResult<Option<String>> {
        Ok(None)
    }

    fn write(&self, _marker: &str) -> ExplorerResult<()> {
        Err(ExplorerError::Unavailable(self.reason.clone()))
    }

    fn clear(&self) -> ExplorerResult<()> {
        Ok(())
    }
}

/// Open the persisted store at `path`, falling back to [`DisabledSessionStore`].
pub fn open_session_store(path: impl AsRef<Path>) -> Arc<dyn SessionStore> {
    let path = path.as_ref();
    match RedbSessionStore::open(path) {
        Ok(store) => {
            tracing::info!(path = %path.display(), "Session store opened");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Session store unavailable");
            Arc::new(DisabledSessionStore::new(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemorySessionStore::new();
        assert!(!store.is_authenticated());

        store.write(SESSION_MARKER).unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some(SESSION_MARKER));
        assert!(store.is_authenticated());

        store.clear().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemorySessionStore::new();
        let other = store.clone();
        store.write(SESSION_MARKER).unwrap();
        assert!(other.is_authenticated());
    }

    #[test]
    fn clearing_absent_flag_is_ok() {
        let store = MemorySessionStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn redb_store_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.redb");

        {
            let store = RedbSessionStore::open(&path).unwrap();
            assert!(!store.is_authenticated());
            store.write(SESSION_MARKER).unwrap();
        }

        let store = RedbSessionStore::open(&path).unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some(SESSION_MARKER));

        store.clear().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn redb_store_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("session.redb");
        let store = RedbSessionStore::open(&path).unwrap();
        store.write(SESSION_MARKER).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn disabled_store_is_never_authenticated() {
        let store = DisabledSessionStore::new("storage disabled");
        assert!(store.write(SESSION_MARKER).is_err());
        assert!(!store.is_authenticated());
        assert!(store.clear().is_ok());
    }

    #[test]
    fn open_falls_back_when_path_is_unusable() {
        let dir = tempdir().unwrap();
        // A directory where the database file should be
        let path = dir.path().join("session.redb");
        std::fs::create_dir_all(&path).unwrap();

        let store = open_session_store(&path);
        assert!(store.write(SESSION_MARKER).is_err());
        assert!(!store.is_authenticated());
    }
}

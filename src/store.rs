//! Core store type and builder.

use crate::error::{Error, Result};
use crate::persist::{atomic_write, load};
use crate::serializer::{JsonSerializer, Serializer};
use crate::user::{User, UserData};
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

/// File-backed table of user records.
///
/// Holds the authoritative in-memory table and mirrors it to a JSON snapshot
/// file. Every mutation rewrites the snapshot (temp file + rename) *before*
/// the call returns, while still holding the write lock — so no two
/// mutations interleave, no reader sees a half-applied change, and a
/// successful return means memory and disk agree. If the durable write
/// fails, the in-memory change is rolled back and the error returned;
/// the table never runs ahead of the file.
///
/// Use [`open`](Self::open) for a quick start or [`builder`](Self::builder)
/// to control the snapshot format.
///
/// **Single-process only.** If multiple processes open the same file they
/// will clobber each other.
pub struct UserStore {
    table: RwLock<Table>,
    path: PathBuf,
    serializer: JsonSerializer,
}

/// Insertion-ordered record table plus the id counter.
///
/// `next_id` starts at `max(id) + 1` when the snapshot loads and only ever
/// grows, so ids are never reused within a process lifetime, deletes
/// included.
struct Table {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    /// Open (or create) a store at `path` with the default pretty-printed
    /// snapshot format.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::builder(path).build()
    }

    /// Start configuring a new store. Call [`.build()`](UserStoreBuilder::build)
    /// when ready.
    pub fn builder(path: impl AsRef<Path>) -> UserStoreBuilder {
        UserStoreBuilder::new(path)
    }

    // ---- reads ----

    /// Get the record with the given id.
    pub fn get(&self, id: u64) -> Result<User> {
        let table = self.table.read();
        table
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(Error::NotFound(id))
    }

    /// Look up several ids at once. Results come back in the order the ids
    /// were requested; ids with no match are silently omitted, and a
    /// repeated id is returned as many times as it was asked for.
    #[must_use]
    pub fn get_many(&self, ids: &[u64]) -> Vec<User> {
        let table = self.table.read();
        ids.iter()
            .filter_map(|id| table.users.iter().find(|u| u.id == *id).cloned())
            .collect()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.read().users.len()
    }

    /// `true` when the store has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all records, in insertion order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.table.read().users.clone()
    }

    /// Path to the backing JSON file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ---- writes ----

    /// Store a new record under the next free id and return it.
    ///
    /// The id is the highest ever assigned plus one; ids freed by deletes
    /// are not handed out again. On a failed snapshot write the append is
    /// undone and the id stays available for the next attempt.
    pub fn create(&self, data: UserData) -> Result<User> {
        let mut table = self.table.write();
        let user = User {
            id: table.next_id,
            data,
        };
        table.users.push(user.clone());
        match self.persist(&table) {
            Ok(()) => {
                table.next_id += 1;
                Ok(user)
            }
            Err(e) => {
                table.users.pop();
                Err(e)
            }
        }
    }

    /// Replace the payload of the record with the given id, keeping the id.
    /// Returns the updated record.
    pub fn update(&self, id: u64, data: UserData) -> Result<User> {
        let mut table = self.table.write();
        let pos = table
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(Error::NotFound(id))?;
        let replacement = User { id, data };
        let previous = std::mem::replace(&mut table.users[pos], replacement.clone());
        match self.persist(&table) {
            Ok(()) => Ok(replacement),
            Err(e) => {
                table.users[pos] = previous;
                Err(e)
            }
        }
    }

    /// Remove the record with the given id. The relative order of the
    /// remaining records is preserved.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut table = self.table.write();
        let pos = table
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(Error::NotFound(id))?;
        let removed = table.users.remove(pos);
        match self.persist(&table) {
            Ok(()) => Ok(()),
            Err(e) => {
                table.users.insert(pos, removed);
                Err(e)
            }
        }
    }

    // ---- persistence ----

    /// Serialize the table and write it out atomically. Caller must hold the
    /// write lock for the whole mutate-persist-acknowledge window.
    fn persist(&self, table: &Table) -> Result<()> {
        let bytes = self.serializer.serialize(&table.users)?;
        atomic_write(&self.path, &bytes)
    }
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("path", &self.path)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Configures and opens a [`UserStore`].
///
/// ```rust,no_run
/// use userstore::UserStore;
///
/// let store = UserStore::builder("users.json").pretty(false).build();
/// ```
pub struct UserStoreBuilder {
    path: PathBuf,
    pretty: bool,
}

impl UserStoreBuilder {
    fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Write human-readable JSON with indentation (default: on, matching the
    /// snapshot files the store is meant to be inspected through).
    pub fn pretty(mut self, yes: bool) -> Self {
        self.pretty = yes;
        self
    }

    /// Load the snapshot (best effort) and return the store.
    ///
    /// A missing file starts the store empty. An unreadable or corrupt file
    /// also starts it empty, with a warning in the log — bootstrap never
    /// fails the process.
    pub fn build(self) -> UserStore {
        let serializer = if self.pretty {
            JsonSerializer::pretty()
        } else {
            JsonSerializer::new()
        };

        if !self.path.exists() {
            log::info!("no snapshot at {}, starting empty", self.path.display());
        }
        let users = match load(&self.path, &serializer) {
            Ok(users) => {
                if !users.is_empty() {
                    log::info!("loaded {} users from {}", users.len(), self.path.display());
                }
                users
            }
            Err(e) => {
                log::warn!(
                    "ignoring snapshot {}: {e}; starting empty",
                    self.path.display()
                );
                Vec::new()
            }
        };
        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);

        UserStore {
            table: RwLock::new(Table { users, next_id }),
            path: self.path,
            serializer,
        }
    }
}

impl std::fmt::Debug for UserStoreBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStoreBuilder")
            .field("path", &self.path)
            .field("pretty", &self.pretty)
            .finish()
    }
}

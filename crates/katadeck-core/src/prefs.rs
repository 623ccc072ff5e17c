//! Preference persistence using redb.
//!
//! One table, one key: the theme name. The store survives restarts and is
//! shared between the desktop app and the CLI.

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};

use crate::error::DeckResult;
use crate::types::Theme;

const PREFS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("prefs");

/// Storage key for the persisted theme name
pub const THEME_KEY: &str = "theme";

/// Durable key-value preference store
#[derive(Clone)]
pub struct PreferenceStore {
    db: Arc<Database>,
}

impl PreferenceStore {
    /// Open (or create) the store at the given path.
    ///
    /// Creates the parent directory and the prefs table if needed.
    pub fn open(path: impl AsRef<Path>) -> DeckResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Persist the theme name under the fixed key.
    ///
    /// An existing value is overwritten; one write transaction per call.
    pub fn set_theme(&self, theme: Theme) -> DeckResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFS_TABLE)?;
            table.insert(THEME_KEY, theme.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Read the stored theme preference.
    ///
    /// Returns `None` when no preference has been recorded, or when the
    /// stored value is not one of the two known theme names.
    pub fn theme(&self) -> DeckResult<Option<Theme>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PREFS_TABLE)?;
        match table.get(THEME_KEY)? {
            Some(value) => Ok(Theme::parse(value.value())),
            None => Ok(None),
        }
    }
}

use std::path::Path;

use rusqlite::{Connection, params};

use crate::model::{Task, clamp_description};

/// Database file name inside the data directory
pub const DB_FILE_NAME: &str = "ordo.db";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    NotFound(i64),
    #[error("task description is empty")]
    EmptyDescription,
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// The embedded task store. Owns the SQLite connection for the
/// application's lifetime; all operations are synchronous.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Open (or create) the database at the given path and bring the
    /// schema up to date.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let store = TaskStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (tests and scratch use)
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = TaskStore { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY,
                description TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0,
                deleted INTEGER NOT NULL DEFAULT 0
            );",
        )?;
        self.migrate_schema()?;
        Ok(())
    }

    /// Databases written by older tooling (the importer) lack the
    /// `deleted` column; add it if missing.
    fn migrate_schema(&self) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare("PRAGMA table_info(tasks)")?;
        let mut has_deleted = false;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get(1)?;
            if name == "deleted" {
                has_deleted = true;
                break;
            }
        }
        drop(rows);
        drop(stmt);

        if !has_deleted {
            self.conn.execute_batch(
                "ALTER TABLE tasks ADD COLUMN deleted INTEGER NOT NULL DEFAULT 0;",
            )?;
        }
        Ok(())
    }

    /// Insert a new task, returning its store-assigned id.
    pub fn add(&self, description: &str) -> Result<i64, StoreError> {
        let description = clamp_description(description);
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }
        self.conn.execute(
            "INSERT INTO tasks (description, completed) VALUES (?1, 0)",
            params![description],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Move a task to the trash (soft delete)
    pub fn soft_delete(&self, id: i64) -> Result<(), StoreError> {
        self.execute_by_id("UPDATE tasks SET deleted = 1 WHERE id = ?1", id)
    }

    /// Restore a task from the trash
    pub fn restore(&self, id: i64) -> Result<(), StoreError> {
        self.execute_by_id("UPDATE tasks SET deleted = 0 WHERE id = ?1", id)
    }

    /// Permanently remove a task row
    pub fn hard_delete(&self, id: i64) -> Result<(), StoreError> {
        self.execute_by_id("DELETE FROM tasks WHERE id = ?1", id)
    }

    /// Set the completed flag
    pub fn set_completed(&self, id: i64, completed: bool) -> Result<(), StoreError> {
        let changed = self.conn.execute(
            "UPDATE tasks SET completed = ?1 WHERE id = ?2",
            params![completed as i64, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// Replace the description
    pub fn set_description(&self, id: i64, description: &str) -> Result<(), StoreError> {
        let description = clamp_description(description);
        if description.is_empty() {
            return Err(StoreError::EmptyDescription);
        }
        let changed = self.conn.execute(
            "UPDATE tasks SET description = ?1 WHERE id = ?2",
            params![description, id],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    /// List tasks not in the trash, ordered by id
    pub fn list_active(&self) -> Result<Vec<Task>, StoreError> {
        self.list_where(0)
    }

    /// List trashed tasks, ordered by id
    pub fn list_trashed(&self) -> Result<Vec<Task>, StoreError> {
        self.list_where(1)
    }

    fn list_where(&self, deleted: i64) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, description, completed, deleted FROM tasks
             WHERE deleted = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![deleted], |row| {
            Ok(Task {
                id: row.get(0)?,
                description: row.get(1)?,
                completed: row.get::<_, i64>(2)? != 0,
                deleted: row.get::<_, i64>(3)? != 0,
            })
        })?;
        let mut tasks = Vec::new();
        for task in rows {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    fn execute_by_id(&self, sql: &str, id: i64) -> Result<(), StoreError> {
        let changed = self.conn.execute(sql, params![id])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MAX_DESCRIPTION_BYTES;

    fn store() -> TaskStore {
        TaskStore::open_in_memory().unwrap()
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let store = store();
        let a = store.add("first").unwrap();
        let b = store.add("second").unwrap();
        assert!(b > a);
    }

    #[test]
    fn add_rejects_empty_description() {
        let store = store();
        assert!(matches!(store.add(""), Err(StoreError::EmptyDescription)));
        assert!(matches!(store.add("   "), Err(StoreError::EmptyDescription)));
    }

    #[test]
    fn add_clamps_long_description() {
        let store = store();
        let id = store.add(&"x".repeat(500)).unwrap();
        let tasks = store.list_active().unwrap();
        let task = tasks.iter().find(|t| t.id == id).unwrap();
        assert_eq!(task.description.len(), MAX_DESCRIPTION_BYTES);
    }

    #[test]
    fn soft_delete_moves_to_trash() {
        let store = store();
        let id = store.add("to trash").unwrap();
        store.soft_delete(id).unwrap();
        assert!(store.list_active().unwrap().is_empty());
        let trashed = store.list_trashed().unwrap();
        assert_eq!(trashed.len(), 1);
        assert_eq!(trashed[0].id, id);
        assert!(trashed[0].deleted);
    }

    #[test]
    fn restore_brings_task_back() {
        let store = store();
        let id = store.add("back again").unwrap();
        store.soft_delete(id).unwrap();
        store.restore(id).unwrap();
        assert_eq!(store.list_active().unwrap().len(), 1);
        assert!(store.list_trashed().unwrap().is_empty());
    }

    #[test]
    fn hard_delete_removes_row() {
        let store = store();
        let id = store.add("gone").unwrap();
        store.soft_delete(id).unwrap();
        store.hard_delete(id).unwrap();
        assert!(store.list_active().unwrap().is_empty());
        assert!(store.list_trashed().unwrap().is_empty());
        // The row is gone for good; restore reports NotFound
        assert!(matches!(store.restore(id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn set_completed_round_trip() {
        let store = store();
        let id = store.add("toggle me").unwrap();
        store.set_completed(id, true).unwrap();
        assert!(store.list_active().unwrap()[0].completed);
        store.set_completed(id, false).unwrap();
        assert!(!store.list_active().unwrap()[0].completed);
    }

    #[test]
    fn set_description_replaces_text() {
        let store = store();
        let id = store.add("old text").unwrap();
        store.set_description(id, "new text").unwrap();
        assert_eq!(store.list_active().unwrap()[0].description, "new text");
    }

    #[test]
    fn set_description_rejects_empty() {
        let store = store();
        let id = store.add("keep me").unwrap();
        assert!(matches!(
            store.set_description(id, ""),
            Err(StoreError::EmptyDescription)
        ));
        assert_eq!(store.list_active().unwrap()[0].description, "keep me");
    }

    #[test]
    fn missing_id_reports_not_found() {
        let store = store();
        assert!(matches!(store.soft_delete(99), Err(StoreError::NotFound(99))));
        assert!(matches!(store.restore(99), Err(StoreError::NotFound(99))));
        assert!(matches!(store.hard_delete(99), Err(StoreError::NotFound(99))));
        assert!(matches!(
            store.set_completed(99, true),
            Err(StoreError::NotFound(99))
        ));
        assert!(matches!(
            store.set_description(99, "x"),
            Err(StoreError::NotFound(99))
        ));
    }

    #[test]
    fn lists_are_ordered_by_id() {
        let store = store();
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        let ids: Vec<i64> = store.list_active().unwrap().iter().map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn migrates_legacy_schema_without_deleted_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(DB_FILE_NAME);

        // Simulate a database created by the old importer
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE tasks (
                    id INTEGER PRIMARY KEY,
                    description TEXT NOT NULL,
                    completed INTEGER NOT NULL DEFAULT 0
                );
                INSERT INTO tasks (description, completed) VALUES ('legacy', 0);",
            )
            .unwrap();
        }

        let store = TaskStore::open(&path).unwrap();
        let tasks = store.list_active().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "legacy");
        assert!(!tasks[0].deleted);

        // The migrated column is live
        store.soft_delete(tasks[0].id).unwrap();
        assert_eq!(store.list_trashed().unwrap().len(), 1);
    }
}

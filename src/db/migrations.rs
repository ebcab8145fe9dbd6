//! Schema versioning for the planner database.
//!
//! Planner files outlast any single release, so schema changes ship as
//! numbered migrations. Each one runs exactly once, inside a
//! transaction, and leaves a row in the `migrations` table recording
//! when it was applied. A fresh database replays the whole list; an
//! existing one only the versions it is missing.
//!
//! ```rust
//! use dayplan::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! # fn main() -> dayplan::libs::errors::Result<()> {
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok(())
//! # }
//! ```

use crate::libs::errors::Result;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
#[cfg(debug_assertions)]
use crate::msg_warning;
use rusqlite::{params, Connection, Transaction};

/// Tracking table with one row per applied migration.
///
/// Stores the version, the migration name, and the timestamp SQLite
/// assigned when the row was inserted.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// One schema change, identified by its version number.
#[derive(Debug, Clone)]
struct Migration {
    /// Position in the migration sequence
    version: u32,
    /// Short label written to the tracking table
    name: &'static str,
    /// Applies the change inside the supplied transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of every migration this build knows about.
///
/// Construction loads the full list; [`run_migrations`] compares it
/// against the tracking table and applies whatever is missing, in
/// version order. Meant to run once at startup on a single connection.
///
/// [`run_migrations`]: MigrationManager::run_migrations
pub struct MigrationManager {
    /// Migrations in ascending version order
    migrations: Vec<Migration>,
}

impl MigrationManager {
    /// Builds the manager with the known migrations registered.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };

        manager.register_migrations();
        manager
    }

    /// Defines the schema history.
    ///
    /// New migrations are appended with the next free version number;
    /// versions that have shipped are never edited.
    fn register_migrations(&mut self) {
        // Version 1: Account and task tables with their base indices.
        // Status and category are persisted as display strings, constrained
        // to the fixed sets the planner understands.
        self.add_migration(1, "create_users_and_tasks", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS users (
        id INTEGER NOT NULL PRIMARY KEY,
        username TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )",
                [],
            )?;

            // user_id stays NULL for tasks created without an account
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER NOT NULL PRIMARY KEY,
        user_id INTEGER REFERENCES users(id),
        task TEXT NOT NULL,
        due_datetime TIMESTAMP NOT NULL,
        status TEXT NOT NULL DEFAULT 'Not yet started'
            CHECK (status IN ('Completed', 'In Progress', 'Not yet started', 'Canceled')),
        category TEXT NOT NULL
            CHECK (category IN ('Strategic', 'New Learning', 'Improve', 'Achievement'))
    )",
                [],
            )?;

            // Index tasks by owner for per-account listings
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)", [])?;
            // Index tasks by due timestamp for chronological queries
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_datetime ON tasks(due_datetime)", [])?;

            Ok(())
        });

        // Version 2: Expression index matching the DATE(due_datetime)
        // comparison used by day and week schedule lookups.
        self.add_migration(2, "index_due_date", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(DATE(due_datetime))", [])?;
            Ok(())
        });
    }

    /// Appends one migration to the registry.
    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded version.
    ///
    /// The tracking table is created on first use. All pending versions
    /// run inside one transaction, so the database either ends up fully
    /// current or the run leaves no trace. Progress goes through the
    /// message macros; a failed migration is reported and the error
    /// propagated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dayplan::db::migrations::MigrationManager;
    /// use rusqlite::Connection;
    ///
    /// # fn main() -> dayplan::libs::errors::Result<()> {
    /// let manager = MigrationManager::new();
    /// let mut conn = Connection::open_in_memory()?;
    /// manager.run_migrations(&mut conn)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;

        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        // One transaction for the whole batch
        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest version in the tracking table, 0 when none are recorded.
    ///
    /// The query fails outright when the table does not exist yet; that
    /// case also maps to 0 so callers can probe a brand-new database.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    /// Reports whether a given version is present in the tracking table.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dayplan::db::migrations::{init_with_migrations, MigrationManager};
    /// use rusqlite::Connection;
    ///
    /// # fn main() -> dayplan::libs::errors::Result<()> {
    /// let manager = MigrationManager::new();
    /// let mut conn = Connection::open_in_memory()?;
    /// init_with_migrations(&mut conn)?;
    /// assert!(manager.is_migration_applied(&conn, 1)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Lists applied migrations as `(version, name, applied_at)` rows.
    ///
    /// Ordered by version, which matches the order they were applied in.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Forgets migration records newer than `target_version` (debug builds only).
    ///
    /// Only the tracking rows are deleted. The schema keeps whatever
    /// shape the forgotten migrations gave it, which is enough to
    /// re-run them during development but never safe on live data.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> Result<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_warning!(Message::RollingBack(current_version, target_version));

        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;

        msg_success!(Message::RollbackCompleted(target_version));
        Ok(())
    }
}

/// Applies all pending migrations to the given connection.
///
/// Builds a fresh registry and runs it; the usual entry point when
/// opening a planner database.
///
/// # Example
///
/// ```rust
/// use dayplan::db::migrations::init_with_migrations;
/// use rusqlite::Connection;
///
/// # fn main() -> dayplan::libs::errors::Result<()> {
/// let mut conn = Connection::open_in_memory()?;
/// init_with_migrations(&mut conn)?;
/// # Ok(())
/// # }
/// ```
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version of the given connection.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Reports whether the connection is behind the latest known version.
///
/// # Example
///
/// ```rust
/// use dayplan::db::migrations::{init_with_migrations, needs_migration};
/// use rusqlite::Connection;
///
/// # fn main() -> dayplan::libs::errors::Result<()> {
/// let mut conn = Connection::open_in_memory()?;
/// init_with_migrations(&mut conn)?;
/// assert!(!needs_migration(&conn)?);
/// # Ok(())
/// # }
/// ```
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}

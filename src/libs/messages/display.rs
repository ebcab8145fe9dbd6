//! Wording for every [`Message`] variant.
//!
//! The `Display` impl below is the single place where message text is
//! written out, so changing a notice never means hunting through call
//! sites. Parameters are interpolated here, type-checked against the
//! variant payloads.
//!
//! The macros accept anything that implements `Display`, which in
//! practice means a variant from the catalog:
//!
//! ```rust
//! use dayplan::msg_info;
//! use dayplan::libs::messages::Message;
//!
//! msg_info!(Message::DatabaseUpToDate);
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    /// Renders the variant as the text shown to the user.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dayplan::libs::messages::Message;
    ///
    /// let message = Message::DatabaseVersion(2);
    /// assert_eq!(message.to_string(), "Planner database version: 2");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === DATABASE MESSAGES ===
            Message::DbConnectionFailed => "Could not open the planner database".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending schema migrations", count),
            Message::RunningMigration(version, name) => format!("Applying migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} applied", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "Planner schema is fully migrated".to_string(),
            Message::DatabaseVersion(version) => format!("Planner database version: {}", version),
            Message::DatabaseUpToDate => "Planner schema is up to date".to_string(),
            Message::MigrationHistory => "Applied migrations:".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Migration records rolled back to v{}", version),
        };
        write!(f, "{}", text)
    }
}

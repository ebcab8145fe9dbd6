//! Database layer for the dayplan crate.
//!
//! Provides the persistence layer built on SQLite, offering type-safe
//! database operations for planner accounts and tasks. Implements a
//! migration system for schema evolution and provides specialized modules
//! for each entity.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Account Storage**: Registration, credential checks, lookups
//! - **Task Storage**: Task creation, status updates, schedule queries
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayplan::db::tasks::Tasks;
//! use dayplan::db::users::Users;
//! use dayplan::libs::task::{Task, TaskCategory, TaskFilter, TaskStatus};
//! use chrono::NaiveDate;
//!
//! # fn main() -> dayplan::libs::errors::Result<()> {
//! let mut users = Users::new()?;
//! let owner = users.register("alice", "correct horse battery staple")?;
//!
//! let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let task = Task::new(owner.id, "Buy milk", due, TaskStatus::NotYetStarted, TaskCategory::Improve);
//!
//! let mut tasks = Tasks::new()?;
//! let task_id = tasks.insert(&task)?;
//! let today = tasks.fetch(owner.id, TaskFilter::Date(due.date()))?;
//! # Ok(())
//! # }
//! ```

/// Core database connection and initialization module.
///
/// Provides the fundamental `Db` struct that manages SQLite connections,
/// applies migrations, and ensures proper database configuration.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes, tracks migration history, and provides
/// development-time migration management commands.
pub mod migrations;

/// Core task storage operations.
///
/// Handles task creation, status updates, and the day, week, and month
/// schedule queries the planner is built around.
pub mod tasks;

/// Account storage and credential checks.
///
/// Handles registration with salted password digests and the generic
/// authentication lookup used at login.
pub mod users;

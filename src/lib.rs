//! # Dayplan - Daily Planner Storage
//!
//! The storage engine of a small personal day planner: user accounts,
//! tasks with due timestamps, and the day, week, and month schedule
//! queries a planner UI is built on.
//!
//! ## Features
//!
//! - **Account Storage**: Registration and login checks with salted Argon2id digests
//! - **Task Management**: Create tasks, track their status and category
//! - **Schedule Queries**: Fetch tasks for a date, a Monday-to-Sunday week, or a month
//! - **Owner Scoping**: Every query is bound to one account (or the anonymous context)
//! - **Schema Migrations**: Versioned SQLite schema evolution with history tracking
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
//! users.register("alice", "hunter2 but longer")?;
//! let user = users.authenticate("alice", "hunter2 but longer")?;
//!
//! let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let mut tasks = Tasks::new()?;
//! let id = tasks.insert(&Task::new(user.id, "Buy milk", due, TaskStatus::NotYetStarted, TaskCategory::Improve))?;
//!
//! tasks.set_status(id, TaskStatus::Completed)?;
//! let schedule = tasks.fetch(user.id, TaskFilter::Week(due.date()))?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod libs;

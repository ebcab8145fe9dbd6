//! Core library modules for the dayplan crate.
//!
//! Serves as the main entry point for all planner library components,
//! providing a centralized access point to the crate's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Data storage paths, messaging, error types
//! - **Account Handling**: User records and password hashing
//! - **Task Model**: Task records, statuses, categories, schedule filters
//! - **Presentation Helpers**: Due date formatting for display
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayplan::db::tasks::Tasks;
//! use dayplan::libs::task::{Task, TaskCategory, TaskStatus};
//! use chrono::NaiveDate;
//!
//! # fn main() -> dayplan::libs::errors::Result<()> {
//! let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let task = Task::new(None, "Buy milk", due, TaskStatus::NotYetStarted, TaskCategory::Improve);
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&task)?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod data_storage;
pub mod errors;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod user;

//! Output macros shared by the whole crate.
//!
//! Every macro routes through the same check: when `DAYPLAN_DEBUG` or
//! `RUST_LOG` is set, messages go to the `tracing` subscriber as
//! structured log events; otherwise they are printed straight to the
//! console. Call sites look identical in both modes.
//!
//! `msg_print!` emits the message as-is. `msg_success!`, `msg_info!`,
//! `msg_warning!` and `msg_error!` add a status emoji, and `msg_debug!`
//! is suppressed entirely outside debug mode. Passing `true` as a
//! second argument pads the message with blank lines.
//!
//! ```rust
//! use dayplan::{msg_info, msg_print, msg_success};
//! use dayplan::libs::messages::Message;
//!
//! msg_success!(Message::AllMigrationsCompleted);
//! msg_info!(Message::DatabaseVersion(2), true);
//! msg_print!(Message::MigrationHistory);
//! ```

use std::sync::OnceLock;

/// Result of the first environment lookup, reused for the rest of the process.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Reports whether messages should be routed through `tracing`.
///
/// True when `DAYPLAN_DEBUG` or `RUST_LOG` is present in the
/// environment. The lookup happens once; later calls read the cached
/// value.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        std::env::var("DAYPLAN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Shows a message without any prefix.
///
/// Goes to `tracing::info!` in debug mode and plain `println!`
/// otherwise. The optional second argument surrounds the message with
/// blank lines:
///
/// ```text
/// msg_print!(Message::MigrationHistory);
/// msg_print!(Message::MigrationHistory, true);
/// ```
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Shows a completion notice prefixed with ✅.
///
/// ```text
/// ✅ Planner schema is fully migrated
/// ✅ Migration records rolled back to v1
/// ```
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Shows a failure notice prefixed with ❌.
///
/// Debug mode logs through `tracing::error!`; normal mode writes to
/// stderr so failures stay separate from captured stdout.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("\n❌ {}\n", $msg);
        } else {
            eprintln!("\n❌ {}\n", $msg);
        }
    };
}

/// Shows a caution notice prefixed with ⚠️.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            println!("⚠️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("\n⚠️ {}\n", $msg);
        } else {
            println!("\n⚠️ {}\n", $msg);
        }
    };
}

/// Shows a status update prefixed with ℹ️.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️ {}\n", $msg);
        } else {
            println!("\nℹ️ {}\n", $msg);
        }
    };
}

/// Trace output for troubleshooting, prefixed with 🔍.
///
/// Expands to a `tracing::debug!` call guarded by the debug mode
/// check; nothing is printed in normal mode.
///
/// ```text
/// msg_debug!(format!("Task query took {:?}", elapsed));
/// ```
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

//! User-facing message catalog and the macros that print it.
//!
//! `types` defines what the crate can say, `display` fixes the exact
//! wording, and `macros` routes the text to the console or the
//! `tracing` subscriber. Code elsewhere only ever names a [`Message`]
//! variant and picks a macro.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

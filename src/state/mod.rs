//! List UI state machine.
//!
//! The controller and its building blocks. Rendering is left to a
//! [`crate::view::ListWidget`]; everything here is testable without one.

pub mod filter;
pub mod host;
pub mod list;
pub mod menu;
pub mod naming;
pub mod rows;

// Re-export for convenience
pub use filter::{filter_functions, FilteredItem, FunctionFilter, NameContains};
pub use host::{
    log_warning, Confirmation, DeleteRequest, ListHost, RenameRequest, StandaloneHost,
};
pub use list::{
    DeleteOutcome, EventsFunctionsList, ListSettings, RenameOutcome, NAME_TAKEN_WARNING,
};
pub use menu::{build_context_menu, MenuAction, MenuItem};
pub use naming::new_name;
pub use rows::{visible_rows, ListView, Row};

//! Contract between the list controller and the host editor.
//!
//! The host owns the selection and decides whether a rename or a delete may
//! go ahead. Confirmation is an asynchronous, call-once exchange: the
//! controller hands the host a move-only ticket, and the host answers either
//! right away or later by giving the ticket back to the controller.

use crate::model::{EventsFunctionsContainer, FunctionId, ListKey};

/// Answer of the host to a confirmation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Decided synchronously; the ticket was dropped by the host.
    Resolved(bool),
    /// The host kept the ticket and will resolve it later.
    Pending,
}

/// Ticket for a rename awaiting host approval.
///
/// Not `Clone`: resolving consumes it, so it can be answered only once.
#[derive(Debug, PartialEq, Eq)]
pub struct RenameRequest {
    pub(crate) token: u64,
    pub(crate) key: ListKey,
    pub(crate) function: FunctionId,
    pub(crate) new_name: String,
}

impl RenameRequest {
    /// Function to rename.
    pub fn function(&self) -> FunctionId {
        self.function
    }

    /// Requested name.
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Token telling this request apart from later ones.
    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Ticket for a delete awaiting host approval.
#[derive(Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub(crate) token: u64,
    pub(crate) key: ListKey,
    pub(crate) function: FunctionId,
}

impl DeleteRequest {
    /// Function to delete.
    pub fn function(&self) -> FunctionId {
        self.function
    }

    /// Token of this request.
    pub fn token(&self) -> u64 {
        self.token
    }
}

/// Host editor services used by the list controller.
///
/// Everything except selection storage has a default, which makes a host
/// with only a selection field usable standalone: renames and deletes are
/// confirmed immediately and applied directly to the container.
pub trait ListHost {
    /// Currently selected function, if any.
    fn selected(&self) -> Option<FunctionId>;

    /// Change the selection.
    fn select(&mut self, function: Option<FunctionId>);

    /// Ask whether `request.function()` may be renamed to `request.new_name()`.
    fn confirm_rename(&mut self, request: RenameRequest) -> Confirmation {
        let _ = request;
        Confirmation::Resolved(true)
    }

    /// Ask whether `request.function()` may be deleted.
    fn confirm_delete(&mut self, request: DeleteRequest) -> Confirmation {
        let _ = request;
        Confirmation::Resolved(true)
    }

    /// Remove an approved function from the container.
    ///
    /// The default drops it from `functions` and clears the selection if it
    /// pointed at the removed function.
    fn remove_function(&mut self, functions: &mut EventsFunctionsContainer, function: FunctionId) {
        functions.remove(function);
        if self.selected() == Some(function) {
            self.select(None);
        }
    }

    /// Open the options editor of the extension owning the list.
    fn edit_options(&mut self) {}

    /// Show a blocking, user-facing warning.
    fn warn(&mut self, message: &str) {
        log_warning(message);
    }
}

/// Log a user-facing list warning. Hosts that display warnings themselves
/// call this too, so every warning also reaches the log file.
pub fn log_warning(message: &str) {
    tracing::warn!(warning = message, "List warning");
}

/// Host with default policies that records warnings and option requests.
///
/// Suits tests and embedding where no confirmation UI exists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StandaloneHost {
    /// Selected function.
    pub selection: Option<FunctionId>,
    /// Warnings received, oldest first.
    pub warnings: Vec<String>,
    /// How often the options editor was requested.
    pub options_opened: usize,
}

impl ListHost for StandaloneHost {
    fn selected(&self) -> Option<FunctionId> {
        self.selection
    }

    fn select(&mut self, function: Option<FunctionId>) {
        self.selection = function;
    }

    fn edit_options(&mut self) {
        self.options_opened += 1;
    }

    fn warn(&mut self, message: &str) {
        log_warning(message);
        self.warnings.push(message.to_string());
    }
}

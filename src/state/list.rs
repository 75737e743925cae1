//! Events functions list controller.
//!
//! Owns the transient UI state of the list (search text, the row being
//! renamed, outstanding confirmation tickets) and applies add, rename,
//! delete and reorder to a container owned by the host. Every operation runs
//! to completion on the caller's thread; only host confirmations may be
//! answered later, through [`EventsFunctionsList::resolve_rename`] and
//! [`EventsFunctionsList::resolve_delete`].
//!
//! Nothing here returns an error. Invalid input degrades to an outcome value,
//! a user-facing warning, or a no-op.

use super::filter::{filter_functions, FunctionFilter, NameContains};
use super::host::{Confirmation, DeleteRequest, ListHost, RenameRequest};
use super::menu::{build_context_menu, MenuAction, MenuItem};
use super::naming::new_name;
use super::rows::{visible_rows, ListView, Row};
use crate::model::{EventsFunctionsContainer, FunctionId, ListKey};
use crate::view::ListWidget;
use std::collections::HashMap;
use tracing::{debug, info};

/// Warning shown when a rename would duplicate another function's name.
pub const NAME_TAKEN_WARNING: &str = "Another function with this name already exists.";

/// Tunables of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSettings {
    /// Base label for generated names ("Function", "Function2", ...).
    pub base_name: String,
    /// Label of the trailing add row.
    pub add_row_label: String,
    /// Whether the search box matches case-sensitively.
    pub case_sensitive_search: bool,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            base_name: "Function".to_string(),
            add_row_label: "Add a new function".to_string(),
            case_sensitive_search: false,
        }
    }
}

/// Result of committing an inline rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The new name equals the current one; nothing happened.
    Unchanged,
    /// Another function already has the name; a warning was shown.
    Collision,
    /// The host approved and the function was renamed.
    Renamed,
    /// The host refused.
    Vetoed,
    /// The host will answer later.
    Pending,
    /// The function or the list is gone, or a newer rename superseded this one.
    Stale,
}

/// Result of asking to delete a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The host approved and the function is gone.
    Deleted,
    /// The host refused.
    Vetoed,
    /// The host will answer later.
    Pending,
    /// The function or the list is gone.
    Stale,
}

/// Controller for one displayed list of events functions.
pub struct EventsFunctionsList<W: ListWidget> {
    settings: ListSettings,
    filter: Box<dyn FunctionFilter>,
    widget: W,
    mounted: Option<ListKey>,
    search_text: String,
    renamed: Option<FunctionId>,
    next_token: u64,
    latest_rename: HashMap<FunctionId, u64>,
}

impl<W: ListWidget> EventsFunctionsList<W> {
    /// Controller over `widget`, with the default name filter.
    pub fn new(widget: W, settings: ListSettings) -> Self {
        let filter = NameContains {
            case_sensitive: settings.case_sensitive_search,
        };
        Self {
            settings,
            filter: Box::new(filter),
            widget,
            mounted: None,
            search_text: String::new(),
            renamed: None,
            next_token: 1,
            latest_rename: HashMap::new(),
        }
    }

    /// Replace the search filter.
    pub fn with_filter(mut self, filter: impl FunctionFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Settings in effect.
    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    /// Current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Function in inline rename mode, as last set. May be stale.
    pub fn renamed(&self) -> Option<FunctionId> {
        self.renamed
    }

    /// The widget being driven.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Mutable access to the widget, for state the controller does not own.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// Key of the list currently mounted in the widget.
    pub fn mounted(&self) -> Option<ListKey> {
        self.mounted
    }

    /// Mount `functions` if it is not the list already shown.
    ///
    /// When the list identity changed, the widget is remounted and the rename
    /// state and outstanding rename tickets are discarded.
    pub fn sync(&mut self, functions: &EventsFunctionsContainer) {
        let key = functions.list_key();
        if self.mounted == Some(key) {
            return;
        }
        if let Some(previous) = self.mounted {
            debug!(%previous, current = %key, "List identity changed, remounting");
        }
        self.renamed = None;
        self.latest_rename.clear();
        self.widget.remount(key);
        self.mounted = Some(key);
    }

    /// Snapshot of the list for rendering.
    pub fn view<'a>(
        &'a self,
        functions: &'a EventsFunctionsContainer,
        host: &impl ListHost,
    ) -> ListView<'a> {
        ListView::build(
            functions,
            self.filter.as_ref(),
            &self.search_text,
            &self.settings.add_row_label,
            self.renamed,
            host.selected(),
        )
    }

    /// Visible rows: filtered functions plus the add row.
    pub fn visible_rows<'a>(&self, functions: &'a EventsFunctionsContainer) -> Vec<Row<'a>> {
        visible_rows(functions, &self.search_text, self.filter.as_ref())
    }

    /// Push a fresh snapshot to the widget.
    pub fn refresh(&mut self, functions: &EventsFunctionsContainer, host: &impl ListHost) {
        self.sync(functions);
        let view = ListView::build(
            functions,
            self.filter.as_ref(),
            &self.search_text,
            &self.settings.add_row_label,
            self.renamed,
            host.selected(),
        );
        self.widget.refresh(&view);
    }

    /// Store the search text and refresh. An empty text shows everything.
    pub fn set_search_text(
        &mut self,
        functions: &EventsFunctionsContainer,
        host: &impl ListHost,
        text: impl Into<String>,
    ) {
        self.search_text = text.into();
        debug!(search_text = %self.search_text, "Search text changed");
        self.refresh(functions, host);
    }

    /// Enter rename mode for `function`, or leave it with `None`.
    ///
    /// Always asks the widget to recompute its layout.
    pub fn begin_rename(
        &mut self,
        functions: &EventsFunctionsContainer,
        host: &impl ListHost,
        function: Option<FunctionId>,
    ) {
        self.sync(functions);
        self.renamed = function;
        debug!(?function, "Rename mode changed");
        self.widget.recompute_layout();
        self.refresh(functions, host);
    }

    /// Commit an inline rename of `function` to `new_name`.
    ///
    /// Leaves rename mode whatever the outcome. Identical names are a no-op,
    /// names used by another function are refused with a warning, anything
    /// else goes to the host for approval. Tickets from earlier commits on the
    /// same function become stale in every case.
    pub fn commit_rename(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        function: FunctionId,
        new_name: &str,
    ) -> RenameOutcome {
        self.sync(functions);
        self.renamed = None;
        // Any earlier ticket for this function is superseded, whatever happens next.
        self.latest_rename.remove(&function);

        let current_name = functions.get(function).map(|f| f.name().to_string());
        let outcome = match current_name {
            None => {
                debug!(%function, "Rename committed for missing function");
                RenameOutcome::Stale
            }
            Some(current) if current == new_name => RenameOutcome::Unchanged,
            Some(_) if functions.name_taken_by_other(new_name, function) => {
                host.warn(NAME_TAKEN_WARNING);
                RenameOutcome::Collision
            }
            Some(_) => {
                let token = self.issue_token();
                self.latest_rename.insert(function, token);
                let request = RenameRequest {
                    token,
                    key: functions.list_key(),
                    function,
                    new_name: new_name.to_string(),
                };
                match host.confirm_rename(request) {
                    Confirmation::Resolved(confirmed) => {
                        let key = functions.list_key();
                        return self
                            .apply_rename(functions, host, key, token, function, new_name, confirmed);
                    }
                    Confirmation::Pending => {
                        debug!(%function, token, "Rename awaiting host confirmation");
                        RenameOutcome::Pending
                    }
                }
            }
        };

        self.refresh(functions, &*host);
        outcome
    }

    /// Apply the host's late answer to a rename ticket.
    ///
    /// Ignored when the list was remounted, the function is gone, or a newer
    /// rename of the same function was committed since. Uniqueness is checked
    /// again against the current names.
    pub fn resolve_rename(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        request: RenameRequest,
        confirmed: bool,
    ) -> RenameOutcome {
        self.sync(functions);
        let RenameRequest {
            token,
            key,
            function,
            new_name,
        } = request;
        self.apply_rename(functions, host, key, token, function, &new_name, confirmed)
    }

    #[allow(clippy::too_many_arguments)]
    fn apply_rename(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        key: ListKey,
        token: u64,
        function: FunctionId,
        new_name: &str,
        confirmed: bool,
    ) -> RenameOutcome {
        if key != functions.list_key() || self.latest_rename.get(&function) != Some(&token) {
            debug!(%function, token, "Ignoring stale rename resolution");
            return RenameOutcome::Stale;
        }
        self.latest_rename.remove(&function);

        let outcome = if !confirmed {
            debug!(%function, "Rename vetoed by host");
            RenameOutcome::Vetoed
        } else if functions.name_taken_by_other(new_name, function) {
            host.warn(NAME_TAKEN_WARNING);
            RenameOutcome::Collision
        } else {
            match functions.get_mut(function) {
                Some(target) => {
                    info!(from = target.name(), to = new_name, "Renamed function");
                    target.set_name(new_name);
                    RenameOutcome::Renamed
                }
                None => RenameOutcome::Stale,
            }
        };

        self.refresh(functions, &*host);
        outcome
    }

    /// Append a new function with a generated unique name.
    pub fn add_new(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &impl ListHost,
    ) -> FunctionId {
        self.sync(functions);
        let name = new_name(&self.settings.base_name, |candidate| {
            functions.has_function_named(candidate)
        });
        info!(name = %name, "Adding function");
        let id = functions.push_new(name);
        self.refresh(functions, host);
        id
    }

    /// Ask the host to delete `function`.
    ///
    /// The controller never removes anything itself; on approval the host's
    /// [`ListHost::remove_function`] does.
    pub fn delete(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        function: FunctionId,
    ) -> DeleteOutcome {
        self.sync(functions);
        if !functions.contains(function) {
            debug!(%function, "Delete requested for missing function");
            return DeleteOutcome::Stale;
        }

        let key = functions.list_key();
        let request = DeleteRequest {
            token: self.issue_token(),
            key,
            function,
        };
        match host.confirm_delete(request) {
            Confirmation::Resolved(confirmed) => {
                self.apply_delete(functions, host, key, function, confirmed)
            }
            Confirmation::Pending => {
                debug!(%function, "Delete awaiting host confirmation");
                DeleteOutcome::Pending
            }
        }
    }

    /// Apply the host's late answer to a delete ticket.
    pub fn resolve_delete(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        request: DeleteRequest,
        confirmed: bool,
    ) -> DeleteOutcome {
        self.sync(functions);
        self.apply_delete(functions, host, request.key, request.function, confirmed)
    }

    fn apply_delete(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        key: ListKey,
        function: FunctionId,
        confirmed: bool,
    ) -> DeleteOutcome {
        if key != functions.list_key() || !functions.contains(function) {
            debug!(%function, "Ignoring stale delete resolution");
            return DeleteOutcome::Stale;
        }
        if !confirmed {
            debug!(%function, "Delete vetoed by host");
            return DeleteOutcome::Vetoed;
        }

        host.remove_function(functions, function);
        if self.renamed == Some(function) {
            self.renamed = None;
        }
        self.latest_rename.remove(&function);
        info!(%function, "Deleted function");
        self.refresh(functions, &*host);
        DeleteOutcome::Deleted
    }

    /// Move the row at visible position `old_index` to `new_index`.
    ///
    /// Both positions index the filtered rows and are mapped to container
    /// indices before moving, so hidden functions keep their relative order.
    /// The add row cannot be dragged; a destination on or past it lands on the
    /// last visible function. Returns whether the container order changed.
    pub fn reorder(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &impl ListHost,
        old_index: usize,
        new_index: usize,
    ) -> bool {
        self.sync(functions);
        let visible: Vec<usize> = filter_functions(functions, &self.search_text, self.filter.as_ref())
            .iter()
            .map(|item| item.index)
            .collect();

        let moved = match (visible.get(old_index), visible.last()) {
            (Some(&from), Some(&last)) => {
                let to = visible.get(new_index).copied().unwrap_or(last);
                functions.move_function(from, to)
            }
            _ => false,
        };

        debug!(old_index, new_index, moved, "Reorder");
        self.refresh(functions, host);
        moved
    }

    /// Select a function (or clear the selection).
    pub fn select(
        &mut self,
        functions: &EventsFunctionsContainer,
        host: &mut impl ListHost,
        function: Option<FunctionId>,
    ) {
        host.select(function.filter(|id| functions.contains(*id)));
        self.refresh(functions, &*host);
    }

    /// Click on visible row `row`: selects a function row, or adds a
    /// function when the add row is clicked.
    ///
    /// Returns the selected or created function.
    pub fn activate_row(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        row: usize,
    ) -> Option<FunctionId> {
        let target = self.visible_rows(functions).get(row).map(|r| r.function_id());
        match target {
            Some(Some(function)) => {
                self.select(functions, host, Some(function));
                Some(function)
            }
            Some(None) => Some(self.add_new(functions, &*host)),
            None => None,
        }
    }

    /// Context menu for the function on visible row `row`, if any.
    pub fn context_menu(&self, functions: &EventsFunctionsContainer, row: usize) -> Option<Vec<MenuItem>> {
        self.visible_rows(functions)
            .get(row)
            .and_then(Row::function_id)
            .map(build_context_menu)
    }

    /// Run a context menu entry.
    pub fn run_menu_action(
        &mut self,
        functions: &mut EventsFunctionsContainer,
        host: &mut impl ListHost,
        action: MenuAction,
    ) -> Option<DeleteOutcome> {
        match action {
            MenuAction::Rename(function) => {
                self.begin_rename(functions, &*host, Some(function));
                None
            }
            MenuAction::Remove(function) => Some(self.delete(functions, host, function)),
        }
    }

    /// "Edit extension options" button.
    pub fn edit_options(&self, host: &mut impl ListHost) {
        host.edit_options();
    }

    fn issue_token(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        token
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;

//! A project opened on one extension's functions list.
//!
//! Shared by the line console and the full-screen terminal UI: both own a
//! [`Session`] and differ only in the widget they render through.

use crate::model::{EventsFunctionsContainer, FunctionId, Project, ProjectError};
use crate::state::{
    log_warning, Confirmation, DeleteOutcome, DeleteRequest, EventsFunctionsList, ListHost,
    ListSettings, RenameOutcome,
};
use crate::view::ListWidget;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from saving a session's project.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The project was not opened from a file.
    #[error("No project file to save to")]
    NoProjectFile,

    /// Writing the project failed.
    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// Host backed by a terminal user.
///
/// Renames are approved on the spot. Deletes are deferred: the ticket waits
/// in [`SessionHost::pending_delete`] until the user answers.
#[derive(Debug, Default)]
pub struct SessionHost {
    selection: Option<FunctionId>,
    pending_delete: Option<DeleteRequest>,
    messages: Vec<String>,
}

impl SessionHost {
    /// Delete ticket awaiting the user's answer.
    pub fn pending_delete(&self) -> Option<&DeleteRequest> {
        self.pending_delete.as_ref()
    }

    /// Take the delete ticket to resolve it.
    pub fn take_pending_delete(&mut self) -> Option<DeleteRequest> {
        self.pending_delete.take()
    }

    /// Messages for the user since the last drain, oldest first.
    pub fn drain_messages(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl ListHost for SessionHost {
    fn selected(&self) -> Option<FunctionId> {
        self.selection
    }

    fn select(&mut self, function: Option<FunctionId>) {
        self.selection = function;
    }

    fn confirm_delete(&mut self, request: DeleteRequest) -> Confirmation {
        if let Some(previous) = self.pending_delete.replace(request) {
            debug!(function = %previous.function(), "Dropping unanswered delete request");
        }
        Confirmation::Pending
    }

    fn edit_options(&mut self) {
        self.messages
            .push("Extension options cannot be edited from the terminal.".to_string());
    }

    fn warn(&mut self, message: &str) {
        log_warning(message);
        self.messages.push(format!("warning: {message}"));
    }
}

/// Borrowed pieces of a session, handed out together.
pub type SessionParts<'a, W> = (
    &'a mut EventsFunctionsContainer,
    &'a mut SessionHost,
    &'a mut EventsFunctionsList<W>,
);

/// A project, the extension being listed, and the list controller.
pub struct Session<W: ListWidget> {
    project: Project,
    extension: usize,
    path: Option<PathBuf>,
    host: SessionHost,
    list: EventsFunctionsList<W>,
}

impl<W: ListWidget> Session<W> {
    /// Open a session on `project`'s extension at index `extension`.
    ///
    /// `path` is where [`Session::save`] writes; without one, saving is refused.
    pub fn new(
        project: Project,
        extension: usize,
        path: Option<PathBuf>,
        settings: ListSettings,
        widget: W,
    ) -> Self {
        let mut session = Self {
            project,
            extension,
            path,
            host: SessionHost::default(),
            list: EventsFunctionsList::new(widget, settings),
        };
        if let Some((functions, host, list)) = session.parts() {
            list.refresh(functions, &*host);
        }
        session
    }

    /// The open project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// The terminal host.
    pub fn host(&self) -> &SessionHost {
        &self.host
    }

    /// Mutable access to the host, for draining messages.
    pub fn host_mut(&mut self) -> &mut SessionHost {
        &mut self.host
    }

    /// The list controller.
    pub fn list(&self) -> &EventsFunctionsList<W> {
        &self.list
    }

    /// Mutable access to the controller, for widget state such as the cursor.
    pub fn list_mut(&mut self) -> &mut EventsFunctionsList<W> {
        &mut self.list
    }

    /// Name of the listed extension, empty if it no longer exists.
    pub fn extension_name(&self) -> &str {
        self.project
            .extension(self.extension)
            .map_or("", |extension| extension.name.as_str())
    }

    /// Functions of the listed extension.
    pub fn functions(&self) -> Option<&EventsFunctionsContainer> {
        Some(&self.project.extension(self.extension)?.functions)
    }

    /// Container, host and controller at once, as the controller needs them.
    pub fn parts(&mut self) -> Option<SessionParts<'_, W>> {
        let functions = &mut self.project.extension_mut(self.extension)?.functions;
        Some((functions, &mut self.host, &mut self.list))
    }

    /// Function shown on visible row `row`.
    pub fn function_on_row(&self, row: usize) -> Option<FunctionId> {
        let functions = self.functions()?;
        self.list.visible_rows(functions).get(row)?.function_id()
    }

    /// Current name of `function`, empty if it is gone.
    pub fn name_of(&self, function: FunctionId) -> String {
        self.functions()
            .and_then(|functions| functions.get(function))
            .map(|f| f.name().to_string())
            .unwrap_or_default()
    }

    /// Set the search text.
    pub fn search(&mut self, text: &str) {
        if let Some((functions, host, list)) = self.parts() {
            list.set_search_text(functions, &*host, text);
        }
    }

    /// Write the project back to the file it came from.
    pub fn save(&self) -> Result<&Path, SessionError> {
        let path = self.path.as_deref().ok_or(SessionError::NoProjectFile)?;
        self.project.save(path)?;
        info!(path = %path.display(), "Saved project");
        Ok(path)
    }
}

/// User-facing text for a rename outcome.
pub fn describe_rename(outcome: RenameOutcome) -> &'static str {
    match outcome {
        RenameOutcome::Unchanged => "Name unchanged",
        RenameOutcome::Collision => "Rename refused",
        RenameOutcome::Renamed => "Renamed",
        RenameOutcome::Vetoed => "Rename cancelled",
        RenameOutcome::Pending => "Rename awaiting confirmation",
        RenameOutcome::Stale => "Function no longer exists",
    }
}

/// User-facing text for a delete outcome.
pub fn describe_delete(outcome: DeleteOutcome) -> &'static str {
    match outcome {
        DeleteOutcome::Deleted => "Removed",
        DeleteOutcome::Vetoed => "Kept",
        DeleteOutcome::Pending => "Removal awaiting confirmation",
        DeleteOutcome::Stale => "Function no longer exists",
    }
}

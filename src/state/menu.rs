//! Row context menu.

use crate::model::FunctionId;

/// What a context menu entry does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Enter inline rename mode for the function.
    Rename(FunctionId),
    /// Ask the host to delete the function.
    Remove(FunctionId),
}

/// One context menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Text shown for the entry.
    pub label: &'static str,
    /// What clicking it does.
    pub action: MenuAction,
}

/// Context menu for a function row: "Rename", then "Remove".
pub fn build_context_menu(function: FunctionId) -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Rename",
            action: MenuAction::Rename(function),
        },
        MenuItem {
            label: "Remove",
            action: MenuAction::Remove(function),
        },
    ]
}

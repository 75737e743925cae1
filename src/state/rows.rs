//! Row descriptors handed to the list widget.

use super::filter::{filter_functions, FunctionFilter};
use crate::model::{EventsFunction, EventsFunctionsContainer, FunctionId, ListKey};

/// One row of the displayed list.
#[derive(Debug, Clone, Copy)]
pub enum Row<'a> {
    /// A visible function and its index in the container.
    Function {
        /// Index in the container.
        index: usize,
        /// The function.
        function: &'a EventsFunction,
    },
    /// Trailing "add a new function" row.
    AddNew,
}

impl<'a> Row<'a> {
    /// Function shown on the row, `None` for the add row.
    pub fn function(&self) -> Option<&'a EventsFunction> {
        match self {
            Row::Function { function, .. } => Some(function),
            Row::AddNew => None,
        }
    }

    /// Identity of the function shown on the row.
    pub fn function_id(&self) -> Option<FunctionId> {
        self.function().map(EventsFunction::id)
    }

    /// Whether this is the trailing add row.
    pub fn is_add_new(&self) -> bool {
        matches!(self, Row::AddNew)
    }
}

/// Visible functions for `search_text`, in container order, followed by the
/// add row.
pub fn visible_rows<'a>(
    functions: &'a EventsFunctionsContainer,
    search_text: &str,
    filter: &dyn FunctionFilter,
) -> Vec<Row<'a>> {
    filter_functions(functions, search_text, filter)
        .into_iter()
        .map(|item| Row::Function {
            index: item.index,
            function: item.function,
        })
        .chain(std::iter::once(Row::AddNew))
        .collect()
}

/// Everything a list widget needs to draw one frame.
///
/// `selected` and `renamed` are only set when they point at a function still
/// present in the container; stale references show as nothing.
#[derive(Debug, Clone)]
pub struct ListView<'a> {
    /// List the snapshot was taken from.
    pub key: ListKey,
    /// Visible rows, add row last.
    pub rows: Vec<Row<'a>>,
    /// Selected function, if it still exists.
    pub selected: Option<FunctionId>,
    /// Function in rename mode, if it still exists.
    pub renamed: Option<FunctionId>,
    /// Search text the rows were filtered with.
    pub search_text: &'a str,
    /// Label of the add row.
    pub add_label: &'a str,
}

impl<'a> ListView<'a> {
    /// Snapshot of `functions` for `search_text` through `filter`.
    pub fn build(
        functions: &'a EventsFunctionsContainer,
        filter: &dyn FunctionFilter,
        search_text: &'a str,
        add_label: &'a str,
        renamed: Option<FunctionId>,
        selected: Option<FunctionId>,
    ) -> Self {
        Self {
            key: functions.list_key(),
            rows: visible_rows(functions, search_text, filter),
            selected: selected.filter(|id| functions.contains(*id)),
            renamed: renamed.filter(|id| functions.contains(*id)),
            search_text,
            add_label,
        }
    }

    /// Whether `function` is the selected one.
    pub fn is_selected(&self, function: FunctionId) -> bool {
        self.selected == Some(function)
    }

    /// Whether `function` is being renamed.
    pub fn is_renamed(&self, function: FunctionId) -> bool {
        self.renamed == Some(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::filter::NameContains;

    #[test]
    fn empty_container_has_only_add_row() {
        let c = EventsFunctionsContainer::new();
        let rows = visible_rows(&c, "", &NameContains::default());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_add_new());
    }

    #[test]
    fn add_row_is_always_last() {
        let mut c = EventsFunctionsContainer::new();
        c.push_new("Jump");
        c.push_new("Run");
        let rows = visible_rows(&c, "zzz", &NameContains::default());
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_add_new());

        let rows = visible_rows(&c, "", &NameContains::default());
        assert_eq!(rows.len(), 3);
        assert!(rows[2].is_add_new());
        assert_eq!(rows[1].function().map(|f| f.name()), Some("Run"));
    }

    #[test]
    fn view_drops_stale_references() {
        let mut c = EventsFunctionsContainer::new();
        let a = c.push_new("A");
        let gone = c.push_new("Gone");
        c.remove(gone);

        let view = ListView::build(
            &c,
            &NameContains::default(),
            "",
            "Add",
            Some(gone),
            Some(gone),
        );
        assert_eq!(view.selected, None);
        assert_eq!(view.renamed, None);

        let view = ListView::build(&c, &NameContains::default(), "", "Add", Some(a), Some(a));
        assert!(view.is_selected(a));
        assert!(view.is_renamed(a));
    }
}

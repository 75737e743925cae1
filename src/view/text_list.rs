//! Line-per-row rendering of the list.

use super::ListWidget;
use crate::model::ListKey;
use crate::state::{ListView, Row};

/// Renders each refresh into text lines and counts widget requests.
///
/// Row format: a `>` marker on the selected row, the visible row number, then
/// the name. The row in rename mode shows its name in brackets. The add row
/// shows `+` and its label.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextList {
    key: Option<ListKey>,
    lines: Vec<String>,
    mounts: usize,
    layout_requests: usize,
    refreshes: usize,
}

impl TextList {
    /// Empty widget, mounted on nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// List currently mounted.
    pub fn key(&self) -> Option<ListKey> {
        self.key
    }

    /// Rendered rows.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Last rendered frame, one row per line.
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// How often the widget was remounted.
    pub fn mounts(&self) -> usize {
        self.mounts
    }

    /// How often a layout recompute was requested.
    pub fn layout_requests(&self) -> usize {
        self.layout_requests
    }

    /// How many snapshots were pushed.
    pub fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl ListWidget for TextList {
    fn remount(&mut self, key: ListKey) {
        self.key = Some(key);
        self.lines.clear();
        self.mounts += 1;
    }

    fn recompute_layout(&mut self) {
        self.layout_requests += 1;
    }

    fn refresh(&mut self, view: &ListView<'_>) {
        self.refreshes += 1;
        self.lines = view
            .rows
            .iter()
            .enumerate()
            .map(|(row, item)| render_row(view, row, item))
            .collect();
    }
}

fn render_row(view: &ListView<'_>, row: usize, item: &Row<'_>) -> String {
    match item {
        Row::Function { function, .. } => {
            let marker = if view.is_selected(function.id()) { '>' } else { ' ' };
            if view.is_renamed(function.id()) {
                format!("{marker} {row} [{}]", function.name())
            } else {
                format!("{marker} {row} {}", function.name())
            }
        }
        Row::AddNew => format!("  {row} + {}", view.add_label),
    }
}

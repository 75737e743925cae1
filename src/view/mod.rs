//! List widget contract, the ratatui front end and a plain text widget.
//!
//! The controller never draws. It pushes [`ListView`] snapshots to a widget
//! and tells it when its row layout must be recomputed or when it has to be
//! mounted again for a different list.

pub mod app;
pub mod functions_list;
pub mod text_list;

pub use app::{run_tui, TuiApp, TuiError};
pub use functions_list::FunctionsList;
pub use text_list::TextList;

use crate::model::ListKey;
use crate::state::ListView;

/// List widget driven by the controller.
pub trait ListWidget {
    /// Drop all widget state and start displaying the list identified by `key`.
    fn remount(&mut self, key: ListKey);

    /// Row shapes changed (a row entered or left edit mode); re-measure rows.
    fn recompute_layout(&mut self);

    /// Show a new snapshot of the list.
    fn refresh(&mut self, view: &ListView<'_>);
}

/// Headless widget for embedding without any display.
impl ListWidget for () {
    fn remount(&mut self, _key: ListKey) {}

    fn recompute_layout(&mut self) {}

    fn refresh(&mut self, _view: &ListView<'_>) {}
}

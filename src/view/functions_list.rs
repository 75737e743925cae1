//! Scrolling ratatui list of the functions.

use super::ListWidget;
use crate::model::ListKey;
use crate::state::{ListView, Row};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

/// Full-screen list widget.
///
/// Only the rows that fit the area are drawn. The scroll offset lives in a
/// [`ListState`] and follows the cursor; [`ListWidget::recompute_layout`]
/// resets it so the next frame measures from the top again.
#[derive(Debug, Default)]
pub struct FunctionsList {
    key: Option<ListKey>,
    items: Vec<ListItem<'static>>,
    state: ListState,
}

impl FunctionsList {
    /// Empty widget, mounted on nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// List currently mounted.
    pub fn key(&self) -> Option<ListKey> {
        self.key
    }

    /// Number of rows, add row included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been shown yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Move the cursor, clamped to the last row.
    pub fn set_cursor(&mut self, row: Option<usize>) {
        let last = self.items.len().checked_sub(1);
        self.state
            .select(row.and_then(|row| last.map(|last| row.min(last))));
    }

    /// First row drawn.
    pub fn offset(&self) -> usize {
        self.state.offset()
    }
}

impl ListWidget for FunctionsList {
    fn remount(&mut self, key: ListKey) {
        self.key = Some(key);
        self.items.clear();
        self.state = ListState::default();
    }

    fn recompute_layout(&mut self) {
        *self.state.offset_mut() = 0;
    }

    fn refresh(&mut self, view: &ListView<'_>) {
        self.items = view.rows.iter().map(|row| list_item(view, row)).collect();

        let selected_row = view.rows.iter().position(|row| {
            row.function_id()
                .is_some_and(|function| view.is_selected(function))
        });
        match selected_row {
            Some(row) => self.state.select(Some(row)),
            None => self.set_cursor(self.state.selected()),
        }
    }
}

fn list_item(view: &ListView<'_>, row: &Row<'_>) -> ListItem<'static> {
    match row {
        Row::Function { function, .. } if view.is_renamed(function.id()) => {
            ListItem::new(Line::from(format!("[{}]", function.name())))
                .style(Style::default().fg(Color::Yellow))
        }
        Row::Function { function, .. } => ListItem::new(Line::from(function.name().to_string())),
        Row::AddNew => ListItem::new(Line::from(format!("+ {}", view.add_label))).style(
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ),
    }
}

impl Widget for &mut FunctionsList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let list = List::new(self.items.iter().cloned())
            .highlight_symbol("> ")
            .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
        StatefulWidget::render(list, area, buf, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventsFunctionsContainer;
    use crate::state::NameContains;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area();
        let mut lines = Vec::new();
        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn draw(widget: &mut FunctionsList, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(&mut *widget, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn numbered(count: usize) -> EventsFunctionsContainer {
        let mut c = EventsFunctionsContainer::new();
        for i in 0..count {
            c.push_new(format!("F{i}"));
        }
        c
    }

    #[test]
    fn renders_cursor_rename_and_add_row() {
        let mut c = EventsFunctionsContainer::new();
        let jump = c.push_new("Jump");
        let run = c.push_new("Run");
        let view = ListView::build(
            &c,
            &NameContains::default(),
            "",
            "Add a new function",
            Some(run),
            Some(jump),
        );

        let mut widget = FunctionsList::new();
        widget.refresh(&view);
        insta::assert_snapshot!(draw(&mut widget, 30, 3), @r"
        > Jump
          [Run]
          + Add a new function
        ");
        assert_eq!(widget.cursor(), Some(0));
    }

    #[test]
    fn only_rows_around_the_cursor_are_drawn() {
        let c = numbered(9);
        let view = ListView::build(&c, &NameContains::default(), "", "Add", None, None);

        let mut widget = FunctionsList::new();
        widget.refresh(&view);
        assert_eq!(widget.len(), 10);
        widget.set_cursor(Some(8));

        let screen = draw(&mut widget, 20, 3);
        assert_eq!(screen, "  F6\n  F7\n> F8");
        assert_eq!(widget.offset(), 6);

        widget.recompute_layout();
        assert_eq!(widget.offset(), 0);
    }

    #[test]
    fn cursor_follows_the_selection_and_stays_in_range() {
        let mut c = numbered(3);
        let last = c.at(2).map(|f| f.id());
        let view = ListView::build(&c, &NameContains::default(), "", "Add", None, last);

        let mut widget = FunctionsList::new();
        widget.refresh(&view);
        assert_eq!(widget.cursor(), Some(2));

        for index in [2, 1] {
            let id = c.at(index).map(|f| f.id()).unwrap();
            c.remove(id);
        }
        let view = ListView::build(&c, &NameContains::default(), "", "Add", None, None);
        widget.refresh(&view);
        assert_eq!(widget.cursor(), Some(1), "clamped onto the add row");
    }

    #[test]
    fn remount_forgets_rows_and_scroll() {
        let c = numbered(5);
        let view = ListView::build(&c, &NameContains::default(), "", "Add", None, None);

        let mut widget = FunctionsList::new();
        widget.refresh(&view);
        widget.set_cursor(Some(4));
        draw(&mut widget, 10, 2);

        widget.remount(c.list_key());
        assert!(widget.is_empty());
        assert_eq!(widget.cursor(), None);
        assert_eq!(widget.offset(), 0);
        assert_eq!(widget.key(), Some(c.list_key()));
    }
}

//! Line console over one extension's functions list.
//!
//! Used when input is piped or `--plain` is given. Deletes wait for a
//! `yes` or `no` line.

use crate::command::{Command, CommandError, HELP};
use crate::model::{EventsFunctionsContainer, FunctionId};
use crate::session::{describe_delete, describe_rename, Session, SessionError};
use crate::state::{DeleteOutcome, EventsFunctionsList, Row};
use crate::view::TextList;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Line-oriented front end: one command per input line, rows printed after
/// every change.
impl Session<TextList> {
    /// Read commands from `input` until it ends or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.print_rows(out)?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.execute(command, out)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => report_parse_error(&err, out)?,
            }
        }
        Ok(())
    }

    /// Run one command. Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        debug!(?command, "Executing command");
        match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Save => {
                self.save_and_report(out)?;
                return Ok(true);
            }
            _ => {}
        }

        let Some((functions, host, list)) = self.parts() else {
            writeln!(out, "The listed extension no longer exists.")?;
            return Ok(false);
        };

        let mut show_rows = true;
        match command {
            Command::List => list.refresh(functions, &*host),
            Command::Search(text) => list.set_search_text(functions, &*host, text),
            Command::Add => {
                let id = list.add_new(functions, &*host);
                writeln!(out, "Added {}", name_of(functions, id))?;
            }
            Command::Click(row) => {
                if list.activate_row(functions, host, row).is_none() {
                    writeln!(out, "No row {row}")?;
                }
            }
            Command::Select(row) => match function_on_row(list, functions, row) {
                Some(id) => list.select(functions, host, Some(id)),
                None => writeln!(out, "No function on row {row}")?,
            },
            Command::Unselect => list.select(functions, host, None),
            Command::Rename(row) => match function_on_row(list, functions, row) {
                Some(id) => list.begin_rename(functions, &*host, Some(id)),
                None => writeln!(out, "No function on row {row}")?,
            },
            Command::Commit(name) => match list.renamed() {
                Some(id) => {
                    let outcome = list.commit_rename(functions, host, id, &name);
                    writeln!(out, "{}", describe_rename(outcome))?;
                }
                None => writeln!(out, "Nothing is being renamed")?,
            },
            Command::Cancel => list.begin_rename(functions, &*host, None),
            Command::Delete(row) => match function_on_row(list, functions, row) {
                Some(id) => {
                    let name = name_of(functions, id);
                    if list.delete(functions, host, id) == DeleteOutcome::Pending {
                        writeln!(out, "Remove {name}? (yes/no)")?;
                        show_rows = false;
                    }
                }
                None => writeln!(out, "No function on row {row}")?,
            },
            Command::Answer(confirmed) => match host.take_pending_delete() {
                Some(request) => {
                    let outcome = list.resolve_delete(functions, host, request, confirmed);
                    writeln!(out, "{}", describe_delete(outcome))?;
                }
                None => writeln!(out, "Nothing to confirm")?,
            },
            Command::Move { from, to } => {
                if !list.reorder(functions, &*host, from, to) {
                    writeln!(out, "Nothing moved")?;
                }
            }
            Command::Menu(row) => {
                show_rows = false;
                match list.context_menu(functions, row) {
                    Some(menu) => {
                        for (index, item) in menu.iter().enumerate() {
                            writeln!(out, "{index} {}", item.label)?;
                        }
                    }
                    None => writeln!(out, "No menu on row {row}")?,
                }
            }
            Command::MenuItem { row, item } => {
                let action = list
                    .context_menu(functions, row)
                    .and_then(|menu| menu.get(item).map(|entry| entry.action));
                match action {
                    Some(action) => {
                        if list.run_menu_action(functions, host, action) == Some(DeleteOutcome::Pending)
                        {
                            writeln!(out, "Remove? (yes/no)")?;
                            show_rows = false;
                        }
                    }
                    None => writeln!(out, "No menu entry {item} on row {row}")?,
                }
            }
            Command::Options => {
                list.edit_options(host);
                show_rows = false;
            }
            Command::Quit | Command::Help | Command::Save => {}
        }

        for message in self.host_mut().drain_messages() {
            writeln!(out, "{message}")?;
        }
        if show_rows {
            self.print_rows(out)?;
        }
        Ok(true)
    }

    fn save_and_report(&self, out: &mut impl Write) -> io::Result<()> {
        match self.save() {
            Ok(path) => writeln!(out, "Saved {}", path.display()),
            Err(err @ SessionError::NoProjectFile) => writeln!(out, "{err}"),
            Err(err) => writeln!(out, "error: {err}"),
        }
    }

    fn print_rows(&self, out: &mut impl Write) -> io::Result<()> {
        let list = self.list();
        if !list.search_text().is_empty() {
            writeln!(out, "search: {}", list.search_text())?;
        }
        writeln!(out, "{}", list.widget().render())
    }
}

fn function_on_row(
    list: &EventsFunctionsList<TextList>,
    functions: &EventsFunctionsContainer,
    row: usize,
) -> Option<FunctionId> {
    list.visible_rows(functions).get(row).and_then(Row::function_id)
}

fn name_of(functions: &EventsFunctionsContainer, id: FunctionId) -> String {
    functions
        .get(id)
        .map(|f| f.name().to_string())
        .unwrap_or_default()
}

fn report_parse_error(err: &CommandError, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "error: {err} (type `help`)")
}

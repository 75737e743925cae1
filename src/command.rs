//! Line-oriented commands for driving a list from a terminal.
//!
//! Row numbers always refer to visible rows, as displayed by `list`.

use thiserror::Error;

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current rows.
    List,
    /// Set the search text; no argument clears it.
    Search(String),
    /// Add a new function.
    Add,
    /// Click a row: select a function or add one from the add row.
    Click(usize),
    /// Select the function on a row.
    Select(usize),
    /// Clear the selection.
    Unselect,
    /// Enter rename mode for a row.
    Rename(usize),
    /// Commit the rename in progress with a new name.
    Commit(String),
    /// Leave rename mode without renaming.
    Cancel,
    /// Ask to delete the function on a row.
    Delete(usize),
    /// Answer the pending confirmation.
    Answer(bool),
    /// Drag a row to another position.
    Move {
        /// Row dragged.
        from: usize,
        /// Row dropped on.
        to: usize,
    },
    /// Show a row's context menu.
    Menu(usize),
    /// Run entry `item` of a row's context menu.
    MenuItem {
        /// Row whose menu is used.
        row: usize,
        /// Entry index in the menu.
        item: usize,
    },
    /// Open the extension options.
    Options,
    /// Write the project back to disk.
    Save,
    /// Print command help.
    Help,
    /// Leave the session.
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a command.
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// A required argument was not given.
    #[error("Missing argument for {command}: expected {expected}")]
    MissingArgument {
        /// Command that needed it.
        command: &'static str,
        /// What was expected.
        expected: &'static str,
    },

    /// A row argument is not a number.
    #[error("Invalid row number {value:?} for {command}")]
    InvalidRow {
        /// Command that took the row.
        command: &'static str,
        /// Text given instead of a row number.
        value: String,
    },
}

/// Short usage text for `help`.
pub const HELP: &str = "\
list                 show rows
search [TEXT]        filter by name (no text clears)
add                  add a new function
click N              click row N (the add row adds a function)
select N | unselect  change selection
rename N             start renaming row N
commit NAME          finish the rename in progress
cancel               stop renaming
delete N             ask to delete row N
yes | no             answer a pending confirmation
move FROM TO         drag row FROM to row TO
menu N [ITEM]        show or run row N's context menu
options              edit extension options
save                 write the project file
quit                 leave";

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "list" | "ls" => Command::List,
            "search" => Command::Search(rest.to_string()),
            "add" => Command::Add,
            "click" => Command::Click(row("click", rest)?),
            "select" => Command::Select(row("select", rest)?),
            "unselect" => Command::Unselect,
            "rename" => Command::Rename(row("rename", rest)?),
            // The name is taken verbatim, so an empty or spaced name can be committed.
            "commit" => Command::Commit(rest.to_string()),
            "cancel" => Command::Cancel,
            "delete" | "rm" => Command::Delete(row("delete", rest)?),
            "yes" | "y" => Command::Answer(true),
            "no" | "n" => Command::Answer(false),
            "move" | "mv" => {
                let mut args = rest.split_whitespace();
                let from = row("move", args.next().unwrap_or(""))?;
                let to = row("move", args.next().unwrap_or(""))?;
                Command::Move { from, to }
            }
            "menu" => {
                let mut args = rest.split_whitespace();
                let target = row("menu", args.next().unwrap_or(""))?;
                match args.next() {
                    Some(item) => Command::MenuItem {
                        row: target,
                        item: row("menu", item)?,
                    },
                    None => Command::Menu(target),
                }
            }
            "options" => Command::Options,
            "save" => Command::Save,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn row(command: &'static str, value: &str) -> Result<usize, CommandError> {
    if value.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            expected: "row number",
        });
    }
    value.parse().map_err(|_| CommandError::InvalidRow {
        command,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Command {
        Command::parse(line).unwrap().unwrap()
    }

    #[test]
    fn blank_line_is_none() {
        assert_eq!(Command::parse("   "), Ok(None));
    }

    #[test]
    fn simple_commands() {
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("add"), Command::Add);
        assert_eq!(parse("y"), Command::Answer(true));
        assert_eq!(parse("no"), Command::Answer(false));
        assert_eq!(parse("quit"), Command::Quit);
    }

    #[test]
    fn search_keeps_inner_spaces_and_allows_empty() {
        assert_eq!(parse("search  double jump "), Command::Search("double jump".to_string()));
        assert_eq!(parse("search"), Command::Search(String::new()));
    }

    #[test]
    fn commit_takes_rest_of_line() {
        assert_eq!(parse("commit On Landed"), Command::Commit("On Landed".to_string()));
        assert_eq!(parse("commit"), Command::Commit(String::new()));
    }

    #[test]
    fn row_arguments() {
        assert_eq!(parse("rename 2"), Command::Rename(2));
        assert_eq!(parse("mv 3 0"), Command::Move { from: 3, to: 0 });
        assert_eq!(parse("menu 1"), Command::Menu(1));
        assert_eq!(parse("menu 1 0"), Command::MenuItem { row: 1, item: 0 });
    }

    #[test]
    fn missing_and_invalid_rows() {
        assert_eq!(
            Command::parse("delete"),
            Err(CommandError::MissingArgument {
                command: "delete",
                expected: "row number"
            })
        );
        assert_eq!(
            Command::parse("select x"),
            Err(CommandError::InvalidRow {
                command: "select",
                value: "x".to_string()
            })
        );
        assert!(Command::parse("move 1").is_err());
    }

    #[test]
    fn unknown_command() {
        assert_eq!(
            Command::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }
}

//! Replay scripts - line-oriented navigation commands for headless mode
//!
//! ```text
//! # comments and blank lines are skipped
//! select 1
//! back
//! menu open
//! goto settings
//! ```

use std::fmt;

use folio_app::catalog::find_item;
use folio_app::Message;
use folio_core::prelude::*;
use folio_core::Destination;

/// Side menu sub-commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Open,
    Close,
    Toggle,
}

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `select <item-id>`
    Select(String),
    /// `back`
    Back,
    /// `goto <list|settings|planning>`
    Goto(Destination),
    /// `menu <open|close|toggle>`
    Menu(MenuCommand),
}

impl Command {
    /// Parse a single line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Command>> {
        let text = text.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            return Ok(None);
        }

        let mut words = text.split_whitespace();
        let verb = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next();
        if let Some(extra) = words.next() {
            return Err(Error::script(line, format!("unexpected argument '{extra}'")));
        }

        let command = match (verb.as_str(), arg) {
            ("select", Some(id)) => Command::Select(id.to_string()),
            ("select", None) => return Err(Error::script(line, "select needs a ticket id")),
            ("back", None) => Command::Back,
            ("goto", Some(dest)) => Command::Goto(
                dest.parse::<Destination>()
                    .map_err(|e| Error::script(line, e))?,
            ),
            ("goto", None) => return Err(Error::script(line, "goto needs a destination")),
            ("menu", Some(action)) => Command::Menu(match action.to_ascii_lowercase().as_str() {
                "open" => MenuCommand::Open,
                "close" => MenuCommand::Close,
                "toggle" => MenuCommand::Toggle,
                other => {
                    return Err(Error::script(
                        line,
                        format!("unknown menu action '{other}'"),
                    ))
                }
            }),
            ("menu", None) => return Err(Error::script(line, "menu needs open, close or toggle")),
            ("back", Some(arg)) => {
                return Err(Error::script(line, format!("unexpected argument '{arg}'")))
            }
            (other, _) => return Err(Error::script(line, format!("unknown command '{other}'"))),
        };

        Ok(Some(command))
    }

    /// Turn the command into a state machine message, resolving ticket ids
    /// against the catalog.
    pub fn into_message(self) -> Result<Message> {
        Ok(match self {
            Command::Select(id) => {
                Message::SelectItem(find_item(&id).ok_or_else(|| Error::unknown_item(id))?)
            }
            Command::Back => Message::GoBack,
            Command::Goto(dest) => Message::NavigateTo(dest),
            Command::Menu(MenuCommand::Open) => Message::OpenMenu,
            Command::Menu(MenuCommand::Close) => Message::CloseMenu,
            Command::Menu(MenuCommand::Toggle) => Message::ToggleMenu,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Select(id) => write!(f, "select {id}"),
            Command::Back => f.write_str("back"),
            Command::Goto(dest) => write!(f, "goto {dest}"),
            Command::Menu(MenuCommand::Open) => f.write_str("menu open"),
            Command::Menu(MenuCommand::Close) => f.write_str("menu close"),
            Command::Menu(MenuCommand::Toggle) => f.write_str("menu toggle"),
        }
    }
}

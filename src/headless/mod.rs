//! Headless mode - JSON event output for the navigation prototype
//!
//! Replays a navigation script against a fresh [`NavigationState`] and emits
//! one JSON event per observable change, so the prototype's behaviour can be
//! checked from scripts without a browser.
//!
//! # Event Format
//!
//! Events are NDJSON (newline-delimited JSON), one event per line, each with
//! an "event" field naming its type.
//!
//! ```json
//! {"event":"started","screen":"list","timestamp":1704700001000}
//! {"event":"screen_changed","from":"list","to":"detail","title":"Ticket","item":"The Nutcracker","transition_ms":400,"timestamp":1704700001002}
//! {"event":"finished","screen":"detail","item":"The Nutcracker","menu_open":false,"timestamp":1704700001003}
//! ```
//!
//! [`NavigationState`]: folio_app::NavigationState

pub mod runner;

use std::io::Write;

use chrono::Utc;
use serde::Serialize;

use folio_core::prelude::*;
use folio_core::ScreenId;

pub use runner::run_replay;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A fresh state was mounted
    Started { screen: ScreenId, timestamp: i64 },

    /// The active screen changed
    ScreenChanged {
        from: ScreenId,
        to: ScreenId,
        /// Header title of the new screen
        title: String,
        /// Selected ticket title, if the new screen shows one
        item: Option<String>,
        /// How long the cross-fade runs
        transition_ms: u32,
        timestamp: i64,
    },

    /// The side menu opened or closed
    MenuChanged { open: bool, timestamp: i64 },

    /// A script line changed nothing, or could not be applied
    Ignored {
        line: usize,
        command: String,
        reason: String,
        timestamp: i64,
    },

    /// The script ended
    Finished {
        screen: ScreenId,
        item: Option<String>,
        menu_open: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    pub fn started(screen: ScreenId) -> Self {
        Self::Started {
            screen,
            timestamp: now_millis(),
        }
    }

    pub fn screen_changed(
        from: ScreenId,
        to: ScreenId,
        title: impl Into<String>,
        item: Option<String>,
        transition_ms: u32,
    ) -> Self {
        Self::ScreenChanged {
            from,
            to,
            title: title.into(),
            item,
            transition_ms,
            timestamp: now_millis(),
        }
    }

    pub fn menu_changed(open: bool) -> Self {
        Self::MenuChanged {
            open,
            timestamp: now_millis(),
        }
    }

    pub fn ignored(line: usize, command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Ignored {
            line,
            command: command.into(),
            reason: reason.into(),
            timestamp: now_millis(),
        }
    }

    pub fn finished(screen: ScreenId, item: Option<String>, menu_open: bool) -> Self {
        Self::Finished {
            screen,
            item,
            menu_open,
            timestamp: now_millis(),
        }
    }

    /// Write this event as one JSON line
    pub fn emit_to<W: Write>(&self, out: &mut W) -> Result<()> {
        serde_json::to_writer(&mut *out, self)?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tagging() {
        let mut out = Vec::new();
        HeadlessEvent::menu_changed(true).emit_to(&mut out).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert!(line.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["event"], "menu_changed");
        assert_eq!(value["open"], true);
        assert!(value["timestamp"].as_i64().unwrap() > 0);
    }

    #[test]
    fn test_screen_ids_serialize_snake_case() {
        let event = HeadlessEvent::screen_changed(
            ScreenId::List,
            ScreenId::Detail,
            "Ticket",
            Some("Giselle".into()),
            400,
        );
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["from"], "list");
        assert_eq!(value["to"], "detail");
        assert_eq!(value["item"], "Giselle");
    }
}

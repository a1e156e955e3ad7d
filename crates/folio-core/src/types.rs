//! Domain types for the ticket prototype shown inside the phone mockup

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier for each navigable view inside the mini-app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenId {
    /// Ticket list (entry screen)
    #[default]
    List,
    /// Ticket detail with its QR code
    Detail,
    /// App settings
    Settings,
    /// Visit planning
    Planning,
}

impl ScreenId {
    /// Every screen, in menu order
    pub const ALL: [ScreenId; 4] = [
        ScreenId::List,
        ScreenId::Detail,
        ScreenId::Settings,
        ScreenId::Planning,
    ];

    /// Stable key, also used to key the cross-fade animation
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenId::List => "list",
            ScreenId::Detail => "detail",
            ScreenId::Settings => "settings",
            ScreenId::Planning => "planning",
        }
    }

    /// Title shown in the mini-app header
    pub fn label(self) -> &'static str {
        match self {
            ScreenId::List => "My Tickets",
            ScreenId::Detail => "Ticket",
            ScreenId::Settings => "Settings",
            ScreenId::Planning => "Plan your visit",
        }
    }

    /// The menu destination for this screen, if it can be navigated to directly
    pub fn destination(self) -> Option<Destination> {
        match self {
            ScreenId::List => Some(Destination::List),
            ScreenId::Detail => None,
            ScreenId::Settings => Some(Destination::Settings),
            ScreenId::Planning => Some(Destination::Planning),
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(ScreenId::List),
            "detail" => Ok(ScreenId::Detail),
            "settings" => Ok(ScreenId::Settings),
            "planning" => Ok(ScreenId::Planning),
            other => Err(format!("unknown screen '{other}'")),
        }
    }
}

/// A screen reachable from the side menu.
///
/// The detail view needs a selected ticket, so it can only be entered by
/// selecting an item from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    List,
    Settings,
    Planning,
}

impl Destination {
    /// Menu entries, top to bottom
    pub const ALL: [Destination; 3] = [
        Destination::List,
        Destination::Settings,
        Destination::Planning,
    ];

    pub fn screen(self) -> ScreenId {
        match self {
            Destination::List => ScreenId::List,
            Destination::Settings => ScreenId::Settings,
            Destination::Planning => ScreenId::Planning,
        }
    }
}

impl From<Destination> for ScreenId {
    fn from(dest: Destination) -> Self {
        dest.screen()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.screen().fmt(f)
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let screen = s.parse::<ScreenId>()?;
        screen
            .destination()
            .ok_or_else(|| format!("'{screen}' cannot be navigated to directly"))
    }
}

/// A ticket for a performance, supplied by the host as static data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub seats: String,
    pub image_ref: String,
}

impl Item {
    /// Payload rendered into the ticket's QR code
    pub fn qr_payload(&self) -> String {
        format!("TICKET|{}|{}|{}|{}", self.id, self.date, self.time, self.seats)
    }
}

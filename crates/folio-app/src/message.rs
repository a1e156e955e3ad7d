//! Message types for the navigation state machine (TEA pattern)

use folio_core::{Destination, Item};

/// All user interactions the mini-app reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A ticket was tapped in the list
    SelectItem(Item),

    /// Back arrow on the detail view
    GoBack,

    /// A destination was chosen from the side menu
    NavigateTo(Destination),

    // ─────────────────────────────────────────────────────────
    // Side Menu Messages
    // ─────────────────────────────────────────────────────────
    /// Open the side menu over the active screen
    OpenMenu,
    /// Close the side menu
    CloseMenu,
    /// Hamburger button: open if closed, close if open
    ToggleMenu,
}

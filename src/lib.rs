//! Folio Library
//!
//! Headless driver for the portfolio's phone-mockup prototype: prints the
//! overlay placement of the device frame and replays navigation scripts
//! against the ticket mini-app's state machine.

pub mod headless;
pub mod placement;
pub mod script;

// Re-export main entry points
pub use headless::{run_replay, HeadlessEvent};
pub use placement::{render_placement, PlacementFormat};
pub use script::Command;

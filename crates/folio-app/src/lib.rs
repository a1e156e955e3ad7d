//! folio-app - Navigation state and configuration for the Folio phone mockup
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! ticket prototype's navigation: [`NavigationState`] is the model,
//! [`Message`] the events, and [`update()`] the only way to move between
//! screens. It also holds the screen registry the host renders through,
//! configuration loading, and the mock ticket catalog.

pub mod catalog;
pub mod config;
pub mod handler;
pub mod message;
pub mod registry;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use registry::{MissingScreenPolicy, Resolved, ScreenRegistry};
pub use state::NavigationState;

// Re-export core types for hosts
pub use folio_core::{Destination, Item, OverlayPlacement, ScreenId};

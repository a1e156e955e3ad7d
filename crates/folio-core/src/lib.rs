//! # folio-core - Core Domain Types
//!
//! Foundation crate for the Folio phone mockup. Provides the device frame
//! geometry, the mini-app's domain types, and error handling.
//!
//! ## Public API
//!
//! ### Geometry (`geometry`)
//! - [`DeviceFrameRect`] - Pixel geometry of a device illustration and its screen
//! - [`OverlayPlacement`] - Percentage placement of the screen overlay
//! - [`compute_overlay_placement()`] - Validate a frame and derive its placement
//! - [`IPHONE_FRAME`] - Reference illustration used by the website
//!
//! ### Domain Types (`types`)
//! - [`ScreenId`] - Every navigable view of the ticket mini-app
//! - [`Destination`] - Views reachable from the side menu
//! - [`Item`] - A ticket record
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod geometry;
#[cfg(feature = "logging")]
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout the Folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use geometry::{
    compute_overlay_placement, CornerRadius, DeviceFrameRect, OverlayPlacement, IPHONE_FRAME,
};
pub use types::{Destination, Item, ScreenId};

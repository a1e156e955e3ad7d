//! Device frame geometry
//!
//! The phone mockup is an SVG illustration drawn in a fixed pixel coordinate
//! system. Interactive content is laid over the illustration's screen area
//! with an absolutely positioned element whose box is expressed in
//! percentages of the illustration's own box, so the overlay stays aligned at
//! any rendered size.
//!
//! Border radius percentages in CSS are relative to the element's own box, so
//! the corner radius is expressed against the inset screen rectangle rather
//! than the outer frame.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Corner radius of the inset screen, in source pixels (may be elliptical)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    pub rx: f64,
    pub ry: f64,
}

impl CornerRadius {
    pub const fn circular(r: f64) -> Self {
        Self { rx: r, ry: r }
    }
}

/// Pixel geometry of a device illustration and its inset screen region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceFrameRect {
    /// Outer width of the illustration
    pub width: f64,
    /// Outer height of the illustration
    pub height: f64,
    /// Left edge of the screen rectangle
    pub x: f64,
    /// Top edge of the screen rectangle
    pub y: f64,
    pub screen_width: f64,
    pub screen_height: f64,
    pub radius: CornerRadius,
}

/// Reference iPhone illustration used by the portfolio mockup
pub const IPHONE_FRAME: DeviceFrameRect = DeviceFrameRect {
    width: 433.0,
    height: 882.0,
    x: 21.25,
    y: 19.25,
    screen_width: 389.5,
    screen_height: 843.5,
    radius: CornerRadius::circular(55.75),
};

impl Default for DeviceFrameRect {
    fn default() -> Self {
        IPHONE_FRAME
    }
}

impl DeviceFrameRect {
    /// Check that the screen rectangle lies inside the outer frame.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("screen_width", self.screen_width)?;
        positive("screen_height", self.screen_height)?;
        non_negative("x", self.x)?;
        non_negative("y", self.y)?;
        non_negative("radius.rx", self.radius.rx)?;
        non_negative("radius.ry", self.radius.ry)?;

        if self.x + self.screen_width > self.width {
            return Err(Error::invalid_geometry(format!(
                "screen spans x {}..{} but the frame is only {} wide",
                self.x,
                self.x + self.screen_width,
                self.width
            )));
        }
        if self.y + self.screen_height > self.height {
            return Err(Error::invalid_geometry(format!(
                "screen spans y {}..{} but the frame is only {} tall",
                self.y,
                self.y + self.screen_height,
                self.height
            )));
        }
        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_geometry(format!(
            "{field} must be a positive number, got {value}"
        )))
    }
}

fn non_negative(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_geometry(format!(
            "{field} must be zero or positive, got {value}"
        )))
    }
}

/// Percentage placement of the screen overlay inside the frame's rendered box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverlayPlacement {
    pub left_pct: f64,
    pub top_pct: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    pub radius_x_pct: f64,
    pub radius_y_pct: f64,
}

impl OverlayPlacement {
    /// Placement for [`IPHONE_FRAME`]
    pub fn iphone() -> Self {
        place(&IPHONE_FRAME)
    }

    /// Inline CSS declarations for the overlay element
    pub fn to_css(&self) -> String {
        format!(
            "position:absolute;left:{:.4}%;top:{:.4}%;width:{:.4}%;height:{:.4}%;border-radius:{:.4}% / {:.4}%;",
            self.left_pct,
            self.top_pct,
            self.width_pct,
            self.height_pct,
            self.radius_x_pct,
            self.radius_y_pct
        )
    }
}

/// Convert a device frame into percentage placement values.
///
/// Returns [`Error::InvalidFrameGeometry`] when the frame violates its
/// invariants. Pure and deterministic: equal frames always produce equal
/// placements.
pub fn compute_overlay_placement(frame: &DeviceFrameRect) -> Result<OverlayPlacement> {
    frame.validate()?;
    Ok(place(frame))
}

fn place(frame: &DeviceFrameRect) -> OverlayPlacement {
    OverlayPlacement {
        left_pct: frame.x / frame.width * 100.0,
        top_pct: frame.y / frame.height * 100.0,
        width_pct: frame.screen_width / frame.width * 100.0,
        height_pct: frame.screen_height / frame.height * 100.0,
        radius_x_pct: frame.radius.rx / frame.screen_width * 100.0,
        radius_y_pct: frame.radius.ry / frame.screen_height * 100.0,
    }
}

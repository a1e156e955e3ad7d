//! Overlay placement output for the `placement` subcommand

use folio_core::prelude::*;
use folio_core::{compute_overlay_placement, DeviceFrameRect};

/// Output format for the overlay placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum PlacementFormat {
    /// Inline CSS declarations
    #[default]
    Css,
    /// Pretty-printed JSON object
    Json,
}

/// Render the overlay placement of `frame` in the requested format
pub fn render_placement(frame: &DeviceFrameRect, format: PlacementFormat) -> Result<String> {
    let placement = compute_overlay_placement(frame)?;
    match format {
        PlacementFormat::Css => Ok(placement.to_css()),
        PlacementFormat::Json => Ok(serde_json::to_string_pretty(&placement)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::IPHONE_FRAME;

    #[test]
    fn test_render_json() {
        let json = render_placement(&IPHONE_FRAME, PlacementFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let width = value["width_pct"].as_f64().unwrap();
        assert!((width - 89.95).abs() < 0.01);
    }

    #[test]
    fn test_render_invalid_frame() {
        let frame = DeviceFrameRect {
            width: -1.0,
            ..IPHONE_FRAME
        };
        let err = render_placement(&frame, PlacementFormat::Css).unwrap_err();
        assert!(err.is_fatal());
    }
}

//! Configuration types for Folio
//!
//! Defines:
//! - `Settings` - Contents of `.folio/config.toml`
//! - `TransitionSettings` - Cross-fade policy handed to the animation layer
//! - `RegistrySettings` - Missing screen policy override

use serde::{Deserialize, Serialize};

use folio_core::{DeviceFrameRect, IPHONE_FRAME};

use crate::registry::MissingScreenPolicy;

/// Global settings from `.folio/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Device illustration override; `None` uses [`IPHONE_FRAME`]
    #[serde(default)]
    pub frame: Option<DeviceFrameRect>,

    #[serde(default)]
    pub transition: TransitionSettings,

    #[serde(default)]
    pub registry: RegistrySettings,
}

impl Settings {
    /// The device frame to lay the overlay on.
    ///
    /// An override is returned unvalidated; `compute_overlay_placement`
    /// rejects bad geometry where the frame is used.
    pub fn frame(&self) -> DeviceFrameRect {
        self.frame.unwrap_or(IPHONE_FRAME)
    }

    /// Configured policy, or the build-profile default
    pub fn missing_screen_policy(&self) -> MissingScreenPolicy {
        self.registry.missing_screen.unwrap_or_default()
    }
}

/// How the outgoing and incoming screens overlap during a cross-fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionMode {
    /// Outgoing screen finishes fading out before the next one enters
    #[default]
    Wait,
    /// Both screens fade at the same time
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TransitionSettings {
    #[serde(default)]
    pub mode: TransitionMode,

    /// Duration of a single fade, in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_duration_ms() -> u32 {
    200
}

impl Default for TransitionSettings {
    fn default() -> Self {
        Self {
            mode: TransitionMode::default(),
            duration_ms: default_duration_ms(),
        }
    }
}

impl TransitionSettings {
    /// Time from the start of a screen change until the new screen is fully in
    pub fn total_ms(&self) -> u32 {
        match self.mode {
            TransitionMode::Wait => self.duration_ms.saturating_mul(2),
            TransitionMode::Sync => self.duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RegistrySettings {
    #[serde(default)]
    pub missing_screen: Option<MissingScreenPolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_use_iphone_frame() {
        let settings = Settings::default();
        assert_eq!(settings.frame(), IPHONE_FRAME);
        assert_eq!(settings.transition.mode, TransitionMode::Wait);
        assert_eq!(settings.transition.duration_ms, 200);
    }

    #[test]
    fn test_transition_total_time() {
        let wait = TransitionSettings {
            mode: TransitionMode::Wait,
            duration_ms: 150,
        };
        let sync = TransitionSettings {
            mode: TransitionMode::Sync,
            duration_ms: 150,
        };
        assert_eq!(wait.total_ms(), 300);
        assert_eq!(sync.total_ms(), 150);
    }

    #[test]
    fn test_transition_total_time_saturates() {
        let wait = TransitionSettings {
            mode: TransitionMode::Wait,
            duration_ms: 3_000_000_000,
        };
        assert_eq!(wait.total_ms(), u32::MAX);
    }

    #[test]
    fn test_missing_screen_policy_override() {
        let settings = Settings {
            registry: RegistrySettings {
                missing_screen: Some(MissingScreenPolicy::Placeholder),
            },
            ..Default::default()
        };
        assert_eq!(
            settings.missing_screen_policy(),
            MissingScreenPolicy::Placeholder
        );
    }
}

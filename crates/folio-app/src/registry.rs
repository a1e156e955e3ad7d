//! Screen registry - maps each `ScreenId` to the host's renderer
//!
//! The registry is generic over the renderer type so the website can store
//! view functions while the headless runner stores plain labels.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use folio_core::prelude::*;
use folio_core::ScreenId;

/// What to do when the host registered no renderer for a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingScreenPolicy {
    /// Surface [`Error::MissingScreen`] to the caller
    FailFast,
    /// Render a neutral "unknown view" placeholder instead
    Placeholder,
}

impl Default for MissingScreenPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            MissingScreenPolicy::FailFast
        } else {
            MissingScreenPolicy::Placeholder
        }
    }
}

/// Outcome of resolving a screen against the registry
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved<'a, R> {
    Screen(&'a R),
    Placeholder(ScreenId),
}

#[derive(Debug, Clone)]
pub struct ScreenRegistry<R> {
    screens: HashMap<ScreenId, R>,
}

impl<R> Default for ScreenRegistry<R> {
    fn default() -> Self {
        Self {
            screens: HashMap::new(),
        }
    }
}

impl<R> ScreenRegistry<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, screen: ScreenId, renderer: R) -> Self {
        self.register(screen, renderer);
        self
    }

    /// Register a renderer, returning the one it replaced
    pub fn register(&mut self, screen: ScreenId, renderer: R) -> Option<R> {
        self.screens.insert(screen, renderer)
    }

    pub fn get(&self, screen: ScreenId) -> Result<&R> {
        self.screens
            .get(&screen)
            .ok_or_else(|| Error::missing_screen(screen))
    }

    pub fn contains(&self, screen: ScreenId) -> bool {
        self.screens.contains_key(&screen)
    }

    /// Screens without a renderer, in [`ScreenId::ALL`] order
    pub fn missing(&self) -> Vec<ScreenId> {
        ScreenId::ALL
            .into_iter()
            .filter(|screen| !self.contains(*screen))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Look up the renderer for `screen`, applying `policy` when none exists.
    pub fn resolve(&self, screen: ScreenId, policy: MissingScreenPolicy) -> Result<Resolved<'_, R>> {
        match self.screens.get(&screen) {
            Some(renderer) => Ok(Resolved::Screen(renderer)),
            None => match policy {
                MissingScreenPolicy::FailFast => Err(Error::missing_screen(screen)),
                MissingScreenPolicy::Placeholder => {
                    warn!("No renderer registered for '{}', showing placeholder", screen);
                    Ok(Resolved::Placeholder(screen))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial() -> ScreenRegistry<&'static str> {
        ScreenRegistry::new()
            .with(ScreenId::List, "list")
            .with(ScreenId::Detail, "detail")
    }

    #[test]
    fn test_get_registered_screen() {
        let registry = partial();
        assert_eq!(registry.get(ScreenId::List).unwrap(), &"list");
    }

    #[test]
    fn test_get_missing_screen_errors() {
        let err = partial().get(ScreenId::Planning).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingScreen {
                screen: ScreenId::Planning
            }
        ));
    }

    #[test]
    fn test_missing_lists_unregistered_screens() {
        let registry = partial();
        assert_eq!(
            registry.missing(),
            vec![ScreenId::Settings, ScreenId::Planning]
        );
        assert!(!registry.is_complete());
    }

    #[test]
    fn test_complete_registry() {
        let registry = partial()
            .with(ScreenId::Settings, "settings")
            .with(ScreenId::Planning, "planning");
        assert!(registry.is_complete());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = partial();
        assert_eq!(registry.register(ScreenId::List, "tickets"), Some("list"));
        assert_eq!(registry.get(ScreenId::List).unwrap(), &"tickets");
    }

    #[test]
    fn test_resolve_fail_fast() {
        let registry = partial();
        assert!(registry
            .resolve(ScreenId::Settings, MissingScreenPolicy::FailFast)
            .is_err());
        assert_eq!(
            registry
                .resolve(ScreenId::Detail, MissingScreenPolicy::FailFast)
                .unwrap(),
            Resolved::Screen(&"detail")
        );
    }

    #[test]
    fn test_resolve_placeholder() {
        let registry = partial();
        assert_eq!(
            registry
                .resolve(ScreenId::Settings, MissingScreenPolicy::Placeholder)
                .unwrap(),
            Resolved::Placeholder(ScreenId::Settings)
        );
    }

    #[test]
    fn test_policy_default_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            MissingScreenPolicy::FailFast
        } else {
            MissingScreenPolicy::Placeholder
        };
        assert_eq!(MissingScreenPolicy::default(), expected);
    }
}

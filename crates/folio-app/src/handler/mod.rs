//! Handler module - TEA update function
//!
//! - `update`: Main update() function and message dispatch

pub(crate) mod update;


use folio_core::ScreenId;

pub use update::update;

/// Follow-up work for the view layer after a message was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateAction {
    /// The active screen changed; cross-fade to the screen keyed by `to`
    AnimateScreen { from: ScreenId, to: ScreenId },

    /// The side menu opened or closed
    AnimateMenu { open: bool },
}

/// Result of processing a message
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Actions in the order the view layer should run them
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: UpdateAction) {
        self.actions.push(action);
    }

    /// True when the message was ignored or changed nothing visible
    pub fn is_noop(&self) -> bool {
        self.actions.is_empty()
    }

    /// The screen transition in this result, if any
    pub fn screen_change(&self) -> Option<(ScreenId, ScreenId)> {
        self.actions.iter().find_map(|action| match action {
            UpdateAction::AnimateScreen { from, to } => Some((*from, *to)),
            UpdateAction::AnimateMenu { .. } => None,
        })
    }
}

//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::NavigationState;

use super::{UpdateAction, UpdateResult};

/// Process a message and update state.
///
/// Returns the animations the view layer must run. Ignored transitions
/// return an empty result.
pub fn update(state: &mut NavigationState, message: Message) -> UpdateResult {
    let screen_before = state.active_screen();
    let menu_before = state.is_menu_open();

    let changed = match message {
        Message::SelectItem(item) => state.select_item(item),
        Message::GoBack => state.go_back(),
        Message::NavigateTo(destination) => state.navigate_to(destination),
        Message::OpenMenu => state.open_menu(),
        Message::CloseMenu => state.close_menu(),
        Message::ToggleMenu => {
            if menu_before {
                state.close_menu()
            } else {
                state.open_menu()
            }
        }
    };

    if !changed {
        return UpdateResult::none();
    }

    let mut result = UpdateResult::none();

    // Menu closes before the next screen fades in
    if state.is_menu_open() != menu_before {
        result.push(UpdateAction::AnimateMenu {
            open: state.is_menu_open(),
        });
    }
    if state.active_screen() != screen_before {
        result.push(UpdateAction::AnimateScreen {
            from: screen_before,
            to: state.active_screen(),
        });
    }

    result
}

//! Navigation state (Model in TEA pattern)

use folio_core::prelude::*;
use folio_core::{Destination, Item, ScreenId};

/// Which screen of the mini-app is shown, and whether the side menu covers it.
///
/// Fields are private so the only way to change the state is through the
/// transitions below, which keep these invariants:
/// - `selected_item` is `Some` only while `active_screen` is [`ScreenId::Detail`]
/// - the menu flag never changes `active_screen` or `selected_item`
///
/// Each transition returns `true` if it changed the state. Transitions that
/// are illegal from the current screen are ignored, since they usually come
/// from a stale click that raced a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_screen: ScreenId,
    selected_item: Option<Item>,
    is_menu_open: bool,
}

impl NavigationState {
    /// Fresh state: ticket list, nothing selected, menu closed
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_screen(&self) -> ScreenId {
        self.active_screen
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_item.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.is_menu_open
    }

    /// Open the detail view for `item`. Only legal from the list.
    pub fn select_item(&mut self, item: Item) -> bool {
        if self.active_screen != ScreenId::List {
            debug!(
                "Ignoring select of '{}' while on {}",
                item.id, self.active_screen
            );
            return false;
        }

        self.active_screen = ScreenId::Detail;
        self.selected_item = Some(item);
        true
    }

    /// Return from the detail view to the list. Only legal from the detail view.
    pub fn go_back(&mut self) -> bool {
        if self.active_screen != ScreenId::Detail {
            debug!("Ignoring back while on {}", self.active_screen);
            return false;
        }

        self.active_screen = ScreenId::List;
        self.selected_item = None;
        true
    }

    /// Jump to a menu destination from any screen.
    ///
    /// Always clears the selection and closes the menu.
    pub fn navigate_to(&mut self, destination: Destination) -> bool {
        let before = (self.active_screen, self.selected_item.is_some(), self.is_menu_open);

        self.active_screen = destination.screen();
        self.selected_item = None;
        self.is_menu_open = false;

        before != (self.active_screen, false, false)
    }

    pub fn open_menu(&mut self) -> bool {
        !std::mem::replace(&mut self.is_menu_open, true)
    }

    pub fn close_menu(&mut self) -> bool {
        std::mem::replace(&mut self.is_menu_open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_items;

    fn first_item() -> Item {
        sample_items().into_iter().next().unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = NavigationState::new();
        assert_eq!(state.active_screen(), ScreenId::List);
        assert!(state.selected_item().is_none());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_select_item_from_list() {
        let mut state = NavigationState::new();
        let item = first_item();

        assert!(state.select_item(item.clone()));

        assert_eq!(state.active_screen(), ScreenId::Detail);
        assert_eq!(state.selected_item(), Some(&item));
    }

    #[test]
    fn test_select_item_twice_is_ignored() {
        let mut state = NavigationState::new();
        let item = first_item();
        state.select_item(item.clone());
        let snapshot = state.clone();

        assert!(!state.select_item(item));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_select_item_off_list_is_ignored() {
        let mut state = NavigationState::new();
        state.navigate_to(Destination::Settings);
        let snapshot = state.clone();

        assert!(!state.select_item(first_item()));
        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_go_back_from_detail() {
        let mut state = NavigationState::new();
        state.select_item(first_item());

        assert!(state.go_back());

        assert_eq!(state.active_screen(), ScreenId::List);
        assert!(state.selected_item().is_none());
    }

    #[test]
    fn test_go_back_off_detail_is_ignored() {
        for dest in Destination::ALL {
            let mut state = NavigationState::new();
            state.navigate_to(dest);
            state.open_menu();
            let snapshot = state.clone();

            assert!(!state.go_back());
            assert_eq!(state, snapshot);
        }
    }

    #[test]
    fn test_navigate_to_clears_selection_and_menu() {
        let mut state = NavigationState::new();
        state.select_item(first_item());
        state.open_menu();

        assert!(state.navigate_to(Destination::Planning));

        assert_eq!(state.active_screen(), ScreenId::Planning);
        assert!(state.selected_item().is_none());
        assert!(!state.is_menu_open());
    }

    #[test]
    fn test_navigate_to_current_screen_reports_no_change() {
        let mut state = NavigationState::new();
        assert!(!state.navigate_to(Destination::List));
    }

    #[test]
    fn test_menu_is_an_overlay() {
        let mut state = NavigationState::new();
        state.select_item(first_item());
        let before = state.clone();

        assert!(state.open_menu());
        assert_eq!(state.active_screen(), before.active_screen());
        assert_eq!(state.selected_item(), before.selected_item());

        assert!(state.close_menu());
        assert_eq!(state, before);
    }

    #[test]
    fn test_menu_open_close_are_idempotent() {
        let mut state = NavigationState::new();
        assert!(!state.close_menu());
        assert!(state.open_menu());
        assert!(!state.open_menu());
        assert!(state.close_menu());
    }
}

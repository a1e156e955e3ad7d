//! The ticket wallet mini-app shown inside the phone mockup.
//!
//! Screens are plain functions registered per [`ScreenId`]; the phone mockup
//! resolves the active one through the registry and re-renders it whenever
//! the shown screen changes.

pub mod screens;
pub mod side_menu;

use folio_app::{Item, Message, NavigationState, ScreenRegistry};
use folio_core::ScreenId;
use leptos::prelude::*;

use super::icons::{ChevronLeft, Menu};

/// Everything a screen needs to render itself
#[derive(Clone)]
pub struct ScreenProps {
    /// Navigation state at the moment the screen was shown
    pub state: NavigationState,
    pub items: Vec<Item>,
    pub dispatch: Callback<Message>,
}

pub type ScreenView = fn(ScreenProps) -> AnyView;

/// Registry with every screen of the mini-app
pub fn screen_registry() -> ScreenRegistry<ScreenView> {
    ScreenRegistry::new()
        .with(ScreenId::List, screens::list_screen as ScreenView)
        .with(ScreenId::Detail, screens::detail_screen as ScreenView)
        .with(ScreenId::Settings, screens::settings_screen as ScreenView)
        .with(ScreenId::Planning, screens::planning_screen as ScreenView)
}

/// Status bar and title row of the mini-app
#[component]
pub fn AppBar(
    #[prop(into)] screen: Signal<ScreenId>,
    dispatch: Callback<Message>,
) -> impl IntoView {
    view! {
        <div class="shrink-0 bg-white border-b border-slate-200">
            // Status bar with the dynamic island
            <div class="relative h-10 flex items-center justify-between px-7 text-[11px] font-semibold">
                <span>"9:41"</span>
                <span class="absolute left-1/2 -translate-x-1/2 top-2 w-24 h-6 rounded-full bg-black"></span>
                <span class="tracking-tight">"5G \u{25AE}"</span>
            </div>

            <div class="h-12 flex items-center px-3">
                {move || {
                    (screen.get() == ScreenId::Detail).then(|| view! {
                        <button
                            class="p-2 -ml-1 rounded-full hover:bg-slate-100"
                            aria-label="Back"
                            on:click=move |_| dispatch.run(Message::GoBack)
                        >
                            <ChevronLeft class="w-5 h-5" />
                        </button>
                    })
                }}
                <h2 class="ml-2 flex-1 text-base font-bold tracking-tight">
                    {move || screen.get().label()}
                </h2>
                // The menu opens over any screen, including the ticket detail
                <button
                    class="p-2 -mr-1 rounded-full hover:bg-slate-100"
                    aria-label="Toggle menu"
                    on:click=move |_| dispatch.run(Message::ToggleMenu)
                >
                    <Menu class="w-5 h-5" />
                </button>
            </div>
        </div>
    }
}

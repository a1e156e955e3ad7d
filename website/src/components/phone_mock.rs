//! Device illustration with the live ticket prototype laid over its screen.
//!
//! The overlay is positioned with percentages from
//! [`compute_overlay_placement`], so the mockup scales with its container
//! without the screen drifting off the drawn bezel.

use std::time::Duration;

use folio_app::catalog::sample_items;
use folio_app::config::{TransitionMode, TransitionSettings};
use folio_app::{update, Item, Message, MissingScreenPolicy, NavigationState, Resolved, UpdateAction};
use folio_core::{compute_overlay_placement, DeviceFrameRect, ScreenId, IPHONE_FRAME};
use leptos::error::Errors;
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use super::ticket_app::screens::UnknownScreen;
use super::ticket_app::side_menu::SideMenu;
use super::ticket_app::{screen_registry, AppBar, ScreenProps};

#[derive(Clone, Copy, PartialEq, Eq)]
enum FadePhase {
    In,
    Out,
}

impl FadePhase {
    fn as_str(self) -> &'static str {
        match self {
            FadePhase::In => "in",
            FadePhase::Out => "out",
        }
    }
}

/// Numbers wait-mode fades so the timer of an interrupted fade can tell it
/// has been superseded.
#[derive(Debug, Default)]
struct FadeGenerations(u64);

impl FadeGenerations {
    fn start(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    fn is_current(&self, generation: u64) -> bool {
        self.0 == generation
    }
}

#[component]
pub fn PhoneMock(
    #[prop(default = IPHONE_FRAME)] frame: DeviceFrameRect,
    #[prop(optional)] transition: TransitionSettings,
    /// Defaults to failing loudly in debug builds
    #[prop(optional)]
    missing_screen: Option<MissingScreenPolicy>,
    /// Tickets shown in the list; the built-in catalog when omitted
    #[prop(optional)]
    items: Option<Vec<Item>>,
) -> impl IntoView {
    let policy = missing_screen.unwrap_or_default();
    let items = StoredValue::new(items.unwrap_or_else(sample_items));
    let registry = StoredValue::new(screen_registry());

    let nav = RwSignal::new(NavigationState::new());
    // Screen currently on glass; trails `nav` while a wait-mode fade runs
    let shown = RwSignal::new(ScreenId::default());
    let phase = RwSignal::new(FadePhase::In);
    let fades = StoredValue::new(FadeGenerations::default());

    let dispatch = Callback::new(move |msg: Message| {
        let result = nav
            .try_update(|state| update(state, msg))
            .unwrap_or_default();

        for action in result.actions {
            match action {
                UpdateAction::AnimateMenu { open } => {
                    log::debug!("Menu {}", if open { "opened" } else { "closed" });
                }
                UpdateAction::AnimateScreen { from, to } => {
                    log::debug!("Screen {from} -> {to}");
                    match transition.mode {
                        TransitionMode::Sync => shown.set(to),
                        TransitionMode::Wait => {
                            let Some(generation) = fades.try_update_value(|f| f.start()) else {
                                return;
                            };
                            phase.set(FadePhase::Out);
                            set_timeout(
                                move || {
                                    // A newer fade owns the phase now
                                    let current = fades
                                        .try_with_value(|f| f.is_current(generation))
                                        .unwrap_or(false);
                                    if !current {
                                        return;
                                    }
                                    let next = nav.with_untracked(|state| state.active_screen());
                                    if shown.get_untracked() != next {
                                        shown.set(next);
                                    }
                                    phase.set(FadePhase::In);
                                },
                                Duration::from_millis(transition.duration_ms.into()),
                            );
                        }
                    }
                }
            }
        }
    });

    let screen_view = move || {
        let screen = shown.get();
        let props = ScreenProps {
            state: nav.get_untracked(),
            items: items.get_value(),
            dispatch,
        };
        registry.with_value(|registry| {
            registry.resolve(screen, policy).map(|resolved| match resolved {
                Resolved::Screen(render) => render(props),
                Resolved::Placeholder(screen) => view! { <UnknownScreen screen=screen /> }.into_any(),
            })
        })
    };

    let fade_style = format!(
        "transition-duration: {0}ms; animation-duration: {0}ms;",
        transition.duration_ms
    );
    let menu_open = Signal::derive(move || nav.with(|state| state.is_menu_open()));
    let active = Signal::derive(move || nav.with(|state| state.active_screen()));

    // Broken geometry reaches the error boundary in debug builds. Release
    // builds keep the bare frame so the page still renders.
    let placement = compute_overlay_placement(&frame).map(Some).or_else(|e| {
        if cfg!(debug_assertions) {
            Err(e)
        } else {
            log::error!("Hiding prototype overlay: {e}");
            Ok(None)
        }
    });

    let overlay = placement.map(|placement| {
        placement.map(|placement| {
            view! {
                <div
                    class="overflow-hidden bg-slate-50 text-slate-900 flex flex-col"
                    style=placement.to_css()
                >
                    <AppBar screen=shown dispatch=dispatch />
                    <div class="relative flex-1 min-h-0">
                        <div
                            class="screen-fade absolute inset-0 overflow-y-auto"
                            data-phase=move || phase.get().as_str()
                            style=fade_style
                        >
                            {screen_view}
                        </div>
                        <SideMenu open=menu_open active=active dispatch=dispatch />
                    </div>
                </div>
            }
        })
    });

    let aspect = format!("aspect-ratio: {} / {};", frame.width, frame.height);

    view! {
        <div class="relative w-full max-w-[320px] mx-auto select-none" style=aspect>
            <DeviceFrame frame=frame />
            {overlay}
        </div>
    }
}

/// Bezel artwork, drawn in the frame's own pixel coordinates
#[component]
fn DeviceFrame(frame: DeviceFrameRect) -> impl IntoView {
    let view_box = format!("0 0 {} {}", frame.width, frame.height);
    let body_radius = (frame.radius.rx + frame.x).to_string();
    // (y, height) of each side button as a fraction of the frame height
    let left_buttons = [(0.18, 0.04), (0.25, 0.07)];
    let right_button = (0.22, 0.1);
    let side_button = move |x: f64, (top, len): (f64, f64)| {
        view! {
            <rect
                x=x.to_string()
                y={(frame.height * top).to_string()}
                width="3"
                height={(frame.height * len).to_string()}
                rx="1.5"
                fill="#334155"
            />
        }
    };

    view! {
        <svg
            class="absolute inset-0 w-full h-full drop-shadow-2xl"
            viewBox=view_box
            aria-hidden="true"
        >
            <rect
                x="0"
                y="0"
                width=frame.width.to_string()
                height=frame.height.to_string()
                rx=body_radius.clone()
                ry=body_radius
                fill="#1e293b"
                stroke="#475569"
                stroke-width="2"
            />
            <rect
                x=frame.x.to_string()
                y=frame.y.to_string()
                width=frame.screen_width.to_string()
                height=frame.screen_height.to_string()
                rx=frame.radius.rx.to_string()
                ry=frame.radius.ry.to_string()
                fill="#000000"
            />
            {left_buttons.into_iter().map(|button| side_button(0.0, button)).collect_view()}
            {side_button(frame.width - 3.0, right_button)}
        </svg>
    }
}

/// Error boundary fallback for a mockup whose frame or screens are broken
#[component]
pub fn PrototypeUnavailable(errors: ArcRwSignal<Errors>) -> impl IntoView {
    view! {
        <div class="max-w-[320px] mx-auto rounded-3xl border border-rose-800 bg-rose-950/40 p-6 text-sm text-rose-200">
            <p class="font-semibold mb-2">"The prototype could not be rendered"</p>
            <ul class="list-disc list-inside space-y-1 text-rose-300/80">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupted_fade_is_superseded() {
        let mut fades = FadeGenerations::default();

        let first = fades.start();
        let second = fades.start();

        assert!(!fades.is_current(first));
        assert!(fades.is_current(second));
    }

    #[test]
    fn test_single_fade_stays_current() {
        let mut fades = FadeGenerations::default();
        let only = fades.start();
        assert!(fades.is_current(only));
    }
}

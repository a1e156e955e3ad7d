use folio_app::Message;
use folio_core::{Destination, ScreenId};
use leptos::prelude::*;

use crate::components::icons::{Calendar, Close, Settings, Ticket};

fn icon(dest: Destination) -> AnyView {
    match dest {
        Destination::List => view! { <Ticket class="w-5 h-5" /> }.into_any(),
        Destination::Settings => view! { <Settings class="w-5 h-5" /> }.into_any(),
        Destination::Planning => view! { <Calendar class="w-5 h-5" /> }.into_any(),
    }
}

/// Slide-in menu drawn over whichever screen is active
#[component]
pub fn SideMenu(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] active: Signal<ScreenId>,
    dispatch: Callback<Message>,
) -> impl IntoView {
    view! {
        // Backdrop
        <div
            class=move || {
                if open.get() {
                    "absolute inset-0 z-20 bg-black/40 transition-opacity duration-200 opacity-100"
                } else {
                    "absolute inset-0 z-20 bg-black/40 transition-opacity duration-200 opacity-0 pointer-events-none"
                }
            }
            on:click=move |_| dispatch.run(Message::CloseMenu)
        ></div>

        <aside class=move || {
            let transform = if open.get() { "translate-x-0" } else { "-translate-x-full" };
            format!(
                "absolute top-0 left-0 bottom-0 z-30 w-3/4 bg-white shadow-xl \
                 transform {transform} transition-transform duration-200 flex flex-col"
            )
        }>
            <div class="h-10"></div>
            <div class="flex items-center justify-between px-5 h-12">
                <span class="font-bold tracking-tight">"Stage Door"</span>
                <button
                    class="p-2 rounded-full hover:bg-slate-100"
                    aria-label="Close menu"
                    on:click=move |_| dispatch.run(Message::CloseMenu)
                >
                    <Close class="w-5 h-5" />
                </button>
            </div>
            <nav class="p-3 space-y-1">
                {Destination::ALL
                    .into_iter()
                    .map(|dest| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == dest.screen() {
                                        "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-sm bg-rose-50 text-rose-600 font-semibold"
                                    } else {
                                        "w-full flex items-center space-x-3 px-4 py-3 rounded-lg text-sm text-slate-600 hover:bg-slate-50"
                                    }
                                }
                                on:click=move |_| dispatch.run(Message::NavigateTo(dest))
                            >
                                {icon(dest)}
                                <span>{dest.screen().label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

use folio_app::{Item, Message};
use folio_core::ScreenId;
use leptos::prelude::*;

use super::ScreenProps;
use crate::components::icons::{Calendar, ChevronRight, MapPin};
use crate::components::qr_code::QrCode;

pub fn list_screen(props: ScreenProps) -> AnyView {
    view! { <TicketList items=props.items dispatch=props.dispatch /> }.into_any()
}

pub fn detail_screen(props: ScreenProps) -> AnyView {
    match props.state.selected_item().cloned() {
        Some(item) => view! { <TicketDetail item=item /> }.into_any(),
        // Only reachable while the detail view is fading out after back
        None => view! { <div class="flex-1"></div> }.into_any(),
    }
}

pub fn settings_screen(_props: ScreenProps) -> AnyView {
    view! { <SettingsScreen /> }.into_any()
}

pub fn planning_screen(props: ScreenProps) -> AnyView {
    view! { <PlanningScreen items=props.items /> }.into_any()
}

#[component]
fn TicketList(items: Vec<Item>, dispatch: Callback<Message>) -> impl IntoView {
    view! {
        <div class="p-4 space-y-3">
            <p class="text-xs uppercase tracking-wider text-slate-400 font-semibold">"Upcoming"</p>
            {items
                .into_iter()
                .map(|item| {
                    let title = item.title.clone();
                    let when = format!("{} \u{00B7} {}", item.date, item.time);
                    let image = item.image_ref.clone();
                    view! {
                        <button
                            class="w-full flex items-center text-left bg-white rounded-2xl p-3 shadow-sm border border-slate-100 hover:border-rose-200 transition-colors"
                            on:click=move |_| dispatch.run(Message::SelectItem(item.clone()))
                        >
                            <img src=image alt="" class="w-14 h-14 rounded-xl object-cover bg-slate-200 shrink-0" />
                            <div class="ml-3 flex-1 min-w-0">
                                <p class="font-semibold text-sm truncate">{title}</p>
                                <p class="text-xs text-slate-500 mt-0.5">{when}</p>
                            </div>
                            <ChevronRight class="w-4 h-4 text-slate-400" />
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TicketDetail(item: Item) -> impl IntoView {
    let payload = item.qr_payload();

    view! {
        <div class="p-5 flex flex-col items-center">
            <div class="w-full bg-white rounded-3xl shadow-sm border border-slate-100 p-5 flex flex-col items-center">
                <h3 class="text-lg font-bold tracking-tight text-center">{item.title}</h3>
                <p class="text-xs text-slate-500 mt-1">{item.venue}</p>

                <div class="w-44 my-5">
                    <QrCode payload=payload />
                </div>

                <dl class="w-full grid grid-cols-2 gap-3 text-xs">
                    <div>
                        <dt class="text-slate-400">"Date"</dt>
                        <dd class="font-semibold">{item.date}</dd>
                    </div>
                    <div>
                        <dt class="text-slate-400">"Doors"</dt>
                        <dd class="font-semibold">{item.time}</dd>
                    </div>
                    <div class="col-span-2">
                        <dt class="text-slate-400">"Seats"</dt>
                        <dd class="font-semibold">{item.seats}</dd>
                    </div>
                </dl>
            </div>
            <p class="text-[11px] text-slate-400 mt-4">"Show this code at the door"</p>
        </div>
    }
}

#[component]
fn SettingsScreen() -> impl IntoView {
    let (notifications, set_notifications) = signal(true);
    let (brightness, set_brightness) = signal(true);

    let toggle_class = |on: bool| {
        if on {
            "w-10 h-6 rounded-full bg-rose-500 relative transition-colors"
        } else {
            "w-10 h-6 rounded-full bg-slate-300 relative transition-colors"
        }
    };
    let knob_class = |on: bool| {
        if on {
            "absolute top-1 left-5 w-4 h-4 rounded-full bg-white transition-all"
        } else {
            "absolute top-1 left-1 w-4 h-4 rounded-full bg-white transition-all"
        }
    };

    view! {
        <div class="p-4 space-y-2">
            <div class="bg-white rounded-2xl border border-slate-100 divide-y divide-slate-100">
                <div class="flex items-center justify-between p-4 text-sm">
                    <span>"Show reminders"</span>
                    <button
                        class=move || toggle_class(notifications.get())
                        on:click=move |_| set_notifications.update(|v| *v = !*v)
                    >
                        <span class=move || knob_class(notifications.get())></span>
                    </button>
                </div>
                <div class="flex items-center justify-between p-4 text-sm">
                    <span>"Max brightness for codes"</span>
                    <button
                        class=move || toggle_class(brightness.get())
                        on:click=move |_| set_brightness.update(|v| *v = !*v)
                    >
                        <span class=move || knob_class(brightness.get())></span>
                    </button>
                </div>
            </div>
            <p class="text-[11px] text-slate-400 px-2">"Settings in this prototype are not saved."</p>
        </div>
    }
}

#[component]
fn PlanningScreen(items: Vec<Item>) -> impl IntoView {
    let next = items.into_iter().next();

    view! {
        <div class="p-4 space-y-3 text-sm">
            {next.map(|item| view! {
                <div class="bg-rose-500 text-white rounded-2xl p-4">
                    <p class="text-xs opacity-80">"Next visit"</p>
                    <p class="font-bold text-base">{item.title}</p>
                    <p class="text-xs mt-1 opacity-90">{format!("{} \u{00B7} {}", item.date, item.time)}</p>
                </div>
            })}
            <div class="bg-white rounded-2xl border border-slate-100 p-4 flex items-start space-x-3">
                <MapPin class="w-5 h-5 text-rose-500 shrink-0" />
                <div>
                    <p class="font-semibold">"Getting here"</p>
                    <p class="text-xs text-slate-500">"Arrive 30 minutes early. The stage door is on the north side."</p>
                </div>
            </div>
            <div class="bg-white rounded-2xl border border-slate-100 p-4 flex items-start space-x-3">
                <Calendar class="w-5 h-5 text-rose-500 shrink-0" />
                <div>
                    <p class="font-semibold">"Before the show"</p>
                    <p class="text-xs text-slate-500">"The caf\u{e9} opens two hours before curtain up."</p>
                </div>
            </div>
        </div>
    }
}

/// Neutral stand-in for a screen with no registered component
#[component]
pub fn UnknownScreen(screen: ScreenId) -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-8 text-center text-xs text-slate-400">
            {format!("This view ({screen}) is not available in the prototype.")}
        </div>
    }
}

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::icons::{Check, Copy};

pub const CONTACT_EMAIL: &str = "hello@folio.design";

/// Copies the contact address to the clipboard and flashes a check mark
#[component]
pub fn CopyEmail(#[prop(default = CONTACT_EMAIL)] email: &'static str) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let handle_copy = move |_| {
        leptos::task::spawn_local(async move {
            let Some(window) = web_sys::window() else {
                return;
            };
            let promise = window.navigator().clipboard().write_text(email);
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("Clipboard write failed: {e:?}");
                return;
            }
            set_copied.set(true);

            // Reset after 2 seconds
            let cb = wasm_bindgen::closure::Closure::once(move || {
                set_copied.set(false);
            });
            if window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    cb.as_ref().unchecked_ref(),
                    2000,
                )
                .is_ok()
            {
                cb.forget();
            }
        });
    };

    view! {
        <button
            on:click=handle_copy
            class="inline-flex items-center space-x-2 px-4 py-2 rounded-full border border-slate-700 text-slate-300 hover:text-white hover:border-slate-500 transition-colors font-mono text-sm"
        >
            <span>{email}</span>
            {move || {
                if copied.get() {
                    view! { <Check class="w-4 h-4 text-green-400" /> }.into_any()
                } else {
                    view! { <Copy class="w-4 h-4" /> }.into_any()
                }
            }}
        </button>
    }
}

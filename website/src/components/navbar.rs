use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::icons::Github;

fn link_class(active: bool) -> &'static str {
    if active {
        "text-sm font-medium transition-colors text-white"
    } else {
        "text-sm font-medium transition-colors text-slate-400 hover:text-white"
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let is_home = move || pathname() == "/";
    let is_work = move || pathname().starts_with("/work");

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-7xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 group">
                    <span class="w-8 h-8 rounded-lg bg-gradient-to-br from-rose-400 to-orange-300 group-hover:scale-110 transition-transform"></span>
                    <span class="font-bold text-white text-lg tracking-tight">
                        "Folio"
                    </span>
                </A>

                <nav class="flex items-center space-x-8">
                    <A href="/" attr:class=move || link_class(is_home())>
                        "Home"
                    </A>
                    <A href="/work" attr:class=move || link_class(is_work())>
                        "Work"
                    </A>
                    <a
                        href="https://github.com"
                        target="_blank"
                        rel="noreferrer"
                        class="text-slate-400 hover:text-white transition-colors"
                    >
                        <Github class="w-5 h-5" />
                    </a>
                </nav>
            </div>
        </header>
    }
}

pub mod components;
pub mod data;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use components::tool_logo::LogoFailureCache;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use pages::home::Home;
use pages::work::{CaseStudyPage, WorkIndex};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    // Shared by every ToolLogo so a broken logo URL is only requested once
    provide_context(LogoFailureCache::new());

    view! {
        <Title text="Folio" />
        <Router>
            <ScrollToTop />
            <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-rose-500/30 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/work") view=WorkIndex />
                    <Route path=path!("/work/:slug") view=CaseStudyPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move || {
        let _ = location.pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

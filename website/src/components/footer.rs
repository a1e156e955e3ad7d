use leptos::prelude::*;

use super::copy_email::CONTACT_EMAIL;

#[component]
pub fn Footer() -> impl IntoView {
    let mailto = format!("mailto:{CONTACT_EMAIL}");

    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-7xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"\u{00A9} 2026 Folio. Designed and built in Rust."</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    <a href=mailto class="hover:text-white transition-colors">"Email"</a>
                    <a href="https://www.linkedin.com" target="_blank" rel="noreferrer" class="hover:text-white transition-colors">"LinkedIn"</a>
                    <a href="https://read.cv" target="_blank" rel="noreferrer" class="hover:text-white transition-colors">"CV"</a>
                </div>
            </div>
        </footer>
    }
}

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::copy_email::CopyEmail;
use crate::components::icons::ChevronRight;
use crate::components::phone_mock::{PhoneMock, PrototypeUnavailable};
use crate::components::tool_logo::ToolLogo;
use crate::data::{CASE_STUDIES, TOOLS};
use crate::pages::work::CaseStudyCard;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="space-y-24 pb-24 pt-16">
            // Hero Section
            <section class="pt-20 px-6 relative overflow-hidden">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-rose-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 max-w-6xl mx-auto grid md:grid-cols-2 gap-16 items-center">
                    <div>
                        <h1 class="text-5xl md:text-6xl font-black text-white tracking-tight mb-6">
                            "Interfaces people "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-rose-400 to-orange-300">
                                "reach for"
                            </span>
                        </h1>

                        <p class="text-xl text-slate-400 mb-8 font-light leading-relaxed">
                            "Product designer working on mobile apps and the systems behind them."
                            <br />
                            "Tap around the ticket wallet on the right. It is the real prototype."
                        </p>

                        <div class="flex flex-wrap gap-4">
                            <A
                                href="/work"
                                attr:class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                            >
                                "See the work"
                                <ChevronRight class="w-4 h-4 ml-1" />
                            </A>
                            <CopyEmail />
                        </div>
                    </div>

                    <ErrorBoundary fallback=|errors| view! { <PrototypeUnavailable errors=errors /> }>
                        <PhoneMock />
                    </ErrorBoundary>
                </div>
            </section>

            // Selected Work
            <section class="px-6 max-w-6xl mx-auto">
                <div class="flex items-end justify-between mb-10">
                    <h2 class="text-3xl font-bold text-white">"Selected work"</h2>
                    <A href="/work" attr:class="text-sm text-slate-400 hover:text-white transition-colors">
                        "All case studies"
                    </A>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {CASE_STUDIES
                        .iter()
                        .map(|study| view! { <CaseStudyCard study=study /> })
                        .collect_view()}
                </div>
            </section>

            // Toolbox
            <section class="px-6 max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold text-white mb-10">"Toolbox"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {TOOLS.iter().map(|tool| view! { <ToolLogo tool=tool /> }).collect_view()}
                </div>
            </section>
        </div>
    }
}

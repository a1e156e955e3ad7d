use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::badge::Badge;
use crate::components::icons::{ChevronLeft, ChevronRight};
use crate::components::phone_mock::{PhoneMock, PrototypeUnavailable};
use crate::components::tool_logo::ToolLogo;
use crate::data::{find_case_study, find_tool, CaseStudy, CASE_STUDIES};

#[component]
pub fn CaseStudyCard(study: &'static CaseStudy) -> impl IntoView {
    let href = format!("/work/{}", study.slug);

    view! {
        <A
            href=href
            attr:class="block bg-slate-900/50 border border-slate-800 p-8 rounded-2xl hover:border-slate-700 transition-colors group"
        >
            <div class="flex items-center justify-between mb-4">
                <Badge color=study.category.badge_color()>{study.category.label()}</Badge>
                <span class="text-xs text-slate-500">{study.year}</span>
            </div>
            <h3 class="text-xl font-bold text-white mb-1">{study.title}</h3>
            <p class="text-sm text-slate-500 mb-4">{study.client}</p>
            <p class="text-slate-400 leading-relaxed mb-6">{study.summary}</p>
            <span class="inline-flex items-center text-sm text-rose-300 group-hover:text-rose-200">
                "Read case study"
                <ChevronRight class="w-4 h-4 ml-1" />
            </span>
        </A>
    }
}

#[component]
pub fn WorkIndex() -> impl IntoView {
    view! {
        <Title text="Work | Folio" />
        <div class="max-w-6xl mx-auto px-6 pt-32 pb-24">
            <h1 class="text-4xl font-bold text-white mb-4">"Work"</h1>
            <p class="text-slate-400 mb-12 max-w-2xl">
                "Case studies from product, systems and research engagements."
            </p>
            <div class="grid md:grid-cols-3 gap-8">
                {CASE_STUDIES
                    .iter()
                    .map(|study| view! { <CaseStudyCard study=study /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn CaseStudyPage() -> impl IntoView {
    let params = use_params_map();
    let study = move || params.with(|p| p.get("slug").and_then(|slug| find_case_study(&slug)));

    move || match study() {
        Some(study) => view! { <CaseStudyDetail study=study /> }.into_any(),
        None => view! { <NotFound /> }.into_any(),
    }
}

#[component]
fn CaseStudyDetail(study: &'static CaseStudy) -> impl IntoView {
    let tools = study.tools.iter().filter_map(|slug| {
        let tool = find_tool(slug);
        if tool.is_none() {
            log::warn!("Case study '{}' lists unknown tool '{}'", study.slug, slug);
        }
        tool
    });

    let page_title = format!("{} | Folio", study.title);

    view! {
        <Title text=page_title />
        <article class="max-w-4xl mx-auto px-6 pt-32 pb-24">
            <A href="/work" attr:class="inline-flex items-center text-sm text-slate-400 hover:text-white mb-8">
                <ChevronLeft class="w-4 h-4 mr-1" />
                "All work"
            </A>

            <header class="mb-12">
                <Badge color=study.category.badge_color() dot=true>{study.category.label()}</Badge>
                <h1 class="text-5xl font-black text-white tracking-tight mt-4 mb-2">{study.title}</h1>
                <p class="text-slate-500">{format!("{} \u{00B7} {}", study.client, study.year)}</p>
                <p class="text-xl text-slate-400 font-light leading-relaxed mt-6">{study.summary}</p>
            </header>

            {study.has_prototype.then(|| view! {
                <section class="mb-16">
                    <ErrorBoundary fallback=|errors| view! { <PrototypeUnavailable errors=errors /> }>
                        <PhoneMock />
                    </ErrorBoundary>
                </section>
            })}

            <div class="space-y-10">
                {study
                    .sections
                    .iter()
                    .map(|section| view! {
                        <section>
                            <h2 class="text-2xl font-bold text-white mb-3">{section.heading}</h2>
                            <p class="text-slate-400 leading-relaxed">{section.body}</p>
                        </section>
                    })
                    .collect_view()}
            </div>

            <section class="mt-16">
                <h2 class="text-sm uppercase tracking-wider text-slate-500 font-semibold mb-4">"Tools"</h2>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {tools.map(|tool| view! { <ToolLogo tool=tool /> }).collect_view()}
                </div>
            </section>
        </article>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-6 pt-32 pb-24 text-center">
            <h1 class="text-4xl font-bold text-white mb-4">"Case study not found"</h1>
            <A href="/work" attr:class="text-rose-300 hover:text-rose-200">"Back to all work"</A>
        </div>
    }
}

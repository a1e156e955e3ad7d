use std::collections::HashSet;

use leptos::prelude::*;

use crate::data::Tool;

/// Tool slugs whose logo failed to load.
///
/// Provided once at the app root through context so every `ToolLogo` shares
/// it, and a broken image is not retried on every page.
#[derive(Clone, Copy)]
pub struct LogoFailureCache(RwSignal<HashSet<&'static str>>);

impl LogoFailureCache {
    pub fn new() -> Self {
        Self(RwSignal::new(HashSet::new()))
    }

    pub fn has_failed(&self, slug: &str) -> bool {
        self.0.with(|failed| failed.contains(slug))
    }

    pub fn mark_failed(&self, slug: &'static str) {
        log::warn!("Logo for '{slug}' failed to load, using initials");
        self.0.update(|failed| {
            failed.insert(slug);
        });
    }
}

impl Default for LogoFailureCache {
    fn default() -> Self {
        Self::new()
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn ToolLogo(tool: &'static Tool) -> impl IntoView {
    // Fall back to a local cache if the host forgot to provide one
    let cache = use_context::<LogoFailureCache>().unwrap_or_default();
    let slug = tool.slug;

    view! {
        <div class="flex items-center space-x-3 bg-slate-900/50 border border-slate-800 rounded-xl px-4 py-3">
            {move || {
                if cache.has_failed(slug) {
                    view! {
                        <span class="w-8 h-8 rounded-md bg-slate-800 text-slate-300 text-xs font-bold flex items-center justify-center">
                            {initials(tool.name)}
                        </span>
                    }
                        .into_any()
                } else {
                    view! {
                        <img
                            src=tool.logo
                            alt=tool.name
                            class="w-8 h-8 object-contain"
                            on:error=move |_| cache.mark_failed(slug)
                        />
                    }
                        .into_any()
                }
            }}
            <span class="text-sm text-slate-300">{tool.name}</span>
        </div>
    }
}

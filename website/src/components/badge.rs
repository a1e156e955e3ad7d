use leptos::prelude::*;

/// Accent colors for category pills, one per kind of engagement
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeColor {
    #[default]
    Rose,
    Sky,
    Emerald,
}

impl BadgeColor {
    fn pill(self) -> &'static str {
        match self {
            BadgeColor::Rose => "bg-rose-500/10 text-rose-300 ring-rose-400/30",
            BadgeColor::Sky => "bg-sky-500/10 text-sky-300 ring-sky-400/30",
            BadgeColor::Emerald => "bg-emerald-500/10 text-emerald-300 ring-emerald-400/30",
        }
    }

    fn dot(self) -> &'static str {
        match self {
            BadgeColor::Rose => "bg-rose-400",
            BadgeColor::Sky => "bg-sky-400",
            BadgeColor::Emerald => "bg-emerald-400",
        }
    }
}

/// Rounded category pill, optionally led by a status dot
#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
    #[prop(optional)] dot: bool,
) -> impl IntoView {
    let class = format!(
        "inline-flex items-center gap-1.5 rounded-full px-3 py-1 text-[11px] font-semibold uppercase tracking-wider ring-1 ring-inset {}",
        color.pill()
    );
    let dot_class = format!("w-1.5 h-1.5 rounded-full {}", color.dot());

    view! {
        <span class=class>
            {dot.then(|| view! { <span class=dot_class></span> })}
            {children()}
        </span>
    }
}

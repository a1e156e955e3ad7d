//! Inline SVG icons (Lucide outlines)

use leptos::prelude::*;

#[component]
fn Icon(#[prop(into)] class: String, children: Children) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            {children()}
        </svg>
    }
}

#[component]
pub fn Github(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" />
            <path d="M9 18c-4.51 2-5-2-7-2" />
        </Icon>
    }
}

#[component]
pub fn ChevronRight(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="m9 18 6-6-6-6" />
        </Icon>
    }
}

#[component]
pub fn ChevronLeft(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="m15 18-6-6 6-6" />
        </Icon>
    }
}

#[component]
pub fn Menu(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <line x1="4" x2="20" y1="6" y2="6" />
            <line x1="4" x2="20" y1="12" y2="12" />
            <line x1="4" x2="20" y1="18" y2="18" />
        </Icon>
    }
}

#[component]
pub fn Close(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M18 6 6 18" />
            <path d="m6 6 12 12" />
        </Icon>
    }
}

#[component]
pub fn Ticket(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M2 9a3 3 0 0 1 0 6v2a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-2a3 3 0 0 1 0-6V7a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2Z" />
            <path d="M13 5v2" />
            <path d="M13 17v2" />
            <path d="M13 11v2" />
        </Icon>
    }
}

#[component]
pub fn Settings(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z" />
            <circle cx="12" cy="12" r="3" />
        </Icon>
    }
}

#[component]
pub fn Calendar(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <rect width="18" height="18" x="3" y="4" rx="2" ry="2" />
            <line x1="16" x2="16" y1="2" y2="6" />
            <line x1="8" x2="8" y1="2" y2="6" />
            <line x1="3" x2="21" y1="10" y2="10" />
        </Icon>
    }
}

#[component]
pub fn MapPin(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
            <circle cx="12" cy="10" r="3" />
        </Icon>
    }
}

#[component]
pub fn Copy(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <rect width="14" height="14" x="8" y="8" rx="2" ry="2" />
            <path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2" />
        </Icon>
    }
}

#[component]
pub fn Check(#[prop(optional, into)] class: String) -> impl IntoView {
    view! {
        <Icon class=class>
            <path d="M20 6 9 17l-5-5" />
        </Icon>
    }
}

//! Navigation shell: the route list with active highlighting.
//!
//! Rendered two ways by [`PageShell`](crate::components::page_shell):
//! as a persistent column in wide mode (user-collapsible to an icon
//! rail) or full-width inside the compact overlay drawer.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::nav::{NAV_ENTRIES, NavEntry, SETTINGS_ENTRY, is_active};
use crate::util::viewport::use_layout_mode;

/// Static identity shown in the sidebar header and on the settings page.
pub const PROFILE_NAME: &str = "Dev Majxr";
pub const PROFILE_EMAIL: &str = "dev@majxr.com";
pub const PROFILE_INITIALS: &str = "DM";

/// Navigation sidebar.
///
/// `overlay` renders the full-width drawer variant: labels always on,
/// no collapse toggle. The column variant keeps its own expanded state
/// and auto-collapses to the icon rail when the viewport narrows.
#[component]
pub fn Sidebar(#[prop(optional)] overlay: bool) -> impl IntoView {
    let expanded = RwSignal::new(true);

    let mode = use_layout_mode();
    Effect::new(move || expanded.set(!mode.get().is_compact()));

    let location = use_location();
    let pathname = location.pathname;

    let labeled = move || overlay || expanded.get();

    let link = move |entry: &'static NavEntry| {
        view! {
            <a
                class="sidebar__link"
                class:sidebar__link--active=move || is_active(entry, &pathname.get())
                class:sidebar__link--centered=move || !labeled()
                href=entry.path
            >
                <span class="sidebar__icon" aria-hidden="true">{entry.icon}</span>
                <Show when=labeled>
                    <span class="sidebar__label">{entry.label}</span>
                </Show>
            </a>
        }
    };

    view! {
        <aside class="sidebar" class:sidebar--rail=move || !labeled()>
            <div class="sidebar__header">
                <Show when=labeled>
                    <h2 class="sidebar__greeting">{format!("Welcome, {PROFILE_NAME}!")}</h2>
                </Show>
                <Show when=move || !overlay>
                    <button
                        class="sidebar__toggle"
                        title="Toggle sidebar"
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "\u{25C0}" } else { "\u{25B6}" }}
                    </button>
                </Show>
            </div>

            <div class="sidebar__profile">
                <span class="sidebar__avatar">{PROFILE_INITIALS}</span>
                <Show when=labeled>
                    <div class="sidebar__identity">
                        <p class="sidebar__name">{PROFILE_NAME}</p>
                        <p class="sidebar__email">{PROFILE_EMAIL}</p>
                    </div>
                </Show>
            </div>

            <nav class="sidebar__nav">{NAV_ENTRIES.iter().map(link).collect::<Vec<_>>()}</nav>

            <div class="sidebar__footer">
                {link(&SETTINGS_ENTRY)}
                // Decorative: there is no session to end.
                <button class="sidebar__logout" class:sidebar__link--centered=move || !labeled()>
                    <span class="sidebar__icon" aria-hidden="true">"\u{23FB}"</span>
                    <Show when=labeled>
                        <span class="sidebar__label">"Logout"</span>
                    </Show>
                </button>
            </div>
        </aside>
    }
}

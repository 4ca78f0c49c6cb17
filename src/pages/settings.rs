//! Settings page: profile identity and the dark theme toggle.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::sidebar::{PROFILE_EMAIL, PROFILE_INITIALS, PROFILE_NAME};
use crate::util::dark_mode;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let dark = RwSignal::new(false);

    // Resolve the stored preference once the page is live in the browser.
    Effect::new(move || dark.set(dark_mode::load()));

    let on_toggle = move |_| {
        let next = !dark.get_untracked();
        dark_mode::store(next);
        dark.set(next);
    };

    view! {
        <PageShell>
            <div class="settings">
                <h1 class="settings__title">"Settings"</h1>

                <section class="settings__card">
                    <h2 class="settings__card-title">"Profile"</h2>
                    <div class="settings__profile">
                        <span class="settings__avatar">{PROFILE_INITIALS}</span>
                        <div>
                            <p class="settings__name">{PROFILE_NAME}</p>
                            <p class="settings__email">{PROFILE_EMAIL}</p>
                        </div>
                    </div>
                </section>

                <section class="settings__card">
                    <h2 class="settings__card-title">"Appearance"</h2>
                    <label class="settings__row">
                        <span>"Dark theme"</span>
                        <button
                            class="settings__switch"
                            class:settings__switch--on=move || dark.get()
                            on:click=on_toggle
                        >
                            {move || if dark.get() { "On" } else { "Off" }}
                        </button>
                    </label>
                </section>
            </div>
        </PageShell>
    }
}

//! Shared page chrome: top bar, navigation drawer, sidebar column.
//!
//! Every page renders inside this shell. In compact mode the sidebar
//! moves into an off-canvas drawer behind a menu button; in wide mode it
//! is a persistent column next to the scrolling main area.

use leptos::prelude::*;

use crate::components::sidebar::Sidebar;
use crate::state::layout::SidebarPresentation;
use crate::util::viewport::use_layout_mode;

/// Layout wrapper owning the page's layout mode and the drawer open
/// state. The drawer is opened explicitly from the top bar and dismissed
/// by its close button or a scrim click.
#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    let mode = use_layout_mode();
    let overlay =
        move || SidebarPresentation::for_mode(mode.get()) == SidebarPresentation::Overlay;

    let drawer_open = RwSignal::new(false);

    view! {
        <div class="page-shell">
            <Show when=overlay>
                <nav class="page-shell__topbar">
                    <button
                        class="page-shell__menu"
                        title="Open navigation"
                        on:click=move |_| drawer_open.set(true)
                    >
                        "\u{2630}"
                    </button>
                </nav>
            </Show>

            <Show when=move || overlay() && drawer_open.get()>
                <div class="page-shell__scrim" on:click=move |_| drawer_open.set(false)>
                    <div class="page-shell__drawer" on:click=move |ev| ev.stop_propagation()>
                        <button
                            class="page-shell__close"
                            title="Close navigation"
                            on:click=move |_| drawer_open.set(false)
                        >
                            "\u{00D7}"
                        </button>
                        <Sidebar overlay=true/>
                    </div>
                </div>
            </Show>

            <div class="page-shell__body">
                <Show when=move || !overlay()>
                    <Sidebar/>
                </Show>
                <main class="page-shell__main">{children()}</main>
            </div>
        </div>
    }
}

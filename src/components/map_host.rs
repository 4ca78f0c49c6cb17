//! Host component bridging Leptos and the imperative Google Maps engine.
//!
//! Renders an empty container for the engine to populate in place. While
//! the script loads the container stays empty; once the widget fails it
//! swaps to a fallback panel for the rest of its lifetime.

#[cfg(test)]
#[path = "map_host_test.rs"]
mod map_host_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::map::error::MapError;
use crate::map::loader::MapPhase;

/// Remediation checklist shown with billing failures.
pub const REMEDIATION_STEPS: &[&str] = &[
    "Go to the Google Cloud Console",
    "Select your project",
    "Enable billing for the project",
    "Enable the Google Maps JavaScript API",
    "Ensure your API key has the necessary permissions",
    "Check your API key restrictions (if any)",
    "Verify that the GOOGLE_MAPS_API_KEY environment variable is set correctly",
];

pub const ENABLE_BILLING_URL: &str = "https://console.cloud.google.com/project/_/billing/enable";
pub const BILLING_DOCS_URL: &str =
    "https://developers.google.com/maps/documentation/javascript/error-messages#billing-not-enabled-map-error";

/// Static stand-in rendered when the map cannot initialize.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Map widget host.
///
/// Owns the widget's [`MapPhase`] and the container element. All
/// non-failed phases render the same container node so the engine's DOM
/// survives phase changes; `Failed` is terminal and swaps in the
/// fallback panel until the component is remounted.
#[component]
pub fn MapHost() -> impl IntoView {
    let phase = RwSignal::new(MapPhase::Uninitialized);
    let container: NodeRef<Div> = NodeRef::new();

    #[cfg(feature = "hydrate")]
    drive_loader(phase, container);

    view! {
        <div class="map-host">
            <Show
                when=move || phase.with(|p| p.is_failed())
                fallback=move || view! { <div class="map-host__canvas" node_ref=container></div> }
            >
                {move || {
                    phase
                        .with(|p| p.error().cloned())
                        .map(|error| view! { <MapFallback error=error/> })
                }}
            </Show>
        </div>
    }
}

/// Run the load-and-initialize sequence once the container exists.
#[cfg(feature = "hydrate")]
fn drive_loader(phase: RwSignal<MapPhase>, container: NodeRef<Div>) {
    use crate::map::engine;
    use crate::map::loader::{self, SubscribeOutcome};

    Effect::new(move || {
        if container.get().is_none() {
            return;
        }
        if phase.get_untracked() != MapPhase::Uninitialized {
            return;
        }

        let on_ready = move |result: Result<(), MapError>| {
            phase.update(|p| *p = std::mem::take(p).script_arrived(result));
            if phase.get_untracked() != MapPhase::ScriptReady {
                return;
            }
            let built = container
                .get_untracked()
                .map_or(Err(MapError::Unknown), |el| engine::initialize(&el));
            phase.update(|p| *p = std::mem::take(p).map_built(built));
        };

        match loader::subscribe(on_ready) {
            // Engine was already loaded; on_ready ran synchronously.
            SubscribeOutcome::Ready => {}
            SubscribeOutcome::Pending(id) => {
                phase.update(|p| *p = std::mem::take(p).begin_loading());
                on_cleanup(move || loader::unsubscribe(id));
            }
            SubscribeOutcome::Inject(id) => {
                phase.update(|p| *p = std::mem::take(p).begin_loading());
                if engine::inject_script().is_err() {
                    // Fails every waiter, this component included.
                    loader::script_failed();
                }
                on_cleanup(move || loader::unsubscribe(id));
            }
        }
    });
}

/// Fallback panel: the error alert, billing remediation when applicable,
/// and the placeholder image.
#[component]
fn MapFallback(error: MapError) -> impl IntoView {
    let billing = error.is_billing();
    let message = error.to_string();

    view! {
        <div class="map-fallback">
            <div class="map-fallback__alert" role="alert">
                <span class="map-fallback__alert-title">"Error"</span>
                <p class="map-fallback__alert-text">{message}</p>
            </div>

            <Show when=move || billing>
                <div class="map-fallback__remediation">
                    <p>"To resolve this issue, please follow these steps:"</p>
                    <ol class="map-fallback__steps">
                        {REMEDIATION_STEPS
                            .iter()
                            .map(|step| view! { <li>{*step}</li> })
                            .collect::<Vec<_>>()}
                    </ol>
                    <a
                        class="map-fallback__btn map-fallback__btn--primary"
                        href=ENABLE_BILLING_URL
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Enable Billing"
                    </a>
                    <a
                        class="map-fallback__btn"
                        href=BILLING_DOCS_URL
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        "Learn More"
                    </a>
                </div>
            </Show>

            <div class="map-fallback__placeholder">
                <h3 class="map-fallback__placeholder-title">"Placeholder Map"</h3>
                <img
                    class="map-fallback__image"
                    src=PLACEHOLDER_IMAGE
                    alt="Placeholder Map"
                    width="384"
                    height="256"
                />
            </div>
        </div>
    }
}

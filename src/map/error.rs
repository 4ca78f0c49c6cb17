//! Error taxonomy for the map loader.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Marker substring the provider embeds in billing-related exceptions.
pub const BILLING_ERROR_MARKER: &str = "BillingNotEnabledMapError";

/// Why the map failed to come up. Terminal for the component that hit it;
/// a remount starts the sequence over.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MapError {
    /// The provider rejected the project because billing is off. Surfaced
    /// with a remediation checklist and console links.
    #[error("Google Maps API billing is not enabled for this project.")]
    BillingNotEnabled,

    /// Map construction threw a recognizable error.
    #[error("An error occurred while loading the map: {0}")]
    Initialization(String),

    /// Map construction threw something that is not an error object.
    #[error("An unknown error occurred while loading the map.")]
    Unknown,

    /// The provider script itself failed to load or parse.
    #[error("Failed to load Google Maps API")]
    ScriptLoad,
}

impl MapError {
    /// Classify an exception thrown during map initialization from its
    /// message, if it had one. Thrown values without a message are
    /// non-error objects and classify as [`MapError::Unknown`].
    pub fn from_exception(message: Option<&str>) -> Self {
        match message {
            Some(msg) if msg.contains(BILLING_ERROR_MARKER) => Self::BillingNotEnabled,
            Some(msg) => Self::Initialization(msg.to_owned()),
            None => Self::Unknown,
        }
    }

    /// Billing failures get the remediation checklist in the fallback UI.
    pub fn is_billing(&self) -> bool {
        *self == Self::BillingNotEnabled
    }
}

/// Classify a raw JS throw value from the maps engine.
#[cfg(feature = "hydrate")]
pub fn classify_js_error(err: &wasm_bindgen::JsValue) -> MapError {
    use wasm_bindgen::JsCast;

    err.dyn_ref::<js_sys::Error>().map_or(MapError::Unknown, |e| {
        MapError::from_exception(Some(&String::from(e.message())))
    })
}

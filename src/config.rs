//! Deployment-time configuration baked into the client bundle.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the global callback the Maps script invokes once it has
/// finished evaluating.
pub const MAPS_READY_CALLBACK: &str = "initMap";

/// Google Maps API key, substituted at compile time from the build
/// environment. An empty key still produces a well-formed script URL;
/// the provider rejects it at load time and the loader surfaces that
/// as a script failure.
pub fn maps_api_key() -> &'static str {
    option_env!("GOOGLE_MAPS_API_KEY").unwrap_or("")
}

/// Full provider script URL including the credential and the ready
/// callback parameter.
pub fn maps_script_url() -> String {
    format!(
        "https://maps.googleapis.com/maps/api/js?key={}&callback={}",
        maps_api_key(),
        MAPS_READY_CALLBACK
    )
}

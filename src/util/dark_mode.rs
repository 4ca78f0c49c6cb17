//! Dark theme preference for the settings page.
//!
//! The preference lives in `localStorage` and is reflected as a
//! `.theme-dark` class on the `<html>` element. Outside a browser both
//! helpers degrade to the light default.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "safewatch_theme_dark";

#[cfg(feature = "hydrate")]
const THEME_CLASS: &str = "theme-dark";

/// Resolve the current preference and apply it to the document.
///
/// A stored value wins; with nothing stored, the system color scheme
/// decides. Returns the resolved state so the caller can seed its signal.
pub fn load() -> bool {
    let dark = stored_preference().unwrap_or_else(system_prefers_dark);
    apply_class(dark);
    dark
}

/// Persist a new preference and apply it to the document.
pub fn store(dark: bool) {
    apply_class(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if dark { "true" } else { "false" });
            }
        }
    }
}

fn stored_preference() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let val = storage.get_item(STORAGE_KEY).ok()??;
        Some(val == "true")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

fn apply_class(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) =
            web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element())
        {
            let class_list = el.class_list();
            if dark {
                let _ = class_list.add_1(THEME_CLASS);
            } else {
                let _ = class_list.remove_1(THEME_CLASS);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

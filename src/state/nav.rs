//! Route table for the navigation shell.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// One navigation destination: route path, glyph icon, and label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Primary destinations, in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { path: "/", icon: "\u{1F514}", label: "Dashboard" },
    NavEntry { path: "/missing-persons", icon: "\u{1F512}", label: "Missing Persons" },
    NavEntry { path: "/weather-alerts", icon: "\u{26A0}", label: "Weather Alerts" },
    NavEntry { path: "/road-closures", icon: "\u{1F4CD}", label: "Road Closures" },
    NavEntry { path: "/crime-zones", icon: "\u{1F6E1}", label: "Crime Zones" },
];

/// Settings destination, pinned to the sidebar footer.
pub const SETTINGS_ENTRY: NavEntry =
    NavEntry { path: "/settings", icon: "\u{2699}", label: "Settings" };

/// Whether an entry is the active route. Exact path match only; detail
/// pages never mark the dashboard entry active.
pub fn is_active(entry: &NavEntry, pathname: &str) -> bool {
    entry.path == pathname
}

use super::*;

// =============================================================
// Stat cards
// =============================================================

#[test]
fn three_summary_counters() {
    assert_eq!(STAT_CARDS.len(), 3);
}

#[test]
fn counter_titles_and_values_are_fixed() {
    assert_eq!(STAT_CARDS[0].title, "Active Missing Persons");
    assert_eq!(STAT_CARDS[0].value, 12);
    assert_eq!(STAT_CARDS[1].title, "Weather Alerts");
    assert_eq!(STAT_CARDS[1].value, 3);
    assert_eq!(STAT_CARDS[2].title, "Active Crime Zones");
    assert_eq!(STAT_CARDS[2].value, 8);
}

#[test]
fn counters_are_not_derived_from_the_sample_records() {
    // The headline figure is standalone; the sample page lists three
    // missing persons while the counter reports twelve.
    assert_ne!(STAT_CARDS[0].value as usize, crate::records::MISSING_PERSONS.len());
}

// =============================================================
// Recent alerts feed
// =============================================================

#[test]
fn three_feed_items() {
    assert_eq!(RECENT_ALERTS.len(), 3);
}

#[test]
fn feed_items_link_to_the_detail_pages() {
    let links: Vec<&str> = RECENT_ALERTS.iter().map(|i| i.link).collect();
    assert_eq!(links, vec!["/weather-alerts", "/road-closures", "/crime-zones"]);
}

#[test]
fn feed_links_are_known_routes() {
    for item in RECENT_ALERTS {
        assert!(
            crate::state::nav::NAV_ENTRIES.iter().any(|e| e.path == item.link),
            "feed item {:?} links to an unknown route",
            item.title
        );
    }
}

// =============================================================
// Location filter
// =============================================================

#[test]
fn location_filter_defaults_to_all() {
    assert_eq!(LOCATION_OPTIONS[0], ("all", "All Locations"));
    assert_eq!(LOCATION_OPTIONS.len(), 4);
}

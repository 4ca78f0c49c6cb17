use super::*;

// =============================================================
// Crime zones
// =============================================================

#[test]
fn crime_zone_sample_set_has_three_records() {
    assert_eq!(CRIME_ZONES.len(), 3);
}

#[test]
fn crime_zone_card_puts_risk_level_first() {
    let cards: Vec<CardFields> = CRIME_ZONES.iter().map(CrimeZone::card).collect();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].title, "Central Business District");
    assert_eq!(cards[0].primary, "High");
    assert_eq!(cards[1].primary, "Medium");
    assert_eq!(cards[2].primary, "Low");
}

#[test]
fn crime_zone_secondary_is_location_dash_crime_type() {
    let card = CRIME_ZONES[0].card();
    assert_eq!(card.secondary, "Cape Town - Theft");
    assert_eq!(CRIME_ZONES[1].card().secondary, "Johannesburg - Burglary");
    assert_eq!(CRIME_ZONES[2].card().secondary, "Durban - Vehicle Theft");
}

// =============================================================
// Missing persons
// =============================================================

#[test]
fn missing_person_card_formats_age_and_last_seen() {
    let card = MISSING_PERSONS[0].card();
    assert_eq!(card.title, "John Doe");
    assert_eq!(card.primary, "35 years old");
    assert_eq!(card.secondary, "Last seen: 2023-06-15 in Cape Town");
}

// =============================================================
// Weather alerts
// =============================================================

#[test]
fn weather_alert_card_puts_severity_first() {
    let card = WEATHER_ALERTS[0].card();
    assert_eq!(card.title, "Heavy Rain");
    assert_eq!(card.primary, "High");
    assert_eq!(card.secondary, "Cape Town - Duration: 6 hours");
}

// =============================================================
// Road closures
// =============================================================

#[test]
fn road_closure_card_puts_reason_first() {
    let card = ROAD_CLOSURES[2].card();
    assert_eq!(card.title, "R102");
    assert_eq!(card.primary, "Flooding");
    assert_eq!(card.secondary, "Durban - Duration: Unknown");
}

// =============================================================
// Record shape
// =============================================================

#[test]
fn records_serialize_with_their_field_names() {
    let json = serde_json::to_value(CRIME_ZONES[1]).unwrap();
    assert_eq!(json["area"], "Sandton");
    assert_eq!(json["risk_level"], "Medium");
    assert_eq!(json["crime_type"], "Burglary");
    assert_eq!(json["location"], "Johannesburg");
}

#[test]
fn display_titles_are_unique_per_page() {
    for titles in [
        CRIME_ZONES.iter().map(|r| r.area).collect::<Vec<_>>(),
        MISSING_PERSONS.iter().map(|r| r.name).collect::<Vec<_>>(),
        WEATHER_ALERTS.iter().map(|r| r.kind).collect::<Vec<_>>(),
        ROAD_CLOSURES.iter().map(|r| r.road).collect::<Vec<_>>(),
    ] {
        let mut deduped = titles.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), titles.len());
    }
}

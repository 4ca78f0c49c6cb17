//! Weather alerts record page.

use leptos::prelude::*;

use crate::components::entity_list::EntityListPage;
use crate::records::{WEATHER_ALERTS, WeatherAlert};

#[component]
pub fn WeatherAlertsPage() -> impl IntoView {
    let cards = WEATHER_ALERTS.iter().map(WeatherAlert::card).collect();

    view! {
        <EntityListPage
            title="Weather Alerts"
            search_placeholder="Search weather alerts..."
            icon="\u{26A0}"
            cards=cards
        />
    }
}

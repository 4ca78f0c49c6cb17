//! Dashboard page: summary counters, the alert map, and the recent feed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::map_host::MapHost;
use crate::components::page_shell::PageShell;

/// One summary counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: u32,
    pub change: &'static str,
    pub icon: &'static str,
}

/// Fixed summary figures. Deliberately not derived from the per-page
/// record sets; the dashboard shows standalone headline numbers.
pub const STAT_CARDS: &[StatCard] = &[
    StatCard { title: "Active Missing Persons", value: 12, change: "+2", icon: "\u{1F512}" },
    StatCard { title: "Weather Alerts", value: 3, change: "2 high severity", icon: "\u{26A0}" },
    StatCard { title: "Active Crime Zones", value: 8, change: "3 high risk areas", icon: "\u{1F6E1}" },
];

/// One recent-alerts feed entry linking to a detail page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub link: &'static str,
}

pub const RECENT_ALERTS: &[FeedItem] = &[
    FeedItem {
        title: "Heavy Rain Warning",
        description: "Cape Town - Duration: 6 hours",
        icon: "\u{1F327}",
        link: "/weather-alerts",
    },
    FeedItem {
        title: "Road Closure",
        description: "N1 Highway - Construction Work",
        icon: "\u{1F4CD}",
        link: "/road-closures",
    },
    FeedItem {
        title: "New Crime Zone Reported",
        description: "Johannesburg Central",
        icon: "\u{1F6E1}",
        link: "/crime-zones",
    },
];

/// Options for the decorative location filter, `(value, label)`.
pub const LOCATION_OPTIONS: &[(&'static str, &'static str)] = &[
    ("all", "All Locations"),
    ("cape-town", "Cape Town"),
    ("johannesburg", "Johannesburg"),
    ("durban", "Durban"),
];

/// Dashboard page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    // Recorded but unwired: the filter does not affect anything shown.
    let selected_location = RwSignal::new("all".to_owned());

    view! {
        <PageShell>
            <div class="dashboard">
                <header class="dashboard__header">
                    <h1 class="dashboard__title">"Safety Alert System"</h1>
                    <select
                        class="dashboard__location"
                        on:change=move |ev| selected_location.set(event_target_value(&ev))
                    >
                        {LOCATION_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </header>

                <div class="dashboard__stats">
                    {STAT_CARDS
                        .iter()
                        .map(|card| {
                            view! {
                                <div class="stat-card">
                                    <div class="stat-card__header">
                                        <span class="stat-card__title">{card.title}</span>
                                        <span class="stat-card__icon" aria-hidden="true">{card.icon}</span>
                                    </div>
                                    <div class="stat-card__value">{card.value}</div>
                                    <p class="stat-card__change">{card.change}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">"Alert Map"</h2>
                    <div class="dashboard__map">
                        <MapHost/>
                    </div>
                </section>

                <section class="dashboard__card">
                    <h2 class="dashboard__card-title">"Recent Alerts"</h2>
                    <div class="alert-feed">
                        {RECENT_ALERTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="alert-feed__item">
                                        <div class="alert-feed__info">
                                            <span class="alert-feed__icon" aria-hidden="true">{item.icon}</span>
                                            <div>
                                                <h3 class="alert-feed__title">{item.title}</h3>
                                                <p class="alert-feed__description">{item.description}</p>
                                            </div>
                                        </div>
                                        <a class="alert-feed__details" href=item.link>
                                            "View Details"
                                            <span class="alert-feed__chevron" aria-hidden="true">"\u{203A}"</span>
                                        </a>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </PageShell>
    }
}

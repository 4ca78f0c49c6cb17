//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    crime_zones::CrimeZonesPage, dashboard::DashboardPage, missing_persons::MissingPersonsPage,
    road_closures::RoadClosuresPage, settings::SettingsPage, weather_alerts::WeatherAlertsPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Sets up client-side routing for the dashboard and the four record
/// pages. Layout state is owned per page, so no shared contexts are
/// provided here.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/safewatch.css"/>
        <Title text="Safety Alert System"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("missing-persons") view=MissingPersonsPage/>
                <Route path=StaticSegment("weather-alerts") view=WeatherAlertsPage/>
                <Route path=StaticSegment("road-closures") view=RoadClosuresPage/>
                <Route path=StaticSegment("crime-zones") view=CrimeZonesPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}

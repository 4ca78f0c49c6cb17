//! Crime zones record page.

use leptos::prelude::*;

use crate::components::entity_list::EntityListPage;
use crate::records::{CRIME_ZONES, CrimeZone};

#[component]
pub fn CrimeZonesPage() -> impl IntoView {
    let cards = CRIME_ZONES.iter().map(CrimeZone::card).collect();

    view! {
        <EntityListPage
            title="Crime Zones"
            search_placeholder="Search crime zones..."
            icon="\u{1F6E1}"
            cards=cards
        />
    }
}

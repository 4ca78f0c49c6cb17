//! Road closures record page.

use leptos::prelude::*;

use crate::components::entity_list::EntityListPage;
use crate::records::{ROAD_CLOSURES, RoadClosure};

#[component]
pub fn RoadClosuresPage() -> impl IntoView {
    let cards = ROAD_CLOSURES.iter().map(RoadClosure::card).collect();

    view! {
        <EntityListPage
            title="Road Closures"
            search_placeholder="Search road closures..."
            icon="\u{1F4CD}"
            cards=cards
        />
    }
}

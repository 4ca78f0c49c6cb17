//! Missing persons record page.

use leptos::prelude::*;

use crate::components::entity_list::EntityListPage;
use crate::records::{MISSING_PERSONS, MissingPerson};

#[component]
pub fn MissingPersonsPage() -> impl IntoView {
    let cards = MISSING_PERSONS.iter().map(MissingPerson::card).collect();

    view! {
        <EntityListPage
            title="Missing Persons"
            search_placeholder="Search missing persons..."
            icon="\u{1F512}"
            cards=cards
        />
    }
}

//! Shared record-list page: title, search box, card grid.

use leptos::prelude::*;

use crate::components::page_shell::PageShell;
use crate::components::record_card::RecordCard;
use crate::records::CardFields;

/// One record page: heading, a search input, and one card per record in
/// input order. The search input is a decorative placeholder; nothing
/// filters the grid.
#[component]
pub fn EntityListPage(
    title: &'static str,
    search_placeholder: &'static str,
    icon: &'static str,
    cards: Vec<CardFields>,
) -> impl IntoView {
    let grid = cards
        .into_iter()
        .map(|fields| view! { <RecordCard fields=fields icon=icon/> })
        .collect::<Vec<_>>();

    view! {
        <PageShell>
            <div class="entity-page">
                <h1 class="entity-page__title">{title}</h1>
                <div class="entity-page__search">
                    <span class="entity-page__search-icon" aria-hidden="true">"\u{1F50D}"</span>
                    <input
                        class="entity-page__search-input"
                        type="search"
                        placeholder=search_placeholder
                    />
                </div>
                <div class="entity-page__grid">{grid}</div>
            </div>
        </PageShell>
    }
}

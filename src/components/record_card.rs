//! Card for one safety record in an entity grid.

use leptos::prelude::*;

use crate::records::CardFields;

/// One record rendered as a card: title row with the page icon, large
/// primary value, small secondary line.
#[component]
pub fn RecordCard(fields: CardFields, icon: &'static str) -> impl IntoView {
    view! {
        <div class="record-card">
            <div class="record-card__header">
                <span class="record-card__title">{fields.title}</span>
                <span class="record-card__icon" aria-hidden="true">{icon}</span>
            </div>
            <div class="record-card__body">
                <div class="record-card__primary">{fields.primary}</div>
                <p class="record-card__secondary">{fields.secondary}</p>
            </div>
        </div>
    }
}

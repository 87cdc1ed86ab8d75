//! Placeholder page for header routes whose content lives in other modules.

use leptos::prelude::*;

#[component]
pub fn SectionPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="section-page">
            <h1>{title}</h1>
        </div>
    }
}

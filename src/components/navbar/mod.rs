//! Navigation bar component.

use leptos::prelude::*;

use crate::config::{APP_NAME, NAV_LINKS};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Sticky top navigation bar. Purely presentational.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class=css::navbar>
            <span class=css::brand>{APP_NAME}</span>
            <ul class=css::links>
                {NAV_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <li class=css::item>
                            <a class=css::link href=*href>{*label}</a>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

//! Navigation Bar Component
//!
//! Page title and links to the other screens; user management only for
//! administrators.

use leptos::prelude::*;

use crate::config::Screen;
use crate::context::AppContext;
use crate::i18n::t;

#[component]
pub fn NavBar(current: Option<Screen>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let lang = ctx.lang;

    let link_class = move |screen: Screen| {
        let active = match (current, screen) {
            (Some(Screen::EventDetail(_)), Screen::Events) => true,
            (Some(c), s) => c == s,
            (None, _) => false,
        };
        if active { "nav-link active" } else { "nav-link" }
    };

    view! {
        <nav class="navbar">
            <span class="navbar-title">{t(lang, "title")}</span>
            <a class=link_class(Screen::Inventory) href="/home">{t(lang, "home")}</a>
            <a class=link_class(Screen::Events) href="/events">{t(lang, "events")}</a>
            <Show when=move || ctx.role.can_manage_users()>
                <a class=link_class(Screen::Users) href="/users">{t(lang, "userManagement")}</a>
            </Show>
            <a class="nav-link logout" href="/logout">"⏻"</a>
        </nav>
    }
}

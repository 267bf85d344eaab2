//! Inventur Frontend App
//!
//! Picks the screen for the current page and provides the shared context.

use leptos::prelude::*;

use crate::components::NavBar;
use crate::config::{PageConfig, Screen};
use crate::context::AppContext;
use crate::i18n::t;
use crate::screens::{EventDetailScreen, EventsScreen, InventoryScreen, UsersScreen};

#[component]
pub fn App(config: PageConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(&config, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    leptos_filedrop::bind_global_drop_guard();

    let screen = config.screen;
    tracing::info!(?screen, role = ?config.role, "mounting");

    let body = match screen {
        Some(Screen::Inventory) => view! { <InventoryScreen /> }.into_any(),
        Some(Screen::Events) => view! { <EventsScreen /> }.into_any(),
        Some(Screen::EventDetail(event_id)) => view! { <EventDetailScreen event_id=event_id /> }.into_any(),
        Some(Screen::Users) => view! { <UsersScreen /> }.into_any(),
        None => view! { <p class="unknown-page">{t(ctx.lang, "unknown_page")}</p> }.into_any(),
    };

    view! {
        <NavBar current=screen />
        <main class="main-content">{body}</main>
    }
}

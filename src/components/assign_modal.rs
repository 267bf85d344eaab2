//! Assign Modal Component
//!
//! Checklist of the whole inventory; confirming assigns every checked
//! item with its amount to the event.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api::{self, ApiClient};
use crate::context::AppContext;
use crate::i18n::{t, tf};
use crate::models::CollectionItem;
use crate::prompt::{BrowserPrompter, Prompter};
use crate::screens::assignments::{assign_items, AssignPick};

#[component]
pub fn AssignModal(event_id: u32) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let lang = ctx.lang;
    let (open, set_open) = signal(false);
    let (inventory, set_inventory) = signal(Vec::<CollectionItem>::new());
    // Checked item id -> raw amount input
    let picks = RwSignal::new(BTreeMap::<u32, String>::new());

    let show = move |_| {
        picks.set(BTreeMap::new());
        set_open.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match api.fetch_collection(api::GET_INVENTORY, "id").await {
                Ok(items) => set_inventory.set(items),
                Err(e) => {
                    warn!(error = %e, "could not load inventory");
                    BrowserPrompter.alert(&format!("{}{}", t(lang, "err_prefix"), e.user_message()));
                }
            }
        });
    };

    let confirm = move |_| {
        let items = inventory.get_untracked();
        let selected: Vec<AssignPick> = picks
            .get_untracked()
            .iter()
            .filter_map(|(id, raw)| {
                let item = items.iter().find(|i| i.id == *id)?;
                Some(AssignPick::new(*id, raw, item.int("anzahl")))
            })
            .collect();
        for pick in &selected {
            pick.warn_if_exceeded(&BrowserPrompter, lang);
        }
        set_open.set(false);
        if selected.is_empty() {
            return;
        }
        let api = ctx.api();
        spawn_local(async move {
            let failures: Vec<String> = assign_items(&api, event_id, &selected)
                .await
                .into_iter()
                .filter_map(|r| r.err())
                .map(|e| e.user_message())
                .collect();
            if !failures.is_empty() {
                BrowserPrompter.alert(&format!("{}{}", t(lang, "err_prefix"), failures.join("\n")));
            }
            ctx.reload();
        });
    };

    let rows = move || {
        inventory
            .get()
            .into_iter()
            .map(|item| {
                let id = item.id;
                let max = item.int("anzahl");
                let available = max.unwrap_or(0);
                view! {
                    <li class="assign-row">
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || picks.with(|p| p.contains_key(&id))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    picks.update(|p| {
                                        if checked {
                                            p.entry(id).or_insert_with(|| "1".to_string());
                                        } else {
                                            p.remove(&id);
                                        }
                                    });
                                }
                            />
                            {item.text("name_id")}
                        </label>
                        <span class="available">{tf(lang, "available", &[("n", &available.to_string())])}</span>
                        <input
                            type="number"
                            class="qty-input"
                            min="1"
                            max=available.to_string()
                            prop:value=move || picks.with(|p| p.get(&id).cloned().unwrap_or_else(|| "1".to_string()))
                            on:change=move |ev| {
                                let pick = AssignPick::new(id, &event_target_value(&ev), max);
                                pick.warn_if_exceeded(&BrowserPrompter, lang);
                                picks.update(|p| {
                                    p.insert(id, pick.anzahl.to_string());
                                });
                            }
                        />
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <button class="assign-btn" on:click=show>{t(lang, "assign_items")}</button>
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h3>{t(lang, "assign_items")}</h3>
                        <button class="close-btn" title=t(lang, "close") on:click=move |_| set_open.set(false)>"×"</button>
                    </header>
                    <ul class="assign-list">{rows}</ul>
                    <button class="confirm-btn" on:click=confirm>{t(lang, "assign_confirm")}</button>
                </div>
            </div>
        </Show>
    }
}

//! Group Panel Component
//!
//! Inventory groups with an add field and per-group delete.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::NameArgs;
use crate::collection::CollectionController;
use crate::context::AppContext;
use crate::i18n::t;
use crate::models::Group;
use crate::prompt::{BrowserPrompter, Prompter};
use crate::screens::groups::{spec as groups_spec, validate_new_group};

#[component]
pub fn GroupPanel(groups: ReadSignal<Vec<Group>>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let lang = ctx.lang;
    let ctrl = StoredValue::new_local(Rc::new(CollectionController::new(
        ctx.api(),
        BrowserPrompter,
        lang,
        groups_spec(true),
    )));
    let (new_name, set_new_name) = signal(String::new());

    let add_group = move || {
        let name = match validate_new_group(&new_name.get_untracked(), &groups.get_untracked(), lang) {
            Ok(name) => name,
            Err(e) => {
                BrowserPrompter.alert(&e.user_message());
                return;
            }
        };
        let ctrl = ctrl.get_value();
        spawn_local(async move {
            let Ok(seed) = serde_json::to_value(NameArgs { name: &name }) else {
                return;
            };
            if ctrl.add(seed).await.is_ok() {
                set_new_name.set(String::new());
                ctx.reload();
            }
        });
    };
    let delete_group = move |id: u32| {
        let ctrl = ctrl.get_value();
        spawn_local(async move {
            // Items of the deleted group are moved server-side
            if ctrl.delete(id).await.is_ok() {
                ctx.reload();
            }
        });
    };

    view! {
        <section class="group-panel">
            <h3>{t(lang, "groups")}</h3>
            <ul class="group-list">
                {move || {
                    groups
                        .get()
                        .into_iter()
                        .map(|group| {
                            let id = group.id;
                            view! {
                                <li>
                                    <span>{group.name}</span>
                                    <button class="del-icon" title=t(lang, "deletB") on:click=move |_| delete_group(id)>
                                        "🗑"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <input
                type="text"
                placeholder=t(lang, "group_placeholder")
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_group();
                    }
                }
            />
            <button on:click=move |_| add_group()>{t(lang, "add_group")}</button>
        </section>
    }
}

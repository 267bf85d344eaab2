//! Editable Table Component
//!
//! Generic table over one collection. The controller lives as long as
//! the component; rows are rebuilt only when the controller's snapshot
//! changed, so a saved cell keeps focus moving naturally.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};

use super::editable_cell::EditableCell;
use crate::api::HttpApi;
use crate::collection::{CollectionController, CollectionSpec, RowView};
use crate::context::AppContext;
use crate::i18n::{t, Lang};
use crate::prompt::BrowserPrompter;

pub type Controller = CollectionController<HttpApi, BrowserPrompter>;

/// Copyable access to a table's controller from event handlers
#[derive(Clone, Copy)]
pub struct TableHandle {
    ctrl: StoredValue<Rc<Controller>, LocalStorage>,
    set_rows: WriteSignal<Vec<RowView>>,
    rendered: StoredValue<u64>,
    pub lang: Lang,
}

impl TableHandle {
    /// Run `task` against the controller, then re-render if the snapshot moved
    pub fn run<F, Fut>(self, task: F)
    where
        F: FnOnce(Rc<Controller>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let ctrl = self.ctrl.get_value();
        spawn_local(async move {
            task(ctrl.clone()).await;
            self.sync(&ctrl);
        });
    }

    pub fn sync(self, ctrl: &Controller) {
        let generation = ctrl.generation();
        if self.rendered.get_value() != generation {
            self.rendered.set_value(generation);
            self.set_rows.set(ctrl.row_views());
        }
    }
}

#[component]
pub fn EditableTable(
    spec: CollectionSpec,
    /// Values for `OptionSource::External` selects
    #[prop(optional, into)]
    options: Option<Signal<Vec<String>>>,
    /// Seed for a new row; `None` cancels the add
    #[prop(optional, into)]
    add_seed: Option<Callback<(), Option<Value>>>,
    /// Row action opening the document panel with `(id, title)`
    #[prop(optional, into)]
    on_documents: Option<Callback<(u32, String)>>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let lang = ctx.lang;
    let (rows, set_rows) = signal(Vec::<RowView>::new());
    let handle = TableHandle {
        ctrl: StoredValue::new_local(Rc::new(CollectionController::new(ctx.api(), BrowserPrompter, lang, spec.clone()))),
        set_rows,
        rendered: StoredValue::new(0),
        lang,
    };

    let name = spec.name;
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        tracing::debug!(collection = name, trigger, "reload requested");
        handle.run(|ctrl| async move { ctrl.recover().await });
    });

    let headers = spec
        .columns
        .iter()
        .map(|c| view! { <th>{t(lang, c.label)}</th> })
        .collect_view();
    let can_add = spec.add.is_some() && spec.editable;
    let on_add = move |_| {
        let seed = match add_seed {
            Some(cb) => cb.run(()),
            None => Some(json!({})),
        };
        if let Some(seed) = seed {
            handle.run(move |ctrl| async move {
                let _ = ctrl.add(seed).await;
            });
        }
    };
    let exclusive = spec.exclusive.is_some();
    let spec = StoredValue::new(spec);

    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {exclusive.then(|| view! { <th></th> })}
                    {headers}
                    <th>{t(lang, "actionC")}</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    rows.get()
                        .into_iter()
                        .map(|row| view! {
                            <TableRow row=row spec=spec handle=handle options=options on_documents=on_documents />
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
        <Show when=move || can_add>
            <button class="add-row-btn" on:click=on_add>{t(lang, "add_row")}</button>
        </Show>
    }
}

#[component]
fn TableRow(
    row: RowView,
    spec: StoredValue<CollectionSpec>,
    handle: TableHandle,
    options: Option<Signal<Vec<String>>>,
    on_documents: Option<Callback<(u32, String)>>,
) -> impl IntoView {
    let lang = handle.lang;
    let id = row.id;
    let (name, link, documents, deletable, exclusive) = spec.with_value(|s| {
        (
            s.name,
            s.row_link,
            s.documents,
            s.delete.is_some() && s.editable,
            s.exclusive.is_some(),
        )
    });
    let title = row.title.clone();

    let radio = exclusive.then(|| {
        view! {
            <td class="flag-cell">
                <input
                    type="radio"
                    name=name
                    prop:checked=row.active
                    on:click=move |_| {
                        handle.run(move |ctrl| async move {
                            if let Some(next) = ctrl.begin_toggle(id) {
                                // Peers are cleared before the server answers
                                handle.sync(&ctrl);
                                let _ = ctrl.send_selection(next).await;
                            }
                        });
                    }
                />
            </td>
        }
    });

    let cells = row
        .cells
        .into_iter()
        .map(|cell| view! { <EditableCell cell=cell row_id=id handle=handle options=options /> })
        .collect_view();

    view! {
        <tr class=if row.active { "active-row" } else { "" }>
            {radio}
            {cells}
            <td class="row-actions">
                {link.map(|link| view! {
                    <a class="details-link" href=format!("{}{}", link, id)>{t(lang, "details")}</a>
                })}
                {on_documents.filter(|_| documents).map(|cb| view! {
                    <button class="docs-btn" on:click=move |_| cb.run((id, title.clone()))>
                        {t(lang, "documents")}
                    </button>
                })}
                <Show when=move || deletable>
                    <button
                        class="del-icon"
                        title=t(lang, "deletB")
                        on:click=move |_| {
                            handle.run(move |ctrl| async move {
                                let _ = ctrl.delete(id).await;
                            });
                        }
                    >
                        "🗑"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

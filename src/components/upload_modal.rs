//! Upload Modal Component
//!
//! Document list of one item with a drop zone and a hidden file picker.
//! Mounted per open, so each open gets a fresh panel for its owner.

use std::future::Future;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_filedrop::{
    create_file_drop_signals, make_on_dragleave, make_on_dragover, make_on_drop, make_on_pick, open_picker,
};

use crate::api::HttpApi;
use crate::context::AppContext;
use crate::i18n::{t, tf};
use crate::models::Attachment;
use crate::prompt::BrowserPrompter;
use crate::upload::AttachmentPanel;

type Panel = AttachmentPanel<HttpApi, BrowserPrompter>;

#[derive(Clone, Copy)]
struct PanelHandle {
    panel: StoredValue<Rc<Panel>, LocalStorage>,
    set_attachments: WriteSignal<Vec<Attachment>>,
}

impl PanelHandle {
    /// Every panel call ends with a refresh; publish the list afterwards
    fn run<F, Fut>(self, task: F)
    where
        F: FnOnce(Rc<Panel>) -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let panel = self.panel.get_value();
        spawn_local(async move {
            task(panel.clone()).await;
            self.set_attachments.set(panel.attachments());
        });
    }
}

#[component]
pub fn UploadModal(
    owner_id: u32,
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let lang = ctx.lang;
    let policy = ctx.upload_policy();
    let accept = policy.accepted_mime().to_string();
    let panel = StoredValue::new_local(Rc::new(Panel::new(ctx.api(), BrowserPrompter, lang, policy, owner_id)));
    let (attachments, set_attachments) = signal(Vec::<Attachment>::new());

    let handle = PanelHandle { panel, set_attachments };

    handle.run(|panel| async move { panel.refresh().await });

    let upload = move |files: Vec<web_sys::File>| {
        handle.run(move |panel| async move {
            let report = panel.upload_batch(files).await;
            tracing::info!(
                owner_id = panel.owner_id(),
                uploaded = report.uploaded.len(),
                skipped = report.skipped.len(),
                failed = report.failed.len(),
                "upload batch finished"
            );
        });
    };
    let delete = move |id: u32| {
        handle.run(move |panel| async move {
            let _ = panel.delete_attachment(id).await;
        });
    };

    let drop = create_file_drop_signals();
    let picker = NodeRef::<leptos::html::Input>::new();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h3>{tf(lang, "docs_title", &[("name", &title)])}</h3>
                    <button class="close-btn" title=t(lang, "close") on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <ul class="attachment-list">
                    {move || {
                        let list = attachments.get();
                        if list.is_empty() {
                            return view! { <li class="empty">{t(lang, "docs_empty")}</li> }.into_any();
                        }
                        list.into_iter()
                            .map(|a| {
                                let id = a.id;
                                let href = a.href();
                                view! {
                                    <li>
                                        <a href=href target="_blank" rel="noopener">{a.filename}</a>
                                        <button class="del-icon" title=t(lang, "deletB") on:click=move |_| delete(id)>
                                            "🗑"
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
                <div
                    class=move || if drop.over_read.get() { "drop-zone drag-over" } else { "drop-zone" }
                    on:dragover=make_on_dragover(drop)
                    on:dragleave=make_on_dragleave(drop)
                    on:drop=make_on_drop(drop, upload)
                    on:click=move |_| {
                        if let Some(input) = picker.get() {
                            open_picker(&input);
                        }
                    }
                >
                    {t(lang, "drop_hint")}
                </div>
                <input
                    node_ref=picker
                    type="file"
                    multiple=true
                    accept=accept
                    style="display: none"
                    on:change=make_on_pick(upload)
                />
            </div>
        </div>
    }
}

//! Inventory Screen
//!
//! Inventory table, group management and per-item documents.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{json, Value};
use tracing::warn;

use crate::api::{self, ApiClient};
use crate::collection::{CollectionSpec, Column, DeleteMode, FieldKind, OptionSource};
use crate::components::{EditableTable, GroupPanel, UploadModal};
use crate::context::AppContext;
use crate::error::ApiResult;
use crate::i18n::t;
use crate::models::{Group, CollectionItem};
use crate::prompt::{BrowserPrompter, Prompter};

pub fn spec(editable: bool) -> CollectionSpec {
    let mut spec = CollectionSpec::new("inventory", api::GET_INVENTORY);
    spec.update = Some(api::UPDATE_INVENTORY);
    spec.add = Some(api::ADD_INVENTORY);
    spec.delete = Some(api::DELETE_INVENTORY);
    spec.delete_mode = DeleteMode::Reload;
    spec.title_field = "name_id";
    spec.documents = true;
    spec.editable = editable;
    spec.columns = vec![
        Column::new("gruppe", "col_gruppe", FieldKind::Select(OptionSource::External(None))),
        Column::new("name_id", "col_name_id", FieldKind::Text),
        Column::new("lagerort", "col_lagerort", FieldKind::Text),
        Column::new("anzahl", "col_anzahl", FieldKind::Quantity { min: 1, max_field: None }),
        Column::new("aktuell", "col_aktuell", FieldKind::Derived { compare: "anzahl" }),
        Column::new("info", "infoC", FieldKind::Text),
    ];
    spec
}

/// Seed of a new inventory row: it starts in the first group.
/// `None` when there is no group to put it in.
pub fn new_row_seed(groups: &[Group]) -> Option<Value> {
    groups.first().map(|g| json!({ "gruppe": g.name }))
}

pub async fn load_groups<A: ApiClient>(api: &A) -> ApiResult<Vec<Group>> {
    let items: Vec<CollectionItem> = api.fetch_collection(api::GET_GROUPS, "id").await?;
    Ok(items.iter().map(Group::from_item).collect())
}

#[component]
pub fn InventoryScreen() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (groups, set_groups) = signal(Vec::<Group>::new());
    let (documents_for, set_documents_for) = signal::<Option<(u32, String)>>(None);
    let editable = ctx.role.can_edit_inventory();

    // Groups feed the select column and the add seed
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match load_groups(&api).await {
                Ok(loaded) => set_groups.set(loaded),
                Err(e) => warn!(error = %e, "could not load groups"),
            }
        });
    });

    let lang = ctx.lang;
    let add_seed = Callback::new(move |_: ()| {
        let seed = new_row_seed(&groups.get_untracked());
        if seed.is_none() {
            BrowserPrompter.alert(&format!("{}{}", t(lang, "err_prefix"), t(lang, "err_no_group")));
        }
        seed
    });
    let group_names = Signal::derive(move || groups.get().into_iter().map(|g| g.name).collect::<Vec<_>>());

    view! {
        <Show when=move || editable>
            <GroupPanel groups=groups />
        </Show>
        <EditableTable
            spec=spec(editable)
            options=group_names
            add_seed=add_seed
            on_documents=Callback::new(move |target: (u32, String)| set_documents_for.set(Some(target)))
        />
        {move || documents_for.get().map(|(owner_id, title)| view! {
            <UploadModal
                owner_id=owner_id
                title=title
                on_close=Callback::new(move |_: ()| set_documents_for.set(None))
            />
        })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;

    #[test]
    fn test_seed_uses_first_group() {
        let groups = vec![
            Group { id: 2, name: "Licht".into() },
            Group { id: 1, name: "Audio".into() },
        ];
        assert_eq!(new_row_seed(&groups), Some(json!({"gruppe": "Licht"})));
        assert_eq!(new_row_seed(&[]), None);
    }

    #[test]
    fn test_read_only_for_plain_users() {
        let spec = spec(false);
        assert!(!spec.editable);
        assert!(spec.documents);
    }

    #[tokio::test]
    async fn test_load_groups() {
        let api = MockApi::new().with_rows(api::GET_GROUPS, json!([{"id": 1, "name": "Audio"}]));
        assert_eq!(load_groups(&api).await.unwrap(), vec![Group { id: 1, name: "Audio".into() }]);
    }
}

//! Events Screen
//!
//! Event list with the single active-event flag.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::warn;

use crate::api::{self, ApiClient};
use crate::collection::{CollectionSpec, Column, ExclusiveFlag, FieldKind, OptionSource};
use crate::components::EditableTable;
use crate::context::AppContext;
use crate::error::ApiResult;

pub fn spec() -> CollectionSpec {
    let mut spec = CollectionSpec::new("events", api::GET_EVENTS);
    spec.update = Some(api::UPDATE_EVENT);
    spec.add = Some(api::ADD_EVENT);
    spec.delete = Some(api::DELETE_EVENT);
    spec.delete_confirm = "confirm_delete_event";
    spec.exclusive = Some(ExclusiveFlag { field: "is_active", endpoint: api::SET_ACTIVE_EVENT });
    spec.title_field = "name";
    spec.row_link = Some(api::EVENT_DETAIL_PAGE);
    spec.columns = vec![
        Column::new("datum", "col_datum", FieldKind::Date),
        Column::new("name", "col_name", FieldKind::Text),
        Column::new("ort", "col_ort", FieldKind::Text),
        Column::new(
            "verantwortlich",
            "col_verantwortlich",
            FieldKind::Select(OptionSource::External(Some(("-", "none_option")))),
        ),
        Column::new("info", "infoC", FieldKind::Text),
    ];
    spec
}

/// Names offered for "verantwortlich"
pub async fn load_user_names<A: ApiClient>(api: &A) -> ApiResult<Vec<String>> {
    let body = api.fetch_json(api::GET_USER_NAMES).await?;
    Ok(serde_json::from_value(body)?)
}

#[component]
pub fn EventsScreen() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (names, set_names) = signal(Vec::<String>::new());

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let api = ctx.api();
        spawn_local(async move {
            match load_user_names(&api).await {
                Ok(loaded) => set_names.set(loaded),
                Err(e) => warn!(error = %e, "could not load user names"),
            }
        });
    });

    view! {
        <EditableTable spec=spec() options=Signal::derive(move || names.get()) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use serde_json::json;

    #[test]
    fn test_events_spec() {
        let spec = spec();
        assert_eq!(spec.exclusive.as_ref().map(|f| f.field), Some("is_active"));
        assert_eq!(spec.column("datum").map(|c| &c.kind), Some(&FieldKind::Date));
        assert!(spec.editable);
    }

    #[tokio::test]
    async fn test_load_user_names() {
        let api = MockApi::new().with_rows(api::GET_USER_NAMES, json!(["Admin", "User_1"]));
        assert_eq!(load_user_names(&api).await.unwrap(), vec!["Admin", "User_1"]);
    }
}

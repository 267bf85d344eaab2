//! Event Detail Screen
//!
//! Inventory assigned to one event, with bounded amounts, plus a
//! checklist modal for assigning several items at once.

use futures::future::join_all;
use leptos::prelude::*;
use tracing::{info, warn};

use crate::api::{self, ApiClient, AssignItemArgs};
use crate::collection::{CollectionSpec, Column, FieldKind, QuantityBound, UpdateShape};
use crate::components::{AssignModal, EditableTable};
use crate::error::ApiResult;
use crate::i18n::{tf, Lang};
use crate::prompt::Prompter;

pub fn spec(event_id: u32) -> CollectionSpec {
    let mut spec = CollectionSpec::new("assignments", api::event_items(event_id));
    spec.id_field = "assignment_id";
    spec.update = Some(api::UPDATE_ASSIGNMENT_QTY);
    spec.update_shape = UpdateShape::Named("anzahl");
    spec.delete = Some(api::REMOVE_ASSIGNMENT);
    spec.delete_confirm = "confirm_remove_assignment";
    spec.title_field = "name_id";
    spec.columns = vec![
        Column::new("gruppe", "col_gruppe", FieldKind::ReadOnly),
        Column::new("name_id", "col_name_id", FieldKind::ReadOnly),
        Column::new("lagerort", "col_lagerort", FieldKind::ReadOnly),
        Column::new("assigned_qty", "col_assigned", FieldKind::Quantity { min: 1, max_field: Some("anzahl") }),
    ];
    spec
}

/// One checked row of the assign modal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssignPick {
    pub inventory_id: u32,
    pub anzahl: i64,
    /// The available count, if the typed amount was above it
    pub exceeded: Option<i64>,
}

impl AssignPick {
    /// Amount clamped to `[1, available]`
    pub fn new(inventory_id: u32, raw: &str, available: Option<i64>) -> Self {
        let clamped = QuantityBound::new(1, available).clamp_input(raw);
        Self {
            inventory_id,
            anzahl: clamped.value,
            exceeded: clamped.exceeded,
        }
    }

    /// Alert once if the amount had to be cut down
    pub fn warn_if_exceeded<P: Prompter>(&self, prompt: &P, lang: Lang) {
        if let Some(max) = self.exceeded {
            prompt.alert(&tf(lang, "warn_qty_max", &[("max", &max.to_string())]));
        }
    }
}

/// Post all picks at once; results come back in pick order
pub async fn assign_items<A: ApiClient>(api: &A, event_id: u32, picks: &[AssignPick]) -> Vec<ApiResult<()>> {
    let calls = picks.iter().map(|pick| async move {
        let payload = serde_json::to_value(AssignItemArgs {
            event_id,
            inventory_id: pick.inventory_id,
            anzahl: pick.anzahl,
        })?;
        api.mutate(api::ASSIGN_ITEM, payload).await
    });
    let results = join_all(calls).await;
    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(event_id, failed, "some assignments were rejected");
    } else {
        info!(event_id, count = picks.len(), "items assigned");
    }
    results
}

#[component]
pub fn EventDetailScreen(event_id: u32) -> impl IntoView {
    view! {
        <AssignModal event_id=event_id />
        <EditableTable spec=spec(event_id) />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::prompt::ScriptedPrompter;
    use serde_json::json;

    #[test]
    fn test_pick_amount_is_clamped() {
        assert_eq!(AssignPick::new(5, "10", Some(3)).anzahl, 3);
        assert_eq!(AssignPick::new(5, "0", Some(3)).anzahl, 1);
        assert_eq!(AssignPick::new(5, "2", None).anzahl, 2);
    }

    #[test]
    fn test_pick_above_available_warns() {
        let prompt = ScriptedPrompter::default();
        let pick = AssignPick::new(5, "10", Some(3));

        pick.warn_if_exceeded(&prompt, Lang::De);

        assert_eq!(pick.exceeded, Some(3));
        assert_eq!(prompt.alerts(), vec!["Maximale verfügbare Menge (3) überschritten!".to_string()]);
    }

    #[test]
    fn test_pick_within_available_is_quiet() {
        let prompt = ScriptedPrompter::default();
        for pick in [AssignPick::new(5, "3", Some(3)), AssignPick::new(5, "0", Some(3))] {
            pick.warn_if_exceeded(&prompt, Lang::De);
            assert_eq!(pick.exceeded, None);
        }
        assert!(prompt.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_assign_posts_one_call_per_pick() {
        let api = MockApi::new();
        let picks = [AssignPick::new(5, "2", Some(3)), AssignPick::new(6, "1", Some(8))];

        let results = assign_items(&api, 4, &picks).await;

        assert!(results.iter().all(|r| r.is_ok()));
        assert_eq!(
            api.mutations(),
            vec![
                (api::ASSIGN_ITEM.to_string(), json!({"event_id": 4, "inventory_id": 5, "anzahl": 2})),
                (api::ASSIGN_ITEM.to_string(), json!({"event_id": 4, "inventory_id": 6, "anzahl": 1})),
            ]
        );
    }

    #[test]
    fn test_spec_routes_by_event() {
        let spec = spec(4);
        assert_eq!(spec.fetch, "/api/get_event_items/4");
        assert_eq!(spec.id_field, "assignment_id");
    }
}

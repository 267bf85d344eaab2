//! Row View Models
//!
//! Snapshot → rows, one per item, one cell per column. The view renders
//! these as text nodes, so item content is never parsed as markup.

use super::descriptor::{CollectionSpec, Column, FieldKind};
use super::edit::MASK_PLACEHOLDER;
use super::quantity::QuantityBound;
use crate::models::CollectionItem;

/// Highlight of derived values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    /// Differs from the value it derives from
    Changed,
    /// Below zero
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub column: Column,
    pub value: String,
    pub editable: bool,
    pub bound: Option<QuantityBound>,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: u32,
    pub title: String,
    pub active: bool,
    pub cells: Vec<CellView>,
}

pub fn build_rows(spec: &CollectionSpec, items: &[CollectionItem]) -> Vec<RowView> {
    items.iter().map(|item| build_row(spec, item)).collect()
}

fn build_row(spec: &CollectionSpec, item: &CollectionItem) -> RowView {
    let cells = spec
        .columns
        .iter()
        .map(|column| build_cell(spec, column, item))
        .collect();
    RowView {
        id: item.id,
        title: item.text(spec.title_field),
        active: spec.exclusive.as_ref().is_some_and(|flag| item.flag(flag.field)),
        cells,
    }
}

fn build_cell(spec: &CollectionSpec, column: &Column, item: &CollectionItem) -> CellView {
    let mut tone = Tone::Plain;
    let mut bound = None;
    let value = match &column.kind {
        FieldKind::Masked => MASK_PLACEHOLDER.to_string(),
        FieldKind::Quantity { min, max_field } => {
            bound = Some(QuantityBound::new(*min, max_field.and_then(|f| item.int(f))));
            item.int(column.field).unwrap_or(0).to_string()
        }
        FieldKind::Derived { compare } => {
            let derived = item.int(column.field).or_else(|| item.int(compare));
            tone = match (derived, item.int(compare)) {
                (Some(v), _) if v < 0 => Tone::Negative,
                (Some(v), Some(base)) if v != base => Tone::Changed,
                _ => Tone::Plain,
            };
            derived.map(|v| v.to_string()).unwrap_or_default()
        }
        _ => item.text(column.field),
    };
    CellView {
        column: column.clone(),
        value,
        editable: spec.editable && column.is_editable_kind(),
        bound,
        tone,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::ExclusiveFlag;
    use serde_json::json;

    fn spec() -> CollectionSpec {
        let mut spec = CollectionSpec::new("inv", "/api/get_inventory");
        spec.title_field = "name_id";
        spec.columns = vec![
            Column::new("name_id", "col_name_id", FieldKind::Text),
            Column::new("anzahl", "col_anzahl", FieldKind::Quantity { min: 1, max_field: Some("verfuegbar") }),
            Column::new("aktuell", "col_aktuell", FieldKind::Derived { compare: "anzahl" }),
            Column::new("password", "col_password", FieldKind::Masked),
        ];
        spec
    }

    fn items() -> Vec<CollectionItem> {
        vec![
            json!({"id": 1, "name_id": "<b>Kabel</b>", "anzahl": 4, "aktuell": 4, "verfuegbar": 6, "password": "hash"}),
            json!({"id": 2, "name_id": "Mikro", "anzahl": 2, "aktuell": 1}),
            json!({"id": 3, "name_id": "Ständer", "anzahl": 1, "aktuell": -1}),
        ]
        .into_iter()
        .map(|v| CollectionItem::from_value(v, "id").unwrap())
        .collect()
    }

    #[test]
    fn test_one_row_per_item() {
        let rows = build_rows(&spec(), &items());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.cells.len() == 4));
        assert!(build_rows(&spec(), &[]).is_empty());
    }

    #[test]
    fn test_cells_carry_raw_text_and_hide_secrets() {
        let rows = build_rows(&spec(), &items());
        assert_eq!(rows[0].title, "<b>Kabel</b>");
        assert_eq!(rows[0].cells[0].value, "<b>Kabel</b>");
        assert_eq!(rows[0].cells[3].value, MASK_PLACEHOLDER);
    }

    #[test]
    fn test_quantity_bound_and_tones() {
        let rows = build_rows(&spec(), &items());
        assert_eq!(rows[0].cells[1].bound, Some(QuantityBound::new(1, Some(6))));
        assert_eq!(rows[1].cells[1].bound, Some(QuantityBound::new(1, None)));
        assert_eq!(rows[0].cells[2].tone, Tone::Plain);
        assert_eq!(rows[1].cells[2].tone, Tone::Changed);
        assert_eq!(rows[2].cells[2].tone, Tone::Negative);
    }

    #[test]
    fn test_read_only_spec_disables_editing() {
        let mut spec = spec();
        spec.editable = false;
        let rows = build_rows(&spec, &items());
        assert!(rows[0].cells.iter().all(|c| !c.editable));
    }

    #[test]
    fn test_active_flag() {
        let mut spec = spec();
        spec.exclusive = Some(ExclusiveFlag { field: "is_active", endpoint: "/api/set_active_event" });
        let items: Vec<CollectionItem> = vec![json!({"id": 1, "is_active": 0}), json!({"id": 2, "is_active": 1})]
            .into_iter()
            .map(|v| CollectionItem::from_value(v, "id").unwrap())
            .collect();
        let rows = build_rows(&spec, &items);
        assert!(!rows[0].active);
        assert!(rows[1].active);
    }
}

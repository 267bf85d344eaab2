//! Collection Descriptors
//!
//! Everything that differs between table screens, as data.

use serde_json::{json, Value};

/// Where a select gets its options
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// Fixed `(value, label key)` pairs
    Static(&'static [(&'static str, &'static str)]),
    /// Values fed by the screen from another collection; optionally led by
    /// a "none" entry `(value, label key)`
    External(Option<(&'static str, &'static str)>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    /// Write-only; never displayed, never stored locally
    Masked,
    /// `YYYY-MM-DD`
    Date,
    Select(OptionSource),
    /// Numeric stepper; the max comes from another field of the same row
    Quantity { min: i64, max_field: Option<&'static str> },
    /// Not editable; highlighted when it drifts from `compare`
    Derived { compare: &'static str },
    ReadOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub field: &'static str,
    /// i18n key of the header
    pub label: &'static str,
    pub kind: FieldKind,
}

impl Column {
    pub fn new(field: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { field, label, kind }
    }

    pub fn is_editable_kind(&self) -> bool {
        !matches!(self.kind, FieldKind::ReadOnly | FieldKind::Derived { .. })
    }
}

/// Body shape of a single-field update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateShape {
    /// `{ id, field, value }`
    FieldValue,
    /// `{ id, <key>: value }`, for routes that update one fixed column
    Named(&'static str),
}

/// What to do locally after a successful delete
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeleteMode {
    RemoveRow,
    /// Deleting has effects on other rows
    Reload,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExclusiveFlag {
    pub field: &'static str,
    pub endpoint: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSpec {
    /// Short name for logs and radio groups
    pub name: &'static str,
    pub id_field: &'static str,
    pub fetch: String,
    pub add: Option<&'static str>,
    pub update: Option<&'static str>,
    pub update_shape: UpdateShape,
    pub delete: Option<&'static str>,
    pub delete_mode: DeleteMode,
    /// i18n key of the delete confirmation
    pub delete_confirm: &'static str,
    pub exclusive: Option<ExclusiveFlag>,
    /// Field naming the row in titles (upload panel)
    pub title_field: &'static str,
    /// Per-row link, the row id is appended
    pub row_link: Option<&'static str>,
    /// Row action opening the document panel
    pub documents: bool,
    pub columns: Vec<Column>,
    /// Role allows editing
    pub editable: bool,
}

impl CollectionSpec {
    pub fn new(name: &'static str, fetch: impl Into<String>) -> Self {
        Self {
            name,
            id_field: "id",
            fetch: fetch.into(),
            add: None,
            update: None,
            update_shape: UpdateShape::FieldValue,
            delete: None,
            delete_mode: DeleteMode::Reload,
            delete_confirm: "confirm_delete",
            exclusive: None,
            title_field: "id",
            row_link: None,
            documents: false,
            columns: Vec::new(),
            editable: true,
        }
    }

    pub fn column(&self, field: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn update_payload(&self, id: u32, field: &str, value: Value) -> Value {
        match self.update_shape {
            UpdateShape::FieldValue => json!({ "id": id, "field": field, "value": value }),
            UpdateShape::Named(key) => {
                let mut body = serde_json::Map::new();
                body.insert("id".into(), json!(id));
                body.insert(key.into(), value);
                Value::Object(body)
            }
        }
    }
}

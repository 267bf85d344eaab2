//! Frontend Models
//!
//! Transient client-side copies of backend entities.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, ApiResult};

/// One row of any collection: a server-assigned identity plus scalar fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionItem {
    pub id: u32,
    pub fields: Map<String, Value>,
}

impl CollectionItem {
    /// Build an item from a JSON object, reading identity from `id_field`.
    /// The identity field stays in `fields` as well.
    pub fn from_value(value: Value, id_field: &str) -> ApiResult<Self> {
        let Value::Object(fields) = value else {
            return Err(ApiError::Protocol(format!("expected object, got {}", value)));
        };
        let id = fields
            .get(id_field)
            .and_then(parse_id)
            .ok_or_else(|| ApiError::Protocol(format!("missing or invalid `{}`", id_field)))?;
        Ok(Self { id, fields })
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field rendered as display text; null and missing render empty
    pub fn text(&self, field: &str) -> String {
        match self.fields.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn int(&self, field: &str) -> Option<i64> {
        match self.fields.get(field)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Truthiness as the backend stores flags (0/1 or bool)
    pub fn flag(&self, field: &str) -> bool {
        match self.fields.get(field) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64().unwrap_or(0) != 0,
            _ => false,
        }
    }

    pub fn set(&mut self, field: &str, value: Value) {
        self.fields.insert(field.to_string(), value);
    }
}

fn parse_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Parse a JSON array body into items
pub fn items_from_value(value: Value, id_field: &str) -> ApiResult<Vec<CollectionItem>> {
    let Value::Array(rows) = value else {
        return Err(ApiError::Protocol("expected array of items".to_string()));
    };
    rows.into_iter()
        .map(|row| CollectionItem::from_value(row, id_field))
        .collect()
}

/// Inventory group (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
}

impl Group {
    pub fn from_item(item: &CollectionItem) -> Self {
        Self {
            id: item.id,
            name: item.text("name"),
        }
    }
}

/// Document attached to an inventory item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: u32,
    #[serde(default, rename = "inventory_id")]
    pub owner_id: Option<u32>,
    pub filename: String,
    pub filepath: String,
}

impl Attachment {
    /// Link target, relative to the site root
    pub fn href(&self) -> String {
        format!("/{}", self.filepath.trim_start_matches('/'))
    }
}

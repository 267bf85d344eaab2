//! Inventory Groups
//!
//! Groups are a plain add/delete list; the last one cannot be deleted
//! (the server enforces this, the client just reports it).

use crate::api;
use crate::collection::{CollectionSpec, Column, FieldKind};
use crate::error::{ApiError, ApiResult};
use crate::i18n::{t, Lang};
use crate::models::Group;

pub fn spec(editable: bool) -> CollectionSpec {
    let mut spec = CollectionSpec::new("groups", api::GET_GROUPS);
    spec.add = Some(api::ADD_GROUP);
    spec.delete = Some(api::DELETE_GROUP);
    spec.delete_confirm = "confirm_delete_group";
    spec.title_field = "name";
    spec.editable = editable;
    spec.columns = vec![Column::new("name", "col_name", FieldKind::ReadOnly)];
    spec
}

/// Advisory check of a new group name against the loaded list
pub fn validate_new_group(raw: &str, existing: &[Group], lang: Lang) -> ApiResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ApiError::validation(t(lang, "err_group_empty")));
    }
    let lower = name.to_lowercase();
    if existing.iter().any(|g| g.name.to_lowercase() == lower) {
        return Err(ApiError::validation(t(lang, "err_group_exists")));
    }
    Ok(name.to_string())
}

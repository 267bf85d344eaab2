//! User Management Screen

use leptos::prelude::*;

use crate::api;
use crate::collection::{CollectionSpec, Column, DeleteMode, FieldKind, OptionSource};
use crate::components::EditableTable;
use crate::context::AppContext;

/// Stored role value and its label key
pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("Administrator", "role_admin"),
    ("Editor", "role_editor"),
    ("User", "role_user"),
];

pub fn spec(editable: bool) -> CollectionSpec {
    let mut spec = CollectionSpec::new("users", api::LIST_USERS);
    spec.update = Some(api::UPDATE_USER);
    spec.add = Some(api::ADD_USER);
    spec.delete = Some(api::DELETE_USER);
    spec.delete_mode = DeleteMode::RemoveRow;
    spec.delete_confirm = "confirm_delete_user";
    spec.title_field = "username";
    spec.editable = editable;
    spec.columns = vec![
        Column::new("username", "col_username", FieldKind::Text),
        Column::new("password", "col_password", FieldKind::Masked),
        Column::new("role", "col_role", FieldKind::Select(OptionSource::Static(ROLE_OPTIONS))),
        Column::new("info", "infoC", FieldKind::Text),
    ];
    spec
}

#[component]
pub fn UsersScreen() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    view! { <EditableTable spec=spec(ctx.role.can_manage_users()) /> }
}

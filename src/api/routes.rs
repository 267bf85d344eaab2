//! Backend Routes
//!
//! Endpoint paths and the JSON argument shapes they accept.

use serde::Serialize;

// ========================
// Inventory
// ========================

pub const GET_INVENTORY: &str = "/api/get_inventory";
pub const ADD_INVENTORY: &str = "/api/add_inventory";
pub const UPDATE_INVENTORY: &str = "/api/update_inventory";
pub const DELETE_INVENTORY: &str = "/api/delete_inventory";

// ========================
// Groups
// ========================

pub const GET_GROUPS: &str = "/api/get_groups";
pub const ADD_GROUP: &str = "/api/add_group";
pub const DELETE_GROUP: &str = "/api/delete_group";

// ========================
// Events
// ========================

pub const GET_EVENTS: &str = "/api/get_events";
pub const ADD_EVENT: &str = "/api/add_event";
pub const UPDATE_EVENT: &str = "/api/update_event";
pub const DELETE_EVENT: &str = "/api/delete_event";
pub const SET_ACTIVE_EVENT: &str = "/api/set_active_event";
pub const EVENT_DETAIL_PAGE: &str = "/event_detail/";

// ========================
// Users
// ========================

pub const LIST_USERS: &str = "/api/list_users";
pub const GET_USER_NAMES: &str = "/api/get_users";
pub const ADD_USER: &str = "/api/add_user";
pub const UPDATE_USER: &str = "/api/update_user";
pub const DELETE_USER: &str = "/api/delete_user";

// ========================
// Event Assignments
// ========================

pub const ASSIGN_ITEM: &str = "/api/assign_item";
pub const UPDATE_ASSIGNMENT_QTY: &str = "/api/update_assignment_qty";
pub const REMOVE_ASSIGNMENT: &str = "/api/remove_assignment";

pub fn event_items(event_id: u32) -> String {
    format!("/api/get_event_items/{}", event_id)
}

// ========================
// Attachments
// ========================

pub const UPLOAD_PDF: &str = "/api/upload_pdf";
pub const DELETE_PDF: &str = "/api/delete_pdf";

pub fn attachments_of(item_id: u32) -> String {
    format!("/api/get_pdfs/{}", item_id)
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct IdArgs {
    pub id: u32,
}

#[derive(Serialize)]
pub struct SelectArgs {
    pub id: Option<u32>,
}

#[derive(Serialize)]
pub struct NameArgs<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct AssignItemArgs {
    pub event_id: u32,
    pub inventory_id: u32,
    pub anzahl: i64,
}

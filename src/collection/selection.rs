//! Exclusive Selection
//!
//! At most one row per collection carries the flag. The server enforces
//! it; these helpers only compute the request and mirror it locally.

use serde_json::json;

use crate::models::CollectionItem;

/// Clicking the holder clears the flag, clicking anyone else moves it
pub fn next_selection(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

pub fn active_id(items: &[CollectionItem], field: &str) -> Option<u32> {
    items.iter().find(|item| item.flag(field)).map(|item| item.id)
}

/// Clear every peer, then set the winner
pub fn mirror_selection(items: &mut [CollectionItem], field: &str, selected: Option<u32>) {
    for item in items.iter_mut() {
        let active = selected == Some(item.id);
        item.set(field, json!(active as i32));
    }
}

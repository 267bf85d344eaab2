//! In-memory backend for tests
//!
//! Mirrors the backend's observable rules closely enough to drive the
//! controllers: field updates, exclusive flag, last-group protection.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use serde_json::{json, Value};

use super::*;
use crate::error::{ApiError, ApiResult};

#[derive(Default)]
struct MockState {
    collections: HashMap<String, Vec<Value>>,
    mutations: Vec<(String, Value)>,
    uploads: Vec<(String, String, u32)>,
    fetches: Vec<String>,
    rejections: HashMap<String, String>,
    held_fetch: Option<oneshot::Receiver<()>>,
    next_id: u32,
}

#[derive(Clone, Default)]
pub struct MockApi {
    state: Rc<RefCell<MockState>>,
}

impl MockApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.state.borrow_mut().next_id = 100;
        api
    }

    pub fn with_rows(self, endpoint: &str, rows: Value) -> Self {
        self.set_rows(endpoint, rows);
        self
    }

    pub fn set_rows(&self, endpoint: &str, rows: Value) {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => panic!("rows must be an array, got {}", other),
        };
        self.state.borrow_mut().collections.insert(endpoint.to_string(), rows);
    }

    pub fn rows(&self, endpoint: &str) -> Vec<Value> {
        self.state.borrow().collections.get(endpoint).cloned().unwrap_or_default()
    }

    /// Make every call to `endpoint` fail with `message`
    pub fn reject(&self, endpoint: &str, message: &str) {
        self.state.borrow_mut().rejections.insert(endpoint.to_string(), message.to_string());
    }

    pub fn accept(&self, endpoint: &str) {
        self.state.borrow_mut().rejections.remove(endpoint);
    }

    pub fn mutations(&self) -> Vec<(String, Value)> {
        self.state.borrow().mutations.clone()
    }

    pub fn uploads(&self) -> Vec<(String, String, u32)> {
        self.state.borrow().uploads.clone()
    }

    pub fn fetch_count(&self, endpoint: &str) -> usize {
        self.state.borrow().fetches.iter().filter(|e| *e == endpoint).count()
    }

    /// The next fetch snapshots its data (or its rejection), then waits
    /// until the sender fires
    pub fn hold_next_fetch(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().held_fetch = Some(rx);
        tx
    }
}

/// Which collection a mutation endpoint writes to
fn collection_of(endpoint: &str) -> Option<&'static str> {
    match endpoint {
        ADD_INVENTORY | UPDATE_INVENTORY | DELETE_INVENTORY => Some(GET_INVENTORY),
        ADD_EVENT | UPDATE_EVENT | DELETE_EVENT | SET_ACTIVE_EVENT => Some(GET_EVENTS),
        ADD_USER | UPDATE_USER | DELETE_USER => Some(LIST_USERS),
        ADD_GROUP | DELETE_GROUP => Some(GET_GROUPS),
        _ => None,
    }
}

fn id_of(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

impl MockState {
    fn apply(&mut self, endpoint: &str, payload: &Value) -> ApiResult<()> {
        if endpoint == DELETE_PDF {
            let id = id_of(&payload["id"]);
            for rows in self.collections.values_mut() {
                rows.retain(|r| r.get("filepath").is_none() || id_of(&r["id"]) != id);
            }
            return Ok(());
        }
        let Some(collection) = collection_of(endpoint) else {
            return Ok(());
        };
        let next_id = self.next_id;
        let rows = self.collections.entry(collection.to_string()).or_default();
        let target = id_of(&payload["id"]);

        match endpoint {
            ADD_INVENTORY | ADD_EVENT | ADD_USER | ADD_GROUP => {
                let mut row = match payload {
                    Value::Object(map) => map.clone(),
                    _ => Default::default(),
                };
                row.insert("id".into(), json!(next_id));
                rows.push(Value::Object(row));
                self.next_id += 1;
            }
            DELETE_GROUP if rows.len() <= 1 => {
                return Err(ApiError::validation("Es muss mindestens eine Gruppe existieren!"));
            }
            DELETE_INVENTORY | DELETE_EVENT | DELETE_USER | DELETE_GROUP => {
                rows.retain(|r| id_of(&r["id"]) != target);
            }
            SET_ACTIVE_EVENT => {
                for row in rows.iter_mut() {
                    let active = target.is_some() && id_of(&row["id"]) == target;
                    row["is_active"] = json!(active as i32);
                }
            }
            _ => {
                let field = payload["field"].as_str().unwrap_or_default().to_string();
                if field != "password" {
                    if let Some(row) = rows.iter_mut().find(|r| id_of(&r["id"]) == target) {
                        row[field.as_str()] = payload["value"].clone();
                    }
                }
            }
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl ApiClient for MockApi {
    async fn fetch_json(&self, endpoint: &str) -> ApiResult<Value> {
        let (snapshot, hold) = {
            let mut state = self.state.borrow_mut();
            state.fetches.push(endpoint.to_string());
            let snapshot = match state.rejections.get(endpoint) {
                Some(message) => Err(ApiError::Network(message.clone())),
                None => Ok(Value::Array(state.collections.get(endpoint).cloned().unwrap_or_default())),
            };
            (snapshot, state.held_fetch.take())
        };
        if let Some(release) = hold {
            let _ = release.await;
        }
        snapshot
    }

    async fn mutate(&self, endpoint: &str, payload: Value) -> ApiResult<()> {
        let mut state = self.state.borrow_mut();
        state.mutations.push((endpoint.to_string(), payload.clone()));
        if let Some(message) = state.rejections.get(endpoint) {
            return Err(ApiError::validation(message.clone()));
        }
        state.apply(endpoint, &payload)
    }

    async fn upload_file(&self, endpoint: &str, file: UploadFile, owner_id: u32) -> ApiResult<()> {
        let mut state = self.state.borrow_mut();
        state.uploads.push((endpoint.to_string(), file.name.clone(), owner_id));
        if let Some(message) = state.rejections.get(endpoint) {
            return Err(ApiError::validation(message.clone()));
        }
        let id = state.next_id;
        state.next_id += 1;
        state
            .collections
            .entry(attachments_of(owner_id))
            .or_default()
            .push(json!({
                "id": id,
                "inventory_id": owner_id,
                "filename": file.name,
                "filepath": format!("static/manuals/{}_{}", owner_id, file.name),
            }));
        Ok(())
    }
}

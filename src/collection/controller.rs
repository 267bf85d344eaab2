//! Collection Controller
//!
//! Owns one screen's snapshot. Every failure is answered the same way:
//! tell the user, then reload what the server has.

use std::cell::{Cell, RefCell};

use serde_json::Value;
use tracing::{debug, info, warn};

use super::descriptor::{CollectionSpec, DeleteMode, FieldKind};
use super::edit::{validate_commit, validate_date};
use super::quantity::QuantityBound;
use super::render::{build_rows, RowView};
use super::selection::{active_id, mirror_selection, next_selection};
use super::sequence::RequestSequencer;
use crate::api::{ApiClient, IdArgs, SelectArgs};
use crate::error::{ApiError, ApiResult};
use crate::i18n::{t, tf, Lang};
use crate::models::CollectionItem;
use crate::prompt::Prompter;

/// Result of committing one cell
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// Server accepted; local copy now holds the value
    Saved,
    /// Nothing to send (untouched masked field)
    Unchanged,
    /// Client-side check failed; nothing was sent, view reloaded
    Rejected,
    /// Server or network refused; view reloaded
    Reverted(ApiError),
}

pub struct CollectionController<A, P> {
    api: A,
    prompt: P,
    lang: Lang,
    spec: CollectionSpec,
    rows: RefCell<Vec<CollectionItem>>,
    /// Bumped whenever `rows` is replaced or reshaped
    generation: Cell<u64>,
    sequencer: RequestSequencer,
}

impl<A: ApiClient, P: Prompter> CollectionController<A, P> {
    pub fn new(api: A, prompt: P, lang: Lang, spec: CollectionSpec) -> Self {
        Self {
            api,
            prompt,
            lang,
            spec,
            rows: RefCell::new(Vec::new()),
            generation: Cell::new(0),
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn rows(&self) -> Vec<CollectionItem> {
        self.rows.borrow().clone()
    }

    pub fn row_views(&self) -> Vec<RowView> {
        build_rows(&self.spec, &self.rows.borrow())
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    fn bump(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    fn replace_rows(&self, items: Vec<CollectionItem>) {
        *self.rows.borrow_mut() = items;
        self.bump();
    }

    // ========================
    // Sync
    // ========================

    /// Fetch the full collection. `Ok(false)` when a newer reload was
    /// issued meanwhile and this result, snapshot or error, was dropped.
    pub async fn reload(&self) -> ApiResult<bool> {
        let ticket = self.sequencer.issue();
        debug!(collection = self.spec.name, ?ticket, "reloading");
        let fetched = self.api.fetch_collection(&self.spec.fetch, self.spec.id_field).await;
        if !self.sequencer.is_current(ticket) {
            debug!(collection = self.spec.name, ?ticket, "discarding stale snapshot");
            return Ok(false);
        }
        let items = fetched?;
        debug!(collection = self.spec.name, rows = items.len(), "snapshot loaded");
        self.replace_rows(items);
        Ok(true)
    }

    /// Reload and surface a failure instead of returning it. The view is
    /// rebuilt from the last good snapshot even if nothing new arrived.
    pub async fn recover(&self) {
        match self.reload().await {
            Ok(true) => {}
            Ok(false) => self.bump(),
            Err(e) => {
                warn!(collection = self.spec.name, error = %e, "reload failed");
                self.notify(&e);
                self.bump();
            }
        }
    }

    /// Blocking notification for a failure; aborts are silent
    pub fn notify(&self, err: &ApiError) {
        if err.is_abort() {
            return;
        }
        self.prompt
            .alert(&format!("{}{}", t(self.lang, "err_prefix"), err.user_message()));
    }

    // ========================
    // Field edits
    // ========================

    /// Commit an edited text, date or select cell
    pub async fn commit_field(&self, id: u32, field: &str, raw: &str) -> CommitOutcome {
        match self.validate(field, raw) {
            Ok(value) => self.push(id, field, value).await,
            Err(e) => {
                debug!(collection = self.spec.name, id, field, "rejected before sending");
                self.notify(&e);
                self.recover().await;
                CommitOutcome::Rejected
            }
        }
    }

    /// Commit a masked cell. Leaving it untouched is not an edit.
    pub async fn commit_masked(&self, id: u32, field: &str, secret: String) -> CommitOutcome {
        if secret.is_empty() {
            return CommitOutcome::Unchanged;
        }
        self.commit_field(id, field, &secret).await
    }

    fn validate(&self, field: &str, raw: &str) -> ApiResult<Value> {
        let value = validate_commit(raw, self.lang)?;
        if let Some(FieldKind::Date) = self.spec.column(field).map(|c| &c.kind) {
            validate_date(&value, self.lang)?;
        }
        Ok(Value::String(value))
    }

    async fn push(&self, id: u32, field: &str, value: Value) -> CommitOutcome {
        let Some(endpoint) = self.spec.update else {
            return CommitOutcome::Unchanged;
        };
        let masked = matches!(self.spec.column(field).map(|c| &c.kind), Some(FieldKind::Masked));
        let payload = self.spec.update_payload(id, field, value.clone());
        match self.api.mutate(endpoint, payload).await {
            Ok(()) => {
                info!(collection = self.spec.name, id, field, "field saved");
                if !masked {
                    if let Some(row) = self.rows.borrow_mut().iter_mut().find(|r| r.id == id) {
                        row.set(field, value);
                    }
                }
                CommitOutcome::Saved
            }
            Err(e) => {
                warn!(collection = self.spec.name, id, field, error = %e, "field rejected");
                self.notify(&e);
                self.recover().await;
                CommitOutcome::Reverted(e)
            }
        }
    }

    // ========================
    // Quantities
    // ========================

    pub fn bound_for(&self, id: u32, field: &str) -> Option<QuantityBound> {
        let FieldKind::Quantity { min, max_field } = self.spec.column(field)?.kind else {
            return None;
        };
        let rows = self.rows.borrow();
        let row = rows.iter().find(|r| r.id == id)?;
        Some(QuantityBound::new(min, max_field.and_then(|f| row.int(f))))
    }

    /// Clamp, warn if above max, send the clamped value, reload
    pub async fn set_quantity(&self, id: u32, field: &str, raw: &str) -> CommitOutcome {
        let Some(bound) = self.bound_for(id, field) else {
            warn!(collection = self.spec.name, id, field, "no quantity column for row");
            return CommitOutcome::Rejected;
        };
        let clamped = bound.clamp_input(raw);
        if let Some(max) = clamped.exceeded {
            self.prompt
                .alert(&tf(self.lang, "warn_qty_max", &[("max", &max.to_string())]));
        }
        let outcome = self.push(id, field, Value::from(clamped.value)).await;
        if outcome == CommitOutcome::Saved {
            // Derived columns depend on the quantity
            self.recover().await;
        }
        outcome
    }

    /// `+`/`-` buttons
    pub async fn step_quantity(&self, id: u32, field: &str, delta: i64) -> CommitOutcome {
        let Some(bound) = self.bound_for(id, field) else {
            return CommitOutcome::Rejected;
        };
        let current = self
            .rows
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.int(field))
            .unwrap_or(bound.min);
        let next = bound.step(current, delta);
        self.set_quantity(id, field, &next.to_string()).await
    }

    // ========================
    // Exclusive flag
    // ========================

    /// Compute the new holder and mirror it locally.
    /// `None` if this collection has no exclusive flag.
    pub fn begin_toggle(&self, clicked: u32) -> Option<Option<u32>> {
        let flag = self.spec.exclusive.as_ref()?;
        let mut rows = self.rows.borrow_mut();
        let next = next_selection(active_id(&rows, flag.field), clicked);
        mirror_selection(&mut rows, flag.field, next);
        drop(rows);
        self.bump();
        Some(next)
    }

    /// Send the holder (or `null`) and render whatever the server ends up with
    pub async fn send_selection(&self, selected: Option<u32>) -> ApiResult<()> {
        let Some(flag) = self.spec.exclusive.clone() else {
            return Ok(());
        };
        let payload = serde_json::to_value(SelectArgs { id: selected })?;
        let result = self.api.mutate(flag.endpoint, payload).await;
        match &result {
            Ok(()) => info!(collection = self.spec.name, ?selected, "selection sent"),
            Err(e) => {
                warn!(collection = self.spec.name, error = %e, "selection rejected");
                self.notify(e);
            }
        }
        self.recover().await;
        result
    }

    pub async fn toggle_exclusive(&self, clicked: u32) -> ApiResult<()> {
        match self.begin_toggle(clicked) {
            Some(next) => self.send_selection(next).await,
            None => Ok(()),
        }
    }

    // ========================
    // Add / Delete
    // ========================

    /// Create a row from `seed`; the server fills in the rest
    pub async fn add(&self, seed: Value) -> ApiResult<()> {
        let Some(endpoint) = self.spec.add else {
            return Ok(());
        };
        let result = self.api.mutate(endpoint, seed).await;
        match &result {
            Ok(()) => info!(collection = self.spec.name, "row added"),
            Err(e) => {
                warn!(collection = self.spec.name, error = %e, "add rejected");
                self.notify(e);
            }
        }
        self.recover().await;
        result
    }

    /// Ask, delete, then drop the row or reload
    pub async fn delete(&self, id: u32) -> ApiResult<()> {
        let Some(endpoint) = self.spec.delete else {
            return Ok(());
        };
        if !self.prompt.confirm(t(self.lang, self.spec.delete_confirm)) {
            debug!(collection = self.spec.name, id, "delete declined");
            return Err(ApiError::UserAbort);
        }
        let payload = serde_json::to_value(IdArgs { id })?;
        match self.api.mutate(endpoint, payload).await {
            Ok(()) => {
                info!(collection = self.spec.name, id, "row deleted");
                match self.spec.delete_mode {
                    DeleteMode::RemoveRow => {
                        self.rows.borrow_mut().retain(|r| r.id != id);
                        self.bump();
                    }
                    DeleteMode::Reload => self.recover().await,
                }
                Ok(())
            }
            Err(e) => {
                warn!(collection = self.spec.name, id, error = %e, "delete rejected");
                self.notify(&e);
                self.recover().await;
                Err(e)
            }
        }
    }
}

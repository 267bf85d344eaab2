//! Inline Cell Editing
//!
//! Per-cell edit lifecycle (idle → editing → syncing) and the hidden
//! buffer behind masked fields.

use chrono::NaiveDate;

use crate::error::{ApiError, ApiResult};
use crate::i18n::{t, Lang};

pub const MASK_CHAR: char = '•';

/// What a masked cell shows when not being edited
pub const MASK_PLACEHOLDER: &str = "••••••••";

/// Trimmed value, or a validation error if nothing is left
pub fn validate_commit(raw: &str, lang: Lang) -> ApiResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(t(lang, "err_empty_value")));
    }
    Ok(trimmed.to_string())
}

/// ISO calendar date as produced by `<input type="date">`
pub fn validate_date(value: &str, lang: Lang) -> ApiResult<()> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| ApiError::validation(t(lang, "err_invalid_date")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Idle,
    Editing,
    Syncing,
}

impl CellState {
    pub fn focus(self) -> Self {
        match self {
            CellState::Syncing => CellState::Syncing,
            _ => CellState::Editing,
        }
    }

    /// Leaving the cell. Only an editing cell commits.
    pub fn blur(self) -> (Self, bool) {
        match self {
            CellState::Editing => (CellState::Syncing, true),
            other => (other, false),
        }
    }

    pub fn settled(self) -> Self {
        CellState::Idle
    }
}

/// Real value of a masked cell while the visible text is all mask characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaskedBuffer {
    real: String,
}

impl MaskedBuffer {
    /// Start a fresh edit; the previous value is never shown or reused
    pub fn begin(&mut self) {
        self.real.clear();
    }

    /// Reconcile with what the cell now shows and return the mask to show.
    /// Growth appends the trailing new characters, shrink drops from the end.
    pub fn apply_visible(&mut self, visible: &str) -> String {
        let visible: Vec<char> = visible.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let have = self.real.chars().count();
        if visible.len() > have {
            let added = visible.len() - have;
            self.real.extend(&visible[visible.len() - added..]);
        } else if visible.len() < have {
            self.real = self.real.chars().take(visible.len()).collect();
        }
        self.mask()
    }

    pub fn mask(&self) -> String {
        std::iter::repeat(MASK_CHAR).take(self.real.chars().count()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Hand out the value and forget it
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.real)
    }
}

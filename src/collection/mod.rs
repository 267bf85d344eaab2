//! Editable Collections
//!
//! Generic controller behind every table screen: fetch a snapshot, render
//! rows, push single-field edits, and fall back to the server's state
//! whenever something goes wrong.

mod controller;
mod descriptor;
mod edit;
mod quantity;
mod render;
mod selection;
mod sequence;


pub use controller::CollectionController;
pub use descriptor::{CollectionSpec, Column, DeleteMode, ExclusiveFlag, FieldKind, OptionSource, UpdateShape};
pub use edit::{CellState, MaskedBuffer, MASK_PLACEHOLDER};
pub use quantity::QuantityBound;
pub use render::{CellView, RowView, Tone};
pub use sequence::RequestSequencer;

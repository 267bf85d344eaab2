//! UI Components
//!
//! Reusable Leptos components.

mod assign_modal;
mod editable_cell;
mod editable_table;
mod group_panel;
mod nav_bar;
mod quantity_stepper;
mod upload_modal;

pub use assign_modal::AssignModal;
pub use editable_table::EditableTable;
pub use group_panel::GroupPanel;
pub use nav_bar::NavBar;
pub use upload_modal::UploadModal;

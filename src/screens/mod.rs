//! Screens
//!
//! One module per page: the collection descriptor plus the component
//! composing it with the shared widgets.

pub mod assignments;
pub mod events;
pub mod groups;
pub mod inventory;
pub mod users;

pub use assignments::EventDetailScreen;
pub use events::EventsScreen;
pub use inventory::InventoryScreen;
pub use users::UsersScreen;

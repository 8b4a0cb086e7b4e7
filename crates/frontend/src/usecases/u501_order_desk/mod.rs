//! Order desk: catalog with quantity picker, order list with status filter,
//! and the detail panel with Pay/Ship/Cancel.
//!
//! - api.rs: `OrdersApi` seam and its HTTP implementation
//! - state.rs: `AppState` and its action methods
//! - controller.rs: async command handlers
//! - view.rs, ui/: Leptos components

pub mod api;
pub mod controller;
pub mod state;
pub mod ui;
pub mod view;

pub use view::OrderDesk;

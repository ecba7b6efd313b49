//! Message handlers
//!
//! One handler per feature domain. Each subscribes to a fixed set of event
//! kinds, owns its subscription bindings (dropping the handler detaches
//! everything) and translates events into slice actions, composers and ui
//! events. An event whose payload failed to decode is dropped without any
//! state change.

mod inventory;
mod mod_tools;
mod navigator;
mod wired;

pub use inventory::InventoryHandler;
pub use mod_tools::ModToolsHandler;
pub use navigator::NavigatorHandler;
pub use wired::WiredHandler;

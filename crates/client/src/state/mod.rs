//! State slices and the reducer discipline
//!
//! Every feature domain keeps its authoritative state in a slice mutated
//! only through a pure transition function. Handlers dispatch actions;
//! views read snapshots and register change listeners. No view ever holds
//! a mutable alias to slice-owned data.

mod inventory;
mod mod_tools;
mod navigator;
mod store;
mod wired;

pub use inventory::{InventoryAction, InventoryState};
pub use mod_tools::{ModToolsAction, ModToolsState};
pub use navigator::{NavigatorAction, NavigatorState};
pub use store::{ListenerToken, Slice, Store};
pub use wired::{WiredAction, WiredState};

//! Parlor protocol catalogue
//!
//! Wire-adjacent types exchanged with the server, used by both the client
//! core (consuming events, composing commands) and whatever transport
//! adapter frames them. The transport itself is out of scope here: this
//! crate only defines the shapes.
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Removing or renaming variants is a breaking change

pub mod composers;
pub mod events;

pub use composers::Composer;
pub use events::{ProtocolEvent, ProtocolEventKind};

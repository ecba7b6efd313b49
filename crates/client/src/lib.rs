//! Parlor client core
//!
//! The event-dispatch and state-synchronization core of the client. The UI
//! stays synchronized with two independent producers: the server connection
//! (inbound [`parlor_shared::ProtocolEvent`]s) and the room simulation
//! engine (widget updates). Neither producer is implemented here; this crate
//! turns their events into state changes, and state reads into outbound
//! commands, without any view holding engine internals.
//!
//! Data flow:
//!
//! ```text
//! transport -> ProtocolEvent -> EventDispatcher -> message handler
//!     -> slice action -> Store -> change listeners (views)
//! view -> WidgetMessage -> WidgetMessageBridge -> engine call | Composer -> CommandBus
//! engine -> WidgetUpdate -> EventDispatcher -> widget controllers
//! ```

pub mod events;
pub mod handlers;
pub mod messaging;
pub mod notifications;
pub mod session;
pub mod state;
pub mod widgets;

pub use messaging::{BusEvent, CommandBus, EventDispatcher, Subscription, SubscriptionBinding};

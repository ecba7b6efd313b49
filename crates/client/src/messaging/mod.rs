//! Messaging primitives
//!
//! The per-kind publish/subscribe dispatcher, the lifecycle binding that
//! keeps handler registrations in step with their owning component, and the
//! command bus carrying composed outbound messages to the transport.

mod binding;
mod command_bus;
mod dispatcher;

pub use binding::SubscriptionBinding;
pub use command_bus::{CommandBus, CommandReceiver};
pub use dispatcher::{BusEvent, EventDispatcher, Subscription};

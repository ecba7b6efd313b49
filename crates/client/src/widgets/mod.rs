//! Room widget layer
//!
//! The bidirectional protocol between room-object ui widgets and the
//! simulation engine: widgets issue [`WidgetMessage`] commands through the
//! [`WidgetMessageBridge`]; the engine pushes [`WidgetUpdate`] events back
//! over the widget dispatcher. No widget holds engine internals directly.

mod avatar_info;
mod bridge;
mod messages;
mod updates;

pub use avatar_info::{AvatarInfoController, AvatarInfoState, NameBubble};
pub use bridge::WidgetMessageBridge;
pub use messages::WidgetMessage;
pub use updates::{InfostandData, UseProductItem, WidgetUpdate, WidgetUpdateKind};

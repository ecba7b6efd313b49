//! Widget messages: ui-originated commands toward the engine
//!
//! Issued by room-object widgets (context menus, the infostand, decorate
//! mode) and routed by the bridge. Validation happens in the issuing
//! widget, read from current state before the message is constructed; the
//! bridge performs none.

use parlor_domain::{
    AvatarExpression, DanceStyle, ObjectId, ObjectOperation, Posture, RoomObjectCategory,
    UserAction, UserId,
};

/// A command issued by a ui widget, consumed by the widget message bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetMessage {
    /// Ask for the display name of a room object (rollover bubbles)
    GetObjectName {
        object_id: ObjectId,
        category: RoomObjectCategory,
    },

    /// Ask the engine to assemble infostand data for a room object
    GetObjectInfo {
        object_id: ObjectId,
        category: RoomObjectCategory,
    },

    /// Sit down or stand up
    ChangePosture(Posture),

    /// Play an expression animation
    AvatarExpression(AvatarExpression),

    /// Start or stop dancing
    Dance(DanceStyle),

    /// Avatar self-action targeting a user id
    UserAction { kind: UserAction, user_id: UserId },

    /// Furniture manipulation from decorate mode
    ObjectOperation {
        object_id: ObjectId,
        operation: ObjectOperation,
    },
}

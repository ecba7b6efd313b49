//! Engine collaborator surface
//!
//! The sync core never reaches into the simulation engine; it talks to
//! these traits, injected at construction. Keeps every handler and the
//! widget bridge testable against mocks.

use parlor_domain::{
    AvatarExpression, DanceStyle, ObjectId, Posture, RoomId, RoomObjectCategory, UserId,
};

/// Read-only identity of the authenticated session.
#[cfg_attr(test, mockall::automock)]
pub trait SessionData: Send + Sync {
    fn user_id(&self) -> UserId;
    fn user_name(&self) -> String;
    /// Avatar figure string, for appearance lookups.
    fn figure(&self) -> String;
}

/// Handle to the engine's current room session.
///
/// Queries are read-only; the command methods hand the request to the
/// engine, which owns the authoritative object state and does its own
/// wire traffic for avatar actions.
#[cfg_attr(test, mockall::automock)]
pub trait RoomSession: Send + Sync {
    fn room_id(&self) -> RoomId;

    /// Room index of the session user's own avatar.
    fn own_room_index(&self) -> ObjectId;

    fn posture(&self) -> Posture;

    /// Display name of a room object, if the engine knows it.
    fn object_name(&self, object_id: ObjectId, category: RoomObjectCategory) -> Option<String>;

    /// Ask the engine to assemble infostand data for an object. The result
    /// arrives later as a widget update.
    fn request_object_info(&self, object_id: ObjectId, category: RoomObjectCategory);

    fn change_posture(&self, posture: Posture);

    fn avatar_expression(&self, expression: AvatarExpression);

    fn dance(&self, style: DanceStyle);

    fn drop_carry_item(&self, user_id: UserId);

    /// Mirror of the ui decorate-mode flag, read by the engine's input
    /// handling.
    fn set_decorating(&self, decorating: bool);
}

/// Creates engine room sessions when the user enters or is forwarded into a
/// room.
#[cfg_attr(test, mockall::automock)]
pub trait RoomSessionManager: Send + Sync {
    fn create_session(&self, room_id: RoomId);
}

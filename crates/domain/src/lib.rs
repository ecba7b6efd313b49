//! Parlor domain layer
//!
//! Pure value types shared by the protocol catalogue and the client core:
//! entity ids, room and room-object vocabulary, moderation records, and the
//! unified domain error type. No I/O, no engine references.

pub mod error;
pub mod ids;
pub mod moderation;
pub mod objects;
pub mod rooms;

pub use error::DomainError;
pub use ids::{IssueId, ItemId, ObjectId, RoomId, UserId};
pub use moderation::{CfhCategory, CfhTopic, ModerationSettings, Ticket};
pub use objects::{
    AvatarExpression, DanceStyle, ObjectOperation, Posture, RoomObjectCategory, UserAction,
};
pub use rooms::{DoorMode, RoomData, RoomInfoData};

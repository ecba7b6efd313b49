//! Room value objects
//!
//! `RoomData` is the server's description of a room as carried by navigator
//! results; `RoomInfoData` is the client-side aggregate the navigator slice
//! keeps about the room the user is currently in.

use serde::{Deserialize, Serialize};

use crate::ids::RoomId;

/// How a room's door admits visitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DoorMode {
    #[default]
    Open,
    Doorbell,
    Password,
    Invisible,
}

/// Server-provided room description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomData {
    pub room_id: RoomId,
    pub name: String,
    pub owner_name: String,
    pub door_mode: DoorMode,
    #[serde(default)]
    pub user_count: u32,
    #[serde(default)]
    pub max_user_count: u32,
    #[serde(default)]
    pub description: String,
}

/// Aggregate the navigator keeps about the current room.
///
/// Updated copy-on-write: handlers build a new value and dispatch it, they
/// never mutate the one held by the slice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomInfoData {
    pub current_room_owner: bool,
    pub current_room_id: Option<RoomId>,
    pub entered_guest_room: Option<RoomData>,
}

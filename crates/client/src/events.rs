//! Local event families
//!
//! Two in-process namespaces distinct from the protocol events: `UiEvent`
//! for cross-feature signals between views, and `EngineEvent` for room
//! lifecycle notifications from the simulation engine. Each family rides
//! its own dispatcher instance, so kinds can never collide with the
//! protocol namespace.

use parlor_domain::{RoomData, RoomId, UserId};
use parlor_shared::{ProtocolEvent, ProtocolEventKind};

use crate::messaging::BusEvent;

impl BusEvent for ProtocolEvent {
    type Kind = ProtocolEventKind;

    fn kind(&self) -> ProtocolEventKind {
        ProtocolEvent::kind(self)
    }
}

// =============================================================================
// UI events
// =============================================================================

/// Cross-feature ui signals.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Open the moderation room-info panel for a room
    OpenRoomInfo { room_id: RoomId },

    /// Open the moderation chatlog panel for a room
    OpenRoomChatlog { room_id: RoomId },

    /// Open the moderation user-info panel for a user
    OpenUserInfo { user_id: UserId },

    /// Open the moderation chatlog panel for a user
    OpenUserChatlog { user_id: UserId },

    /// The door-state flow of the room being entered changed
    DoorState {
        state: DoorState,
        room: Option<RoomData>,
    },

    /// Start the name-change flow
    NameChangeInit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UiEventKind {
    OpenRoomInfo,
    OpenRoomChatlog,
    OpenUserInfo,
    OpenUserChatlog,
    DoorState,
    NameChangeInit,
}

impl BusEvent for UiEvent {
    type Kind = UiEventKind;

    fn kind(&self) -> UiEventKind {
        match self {
            Self::OpenRoomInfo { .. } => UiEventKind::OpenRoomInfo,
            Self::OpenRoomChatlog { .. } => UiEventKind::OpenRoomChatlog,
            Self::OpenUserInfo { .. } => UiEventKind::OpenUserInfo,
            Self::OpenUserChatlog { .. } => UiEventKind::OpenUserChatlog,
            Self::DoorState { .. } => UiEventKind::DoorState,
            Self::NameChangeInit => UiEventKind::NameChangeInit,
        }
    }
}

/// Stages of the door-entry flow shown while waiting at a closed door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoorState {
    /// Ring the doorbell and wait
    StartDoorbell,
    /// Prompt for the room password
    StartPassword,
    /// Doorbell rung, waiting for an answer
    Waiting,
    /// Doorbell answered, entry under way
    Accepted,
    /// Nobody answered the doorbell
    NoAnswer,
    /// Password rejected by the server
    WrongPassword,
}

// =============================================================================
// Engine events
// =============================================================================

/// Room lifecycle notifications from the simulation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// A room finished initializing and is on screen
    RoomInitialized { room_id: RoomId },

    /// A room was torn down
    RoomDisposed { room_id: RoomId },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineEventKind {
    RoomInitialized,
    RoomDisposed,
}

impl BusEvent for EngineEvent {
    type Kind = EngineEventKind;

    fn kind(&self) -> EngineEventKind {
        match self {
            Self::RoomInitialized { .. } => EngineEventKind::RoomInitialized,
            Self::RoomDisposed { .. } => EngineEventKind::RoomDisposed,
        }
    }
}

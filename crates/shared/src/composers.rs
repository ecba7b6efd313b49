//! Outbound composer messages
//!
//! Commands composed by the client core and handed to the outbound sink.
//! Fire-and-forget: no variant here expects a correlated response; whatever
//! the server answers arrives later as an independent [`ProtocolEvent`].
//!
//! [`ProtocolEvent`]: crate::events::ProtocolEvent

use serde::{Deserialize, Serialize};

use parlor_domain::{IssueId, ItemId, ObjectId, RoomId, UserId};

/// Messages from client to server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Composer {
    // =========================================================================
    // Navigator
    // =========================================================================
    /// Request the navigator category list
    NavigatorCategories,

    /// Request the user's navigator settings (home room among them)
    NavigatorSettings,

    /// Request info about a room.
    ///
    /// `extended` asks for the full description; `forward` asks the server to
    /// move the user into the room once resolved.
    RoomInfo {
        room_id: RoomId,
        extended: bool,
        forward: bool,
    },

    /// Answer a password-protected door
    RoomPassword { room_id: RoomId, password: String },

    /// Answer a ringing doorbell
    AnswerDoorbell { user_name: String, accept: bool },

    // =========================================================================
    // Moderation
    // =========================================================================
    /// Pick an issue for handling
    PickIssue { issue_id: IssueId },

    /// Close an issue with a resolution code
    CloseIssue { issue_id: IssueId, resolution: i32 },

    /// Release picked issues back to the queue
    ReleaseIssues { issue_ids: Vec<IssueId> },

    /// Request a user's chatlog
    UserChatlog { user_id: UserId },

    /// Request a room's chatlog
    RoomChatlog { room_id: RoomId },

    // =========================================================================
    // Room objects
    // =========================================================================
    /// Rotate a furniture item in place
    RotateObject { object_id: ObjectId, direction: i32 },

    /// Move a furniture item
    MoveObject {
        object_id: ObjectId,
        x: i32,
        y: i32,
        direction: i32,
    },

    /// Pick a furniture item up into the inventory
    PickupObject { object_id: ObjectId },

    // =========================================================================
    // Wired furniture
    // =========================================================================
    /// Open the wired editor for an item
    WiredOpen { item_id: ItemId },

    /// Save an edited wired definition
    WiredSave {
        item_id: ItemId,
        code: i32,
        string_param: String,
        int_params: Vec<i32>,
        selected_items: Vec<ItemId>,
    },

    // =========================================================================
    // Inventory
    // =========================================================================
    /// Request the full furniture inventory
    RequestFurniInventory,

    /// Request the badge inventory
    RequestBadges,
}

impl Composer {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NavigatorCategories => "NavigatorCategories",
            Self::NavigatorSettings => "NavigatorSettings",
            Self::RoomInfo { .. } => "RoomInfo",
            Self::RoomPassword { .. } => "RoomPassword",
            Self::AnswerDoorbell { .. } => "AnswerDoorbell",
            Self::PickIssue { .. } => "PickIssue",
            Self::CloseIssue { .. } => "CloseIssue",
            Self::ReleaseIssues { .. } => "ReleaseIssues",
            Self::UserChatlog { .. } => "UserChatlog",
            Self::RoomChatlog { .. } => "RoomChatlog",
            Self::RotateObject { .. } => "RotateObject",
            Self::MoveObject { .. } => "MoveObject",
            Self::PickupObject { .. } => "PickupObject",
            Self::WiredOpen { .. } => "WiredOpen",
            Self::WiredSave { .. } => "WiredSave",
            Self::RequestFurniInventory => "RequestFurniInventory",
            Self::RequestBadges => "RequestBadges",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composer_tagging_round_trips() {
        let composer = Composer::RoomInfo {
            room_id: RoomId::new(9),
            extended: true,
            forward: false,
        };

        let json = serde_json::to_value(&composer).expect("composer should serialize");
        assert_eq!(json["type"], "RoomInfo");

        let back: Composer = serde_json::from_value(json).expect("composer should deserialize");
        assert_eq!(back, composer);
    }
}

//! Widget updates: engine-originated state toward the ui
//!
//! Selection, rollover, removal and infostand data pushed by the engine
//! onto the widget dispatcher. Each infostand variant is its own kind so a
//! consumer can subscribe to exactly the object classes it renders.

use parlor_domain::{ObjectId, RoomObjectCategory, UserId};

use crate::messaging::BusEvent;

/// Infostand payloads per object class.
///
/// `room_index` identifies units (avatars, bots, pets); furniture is
/// identified by its object id.
#[derive(Debug, Clone, PartialEq)]
pub enum InfostandData {
    Furni {
        object_id: ObjectId,
        type_id: i32,
        name: String,
        description: String,
        owner_name: String,
    },
    OwnUser {
        room_index: ObjectId,
        user_id: UserId,
        name: String,
        figure: String,
        carry_item: i32,
        allow_name_change: bool,
    },
    PeerUser {
        room_index: ObjectId,
        user_id: UserId,
        name: String,
        figure: String,
    },
    Bot {
        room_index: ObjectId,
        name: String,
    },
    RentableBot {
        room_index: ObjectId,
        name: String,
        owner_id: UserId,
    },
    Pet {
        room_index: ObjectId,
        name: String,
        is_owner: bool,
    },
}

impl InfostandData {
    /// The room object this infostand describes.
    pub fn target(&self) -> (ObjectId, RoomObjectCategory) {
        match self {
            Self::Furni { object_id, .. } => (*object_id, RoomObjectCategory::Floor),
            Self::OwnUser { room_index, .. }
            | Self::PeerUser { room_index, .. }
            | Self::Bot { room_index, .. }
            | Self::RentableBot { room_index, .. }
            | Self::Pet { room_index, .. } => (*room_index, RoomObjectCategory::Unit),
        }
    }
}

/// A product-use bubble offered above an avatar.
#[derive(Debug, Clone, PartialEq)]
pub struct UseProductItem {
    pub id: ObjectId,
    pub request_room_object_id: ObjectId,
    pub name: String,
}

/// Engine/selection state pushed into the ui.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetUpdate {
    ObjectSelected {
        object_id: ObjectId,
        category: RoomObjectCategory,
    },
    ObjectDeselected,
    ObjectRollOver {
        object_id: ObjectId,
        category: RoomObjectCategory,
    },
    ObjectRollOut {
        object_id: ObjectId,
        category: RoomObjectCategory,
    },
    FurniRemoved {
        object_id: ObjectId,
    },
    UserRemoved {
        room_index: ObjectId,
    },
    /// Answer to a name request; also used for name bubbles
    ObjectName {
        object_id: ObjectId,
        category: RoomObjectCategory,
        name: String,
    },
    /// Infostand data ready for display
    Infostand(InfostandData),
    DecorateMode {
        active: bool,
    },
    DanceStatus {
        dancing: bool,
    },
    /// Engine switched between normal and game mode
    EngineMode {
        game_mode: bool,
    },
    /// Product-use bubbles to offer
    UseProductBubbles {
        items: Vec<UseProductItem>,
    },
}

/// Discriminant for [`WidgetUpdate`]; infostand variants are split per
/// object class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetUpdateKind {
    ObjectSelected,
    ObjectDeselected,
    ObjectRollOver,
    ObjectRollOut,
    FurniRemoved,
    UserRemoved,
    ObjectName,
    InfostandFurni,
    InfostandOwnUser,
    InfostandPeerUser,
    InfostandBot,
    InfostandRentableBot,
    InfostandPet,
    DecorateMode,
    DanceStatus,
    EngineMode,
    UseProductBubbles,
}

impl BusEvent for WidgetUpdate {
    type Kind = WidgetUpdateKind;

    fn kind(&self) -> WidgetUpdateKind {
        match self {
            Self::ObjectSelected { .. } => WidgetUpdateKind::ObjectSelected,
            Self::ObjectDeselected => WidgetUpdateKind::ObjectDeselected,
            Self::ObjectRollOver { .. } => WidgetUpdateKind::ObjectRollOver,
            Self::ObjectRollOut { .. } => WidgetUpdateKind::ObjectRollOut,
            Self::FurniRemoved { .. } => WidgetUpdateKind::FurniRemoved,
            Self::UserRemoved { .. } => WidgetUpdateKind::UserRemoved,
            Self::ObjectName { .. } => WidgetUpdateKind::ObjectName,
            Self::Infostand(data) => match data {
                InfostandData::Furni { .. } => WidgetUpdateKind::InfostandFurni,
                InfostandData::OwnUser { .. } => WidgetUpdateKind::InfostandOwnUser,
                InfostandData::PeerUser { .. } => WidgetUpdateKind::InfostandPeerUser,
                InfostandData::Bot { .. } => WidgetUpdateKind::InfostandBot,
                InfostandData::RentableBot { .. } => WidgetUpdateKind::InfostandRentableBot,
                InfostandData::Pet { .. } => WidgetUpdateKind::InfostandPet,
            },
            Self::DecorateMode { .. } => WidgetUpdateKind::DecorateMode,
            Self::DanceStatus { .. } => WidgetUpdateKind::DanceStatus,
            Self::EngineMode { .. } => WidgetUpdateKind::EngineMode,
            Self::UseProductBubbles { .. } => WidgetUpdateKind::UseProductBubbles,
        }
    }
}

/// Every infostand kind, for consumers that render all of them.
pub(crate) const INFOSTAND_KINDS: [WidgetUpdateKind; 6] = [
    WidgetUpdateKind::InfostandFurni,
    WidgetUpdateKind::InfostandOwnUser,
    WidgetUpdateKind::InfostandPeerUser,
    WidgetUpdateKind::InfostandBot,
    WidgetUpdateKind::InfostandRentableBot,
    WidgetUpdateKind::InfostandPet,
];

//! Inbound protocol events
//!
//! Each variant is one parsed server message. Payload-carrying variants hold
//! `Option<Data>`: the transport delivers `None` when the frame arrived but
//! its parser failed, and every consumer must treat that as a no-op rather
//! than an error. One kind maps to exactly one payload shape, so consumers
//! match on the variant and never probe structure at runtime.

use serde::{Deserialize, Serialize};

use parlor_domain::{
    CfhCategory, IssueId, ItemId, ModerationSettings, RoomData, RoomId, Ticket, UserId,
};

/// Events received from the server, after frame parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProtocolEvent {
    // =========================================================================
    // Session
    // =========================================================================
    /// Session is ready; carries the authenticated user's identity
    UserInfo(Option<UserInfoData>),

    /// Generic server-side error, discriminated by code
    GenericError(Option<GenericErrorData>),

    // =========================================================================
    // Navigator
    // =========================================================================
    /// Server instructs the client to forward into a room
    RoomForward(Option<RoomForwardData>),

    /// Entry info for the room just entered
    RoomEntryInfo(Option<RoomEntryInfoData>),

    /// Result of a guest-room query: enter, forward, or metadata only
    GuestRoomResult(Option<GuestRoomResultData>),

    /// Doorbell is ringing (empty user name: it is our own ring)
    RoomDoorbell(Option<DoorbellData>),

    /// Doorbell ring was answered
    RoomDoorbellAccepted(Option<DoorbellData>),

    /// Doorbell ring was rejected
    RoomDoorbellRejected(Option<DoorbellData>),

    /// A room the user created is ready to enter
    RoomCreated(Option<RoomCreatedData>),

    /// Settings of a room changed; clients showing it should refresh
    RoomSettingsUpdated(Option<RoomSettingsUpdatedData>),

    /// Navigator category list
    NavigatorCategories(Option<NavigatorCategoriesData>),

    /// Navigator top-level contexts (tabs)
    NavigatorMetadata(Option<NavigatorMetadataData>),

    /// Navigator search results
    NavigatorSearch(Option<NavigatorSearchData>),

    /// The user's home room
    NavigatorHomeRoom(Option<HomeRoomData>),

    // =========================================================================
    // Moderation
    // =========================================================================
    /// Moderator tool bootstrap: permissions plus the open issue list
    ModeratorInit(Option<ModeratorInitData>),

    /// A single issue was created or updated
    IssueInfo(Option<IssueInfoData>),

    /// An issue left the queue
    IssueDeleted(Option<IssueDeletedData>),

    /// Picking an issue failed server-side
    IssuePickFailed(Option<IssuePickFailedData>),

    /// Outcome of a moderation action (kick, ban, alert, ...)
    ModeratorActionResult(Option<ModeratorActionResultData>),

    /// Call-for-help category catalogue
    CfhTopicsInit(Option<CfhTopicsData>),

    /// Sanction status for a reported user
    CfhSanction(Option<CfhSanctionData>),

    // =========================================================================
    // Wired furniture
    // =========================================================================
    /// Definition of a wired action box being edited
    WiredFurniAction(Option<WiredDefinitionData>),

    /// Definition of a wired condition box being edited
    WiredFurniCondition(Option<WiredDefinitionData>),

    /// Definition of a wired trigger box being edited
    WiredFurniTrigger(Option<WiredDefinitionData>),

    /// Server acknowledges a wired editor open request
    WiredOpen(Option<WiredOpenData>),

    /// The edited wired definition was saved
    WiredSaveSuccess,

    /// The edited wired definition was rejected
    WiredValidationError(Option<WiredValidationErrorData>),

    /// Result of a wired reward trigger
    WiredRewardResult(Option<WiredRewardResultData>),

    // =========================================================================
    // Inventory
    // =========================================================================
    /// Full furniture inventory listing
    FurniListInit(Option<FurniListData>),

    /// Incremental furniture inventory additions/updates
    FurniListAddOrUpdate(Option<FurniListData>),

    /// A furniture item left the inventory
    FurniListRemove(Option<FurniListRemoveData>),

    /// Badge inventory listing
    BadgesInit(Option<BadgesData>),
}

/// Discriminant for [`ProtocolEvent`], used as the dispatcher subscription
/// key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolEventKind {
    UserInfo,
    GenericError,
    RoomForward,
    RoomEntryInfo,
    GuestRoomResult,
    RoomDoorbell,
    RoomDoorbellAccepted,
    RoomDoorbellRejected,
    RoomCreated,
    RoomSettingsUpdated,
    NavigatorCategories,
    NavigatorMetadata,
    NavigatorSearch,
    NavigatorHomeRoom,
    ModeratorInit,
    IssueInfo,
    IssueDeleted,
    IssuePickFailed,
    ModeratorActionResult,
    CfhTopicsInit,
    CfhSanction,
    WiredFurniAction,
    WiredFurniCondition,
    WiredFurniTrigger,
    WiredOpen,
    WiredSaveSuccess,
    WiredValidationError,
    WiredRewardResult,
    FurniListInit,
    FurniListAddOrUpdate,
    FurniListRemove,
    BadgesInit,
}

impl ProtocolEvent {
    /// Discriminant of this event, for subscription and logging.
    pub fn kind(&self) -> ProtocolEventKind {
        match self {
            Self::UserInfo(_) => ProtocolEventKind::UserInfo,
            Self::GenericError(_) => ProtocolEventKind::GenericError,
            Self::RoomForward(_) => ProtocolEventKind::RoomForward,
            Self::RoomEntryInfo(_) => ProtocolEventKind::RoomEntryInfo,
            Self::GuestRoomResult(_) => ProtocolEventKind::GuestRoomResult,
            Self::RoomDoorbell(_) => ProtocolEventKind::RoomDoorbell,
            Self::RoomDoorbellAccepted(_) => ProtocolEventKind::RoomDoorbellAccepted,
            Self::RoomDoorbellRejected(_) => ProtocolEventKind::RoomDoorbellRejected,
            Self::RoomCreated(_) => ProtocolEventKind::RoomCreated,
            Self::RoomSettingsUpdated(_) => ProtocolEventKind::RoomSettingsUpdated,
            Self::NavigatorCategories(_) => ProtocolEventKind::NavigatorCategories,
            Self::NavigatorMetadata(_) => ProtocolEventKind::NavigatorMetadata,
            Self::NavigatorSearch(_) => ProtocolEventKind::NavigatorSearch,
            Self::NavigatorHomeRoom(_) => ProtocolEventKind::NavigatorHomeRoom,
            Self::ModeratorInit(_) => ProtocolEventKind::ModeratorInit,
            Self::IssueInfo(_) => ProtocolEventKind::IssueInfo,
            Self::IssueDeleted(_) => ProtocolEventKind::IssueDeleted,
            Self::IssuePickFailed(_) => ProtocolEventKind::IssuePickFailed,
            Self::ModeratorActionResult(_) => ProtocolEventKind::ModeratorActionResult,
            Self::CfhTopicsInit(_) => ProtocolEventKind::CfhTopicsInit,
            Self::CfhSanction(_) => ProtocolEventKind::CfhSanction,
            Self::WiredFurniAction(_) => ProtocolEventKind::WiredFurniAction,
            Self::WiredFurniCondition(_) => ProtocolEventKind::WiredFurniCondition,
            Self::WiredFurniTrigger(_) => ProtocolEventKind::WiredFurniTrigger,
            Self::WiredOpen(_) => ProtocolEventKind::WiredOpen,
            Self::WiredSaveSuccess => ProtocolEventKind::WiredSaveSuccess,
            Self::WiredValidationError(_) => ProtocolEventKind::WiredValidationError,
            Self::WiredRewardResult(_) => ProtocolEventKind::WiredRewardResult,
            Self::FurniListInit(_) => ProtocolEventKind::FurniListInit,
            Self::FurniListAddOrUpdate(_) => ProtocolEventKind::FurniListAddOrUpdate,
            Self::FurniListRemove(_) => ProtocolEventKind::FurniListRemove,
            Self::BadgesInit(_) => ProtocolEventKind::BadgesInit,
        }
    }
}

// =============================================================================
// Payload data
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfoData {
    pub user_id: UserId,
    pub user_name: String,
    pub figure: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericErrorData {
    pub error_code: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomForwardData {
    pub room_id: RoomId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomEntryInfoData {
    pub room_id: RoomId,
    pub is_owner: bool,
}

/// Result of a guest-room query.
///
/// `room_enter` and `room_forward` select one of three mutually exclusive
/// branches; when both are false the payload is a passive metadata update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRoomResultData {
    pub room_enter: bool,
    pub room_forward: bool,
    #[serde(default)]
    pub is_group_member: bool,
    pub data: RoomData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoorbellData {
    /// Empty when the event concerns our own ring rather than a visitor's.
    #[serde(default)]
    pub user_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomCreatedData {
    pub room_id: RoomId,
    pub room_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSettingsUpdatedData {
    pub room_id: RoomId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorCategory {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorCategoriesData {
    pub categories: Vec<NavigatorCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopLevelContext {
    pub code: String,
    #[serde(default)]
    pub saved_searches: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorMetadataData {
    pub top_level_contexts: Vec<TopLevelContext>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultList {
    pub code: String,
    pub text: String,
    pub rooms: Vec<RoomData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSearchData {
    pub search_code: String,
    pub filter: String,
    pub results: Vec<SearchResultList>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeRoomData {
    pub home_room_id: RoomId,
    #[serde(default)]
    pub room_id_to_enter: Option<RoomId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeratorInitData {
    pub settings: ModerationSettings,
    pub issues: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueInfoData {
    pub issue: Ticket,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDeletedData {
    pub issue_id: IssueId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePickFailedData {
    pub retry_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeratorActionResultData {
    pub user_id: UserId,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfhTopicsData {
    pub categories: Vec<CfhCategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfhSanctionData {
    pub user_id: UserId,
    pub sanction_name: String,
}

/// A wired box definition as edited in the wired panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiredDefinitionData {
    pub item_id: ItemId,
    pub code: i32,
    #[serde(default)]
    pub string_param: String,
    #[serde(default)]
    pub int_params: Vec<i32>,
    #[serde(default)]
    pub selected_items: Vec<ItemId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiredOpenData {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WiredValidationErrorData {
    pub info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiredRewardResultData {
    pub reason: i32,
}

/// One furniture item in the inventory listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniItem {
    pub item_id: ItemId,
    pub type_id: i32,
    pub category: FurniCategory,
    #[serde(default)]
    pub extra: String,
    #[serde(default)]
    pub tradeable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FurniCategory {
    Floor,
    Wall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FurniListData {
    pub items: Vec<FurniItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FurniListRemoveData {
    pub item_id: ItemId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgesData {
    pub badge_codes: Vec<String>,
}

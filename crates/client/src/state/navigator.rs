//! Navigator state slice

use parlor_domain::{RoomId, RoomInfoData};
use parlor_shared::events::{NavigatorCategory, NavigatorSearchData, TopLevelContext};

use super::store::Slice;

/// Authoritative navigator state: catalogue metadata, the last search, the
/// user's home room and the aggregate about the room currently entered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigatorState {
    pub categories: Vec<NavigatorCategory>,
    pub top_level_contexts: Vec<TopLevelContext>,
    pub search_result: Option<NavigatorSearchData>,
    pub home_room_id: Option<RoomId>,
    pub room_info: RoomInfoData,
}

#[derive(Debug, Clone)]
pub enum NavigatorAction {
    SetCategories(Vec<NavigatorCategory>),
    SetTopLevelContexts(Vec<TopLevelContext>),
    SetSearchResult(NavigatorSearchData),
    SetHomeRoomId(RoomId),
    /// Replace the whole room-info aggregate with a freshly built value
    SetRoomInfo(RoomInfoData),
}

impl Slice for NavigatorState {
    type Action = NavigatorAction;

    fn apply(&self, action: NavigatorAction) -> Self {
        let mut next = self.clone();

        match action {
            NavigatorAction::SetCategories(categories) => next.categories = categories,
            NavigatorAction::SetTopLevelContexts(contexts) => next.top_level_contexts = contexts,
            NavigatorAction::SetSearchResult(result) => next.search_result = Some(result),
            NavigatorAction::SetHomeRoomId(room_id) => next.home_room_id = Some(room_id),
            NavigatorAction::SetRoomInfo(room_info) => next.room_info = room_info,
        }

        next
    }
}

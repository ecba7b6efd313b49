//! Moderation tooling state slice

use parlor_domain::{CfhCategory, IssueId, ModerationSettings, RoomId, Ticket, UserId};

use super::store::Slice;

/// Authoritative state of the moderation tooling.
///
/// Every "open X" list is a set semantically - no duplicate ids - while
/// insertion order is preserved for display. Tickets are keyed by issue id:
/// at most one per id, updates replace in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModToolsState {
    pub settings: Option<ModerationSettings>,
    pub tickets: Vec<Ticket>,
    pub cfh_categories: Vec<CfhCategory>,
    pub open_rooms: Vec<RoomId>,
    pub open_room_chatlogs: Vec<RoomId>,
    pub open_user_info: Vec<UserId>,
    pub open_user_chatlogs: Vec<UserId>,
    pub current_room_id: Option<RoomId>,
}

impl ModToolsState {
    /// Whether a ticket with this issue id is already tracked.
    pub fn has_ticket(&self, issue_id: IssueId) -> bool {
        self.tickets.iter().any(|t| t.issue_id == issue_id)
    }
}

#[derive(Debug, Clone)]
pub enum ModToolsAction {
    SetSettings(ModerationSettings),
    SetTickets(Vec<Ticket>),
    /// Insert or replace-in-place by issue id
    UpsertTicket(Ticket),
    /// Remove by issue id; absent id is a no-op
    RemoveTicket(IssueId),
    SetCfhCategories(Vec<CfhCategory>),
    OpenRoomInfo(RoomId),
    CloseRoomInfo(RoomId),
    OpenRoomChatlog(RoomId),
    CloseRoomChatlog(RoomId),
    OpenUserInfo(UserId),
    CloseUserInfo(UserId),
    OpenUserChatlog(UserId),
    CloseUserChatlog(UserId),
    SetCurrentRoomId(Option<RoomId>),
}

impl Slice for ModToolsState {
    type Action = ModToolsAction;

    fn apply(&self, action: ModToolsAction) -> Self {
        let mut next = self.clone();

        match action {
            ModToolsAction::SetSettings(settings) => next.settings = Some(settings),
            ModToolsAction::SetTickets(tickets) => next.tickets = tickets,
            ModToolsAction::UpsertTicket(ticket) => {
                match next
                    .tickets
                    .iter_mut()
                    .find(|t| t.issue_id == ticket.issue_id)
                {
                    Some(existing) => *existing = ticket,
                    None => next.tickets.push(ticket),
                }
            }
            ModToolsAction::RemoveTicket(issue_id) => {
                next.tickets.retain(|t| t.issue_id != issue_id);
            }
            ModToolsAction::SetCfhCategories(categories) => next.cfh_categories = categories,
            ModToolsAction::OpenRoomInfo(room_id) => push_unique(&mut next.open_rooms, room_id),
            ModToolsAction::CloseRoomInfo(room_id) => {
                next.open_rooms.retain(|id| *id != room_id);
            }
            ModToolsAction::OpenRoomChatlog(room_id) => {
                push_unique(&mut next.open_room_chatlogs, room_id);
            }
            ModToolsAction::CloseRoomChatlog(room_id) => {
                next.open_room_chatlogs.retain(|id| *id != room_id);
            }
            ModToolsAction::OpenUserInfo(user_id) => {
                push_unique(&mut next.open_user_info, user_id);
            }
            ModToolsAction::CloseUserInfo(user_id) => {
                next.open_user_info.retain(|id| *id != user_id);
            }
            ModToolsAction::OpenUserChatlog(user_id) => {
                push_unique(&mut next.open_user_chatlogs, user_id);
            }
            ModToolsAction::CloseUserChatlog(user_id) => {
                next.open_user_chatlogs.retain(|id| *id != user_id);
            }
            ModToolsAction::SetCurrentRoomId(room_id) => next.current_room_id = room_id,
        }

        next
    }
}

/// Append preserving set semantics: an id already present is rejected and
/// the list keeps its order.
fn push_unique<T: PartialEq>(list: &mut Vec<T>, value: T) {
    if !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use parlor_domain::moderation::TicketState;

    fn ticket(issue_id: i64, message: &str) -> Ticket {
        Ticket {
            issue_id: IssueId::new(issue_id),
            state: TicketState::Open,
            category_id: 1,
            reported_user_id: UserId::new(10),
            reporter_user_id: UserId::new(11),
            room_id: Some(RoomId::new(5)),
            message: message.to_string(),
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn upsert_replaces_in_place_for_existing_issue() {
        let state = ModToolsState::default()
            .apply(ModToolsAction::UpsertTicket(ticket(42, "first")))
            .apply(ModToolsAction::UpsertTicket(ticket(7, "other")))
            .apply(ModToolsAction::UpsertTicket(ticket(42, "updated")));

        assert_eq!(state.tickets.len(), 2);
        assert_eq!(state.tickets[0].issue_id, IssueId::new(42));
        assert_eq!(state.tickets[0].message, "updated");
        assert_eq!(state.tickets[1].issue_id, IssueId::new(7));
    }

    #[test]
    fn remove_absent_ticket_changes_nothing() {
        let state = ModToolsState::default().apply(ModToolsAction::UpsertTicket(ticket(42, "x")));
        let next = state.clone().apply(ModToolsAction::RemoveTicket(IssueId::new(99)));

        assert_eq!(next, state);
    }

    #[test]
    fn open_lists_keep_set_semantics_and_order() {
        let state = ModToolsState::default()
            .apply(ModToolsAction::OpenRoomInfo(RoomId::new(5)))
            .apply(ModToolsAction::OpenRoomInfo(RoomId::new(9)))
            .apply(ModToolsAction::OpenRoomInfo(RoomId::new(5)));

        assert_eq!(state.open_rooms, vec![RoomId::new(5), RoomId::new(9)]);
    }

    #[test]
    fn close_removes_only_the_named_id() {
        let state = ModToolsState::default()
            .apply(ModToolsAction::OpenUserInfo(UserId::new(1)))
            .apply(ModToolsAction::OpenUserInfo(UserId::new(2)))
            .apply(ModToolsAction::CloseUserInfo(UserId::new(1)));

        assert_eq!(state.open_user_info, vec![UserId::new(2)]);
    }

    #[test]
    fn partial_updates_leave_other_fields_untouched() {
        let seeded = ModToolsState::default()
            .apply(ModToolsAction::UpsertTicket(ticket(1, "x")))
            .apply(ModToolsAction::SetCurrentRoomId(Some(RoomId::new(3))));

        let next = seeded.apply(ModToolsAction::SetCfhCategories(vec![]));

        assert_eq!(next.tickets.len(), 1);
        assert_eq!(next.current_room_id, Some(RoomId::new(3)));
    }
}

//! Moderation (call-for-help) value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{IssueId, RoomId, UserId};

/// A help-request record tracked by the moderation tooling.
///
/// At most one ticket per issue id exists in a slice at any time; a second
/// report for the same issue replaces the record in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub issue_id: IssueId,
    pub state: TicketState,
    pub category_id: i32,
    pub reported_user_id: UserId,
    pub reporter_user_id: UserId,
    pub room_id: Option<RoomId>,
    pub message: String,
    pub reported_at: DateTime<Utc>,
}

/// Lifecycle of a ticket on the moderator's desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketState {
    Open,
    Picked,
    Resolved,
}

/// A call-for-help category with its reportable topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfhCategory {
    pub id: i32,
    pub name: String,
    pub topics: Vec<CfhTopic>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CfhTopic {
    pub id: i32,
    pub name: String,
}

/// Moderator tool permissions delivered on moderator init.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ModerationSettings {
    pub can_pick_issues: bool,
    pub can_close_issues: bool,
    pub can_view_chatlogs: bool,
    pub can_kick_users: bool,
    pub can_ban_users: bool,
    pub can_alert_users: bool,
}

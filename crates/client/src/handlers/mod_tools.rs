//! Moderation tooling message handler
//!
//! Keeps the ticket queue and the open-panel lists in step with the server
//! and the rest of the ui. Whether the new-ticket sound plays is decided
//! here, from the previous state, before the action is dispatched.

use std::sync::Arc;

use parlor_shared::events::{
    CfhSanctionData, CfhTopicsData, IssueDeletedData, IssueInfoData, IssuePickFailedData,
    ModeratorActionResultData, ModeratorInitData,
};
use parlor_shared::{ProtocolEvent, ProtocolEventKind};

use crate::events::{EngineEvent, EngineEventKind, UiEvent, UiEventKind};
use crate::messaging::{EventDispatcher, SubscriptionBinding};
use crate::notifications::{AlertKind, Notifier, SoundName};
use crate::state::{ModToolsAction, ModToolsState, Store};

pub struct ModToolsHandler {
    _protocol: Vec<SubscriptionBinding<ProtocolEvent>>,
    _ui: Vec<SubscriptionBinding<UiEvent>>,
    _engine: Vec<SubscriptionBinding<EngineEvent>>,
}

impl ModToolsHandler {
    pub fn attach(
        protocol_bus: &EventDispatcher<ProtocolEvent>,
        ui_bus: &EventDispatcher<UiEvent>,
        engine_bus: &EventDispatcher<EngineEvent>,
        store: Store<ModToolsState>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let context = Arc::new(Context { store, notifier });

        let protocol_kinds = [
            ProtocolEventKind::ModeratorInit,
            ProtocolEventKind::IssueInfo,
            ProtocolEventKind::IssueDeleted,
            ProtocolEventKind::IssuePickFailed,
            ProtocolEventKind::ModeratorActionResult,
            ProtocolEventKind::CfhTopicsInit,
            ProtocolEventKind::CfhSanction,
        ];

        let protocol = protocol_kinds
            .into_iter()
            .map(|kind| {
                let context = Arc::clone(&context);
                SubscriptionBinding::bound(protocol_bus, kind, move |event: &ProtocolEvent| {
                    context.handle_protocol(event);
                })
            })
            .collect();

        let ui_kinds = [
            UiEventKind::OpenRoomInfo,
            UiEventKind::OpenRoomChatlog,
            UiEventKind::OpenUserInfo,
            UiEventKind::OpenUserChatlog,
        ];

        let ui = ui_kinds
            .into_iter()
            .map(|kind| {
                let context = Arc::clone(&context);
                SubscriptionBinding::bound(ui_bus, kind, move |event: &UiEvent| {
                    context.handle_ui(event);
                })
            })
            .collect();

        let engine_kinds = [EngineEventKind::RoomInitialized, EngineEventKind::RoomDisposed];

        let engine = engine_kinds
            .into_iter()
            .map(|kind| {
                let context = Arc::clone(&context);
                SubscriptionBinding::bound(engine_bus, kind, move |event: &EngineEvent| {
                    context.handle_engine(event);
                })
            })
            .collect();

        Self {
            _protocol: protocol,
            _ui: ui,
            _engine: engine,
        }
    }
}

struct Context {
    store: Store<ModToolsState>,
    notifier: Arc<dyn Notifier>,
}

impl Context {
    fn handle_protocol(&self, event: &ProtocolEvent) {
        match event {
            ProtocolEvent::ModeratorInit(Some(data)) => self.on_init(data),
            ProtocolEvent::IssueInfo(Some(data)) => self.on_issue_info(data),
            ProtocolEvent::IssueDeleted(Some(data)) => self.on_issue_deleted(data),
            ProtocolEvent::IssuePickFailed(Some(data)) => self.on_pick_failed(data),
            ProtocolEvent::ModeratorActionResult(Some(data)) => self.on_action_result(data),
            ProtocolEvent::CfhTopicsInit(Some(data)) => self.on_cfh_topics(data),
            ProtocolEvent::CfhSanction(Some(data)) => self.on_cfh_sanction(data),
            _ => {}
        }
    }

    fn handle_ui(&self, event: &UiEvent) {
        match event {
            UiEvent::OpenRoomInfo { room_id } => {
                self.store.dispatch(ModToolsAction::OpenRoomInfo(*room_id));
            }
            UiEvent::OpenRoomChatlog { room_id } => {
                self.store
                    .dispatch(ModToolsAction::OpenRoomChatlog(*room_id));
            }
            UiEvent::OpenUserInfo { user_id } => {
                self.store.dispatch(ModToolsAction::OpenUserInfo(*user_id));
            }
            UiEvent::OpenUserChatlog { user_id } => {
                self.store
                    .dispatch(ModToolsAction::OpenUserChatlog(*user_id));
            }
            _ => {}
        }
    }

    fn handle_engine(&self, event: &EngineEvent) {
        match event {
            EngineEvent::RoomInitialized { room_id } => {
                self.store
                    .dispatch(ModToolsAction::SetCurrentRoomId(Some(*room_id)));
            }
            EngineEvent::RoomDisposed { .. } => {
                self.store.dispatch(ModToolsAction::SetCurrentRoomId(None));
            }
        }
    }

    fn on_init(&self, data: &ModeratorInitData) {
        self.store
            .dispatch(ModToolsAction::SetSettings(data.settings.clone()));
        self.store
            .dispatch(ModToolsAction::SetTickets(data.issues.clone()));
    }

    /// The sound fires only for a genuinely new issue id; an update to a
    /// tracked ticket replaces it silently.
    fn on_issue_info(&self, data: &IssueInfoData) {
        let is_new = !self.store.get().has_ticket(data.issue.issue_id);

        self.store
            .dispatch(ModToolsAction::UpsertTicket(data.issue.clone()));

        if is_new {
            self.notifier.play_sound(SoundName::ModToolsNewTicket);
        }
    }

    /// Deleting an untracked issue dispatches nothing at all.
    fn on_issue_deleted(&self, data: &IssueDeletedData) {
        if !self.store.get().has_ticket(data.issue_id) {
            return;
        }

        self.store
            .dispatch(ModToolsAction::RemoveTicket(data.issue_id));
    }

    fn on_pick_failed(&self, data: &IssuePickFailedData) {
        let message = if data.retry_enabled {
            "Failed to pick the issue, please try again"
        } else {
            "The issue was already picked by another moderator"
        };

        self.notifier
            .simple_alert(message, AlertKind::Moderation, "Moderation");
    }

    fn on_action_result(&self, data: &ModeratorActionResultData) {
        let message = if data.success {
            "Moderation action completed"
        } else {
            "Moderation action failed"
        };

        self.notifier
            .simple_alert(message, AlertKind::Moderation, "Moderation");
    }

    fn on_cfh_topics(&self, data: &CfhTopicsData) {
        self.store
            .dispatch(ModToolsAction::SetCfhCategories(data.categories.clone()));
    }

    fn on_cfh_sanction(&self, data: &CfhSanctionData) {
        tracing::info!(
            user_id = %data.user_id,
            sanction = %data.sanction_name,
            "sanction status received"
        );
    }
}

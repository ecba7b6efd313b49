//! Navigator message handler
//!
//! Session bootstrap, room entry and the door-entry flow. The guest-room
//! result takes exactly one of three branches: direct entry, forwarding
//! gated on the door mode, or a passive metadata update.

use std::sync::Arc;

use parlor_domain::DoorMode;
use parlor_shared::events::{
    DoorbellData, GenericErrorData, GuestRoomResultData, HomeRoomData, NavigatorCategoriesData,
    NavigatorMetadataData, NavigatorSearchData, RoomCreatedData, RoomEntryInfoData,
    RoomForwardData, RoomSettingsUpdatedData,
};
use parlor_shared::{Composer, ProtocolEvent, ProtocolEventKind};

use crate::events::{DoorState, UiEvent};
use crate::messaging::{CommandBus, EventDispatcher, SubscriptionBinding};
use crate::session::RoomSessionManager;
use crate::state::{NavigatorAction, NavigatorState, Store};

/// Server error code for a rejected room password.
const ERROR_WRONG_PASSWORD: i32 = -100_002;

pub struct NavigatorHandler {
    _bindings: Vec<SubscriptionBinding<ProtocolEvent>>,
}

impl NavigatorHandler {
    pub fn attach(
        protocol_bus: &EventDispatcher<ProtocolEvent>,
        store: Store<NavigatorState>,
        command_bus: CommandBus,
        ui_bus: EventDispatcher<UiEvent>,
        session_manager: Arc<dyn RoomSessionManager>,
    ) -> Self {
        let context = Arc::new(Context {
            store,
            command_bus,
            ui_bus,
            session_manager,
        });

        let kinds = [
            ProtocolEventKind::UserInfo,
            ProtocolEventKind::RoomForward,
            ProtocolEventKind::RoomEntryInfo,
            ProtocolEventKind::GuestRoomResult,
            ProtocolEventKind::RoomDoorbell,
            ProtocolEventKind::RoomDoorbellAccepted,
            ProtocolEventKind::RoomDoorbellRejected,
            ProtocolEventKind::RoomCreated,
            ProtocolEventKind::RoomSettingsUpdated,
            ProtocolEventKind::NavigatorCategories,
            ProtocolEventKind::NavigatorMetadata,
            ProtocolEventKind::NavigatorSearch,
            ProtocolEventKind::NavigatorHomeRoom,
            ProtocolEventKind::GenericError,
        ];

        let bindings = kinds
            .into_iter()
            .map(|kind| {
                let context = Arc::clone(&context);
                SubscriptionBinding::bound(protocol_bus, kind, move |event: &ProtocolEvent| {
                    context.handle(event);
                })
            })
            .collect();

        Self {
            _bindings: bindings,
        }
    }
}

struct Context {
    store: Store<NavigatorState>,
    command_bus: CommandBus,
    ui_bus: EventDispatcher<UiEvent>,
    session_manager: Arc<dyn RoomSessionManager>,
}

impl Context {
    fn handle(&self, event: &ProtocolEvent) {
        // A missing payload is a decode failure upstream; drop the event.
        match event {
            ProtocolEvent::UserInfo(Some(_)) => self.on_session_ready(),
            ProtocolEvent::RoomForward(Some(data)) => self.on_room_forward(data),
            ProtocolEvent::RoomEntryInfo(Some(data)) => self.on_room_entry_info(data),
            ProtocolEvent::GuestRoomResult(Some(data)) => self.on_guest_room_result(data),
            ProtocolEvent::RoomDoorbell(Some(data)) => {
                self.on_doorbell(data, DoorState::Waiting);
            }
            ProtocolEvent::RoomDoorbellAccepted(Some(data)) => {
                self.on_doorbell(data, DoorState::Accepted);
            }
            ProtocolEvent::RoomDoorbellRejected(Some(data)) => {
                self.on_doorbell(data, DoorState::NoAnswer);
            }
            ProtocolEvent::RoomCreated(Some(data)) => self.on_room_created(data),
            ProtocolEvent::RoomSettingsUpdated(Some(data)) => self.on_settings_updated(data),
            ProtocolEvent::NavigatorCategories(Some(data)) => self.on_categories(data),
            ProtocolEvent::NavigatorMetadata(Some(data)) => self.on_metadata(data),
            ProtocolEvent::NavigatorSearch(Some(data)) => self.on_search(data),
            ProtocolEvent::NavigatorHomeRoom(Some(data)) => self.on_home_room(data),
            ProtocolEvent::GenericError(Some(data)) => self.on_generic_error(data),
            _ => {}
        }
    }

    fn send(&self, composer: Composer) {
        if let Err(error) = self.command_bus.send(composer) {
            tracing::warn!(%error, "dropping navigator composer, sink closed");
        }
    }

    /// Session is ready: request the navigator catalogue and the user's
    /// settings. Fire-and-forget, answers arrive as independent events.
    fn on_session_ready(&self) {
        self.send(Composer::NavigatorCategories);
        self.send(Composer::NavigatorSettings);
    }

    fn on_room_forward(&self, data: &RoomForwardData) {
        self.send(Composer::RoomInfo {
            room_id: data.room_id,
            extended: false,
            forward: true,
        });
    }

    /// One inbound event, two effects: rebuild the room-info aggregate
    /// copy-on-write and immediately ask for the extended description.
    fn on_room_entry_info(&self, data: &RoomEntryInfoData) {
        let mut info = self.store.get().room_info;
        info.current_room_owner = data.is_owner;
        info.current_room_id = Some(data.room_id);
        self.store.dispatch(NavigatorAction::SetRoomInfo(info));

        self.send(Composer::RoomInfo {
            room_id: data.room_id,
            extended: true,
            forward: false,
        });
    }

    /// The three branches are mutually exclusive; `room_enter` takes
    /// precedence, then `room_forward`, else the payload is only a
    /// metadata refresh.
    fn on_guest_room_result(&self, data: &GuestRoomResultData) {
        if data.room_enter {
            let mut info = self.store.get().room_info;
            info.current_room_id = Some(data.data.room_id);
            info.entered_guest_room = Some(data.data.clone());
            self.store.dispatch(NavigatorAction::SetRoomInfo(info));

            self.session_manager.create_session(data.data.room_id);
        } else if data.room_forward {
            match data.data.door_mode {
                // Group members walk through a locked door.
                DoorMode::Doorbell if !data.is_group_member => {
                    self.ui_bus.dispatch(&UiEvent::DoorState {
                        state: DoorState::StartDoorbell,
                        room: Some(data.data.clone()),
                    });
                }
                DoorMode::Password => {
                    self.ui_bus.dispatch(&UiEvent::DoorState {
                        state: DoorState::StartPassword,
                        room: Some(data.data.clone()),
                    });
                }
                _ => self.session_manager.create_session(data.data.room_id),
            }
        } else {
            let mut info = self.store.get().room_info;
            info.entered_guest_room = Some(data.data.clone());
            self.store.dispatch(NavigatorAction::SetRoomInfo(info));
        }
    }

    /// An empty user name marks our own ring; a visitor's ring is the
    /// room owner's concern and handled by the answering widget.
    fn on_doorbell(&self, data: &DoorbellData, state: DoorState) {
        if !data.user_name.is_empty() {
            return;
        }

        self.ui_bus.dispatch(&UiEvent::DoorState { state, room: None });
    }

    fn on_room_created(&self, data: &RoomCreatedData) {
        self.session_manager.create_session(data.room_id);
    }

    fn on_settings_updated(&self, data: &RoomSettingsUpdatedData) {
        self.send(Composer::RoomInfo {
            room_id: data.room_id,
            extended: false,
            forward: false,
        });
    }

    fn on_categories(&self, data: &NavigatorCategoriesData) {
        self.store
            .dispatch(NavigatorAction::SetCategories(data.categories.clone()));
    }

    fn on_metadata(&self, data: &NavigatorMetadataData) {
        self.store.dispatch(NavigatorAction::SetTopLevelContexts(
            data.top_level_contexts.clone(),
        ));
    }

    fn on_search(&self, data: &NavigatorSearchData) {
        self.store
            .dispatch(NavigatorAction::SetSearchResult(data.clone()));
    }

    fn on_home_room(&self, data: &HomeRoomData) {
        self.store
            .dispatch(NavigatorAction::SetHomeRoomId(data.home_room_id));

        if let Some(room_id) = data.room_id_to_enter {
            self.send(Composer::RoomInfo {
                room_id,
                extended: false,
                forward: true,
            });
        }
    }

    /// Only the wrong-password code concerns this handler; every other
    /// code is surfaced elsewhere.
    fn on_generic_error(&self, data: &GenericErrorData) {
        if data.error_code != ERROR_WRONG_PASSWORD {
            return;
        }

        self.ui_bus.dispatch(&UiEvent::DoorState {
            state: DoorState::WrongPassword,
            room: None,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use parlor_domain::{RoomData, RoomId, UserId};
    use parlor_shared::events::UserInfoData;

    use crate::events::UiEventKind;
    use crate::messaging::CommandReceiver;
    use crate::session::MockRoomSessionManager;

    struct Rig {
        protocol_bus: EventDispatcher<ProtocolEvent>,
        store: Store<NavigatorState>,
        ui_bus: EventDispatcher<UiEvent>,
        rx: CommandReceiver,
        _handler: NavigatorHandler,
    }

    fn rig(manager: MockRoomSessionManager) -> Rig {
        let protocol_bus = EventDispatcher::new();
        let store = Store::<NavigatorState>::default();
        let ui_bus = EventDispatcher::new();
        let (command_bus, rx) = CommandBus::channel();

        let handler = NavigatorHandler::attach(
            &protocol_bus,
            store.clone(),
            command_bus,
            ui_bus.clone(),
            Arc::new(manager),
        );

        Rig {
            protocol_bus,
            store,
            ui_bus,
            rx,
            _handler: handler,
        }
    }

    fn room(room_id: i64, door_mode: DoorMode) -> RoomData {
        RoomData {
            room_id: RoomId::new(room_id),
            name: "den".into(),
            owner_name: "otto".into(),
            door_mode,
            user_count: 2,
            max_user_count: 25,
            description: String::new(),
        }
    }

    fn door_states(rig: &Rig) -> (Arc<Mutex<Vec<DoorState>>>, SubscriptionBinding<UiEvent>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let binding = SubscriptionBinding::bound(
            &rig.ui_bus,
            UiEventKind::DoorState,
            move |event: &UiEvent| {
                if let UiEvent::DoorState { state, .. } = event {
                    seen_clone.lock().expect("seen lock").push(*state);
                }
            },
        );
        (seen, binding)
    }

    #[test]
    fn session_ready_requests_categories_and_settings() {
        let mut rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus
            .dispatch(&ProtocolEvent::UserInfo(Some(UserInfoData {
                user_id: UserId::new(1),
                user_name: "otto".into(),
                figure: String::new(),
            })));

        assert_eq!(
            rig.rx.try_next().expect("queued").expect("value"),
            Composer::NavigatorCategories
        );
        assert_eq!(
            rig.rx.try_next().expect("queued").expect("value"),
            Composer::NavigatorSettings
        );
    }

    #[test]
    fn undecodable_payload_is_dropped() {
        let mut rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus.dispatch(&ProtocolEvent::UserInfo(None));
        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(None));

        assert!(rig.rx.try_next().is_err());
        assert_eq!(rig.store.get(), NavigatorState::default());
    }

    #[test]
    fn room_entry_info_updates_aggregate_and_requests_extended_info() {
        let mut rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomEntryInfo(Some(RoomEntryInfoData {
                room_id: RoomId::new(9),
                is_owner: true,
            })));

        let info = rig.store.get().room_info;
        assert!(info.current_room_owner);
        assert_eq!(info.current_room_id, Some(RoomId::new(9)));

        assert_eq!(
            rig.rx.try_next().expect("queued").expect("value"),
            Composer::RoomInfo {
                room_id: RoomId::new(9),
                extended: true,
                forward: false,
            }
        );
    }

    #[test]
    fn room_forward_composes_a_forward_request() {
        let mut rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomForward(Some(RoomForwardData {
                room_id: RoomId::new(4),
            })));

        assert_eq!(
            rig.rx.try_next().expect("queued").expect("value"),
            Composer::RoomInfo {
                room_id: RoomId::new(4),
                extended: false,
                forward: true,
            }
        );
    }

    #[test]
    fn guest_room_enter_branch_creates_a_session() {
        let mut manager = MockRoomSessionManager::new();
        manager
            .expect_create_session()
            .withf(|id| *id == RoomId::new(5))
            .times(1)
            .return_const(());

        let rig = rig(manager);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: true,
                room_forward: false,
                is_group_member: false,
                data: room(5, DoorMode::Open),
            })));

        let info = rig.store.get().room_info;
        assert_eq!(info.current_room_id, Some(RoomId::new(5)));
        assert!(info.entered_guest_room.is_some());
    }

    #[test]
    fn forward_to_doorbell_room_starts_the_doorbell_flow() {
        let rig = rig(MockRoomSessionManager::new());
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: false,
                room_forward: true,
                is_group_member: false,
                data: room(5, DoorMode::Doorbell),
            })));

        assert_eq!(
            *seen.lock().expect("seen lock"),
            vec![DoorState::StartDoorbell]
        );
    }

    #[test]
    fn forward_to_password_room_prompts_for_the_password() {
        let rig = rig(MockRoomSessionManager::new());
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: false,
                room_forward: true,
                is_group_member: false,
                data: room(5, DoorMode::Password),
            })));

        assert_eq!(
            *seen.lock().expect("seen lock"),
            vec![DoorState::StartPassword]
        );
    }

    #[test]
    fn forward_to_open_room_creates_a_session() {
        let mut manager = MockRoomSessionManager::new();
        manager.expect_create_session().times(1).return_const(());

        let rig = rig(manager);
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: false,
                room_forward: true,
                is_group_member: false,
                data: room(5, DoorMode::Open),
            })));

        assert!(seen.lock().expect("seen lock").is_empty());
    }

    #[test]
    fn group_member_walks_through_a_locked_door() {
        let mut manager = MockRoomSessionManager::new();
        manager.expect_create_session().times(1).return_const(());

        let rig = rig(manager);
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: false,
                room_forward: true,
                is_group_member: true,
                data: room(5, DoorMode::Doorbell),
            })));

        assert!(seen.lock().expect("seen lock").is_empty());
    }

    #[test]
    fn metadata_branch_only_refreshes_the_aggregate() {
        // No create_session expectation: the mock rejects any call.
        let rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GuestRoomResult(Some(GuestRoomResultData {
                room_enter: false,
                room_forward: false,
                is_group_member: false,
                data: room(5, DoorMode::Open),
            })));

        let info = rig.store.get().room_info;
        assert!(info.entered_guest_room.is_some());
        assert_eq!(info.current_room_id, None);
    }

    #[test]
    fn wrong_password_error_dispatches_one_door_state() {
        let rig = rig(MockRoomSessionManager::new());
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GenericError(Some(GenericErrorData {
                error_code: -100_002,
            })));

        assert_eq!(
            *seen.lock().expect("seen lock"),
            vec![DoorState::WrongPassword]
        );
    }

    #[test]
    fn other_error_codes_are_ignored() {
        let rig = rig(MockRoomSessionManager::new());
        let (seen, _binding) = door_states(&rig);

        rig.protocol_bus
            .dispatch(&ProtocolEvent::GenericError(Some(GenericErrorData {
                error_code: -100_001,
            })));

        assert!(seen.lock().expect("seen lock").is_empty());
    }

    #[test]
    fn own_doorbell_lifecycle_maps_to_door_states() {
        let rig = rig(MockRoomSessionManager::new());
        let (seen, _binding) = door_states(&rig);

        let own_ring = DoorbellData {
            user_name: String::new(),
        };
        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomDoorbell(Some(own_ring.clone())));
        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomDoorbellAccepted(Some(own_ring.clone())));
        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomDoorbellRejected(Some(own_ring)));

        // A visitor's ring concerns the answering widget, not this flow.
        rig.protocol_bus
            .dispatch(&ProtocolEvent::RoomDoorbell(Some(DoorbellData {
                user_name: "visitor".into(),
            })));

        assert_eq!(
            *seen.lock().expect("seen lock"),
            vec![DoorState::Waiting, DoorState::Accepted, DoorState::NoAnswer]
        );
    }

    #[test]
    fn home_room_with_pending_entry_forwards_into_it() {
        let mut rig = rig(MockRoomSessionManager::new());

        rig.protocol_bus
            .dispatch(&ProtocolEvent::NavigatorHomeRoom(Some(HomeRoomData {
                home_room_id: RoomId::new(11),
                room_id_to_enter: Some(RoomId::new(12)),
            })));

        assert_eq!(rig.store.get().home_room_id, Some(RoomId::new(11)));
        assert_eq!(
            rig.rx.try_next().expect("queued").expect("value"),
            Composer::RoomInfo {
                room_id: RoomId::new(12),
                extended: false,
                forward: true,
            }
        );
    }
}

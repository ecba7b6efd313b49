//! Avatar-info widget controller
//!
//! Consumes selection-related widget updates and keeps the state behind the
//! name bubbles and the infostand panel. The display policy lives here:
//! name bubble and infostand are mutually exclusive per target, a fresh
//! infostand clears a lingering name bubble for the same target, and a
//! removal of the displayed object always clears the display - removal
//! wins over anything pending for that id.

use std::sync::{Arc, Mutex};

use parlor_domain::{ObjectId, RoomObjectCategory};

use crate::messaging::{EventDispatcher, SubscriptionBinding};
use crate::session::RoomSession;

use super::bridge::WidgetMessageBridge;
use super::messages::WidgetMessage;
use super::updates::{
    InfostandData, UseProductItem, WidgetUpdate, WidgetUpdateKind, INFOSTAND_KINDS,
};

/// A name bubble over a room object.
#[derive(Debug, Clone, PartialEq)]
pub struct NameBubble {
    pub object_id: ObjectId,
    pub category: RoomObjectCategory,
    pub name: String,
}

/// Display state the avatar-info views render from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvatarInfoState {
    /// The rollover name bubble, at most one at a time
    pub name: Option<NameBubble>,
    /// Persistent name bubbles (friend highlights), keyed by room index
    pub name_bubbles: Vec<NameBubble>,
    pub product_bubbles: Vec<UseProductItem>,
    pub infostand: Option<InfostandData>,
    pub game_mode: bool,
    pub dancing: bool,
    pub decorating: bool,
}

impl AvatarInfoState {
    fn clear_for_removed(&mut self, object_id: ObjectId, category: RoomObjectCategory) {
        if self
            .name
            .as_ref()
            .is_some_and(|n| n.object_id == object_id)
        {
            self.name = None;
        }

        match category {
            RoomObjectCategory::Unit => {
                self.name_bubbles.retain(|b| b.object_id != object_id);
                self.product_bubbles.retain(|b| b.id != object_id);
            }
            RoomObjectCategory::Floor | RoomObjectCategory::Wall => {
                self.product_bubbles
                    .retain(|b| b.request_room_object_id != object_id);
            }
        }

        // Removal always clears the displayed target, furniture included.
        if self
            .infostand
            .as_ref()
            .is_some_and(|i| i.target().0 == object_id)
        {
            self.infostand = None;
        }
    }
}

/// Widget-side consumer of selection updates.
///
/// Owns its subscription bindings; dropping the controller detaches every
/// handler.
pub struct AvatarInfoController {
    state: Arc<Mutex<AvatarInfoState>>,
    _bindings: Vec<SubscriptionBinding<WidgetUpdate>>,
}

impl AvatarInfoController {
    pub fn attach(
        widget_bus: &EventDispatcher<WidgetUpdate>,
        bridge: Arc<WidgetMessageBridge>,
        session: Arc<dyn RoomSession>,
    ) -> Self {
        let state = Arc::new(Mutex::new(AvatarInfoState::default()));
        let mut bindings = Vec::new();

        // Engine mode gates the whole display.
        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::EngineMode,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::EngineMode { game_mode } = event {
                        lock(&state).game_mode = *game_mode;
                    }
                },
            ));
        }

        for kind in [WidgetUpdateKind::UserRemoved, WidgetUpdateKind::FurniRemoved] {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                kind,
                move |event: &WidgetUpdate| {
                    let mut state = lock(&state);
                    match event {
                        WidgetUpdate::UserRemoved { room_index } => {
                            state.clear_for_removed(*room_index, RoomObjectCategory::Unit);
                        }
                        WidgetUpdate::FurniRemoved { object_id } => {
                            state.clear_for_removed(*object_id, RoomObjectCategory::Floor);
                        }
                        _ => {}
                    }
                },
            ));
        }

        {
            let bridge = Arc::clone(&bridge);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::ObjectSelected,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::ObjectSelected {
                        object_id,
                        category,
                    } = event
                    {
                        // The infostand payload arrives later as an update.
                        bridge.process_widget_message(WidgetMessage::GetObjectInfo {
                            object_id: *object_id,
                            category: *category,
                        });
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            let bridge = Arc::clone(&bridge);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::ObjectRollOver,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::ObjectRollOver {
                        object_id,
                        category,
                    } = event
                    {
                        // While an infostand is open, rollover stays quiet.
                        if lock(&state).infostand.is_some() {
                            return;
                        }

                        bridge.process_widget_message(WidgetMessage::GetObjectName {
                            object_id: *object_id,
                            category: *category,
                        });
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::ObjectRollOut,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::ObjectRollOut { object_id, .. } = event {
                        let mut state = lock(&state);
                        if state.name.as_ref().is_some_and(|n| n.object_id == *object_id) {
                            state.name = None;
                        }
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::ObjectDeselected,
                move |_event: &WidgetUpdate| {
                    let mut state = lock(&state);
                    state.infostand = None;
                    state.product_bubbles.clear();
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::ObjectName,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::ObjectName {
                        object_id,
                        category,
                        name,
                    } = event
                    {
                        // Only units get rollover name bubbles.
                        if *category != RoomObjectCategory::Unit {
                            return;
                        }

                        let mut state = lock(&state);
                        state.name = Some(NameBubble {
                            object_id: *object_id,
                            category: *category,
                            name: name.clone(),
                        });
                        state.product_bubbles.clear();
                    }
                },
            ));
        }

        for kind in INFOSTAND_KINDS {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                kind,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::Infostand(data) = event {
                        let mut state = lock(&state);

                        // Selection and name bubble are mutually exclusive.
                        state.name = None;
                        let (target, _) = data.target();
                        state.name_bubbles.retain(|b| b.object_id != target);
                        state.product_bubbles.clear();
                        state.infostand = Some(data.clone());
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::DanceStatus,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::DanceStatus { dancing } = event {
                        lock(&state).dancing = *dancing;
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            let session = Arc::clone(&session);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::DecorateMode,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::DecorateMode { active } = event {
                        lock(&state).decorating = *active;
                        session.set_decorating(*active);
                    }
                },
            ));
        }

        {
            let state = Arc::clone(&state);
            bindings.push(SubscriptionBinding::bound(
                widget_bus,
                WidgetUpdateKind::UseProductBubbles,
                move |event: &WidgetUpdate| {
                    if let WidgetUpdate::UseProductBubbles { items } = event {
                        let mut state = lock(&state);
                        for item in items {
                            state.product_bubbles.retain(|b| b.id != item.id);
                            state.product_bubbles.push(item.clone());
                        }
                    }
                },
            ));
        }

        Self {
            state,
            _bindings: bindings,
        }
    }

    /// Snapshot of the display state.
    pub fn state(&self) -> AvatarInfoState {
        lock(&self.state).clone()
    }
}

fn lock(state: &Arc<Mutex<AvatarInfoState>>) -> std::sync::MutexGuard<'_, AvatarInfoState> {
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

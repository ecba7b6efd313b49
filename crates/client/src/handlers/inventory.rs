//! Inventory message handler

use std::sync::Arc;

use parlor_shared::events::{BadgesData, FurniListData, FurniListRemoveData};
use parlor_shared::{ProtocolEvent, ProtocolEventKind};

use crate::messaging::{EventDispatcher, SubscriptionBinding};
use crate::state::{InventoryAction, InventoryState, Store};

pub struct InventoryHandler {
    _bindings: Vec<SubscriptionBinding<ProtocolEvent>>,
}

impl InventoryHandler {
    pub fn attach(
        protocol_bus: &EventDispatcher<ProtocolEvent>,
        store: Store<InventoryState>,
    ) -> Self {
        let context = Arc::new(Context { store });

        let kinds = [
            ProtocolEventKind::FurniListInit,
            ProtocolEventKind::FurniListAddOrUpdate,
            ProtocolEventKind::FurniListRemove,
            ProtocolEventKind::BadgesInit,
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
    store: Store<InventoryState>,
}

impl Context {
    fn handle(&self, event: &ProtocolEvent) {
        match event {
            ProtocolEvent::FurniListInit(Some(data)) => self.on_init(data),
            ProtocolEvent::FurniListAddOrUpdate(Some(data)) => self.on_add_or_update(data),
            ProtocolEvent::FurniListRemove(Some(data)) => self.on_remove(data),
            ProtocolEvent::BadgesInit(Some(data)) => self.on_badges(data),
            _ => {}
        }
    }

    /// The init listing is authoritative and replaces everything held.
    fn on_init(&self, data: &FurniListData) {
        self.store
            .dispatch(InventoryAction::SetFurni(data.items.clone()));
    }

    fn on_add_or_update(&self, data: &FurniListData) {
        for item in &data.items {
            self.store
                .dispatch(InventoryAction::UpsertFurni(item.clone()));
        }
    }

    fn on_remove(&self, data: &FurniListRemoveData) {
        self.store
            .dispatch(InventoryAction::RemoveFurni(data.item_id));
    }

    fn on_badges(&self, data: &BadgesData) {
        self.store
            .dispatch(InventoryAction::SetBadges(data.badge_codes.clone()));
    }
}

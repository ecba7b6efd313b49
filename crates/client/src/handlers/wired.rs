//! Wired-furniture editor message handler

use std::sync::Arc;

use parlor_shared::events::{
    WiredDefinitionData, WiredOpenData, WiredRewardResultData, WiredValidationErrorData,
};
use parlor_shared::{ProtocolEvent, ProtocolEventKind};

use crate::messaging::{EventDispatcher, SubscriptionBinding};
use crate::notifications::{AlertKind, Notifier};
use crate::state::{Store, WiredAction, WiredState};

pub struct WiredHandler {
    _bindings: Vec<SubscriptionBinding<ProtocolEvent>>,
}

impl WiredHandler {
    pub fn attach(
        protocol_bus: &EventDispatcher<ProtocolEvent>,
        store: Store<WiredState>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let context = Arc::new(Context { store, notifier });

        let kinds = [
            ProtocolEventKind::WiredFurniAction,
            ProtocolEventKind::WiredFurniCondition,
            ProtocolEventKind::WiredFurniTrigger,
            ProtocolEventKind::WiredOpen,
            ProtocolEventKind::WiredSaveSuccess,
            ProtocolEventKind::WiredValidationError,
            ProtocolEventKind::WiredRewardResult,
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
    store: Store<WiredState>,
    notifier: Arc<dyn Notifier>,
}

impl Context {
    fn handle(&self, event: &ProtocolEvent) {
        match event {
            // Action, condition and trigger boxes all open the same editor.
            ProtocolEvent::WiredFurniAction(Some(data))
            | ProtocolEvent::WiredFurniCondition(Some(data))
            | ProtocolEvent::WiredFurniTrigger(Some(data)) => self.on_definition(data),
            ProtocolEvent::WiredOpen(Some(data)) => self.on_open(data),
            ProtocolEvent::WiredSaveSuccess => self.on_save_success(),
            ProtocolEvent::WiredValidationError(Some(data)) => self.on_validation_error(data),
            ProtocolEvent::WiredRewardResult(Some(data)) => self.on_reward_result(data),
            _ => {}
        }
    }

    fn on_definition(&self, data: &WiredDefinitionData) {
        self.store
            .dispatch(WiredAction::SetTrigger(data.clone()));
    }

    fn on_open(&self, data: &WiredOpenData) {
        tracing::debug!(item_id = %data.item_id, "wired editor open acknowledged");
    }

    fn on_save_success(&self) {
        self.store.dispatch(WiredAction::ClearTrigger);
    }

    /// A rejected definition keeps the editor open; only the user is told.
    fn on_validation_error(&self, data: &WiredValidationErrorData) {
        self.notifier
            .simple_alert(&data.info, AlertKind::Default, "Wired");
    }

    fn on_reward_result(&self, data: &WiredRewardResultData) {
        tracing::info!(reason = data.reason, "wired reward result");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use parlor_domain::ItemId;

    use crate::notifications::MockNotifier;

    fn rig(
        notifier: MockNotifier,
    ) -> (
        EventDispatcher<ProtocolEvent>,
        Store<WiredState>,
        WiredHandler,
    ) {
        let protocol_bus = EventDispatcher::new();
        let store = Store::<WiredState>::default();
        let handler = WiredHandler::attach(&protocol_bus, store.clone(), Arc::new(notifier));
        (protocol_bus, store, handler)
    }

    fn definition(item_id: i64) -> WiredDefinitionData {
        WiredDefinitionData {
            item_id: ItemId::new(item_id),
            code: 3,
            string_param: String::new(),
            int_params: vec![1, 0],
            selected_items: vec![],
        }
    }

    #[test]
    fn any_definition_kind_opens_the_editor() {
        let (bus, store, _handler) = rig(MockNotifier::new());

        bus.dispatch(&ProtocolEvent::WiredFurniTrigger(Some(definition(7))));
        assert_eq!(store.get().trigger, Some(definition(7)));

        bus.dispatch(&ProtocolEvent::WiredFurniCondition(Some(definition(8))));
        assert_eq!(store.get().trigger, Some(definition(8)));
    }

    #[test]
    fn save_success_closes_the_editor() {
        let (bus, store, _handler) = rig(MockNotifier::new());

        bus.dispatch(&ProtocolEvent::WiredFurniAction(Some(definition(7))));
        bus.dispatch(&ProtocolEvent::WiredSaveSuccess);

        assert_eq!(store.get().trigger, None);
    }

    #[test]
    fn validation_error_alerts_and_keeps_the_editor_open() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_simple_alert()
            .withf(|message, _kind, _title| message.contains("too many items"))
            .times(1)
            .return_const(());

        let (bus, store, _handler) = rig(notifier);

        bus.dispatch(&ProtocolEvent::WiredFurniAction(Some(definition(7))));
        bus.dispatch(&ProtocolEvent::WiredValidationError(Some(
            WiredValidationErrorData {
                info: "too many items selected".into(),
            },
        )));

        assert!(store.get().trigger.is_some());
    }
}

//! Widget message bridge
//!
//! The single chokepoint through which room-object widgets request engine
//! actions. Routing only: avatar commands and info queries go to the
//! engine's room-session handle, furniture operations become composers on
//! the command bus, and name lookups come straight back as widget updates.

use std::sync::Arc;

use parlor_domain::{ObjectOperation, UserAction};
use parlor_shared::Composer;

use crate::messaging::{CommandBus, EventDispatcher};
use crate::session::RoomSession;

use super::messages::WidgetMessage;
use super::updates::WidgetUpdate;

pub struct WidgetMessageBridge {
    session: Arc<dyn RoomSession>,
    command_bus: CommandBus,
    widget_bus: EventDispatcher<WidgetUpdate>,
}

impl WidgetMessageBridge {
    pub fn new(
        session: Arc<dyn RoomSession>,
        command_bus: CommandBus,
        widget_bus: EventDispatcher<WidgetUpdate>,
    ) -> Self {
        Self {
            session,
            command_bus,
            widget_bus,
        }
    }

    /// Route one widget message.
    ///
    /// No business validation here - whether the avatar may currently
    /// dance, sit or decorate is the issuing widget's concern, decided from
    /// state before the message was built.
    pub fn process_widget_message(&self, message: WidgetMessage) {
        match message {
            WidgetMessage::GetObjectName {
                object_id,
                category,
            } => {
                if let Some(name) = self.session.object_name(object_id, category) {
                    self.widget_bus.dispatch(&WidgetUpdate::ObjectName {
                        object_id,
                        category,
                        name,
                    });
                }
            }
            WidgetMessage::GetObjectInfo {
                object_id,
                category,
            } => {
                // Infostand data arrives later as a widget update.
                self.session.request_object_info(object_id, category);
            }
            WidgetMessage::ChangePosture(posture) => self.session.change_posture(posture),
            WidgetMessage::AvatarExpression(expression) => {
                self.session.avatar_expression(expression);
            }
            WidgetMessage::Dance(style) => self.session.dance(style),
            WidgetMessage::UserAction { kind, user_id } => match kind {
                UserAction::DropCarryItem => self.session.drop_carry_item(user_id),
            },
            WidgetMessage::ObjectOperation {
                object_id,
                operation,
            } => {
                let composer = match operation {
                    ObjectOperation::Rotate => Composer::RotateObject {
                        object_id,
                        direction: 1,
                    },
                    ObjectOperation::Move { x, y, direction } => Composer::MoveObject {
                        object_id,
                        x,
                        y,
                        direction,
                    },
                    ObjectOperation::Pickup => Composer::PickupObject { object_id },
                };

                if let Err(error) = self.command_bus.send(composer) {
                    tracing::warn!(%error, "dropping object operation, sink closed");
                }
            }
        }
    }
}

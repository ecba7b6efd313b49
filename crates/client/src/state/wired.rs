//! Wired-furniture editor state slice

use parlor_shared::events::WiredDefinitionData;

use super::store::Slice;

/// The wired definition currently open in the editor, if any.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WiredState {
    pub trigger: Option<WiredDefinitionData>,
}

#[derive(Debug, Clone)]
pub enum WiredAction {
    SetTrigger(WiredDefinitionData),
    /// Editor closed or the definition was saved
    ClearTrigger,
}

impl Slice for WiredState {
    type Action = WiredAction;

    fn apply(&self, action: WiredAction) -> Self {
        match action {
            WiredAction::SetTrigger(definition) => WiredState {
                trigger: Some(definition),
            },
            WiredAction::ClearTrigger => WiredState { trigger: None },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_domain::ItemId;

    #[test]
    fn save_clears_the_open_definition() {
        let definition = WiredDefinitionData {
            item_id: ItemId::new(77),
            code: 3,
            string_param: String::new(),
            int_params: vec![1, 0],
            selected_items: vec![],
        };

        let state = WiredState::default().apply(WiredAction::SetTrigger(definition));
        assert!(state.trigger.is_some());

        let state = state.apply(WiredAction::ClearTrigger);
        assert_eq!(state, WiredState::default());
    }
}

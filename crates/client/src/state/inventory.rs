//! Inventory state slice

use parlor_domain::ItemId;
use parlor_shared::events::FurniItem;

use super::store::Slice;

/// The user's furniture and badge inventory as last reported.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryState {
    pub furni: Vec<FurniItem>,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Replace the full furniture listing
    SetFurni(Vec<FurniItem>),
    /// Insert or replace-in-place by item id
    UpsertFurni(FurniItem),
    /// Remove by item id; absent id is a no-op
    RemoveFurni(ItemId),
    SetBadges(Vec<String>),
    /// Append a badge code; duplicates are rejected
    AddBadge(String),
}

impl Slice for InventoryState {
    type Action = InventoryAction;

    fn apply(&self, action: InventoryAction) -> Self {
        let mut next = self.clone();

        match action {
            InventoryAction::SetFurni(items) => next.furni = items,
            InventoryAction::UpsertFurni(item) => {
                match next.furni.iter_mut().find(|f| f.item_id == item.item_id) {
                    Some(existing) => *existing = item,
                    None => next.furni.push(item),
                }
            }
            InventoryAction::RemoveFurni(item_id) => {
                next.furni.retain(|f| f.item_id != item_id);
            }
            InventoryAction::SetBadges(badges) => next.badges = badges,
            InventoryAction::AddBadge(code) => {
                if !next.badges.contains(&code) {
                    next.badges.push(code);
                }
            }
        }

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlor_shared::events::FurniCategory;

    fn item(id: i64, extra: &str) -> FurniItem {
        FurniItem {
            item_id: ItemId::new(id),
            type_id: 100,
            category: FurniCategory::Floor,
            extra: extra.to_string(),
            tradeable: true,
        }
    }

    #[test]
    fn upsert_replaces_existing_item_in_place() {
        let state = InventoryState::default()
            .apply(InventoryAction::UpsertFurni(item(1, "a")))
            .apply(InventoryAction::UpsertFurni(item(2, "b")))
            .apply(InventoryAction::UpsertFurni(item(1, "updated")));

        assert_eq!(state.furni.len(), 2);
        assert_eq!(state.furni[0].extra, "updated");
    }

    #[test]
    fn remove_absent_item_is_a_noop() {
        let state = InventoryState::default().apply(InventoryAction::UpsertFurni(item(1, "a")));
        let next = state.clone().apply(InventoryAction::RemoveFurni(ItemId::new(9)));

        assert_eq!(next, state);
    }

    #[test]
    fn duplicate_badge_is_rejected() {
        let state = InventoryState::default()
            .apply(InventoryAction::AddBadge("ADM".into()))
            .apply(InventoryAction::AddBadge("ADM".into()));

        assert_eq!(state.badges, vec!["ADM".to_string()]);
    }
}

//! Inventory - item/quantity ledger

mod ammo;

pub use ammo::AmmoCounter;

use crate::error::{ActorError, Result};
use crate::events::GameEvent;
use crate::item::Item;
use serde::{Deserialize, Serialize};

/// One inventory entry; `quantity` is always at least 1 while the entry
/// exists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

/// The item ledger. Ammo items also get a dedicated reserve slot in the
/// `AmmoCounter`; the stack here remains the single quantity store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn stack_at(&self, index: usize) -> Result<&ItemStack> {
        self.stacks.get(index).ok_or(ActorError::BadItemIndex(index))
    }

    pub fn index_of(&self, item_id: u32) -> Option<usize> {
        self.stacks.iter().position(|s| s.item.id == item_id)
    }

    pub fn item(&self, item_id: u32) -> Option<&Item> {
        self.stacks
            .iter()
            .find(|s| s.item.id == item_id)
            .map(|s| &s.item)
    }

    pub fn item_mut(&mut self, item_id: u32) -> Option<&mut Item> {
        self.stacks
            .iter_mut()
            .find(|s| s.item.id == item_id)
            .map(|s| &mut s.item)
    }

    pub fn count(&self, item_id: u32) -> u32 {
        self.stacks
            .iter()
            .find(|s| s.item.id == item_id)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }

    /// Add an item, stacking onto an existing entry up to `held_max`.
    /// New ammo entries register their reserve slot. Returns the item id.
    pub fn add_item(
        &mut self,
        item: Item,
        quantity: u32,
        ammo_counter: &mut AmmoCounter,
        events: &mut Vec<GameEvent>,
    ) -> u32 {
        let id = item.id;

        if let Some(stack) = self.stacks.iter_mut().find(|s| s.item.id == id) {
            if stack.quantity + quantity <= stack.item.held_max {
                stack.quantity += quantity;
            } else {
                stack.quantity = stack.item.held_max;
            }
        } else {
            if let Some(ammo_type) = item.ammo_type() {
                ammo_counter.assign(ammo_type, id);
            }
            self.stacks.push(ItemStack { item, quantity });
            self.sort_by_name();
        }

        events.push(GameEvent::ItemAdded { item_id: id });
        id
    }

    /// Remove `quantity` of an item by id. The entry disappears at zero and
    /// ammo slots are cleared. Returns true while the item is still held.
    pub fn remove_item(
        &mut self,
        item_id: u32,
        quantity: u32,
        ammo_counter: &mut AmmoCounter,
    ) -> bool {
        let ammo_type = self.item(item_id).and_then(|i| i.ammo_type());
        let still_held = self.remove_quantity(item_id, quantity);

        if !still_held {
            if let Some(ammo_type) = ammo_type {
                ammo_counter.clear(ammo_type);
            }
        }

        still_held
    }

    /// Quantity bookkeeping only; callers own any ammo-slot cleanup
    pub(crate) fn remove_quantity(&mut self, item_id: u32, quantity: u32) -> bool {
        let index = match self.index_of(item_id) {
            Some(index) => index,
            None => return false,
        };

        let stack = &mut self.stacks[index];
        stack.quantity = stack.quantity.saturating_sub(quantity);

        if stack.quantity == 0 {
            self.stacks.remove(index);
            return false;
        }

        true
    }

    fn sort_by_name(&mut self) {
        self.stacks.sort_by(|a, b| a.item.name.cmp(&b.item.name));
    }
}

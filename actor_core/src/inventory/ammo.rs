//! AmmoCounter - dedicated per-caliber reserve slots
//!
//! Each ammo type owns one fixed slot holding the id of its inventory
//! stack; quantities stay in the inventory so there is a single store.

use super::Inventory;
use crate::types::AmmoType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmmoCounter {
    /// Inventory item id per ammo type, `None` when no reserves are held
    slots: [Option<u32>; AmmoType::COUNT],
}

impl Default for AmmoCounter {
    fn default() -> Self {
        AmmoCounter {
            slots: [None; AmmoType::COUNT],
        }
    }
}

impl AmmoCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an ammo type's slot to an inventory stack
    pub fn assign(&mut self, ammo_type: AmmoType, item_id: u32) {
        self.slots[ammo_type.index()] = Some(item_id);
    }

    /// Empty an ammo type's slot (stack removed from the inventory)
    pub fn clear(&mut self, ammo_type: AmmoType) {
        self.slots[ammo_type.index()] = None;
    }

    /// Reserve rounds held for an ammo type
    pub fn count(&self, inventory: &Inventory, ammo_type: AmmoType) -> u32 {
        match self.slots[ammo_type.index()] {
            Some(item_id) => inventory.count(item_id),
            None => 0,
        }
    }

    /// Remove rounds from the reserves. Returns true while the stack
    /// survives; the slot is cleared when it empties.
    pub fn decrease(
        &mut self,
        inventory: &mut Inventory,
        ammo_type: AmmoType,
        quantity: u32,
    ) -> bool {
        let item_id = match self.slots[ammo_type.index()] {
            Some(item_id) => item_id,
            None => return false,
        };

        let still_held = inventory.remove_quantity(item_id, quantity);
        if !still_held {
            self.clear(ammo_type);
        }
        still_held
    }

    /// Pull up to `quantity` rounds for a reload. Never returns more than
    /// the reserves hold; reserves never go negative.
    pub fn pull_from_reserves(
        &mut self,
        inventory: &mut Inventory,
        ammo_type: AmmoType,
        quantity: u32,
    ) -> u32 {
        let available = self.count(inventory, ammo_type);
        let pulled = quantity.min(available);
        if pulled > 0 {
            self.decrease(inventory, ammo_type, pulled);
        }
        pulled
    }
}

//! Equipment - hand slots, outfit, quick slots, and equip load

use crate::combat::WeaponStats;
use crate::error::{ActorError, Result};
use crate::events::GameEvent;
use crate::item::{Item, Spell};
use crate::reload::WeaponReloader;
use crate::types::Hand;
use serde::{Deserialize, Serialize};

pub const QUICK_SLOT_COUNT: usize = 8;

/// A charge in progress (weapon wind-up or spell charge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeTimer {
    pub remaining: f64,
    pub total: f64,
}

impl ChargeTimer {
    pub fn new(total: f64) -> Self {
        ChargeTimer {
            remaining: total,
            total,
        }
    }

    /// Advance; true once fully charged
    pub fn tick(&mut self, dt: f64) -> bool {
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }
}

/// An equipped weapon instance: a working copy of the item plus its
/// attribute-scaled stats and live timers. Dropping this on unequip is what
/// guarantees no timer outlives the hand's occupant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquippedWeapon {
    pub item: Item,
    pub stats: WeaponStats,
    pub reloader: Option<WeaponReloader>,
    pub charge: Option<ChargeTimer>,
}

/// An equipped spell instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquippedSpell {
    pub spell: Spell,
    pub charge: Option<ChargeTimer>,
    pub constant_casting: bool,
}

/// What a hand holds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HandOccupant {
    Weapon(EquippedWeapon),
    Spell(EquippedSpell),
}

impl HandOccupant {
    pub fn as_weapon(&self) -> Option<&EquippedWeapon> {
        match self {
            HandOccupant::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_weapon_mut(&mut self) -> Option<&mut EquippedWeapon> {
        match self {
            HandOccupant::Weapon(weapon) => Some(weapon),
            _ => None,
        }
    }

    pub fn as_spell(&self) -> Option<&EquippedSpell> {
        match self {
            HandOccupant::Spell(spell) => Some(spell),
            _ => None,
        }
    }
}

/// A quick-slot binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickSlot {
    Item(u32),
    Spell(u32),
}

/// Hand slots, the outfit slot, quick slots, and the equip-load ledger.
///
/// Transactions that touch siblings (inventory bookkeeping, stat
/// recomputation, outfit deltas) live on the actor; this component owns
/// only its own state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Equipment {
    main_hand: Option<HandOccupant>,
    off_hand: Option<HandOccupant>,
    outfit: Option<Item>,
    quick_slots: [Option<QuickSlot>; QUICK_SLOT_COUNT],
    current_equip_load: f64,
    max_equip_load: f64,
}

impl Default for Equipment {
    fn default() -> Self {
        Equipment {
            main_hand: None,
            off_hand: None,
            outfit: None,
            quick_slots: [None; QUICK_SLOT_COUNT],
            current_equip_load: 0.0,
            max_equip_load: 25.0,
        }
    }
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self, hand: Hand) -> Option<&HandOccupant> {
        match hand {
            Hand::Main => self.main_hand.as_ref(),
            Hand::Off => self.off_hand.as_ref(),
        }
    }

    pub fn hand_mut(&mut self, hand: Hand) -> Option<&mut HandOccupant> {
        match hand {
            Hand::Main => self.main_hand.as_mut(),
            Hand::Off => self.off_hand.as_mut(),
        }
    }

    pub fn set_hand(&mut self, hand: Hand, occupant: Option<HandOccupant>) {
        match hand {
            Hand::Main => self.main_hand = occupant,
            Hand::Off => self.off_hand = occupant,
        }
    }

    /// Remove and return a hand's occupant
    pub fn take_hand(&mut self, hand: Hand) -> Option<HandOccupant> {
        match hand {
            Hand::Main => self.main_hand.take(),
            Hand::Off => self.off_hand.take(),
        }
    }

    /// The hand currently holding a weapon with this item id, if any
    pub fn hand_holding_weapon(&self, item_id: u32) -> Option<Hand> {
        for hand in [Hand::Main, Hand::Off] {
            if let Some(HandOccupant::Weapon(weapon)) = self.hand(hand) {
                if weapon.item.id == item_id {
                    return Some(hand);
                }
            }
        }
        None
    }

    /// The hand currently holding this spell, if any
    pub fn hand_holding_spell(&self, spell_id: u32) -> Option<Hand> {
        for hand in [Hand::Main, Hand::Off] {
            if let Some(HandOccupant::Spell(spell)) = self.hand(hand) {
                if spell.spell.id == spell_id {
                    return Some(hand);
                }
            }
        }
        None
    }

    pub fn outfit(&self) -> Option<&Item> {
        self.outfit.as_ref()
    }

    pub fn set_outfit(&mut self, outfit: Option<Item>) {
        self.outfit = outfit;
    }

    pub fn current_equip_load(&self) -> f64 {
        self.current_equip_load
    }

    pub fn max_equip_load(&self) -> f64 {
        self.max_equip_load
    }

    pub fn set_max_equip_load(&mut self, max: f64) {
        self.max_equip_load = max;
    }

    /// Load fraction used to scale movement penalties
    pub fn equip_load_ratio(&self) -> f64 {
        if self.max_equip_load <= 0.0 {
            return 0.0;
        }
        self.current_equip_load / self.max_equip_load
    }

    pub fn increase_equip_load(&mut self, weight: f64) {
        self.current_equip_load += weight;
    }

    pub fn decrease_equip_load(&mut self, weight: f64) {
        self.current_equip_load -= weight;
    }

    /// Cancel every in-flight hand action: reload, weapon charge, spell
    /// charge, constant cast. Returns true when a constant cast was broken
    /// (the caller must stop the magic burn).
    pub fn cancel_hand_actions(&mut self, hand: Hand, events: &mut Vec<GameEvent>) -> bool {
        let occupant = match self.hand_mut(hand) {
            Some(occupant) => occupant,
            None => return false,
        };

        match occupant {
            HandOccupant::Weapon(weapon) => {
                if let Some(reloader) = &mut weapon.reloader {
                    reloader.cancel(hand, events);
                }
                weapon.charge = None;
                false
            }
            HandOccupant::Spell(spell) => {
                spell.charge = None;
                let was_casting = spell.constant_casting;
                spell.constant_casting = false;
                was_casting
            }
        }
    }

    // === Quick slots ===

    pub fn quick_slots(&self) -> &[Option<QuickSlot>; QUICK_SLOT_COUNT] {
        &self.quick_slots
    }

    /// Bind a quick slot. An occupant already bound elsewhere moves: its
    /// old slot is cleared first.
    pub fn place_quick_slot(&mut self, index: usize, entry: QuickSlot) -> Result<()> {
        if index >= QUICK_SLOT_COUNT {
            return Err(ActorError::BadQuickSlot(index));
        }

        if let Some(previous) = self.quick_slots.iter().position(|s| *s == Some(entry)) {
            self.quick_slots[previous] = None;
        }

        self.quick_slots[index] = Some(entry);
        Ok(())
    }

    pub fn clear_quick_slot(&mut self, index: usize) -> Result<()> {
        if index >= QUICK_SLOT_COUNT {
            return Err(ActorError::BadQuickSlot(index));
        }
        self.quick_slots[index] = None;
        Ok(())
    }

    /// Clear any quick slot bound to this item (last copy dropped)
    pub fn clear_quick_slots_of_item(&mut self, item_id: u32) {
        for slot in &mut self.quick_slots {
            if *slot == Some(QuickSlot::Item(item_id)) {
                *slot = None;
            }
        }
    }
}

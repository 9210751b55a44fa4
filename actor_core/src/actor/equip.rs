//! Equip/unequip transactions
//!
//! Every transition here is transactional: displacing an occupant fully
//! unequips it (bookkeeping, stat reset, action cancellation) before the
//! new occupant is installed, and equip load moves in the same call.

use super::Actor;
use crate::combat;
use crate::equipment::{EquippedSpell, EquippedWeapon, HandOccupant, QuickSlot};
use crate::error::{ActorError, Result};
use crate::events::{GameEvent, SoundCue};
use crate::item::Item;
use crate::reload::WeaponReloader;
use crate::types::Hand;

impl Actor {
    /// Add an item to the inventory. With `auto_equip`, a weapon new to the
    /// inventory goes straight into the first free hand.
    pub fn add_item(&mut self, item: Item, quantity: u32, auto_equip: bool) -> Result<u32> {
        let is_new = self.inventory.count(item.id) == 0;
        let is_weapon = item.is_weapon();

        let mut events = std::mem::take(&mut self.events);
        let id = self
            .inventory
            .add_item(item, quantity, &mut self.ammo, &mut events);
        self.events = events;

        if auto_equip && is_weapon && is_new {
            if self.equipment.hand(Hand::Main).is_none() {
                self.equip_weapon(Hand::Main, id)?;
            } else if self.equipment.hand(Hand::Off).is_none() {
                self.equip_weapon(Hand::Off, id)?;
            }
        }

        Ok(id)
    }

    /// Remove an item, unequipping it first if worn or held. Quick slots
    /// bound to the item are cleared when the last copy goes.
    pub fn drop_item(&mut self, item_id: u32, quantity: u32) -> Result<()> {
        if self.inventory.item(item_id).is_none() {
            return Err(ActorError::UnknownItem(item_id));
        }

        if let Some(hand) = self.equipment.hand_holding_weapon(item_id) {
            self.unequip_hand(hand)?;
        }
        if self.equipment.outfit().map(|o| o.id) == Some(item_id) {
            self.unequip_outfit()?;
        }

        let still_held = self
            .inventory
            .remove_item(item_id, quantity, &mut self.ammo);
        if !still_held {
            self.equipment.clear_quick_slots_of_item(item_id);
        }
        Ok(())
    }

    // === Weapons and spells ===

    /// Equip a weapon from the inventory into a hand.
    ///
    /// Equipping the weapon already in this hand toggles it off; a weapon
    /// held in the other hand swaps over; any other occupant is displaced
    /// through a full unequip.
    pub fn equip_weapon(&mut self, hand: Hand, item_id: u32) -> Result<()> {
        let item = self
            .inventory
            .item(item_id)
            .ok_or(ActorError::UnknownItem(item_id))?;
        if !item.is_weapon() {
            return Err(ActorError::NotAWeapon(item.name.clone()));
        }

        if self.equipment.hand_holding_weapon(item_id) == Some(hand) {
            return self.unequip_hand(hand);
        }
        if let Some(other) = self.equipment.hand_holding_weapon(item_id) {
            self.unequip_hand(other)?;
        }
        if self.equipment.hand(hand).is_some() {
            self.unequip_hand(hand)?;
        }

        // the working copy carries clip state while equipped
        let item = self
            .inventory
            .item(item_id)
            .cloned()
            .ok_or(ActorError::UnknownItem(item_id))?;
        let data = match item.as_weapon() {
            Some(data) => data,
            None => return Err(ActorError::NotAWeapon(item.name.clone())),
        };

        let stats = combat::compute_weapon_stats(data, self.scores.derived());
        let reloader = if data.uses_clip() {
            data.ranged()
                .map(|ranged| WeaponReloader::new(ranged, &self.scores.constants().reload))
        } else {
            None
        };

        let mut events = std::mem::take(&mut self.events);
        let alive = self.health.is_alive();
        for channel in &item.on_equip_statuses {
            self.statuses
                .add_item_status(*channel, item_id, alive, &mut events);
        }

        self.equipment.increase_equip_load(item.weight);
        self.equipment.set_hand(
            hand,
            Some(HandOccupant::Weapon(EquippedWeapon {
                item,
                stats,
                reloader,
                charge: None,
            })),
        );

        events.push(GameEvent::WeaponEquipped { hand, item_id });
        events.push(GameEvent::PlaySound {
            cue: SoundCue::WeaponEquip,
            volume: 0.5,
        });
        self.events = events;
        Ok(())
    }

    /// Equip a known spell into a hand. The same spell in this hand toggles
    /// off; unlike weapons, a spell may sit in both hands at once.
    pub fn equip_spell(&mut self, hand: Hand, spell_id: u32) -> Result<()> {
        let spell = self
            .magic
            .spell(spell_id)
            .cloned()
            .ok_or(ActorError::UnknownSpell(spell_id))?;

        if self.equipment.hand_holding_spell(spell_id) == Some(hand) {
            return self.unequip_hand(hand);
        }
        if self.equipment.hand(hand).is_some() {
            self.unequip_hand(hand)?;
        }

        self.equipment.set_hand(
            hand,
            Some(HandOccupant::Spell(EquippedSpell {
                spell,
                charge: None,
                constant_casting: false,
            })),
        );

        self.events.push(GameEvent::SpellEquipped { hand, spell_id });
        self.events.push(GameEvent::PlaySound {
            cue: SoundCue::SpellEquip,
            volume: 0.5,
        });
        Ok(())
    }

    /// Fully unequip whatever a hand holds: cancel its in-flight actions,
    /// persist clip ammo back to the inventory item, strip item statuses,
    /// release equip load.
    pub fn unequip_hand(&mut self, hand: Hand) -> Result<()> {
        if self.equipment.hand(hand).is_none() {
            return Err(ActorError::HandEmpty(hand));
        }

        let mut events = std::mem::take(&mut self.events);

        // cancel first so no timer survives its occupant
        let was_constant_casting = self.equipment.cancel_hand_actions(hand, &mut events);
        if was_constant_casting {
            self.magic.stop_burn();
        }

        match self.equipment.take_hand(hand) {
            Some(HandOccupant::Weapon(equipped)) => {
                let item_id = equipped.item.id;

                // write the clip back into the inventory item
                if let Some(reloader) = &equipped.reloader {
                    if let Some(ranged) = self
                        .inventory
                        .item_mut(item_id)
                        .and_then(|item| item.as_weapon_mut())
                        .and_then(|weapon| weapon.ranged_mut())
                    {
                        ranged.ammo_in_clip = reloader.ammo_in_clip();
                    }
                }

                self.statuses
                    .remove_statuses_of_initiator(item_id, &mut events);
                self.equipment.decrease_equip_load(equipped.item.weight);

                events.push(GameEvent::WeaponUnequipped { hand, item_id });
                events.push(GameEvent::PlaySound {
                    cue: SoundCue::WeaponUnequip,
                    volume: 0.5,
                });
            }
            Some(HandOccupant::Spell(equipped)) => {
                events.push(GameEvent::SpellUnequipped {
                    hand,
                    spell_id: equipped.spell.id,
                });
                events.push(GameEvent::PlaySound {
                    cue: SoundCue::SpellUnequip,
                    volume: 0.5,
                });
            }
            None => {}
        }

        self.events = events;
        Ok(())
    }

    /// Unequip both hands
    pub fn unequip_hands(&mut self) -> Result<()> {
        for hand in [Hand::Main, Hand::Off] {
            if self.equipment.hand(hand).is_some() {
                self.unequip_hand(hand)?;
            }
        }
        Ok(())
    }

    // === Outfits ===

    /// Equip an outfit. The same outfit toggles off; a different one swaps:
    /// the old outfit's deltas come off before the new ones go on, never a
    /// blind overwrite.
    pub fn equip_outfit(&mut self, item_id: u32) -> Result<()> {
        let item = self
            .inventory
            .item(item_id)
            .ok_or(ActorError::UnknownItem(item_id))?;
        if !item.is_outfit() {
            return Err(ActorError::NotAnOutfit(item.name.clone()));
        }
        let item = item.clone();

        if let Some(current) = self.equipment.outfit().cloned() {
            if current.id == item_id {
                return self.unequip_outfit();
            }
            self.remove_outfit_deltas(&current);
        }

        self.apply_outfit(item);
        Ok(())
    }

    /// Remove the equipped outfit and every delta it granted
    pub fn unequip_outfit(&mut self) -> Result<()> {
        let current = match self.equipment.outfit().cloned() {
            Some(current) => current,
            None => return Ok(()),
        };

        self.remove_outfit_deltas(&current);
        self.equipment.set_outfit(None);
        self.damage_thresholds.clear_bases();

        self.events.push(GameEvent::OutfitUnequipped {
            item_id: current.id,
        });
        self.events.push(GameEvent::PlaySound {
            cue: SoundCue::OutfitUnequip,
            volume: 0.5,
        });
        Ok(())
    }

    fn apply_outfit(&mut self, item: Item) {
        let item_id = item.id;
        let mut events = std::mem::take(&mut self.events);

        if let Some(outfit) = item.as_outfit() {
            self.equipment.increase_equip_load(item.weight);
            self.poise.pool_mut().add_max_base(outfit.poise, false);
            self.damage_thresholds.set_bases(&outfit.damage_thresholds);
            for (channel, delta) in &outfit.status_thresholds {
                self.statuses.add_threshold_delta(*channel, *delta);
            }
            self.statuses
                .add_bleed_reduction_delta(outfit.bleed_reduction);

            let alive = self.health.is_alive();
            for channel in &item.on_equip_statuses {
                self.statuses
                    .add_item_status(*channel, item_id, alive, &mut events);
            }
        }

        self.equipment.set_outfit(Some(item));
        events.push(GameEvent::OutfitEquipped { item_id });
        events.push(GameEvent::PlaySound {
            cue: SoundCue::OutfitEquip,
            volume: 0.5,
        });
        self.events = events;
    }

    fn remove_outfit_deltas(&mut self, item: &Item) {
        let mut events = std::mem::take(&mut self.events);

        if let Some(outfit) = item.as_outfit() {
            self.equipment.decrease_equip_load(item.weight);
            self.poise.pool_mut().add_max_base(-outfit.poise, true);
            for (channel, delta) in &outfit.status_thresholds {
                self.statuses.add_threshold_delta(*channel, -*delta);
            }
            self.statuses
                .add_bleed_reduction_delta(-outfit.bleed_reduction);
        }
        self.statuses.remove_statuses_of_initiator(item.id, &mut events);

        self.events = events;
    }

    // === Quick slots ===

    /// Equip whatever a quick slot is bound to into a hand
    pub fn equip_quick_slot(&mut self, index: usize, hand: Hand) -> Result<()> {
        if index >= crate::equipment::QUICK_SLOT_COUNT {
            return Err(ActorError::BadQuickSlot(index));
        }

        match self.equipment.quick_slots()[index] {
            Some(QuickSlot::Item(item_id)) => self.equip_weapon(hand, item_id),
            Some(QuickSlot::Spell(spell_id)) => self.equip_spell(hand, spell_id),
            None => Ok(()),
        }
    }
}

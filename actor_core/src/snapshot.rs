//! Actor snapshots
//!
//! Persists primitive state only: scores, items, slot contents, pool
//! currents, buildup amounts. Restore replays `set_attributes`/`set_skills`
//! and re-equips, so every derived field is regenerated rather than
//! deserialized; derived state is never the source of truth.

use crate::actor::Actor;
use crate::config::GameConstants;
use crate::equipment::{HandOccupant, QuickSlot, QUICK_SLOT_COUNT};
use crate::error::Result;
use crate::inventory::ItemStack;
use crate::item::Spell;
use crate::scores::{Attribute, Skill};
use crate::status::StatusChannel;
use crate::types::Hand;
use crate::wallet::Wallet;
use serde::{Deserialize, Serialize};

/// What a hand held at capture time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotContent {
    Weapon(u32),
    Spell(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub id: String,
    pub level: u32,
    pub attributes: [u32; Attribute::COUNT],
    pub skills: [u32; Skill::COUNT],
    pub proficiencies: [bool; Skill::COUNT],
    pub unused_points: u32,
    pub currency: u64,
    pub stacks: Vec<ItemStack>,
    pub spells: Vec<Spell>,
    pub main_hand: Option<SlotContent>,
    pub off_hand: Option<SlotContent>,
    pub outfit: Option<u32>,
    pub quick_slots: [Option<QuickSlot>; QUICK_SLOT_COUNT],
    pub current_health: f64,
    pub current_magic: f64,
    pub current_focus: f64,
    pub current_poise: f64,
    pub buildups: Vec<(StatusChannel, f64)>,
    pub augmentation_points: u32,
    pub owned_augmentations: Vec<u32>,
    pub auto_reload: bool,
}

fn slot_content(occupant: Option<&HandOccupant>) -> Option<SlotContent> {
    match occupant {
        Some(HandOccupant::Weapon(weapon)) => Some(SlotContent::Weapon(weapon.item.id)),
        Some(HandOccupant::Spell(spell)) => Some(SlotContent::Spell(spell.spell.id)),
        None => None,
    }
}

impl ActorSnapshot {
    /// Capture an actor's primitive state
    pub fn capture(actor: &Actor) -> Self {
        let mut stacks = actor.inventory.stacks().to_vec();

        // clip state lives in the equipped working copy until unequip;
        // persist the live value, not the stale inventory one
        for hand in [Hand::Main, Hand::Off] {
            if let Some(HandOccupant::Weapon(weapon)) = actor.equipment.hand(hand) {
                if let Some(reloader) = &weapon.reloader {
                    for stack in &mut stacks {
                        if stack.item.id == weapon.item.id {
                            if let Some(ranged) = stack
                                .item
                                .as_weapon_mut()
                                .and_then(|data| data.ranged_mut())
                            {
                                ranged.ammo_in_clip = reloader.ammo_in_clip();
                            }
                        }
                    }
                }
            }
        }

        ActorSnapshot {
            id: actor.id.clone(),
            level: actor.scores.level,
            attributes: *actor.scores.attributes(),
            skills: *actor.scores.skills(),
            proficiencies: *actor.scores.proficiencies(),
            unused_points: actor.scores.unused_points,
            currency: actor.wallet.currency(),
            stacks,
            spells: actor.magic.spells().to_vec(),
            main_hand: slot_content(actor.equipment.hand(Hand::Main)),
            off_hand: slot_content(actor.equipment.hand(Hand::Off)),
            outfit: actor.equipment.outfit().map(|item| item.id),
            quick_slots: *actor.equipment.quick_slots(),
            current_health: actor.health.current(),
            current_magic: actor.magic.current(),
            current_focus: actor.focus.current(),
            current_poise: actor.poise.current(),
            buildups: StatusChannel::ALL
                .iter()
                .map(|channel| (*channel, actor.statuses.buildup(*channel)))
                .collect(),
            augmentation_points: actor.augmentations.points,
            owned_augmentations: actor.augmentations.owned_ids().iter().copied().collect(),
            auto_reload: actor.auto_reload,
        }
    }

    /// Rebuild an actor by replaying score assignment and equip requests
    pub fn restore(&self, constants: GameConstants) -> Result<Actor> {
        let mut actor = Actor::new(self.id.clone(), self.attributes, self.unused_points, constants);

        actor.scores.restore_proficiencies(self.proficiencies);
        actor.scores.level = self.level;
        actor.set_skills(self.skills);

        // re-apply the pool growth earned through levels
        let level_diff = self.level.saturating_sub(1) as f64;
        let derived = actor.scores.derived().clone();
        actor
            .health
            .pool_mut()
            .add_max_base(level_diff * derived.max_health_per_level, false);
        actor
            .magic
            .pool_mut()
            .add_max_base(level_diff * derived.max_magic_per_level, false);
        actor
            .focus
            .pool_mut()
            .add_max_base(level_diff * derived.max_focus_per_level, false);

        actor.wallet = Wallet::new(self.currency);
        actor.auto_reload = self.auto_reload;
        actor.augmentations.points = self.augmentation_points;

        for stack in &self.stacks {
            actor.add_item(stack.item.clone(), stack.quantity, false)?;
        }
        for spell in &self.spells {
            actor.learn_spell(spell.clone());
        }

        match self.main_hand {
            Some(SlotContent::Weapon(item_id)) => actor.equip_weapon(Hand::Main, item_id)?,
            Some(SlotContent::Spell(spell_id)) => actor.equip_spell(Hand::Main, spell_id)?,
            None => {}
        }
        match self.off_hand {
            Some(SlotContent::Weapon(item_id)) => actor.equip_weapon(Hand::Off, item_id)?,
            Some(SlotContent::Spell(spell_id)) => actor.equip_spell(Hand::Off, spell_id)?,
            None => {}
        }
        if let Some(outfit_id) = self.outfit {
            actor.equip_outfit(outfit_id)?;
        }
        for (index, slot) in self.quick_slots.iter().enumerate() {
            if let Some(entry) = slot {
                actor.equipment.place_quick_slot(index, *entry)?;
            }
        }

        actor.health.restore_current(self.current_health);
        actor.magic.pool_mut().set_current(self.current_magic);
        actor.focus.pool_mut().set_current(self.current_focus);
        actor.poise.pool_mut().set_current(self.current_poise);

        for (channel, amount) in &self.buildups {
            actor.statuses.restore_buildup(*channel, *amount);
        }

        // restoration is not gameplay; nothing here should reach a presenter
        actor.drain_events();
        Ok(actor)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

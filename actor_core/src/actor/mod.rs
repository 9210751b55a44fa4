//! Actor - the aggregate that owns every component and drives the tick
//!
//! Components are owned by value; cross-component flows (damage, equip
//! transactions, level-ups) are methods here, so there are no back
//! references and no runtime lookups.

mod damage;
mod equip;

use crate::augment::Augmentations;
use crate::combat::{self, AttackRoll};
use crate::config::GameConstants;
use crate::defense::{DamageEffects, DamageThresholds};
use crate::equipment::{Equipment, HandOccupant};
use crate::error::{ActorError, Result};
use crate::events::GameEvent;
use crate::inventory::{AmmoCounter, Inventory};
use crate::item::Spell;
use crate::pool::{Focus, Health, Magic, Poise};
use crate::scores::{Attribute, AttributeScores, Skill};
use crate::status::StatusEffects;
use crate::types::Hand;
use crate::wallet::Wallet;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One simulated character: player, NPC, or enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub scores: AttributeScores,
    pub health: Health,
    pub magic: Magic,
    pub focus: Focus,
    pub poise: Poise,
    pub damage_effects: DamageEffects,
    pub damage_thresholds: DamageThresholds,
    pub statuses: StatusEffects,
    pub equipment: Equipment,
    pub inventory: Inventory,
    pub ammo: AmmoCounter,
    pub augmentations: Augmentations,
    pub wallet: Wallet,
    /// Player-driven actors reload automatically on an empty clip
    pub auto_reload: bool,
    events: Vec<GameEvent>,
}

impl Actor {
    /// Build an actor and wire every cross-component dependency once.
    /// Derived stats flow into the pools immediately.
    pub fn new(
        id: impl Into<String>,
        attributes: [u32; Attribute::COUNT],
        unused_points: u32,
        constants: GameConstants,
    ) -> Self {
        let pools = constants.pools.clone();
        let status_constants = constants.status.clone();

        let mut scores = AttributeScores::new(constants);
        scores.set_attributes(attributes, unused_points);
        let derived = scores.derived().clone();

        let mut magic = Magic::new(derived.max_magic, pools.ticks_per_second);
        magic
            .pool_mut()
            .set_regen_per_second(derived.magic_regen_per_second);
        magic.pool_mut().start_regen();

        let mut focus = Focus::new(derived.max_focus, pools.ticks_per_second);
        focus
            .pool_mut()
            .set_regen_per_second(derived.focus_regen_per_second);
        focus.pool_mut().start_regen();

        let mut poise = Poise::new(derived.natural_poise, &pools);
        poise.pool_mut().set_regen_per_second(1.0);
        poise.pool_mut().start_regen();

        let mut equipment = Equipment::new();
        equipment.set_max_equip_load(derived.max_equip_load);

        Actor {
            id: id.into(),
            health: Health::new(derived.max_health, &pools),
            magic,
            focus,
            poise,
            damage_effects: DamageEffects::new(),
            damage_thresholds: DamageThresholds::new(),
            statuses: StatusEffects::new(&status_constants),
            equipment,
            inventory: Inventory::new(),
            ammo: AmmoCounter::new(),
            augmentations: Augmentations::new(),
            wallet: Wallet::default(),
            auto_reload: false,
            events: Vec::new(),
            scores,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health.is_alive()
    }

    pub fn is_incapacitated(&self) -> bool {
        self.poise.is_incapacitated()
    }

    /// Drain the event buffer for the presentation layer
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    // === Score mutation (derived stats flow into components) ===

    /// Assign primary attributes and push every dependent value out to the
    /// pools and equipment. With `increase_current_pools`, current values
    /// grow by the cap delta (character creation and respec).
    pub fn set_attributes(
        &mut self,
        attributes: [u32; Attribute::COUNT],
        unused_points: u32,
        increase_current_pools: bool,
    ) {
        self.scores.set_attributes(attributes, unused_points);
        self.apply_attribute_effects(increase_current_pools);
        self.refresh_equipped_weapon_stats();
    }

    /// Overwrite skills (the level-up path) and refresh dependents.
    /// Skill changes never touch pool maxima; those are attribute effects.
    pub fn set_skills(&mut self, skills: [u32; Skill::COUNT]) {
        self.scores.set_skills(skills);
        self.refresh_equipped_weapon_stats();
    }

    /// Tag a skill proficiency and refresh dependents
    pub fn set_proficiency(&mut self, skill: Skill) {
        self.scores.set_proficiency(skill);
        self.refresh_equipped_weapon_stats();
    }

    /// Spend currency (clamped at zero, never negative) and raise the pool
    /// caps by the per-level growth captured at the last attribute
    /// assignment, then overwrite skills with the levelled values.
    pub fn level_up(&mut self, new_level: u32, cost: u64, skills: [u32; Skill::COUNT]) {
        let level_diff = new_level.saturating_sub(self.scores.level) as f64;
        self.scores.level = new_level;

        let mut events = std::mem::take(&mut self.events);
        self.wallet.subtract(cost, &mut events);

        let derived = self.scores.derived();
        let health_gain = level_diff * derived.max_health_per_level;
        let magic_gain = level_diff * derived.max_magic_per_level;
        let focus_gain = level_diff * derived.max_focus_per_level;

        self.health.pool_mut().add_max_base(health_gain, false);
        self.health.increase(health_gain, &mut events);
        self.magic.pool_mut().add_max_base(magic_gain, false);
        self.magic.increase(magic_gain, &mut events);
        self.focus.pool_mut().add_max_base(focus_gain, false);
        self.focus.increase(focus_gain, &mut events);

        events.push(GameEvent::LeveledUp { new_level });
        self.events = events;

        self.set_skills(skills);
    }

    /// Push the attribute-derived caps and rates into the pools and
    /// equipment
    fn apply_attribute_effects(&mut self, increase_current_pools: bool) {
        let derived = self.scores.derived().clone();
        let mut events = std::mem::take(&mut self.events);

        let old_health_max = self.health.max_value();
        self.health.pool_mut().set_max_base(derived.max_health);
        if increase_current_pools {
            let delta = self.health.max_value() - old_health_max;
            if delta > 0.0 {
                self.health.increase(delta, &mut events);
            }
        }

        let old_magic_max = self.magic.max_value();
        self.magic.pool_mut().set_max_base(derived.max_magic);
        self.magic
            .pool_mut()
            .set_regen_per_second(derived.magic_regen_per_second);
        if increase_current_pools {
            let delta = self.magic.max_value() - old_magic_max;
            if delta > 0.0 {
                self.magic.increase(delta, &mut events);
            }
        }

        let old_focus_max = self.focus.max_value();
        self.focus.pool_mut().set_max_base(derived.max_focus);
        self.focus
            .pool_mut()
            .set_regen_per_second(derived.focus_regen_per_second);
        if increase_current_pools {
            let delta = self.focus.max_value() - old_focus_max;
            if delta > 0.0 {
                self.focus.increase(delta, &mut events);
            }
        }

        let old_poise_max = self.poise.max_value();
        self.poise.pool_mut().set_max_base(derived.natural_poise);
        if increase_current_pools {
            let delta = self.poise.max_value() - old_poise_max;
            if delta > 0.0 {
                self.poise.increase(delta, &mut events);
            }
        }

        self.equipment.set_max_equip_load(derived.max_equip_load);
        self.events = events;
    }

    fn refresh_equipped_weapon_stats(&mut self) {
        for hand in [Hand::Main, Hand::Off] {
            if let Some(HandOccupant::Weapon(weapon)) = self.equipment.hand_mut(hand) {
                if let Some(data) = weapon.item.as_weapon() {
                    weapon.stats = combat::compute_weapon_stats(data, self.scores.derived());
                }
            }
        }
    }

    // === Spells ===

    pub fn learn_spell(&mut self, spell: Spell) {
        self.magic.add_spell(spell);
    }

    // === Reload and fire ===

    /// Begin an active reload in a hand holding a clip weapon
    pub fn trigger_reload(&mut self, hand: Hand) -> Result<()> {
        let derived = self.scores.derived().clone();
        let reload_constants = self.scores.constants().reload.clone();

        let occupant = self
            .equipment
            .hand_mut(hand)
            .ok_or(ActorError::HandEmpty(hand))?;
        let weapon = match occupant.as_weapon_mut() {
            Some(weapon) => weapon,
            None => return Err(ActorError::HandEmpty(hand)),
        };

        if let Some(reloader) = &mut weapon.reloader {
            reloader.trigger(&derived, &reload_constants, hand, &mut self.events);
        }
        Ok(())
    }

    /// Sample the active reload slider (player timing input)
    pub fn reload_input(&mut self, hand: Hand) {
        if let Some(HandOccupant::Weapon(weapon)) = self.equipment.hand_mut(hand) {
            if let Some(reloader) = &mut weapon.reloader {
                reloader.receive_input(hand, &mut self.events);
            }
        }
    }

    /// Abort an in-flight reload without loading anything
    pub fn cancel_reload(&mut self, hand: Hand) {
        if let Some(HandOccupant::Weapon(weapon)) = self.equipment.hand_mut(hand) {
            if let Some(reloader) = &mut weapon.reloader {
                reloader.cancel(hand, &mut self.events);
            }
        }
    }

    /// Fire the hand's weapon: rolls damage, spends a round (bonus rounds
    /// first) for clip weapons
    pub fn attack_roll_with_rng(&mut self, hand: Hand, rng: &mut impl Rng) -> Result<AttackRoll> {
        let derived = self.scores.derived().clone();

        let occupant = self
            .equipment
            .hand_mut(hand)
            .ok_or(ActorError::HandEmpty(hand))?;
        let weapon = match occupant.as_weapon_mut() {
            Some(weapon) => weapon,
            None => return Err(ActorError::HandEmpty(hand)),
        };

        let bonus = weapon.reloader.as_ref().and_then(|reloader| {
            if reloader.next_round_is_bonus() {
                Some(reloader.sweet_spot_damage_multiplier())
            } else {
                None
            }
        });

        if let Some(reloader) = &mut weapon.reloader {
            reloader.decrease_ammo_in_clip(1);
        }

        Ok(combat::roll_attack_with_rng(
            &weapon.stats,
            &derived,
            bonus,
            rng,
        ))
    }

    // === Trade ===

    /// Price this actor pays for an item (barter-scaled)
    pub fn buy_price(&self, base_value: u64) -> u64 {
        (base_value as f64 * self.scores.derived().buy_multiplier).round() as u64
    }

    /// Price this actor receives for an item (barter-scaled)
    pub fn sell_price(&self, base_value: u64) -> u64 {
        (base_value as f64 * self.scores.derived().sell_multiplier).round() as u64
    }

    // === Simulation tick ===

    /// Advance every timed process by `dt` seconds: pool regen/drain,
    /// status decay, reload timers, charge timers, knockdown countdown.
    pub fn tick(&mut self, dt: f64) {
        let mut events = std::mem::take(&mut self.events);

        self.health.tick(dt, &mut events);
        self.magic.tick(dt, &mut events);
        self.focus.tick(dt, &mut events);
        self.poise.tick(dt, &mut events);

        let alive = self.health.is_alive();
        self.statuses.tick(dt, alive, &mut events);

        for hand in [Hand::Main, Hand::Off] {
            if let Some(HandOccupant::Weapon(weapon)) = self.equipment.hand_mut(hand) {
                if let Some(charge) = &mut weapon.charge {
                    charge.tick(dt);
                }
                if let Some(reloader) = &mut weapon.reloader {
                    reloader.tick(dt, &mut self.ammo, &mut self.inventory, hand, &mut events);

                    // empty clip with reserves on hand starts the next reload
                    if self.auto_reload
                        && alive
                        && reloader.ammo_in_clip() == 0
                        && !reloader.is_reloading()
                        && self.ammo.count(&self.inventory, reloader.ammo_type()) > 0
                    {
                        reloader.trigger(
                            self.scores.derived(),
                            &self.scores.constants().reload,
                            hand,
                            &mut events,
                        );
                    }
                }
            } else if let Some(HandOccupant::Spell(spell)) = self.equipment.hand_mut(hand) {
                if let Some(charge) = &mut spell.charge {
                    charge.tick(dt);
                }
            }
        }

        self.events = events;
    }
}

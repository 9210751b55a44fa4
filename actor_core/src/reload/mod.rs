//! WeaponReloader - timed reload state machine with the active reload
//! skill check

mod bar;

pub use bar::ReloadBar;

use crate::config::ReloadConstants;
use crate::events::{AnimFlag, GameEvent, SoundCue};
use crate::inventory::{AmmoCounter, Inventory};
use crate::item::RangedData;
use crate::scores::DerivedStats;
use crate::types::{AmmoType, Hand};
use serde::{Deserialize, Serialize};

/// Outcome of the player's single timing input per reload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReloadState {
    Sweetspot,
    Normalspot,
    Jammed,
    /// No input: the slider ran its full course
    Fullslide,
}

/// Per-weapon reload state. Lives inside the equipped hand; unequipping the
/// hand drops it, which is what makes cancel-on-unequip airtight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponReloader {
    clip_size: u32,
    ammo_in_clip: u32,
    ammo_type: AmmoType,
    reload_time: f64,
    state: ReloadState,
    reloading: bool,
    timer_remaining: f64,
    timer_total: f64,
    /// Countdown rate; 1.0 until a spot is hit
    speed_multiplier: f64,
    sweet_spot_hit: bool,
    input_taken: bool,
    /// Rounds from the last sweet-spot reload still carrying bonus damage
    bonus_damage_rounds: u32,
    sweet_spot_damage_multiplier: f64,
    sweet_spot_speed_factor: f64,
    bar: ReloadBar,
}

impl WeaponReloader {
    pub fn new(ranged: &RangedData, constants: &ReloadConstants) -> Self {
        WeaponReloader {
            clip_size: ranged.clip_size,
            ammo_in_clip: ranged.ammo_in_clip.min(ranged.clip_size),
            ammo_type: ranged.ammo_type,
            reload_time: ranged.reload_time,
            state: ReloadState::Fullslide,
            reloading: false,
            timer_remaining: 0.0,
            timer_total: 0.0,
            speed_multiplier: 1.0,
            sweet_spot_hit: false,
            input_taken: false,
            bonus_damage_rounds: 0,
            sweet_spot_damage_multiplier: constants.sweet_spot_damage_multiplier,
            sweet_spot_speed_factor: constants.sweet_spot_speed_factor,
            bar: ReloadBar::new(
                constants.sweet_spot_start,
                constants.sweet_spot_end,
                constants.normal_spot_end,
                0.0,
            ),
        }
    }

    pub fn clip_size(&self) -> u32 {
        self.clip_size
    }

    pub fn ammo_in_clip(&self) -> u32 {
        self.ammo_in_clip
    }

    pub fn ammo_type(&self) -> AmmoType {
        self.ammo_type
    }

    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    pub fn state(&self) -> ReloadState {
        self.state
    }

    pub fn bonus_damage_rounds(&self) -> u32 {
        self.bonus_damage_rounds
    }

    pub fn sweet_spot_damage_multiplier(&self) -> f64 {
        self.sweet_spot_damage_multiplier
    }

    /// Slider position in `[0, 1]`, zero while idle
    pub fn slider_position(&self) -> f64 {
        if !self.reloading || self.timer_total <= 0.0 {
            return 0.0;
        }
        1.0 - self.timer_remaining / self.timer_total
    }

    /// Begin an active reload. A reload already in flight is a no-op.
    ///
    /// Sleight of hand shortens the timer and widens the sweet spot; both
    /// are read at trigger time so mid-reload stat changes cannot skew an
    /// armed timer.
    pub fn trigger(
        &mut self,
        derived: &DerivedStats,
        constants: &ReloadConstants,
        hand: Hand,
        events: &mut Vec<GameEvent>,
    ) {
        if self.reloading {
            return;
        }

        self.reloading = true;
        self.state = ReloadState::Fullslide;
        self.speed_multiplier = 1.0;
        self.sweet_spot_hit = false;
        self.input_taken = false;
        self.timer_total = self.reload_time / derived.reload_speed_multiplier.max(0.01);
        self.timer_remaining = self.timer_total;
        self.bar = ReloadBar::new(
            constants.sweet_spot_start,
            constants.sweet_spot_end,
            constants.normal_spot_end,
            derived.sweet_spot_bonus,
        );

        events.push(GameEvent::ReloadStarted { hand });
        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::Reloading,
            value: true,
        });
        events.push(GameEvent::PlaySound {
            cue: SoundCue::ReloadStart,
            volume: 0.5,
        });
    }

    /// Sample the slider against the timing windows. Only the first input
    /// of a reload counts; a miss jams the weapon and resets the timer.
    pub fn receive_input(&mut self, hand: Hand, events: &mut Vec<GameEvent>) {
        if !self.reloading || self.input_taken {
            return;
        }
        self.input_taken = true;

        match self.bar.sample(self.slider_position()) {
            ReloadState::Sweetspot => {
                self.state = ReloadState::Sweetspot;
                self.sweet_spot_hit = true;
                self.speed_multiplier = self.sweet_spot_speed_factor;
            }
            ReloadState::Normalspot => {
                self.state = ReloadState::Normalspot;
                self.speed_multiplier = self.sweet_spot_speed_factor;
            }
            _ => {
                // jam: back to a full, normal-speed slide
                self.state = ReloadState::Fullslide;
                self.timer_remaining = self.timer_total;
                self.speed_multiplier = 1.0;
                events.push(GameEvent::ReloadJammed { hand });
                events.push(GameEvent::SetAnimFlag {
                    flag: AnimFlag::Jammed,
                    value: true,
                });
                events.push(GameEvent::PlaySound {
                    cue: SoundCue::ReloadJam,
                    volume: 0.5,
                });
            }
        }
    }

    /// Advance the countdown; completes the reload on expiry
    pub fn tick(
        &mut self,
        dt: f64,
        ammo_counter: &mut AmmoCounter,
        inventory: &mut Inventory,
        hand: Hand,
        events: &mut Vec<GameEvent>,
    ) {
        if !self.reloading {
            return;
        }

        self.timer_remaining -= dt * self.speed_multiplier;
        if self.timer_remaining > 0.0 {
            return;
        }

        let pulled = self.fill_clip(ammo_counter, inventory);
        let bonus_rounds = self.bonus_damage_rounds;

        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::Reloading,
            value: false,
        });
        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::Jammed,
            value: false,
        });
        match self.state {
            ReloadState::Sweetspot => events.push(GameEvent::PlaySound {
                cue: SoundCue::SweetSpot,
                volume: 0.5,
            }),
            ReloadState::Normalspot => events.push(GameEvent::PlaySound {
                cue: SoundCue::NormalSpot,
                volume: 1.0,
            }),
            _ => {}
        }
        events.push(GameEvent::ReloadCompleted {
            hand,
            rounds_loaded: pulled,
            bonus_rounds,
        });

        self.reloading = false;
        self.state = ReloadState::Fullslide;
        self.speed_multiplier = 1.0;
        self.input_taken = false;
    }

    /// Pull from the reserves straight into the clip (the no-minigame path)
    pub fn basic_reload(&mut self, ammo_counter: &mut AmmoCounter, inventory: &mut Inventory) -> u32 {
        self.fill_clip(ammo_counter, inventory)
    }

    fn fill_clip(&mut self, ammo_counter: &mut AmmoCounter, inventory: &mut Inventory) -> u32 {
        let wanted = self.clip_size - self.ammo_in_clip;
        let pulled = ammo_counter.pull_from_reserves(inventory, self.ammo_type, wanted);
        self.ammo_in_clip += pulled;

        if self.sweet_spot_hit {
            self.bonus_damage_rounds = pulled;
            self.sweet_spot_hit = false;
        } else {
            self.bonus_damage_rounds = 0;
        }

        pulled
    }

    /// Abort an in-flight reload. The clip is left untouched: no partial
    /// credit.
    pub fn cancel(&mut self, hand: Hand, events: &mut Vec<GameEvent>) {
        if !self.reloading {
            return;
        }

        self.reloading = false;
        self.state = ReloadState::Fullslide;
        self.speed_multiplier = 1.0;
        self.input_taken = false;
        self.sweet_spot_hit = false;

        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::Reloading,
            value: false,
        });
        events.push(GameEvent::SetAnimFlag {
            flag: AnimFlag::Jammed,
            value: false,
        });
        events.push(GameEvent::ReloadCancelled { hand });
    }

    /// Spend rounds on firing, bonus rounds first. Clamps at an empty clip.
    pub fn decrease_ammo_in_clip(&mut self, quantity: u32) {
        self.ammo_in_clip = self.ammo_in_clip.saturating_sub(quantity);
        self.bonus_damage_rounds = self.bonus_damage_rounds.saturating_sub(quantity);
    }

    /// True while the next round fired carries the sweet-spot bonus
    pub fn next_round_is_bonus(&self) -> bool {
        self.bonus_damage_rounds > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::item::{Item, ItemKind};
    use crate::scores::AttributeScores;

    fn ranged() -> RangedData {
        RangedData {
            ammo_type: AmmoType::FiveFiveSix,
            clip_size: 30,
            ammo_in_clip: 0,
            reload_time: 2.0,
            base_spread: 2.0,
            is_throwing: false,
        }
    }

    fn stocked(rounds: u32) -> (Inventory, AmmoCounter) {
        let mut inventory = Inventory::new();
        let mut counter = AmmoCounter::new();
        let mut events = Vec::new();
        inventory.add_item(
            Item {
                id: 1,
                name: "5.56 Rounds".to_string(),
                weight: 0.02,
                value: 1,
                held_max: 999,
                kind: ItemKind::Ammo(AmmoType::FiveFiveSix),
                on_equip_statuses: Vec::new(),
            },
            rounds,
            &mut counter,
            &mut events,
        );
        (inventory, counter)
    }

    fn reloader() -> WeaponReloader {
        WeaponReloader::new(&ranged(), &ReloadConstants::default())
    }

    fn scores() -> AttributeScores {
        AttributeScores::new(GameConstants::default())
    }

    fn constants() -> ReloadConstants {
        ReloadConstants::default()
    }

    #[test]
    fn test_sweet_spot_hit_loads_bonus_rounds() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        // 2s reload: 0.9s in, the slider sits at 0.45 - inside [0.4, 0.5)
        reloader.tick(0.9, &mut counter, &mut inventory, Hand::Main, &mut events);
        reloader.receive_input(Hand::Main, &mut events);
        assert_eq!(reloader.state(), ReloadState::Sweetspot);

        // sped-up countdown finishes the remaining 1.1s in 0.55s
        reloader.tick(0.6, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert!(!reloader.is_reloading());
        assert_eq!(reloader.ammo_in_clip(), 30);
        assert_eq!(reloader.bonus_damage_rounds(), 30);
        assert_eq!(counter.count(&inventory, AmmoType::FiveFiveSix), 60);
    }

    #[test]
    fn test_full_slide_loads_without_bonus() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        reloader.tick(2.1, &mut counter, &mut inventory, Hand::Main, &mut events);

        assert_eq!(reloader.ammo_in_clip(), 30);
        assert_eq!(reloader.bonus_damage_rounds(), 0);
        assert!(events.contains(&GameEvent::ReloadCompleted {
            hand: Hand::Main,
            rounds_loaded: 30,
            bonus_rounds: 0,
        }));
    }

    #[test]
    fn test_jam_resets_timer_to_full() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        // 0.2s in: slider at 0.1, outside both windows
        reloader.tick(0.2, &mut counter, &mut inventory, Hand::Main, &mut events);
        reloader.receive_input(Hand::Main, &mut events);

        assert!(events.contains(&GameEvent::ReloadJammed { hand: Hand::Main }));
        assert!((reloader.slider_position() - 0.0).abs() < f64::EPSILON);
        assert!(reloader.is_reloading());

        // the full 2s must elapse again before the clip fills
        reloader.tick(1.9, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert_eq!(reloader.ammo_in_clip(), 0);
        reloader.tick(0.2, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert_eq!(reloader.ammo_in_clip(), 30);
        assert_eq!(reloader.bonus_damage_rounds(), 0);
    }

    #[test]
    fn test_only_first_input_counts() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        reloader.tick(0.2, &mut counter, &mut inventory, Hand::Main, &mut events);
        reloader.receive_input(Hand::Main, &mut events); // jam
        reloader.tick(0.9, &mut counter, &mut inventory, Hand::Main, &mut events);
        reloader.receive_input(Hand::Main, &mut events); // spent, ignored
        assert_eq!(reloader.state(), ReloadState::Fullslide);
    }

    #[test]
    fn test_cancel_leaves_clip_unchanged() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Off, &mut events);
        reloader.tick(1.5, &mut counter, &mut inventory, Hand::Off, &mut events);
        reloader.cancel(Hand::Off, &mut events);

        assert!(!reloader.is_reloading());
        assert_eq!(reloader.ammo_in_clip(), 0);
        assert_eq!(counter.count(&inventory, AmmoType::FiveFiveSix), 90);
        assert!(events.contains(&GameEvent::ReloadCancelled { hand: Hand::Off }));

        // cancelled reload grants nothing even after the old deadline passes
        reloader.tick(5.0, &mut counter, &mut inventory, Hand::Off, &mut events);
        assert_eq!(reloader.ammo_in_clip(), 0);
    }

    #[test]
    fn test_short_reserves_partially_fill_clip() {
        let (mut inventory, mut counter) = stocked(12);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        reloader.tick(2.1, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert_eq!(reloader.ammo_in_clip(), 12);
        assert_eq!(counter.count(&inventory, AmmoType::FiveFiveSix), 0);
    }

    #[test]
    fn test_firing_spends_bonus_rounds_first() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let scores = scores();

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        reloader.tick(0.9, &mut counter, &mut inventory, Hand::Main, &mut events);
        reloader.receive_input(Hand::Main, &mut events);
        reloader.tick(1.0, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert_eq!(reloader.bonus_damage_rounds(), 30);

        for _ in 0..30 {
            assert!(reloader.next_round_is_bonus());
            reloader.decrease_ammo_in_clip(1);
        }
        assert!(!reloader.next_round_is_bonus());
        assert_eq!(reloader.ammo_in_clip(), 0);
    }

    #[test]
    fn test_reload_speed_multiplier_shortens_timer() {
        let (mut inventory, mut counter) = stocked(90);
        let mut reloader = reloader();
        let mut events = Vec::new();
        let mut scores = scores();
        let mut skills = *scores.skills();
        // 1 + 0.02 * 50 = 2x reload speed
        skills[crate::scores::Skill::SleightOfHand as usize] = 50;
        scores.set_skills(skills);

        reloader.trigger(scores.derived(), &constants(), Hand::Main, &mut events);
        reloader.tick(1.1, &mut counter, &mut inventory, Hand::Main, &mut events);
        assert_eq!(reloader.ammo_in_clip(), 30);
    }
}

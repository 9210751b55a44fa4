//! Buildup accumulators and their decay tickers

use super::{ActiveStatus, StatusChannel};
use crate::config::StatusConstants;
use crate::defense::DamageEffects;
use crate::events::GameEvent;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// One buildup channel: accumulate on hit, decay on its own ticker.
///
/// `decaying` marks a live decay ticker; it self-terminates when the amount
/// reaches zero so idle channels cost nothing per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Channel {
    amount: f64,
    threshold: f64,
    decay_per_second: f64,
    decaying: bool,
    decay_elapsed: f64,
    /// A buildup-applied status instance is currently held (never set for
    /// one-shot channels)
    active: bool,
}

impl Channel {
    fn new(threshold: f64, decay_per_second: f64) -> Self {
        Channel {
            amount: 0.0,
            threshold,
            decay_per_second,
            decaying: false,
            decay_elapsed: 0.0,
            active: false,
        }
    }
}

/// Side effects triggered by a threshold crossing, applied by the actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusTrigger {
    /// Instant fractional health loss (fraction already scaled by bleed
    /// reduction)
    BloodLoss { fraction: f64 },
    /// One-shot chain lightning carrying the stored shock effect damage
    ChainLightning { damage: f64 },
}

/// The seven buildup channels plus the applied-status ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusEffects {
    channels: Vec<Channel>,
    decay_ticks_per_second: f64,
    status_damage_percentage: f64,
    /// Percentage points subtracted from the blood-loss fraction
    bleed_reduction: f64,
    /// Effect damage of the most recent shock hit, forwarded to chain
    /// lightning
    shock_damage: f64,
    actives: Vec<ActiveStatus>,
}

impl StatusEffects {
    pub fn new(constants: &StatusConstants) -> Self {
        let thresholds = [
            constants.burning_threshold,
            constants.poisoned_threshold,
            constants.frost_threshold,
            constants.shocked_threshold,
            constants.decay_threshold,
            constants.insanity_threshold,
            constants.bleed_threshold,
        ];
        let decays = [
            constants.burning_decay_per_second,
            constants.poisoned_decay_per_second,
            constants.frost_decay_per_second,
            constants.shocked_decay_per_second,
            constants.decay_decay_per_second,
            constants.insanity_decay_per_second,
            constants.bleed_decay_per_second,
        ];

        StatusEffects {
            channels: StatusChannel::ALL
                .iter()
                .map(|c| Channel::new(thresholds[c.index()], decays[c.index()]))
                .collect(),
            decay_ticks_per_second: constants.decay_ticks_per_second,
            status_damage_percentage: constants.status_damage_percentage,
            bleed_reduction: constants.bleed_reduction,
            shock_damage: 0.0,
            actives: Vec::new(),
        }
    }

    pub fn buildup(&self, channel: StatusChannel) -> f64 {
        self.channels[channel.index()].amount
    }

    pub fn threshold(&self, channel: StatusChannel) -> f64 {
        self.channels[channel.index()].threshold
    }

    pub fn bleed_reduction(&self) -> f64 {
        self.bleed_reduction
    }

    pub fn is_active(&self, channel: StatusChannel) -> bool {
        self.channels[channel.index()].active
    }

    pub fn actives(&self) -> &[ActiveStatus] {
        &self.actives
    }

    /// Add `damage × status pct` to each matching channel plus the flat
    /// bleed delta, returning any one-shot triggers for the actor to apply.
    ///
    /// Buildup uses the attacker's raw damage values: mitigation affects
    /// health loss, never exposure. Resistance/immunity gates *activation*
    /// only.
    pub fn increase_buildup(
        &mut self,
        damages: &[(DamageType, f64)],
        status_damage_percentage: f64,
        bleed_delta: f64,
        gate: &DamageEffects,
        alive: bool,
        events: &mut Vec<GameEvent>,
    ) -> Vec<StatusTrigger> {
        self.status_damage_percentage = status_damage_percentage;
        let mut triggers = Vec::new();

        if bleed_delta != 0.0 {
            self.add_to_channel(
                StatusChannel::Bleeding,
                bleed_delta,
                gate,
                alive,
                events,
                &mut triggers,
            );
        }

        for (damage_type, damage) in damages {
            if let Some(channel) = StatusChannel::from_damage_type(*damage_type) {
                let effect_damage = damage * self.status_damage_percentage;
                if channel == StatusChannel::Shocked {
                    self.shock_damage = effect_damage;
                }
                self.add_to_channel(channel, effect_damage, gate, alive, events, &mut triggers);
            }
        }

        triggers
    }

    fn add_to_channel(
        &mut self,
        channel: StatusChannel,
        delta: f64,
        gate: &DamageEffects,
        alive: bool,
        events: &mut Vec<GameEvent>,
        triggers: &mut Vec<StatusTrigger>,
    ) {
        let cell = &mut self.channels[channel.index()];
        cell.amount = (cell.amount + delta).max(0.0);

        if cell.amount >= cell.threshold {
            match channel {
                StatusChannel::Bleeding => {
                    cell.amount = 0.0;
                    let fraction = (100.0 - self.bleed_reduction) / 100.0;
                    triggers.push(StatusTrigger::BloodLoss { fraction });
                }
                StatusChannel::Shocked => {
                    cell.amount = 0.0;
                    triggers.push(StatusTrigger::ChainLightning {
                        damage: self.shock_damage,
                    });
                }
                _ => {
                    if !cell.active && alive && !gate.resists_or_immune(channel.gating_damage_type())
                    {
                        cell.active = true;
                        self.actives.push(ActiveStatus {
                            channel,
                            initiator: None,
                        });
                        events.push(GameEvent::StatusApplied { channel });
                    }
                }
            }
        }

        let cell = &mut self.channels[channel.index()];
        if cell.amount > 0.0 && !cell.decaying {
            cell.decaying = true;
            cell.decay_elapsed = 0.0;
        }
    }

    /// Advance every live decay ticker. Each channel decays independently
    /// and stops when it empties; falling below the threshold while alive
    /// removes the channel's active status exactly once.
    pub fn tick(&mut self, dt: f64, alive: bool, events: &mut Vec<GameEvent>) {
        let interval = 1.0 / self.decay_ticks_per_second;

        for channel in StatusChannel::ALL {
            let cell = &mut self.channels[channel.index()];
            if !cell.decaying {
                continue;
            }

            let per_tick = cell.decay_per_second / self.decay_ticks_per_second;
            cell.decay_elapsed += dt;
            while cell.decay_elapsed >= interval && cell.amount > 0.0 {
                cell.decay_elapsed -= interval;
                cell.amount = (cell.amount - per_tick).max(0.0);
            }

            if cell.amount <= 0.0 {
                cell.amount = 0.0;
                cell.decaying = false;
            }

            if cell.active && cell.amount < cell.threshold && alive {
                cell.active = false;
                self.actives
                    .retain(|s| !(s.channel == channel && s.initiator.is_none()));
                events.push(GameEvent::StatusRemoved { channel });
            }
        }
    }

    /// Apply a status granted by an item (on-equip effects). Dead actors
    /// take no new statuses.
    pub fn add_item_status(
        &mut self,
        channel: StatusChannel,
        initiator: u32,
        alive: bool,
        events: &mut Vec<GameEvent>,
    ) {
        if !alive {
            return;
        }
        self.actives.push(ActiveStatus {
            channel,
            initiator: Some(initiator),
        });
        events.push(GameEvent::StatusApplied { channel });
    }

    /// Strip every status a given item initiated (unequip path)
    pub fn remove_statuses_of_initiator(&mut self, initiator: u32, events: &mut Vec<GameEvent>) {
        let mut removed = Vec::new();
        self.actives.retain(|s| {
            if s.initiator == Some(initiator) {
                removed.push(s.channel);
                false
            } else {
                true
            }
        });
        for channel in removed {
            events.push(GameEvent::StatusRemoved { channel });
        }
    }

    /// Remove all curable buildup statuses. A dead frozen actor stays
    /// frozen.
    pub fn cure_all(&mut self, alive: bool, events: &mut Vec<GameEvent>) {
        for channel in StatusChannel::ALL {
            if !channel.holds_active_status() {
                continue;
            }
            if channel == StatusChannel::Frozen && !alive {
                continue;
            }
            let cell = &mut self.channels[channel.index()];
            if cell.active {
                cell.active = false;
                self.actives
                    .retain(|s| !(s.channel == channel && s.initiator.is_none()));
                events.push(GameEvent::StatusRemoved { channel });
            }
        }
    }

    /// Shift a channel's activation threshold (outfit equip/unequip delta)
    pub fn add_threshold_delta(&mut self, channel: StatusChannel, delta: f64) {
        self.channels[channel.index()].threshold += delta;
    }

    /// Set a buildup amount directly without activation checks; decay
    /// resumes if anything remains (snapshot restore path)
    pub fn restore_buildup(&mut self, channel: StatusChannel, amount: f64) {
        let cell = &mut self.channels[channel.index()];
        cell.amount = amount.max(0.0);
        cell.decaying = cell.amount > 0.0;
        cell.decay_elapsed = 0.0;
    }

    pub fn add_bleed_reduction_delta(&mut self, delta: f64) {
        self.bleed_reduction += delta;
    }
}

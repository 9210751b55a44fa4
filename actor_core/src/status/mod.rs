//! Status effects: buildup accumulation, threshold activation, decay

mod buildup;

pub use buildup::{StatusEffects, StatusTrigger};

use crate::types::DamageType;
use serde::{Deserialize, Serialize};

/// The seven independent buildup channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusChannel {
    Burning,
    Poisoned,
    Frozen,
    Shocked,
    Decay,
    Insanity,
    Bleeding,
}

impl StatusChannel {
    pub const COUNT: usize = 7;

    pub const ALL: [StatusChannel; Self::COUNT] = [
        StatusChannel::Burning,
        StatusChannel::Poisoned,
        StatusChannel::Frozen,
        StatusChannel::Shocked,
        StatusChannel::Decay,
        StatusChannel::Insanity,
        StatusChannel::Bleeding,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The damage type that feeds this channel. Bleed buildup arrives as a
    /// flat per-hit delta, not as converted damage.
    pub fn from_damage_type(damage_type: DamageType) -> Option<StatusChannel> {
        match damage_type {
            DamageType::Fire => Some(StatusChannel::Burning),
            DamageType::Poison => Some(StatusChannel::Poisoned),
            DamageType::Frost => Some(StatusChannel::Frozen),
            DamageType::Shock => Some(StatusChannel::Shocked),
            DamageType::Acid => Some(StatusChannel::Decay),
            DamageType::Psionic => Some(StatusChannel::Insanity),
            _ => None,
        }
    }

    /// The damage type checked against resistances/immunities when this
    /// channel tries to activate
    pub fn gating_damage_type(self) -> DamageType {
        match self {
            StatusChannel::Burning => DamageType::Fire,
            StatusChannel::Poisoned => DamageType::Poison,
            StatusChannel::Frozen => DamageType::Frost,
            StatusChannel::Shocked => DamageType::Shock,
            StatusChannel::Decay => DamageType::Acid,
            StatusChannel::Insanity => DamageType::Psionic,
            StatusChannel::Bleeding => DamageType::Bleed,
        }
    }

    /// Bleed and shock fire a one-shot side effect and reset instead of
    /// holding an active status
    pub fn holds_active_status(self) -> bool {
        !matches!(self, StatusChannel::Bleeding | StatusChannel::Shocked)
    }
}

/// One applied status instance. Buildup-applied statuses have no initiator;
/// item-granted ones remember the item so unequip can strip them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatus {
    pub channel: StatusChannel,
    pub initiator: Option<u32>,
}

//! GameEvent - synchronous notifications emitted at state transitions
//!
//! The core never renders, plays audio, or touches a HUD. Everything the
//! presentation layer needs to react to is pushed inline into the owning
//! actor's event buffer at the exact point of the state transition, then
//! drained by the embedder once per frame.

use crate::status::StatusChannel;
use crate::types::{DamageType, Hand, PoolKind};
use serde::{Deserialize, Serialize};

/// Audio cues the embedder may map to clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCue {
    Impact,
    PoiseBreak,
    BloodLoss,
    Shocked,
    WeaponEquip,
    WeaponUnequip,
    SpellEquip,
    SpellUnequip,
    OutfitEquip,
    OutfitUnequip,
    ReloadStart,
    ReloadJam,
    SweetSpot,
    NormalSpot,
}

/// Animator flags the embedder may forward to an animation rig
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimFlag {
    KnockedDown,
    StandingUp,
    Reloading,
    Jammed,
}

/// Visual effect cues (spawn positions are the embedder's concern)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectCue {
    Bleeding,
    ChainLightningArc,
}

/// One state transition or collaborator cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Collaborator cues ===
    PlaySound { cue: SoundCue, volume: f64 },
    SetAnimFlag { flag: AnimFlag, value: bool },
    SpawnEffect { cue: EffectCue },
    FloatingText { amount: f64, damage_type: DamageType },
    HudBar { pool: PoolKind, value: f64, max: f64 },
    ShakeCamera { magnitude: f64, duration: f64 },

    // === Pool transitions (edge-triggered, once per crossing) ===
    Damaged { damage_type: DamageType },
    SeverelyDamaged,
    HealedSevereDamage,
    RestoredToMax { pool: PoolKind },
    Depleted { pool: PoolKind },
    Died,
    Resurrected,
    KnockedDown,
    StoodUp,

    // === Status effects ===
    StatusApplied { channel: StatusChannel },
    StatusRemoved { channel: StatusChannel },
    BloodLoss { damage: f64 },
    /// Chain lightning fired; a world-level helper propagates the hit
    ChainLightning { damage: f64 },

    // === Movement / visibility (knockdown freezes both) ===
    MovementFrozen,
    MovementRestored,
    EquippedItemsHidden,
    EquippedItemsShown,

    // === Equipment / inventory ===
    ItemAdded { item_id: u32 },
    WeaponEquipped { hand: Hand, item_id: u32 },
    WeaponUnequipped { hand: Hand, item_id: u32 },
    SpellEquipped { hand: Hand, spell_id: u32 },
    SpellUnequipped { hand: Hand, spell_id: u32 },
    OutfitEquipped { item_id: u32 },
    OutfitUnequipped { item_id: u32 },

    // === Reload ===
    ReloadStarted { hand: Hand },
    ReloadJammed { hand: Hand },
    ReloadCompleted { hand: Hand, rounds_loaded: u32, bonus_rounds: u32 },
    ReloadCancelled { hand: Hand },

    // === Progression ===
    LeveledUp { new_level: u32 },
    CurrencyChanged { current: u64 },
}

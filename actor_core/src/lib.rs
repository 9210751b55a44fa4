//! actor_core - Gameplay simulation core for actor state
//!
//! This library provides:
//! - AttributeScores: primary attributes, skills, and derived stats
//! - Pools: health/magic/focus/poise with regen and drain drivers
//! - StatusEffects: buildup accumulation, thresholds, and decay
//! - Equipment/Inventory: hand slots, outfits, ammo, quick slots
//! - WeaponReloader: the timed active-reload skill check
//!
//! Rendering, audio, and UI are external: every side effect is emitted as a
//! `GameEvent` and drained by the embedding layer.

pub mod actor;
pub mod attribute;
pub mod augment;
pub mod combat;
pub mod config;
pub mod defense;
pub mod equipment;
pub mod error;
pub mod events;
pub mod inventory;
pub mod item;
pub mod pool;
pub mod prelude;
pub mod reload;
pub mod scores;
pub mod snapshot;
pub mod status;
pub mod types;
pub mod wallet;
pub mod world;

// Re-export core types for convenience
pub use actor::Actor;
pub use attribute::GameplayAttribute;
pub use augment::{Augmentation, Augmentations};
pub use combat::{compute_weapon_stats, roll_attack, roll_attack_with_rng, AttackRoll, WeaponStats};
pub use config::GameConstants;
pub use defense::{DamageEffects, DamageThresholds};
pub use equipment::{EquippedSpell, EquippedWeapon, Equipment, HandOccupant, QuickSlot};
pub use error::{ActorError, Result};
pub use events::{AnimFlag, EffectCue, GameEvent, SoundCue};
pub use inventory::{AmmoCounter, Inventory, ItemStack};
pub use item::{Item, ItemKind, OutfitData, RangedData, Spell, WeaponData, WeaponKind};
pub use pool::{Focus, Health, Magic, Poise, Pool};
pub use reload::{ReloadState, WeaponReloader};
pub use scores::{Attribute, AttributeScores, DerivedStats, Skill};
pub use snapshot::ActorSnapshot;
pub use status::{StatusChannel, StatusEffects};
pub use types::{AmmoType, DamageType, Hand, PoolKind, School};
pub use wallet::Wallet;
pub use world::propagate_chain_lightning;

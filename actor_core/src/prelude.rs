//! Convenience re-exports for embedders

pub use crate::actor::Actor;
pub use crate::attribute::GameplayAttribute;
pub use crate::config::GameConstants;
pub use crate::defense::{DamageEffects, DamageThresholds};
pub use crate::equipment::{Equipment, HandOccupant, QuickSlot};
pub use crate::error::{ActorError, Result};
pub use crate::events::GameEvent;
pub use crate::inventory::{AmmoCounter, Inventory};
pub use crate::item::{Item, ItemKind, Spell, WeaponData, WeaponKind};
pub use crate::reload::{ReloadState, WeaponReloader};
pub use crate::scores::{Attribute, AttributeScores, Skill};
pub use crate::snapshot::ActorSnapshot;
pub use crate::status::{StatusChannel, StatusEffects};
pub use crate::types::{AmmoType, DamageType, Hand, PoolKind, School};
pub use crate::world::propagate_chain_lightning;

//! Hard failures for broken caller contracts
//!
//! Numeric out-of-range requests are clamped silently by the components;
//! these errors cover programmer mistakes only (bad index, wrong item kind
//! for a slot).

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActorError {
    #[error("inventory index {0} out of range")]
    BadItemIndex(usize),

    #[error("no item with id {0} in the inventory")]
    UnknownItem(u32),

    #[error("no known spell with id {0}")]
    UnknownSpell(u32),

    #[error("item '{0}' is not equippable in a hand")]
    NotAWeapon(String),

    #[error("item '{0}' is not an outfit")]
    NotAnOutfit(String),

    #[error("quick slot index {0} out of range")]
    BadQuickSlot(usize),

    #[error("no occupant equipped in the {0:?} hand")]
    HandEmpty(crate::types::Hand),
}

pub type Result<T> = std::result::Result<T, ActorError>;

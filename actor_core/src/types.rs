//! Core types shared across actor components

use serde::{Deserialize, Serialize};

/// Damage type carried by every damage instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Blunt,
    Piercing,
    Slashing,
    Energy,
    Fire,
    Frost,
    Shock,
    Acid,
    Poison,
    Psionic,
    Bleed,
}

impl DamageType {
    /// All damage types, in threshold-table order
    pub const ALL: [DamageType; 11] = [
        DamageType::Blunt,
        DamageType::Piercing,
        DamageType::Slashing,
        DamageType::Energy,
        DamageType::Fire,
        DamageType::Frost,
        DamageType::Shock,
        DamageType::Acid,
        DamageType::Poison,
        DamageType::Psionic,
        DamageType::Bleed,
    ];

    /// Index into per-type tables
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ammunition calibers, one dedicated reserve slot each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmmoType {
    NineMil,
    FiveFiveSix,
    TwelveGauge,
    FiveMil,
    ThreeOhEight,
    Rocket,
    EnergyCell,
    FortyFourMagnum,
    FiftyCal,
    PlasmaCell,
    Flare,
    Arrow,
    CryoCell,
    TwentyTwoCal,
    FuelCanister,
    Sawblade,
}

impl AmmoType {
    pub const COUNT: usize = 16;

    pub const ALL: [AmmoType; Self::COUNT] = [
        AmmoType::NineMil,
        AmmoType::FiveFiveSix,
        AmmoType::TwelveGauge,
        AmmoType::FiveMil,
        AmmoType::ThreeOhEight,
        AmmoType::Rocket,
        AmmoType::EnergyCell,
        AmmoType::FortyFourMagnum,
        AmmoType::FiftyCal,
        AmmoType::PlasmaCell,
        AmmoType::Flare,
        AmmoType::Arrow,
        AmmoType::CryoCell,
        AmmoType::TwentyTwoCal,
        AmmoType::FuelCanister,
        AmmoType::Sawblade,
    ];

    /// Index into the reserve slot table
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Which hand an occupant is equipped in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hand {
    Main,
    Off,
}

/// Spell schools, each governed by its matching skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum School {
    Enkiism,
    Erebancy,
    Gaianism,
    Hermeticism,
    Iktomancy,
    Reshephism,
}

impl School {
    pub const ALL: [School; 6] = [
        School::Enkiism,
        School::Erebancy,
        School::Gaianism,
        School::Hermeticism,
        School::Iktomancy,
        School::Reshephism,
    ];
}

/// Capped, regenerating resource pools owned by an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Health,
    Magic,
    Focus,
    Poise,
}

/// Linear interpolation with `t` clamped to [0, 1]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t.clamp(0.0, 1.0)
}

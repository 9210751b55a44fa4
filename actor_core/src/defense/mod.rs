//! Incoming-damage mitigation: category scaling and flat thresholds

mod effects;
mod thresholds;

pub use effects::DamageEffects;
pub use thresholds::DamageThresholds;

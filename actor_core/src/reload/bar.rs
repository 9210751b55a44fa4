//! Active reload bar - window geometry and slider sampling

use super::ReloadState;
use serde::{Deserialize, Serialize};

/// The two timing windows on the reload slider, as fractions of the bar.
/// The normal spot sits flush against the end of the sweet spot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReloadBar {
    sweet_spot_start: f64,
    sweet_spot_end: f64,
    normal_spot_end: f64,
}

impl ReloadBar {
    /// Build the bar, widening the sweet spot by the player's sleight-of-hand
    /// bonus
    pub fn new(
        sweet_spot_start: f64,
        sweet_spot_end: f64,
        normal_spot_end: f64,
        sweet_spot_bonus: f64,
    ) -> Self {
        ReloadBar {
            sweet_spot_start,
            sweet_spot_end: (sweet_spot_end + sweet_spot_bonus).min(normal_spot_end),
            normal_spot_end,
        }
    }

    pub fn sweet_spot(&self) -> (f64, f64) {
        (self.sweet_spot_start, self.sweet_spot_end)
    }

    pub fn normal_spot(&self) -> (f64, f64) {
        (self.sweet_spot_end, self.normal_spot_end)
    }

    /// Classify a slider position in `[0, 1]`. Anything outside both
    /// windows jams the weapon.
    pub fn sample(&self, position: f64) -> ReloadState {
        if position >= self.sweet_spot_start && position < self.sweet_spot_end {
            ReloadState::Sweetspot
        } else if position >= self.sweet_spot_end && position <= self.normal_spot_end {
            ReloadState::Normalspot
        } else {
            ReloadState::Jammed
        }
    }
}

//! Cross-actor propagation helpers
//!
//! The core has no scene graph. Anything that needs to find another actor
//! gets the candidates injected: a slice of actors plus their positions,
//! supplied by the embedder.

use crate::actor::Actor;
use crate::types::DamageType;

/// Resolve a chain-lightning emission from `source`: the bolt arcs to the
/// nearest other living actor and applies its shock damage there. Returns
/// the index hit, or `None` when no living target exists.
pub fn propagate_chain_lightning(
    actors: &mut [Actor],
    positions: &[(f64, f64)],
    source: usize,
    damage: f64,
    status_damage_percentage: f64,
) -> Option<usize> {
    let origin = *positions.get(source)?;

    let mut nearest: Option<(usize, f64)> = None;
    for (index, actor) in actors.iter().enumerate() {
        if index == source || !actor.is_alive() {
            continue;
        }
        let (x, y) = *positions.get(index)?;
        let distance_sq = (x - origin.0).powi(2) + (y - origin.1).powi(2);
        match nearest {
            Some((_, best)) if distance_sq >= best => {}
            _ => nearest = Some((index, distance_sq)),
        }
    }

    let (target, _) = nearest?;
    actors[target].apply_damage(
        &[(DamageType::Shock, damage)],
        status_damage_percentage,
        0.0,
    );
    Some(target)
}

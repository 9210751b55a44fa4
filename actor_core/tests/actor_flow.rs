//! Cross-component scenarios driven through the Actor aggregate

use actor_core::prelude::*;
use actor_core::item::{OutfitData, RangedData, WeaponData};
use actor_core::ItemKind as Kind;

fn rifle() -> Item {
    Item {
        id: 1,
        name: "Carbine".to_string(),
        weight: 4.0,
        value: 300,
        held_max: 1,
        kind: Kind::Weapon(WeaponData {
            skill: Skill::Rifles,
            kind: actor_core::WeaponKind::Ranged(RangedData {
                ammo_type: AmmoType::FiveFiveSix,
                clip_size: 30,
                ammo_in_clip: 0,
                reload_time: 2.0,
                base_spread: 3.0,
                is_throwing: false,
            }),
            base_damages: vec![(DamageType::Piercing, 18.0)],
            base_charge_time: 0.0,
            bleed_buildup: 0.0,
        }),
        on_equip_statuses: Vec::new(),
    }
}

fn ammo_556() -> Item {
    Item {
        id: 2,
        name: "5.56 Rounds".to_string(),
        weight: 0.01,
        value: 1,
        held_max: 999,
        kind: Kind::Ammo(AmmoType::FiveFiveSix),
        on_equip_statuses: Vec::new(),
    }
}

fn jacket() -> Item {
    Item {
        id: 3,
        name: "Padded Jacket".to_string(),
        weight: 6.0,
        value: 80,
        held_max: 1,
        kind: Kind::Outfit(OutfitData {
            poise: 20.0,
            damage_thresholds: vec![(DamageType::Blunt, 5.0)],
            status_thresholds: vec![(StatusChannel::Burning, 50.0)],
            bleed_reduction: 25.0,
        }),
        on_equip_statuses: Vec::new(),
    }
}

fn new_actor() -> Actor {
    Actor::new("hero", [2, 2, 2, 2, 2, 2], 0, GameConstants::default())
}

#[test]
fn reload_scenario_sweet_spot_then_full_slide() {
    let mut actor = new_actor();
    actor.add_item(ammo_556(), 90, false).unwrap();
    actor.add_item(rifle(), 1, true).unwrap();

    // untrained hands: the slider runs the base 2s course
    let mut skills = *actor.scores.skills();
    skills[Skill::SleightOfHand as usize] = 0;
    actor.set_skills(skills);
    actor.drain_events();

    // active reload, input at slider 0.45: sweet spot
    actor.trigger_reload(Hand::Main).unwrap();
    actor.tick(0.9);
    actor.reload_input(Hand::Main);
    actor.tick(0.6);

    let reloader = |actor: &Actor| {
        actor
            .equipment
            .hand(Hand::Main)
            .and_then(|occupant| occupant.as_weapon())
            .and_then(|weapon| weapon.reloader.clone())
            .expect("rifle has a reloader")
    };

    let state = reloader(&actor);
    assert_eq!(state.ammo_in_clip(), 30);
    assert_eq!(state.bonus_damage_rounds(), 30);
    let events = actor.drain_events();
    assert!(events.iter().any(|e| matches!(
        e,
        GameEvent::ReloadCompleted {
            rounds_loaded: 30,
            bonus_rounds: 30,
            ..
        }
    )));

    // spend the clip, then let the slider run untouched: no bonus
    for _ in 0..30 {
        actor
            .equipment
            .hand_mut(Hand::Main)
            .and_then(|occupant| occupant.as_weapon_mut())
            .and_then(|weapon| weapon.reloader.as_mut())
            .unwrap()
            .decrease_ammo_in_clip(1);
    }
    actor.trigger_reload(Hand::Main).unwrap();
    actor.tick(2.1);

    let state = reloader(&actor);
    assert_eq!(state.ammo_in_clip(), 30);
    assert_eq!(state.bonus_damage_rounds(), 0);
    // 90 - 30 - 30 left
    assert_eq!(actor.ammo.count(&actor.inventory, AmmoType::FiveFiveSix), 30);
}

#[test]
fn unequip_cancels_reload_in_flight() {
    let mut actor = new_actor();
    actor.add_item(ammo_556(), 90, false).unwrap();
    actor.add_item(rifle(), 1, true).unwrap();

    actor.trigger_reload(Hand::Main).unwrap();
    actor.tick(1.0);
    actor.unequip_hand(Hand::Main).unwrap();

    let events = actor.drain_events();
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ReloadCancelled { hand: Hand::Main })));

    // nothing was loaded, reserves untouched
    assert_eq!(actor.ammo.count(&actor.inventory, AmmoType::FiveFiveSix), 90);
    assert_eq!(
        actor.inventory.item(1).unwrap().as_weapon().unwrap().ranged().unwrap().ammo_in_clip,
        0
    );
}

#[test]
fn equip_round_trip_restores_baseline() {
    let mut actor = new_actor();
    actor.add_item(rifle(), 1, false).unwrap();
    let load_before = actor.equipment.current_equip_load();

    actor.equip_weapon(Hand::Main, 1).unwrap();
    assert!((actor.equipment.current_equip_load() - (load_before + 4.0)).abs() < f64::EPSILON);

    actor.unequip_hand(Hand::Main).unwrap();
    assert!((actor.equipment.current_equip_load() - load_before).abs() < f64::EPSILON);
    assert!(actor.equipment.hand(Hand::Main).is_none());
}

#[test]
fn same_weapon_swaps_hands_instead_of_duplicating() {
    let mut actor = new_actor();
    actor.add_item(rifle(), 1, false).unwrap();

    actor.equip_weapon(Hand::Main, 1).unwrap();
    actor.equip_weapon(Hand::Off, 1).unwrap();

    assert!(actor.equipment.hand(Hand::Main).is_none());
    assert_eq!(actor.equipment.hand_holding_weapon(1), Some(Hand::Off));
    // load counted once
    assert!((actor.equipment.current_equip_load() - 4.0).abs() < f64::EPSILON);
}

#[test]
fn outfit_swap_nets_the_delta() {
    let mut actor = new_actor();
    let poise_before = actor.poise.max_value();
    actor.add_item(jacket(), 1, false).unwrap();

    actor.equip_outfit(3).unwrap();
    assert!((actor.poise.max_value() - (poise_before + 20.0)).abs() < f64::EPSILON);
    assert!(
        (actor.statuses.threshold(StatusChannel::Burning) - 150.0).abs() < f64::EPSILON
    );
    assert!((actor.statuses.bleed_reduction() - 25.0).abs() < f64::EPSILON);

    // toggle off: everything returns to baseline
    actor.equip_outfit(3).unwrap();
    assert!((actor.poise.max_value() - poise_before).abs() < f64::EPSILON);
    assert!(
        (actor.statuses.threshold(StatusChannel::Burning) - 100.0).abs() < f64::EPSILON
    );
    assert!((actor.statuses.bleed_reduction() - 0.0).abs() < f64::EPSILON);
    assert!(actor.equipment.outfit().is_none());
}

#[test]
fn set_attributes_raises_current_pools_when_asked() {
    let mut actor = new_actor();
    let health_before = actor.health.current();

    actor.set_attributes([2, 2, 10, 2, 2, 2], 0, true);
    // END 10: max 200, current grew by the delta
    assert!((actor.health.max_value() - 200.0).abs() < f64::EPSILON);
    assert!(actor.health.current() > health_before);
    assert!((actor.health.current() - actor.health.max_value()).abs() < 1e-9);
}

#[test]
fn level_up_grows_pools_and_clamps_wallet() {
    let mut actor = new_actor();
    let mut events = Vec::new();
    actor.wallet.add(100, &mut events);

    let max_before = actor.health.max_value();
    let skills = *actor.scores.skills();
    actor.level_up(3, 500, skills);

    assert_eq!(actor.scores.level, 3);
    assert_eq!(actor.wallet.currency(), 0);
    // 2 levels * (2 per level per END point * END 2)
    assert!((actor.health.max_value() - (max_before + 8.0)).abs() < f64::EPSILON);
}

#[test]
fn knockdown_freezes_then_stands_with_poise_refilled() {
    let mut actor = new_actor();
    actor.apply_poise_damage(actor.poise.max_value() + 5.0);
    assert!(actor.is_incapacitated());

    let events = actor.drain_events();
    assert!(events.iter().any(|e| *e == GameEvent::KnockedDown));
    assert!(events.iter().any(|e| *e == GameEvent::MovementFrozen));

    actor.tick(1.1);
    assert!(!actor.is_incapacitated());
    assert!((actor.poise.current() - actor.poise.max_value()).abs() < f64::EPSILON);
    let events = actor.drain_events();
    assert!(events.iter().any(|e| *e == GameEvent::StoodUp));
}

#[test]
fn chain_lightning_arcs_to_nearest_neighbor() {
    let mut actors = vec![
        Actor::new("victim", [0; 6], 0, GameConstants::default()),
        Actor::new("bystander-far", [0; 6], 0, GameConstants::default()),
        Actor::new("bystander-near", [0; 6], 0, GameConstants::default()),
    ];
    let positions = vec![(0.0, 0.0), (8.0, 0.0), (1.5, 1.5)];

    actors[0].apply_damage(&[(DamageType::Shock, 1000.0)], 0.1, 0.0);
    let emitted: Vec<_> = actors[0].drain_events();
    let damage = emitted
        .iter()
        .find_map(|e| match e {
            GameEvent::ChainLightning { damage } => Some(*damage),
            _ => None,
        })
        .expect("shock threshold fires chain lightning");

    let hit = propagate_chain_lightning(&mut actors, &positions, 0, damage, 0.1);
    assert_eq!(hit, Some(2));
    assert!(actors[2].health.current() < 100.0);
}

#[test]
fn status_decay_runs_independently_per_channel() {
    let mut actor = new_actor();
    actor.apply_damage(
        &[(DamageType::Fire, 500.0), (DamageType::Acid, 900.0)],
        0.1,
        0.0,
    );
    let fire_start = actor.statuses.buildup(StatusChannel::Burning);
    let decay_start = actor.statuses.buildup(StatusChannel::Decay);
    assert!(fire_start > 0.0 && decay_start > 0.0);

    actor.tick(1.0);
    let fire_after = actor.statuses.buildup(StatusChannel::Burning);
    let decay_after = actor.statuses.buildup(StatusChannel::Decay);
    assert!((fire_start - fire_after - 20.0).abs() < 1e-6);
    assert!((decay_start - decay_after - 20.0).abs() < 1e-6);
}

#[test]
fn barter_prices_follow_skill() {
    let mut actor = new_actor();
    let mut skills = *actor.scores.skills();
    skills[Skill::Barter as usize] = 50;
    actor.set_skills(skills);

    // sell 1.0x, buy 1.25x at barter 50
    assert_eq!(actor.sell_price(100), 100);
    assert_eq!(actor.buy_price(100), 125);
}

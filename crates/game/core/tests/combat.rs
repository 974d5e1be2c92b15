mod common;

use common::{AsciiMap, orc_at, player_at, run, state_with, texts};
use delve_core::{
    Action, ActionOutcome, AttackStyle, CardinalDirection, EntityId, Fighter, ImpossibleReason,
    MeleeResolution, MessageStyle, Position, RenderOrder,
};

const EAST: CardinalDirection = CardinalDirection::East;

#[test]
fn light_hit_subtracts_power_minus_defense() {
    let map = AsciiMap::room();
    let mut player = player_at(2, 2);
    player.fighter.set_stam(2);
    let mut orc = orc_at(1, 3, 2);
    orc.fighter = Fighter::new(10, 6, 2, 3, 2);
    let mut state = state_with(player, vec![orc]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .expect("attack should resolve");

    assert_eq!(
        outcome.outcome,
        ActionOutcome::Attacked {
            target: EntityId(1),
            resolution: MeleeResolution::Hit {
                damage: 3,
                stamina_cost: 2
            }
        }
    );
    assert_eq!(texts(&outcome), vec!["Player attacks Orc for 3 hit points."]);
    assert_eq!(outcome.messages[0].style, MessageStyle::PlayerAttack);
    assert_eq!(state.entities.actor(EntityId(1)).unwrap().fighter.hp(), 7);
    assert_eq!(state.player().fighter.stam(), 0);
}

#[test]
fn exhausted_swing_never_touches_target() {
    let map = AsciiMap::room();
    let mut player = player_at(2, 2);
    player.fighter.set_stam(1);
    let mut state = state_with(player, vec![orc_at(1, 3, 2)]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .unwrap();

    assert!(outcome.outcome.is_soft());
    assert_eq!(texts(&outcome), vec!["Player swings, exhausted, missing the target"]);
    assert_eq!(state.entities.actor(EntityId(1)).unwrap().fighter.hp(), 10);
    // Exhaustion restores a point instead of spending.
    assert_eq!(state.player().fighter.stam(), 2);
}

#[test]
fn evading_target_costs_stamina_but_no_hp() {
    let map = AsciiMap::room();
    let mut orc = orc_at(1, 3, 2);
    orc.fighter.stance.toggle_evasion();
    let mut state = state_with(player_at(2, 2), vec![orc]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .unwrap();

    assert_eq!(texts(&outcome), vec!["Orc dodges the attack!"]);
    assert_eq!(state.entities.actor(EntityId(1)).unwrap().fighter.hp(), 10);
    assert_eq!(state.player().fighter.stam(), 8);
}

#[test]
fn heavy_hit_scales_power_and_cost() {
    let map = AsciiMap::room();
    let mut orc = orc_at(1, 3, 2);
    orc.fighter = Fighter::new(20, 6, 2, 3, 2);
    let mut state = state_with(player_at(2, 2), vec![orc]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Heavy))
        .unwrap();

    // round(5 × 1.6) − 2 = 6; cost round(2 × 1.5) = 3
    assert_eq!(texts(&outcome), vec!["Player attacks Orc for 6 hit points."]);
    assert_eq!(state.entities.actor(EntityId(1)).unwrap().fighter.hp(), 14);
    assert_eq!(state.player().fighter.stam(), 7);
}

#[test]
fn armored_target_takes_no_damage() {
    let map = AsciiMap::room();
    let mut orc = orc_at(1, 3, 2);
    orc.fighter = Fighter::new(10, 6, 9, 3, 2);
    let mut state = state_with(player_at(2, 2), vec![orc]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .unwrap();

    assert_eq!(texts(&outcome), vec!["Player attacks Orc but does no damage."]);
    assert_eq!(state.entities.actor(EntityId(1)).unwrap().fighter.hp(), 10);
    assert_eq!(state.player().fighter.stam(), 8);
}

#[test]
fn killing_blow_leaves_corpse_and_awards_xp() {
    let map = AsciiMap::room();
    let mut orc = orc_at(1, 3, 2);
    orc.fighter = orc.fighter.clone().with_hp(4);
    let mut state = state_with(player_at(2, 2), vec![orc]);

    let outcome = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .unwrap();

    assert_eq!(
        texts(&outcome),
        vec![
            "Player attacks Orc for 5 hit points.",
            "Orc is dead!",
            "You gain 35 experience points.",
        ]
    );
    assert_eq!(outcome.deaths.len(), 1);
    assert_eq!(state.player().level.current_xp, 35);

    let corpse = state.entities.actor(EntityId(1)).unwrap();
    assert_eq!(corpse.name, "remains of Orc");
    assert_eq!(corpse.render_order, RenderOrder::Corpse);
    assert!(!corpse.blocks_movement);

    // Corpses are neither targets nor obstacles.
    let err = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Light))
        .unwrap_err();
    assert_eq!(err.reason, ImpossibleReason::NothingToAttack);
    run(&mut state, &map, Action::movement(EntityId::PLAYER, EAST)).unwrap();
    assert_eq!(state.player().position, Position::new(3, 2));
}

#[test]
fn player_death_is_announced_without_xp() {
    let map = AsciiMap::room();
    let mut player = player_at(2, 2);
    player.fighter = player.fighter.clone().with_hp(1);
    let mut state = state_with(player, vec![orc_at(1, 3, 2)]);

    let outcome = run(&mut state, &map, Action::melee(EntityId(1), CardinalDirection::West, AttackStyle::Light))
        .unwrap();

    assert_eq!(
        texts(&outcome),
        vec!["Orc attacks Player for 1 hit points.", "You died!"]
    );
    assert_eq!(outcome.messages[0].style, MessageStyle::EnemyAttack);
    assert_eq!(outcome.messages[1].style, MessageStyle::PlayerDeath);
    assert!(!state.player().is_alive());
    assert_eq!(state.player().level.current_xp, 0);

    // The dead cannot act.
    let err = run(&mut state, &map, Action::wait(EntityId::PLAYER)).unwrap_err();
    assert_eq!(err.reason, ImpossibleReason::ActorDead(EntityId::PLAYER));
}

#[test]
fn swinging_at_empty_tile_is_impossible_and_free() {
    let map = AsciiMap::room();
    let mut state = state_with(player_at(2, 2), Vec::new());
    let before = state.clone();

    let err = run(&mut state, &map, Action::melee(EntityId::PLAYER, EAST, AttackStyle::Heavy))
        .unwrap_err();

    assert_eq!(err.to_string(), "Nothing to attack.");
    assert_eq!(state, before);
}

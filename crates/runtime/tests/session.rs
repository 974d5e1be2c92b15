use delve_content::{PresetFloor, PresetFloors, StaticMap};
use delve_core::{
    Action, ActionOutcome, ActorState, AiPolicy, AttackStyle, CardinalDirection, EntityId,
    Fighter, GameConfig, GameState, ImpossibleReason, InventoryState, MapOracle, MessageStyle,
    Position,
};
use delve_runtime::{RuntimeError, Session, WaitActionProvider};

fn room() -> StaticMap {
    StaticMap::from_rows(&["#######", "#.....#", "#.....#", "#######"])
}

fn player_at(x: i32, y: i32) -> ActorState {
    ActorState::new(EntityId::PLAYER, "Player", Position::new(x, y), Fighter::new(30, 10, 2, 5, 2))
        .with_ai(Some(AiPolicy::Player))
        .with_inventory(InventoryState::with_capacity(26))
}

fn orc_at(x: i32, y: i32) -> ActorState {
    ActorState::new(EntityId(0), "Orc", Position::new(x, y), Fighter::new(10, 6, 0, 3, 2))
        .with_xp_given(35)
}

fn empty_floor() -> PresetFloor {
    PresetFloor {
        map: room(),
        downstairs: None,
        upstairs: Some(Position::new(1, 1)),
        entry: Position::new(1, 1),
        npcs: Vec::new(),
        items: Vec::new(),
    }
}

fn session_with(orcs: Vec<ActorState>) -> (Session<PresetFloors>, Vec<EntityId>) {
    let mut state = GameState::with_player(player_at(1, 1));
    let ids = orcs.into_iter().map(|orc| state.spawn_npc(orc)).collect();
    let floors = PresetFloors::new(empty_floor(), Vec::new());
    (Session::new(state, room(), GameConfig::default(), floors), ids)
}

#[test]
fn impossible_player_action_runs_no_npc_turns() {
    let (mut session, ids) = session_with(vec![orc_at(3, 1)]);
    let before = session.state().clone();

    let err = session
        .submit(Action::movement(EntityId::PLAYER, CardinalDirection::West))
        .unwrap_err();

    assert_eq!(
        err.impossible().map(|impossible| impossible.reason.clone()),
        Some(ImpossibleReason::Blocked)
    );
    assert_eq!(session.state(), &before);
    assert_eq!(
        session.state().entities.actor(ids[0]).unwrap().position,
        Position::new(3, 1)
    );
    let last = session.log().messages().last().unwrap();
    assert_eq!(last.text, "That way is blocked.");
    assert_eq!(last.style, MessageStyle::Impossible);
}

#[test]
fn adjacent_hostile_strikes_back_after_player_waits() {
    let (mut session, ids) = session_with(vec![orc_at(2, 1)]);

    let report = session.submit(Action::wait(EntityId::PLAYER)).unwrap();

    assert_eq!(report.npc_turns.len(), 1);
    assert_eq!(report.npc_turns[0].entity, ids[0]);
    assert!(matches!(
        report.npc_turns[0].outcome.outcome,
        ActionOutcome::Attacked { target: EntityId::PLAYER, .. }
    ));
    // Orc power 3 against player defense 2.
    assert_eq!(session.state().player().fighter.hp(), 29);
    assert_eq!(session.state().turn.nonce, 2);
}

#[test]
fn dead_npc_takes_no_turn() {
    let (mut session, ids) = session_with(vec![orc_at(2, 1)]);
    let east = CardinalDirection::East;

    let first = session
        .submit(Action::melee(EntityId::PLAYER, east, AttackStyle::Light))
        .unwrap();
    assert_eq!(first.npc_turns.len(), 1);

    let second = session.submit(Action::bump(EntityId::PLAYER, east)).unwrap();
    assert!(second.npc_turns.is_empty());
    assert_eq!(second.player.deaths.len(), 1);
    assert!(!session.state().entities.actor(ids[0]).unwrap().is_alive());
    assert_eq!(session.state().player().level.current_xp, 35);

    let texts: Vec<_> = second.messages().map(|entry| entry.text.as_str()).collect();
    assert!(texts.contains(&"Orc is dead!"));
    assert!(texts.contains(&"You gain 35 experience points."));
}

#[test]
fn stairs_install_the_next_floor_before_npcs_act() {
    let mut state = GameState::with_player(player_at(4, 2));
    state.floor.downstairs = Some(Position::new(4, 2));
    let mut lower = empty_floor();
    lower.map = StaticMap::from_rows(&["#########", "#.......#", "#########"]);
    lower.upstairs = Some(Position::new(5, 1));
    lower.npcs = vec![orc_at(6, 1)];
    let floors = PresetFloors::new(empty_floor(), vec![lower]);
    let mut session = Session::new(state, room(), GameConfig::default(), floors);

    let report = session.submit(Action::take_stairs(EntityId::PLAYER)).unwrap();

    assert_eq!(report.entered_depth, Some(2));
    assert_eq!(session.state().floor.depth, 2);
    assert_eq!(session.state().player().position, Position::new(5, 1));
    assert_eq!(session.map().dimensions().width, 9);
    assert_eq!(report.npc_turns.len(), 1);
    assert_ne!(report.npc_turns[0].entity, EntityId::PLAYER);
}

#[test]
fn wait_provider_keeps_npcs_idle() {
    let (session, ids) = session_with(vec![orc_at(2, 1)]);
    let mut session = session.with_provider(WaitActionProvider);

    let report = session.submit(Action::wait(EntityId::PLAYER)).unwrap();

    assert_eq!(report.npc_turns[0].outcome.outcome, ActionOutcome::Waited);
    assert_eq!(session.state().player().fighter.hp(), 30);
    assert!(session.state().entities.actor(ids[0]).is_some());
}

#[test]
fn only_living_player_actions_are_accepted() {
    let (mut session, ids) = session_with(vec![orc_at(3, 1)]);
    assert!(matches!(
        session.submit(Action::wait(ids[0])),
        Err(RuntimeError::NotPlayerAction { provided }) if provided == ids[0]
    ));

    let mut state = GameState::with_player(player_at(1, 1));
    state.entities.player.apply_damage(100);
    let floors = PresetFloors::new(empty_floor(), Vec::new());
    let mut session = Session::new(state, room(), GameConfig::default(), floors);
    assert!(matches!(
        session.submit(Action::wait(EntityId::PLAYER)),
        Err(RuntimeError::PlayerDead)
    ));
}

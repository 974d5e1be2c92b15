#![allow(dead_code)]

use delve_core::{
    Action, ActorState, AiPolicy, EntitiesState, EntityId, Equipment, ExecutionOutcome, Fighter,
    FloorState, GameConfig, GameEngine, GameState, Impossible, InventoryState, MapDimensions,
    MapOracle, Position, StaticTile, TerrainKind, TurnState,
};

/// Map parsed from rows of `#` (wall) and `.` (floor).
pub struct AsciiMap {
    width: u32,
    height: u32,
    walls: Vec<bool>,
}

impl AsciiMap {
    pub fn parse(rows: &[&str]) -> Self {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |row| row.len()) as u32;
        let walls = rows
            .iter()
            .flat_map(|row| row.chars().map(|c| c == '#'))
            .collect();
        Self {
            width,
            height,
            walls,
        }
    }

    /// 7×5 room with a one-tile wall border.
    pub fn room() -> Self {
        Self::parse(&[
            "#######",
            "#.....#",
            "#.....#",
            "#.....#",
            "#######",
        ])
    }
}

impl MapOracle for AsciiMap {
    fn dimensions(&self) -> MapDimensions {
        MapDimensions::new(self.width, self.height)
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.contains(position) {
            return None;
        }
        let index = (position.y as u32 * self.width + position.x as u32) as usize;
        let terrain = if self.walls[index] {
            TerrainKind::Wall
        } else {
            TerrainKind::Floor
        };
        Some(StaticTile::new(terrain))
    }
}

pub fn player_at(x: i32, y: i32) -> ActorState {
    ActorState::new(
        EntityId::PLAYER,
        "Player",
        Position::new(x, y),
        Fighter::new(30, 10, 2, 5, 2),
    )
    .with_ai(Some(AiPolicy::Player))
    .with_inventory(InventoryState::with_capacity(26))
    .with_equipment(Equipment::empty())
}

pub fn orc_at(id: u32, x: i32, y: i32) -> ActorState {
    ActorState::new(EntityId(id), "Orc", Position::new(x, y), Fighter::new(10, 6, 0, 3, 2))
        .with_appearance('o', delve_core::Rgb(63, 127, 63))
        .with_xp_given(35)
}

pub fn state_with(player: ActorState, npcs: Vec<ActorState>) -> GameState {
    GameState::new(
        TurnState::default(),
        EntitiesState::new(player, npcs),
        FloorState::new(1),
    )
}

pub fn run(
    state: &mut GameState,
    map: &AsciiMap,
    action: Action,
) -> Result<ExecutionOutcome, Impossible> {
    let config = GameConfig::default();
    GameEngine::new(state, &config).execute(map, &action)
}

pub fn texts(outcome: &ExecutionOutcome) -> Vec<&str> {
    outcome
        .messages
        .iter()
        .map(|entry| entry.text.as_str())
        .collect()
}

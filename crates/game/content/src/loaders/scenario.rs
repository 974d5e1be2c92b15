//! Scenario loader and resolver.
//!
//! A scenario file names templates and map files by id; resolving it against
//! the catalogs produces a ready-to-play [`LoadedScenario`].

use std::path::Path;

use delve_core::{AiPolicy, EntityId, GameState, GeneratedFloor};

use crate::floors::{PresetFloor, PresetFloors};
use crate::loaders::{LoadResult, read_file};
use crate::map::StaticMap;
use crate::scenario::{FloorSpec, PlayerCommand, Scenario};
use crate::templates::{ActorCatalog, ItemCatalog};

/// Loader for scenario files from RON.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        if scenario.floors.is_empty() {
            anyhow::bail!("Scenario has no floors");
        }
        Ok(scenario)
    }

    /// Resolves a scenario against catalogs.
    ///
    /// `load_map` maps a floor's map name to terrain.
    pub fn resolve(
        scenario: Scenario,
        actors: &ActorCatalog,
        items: &ItemCatalog,
        mut load_map: impl FnMut(&str) -> LoadResult<StaticMap>,
    ) -> LoadResult<LoadedScenario> {
        let mut floors = Vec::with_capacity(scenario.floors.len());
        for (index, floor) in scenario.floors.iter().enumerate() {
            let map = load_map(&floor.map)?;
            floors.push(
                resolve_floor(floor, map, actors, items)
                    .map_err(|e| anyhow::anyhow!("Floor {}: {}", index + 1, e))?,
            );
        }
        let mut floors = floors.into_iter();
        let first = floors
            .next()
            .ok_or_else(|| anyhow::anyhow!("Scenario has no floors"))?;
        let floors = PresetFloors::new(first, floors.collect());

        let player_template = actors.get(&scenario.player.template).ok_or_else(|| {
            anyhow::anyhow!("Unknown player template '{}'", scenario.player.template)
        })?;
        let player =
            player_template.spawn(EntityId::PLAYER, scenario.player.position, AiPolicy::Player);
        let mut state = GameState::with_player(player);

        for name in &scenario.player.carried {
            let template = items
                .get(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown item template '{}'", name))?;
            let item = template.spawn(state.allocate_entity_id(), scenario.player.position);
            let inventory = state
                .entities
                .player
                .inventory
                .as_mut()
                .ok_or_else(|| anyhow::anyhow!("Player template has no inventory"))?;
            inventory
                .add(item)
                .map_err(|item| anyhow::anyhow!("No room to carry '{}'", item.name))?;
        }

        let first = floors.floor(1);
        let map = state.install_floor(GeneratedFloor {
            map: first.map.clone(),
            depth: 1,
            downstairs: first.downstairs,
            upstairs: first.upstairs,
            player_position: scenario.player.position,
            npcs: first.npcs.clone(),
            items: first.items.clone(),
        });

        Ok(LoadedScenario {
            state,
            map,
            floors,
            script: scenario.script,
        })
    }
}

fn resolve_floor(
    floor: &FloorSpec,
    map: StaticMap,
    actors: &ActorCatalog,
    items: &ItemCatalog,
) -> LoadResult<PresetFloor> {
    let entry = floor
        .arrival
        .or(floor.upstairs)
        .or(floor.downstairs)
        .ok_or_else(|| anyhow::anyhow!("No arrival tile or stairs"))?;

    // Ids are placeholders; installing the floor allocates real ones.
    let npcs = floor
        .npcs
        .iter()
        .map(|placement| {
            actors
                .get(&placement.template)
                .map(|template| template.spawn(EntityId(0), placement.position, AiPolicy::Hostile))
                .ok_or_else(|| anyhow::anyhow!("Unknown actor template '{}'", placement.template))
        })
        .collect::<LoadResult<Vec<_>>>()?;
    let floor_items = floor
        .items
        .iter()
        .map(|placement| {
            items
                .get(&placement.template)
                .map(|template| template.spawn(EntityId(0), placement.position))
                .ok_or_else(|| anyhow::anyhow!("Unknown item template '{}'", placement.template))
        })
        .collect::<LoadResult<Vec<_>>>()?;

    Ok(PresetFloor {
        map,
        downstairs: floor.downstairs,
        upstairs: floor.upstairs,
        entry,
        npcs,
        items: floor_items,
    })
}

/// A scenario resolved into live state.
#[derive(Clone, Debug)]
pub struct LoadedScenario {
    pub state: GameState,
    /// Terrain of the starting floor.
    pub map: StaticMap,
    pub floors: PresetFloors,
    pub script: Vec<PlayerCommand>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::{ActorLoader, ItemLoader};
    use delve_core::{FloorGenerator, MapOracle, Position, StairDirection};

    fn catalogs() -> (ActorCatalog, ItemCatalog) {
        let actors = ActorLoader::parse(
            r#"Catalog(entries: [
                (id: "player", name: "Player", glyph: '@', color: (255, 255, 255),
                 max_hp: 30, max_stam: 10, defense: 2, power: 5, stam_cost: 2,
                 inventory_capacity: 2, equipment: true),
                (id: "orc", name: "Orc", glyph: 'o', color: (63, 127, 63),
                 max_hp: 10, max_stam: 6, defense: 0, power: 3, stam_cost: 2, xp_given: 35),
            ])"#,
        )
        .unwrap();
        let items = ItemLoader::parse(
            r#"Catalog(entries: [
                (id: "health_potion", name: "Health Potion", glyph: '!', color: (127, 0, 255),
                 kind: Consumable(Healing(amount: 4))),
            ])"#,
        )
        .unwrap();
        (actors, items)
    }

    fn room(_: &str) -> LoadResult<StaticMap> {
        Ok(StaticMap::from_rows(&["#####", "#...#", "#...#", "#####"]))
    }

    const SCENARIO: &str = r#"(
        player: (template: "player", position: (x: 1, y: 1), carried: ["health_potion"]),
        floors: [
            (
                map: "room",
                downstairs: Some((x: 3, y: 2)),
                npcs: [(template: "orc", position: (x: 3, y: 1))],
                items: [(template: "health_potion", position: (x: 2, y: 2))],
            ),
            (map: "room", upstairs: Some((x: 1, y: 2))),
        ],
        script: [Bump(East), Wait, Use(0, None), Heavy(East)],
    )"#;

    #[test]
    fn resolves_first_floor_with_unique_ids() {
        let (actors, items) = catalogs();
        let scenario = ScenarioLoader::parse(SCENARIO).unwrap();
        let loaded = ScenarioLoader::resolve(scenario, &actors, &items, room).unwrap();

        let state = &loaded.state;
        assert_eq!(state.player().position, Position::new(1, 1));
        assert_eq!(state.entities.npcs.len(), 1);
        assert_eq!(state.floor.items.len(), 1);
        assert_eq!(state.floor.downstairs, Some(Position::new(3, 2)));
        assert_eq!(loaded.map.dimensions().width, 5);
        assert_eq!(loaded.script.len(), 4);

        let carried = state.player().inventory.as_ref().unwrap().items[0].id;
        let npc = state.entities.npcs[0].id;
        let floor_item = state.floor.items[0].id;
        assert_ne!(carried, npc);
        assert_ne!(npc, floor_item);
        assert_ne!(npc, EntityId::PLAYER);
    }

    #[test]
    fn next_floor_descends_onto_upstairs() {
        let (actors, items) = catalogs();
        let scenario = ScenarioLoader::parse(SCENARIO).unwrap();
        let mut loaded = ScenarioLoader::resolve(scenario, &actors, &items, room).unwrap();

        let generated = loaded
            .floors
            .generate_floor(StairDirection::Down, &loaded.state);
        assert_eq!(generated.depth, 2);
        assert_eq!(generated.player_position, Position::new(1, 2));
        assert!(generated.npcs.is_empty());
    }

    #[test]
    fn unknown_template_names_the_floor() {
        let (actors, items) = catalogs();
        let scenario =
            ScenarioLoader::parse(&SCENARIO.replace("template: \"orc\"", "template: \"troll\""))
                .unwrap();

        let err = ScenarioLoader::resolve(scenario, &actors, &items, room).unwrap_err();
        assert!(err.to_string().contains("Floor 1"));
        assert!(err.to_string().contains("troll"));
    }

    #[test]
    fn floor_without_arrival_is_rejected() {
        let (actors, items) = catalogs();
        let scenario = ScenarioLoader::parse(
            &SCENARIO.replace(r#"(map: "room", upstairs: Some((x: 1, y: 2)))"#, r#"(map: "room")"#),
        )
        .unwrap();

        let err = ScenarioLoader::resolve(scenario, &actors, &items, room).unwrap_err();
        assert!(err.to_string().contains("Floor 2"));
    }

    #[test]
    fn empty_floor_list_is_rejected() {
        let err = ScenarioLoader::parse(
            r#"(player: (template: "player", position: (x: 1, y: 1)), floors: [])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no floors"));
    }
}

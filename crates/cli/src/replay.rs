//! Scenario replay command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use delve_content::{ContentFactory, LoadedScenario, PlayerCommand};
use delve_core::{GameConfig, LogEntry, MessageStyle};
use delve_runtime::{RuntimeError, Session};
use serde::Serialize;

use crate::render;

/// Replay a scripted scenario and print the message log
#[derive(Parser)]
#[command(name = "delve")]
#[command(about = "Replay a scripted dungeon scenario", long_about = None)]
#[command(version)]
pub struct Replay {
    /// Scenario name under `<DATA_DIR>/scenarios/`, without extension
    #[arg(value_name = "SCENARIO", default_value = "demo")]
    scenario: String,

    /// Content directory holding config, catalogs, maps and scenarios
    #[arg(short, long, value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Per-turn messages followed by a summary
    Text,
    /// Full JSON report
    Json,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let factory = ContentFactory::new(&self.data_dir);
        let config = factory
            .load_config()
            .context("Failed to load game configuration")?;
        let loaded = factory
            .load_scenario(&self.scenario)
            .with_context(|| format!("Failed to load scenario '{}'", self.scenario))?;

        let report = play(&self.scenario, loaded, config);

        match self.format {
            OutputFormat::Text => render::print_text(&report),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize replay report")?;
                println!("{}", json);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ReplayReport {
    pub scenario: String,
    pub steps: Vec<StepRecord>,
    /// Stacked message log at the end of the replay.
    pub log: Vec<LogLine>,
    pub summary: Summary,
}

#[derive(Debug, Serialize)]
pub struct StepRecord {
    pub step: usize,
    pub command: PlayerCommand,
    /// Snake-case action name; absent when the command named an empty slot.
    pub action: Option<&'static str>,
    pub accepted: bool,
    pub messages: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub struct LogLine {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub depth: u32,
    pub nonce: u64,
    pub player_hp: u32,
    pub player_max_hp: u32,
    pub player_xp: u32,
    pub alive: bool,
}

/// Feeds every scripted command to a session until the script ends or the
/// player dies.
pub fn play(name: &str, loaded: LoadedScenario, config: GameConfig) -> ReplayReport {
    let LoadedScenario {
        state,
        map,
        floors,
        script,
    } = loaded;
    let mut session = Session::new(state, map, config, floors);
    let mut steps = Vec::with_capacity(script.len());

    for (step, command) in script.into_iter().enumerate() {
        if !session.player_alive() {
            tracing::info!(step, "player died, script stopped");
            break;
        }

        let Some(action) = command.to_action(session.state()) else {
            tracing::warn!(step, ?command, "command names an empty inventory slot");
            steps.push(StepRecord {
                step,
                command,
                action: None,
                accepted: false,
                messages: Vec::new(),
            });
            continue;
        };

        let (accepted, messages) = match session.submit(action) {
            Ok(report) => (true, report.messages().cloned().collect()),
            Err(RuntimeError::Rejected(impossible)) => (
                false,
                vec![LogEntry::new(impossible.to_string(), MessageStyle::Impossible)],
            ),
            Err(error) => {
                tracing::warn!(step, %error, "session refused command");
                (false, Vec::new())
            }
        };
        steps.push(StepRecord {
            step,
            command,
            action: Some(action.as_snake_case()),
            accepted,
            messages,
        });
    }

    let player = session.state().player();
    let summary = Summary {
        depth: session.state().floor.depth,
        nonce: session.state().turn.nonce,
        player_hp: player.fighter.hp(),
        player_max_hp: player.fighter.max_hp,
        player_xp: player.level.current_xp,
        alive: player.is_alive(),
    };
    let log = session
        .log()
        .messages()
        .iter()
        .map(|message| LogLine {
            text: message.full_text(),
            style: message.style,
        })
        .collect();

    ReplayReport {
        scenario: name.to_owned(),
        steps,
        log,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn write_data_dir(dir: &Path) {
        fs::create_dir_all(dir.join("maps")).unwrap();
        fs::create_dir_all(dir.join("scenarios")).unwrap();
        fs::write(
            dir.join("actors.ron"),
            r#"Catalog(entries: [
                (id: "player", name: "Player", glyph: '@', color: (255, 255, 255),
                 max_hp: 30, max_stam: 10, defense: 2, power: 5, stam_cost: 2,
                 inventory_capacity: 26, equipment: true),
                (id: "orc", name: "Orc", glyph: 'o', color: (63, 127, 63),
                 max_hp: 10, max_stam: 6, defense: 0, power: 3, stam_cost: 2, xp_given: 35),
            ])"#,
        )
        .unwrap();
        fs::write(dir.join("items.ron"), "Catalog(entries: [])").unwrap();
        fs::write(
            dir.join("maps/hall.ron"),
            "(rows: [\"######\", \"#....#\", \"######\"])",
        )
        .unwrap();
        fs::write(
            dir.join("scenarios/duel.ron"),
            r#"(
                player: (template: "player", position: (x: 1, y: 1)),
                floors: [(
                    map: "hall",
                    arrival: Some((x: 1, y: 1)),
                    npcs: [(template: "orc", position: (x: 2, y: 1))],
                )],
                script: [Move(West), Bump(East), Bump(East), Drop(0), Wait],
            )"#,
        )
        .unwrap();
    }

    #[test]
    fn duel_replays_to_a_kill() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path());
        let factory = ContentFactory::new(dir.path());
        let loaded = factory.load_scenario("duel").unwrap();

        let report = play("duel", loaded, factory.load_config().unwrap());

        assert_eq!(report.steps.len(), 5);
        // Walking into the wall is rejected and costs no turn.
        assert!(!report.steps[0].accepted);
        assert_eq!(report.steps[0].messages[0].text, "That way is blocked.");
        assert!(report.steps[1].accepted);
        assert!(
            report.steps[2]
                .messages
                .iter()
                .any(|entry| entry.text == "Orc is dead!")
        );
        assert_eq!(report.steps[3].action, None);
        assert_eq!(report.steps[4].action, Some("wait"));

        assert!(report.summary.alive);
        assert_eq!(report.summary.player_xp, 35);
        // One orc swing at defense 2 lands for one point.
        assert_eq!(report.summary.player_hp, 29);
        assert_eq!(report.summary.nonce, 4);
    }

    #[test]
    fn shipped_demo_loads_and_plays() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data");
        let factory = ContentFactory::new(data_dir);
        let loaded = factory.load_scenario("demo").unwrap();
        let script_len = loaded.script.len();

        let report = play("demo", loaded, factory.load_config().unwrap());

        assert_eq!(report.steps.len(), script_len);
        // Starts on the sword.
        assert!(report.steps[0].accepted);
        assert!(!report.log.is_empty());

        // The orc falls on the staircase and the player steps onto it.
        let descent = report
            .steps
            .iter()
            .find(|step| step.action == Some("take_stairs"))
            .unwrap();
        assert!(descent.accepted);
        assert!(
            descent
                .messages
                .iter()
                .any(|entry| entry.text == "You descend the staircase.")
        );
        assert_eq!(report.summary.depth, 2);
        assert!(report.summary.alive);
    }

    #[test]
    fn report_serializes_to_json() {
        let dir = tempfile::tempdir().unwrap();
        write_data_dir(dir.path());
        let factory = ContentFactory::new(dir.path());
        let report = play(
            "duel",
            factory.load_scenario("duel").unwrap(),
            GameConfig::default(),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["scenario"], "duel");
        assert_eq!(json["steps"][1]["action"], "bump");
        assert_eq!(json["log"][0]["style"], "Impossible");
    }
}

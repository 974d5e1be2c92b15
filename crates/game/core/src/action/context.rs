use crate::config::GameConfig;
use crate::env::{MapOracle, WorldView};
use crate::log::{MessageSink, MessageStyle};
use crate::state::{ActorState, DeathReport, EntityId, GameState};

/// Mutable surroundings an action applies itself to.
pub struct ActionContext<'a> {
    pub state: &'a mut GameState,
    pub map: &'a dyn MapOracle,
    pub config: &'a GameConfig,
    pub messages: &'a mut dyn MessageSink,
    deaths: Vec<DeathReport>,
}

impl<'a> ActionContext<'a> {
    pub fn new(
        state: &'a mut GameState,
        map: &'a dyn MapOracle,
        config: &'a GameConfig,
        messages: &'a mut dyn MessageSink,
    ) -> Self {
        Self {
            state,
            map,
            config,
            messages,
            deaths: Vec::new(),
        }
    }

    pub fn view(&self) -> WorldView<'_> {
        WorldView::new(&*self.state, self.map)
    }

    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        self.state.entities.actor(id)
    }

    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        self.state.entities.actor_mut(id)
    }

    pub fn log(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.add_message(text.into(), style);
    }

    /// Damages an actor through the death-checked path.
    ///
    /// On a kill this logs the death line, credits the player with the
    /// victim's experience (unless the victim is the player) and records the
    /// death. Returns the HP actually lost.
    pub fn damage_actor(&mut self, id: EntityId, amount: u32) -> u32 {
        let Some(actor) = self.state.entities.actor_mut(id) else {
            return 0;
        };
        let before = actor.fighter.hp();
        let death = actor.apply_damage(amount);
        let lost = before - actor.fighter.hp();

        if let Some(report) = death {
            self.on_death(report);
        }
        lost
    }

    fn on_death(&mut self, report: DeathReport) {
        if report.entity.is_player() {
            self.log("You died!", MessageStyle::PlayerDeath);
        } else {
            self.log(format!("{} is dead!", report.name), MessageStyle::EnemyDeath);
            if report.xp_given > 0 {
                self.state.entities.player.level.add_xp(report.xp_given);
                self.log(
                    format!("You gain {} experience points.", report.xp_given),
                    MessageStyle::Neutral,
                );
            }
        }

        tracing::debug!(entity = %report.entity, name = %report.name, "actor died");
        self.deaths.push(report);
    }

    pub fn take_deaths(&mut self) -> Vec<DeathReport> {
        std::mem::take(&mut self.deaths)
    }
}

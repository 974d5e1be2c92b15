//! Melee resolution.

use crate::config::CombatTuning;
use crate::state::ActorState;

use super::damage::{AttackStyle, calculate_damage, stamina_payment, stamina_required};

/// The combat-relevant numbers of one actor, frozen before resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatSnapshot {
    pub power: i32,
    pub defense: i32,
    pub stam: u32,
    pub stam_cost: u32,
    pub evading: bool,
}

impl CombatSnapshot {
    pub fn of(actor: &ActorState) -> Self {
        Self {
            power: actor.power(),
            defense: actor.defense(),
            stam: actor.fighter.stam(),
            stam_cost: actor.fighter.stam_cost,
            evading: actor.fighter.is_evading(),
        }
    }
}

/// What a melee swing amounts to. Every variant consumes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeleeResolution {
    /// Attacker lacked the stamina to swing; regains a little instead.
    Exhausted,
    /// Target was evading.
    Evaded { stamina_cost: u32 },
    /// Positive damage lands on the target.
    Hit { damage: u32, stamina_cost: u32 },
    /// Defense absorbed the blow.
    NoDamage { stamina_cost: u32 },
}

impl MeleeResolution {
    /// Damage dealt to the target, zero unless it was a hit.
    pub fn damage(self) -> u32 {
        match self {
            Self::Hit { damage, .. } => damage,
            _ => 0,
        }
    }

    /// Stamina the attacker pays. Exhaustion pays nothing.
    pub fn stamina_cost(self) -> u32 {
        match self {
            Self::Exhausted => 0,
            Self::Evaded { stamina_cost }
            | Self::Hit { stamina_cost, .. }
            | Self::NoDamage { stamina_cost } => stamina_cost,
        }
    }
}

/// Resolves a melee swing without touching state.
///
/// Order matters: the exhaustion gate is checked before evasion, and evasion
/// before damage.
pub fn resolve_melee(
    attacker: &CombatSnapshot,
    target: &CombatSnapshot,
    style: AttackStyle,
    tuning: &CombatTuning,
) -> MeleeResolution {
    if attacker.stam < stamina_required(style, attacker.stam_cost, tuning) {
        return MeleeResolution::Exhausted;
    }

    let stamina_cost = stamina_payment(style, attacker.stam_cost, tuning);
    if target.evading {
        return MeleeResolution::Evaded { stamina_cost };
    }

    let damage = calculate_damage(style, attacker.power, target.defense, tuning);
    if damage > 0 {
        MeleeResolution::Hit {
            damage: damage as u32,
            stamina_cost,
        }
    } else {
        MeleeResolution::NoDamage { stamina_cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(power: i32, defense: i32, stam: u32, stam_cost: u32) -> CombatSnapshot {
        CombatSnapshot {
            power,
            defense,
            stam,
            stam_cost,
            evading: false,
        }
    }

    #[test]
    fn exactly_enough_stamina_swings() {
        let tuning = CombatTuning::default();
        let attacker = snapshot(5, 0, 2, 2);
        let target = snapshot(1, 2, 5, 1);

        assert_eq!(
            resolve_melee(&attacker, &target, AttackStyle::Light, &tuning),
            MeleeResolution::Hit {
                damage: 3,
                stamina_cost: 2
            }
        );
    }

    #[test]
    fn exhaustion_is_checked_before_evasion() {
        let tuning = CombatTuning::default();
        let attacker = snapshot(5, 0, 1, 2);
        let mut target = snapshot(1, 0, 5, 1);
        target.evading = true;

        assert_eq!(
            resolve_melee(&attacker, &target, AttackStyle::Light, &tuning),
            MeleeResolution::Exhausted
        );
    }

    #[test]
    fn heavy_gate_is_stricter_than_light() {
        let tuning = CombatTuning::default();
        // Gate for stam_cost 5 is 8; 7 is enough for light only.
        let attacker = snapshot(5, 0, 7, 5);
        let target = snapshot(1, 0, 5, 1);

        assert_eq!(
            resolve_melee(&attacker, &target, AttackStyle::Heavy, &tuning),
            MeleeResolution::Exhausted
        );
        assert!(matches!(
            resolve_melee(&attacker, &target, AttackStyle::Light, &tuning),
            MeleeResolution::Hit { .. }
        ));
    }

    #[test]
    fn evading_target_still_costs_heavy_payment() {
        let tuning = CombatTuning::default();
        let attacker = snapshot(5, 0, 10, 5);
        let mut target = snapshot(1, 0, 5, 1);
        target.evading = true;

        let resolution = resolve_melee(&attacker, &target, AttackStyle::Heavy, &tuning);
        assert_eq!(resolution, MeleeResolution::Evaded { stamina_cost: 8 });
        assert_eq!(resolution.damage(), 0);
    }

    #[test]
    fn defense_at_or_above_power_deals_nothing() {
        let tuning = CombatTuning::default();
        let attacker = snapshot(3, 0, 5, 2);
        let target = snapshot(1, 3, 5, 1);

        let resolution = resolve_melee(&attacker, &target, AttackStyle::Light, &tuning);
        assert_eq!(resolution, MeleeResolution::NoDamage { stamina_cost: 2 });
        assert_eq!(resolution.stamina_cost(), 2);
    }
}

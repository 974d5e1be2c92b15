//! Stamina and damage arithmetic for melee.

use crate::config::{CombatTuning, scale_cost, scale_percent};

/// Weight of a melee swing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum AttackStyle {
    #[default]
    Light,
    Heavy,
}

/// Stamina the attacker must hold to swing at all.
///
/// ```text
/// light: stam_cost
/// heavy: round(stam_cost × heavy_stamina_gate_percent / 100)
/// ```
pub fn stamina_required(style: AttackStyle, stam_cost: u32, tuning: &CombatTuning) -> u32 {
    match style {
        AttackStyle::Light => stam_cost,
        AttackStyle::Heavy => scale_cost(stam_cost, tuning.heavy_stamina_gate_percent),
    }
}

/// Stamina actually paid once the swing goes off, hit or evaded.
pub fn stamina_payment(style: AttackStyle, stam_cost: u32, tuning: &CombatTuning) -> u32 {
    match style {
        AttackStyle::Light => stam_cost,
        AttackStyle::Heavy => scale_cost(stam_cost, tuning.heavy_stamina_cost_percent),
    }
}

/// Raw damage before the zero floor.
///
/// ```text
/// light: power − defense
/// heavy: round(power × heavy_power_percent / 100) − defense
/// ```
pub fn calculate_damage(style: AttackStyle, power: i32, defense: i32, tuning: &CombatTuning) -> i32 {
    let power = match style {
        AttackStyle::Light => power,
        AttackStyle::Heavy => scale_percent(power, tuning.heavy_power_percent),
    };
    power - defense
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heavy_costs_round_half_away_from_zero() {
        let tuning = CombatTuning::default();
        assert_eq!(stamina_required(AttackStyle::Light, 5, &tuning), 5);
        // 5 × 1.6 = 8
        assert_eq!(stamina_required(AttackStyle::Heavy, 5, &tuning), 8);
        // 5 × 1.5 = 7.5 → 8
        assert_eq!(stamina_payment(AttackStyle::Heavy, 5, &tuning), 8);
        // 3 × 1.5 = 4.5 → 5
        assert_eq!(stamina_payment(AttackStyle::Heavy, 3, &tuning), 5);
    }

    #[test]
    fn heavy_damage_scales_power_before_defense() {
        let tuning = CombatTuning::default();
        assert_eq!(calculate_damage(AttackStyle::Light, 5, 2, &tuning), 3);
        // round(5 × 1.6) − 2 = 8 − 2
        assert_eq!(calculate_damage(AttackStyle::Heavy, 5, 2, &tuning), 6);
        assert_eq!(calculate_damage(AttackStyle::Light, 1, 4, &tuning), -3);
    }
}

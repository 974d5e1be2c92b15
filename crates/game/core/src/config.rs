/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Stamina and damage multipliers used by melee and dodge resolution.
    pub combat: CombatTuning,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard upper bound on inventory slots; individual inventories may be smaller.
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    pub fn new() -> Self {
        Self {
            combat: CombatTuning::default(),
        }
    }

    pub fn with_combat(combat: CombatTuning) -> Self {
        Self { combat }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Combat balance knobs.
///
/// Multipliers are integer percentages (160 = ×1.6) and every scaled value is
/// rounded half away from zero, see [`scale_percent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatTuning {
    /// Stamina a heavy swing needs on hand, as a percentage of `stam_cost`.
    pub heavy_stamina_gate_percent: u32,
    /// Stamina a heavy swing actually spends, as a percentage of `stam_cost`.
    pub heavy_stamina_cost_percent: u32,
    /// Power multiplier applied by heavy swings before defense.
    pub heavy_power_percent: u32,
    /// Stamina required and spent by a dodge.
    pub dodge_stamina_cost: u32,
    /// Stamina regained by waiting, moving, or swinging while exhausted.
    pub stamina_regen: u32,
}

impl CombatTuning {
    pub const DEFAULT_HEAVY_STAMINA_GATE_PERCENT: u32 = 160;
    pub const DEFAULT_HEAVY_STAMINA_COST_PERCENT: u32 = 150;
    pub const DEFAULT_HEAVY_POWER_PERCENT: u32 = 160;
    pub const DEFAULT_DODGE_STAMINA_COST: u32 = 2;
    pub const DEFAULT_STAMINA_REGEN: u32 = 1;
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            heavy_stamina_gate_percent: Self::DEFAULT_HEAVY_STAMINA_GATE_PERCENT,
            heavy_stamina_cost_percent: Self::DEFAULT_HEAVY_STAMINA_COST_PERCENT,
            heavy_power_percent: Self::DEFAULT_HEAVY_POWER_PERCENT,
            dodge_stamina_cost: Self::DEFAULT_DODGE_STAMINA_COST,
            stamina_regen: Self::DEFAULT_STAMINA_REGEN,
        }
    }
}

/// Scales `value` by `percent` and rounds half away from zero.
///
/// Integer arithmetic only, so results never depend on float formatting.
pub fn scale_percent(value: i32, percent: u32) -> i32 {
    let scaled = i64::from(value.unsigned_abs()) * i64::from(percent);
    let rounded = (scaled + 50) / 100;
    let rounded = i32::try_from(rounded).unwrap_or(i32::MAX);
    if value < 0 { -rounded } else { rounded }
}

/// Unsigned convenience wrapper over [`scale_percent`] for stamina costs.
pub fn scale_cost(value: u32, percent: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(percent);
    u32::try_from((scaled + 50) / 100).unwrap_or(u32::MAX)
}

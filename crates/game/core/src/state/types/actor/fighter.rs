//! Vital statistics for combat-capable actors.
//!
//! `Fighter` owns the raw hit point and stamina pools. Every mutator clamps
//! into `[0, max]`; none of them trigger the death transition, which is the
//! owning actor's responsibility (see [`super::ActorState::apply_damage`]).

/// Combat-stat component owned one-to-one by an actor.
///
/// Deserialized pools are clamped the same way the mutators clamp them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FighterRecord"))]
pub struct Fighter {
    hp: u32,
    stam: u32,
    pub max_hp: u32,
    pub max_stam: u32,
    pub base_defense: i32,
    pub base_power: i32,
    /// Stamina price of a light attack.
    pub stam_cost: u32,
    pub stance: Stance,
}

impl Fighter {
    /// Creates a fighter with full hit points and stamina.
    pub fn new(max_hp: u32, max_stam: u32, base_defense: i32, base_power: i32, stam_cost: u32) -> Self {
        Self {
            hp: max_hp,
            stam: max_stam,
            max_hp,
            max_stam,
            base_defense,
            base_power,
            stam_cost,
            stance: Stance::default(),
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn stam(&self) -> u32 {
        self.stam
    }

    /// Assigns hit points, clamped into `[0, max_hp]`.
    pub fn set_hp(&mut self, value: i64) {
        self.hp = clamp_to(value, self.max_hp);
    }

    /// Assigns stamina, clamped into `[0, max_stam]`.
    pub fn set_stam(&mut self, value: i64) {
        self.stam = clamp_to(value, self.max_stam);
    }

    pub fn with_hp(mut self, value: u32) -> Self {
        self.set_hp(i64::from(value));
        self
    }

    pub fn with_stam(mut self, value: u32) -> Self {
        self.set_stam(i64::from(value));
        self
    }

    /// Raises hit points by up to `amount`; returns how much was recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.hp == self.max_hp {
            return 0;
        }
        let before = self.hp;
        self.set_hp(i64::from(self.hp) + i64::from(amount));
        self.hp - before
    }

    /// Subtracts `amount` hit points; returns how much was actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.set_hp(i64::from(self.hp) - i64::from(amount));
        before - self.hp
    }

    pub fn restore_stam(&mut self, amount: u32) {
        if self.stam == self.max_stam {
            return;
        }
        self.set_stam(i64::from(self.stam) + i64::from(amount));
    }

    pub fn take_stam(&mut self, amount: u32) {
        self.set_stam(i64::from(self.stam) - i64::from(amount));
    }

    /// Pays the stamina price of a light attack.
    pub fn take_stam_atk(&mut self) {
        self.take_stam(self.stam_cost);
    }

    #[inline]
    pub fn is_evading(&self) -> bool {
        self.stance.guard == Guard::Evading
    }

    #[inline]
    pub fn is_blocking(&self) -> bool {
        self.stance.guard == Guard::Blocking
    }

    #[inline]
    pub fn is_two_handed(&self) -> bool {
        self.stance.grip == Grip::TwoHanded
    }
}

fn clamp_to(value: i64, max: u32) -> u32 {
    value.clamp(0, i64::from(max)) as u32
}

/// Unchecked wire shape of [`Fighter`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FighterRecord {
    hp: u32,
    stam: u32,
    max_hp: u32,
    max_stam: u32,
    base_defense: i32,
    base_power: i32,
    stam_cost: u32,
    #[serde(default)]
    stance: Stance,
}

#[cfg(feature = "serde")]
impl From<FighterRecord> for Fighter {
    fn from(record: FighterRecord) -> Self {
        let mut fighter = Fighter::new(
            record.max_hp,
            record.max_stam,
            record.base_defense,
            record.base_power,
            record.stam_cost,
        )
        .with_hp(record.hp)
        .with_stam(record.stam);
        fighter.stance = record.stance;
        fighter
    }
}

/// Combat posture of a fighter.
///
/// Guard and grip are independent axes; evading and blocking share the guard
/// axis, so an actor can never do both at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stance {
    pub guard: Guard,
    pub grip: Grip,
}

impl Stance {
    /// Enters evasion, or drops back to an open guard when already evading.
    pub fn toggle_evasion(&mut self) {
        self.guard = match self.guard {
            Guard::Evading => Guard::Open,
            Guard::Open | Guard::Blocking => Guard::Evading,
        };
    }

    /// Raises a block, or lowers it when already blocking.
    pub fn toggle_block(&mut self) {
        self.guard = match self.guard {
            Guard::Blocking => Guard::Open,
            Guard::Open | Guard::Evading => Guard::Blocking,
        };
    }

    pub fn toggle_grip(&mut self) {
        self.grip = match self.grip {
            Grip::OneHanded => Grip::TwoHanded,
            Grip::TwoHanded => Grip::OneHanded,
        };
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Guard {
    #[default]
    Open,
    Blocking,
    /// Attacks and targeted items aimed at this actor are negated.
    Evading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grip {
    #[default]
    OneHanded,
    TwoHanded,
}

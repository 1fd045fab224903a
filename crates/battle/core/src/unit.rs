//! Combat units and the read-only views handed to presentation layers.

/// Which combatant a unit, action, or event refers to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The opposing combatant.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Stats used to create a unit at battle setup.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSpec {
    pub name: String,
    pub max_hp: u32,
    pub attack_power: u32,
}

impl UnitSpec {
    pub fn new(name: impl Into<String>, max_hp: u32, attack_power: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            attack_power,
        }
    }
}

/// A combatant: the only mutable entity in a battle.
///
/// Units are created once at setup and mutated only through
/// [`Unit::take_damage`] and the protection toggles. The battle ends (not
/// the unit) when `current_hp` reaches 0.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
    pub attack_power: u32,
    pub is_protected: bool,
}

impl Unit {
    /// Creates a unit at full health from its spec.
    pub fn new(spec: UnitSpec) -> Self {
        Self {
            name: spec.name,
            current_hp: spec.max_hp,
            max_hp: spec.max_hp,
            attack_power: spec.attack_power,
            is_protected: false,
        }
    }

    /// Subtracts `amount` from current HP, clamping at 0.
    ///
    /// Returns whether the unit is dead after the clamp. Protection is NOT
    /// consulted here: the attacking transition decides whether to invoke
    /// damage at all.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.current_hp == 0
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Raises the single-round protection flag.
    pub fn protect(&mut self) {
        self.is_protected = true;
    }

    /// Lowers the protection flag at the round boundary.
    pub fn clear_protection(&mut self) {
        self.is_protected = false;
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> UnitSnapshot {
        UnitSnapshot {
            name: self.name.clone(),
            current_hp: self.current_hp,
            max_hp: self.max_hp,
        }
    }
}

/// Read-only unit view. Presentation layers never see a `&mut Unit`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitSnapshot {
    pub name: String,
    pub current_hp: u32,
    pub max_hp: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scout() -> Unit {
        Unit::new(UnitSpec::new("Scout", 10, 3))
    }

    #[test]
    fn take_damage_clamps_at_zero() {
        let mut unit = scout();
        assert!(!unit.take_damage(9));
        assert_eq!(unit.current_hp, 1);
        assert!(unit.take_damage(100));
        assert_eq!(unit.current_hp, 0);
    }

    #[test]
    fn take_damage_reports_death_exactly_at_zero() {
        let mut unit = scout();
        assert!(unit.take_damage(10));
        assert!(!unit.is_alive());
    }

    #[test]
    fn take_damage_ignores_protection_flag() {
        // The defending transition decides whether damage happens at all;
        // once invoked, the flag changes nothing.
        let mut unit = scout();
        unit.protect();
        unit.take_damage(4);
        assert_eq!(unit.current_hp, 6);
    }

    #[test]
    fn sides_oppose_each_other() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }

    #[test]
    fn protection_toggles() {
        let mut unit = scout();
        unit.protect();
        assert!(unit.is_protected);
        unit.clear_protection();
        assert!(!unit.is_protected);
    }
}

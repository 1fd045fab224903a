/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    /// How many times the enemy may use its sniping ability over the whole
    /// battle. The counter depletes when the action executes, not when it
    /// is selected.
    pub snipe_charges: u32,

    /// Percentage roll the enemy policy must exceed (strictly) to pick
    /// sniping while charges remain. 50 reproduces a fair coin flip.
    pub snipe_chance_percent: u32,
}

impl BattleConfig {
    pub const DEFAULT_SNIPE_CHARGES: u32 = 7;
    pub const DEFAULT_SNIPE_CHANCE_PERCENT: u32 = 50;

    pub fn new() -> Self {
        Self {
            snipe_charges: Self::DEFAULT_SNIPE_CHARGES,
            snipe_chance_percent: Self::DEFAULT_SNIPE_CHANCE_PERCENT,
        }
    }

    pub fn with_snipe_charges(snipe_charges: u32) -> Self {
        Self {
            snipe_charges,
            ..Self::new()
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}

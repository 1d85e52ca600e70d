/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Cultivation speed bonus (percent) granted to players who belong to a faction.
    pub guild_bonus_percent: u32,
    /// Length of one random-event window inside a cultivation session.
    pub event_window_minutes: u32,
    /// How many realms below the player a boss may sit and still be offered.
    pub boss_realms_below: u32,
    /// How many realms above the player a boss may sit and still be offered.
    pub boss_realms_above: u32,
}

impl GameConfig {
    // ===== attribute bounds =====
    pub const MIN_STAT: u8 = 1;
    pub const MAX_STAT: u8 = 100;

    // ===== new player =====
    pub const STARTING_CONSTITUTION: u8 = 50;
    pub const STARTING_INSIGHT: u8 = 50;
    pub const STARTING_FORTUNE: u8 = 50;
    pub const STARTING_INNER_CALM: u8 = 50;
    pub const STARTING_CURRENCY: u64 = 1000;

    // ===== cultivation =====
    pub const MIN_CULTIVATION_MINUTES: u32 = 1;
    pub const MAX_CULTIVATION_MINUTES: u32 = 1440;

    // ===== breakthrough =====
    /// Share of current progress lost when the final breakthrough roll fails.
    pub const FAILED_BREAKTHROUGH_PENALTY_PERCENT: u64 = 10;
    /// First realm index at which the inner-demon trial can appear.
    pub const INNER_DEMON_FROM_REALM: usize = 12;
    /// First realm index at which tribulation difficulty scales.
    pub const TRIBULATION_FROM_REALM: usize = 42;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GUILD_BONUS_PERCENT: u32 = 10;
    pub const DEFAULT_EVENT_WINDOW_MINUTES: u32 = 30;
    pub const DEFAULT_BOSS_REALMS_BELOW: u32 = 5;
    pub const DEFAULT_BOSS_REALMS_ABOVE: u32 = 10;

    pub fn new() -> Self {
        Self {
            guild_bonus_percent: Self::DEFAULT_GUILD_BONUS_PERCENT,
            event_window_minutes: Self::DEFAULT_EVENT_WINDOW_MINUTES,
            boss_realms_below: Self::DEFAULT_BOSS_REALMS_BELOW,
            boss_realms_above: Self::DEFAULT_BOSS_REALMS_ABOVE,
        }
    }

    pub fn with_event_window(mut self, minutes: u32) -> Self {
        self.event_window_minutes = minutes.max(1);
        self
    }

    /// Guild bonus as a multiplier fraction (10% → 0.1).
    pub fn guild_bonus(&self) -> f64 {
        f64::from(self.guild_bonus_percent) / 100.0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

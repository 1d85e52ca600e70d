//! Cultivation session yields.

/// Progress gained per minute of cultivation.
///
/// # Formula
///
/// ```text
/// floor(10 * 1.3^(realm / 5) * (0.5 + constitution / 50) * (1 + guild_bonus))
/// ```
///
/// Constitution scales the base speed by 0.5x..2.5x.
pub fn cultivation_speed(realm: usize, constitution: u8, guild_bonus: f64) -> u64 {
    let base = 10.0 * 1.3_f64.powf(realm as f64 / 5.0);
    let constitution_multiplier = 0.5 + f64::from(constitution) / 50.0;

    (base * constitution_multiplier * (1.0 + guild_bonus)).floor() as u64
}

/// Currency earned over a whole session.
///
/// The base reward is floored before fortune scales it by 0.5x..1.5x, then
/// floored again.
pub fn cultivation_currency_reward(realm: usize, duration_minutes: u32, fortune: u8) -> u64 {
    let base = (10.0 * 1.5_f64.powf(realm as f64 / 10.0) * f64::from(duration_minutes)).floor();
    let fortune_multiplier = 0.5 + f64::from(fortune) / 100.0;

    (base * fortune_multiplier).floor() as u64
}

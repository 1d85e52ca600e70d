//! Realm ladder curves: progress thresholds, success ladder, costs and rewards.

use crate::state::Rewards;

/// One named era of the realm ladder.
///
/// Bands are contiguous and non-overlapping. Inside a band the progress
/// requirement grows as `base * multiplier^(realm - start)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StageBand {
    pub name: &'static str,
    pub start: usize,
    pub end: usize,
    pub base: u64,
    pub multiplier: f64,
}

impl StageBand {
    const fn new(name: &'static str, start: usize, end: usize, base: u64, multiplier: f64) -> Self {
        Self {
            name,
            start,
            end,
            base,
            multiplier,
        }
    }

    #[inline]
    pub const fn contains(&self, realm: usize) -> bool {
        realm >= self.start && realm <= self.end
    }

    /// Offset of `realm` inside this band (0 for the first realm of the band).
    #[inline]
    pub const fn offset(&self, realm: usize) -> usize {
        realm.saturating_sub(self.start)
    }
}

/// The ladder, ordered by `start`.
pub const STAGE_BANDS: [StageBand; 21] = [
    StageBand::new("Mortal", 0, 0, 0, 1.0),
    StageBand::new("Qi Refining", 1, 6, 100, 1.5),
    StageBand::new("Foundation Establishment", 7, 11, 1_000, 1.8),
    StageBand::new("Golden Core", 12, 16, 10_000, 2.0),
    StageBand::new("Nascent Soul", 17, 21, 50_000, 2.2),
    StageBand::new("Spirit Transformation", 22, 26, 200_000, 2.3),
    StageBand::new("Void Refining", 27, 31, 800_000, 2.4),
    StageBand::new("Body Integration", 32, 36, 3_000_000, 2.5),
    StageBand::new("Great Ascension", 37, 41, 10_000_000, 2.6),
    StageBand::new("Tribulation Crossing", 42, 46, 35_000_000, 2.7),
    StageBand::new("Flying Ascension", 47, 51, 100_000_000, 2.8),
    StageBand::new("True Immortal", 52, 56, 300_000_000, 3.0),
    StageBand::new("Mystic Immortal", 57, 61, 1_000_000_000, 3.2),
    StageBand::new("Earth Immortal", 62, 66, 5_000_000_000, 3.4),
    StageBand::new("Heaven Immortal", 67, 71, 20_000_000_000, 3.6),
    StageBand::new("Golden Immortal", 72, 76, 100_000_000_000, 3.8),
    StageBand::new("Taiyi Golden Immortal", 77, 81, 500_000_000_000, 4.0),
    StageBand::new("Quasi-Emperor", 82, 86, 2_000_000_000_000, 4.2),
    StageBand::new("Great Emperor", 87, 91, 10_000_000_000_000, 4.4),
    StageBand::new("Immortal Emperor", 92, 96, 50_000_000_000_000, 4.6),
    StageBand::new("Ancestral Emperor", 97, 100, 250_000_000_000_000, 5.0),
];

/// Sub-step of a stage band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Early,
    Middle,
    Late,
    Peak,
    Perfected,
}

impl Tier {
    /// Maps a band offset to a tier; offsets past the last tier stay `Perfected`.
    pub const fn from_offset(offset: usize) -> Self {
        match offset {
            0 => Self::Early,
            1 => Self::Middle,
            2 => Self::Late,
            3 => Self::Peak,
            _ => Self::Perfected,
        }
    }
}

/// Looks up the band containing `realm`.
pub fn stage_band(realm: usize) -> Option<&'static StageBand> {
    STAGE_BANDS.iter().find(|band| band.contains(realm))
}

/// Progress needed to break through into `realm`.
///
/// # Formula
///
/// ```text
/// floor(base * multiplier ^ (realm - band.start))
/// ```
///
/// Realm 0 needs nothing; an index outside every band also yields 0.
pub fn required_progress(realm: usize) -> u64 {
    if realm == 0 {
        return 0;
    }

    match stage_band(realm) {
        Some(band) => {
            let steps = band.offset(realm) as i32;
            (band.base as f64 * band.multiplier.powi(steps)).floor() as u64
        }
        None => 0,
    }
}

/// Base breakthrough success percentage when leaving `realm`.
pub fn base_success_rate(realm: usize) -> u32 {
    match realm {
        0 => 100,
        1..=6 => 90,
        7..=11 => 85,
        12..=16 => 80,
        17..=21 => 75,
        22..=26 => 70,
        27..=31 => 65,
        32..=36 => 60,
        37..=41 => 55,
        42..=46 => 50,
        47..=51 => 48,
        52..=56 => 45,
        57..=61 => 42,
        62..=66 => 40,
        67..=71 => 38,
        72..=76 => 35,
        77..=81 => 32,
        82..=86 => 28,
        87..=91 => 25,
        92..=96 => 22,
        _ => 20,
    }
}

/// Currency cost of a breakthrough into `realm`: `floor(100 * 2.5^(realm / 5))`.
pub fn breakthrough_cost(realm: usize) -> u64 {
    if realm == 0 {
        return 0;
    }
    (100.0 * 2.5_f64.powf(realm as f64 / 5.0)).floor() as u64
}

/// Rewards granted on reaching `realm`.
///
/// - progress: 10% of the realm's progress requirement
/// - currency: twice the realm's breakthrough cost
/// - reputation: `floor(100 * 1.5^(realm / 10))`
pub fn breakthrough_rewards(realm: usize) -> Rewards {
    Rewards {
        progress: required_progress(realm) / 10,
        currency: breakthrough_cost(realm) * 2,
        reputation: (100.0 * 1.5_f64.powf(realm as f64 / 10.0)).floor() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_are_contiguous_and_cover_ladder() {
        assert_eq!(STAGE_BANDS[0].start, 0);
        for pair in STAGE_BANDS.windows(2) {
            assert_eq!(pair[0].end + 1, pair[1].start, "gap after {}", pair[0].name);
        }
        for realm in 0..100 {
            assert!(stage_band(realm).is_some(), "realm {realm} uncovered");
        }
    }

    #[test]
    fn required_progress_known_values() {
        assert_eq!(required_progress(0), 0);
        assert_eq!(required_progress(1), 100);
        assert_eq!(required_progress(2), 150);
        assert_eq!(required_progress(3), 225);
        assert_eq!(required_progress(7), 1_000);
        assert_eq!(required_progress(12), 10_000);
        assert_eq!(required_progress(13), 20_000);
        assert_eq!(required_progress(42), 35_000_000);
    }

    #[test]
    fn required_progress_outside_bands_is_zero() {
        assert_eq!(required_progress(101), 0);
        assert_eq!(required_progress(5_000), 0);
    }

    #[test]
    fn required_progress_monotonic_within_bands() {
        for band in STAGE_BANDS.iter().skip(1) {
            for realm in band.start..band.end.min(99) {
                assert!(required_progress(realm) <= required_progress(realm + 1));
            }
        }
    }

    #[test]
    fn band_entry_thresholds_strictly_increase() {
        let entries: Vec<u64> = STAGE_BANDS
            .iter()
            .skip(1)
            .map(|band| required_progress(band.start))
            .collect();
        for pair in entries.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn base_success_rate_breakpoints() {
        let expected = [
            (0, 100),
            (6, 90),
            (7, 85),
            (11, 85),
            (16, 80),
            (21, 75),
            (26, 70),
            (31, 65),
            (36, 60),
            (41, 55),
            (46, 50),
            (51, 48),
            (56, 45),
            (61, 42),
            (66, 40),
            (71, 38),
            (76, 35),
            (81, 32),
            (86, 28),
            (91, 25),
            (96, 22),
            (97, 20),
            (99, 20),
        ];
        for (realm, rate) in expected {
            assert_eq!(base_success_rate(realm), rate, "realm {realm}");
        }
    }

    #[test]
    fn base_success_rate_non_increasing_and_bounded() {
        for realm in 0..120 {
            let rate = base_success_rate(realm);
            assert!((20..=100).contains(&rate));
            assert!(base_success_rate(realm + 1) <= rate);
        }
    }

    #[test]
    fn breakthrough_cost_curve() {
        assert_eq!(breakthrough_cost(0), 0);
        assert_eq!(breakthrough_cost(5), 250);
        assert_eq!(breakthrough_cost(10), 625);
        // 100 * 2.5^0.2 = 120.1...
        assert_eq!(breakthrough_cost(1), 120);
    }

    #[test]
    fn breakthrough_rewards_follow_cost_and_requirement() {
        let rewards = breakthrough_rewards(1);
        assert_eq!(rewards.progress, 10);
        assert_eq!(rewards.currency, 240);
        // 100 * 1.5^0.1 = 104.1...
        assert_eq!(rewards.reputation, 104);

        let rewards = breakthrough_rewards(10);
        assert_eq!(rewards.currency, 1_250);
        assert_eq!(rewards.reputation, 150);
    }

    #[test]
    fn tier_from_offset_saturates() {
        assert_eq!(Tier::from_offset(0), Tier::Early);
        assert_eq!(Tier::from_offset(4), Tier::Perfected);
        assert_eq!(Tier::from_offset(5), Tier::Perfected);
        assert_eq!(Tier::Peak.to_string(), "Peak");
    }
}

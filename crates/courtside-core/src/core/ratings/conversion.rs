use super::defaults::position_default;
use super::modifiers::ModifierTable;
use crate::core::models::attributes::{
    AttributeProfile, DefenseAttributes, DrivingAttributes, ShootingAttributes, SkillAttributes,
};
use crate::core::models::position::Position;
use crate::core::models::stats::RawStats;
use tracing::{debug, trace};

const DEFAULT_POINTS: f64 = 10.0;
const DEFAULT_ASSISTS: f64 = 2.0;
const DEFAULT_REBOUNDS: f64 = 4.0;
const DEFAULT_STEALS: f64 = 1.0;
const DEFAULT_BLOCKS: f64 = 0.5;
const DEFAULT_MINUTES: f64 = 20.0;
const DEFAULT_FG_PCT: f64 = 0.45;
const DEFAULT_FG3_PCT: f64 = 0.35;
const DEFAULT_FT_PCT: f64 = 0.75;

const FG_PCT_RANGE: (f64, f64) = (0.30, 0.70);
const FG3_PCT_RANGE: (f64, f64) = (0.20, 0.50);
const FT_PCT_RANGE: (f64, f64) = (0.50, 0.95);
const MINUTES_RANGE: (f64, f64) = (10.0, 40.0);

const MAX_RATING: i64 = 100;
const MAX_SCORING_FACTOR: f64 = 2.0;
const SCORING_FACTOR_DIVISOR: f64 = 15.0;

/// A fully populated stat line, ready for conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatLine {
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    pub minutes: f64,
    pub field_goal_pct: f64,
    pub three_point_pct: f64,
    pub free_throw_pct: f64,
}

impl StatLine {
    /// Fills missing or non-finite fields with league-typical values and
    /// floors negative counting stats at zero. Nothing is range-clamped here.
    pub fn with_defaults(stats: &RawStats) -> Self {
        let counting = |value: Option<f64>, default: f64| or_default(value, default).max(0.0);
        Self {
            points: counting(stats.points_per_game, DEFAULT_POINTS),
            assists: counting(stats.assists_per_game, DEFAULT_ASSISTS),
            rebounds: counting(stats.rebounds_per_game, DEFAULT_REBOUNDS),
            steals: counting(stats.steals_per_game, DEFAULT_STEALS),
            blocks: counting(stats.blocks_per_game, DEFAULT_BLOCKS),
            minutes: or_default(stats.minutes_per_game, DEFAULT_MINUTES),
            field_goal_pct: or_default(stats.field_goal_pct, DEFAULT_FG_PCT),
            three_point_pct: or_default(stats.three_point_pct, DEFAULT_FG3_PCT),
            free_throw_pct: or_default(stats.free_throw_pct, DEFAULT_FT_PCT),
        }
    }

    /// Pulls shooting ratios and minutes into plausible ranges.
    /// Counting stats are left untouched.
    pub fn clamped(self) -> Self {
        Self {
            minutes: clamp_range(self.minutes, MINUTES_RANGE),
            field_goal_pct: clamp_range(self.field_goal_pct, FG_PCT_RANGE),
            three_point_pct: clamp_range(self.three_point_pct, FG3_PCT_RANGE),
            free_throw_pct: clamp_range(self.free_throw_pct, FT_PCT_RANGE),
            ..self
        }
    }

    /// Volume bonus for close and mid-range shooting, capped at 2.
    pub fn scoring_factor(&self) -> f64 {
        (self.points / SCORING_FACTOR_DIVISOR).min(MAX_SCORING_FACTOR)
    }
}

fn or_default(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

fn clamp_range(value: f64, (lo, hi): (f64, f64)) -> f64 {
    value.max(lo).min(hi)
}

/// Truncates toward negative infinity, saturating at the `i64` bounds.
#[inline]
fn floor(value: f64) -> i64 {
    value.floor() as i64
}

/// Applies the lower bound first, then the upper bound.
#[inline]
fn rating(value: i64, lo: u8, hi: i64) -> u8 {
    value.max(i64::from(lo)).min(hi) as u8
}

/// Converts a player's season into an attribute profile for `position`.
///
/// Without stats the position's default profile is returned unchanged.
pub fn convert(
    stats: Option<&RawStats>,
    position: Position,
    modifiers: &ModifierTable,
) -> AttributeProfile {
    let Some(stats) = stats else {
        debug!(position = %position, "No stats available, using position defaults.");
        return position_default(position);
    };
    let line = StatLine::with_defaults(stats).clamped();
    trace!(?line, position = %position, "Converting stat line.");
    convert_line(&line, position, modifiers)
}

/// Applies the rating formulas to an already defaulted and clamped line.
///
/// Every rating is capped at 100, free throws included, so a 0.85 free-throw
/// shooter rates 100 rather than `⌊0.85·120⌋ = 102`.
pub fn convert_line(
    line: &StatLine,
    position: Position,
    modifiers: &ModifierTable,
) -> AttributeProfile {
    let mods = modifiers.get(position);
    let scoring = line.scoring_factor();

    let shooting_base = floor(line.field_goal_pct * 150.0) as f64;
    let shooting = ShootingAttributes {
        close: rating(floor(shooting_base * 1.2 * scoring), 40, MAX_RATING),
        mid: rating(floor(shooting_base * scoring), 40, MAX_RATING),
        long: rating(floor(line.three_point_pct * 200.0), 0, MAX_RATING),
        free_throw: rating(floor(line.free_throw_pct * 120.0), 0, MAX_RATING),
    };

    let driving = DrivingAttributes {
        layups: rating(
            i64::from(mods.layup_base).saturating_add(floor(scoring * 20.0)),
            mods.layup_base,
            MAX_RATING,
        ),
        dunking: rating(
            i64::from(mods.dunk_base).saturating_add(floor(scoring * 15.0)),
            mods.dunk_base,
            MAX_RATING,
        ),
    };

    let skills = SkillAttributes {
        speed: rating(
            i64::from(mods.base_speed).saturating_add(floor((line.assists + line.steals) * 3.0)),
            mods.min_speed,
            MAX_RATING,
        ),
        dribbling: rating(
            i64::from(mods.base_dribbling).saturating_add(floor(line.assists * 4.0)),
            mods.min_dribbling,
            MAX_RATING,
        ),
        passing: rating(
            floor(line.assists * mods.passing_multiplier),
            mods.min_passing,
            MAX_RATING,
        ),
        stamina: rating(floor(line.minutes * 2.5), 50, MAX_RATING),
    };

    let defense = DefenseAttributes {
        rebounding: rating(
            floor(line.rebounds * mods.rebound_multiplier),
            30,
            MAX_RATING,
        ),
        defense: rating(
            50i64.saturating_add(floor((line.steals + line.blocks) * 15.0)),
            40,
            MAX_RATING,
        ),
        blocking: rating(floor(line.blocks * 60.0), 20, MAX_RATING),
        stealing: rating(floor(line.steals * 50.0), 30, MAX_RATING),
    };

    AttributeProfile {
        shooting,
        driving,
        skills,
        defense,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star_point_guard() -> RawStats {
        RawStats {
            points_per_game: Some(30.0),
            assists_per_game: Some(10.0),
            rebounds_per_game: Some(5.0),
            steals_per_game: Some(2.0),
            blocks_per_game: Some(1.0),
            minutes_per_game: Some(36.0),
            field_goal_pct: Some(0.55),
            three_point_pct: Some(0.40),
            free_throw_pct: Some(0.85),
            ..Default::default()
        }
    }

    #[test]
    fn star_point_guard_converts_to_expected_profile() {
        let profile = convert(
            Some(&star_point_guard()),
            Position::PointGuard,
            &ModifierTable::default(),
        );

        assert_eq!(
            profile.shooting,
            ShootingAttributes {
                close: 100,
                mid: 100,
                long: 80,
                free_throw: 100,
            }
        );
        assert_eq!(
            profile.driving,
            DrivingAttributes {
                layups: 90,
                dunking: 60,
            }
        );
        assert_eq!(
            profile.skills,
            SkillAttributes {
                speed: 100,
                dribbling: 100,
                passing: 100,
                stamina: 90,
            }
        );
        assert_eq!(
            profile.defense,
            DefenseAttributes {
                rebounding: 40,
                defense: 95,
                blocking: 60,
                stealing: 100,
            }
        );
    }

    #[test]
    fn absent_stats_return_position_defaults_verbatim() {
        let table = ModifierTable::default();
        for position in Position::ALL {
            assert_eq!(convert(None, position, &table), position_default(position));
        }
    }

    #[test]
    fn with_defaults_fills_each_missing_field() {
        let line = StatLine::with_defaults(&RawStats::default());
        assert_eq!(line.points, 10.0);
        assert_eq!(line.assists, 2.0);
        assert_eq!(line.rebounds, 4.0);
        assert_eq!(line.steals, 1.0);
        assert_eq!(line.blocks, 0.5);
        assert_eq!(line.minutes, 20.0);
        assert_eq!(line.field_goal_pct, 0.45);
        assert_eq!(line.three_point_pct, 0.35);
        assert_eq!(line.free_throw_pct, 0.75);
    }

    #[test]
    fn with_defaults_floors_negative_counting_stats_without_clamping() {
        let stats = RawStats {
            points_per_game: Some(-4.0),
            steals_per_game: Some(-1.0),
            minutes_per_game: Some(55.0),
            field_goal_pct: Some(0.9),
            rebounds_per_game: Some(f64::NAN),
            ..Default::default()
        };
        let line = StatLine::with_defaults(&stats);
        assert_eq!(line.points, 0.0);
        assert_eq!(line.steals, 0.0);
        assert_eq!(line.rebounds, 4.0);
        assert_eq!(line.minutes, 55.0);
        assert_eq!(line.field_goal_pct, 0.9);
    }

    #[test]
    fn clamped_bounds_ratios_and_minutes_only() {
        let line = StatLine {
            points: 200.0,
            assists: 0.0,
            rebounds: 0.0,
            steals: 0.0,
            blocks: 0.0,
            minutes: 48.0,
            field_goal_pct: 0.1,
            three_point_pct: 0.9,
            free_throw_pct: 1.0,
        }
        .clamped();
        assert_eq!(line.points, 200.0);
        assert_eq!(line.minutes, 40.0);
        assert_eq!(line.field_goal_pct, 0.30);
        assert_eq!(line.three_point_pct, 0.50);
        assert_eq!(line.free_throw_pct, 0.95);
    }

    #[test]
    fn scoring_factor_is_capped_at_two() {
        let mut line = StatLine::with_defaults(&RawStats::default());
        assert!((line.scoring_factor() - 10.0 / 15.0).abs() < 1e-12);
        line.points = 1000.0;
        assert_eq!(line.scoring_factor(), 2.0);
    }

    #[test]
    fn zero_scoring_hits_shooting_and_driving_floors() {
        let stats = RawStats {
            points_per_game: Some(0.0),
            ..Default::default()
        };
        let profile = convert(Some(&stats), Position::Center, &ModifierTable::default());
        assert_eq!(profile.shooting.close, 40);
        assert_eq!(profile.shooting.mid, 40);
        assert_eq!(profile.driving.layups, 70);
        assert_eq!(profile.driving.dunking, 60);
    }

    #[test]
    fn bench_player_hits_defensive_floors() {
        let stats = RawStats {
            points_per_game: Some(1.0),
            assists_per_game: Some(0.0),
            rebounds_per_game: Some(0.0),
            steals_per_game: Some(0.0),
            blocks_per_game: Some(0.0),
            minutes_per_game: Some(2.0),
            ..Default::default()
        };
        let profile = convert(
            Some(&stats),
            Position::ShootingGuard,
            &ModifierTable::default(),
        );
        assert_eq!(profile.defense.stealing, 30);
        assert_eq!(profile.defense.blocking, 20);
        assert_eq!(profile.defense.rebounding, 30);
        assert_eq!(profile.defense.defense, 50);
        assert_eq!(profile.skills.passing, 45);
        assert_eq!(profile.skills.speed, 65);
        assert_eq!(profile.skills.dribbling, 60);
        assert_eq!(profile.skills.stamina, 50);
    }

    #[test]
    fn every_value_stays_within_bounds_for_extreme_inputs() {
        let table = ModifierTable::default();
        let magnitudes = [0.0, 0.5, 3.0, 15.0, 1000.0, f64::MAX, f64::INFINITY, -50.0];
        let ratios = [-1.0, 0.0, 0.42, 1.0, 7.0];
        for &count in &magnitudes {
            for &ratio in &ratios {
                let stats = RawStats {
                    points_per_game: Some(count),
                    assists_per_game: Some(count),
                    rebounds_per_game: Some(count),
                    steals_per_game: Some(count),
                    blocks_per_game: Some(count),
                    minutes_per_game: Some(count),
                    field_goal_pct: Some(ratio),
                    three_point_pct: Some(ratio),
                    free_throw_pct: Some(ratio),
                    ..Default::default()
                };
                for position in Position::ALL {
                    let profile = convert(Some(&stats), position, &table);
                    assert!(
                        profile.values().iter().all(|&v| v <= 100),
                        "out of range for count={count} ratio={ratio} at {position}: {profile:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn custom_modifiers_change_position_driven_attributes() {
        let mut pg = *ModifierTable::default().get(Position::PointGuard);
        pg.passing_multiplier = 5.0;
        pg.min_passing = 10;
        let table = ModifierTable::default().with(Position::PointGuard, pg);
        let stats = RawStats {
            assists_per_game: Some(4.0),
            ..Default::default()
        };
        let profile = convert(Some(&stats), Position::PointGuard, &table);
        assert_eq!(profile.skills.passing, 20);
    }
}

//! Position-relative normalization of raw stat sheets.
//!
//! Each fantasy-relevant position has a fixed schema of named metrics.
//! Ratio metrics degrade to 0.0 on missing inputs; raw pass-through
//! metrics are simply omitted when the provider never reported them.
//! Positions without a schema (kickers, offensive line, unknown labels)
//! normalize to an empty sheet.

use crate::metrics::{keys, ratio, MetricSet};
use league_model::stat_sheet::stat_names as raw;
use league_model::{Position, StatSheet};

/// Team-level context a single sheet cannot provide: offensive play
/// shares are measured against the starting quarterback's play count.
/// A missing starter or missing count degrades the dependent ratios to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TeamContext {
    pub qb_total_plays: Option<f64>,
}

impl TeamContext {
    pub fn new(qb_total_plays: Option<f64>) -> Self {
        Self { qb_total_plays }
    }
}

/// Normalize one player's raw sheet into their position's metric schema.
pub fn normalize(sheet: &StatSheet, position: &Position, context: TeamContext) -> MetricSet {
    match position {
        Position::Quarterback => quarterback_metrics(sheet),
        Position::RunningBack => running_back_metrics(sheet, context),
        Position::WideReceiver => wide_receiver_metrics(sheet, context),
        Position::TightEnd => tight_end_metrics(sheet, context),
        p if p.is_secondary() => secondary_metrics(sheet),
        p if p.is_defensive_front() => defensive_front_metrics(sheet),
        _ => MetricSet::new(),
    }
}

fn quarterback_metrics(sheet: &StatSheet) -> MetricSet {
    let mut metrics = MetricSet::new();
    let attempts = sheet.get(raw::PASSING_ATTEMPTS);
    let plays = sheet.get(raw::TOTAL_OFFENSIVE_PLAYS);
    let rushes = sheet.get(raw::RUSHING_ATTEMPTS);
    let games = sheet.get(raw::GAMES_PLAYED);

    metrics.insert_raw(keys::QBR, sheet.get(raw::QBR));
    metrics.insert(keys::PASSING_PCT, ratio(attempts, plays));
    metrics.insert(keys::COMPLETION_PCT, ratio(sheet.get(raw::COMPLETIONS), attempts));
    // the provider reports interception share in percent points
    metrics.insert(keys::INTERCEPTION_PCT, ratio(sheet.get(raw::INTERCEPTION_PCT), Some(100.0)));
    metrics.insert(keys::PASSING_YDS_PER_GAME, ratio(sheet.get(raw::PASSING_YARDS), games));
    metrics.insert(keys::RUSHING_PCT, ratio(rushes, plays));
    metrics.insert(keys::RUSH_YDS_PER_ATTEMPT, ratio(sheet.get(raw::RUSHING_YARDS), rushes));
    metrics.insert(keys::RUSH_YDS_PER_GAME, ratio(sheet.get(raw::RUSHING_YARDS), games));
    metrics.insert(keys::STUFFS_PCT, ratio(sheet.get(raw::STUFFS), rushes));
    metrics
}

fn running_back_metrics(sheet: &StatSheet, context: TeamContext) -> MetricSet {
    let mut metrics = MetricSet::new();
    let targets = sheet.get(raw::RECEIVING_TARGETS);
    let rushes = sheet.get(raw::RUSHING_ATTEMPTS);
    let receptions = sheet.get(raw::RECEPTIONS);
    let games = sheet.get(raw::GAMES_PLAYED);
    let touches = targets.unwrap_or(0.0) + rushes.unwrap_or(0.0);

    metrics.insert_raw(keys::RBR, sheet.get(raw::RB_RATING));
    metrics.insert(keys::PLAY_PCT, ratio(Some(touches), context.qb_total_plays));
    metrics.insert_raw(keys::YDS_PER_GAME, sheet.get(raw::YARDS_PER_GAME));
    metrics.insert(keys::RUSHING_YDS_PER_GAME, ratio(sheet.get(raw::RUSHING_YARDS), games));
    metrics.insert(keys::RUSHING_YDS_PER_ATTEMPT, ratio(sheet.get(raw::RUSHING_YARDS), rushes));
    metrics.insert(keys::RUSHING_FUMBLES_PCT, ratio(sheet.get(raw::RUSHING_FUMBLES), rushes));
    metrics.insert(keys::STUFFS_PCT, ratio(sheet.get(raw::STUFFS), rushes));
    metrics.insert(keys::RECEPTION_PCT, ratio(receptions, targets));
    metrics.insert(keys::YDS_PER_RECEPTION, ratio(sheet.get(raw::RECEIVING_YARDS), receptions));
    metrics
        .insert(keys::YDS_AFTER_CATCH, ratio(sheet.get(raw::RECEIVING_YARDS_AFTER_CATCH), receptions));
    metrics
}

fn wide_receiver_metrics(sheet: &StatSheet, context: TeamContext) -> MetricSet {
    let mut metrics = MetricSet::new();
    let targets = sheet.get(raw::RECEIVING_TARGETS);
    let receptions = sheet.get(raw::RECEPTIONS);

    metrics.insert_raw(keys::WRR, sheet.get(raw::WR_RATING));
    metrics.insert(keys::PLAY_PCT, ratio(targets, context.qb_total_plays));
    metrics.insert(keys::RECEPTION_PCT, ratio(receptions, targets));
    metrics.insert(keys::YDS_PER_RECEPTION, ratio(sheet.get(raw::RECEIVING_YARDS), receptions));
    metrics.insert(
        keys::RECEIVING_YDS_PER_GAME,
        ratio(sheet.get(raw::RECEIVING_YARDS), sheet.get(raw::GAMES_PLAYED)),
    );
    metrics.insert_raw(keys::YDS_PER_GAME, sheet.get(raw::YARDS_PER_GAME));
    metrics
        .insert(keys::YDS_AFTER_CATCH, ratio(sheet.get(raw::RECEIVING_YARDS_AFTER_CATCH), receptions));
    metrics
}

/// Tight ends carry the union of the running back and wide receiver
/// schemas; their play share counts targets and rushes alike.
fn tight_end_metrics(sheet: &StatSheet, context: TeamContext) -> MetricSet {
    let mut metrics = running_back_metrics(sheet, context);
    metrics.insert_raw(keys::WRR, sheet.get(raw::WR_RATING));
    metrics.insert(
        keys::RECEIVING_YDS_PER_GAME,
        ratio(sheet.get(raw::RECEIVING_YARDS), sheet.get(raw::GAMES_PLAYED)),
    );
    metrics
}

fn secondary_metrics(sheet: &StatSheet) -> MetricSet {
    let mut metrics = MetricSet::new();
    let games = sheet.get(raw::GAMES_PLAYED);

    metrics.insert(keys::FUMBLES, ratio(sheet.get(raw::FUMBLES_FORCED), games));
    metrics.insert(keys::TACKLES, ratio(sheet.get(raw::TOTAL_TACKLES), games));
    metrics.insert(keys::INTERCEPTIONS, ratio(sheet.get(raw::INTERCEPTIONS), games));
    metrics.insert(keys::PASSES_DEFENDED, ratio(sheet.get(raw::PASSES_DEFENDED), games));
    metrics
}

fn defensive_front_metrics(sheet: &StatSheet) -> MetricSet {
    let mut metrics = secondary_metrics(sheet);
    let games = sheet.get(raw::GAMES_PLAYED);

    metrics.insert(keys::SACKS, ratio(sheet.get(raw::SACKS), games));
    metrics.insert(keys::QB_HITS, ratio(sheet.get(raw::QB_HITS), games));
    metrics.insert(keys::TACKLES_FOR_LOSS, ratio(sheet.get(raw::TACKLES_FOR_LOSS), games));
    metrics.insert(keys::STUFFS, ratio(sheet.get(raw::STUFFS), games));
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quarterback_sheet() -> StatSheet {
        StatSheet::new()
            .with(raw::QBR, 61.5)
            .with(raw::PASSING_ATTEMPTS, 350.0)
            .with(raw::TOTAL_OFFENSIVE_PLAYS, 500.0)
            .with(raw::COMPLETIONS, 245.0)
            .with(raw::INTERCEPTION_PCT, 2.5)
            .with(raw::PASSING_YARDS, 2700.0)
            .with(raw::GAMES_PLAYED, 10.0)
            .with(raw::RUSHING_ATTEMPTS, 50.0)
            .with(raw::RUSHING_YARDS, 300.0)
            .with(raw::STUFFS, 5.0)
    }

    #[test]
    fn test_quarterback_schema() {
        let metrics =
            normalize(&quarterback_sheet(), &Position::Quarterback, TeamContext::default());

        assert_eq!(metrics.get(keys::QBR), Some(61.5));
        assert_eq!(metrics.get(keys::PASSING_PCT), Some(0.7));
        assert_eq!(metrics.get(keys::COMPLETION_PCT), Some(0.7));
        assert_eq!(metrics.get(keys::INTERCEPTION_PCT), Some(0.025));
        assert_eq!(metrics.get(keys::PASSING_YDS_PER_GAME), Some(270.0));
        assert_eq!(metrics.get(keys::RUSHING_PCT), Some(0.1));
        assert_eq!(metrics.get(keys::RUSH_YDS_PER_ATTEMPT), Some(6.0));
        assert_eq!(metrics.get(keys::RUSH_YDS_PER_GAME), Some(30.0));
        assert_eq!(metrics.get(keys::STUFFS_PCT), Some(0.1));
        assert_eq!(metrics.len(), 9);
    }

    #[test]
    fn test_quarterback_missing_fields_degrade_to_zero() {
        let sheet = StatSheet::new().with(raw::PASSING_YARDS, 800.0);
        let metrics = normalize(&sheet, &Position::Quarterback, TeamContext::default());

        // no QBR reported, so the pass-through metric is absent
        assert_eq!(metrics.get(keys::QBR), None);
        // every ratio metric is present but reads zero
        assert_eq!(metrics.get(keys::PASSING_YDS_PER_GAME), Some(0.0));
        assert_eq!(metrics.get(keys::COMPLETION_PCT), Some(0.0));
        assert_eq!(metrics.len(), 8);
    }

    #[test]
    fn test_running_back_play_share_counts_targets_and_rushes() {
        let sheet = StatSheet::new()
            .with(raw::RECEIVING_TARGETS, 40.0)
            .with(raw::RUSHING_ATTEMPTS, 160.0);
        let context = TeamContext::new(Some(500.0));
        let metrics = normalize(&sheet, &Position::RunningBack, context);

        assert_eq!(metrics.get(keys::PLAY_PCT), Some(0.4));
    }

    #[test]
    fn test_wide_receiver_play_share_counts_targets_only() {
        let sheet = StatSheet::new()
            .with(raw::RECEIVING_TARGETS, 40.0)
            .with(raw::RUSHING_ATTEMPTS, 160.0);
        let context = TeamContext::new(Some(500.0));
        let metrics = normalize(&sheet, &Position::WideReceiver, context);

        assert_eq!(metrics.get(keys::PLAY_PCT), Some(0.08));
    }

    #[test]
    fn test_play_share_without_team_context_reads_zero() {
        let sheet = StatSheet::new().with(raw::RECEIVING_TARGETS, 40.0);
        let metrics = normalize(&sheet, &Position::WideReceiver, TeamContext::default());

        assert_eq!(metrics.get(keys::PLAY_PCT), Some(0.0));
    }

    #[test]
    fn test_tight_end_carries_both_schemas() {
        let sheet = StatSheet::new()
            .with(raw::RB_RATING, 55.0)
            .with(raw::WR_RATING, 48.0)
            .with(raw::RECEIVING_YARDS, 300.0)
            .with(raw::GAMES_PLAYED, 10.0)
            .with(raw::RUSHING_YARDS, 40.0);
        let metrics = normalize(&sheet, &Position::TightEnd, TeamContext::default());

        assert_eq!(metrics.get(keys::RBR), Some(55.0));
        assert_eq!(metrics.get(keys::WRR), Some(48.0));
        assert_eq!(metrics.get(keys::RECEIVING_YDS_PER_GAME), Some(30.0));
        assert_eq!(metrics.get(keys::RUSHING_YDS_PER_GAME), Some(4.0));
    }

    #[test]
    fn test_defensive_schemas_are_per_game() {
        let sheet = StatSheet::new()
            .with(raw::TOTAL_TACKLES, 80.0)
            .with(raw::SACKS, 6.0)
            .with(raw::GAMES_PLAYED, 10.0);

        let secondary = normalize(&sheet, &Position::FreeSafety, TeamContext::default());
        assert_eq!(secondary.get(keys::TACKLES), Some(8.0));
        assert_eq!(secondary.get(keys::SACKS), None);
        assert_eq!(secondary.len(), 4);

        let front = normalize(&sheet, &Position::RightDefensiveEnd, TeamContext::default());
        assert_eq!(front.get(keys::TACKLES), Some(8.0));
        assert_eq!(front.get(keys::SACKS), Some(0.6));
        assert_eq!(front.len(), 8);
    }

    #[test]
    fn test_positions_without_schema_normalize_empty() {
        let sheet = quarterback_sheet();
        for position in [
            Position::PlaceKicker,
            Position::Center,
            Position::Other("punter".to_string()),
        ] {
            assert!(normalize(&sheet, &position, TeamContext::default()).is_empty());
        }
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let sheet = quarterback_sheet();
        let context = TeamContext::new(Some(500.0));
        let first = normalize(&sheet, &Position::Quarterback, context);
        let second = normalize(&sheet, &Position::Quarterback, context);
        assert_eq!(first, second);
    }
}

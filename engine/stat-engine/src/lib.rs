//! # Stat Engine
//!
//! Pure computation core of the weekly pipeline. Raw provider stat sheets
//! go in; normalized metric sheets, team composite indices, league
//! benchmarks, benchmark-beating athletes, week-over-week deltas and dense
//! team ranks come out.
//!
//! Everything here is synchronous and infallible by construction: missing
//! or partial league data degrades to zeros or absent entries, never to an
//! error. All maps are ordered so repeated runs over the same inputs
//! produce byte-identical artifacts.

pub mod aggregate;
pub mod benchmark;
pub mod delta;
pub mod elite;
pub mod metrics;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod summary;

pub use aggregate::{CompositeMetric, TeamAccumulator, TeamComposite};
pub use benchmark::{compute_benchmarks, quantile, BenchmarkTable};
pub use delta::{DeltaAccumulator, DeltaTotals};
pub use elite::{find_elite, EliteEntry, EliteTable};
pub use metrics::{ratio, MetricSet};
pub use normalize::{normalize, TeamContext};
pub use pipeline::{run_week, WeeklyInputs, WeeklyOutputs};
pub use rank::{rank_all, rank_teams, RankEntry, RankTable};
pub use report::{
    defense_performance, offensive_line_performance, DefensePerformance, OffensiveLineReport,
};
pub use summary::DeltaSummary;

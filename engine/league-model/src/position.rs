use serde::{Deserialize, Serialize};
use std::fmt;

/// A depth-chart position, parsed from the provider's display label.
///
/// Labels are normalized to lowercase on parse so provider casing never
/// leaks into map keys. Unrecognized labels (punter, long snapper, new
/// provider spellings) are preserved in `Other` instead of failing: they
/// carry no stat schema and drop out of downstream computation naturally.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    PlaceKicker,
    LeftTackle,
    LeftGuard,
    Center,
    RightGuard,
    RightTackle,
    LeftDefensiveEnd,
    LeftDefensiveTackle,
    RightDefensiveTackle,
    RightDefensiveEnd,
    NoseTackle,
    WeaksideLinebacker,
    MiddleLinebacker,
    StrongsideLinebacker,
    LeftInsideLinebacker,
    RightInsideLinebacker,
    LeftCornerback,
    RightCornerback,
    StrongSafety,
    FreeSafety,
    /// Any label without a stat schema, kept verbatim (lowercased).
    Other(String),
}

impl Position {
    /// The canonical lowercase label, as stored in depth charts.
    pub fn label(&self) -> &str {
        match self {
            Position::Quarterback => "quarterback",
            Position::RunningBack => "running back",
            Position::WideReceiver => "wide receiver",
            Position::TightEnd => "tight end",
            Position::PlaceKicker => "place kicker",
            Position::LeftTackle => "left tackle",
            Position::LeftGuard => "left guard",
            Position::Center => "center",
            Position::RightGuard => "right guard",
            Position::RightTackle => "right tackle",
            Position::LeftDefensiveEnd => "left defensive end",
            Position::LeftDefensiveTackle => "left defensive tackle",
            Position::RightDefensiveTackle => "right defensive tackle",
            Position::RightDefensiveEnd => "right defensive end",
            Position::NoseTackle => "nose tackle",
            Position::WeaksideLinebacker => "weakside linebacker",
            Position::MiddleLinebacker => "middle linebacker",
            Position::StrongsideLinebacker => "strongside linebacker",
            Position::LeftInsideLinebacker => "left inside linebacker",
            Position::RightInsideLinebacker => "right inside linebacker",
            Position::LeftCornerback => "left cornerback",
            Position::RightCornerback => "right cornerback",
            Position::StrongSafety => "strong safety",
            Position::FreeSafety => "free safety",
            Position::Other(label) => label,
        }
    }

    /// True for the lineup spots fantasy rosters draft (skill players and
    /// the place kicker).
    pub fn is_fantasy(&self) -> bool {
        matches!(
            self,
            Position::Quarterback
                | Position::RunningBack
                | Position::WideReceiver
                | Position::TightEnd
                | Position::PlaceKicker
        )
    }

    /// True for defensive backfield spots (cornerbacks and safeties).
    pub fn is_secondary(&self) -> bool {
        matches!(
            self,
            Position::LeftCornerback
                | Position::RightCornerback
                | Position::StrongSafety
                | Position::FreeSafety
        )
    }

    /// True for the defensive front seven (line and linebackers).
    pub fn is_defensive_front(&self) -> bool {
        matches!(
            self,
            Position::LeftDefensiveEnd
                | Position::LeftDefensiveTackle
                | Position::RightDefensiveTackle
                | Position::RightDefensiveEnd
                | Position::NoseTackle
                | Position::WeaksideLinebacker
                | Position::MiddleLinebacker
                | Position::StrongsideLinebacker
                | Position::LeftInsideLinebacker
                | Position::RightInsideLinebacker
        )
    }

    /// True for any defensive spot.
    pub fn is_defense(&self) -> bool {
        self.is_secondary() || self.is_defensive_front()
    }

    /// True for the five offensive line spots.
    pub fn is_offensive_line(&self) -> bool {
        matches!(
            self,
            Position::LeftTackle
                | Position::LeftGuard
                | Position::Center
                | Position::RightGuard
                | Position::RightTackle
        )
    }
}

impl From<&str> for Position {
    fn from(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "quarterback" => Position::Quarterback,
            "running back" => Position::RunningBack,
            "wide receiver" => Position::WideReceiver,
            "tight end" => Position::TightEnd,
            "place kicker" => Position::PlaceKicker,
            "left tackle" => Position::LeftTackle,
            "left guard" => Position::LeftGuard,
            "center" => Position::Center,
            "right guard" => Position::RightGuard,
            "right tackle" => Position::RightTackle,
            "left defensive end" => Position::LeftDefensiveEnd,
            "left defensive tackle" => Position::LeftDefensiveTackle,
            "right defensive tackle" => Position::RightDefensiveTackle,
            "right defensive end" => Position::RightDefensiveEnd,
            "nose tackle" => Position::NoseTackle,
            "weakside linebacker" => Position::WeaksideLinebacker,
            "middle linebacker" => Position::MiddleLinebacker,
            "strongside linebacker" => Position::StrongsideLinebacker,
            "left inside linebacker" => Position::LeftInsideLinebacker,
            "right inside linebacker" => Position::RightInsideLinebacker,
            "left cornerback" => Position::LeftCornerback,
            "right cornerback" => Position::RightCornerback,
            "strong safety" => Position::StrongSafety,
            "free safety" => Position::FreeSafety,
            other => Position::Other(other.to_string()),
        }
    }
}

impl From<String> for Position {
    fn from(label: String) -> Self {
        Position::from(label.as_str())
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.label().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

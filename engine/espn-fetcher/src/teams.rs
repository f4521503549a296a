//! ESPN team ids and the city labels used by the CBS schedule page.

/// ESPN's numeric id for every NFL team, keyed by full lowercase name.
///
/// The ids are mostly alphabetical but not contiguous; Baltimore and
/// Houston sit past the 28-32 gap left by relocated franchises.
pub const TEAM_IDS: [(&str, u32); 32] = [
    ("atlanta falcons", 1),
    ("buffalo bills", 2),
    ("chicago bears", 3),
    ("cincinnati bengals", 4),
    ("cleveland browns", 5),
    ("dallas cowboys", 6),
    ("denver broncos", 7),
    ("detroit lions", 8),
    ("green bay packers", 9),
    ("tennessee titans", 10),
    ("indianapolis colts", 11),
    ("kansas city chiefs", 12),
    ("las vegas raiders", 13),
    ("los angeles rams", 14),
    ("miami dolphins", 15),
    ("minnesota vikings", 16),
    ("new england patriots", 17),
    ("new orleans saints", 18),
    ("new york giants", 19),
    ("new york jets", 20),
    ("philadelphia eagles", 21),
    ("arizona cardinals", 22),
    ("pittsburgh steelers", 23),
    ("los angeles chargers", 24),
    ("san francisco 49ers", 25),
    ("seattle seahawks", 26),
    ("tampa bay buccaneers", 27),
    ("washington commanders", 28),
    ("carolina panthers", 29),
    ("jacksonville jaguars", 30),
    ("baltimore ravens", 33),
    ("houston texans", 34),
];

/// City labels as the CBS schedule page prints them, mapped to full names.
pub const CITY_TEAMS: [(&str, &str); 32] = [
    ("arizona", "arizona cardinals"),
    ("atlanta", "atlanta falcons"),
    ("baltimore", "baltimore ravens"),
    ("buffalo", "buffalo bills"),
    ("carolina", "carolina panthers"),
    ("chicago", "chicago bears"),
    ("cincinnati", "cincinnati bengals"),
    ("cleveland", "cleveland browns"),
    ("dallas", "dallas cowboys"),
    ("denver", "denver broncos"),
    ("detroit", "detroit lions"),
    ("green bay", "green bay packers"),
    ("houston", "houston texans"),
    ("indianapolis", "indianapolis colts"),
    ("jacksonville", "jacksonville jaguars"),
    ("kansas city", "kansas city chiefs"),
    ("l.a. chargers", "los angeles chargers"),
    ("l.a. rams", "los angeles rams"),
    ("las vegas", "las vegas raiders"),
    ("miami", "miami dolphins"),
    ("minnesota", "minnesota vikings"),
    ("n.y. giants", "new york giants"),
    ("n.y. jets", "new york jets"),
    ("new england", "new england patriots"),
    ("new orleans", "new orleans saints"),
    ("philadelphia", "philadelphia eagles"),
    ("pittsburgh", "pittsburgh steelers"),
    ("san francisco", "san francisco 49ers"),
    ("seattle", "seattle seahawks"),
    ("tampa bay", "tampa bay buccaneers"),
    ("tennessee", "tennessee titans"),
    ("washington", "washington commanders"),
];

/// Look up a team's ESPN id by its full lowercase name.
pub fn team_id(team: &str) -> Option<u32> {
    TEAM_IDS.iter().find(|(name, _)| *name == team).map(|(_, id)| *id)
}

/// Resolve a schedule-page city label to a full team name.
pub fn team_for_city(city: &str) -> Option<&'static str> {
    CITY_TEAMS.iter().find(|(label, _)| *label == city).map(|(_, team)| *team)
}

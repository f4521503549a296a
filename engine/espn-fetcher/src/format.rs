//! Formatters that turn raw provider payloads into league-model types.
//!
//! Everything here is pure: the fetch layer hands over parsed JSON or page
//! HTML and these functions reshape it. Malformed entries are skipped with
//! a warning rather than failing a whole pull.

use std::collections::BTreeMap;

use anyhow::Result;
use league_model::{
    DepthChart, DepthRank, DepthSlot, GameResult, PlayerDetails, PlayerId, PlayerStatus, Position,
    StatSheet, TeamName, TeamRecords,
};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// One athlete reference parsed out of a raw depth-chart payload, before
/// the athlete itself has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotRef {
    pub position: Position,
    pub rank: DepthRank,
    pub athlete_ref: String,
}

/// One scheduled game, away team listed first as on the schedule page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub away: String,
    pub home: String,
}

/// Games for the upcoming week, grouped by calendar day label.
pub type Schedule = BTreeMap<String, Vec<Matchup>>;

/// Flattens an athlete statistics payload into a stat sheet.
///
/// The payload nests stats under `splits.categories[].stats[]`; only the
/// `name`/`value` pairs survive, and non-numeric values are dropped.
pub fn stat_sheet(payload: &Value) -> StatSheet {
    let mut sheet = StatSheet::new();
    let categories = payload.pointer("/splits/categories").and_then(Value::as_array);
    for category in categories.into_iter().flatten() {
        let stats = category.get("stats").and_then(Value::as_array);
        for stat in stats.into_iter().flatten() {
            let name = stat.get("name").and_then(Value::as_str);
            let value = stat.get("value").and_then(Value::as_f64);
            if let (Some(name), Some(value)) = (name, value) {
                sheet.insert(name, value);
            }
        }
    }
    sheet
}

/// Lists every (position, rank, athlete `$ref`) slot in a raw team
/// depth-chart payload. Resolving the refs is the fetch layer's job.
pub fn depth_chart_slots(payload: &Value) -> Vec<SlotRef> {
    let mut slots = Vec::new();
    let items = payload.get("items").and_then(Value::as_array);
    for item in items.into_iter().flatten() {
        let positions = item.get("positions").and_then(Value::as_object);
        for group in positions.into_iter().flat_map(|groups| groups.values()) {
            let Some(position) = group.pointer("/position/displayName").and_then(Value::as_str)
            else {
                continue;
            };
            let athletes = group.get("athletes").and_then(Value::as_array);
            for athlete in athletes.into_iter().flatten() {
                let Some(rank) = athlete.get("rank").and_then(scalar_string) else {
                    continue;
                };
                let Some(athlete_ref) = athlete.pointer("/athlete/$ref").and_then(Value::as_str)
                else {
                    warn!("Depth chart slot {} {} has no athlete ref", position, rank);
                    continue;
                };
                slots.push(SlotRef {
                    position: Position::from(position),
                    rank,
                    athlete_ref: athlete_ref.to_string(),
                });
            }
        }
    }
    slots
}

/// Builds a depth-chart slot from a resolved athlete payload.
///
/// Athletes without a listed injury are healthy; otherwise the first
/// injury entry supplies the status and date.
pub fn depth_slot(payload: &Value) -> Option<DepthSlot> {
    let name = payload.get("displayName").and_then(Value::as_str)?.to_lowercase();
    let id = payload.get("id").and_then(scalar_string)?;
    let injury = payload.pointer("/injuries/0");
    let status = injury
        .and_then(|injury| injury.get("status"))
        .and_then(Value::as_str)
        .map(PlayerStatus::from)
        .unwrap_or(PlayerStatus::Healthy);
    let injury_date = injury
        .and_then(|injury| injury.get("date"))
        .and_then(Value::as_str)
        .map(str::to_string);
    let api_ref = payload.get("$ref").and_then(Value::as_str).map(str::to_string);
    Some(DepthSlot { id, name, status, injury_date, api_ref })
}

/// Flattens the full league depth chart into per-player details keyed by
/// athlete id. Slots with a non-numeric depth rank are skipped.
pub fn player_details(charts: &DepthChart) -> BTreeMap<PlayerId, PlayerDetails> {
    let mut details = BTreeMap::new();
    for (team, _) in charts.teams() {
        for (position, rank, slot) in charts.team_slots(team) {
            let Ok(depth) = rank.parse::<u32>() else {
                warn!("Skipping non-numeric depth rank {} for {}", rank, slot.name);
                continue;
            };
            details.insert(
                slot.id.clone(),
                PlayerDetails {
                    name: slot.name.clone(),
                    team: team.clone(),
                    position: position.clone(),
                    depth,
                    status: slot.status.clone(),
                    injury_date: slot.injury_date.clone(),
                    api_ref: slot.api_ref.clone(),
                },
            );
        }
    }
    details
}

/// Splits one competition payload into a result entry for each side.
///
/// Each competitor's entry names the other as the opponent, so a single
/// game produces two keys.
pub fn game_results(competition: &Value) -> BTreeMap<TeamName, GameResult> {
    let mut results = BTreeMap::new();
    let Some(competitors) = competition.get("competitors").and_then(Value::as_array) else {
        return results;
    };
    if competitors.len() != 2 {
        warn!("Expected two competitors in a game, found {}", competitors.len());
        return results;
    }
    for (side, competitor) in competitors.iter().enumerate() {
        let (Some(team), Some(opponent)) =
            (competitor_name(competitor), competitor_name(&competitors[1 - side]))
        else {
            warn!("Skipping a competitor without a team name");
            continue;
        };
        let records = competitor.get("records").and_then(Value::as_array);
        let linescores = competitor
            .get("linescores")
            .cloned()
            .map(|value| serde_json::from_value(value).unwrap_or_default())
            .unwrap_or_default();
        results.insert(
            team,
            GameResult {
                opponent,
                home_away: competitor
                    .get("homeAway")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                score: competitor.get("score").and_then(scalar_string).unwrap_or_default(),
                records: TeamRecords {
                    overall: record_summary(records, 0),
                    home: record_summary(records, 1),
                    away: record_summary(records, 2),
                },
                linescores,
            },
        );
    }
    results
}

/// Parses the CBS weekly schedule page into day-grouped matchups.
///
/// Each day is a `h4` header whose third text line is the date; the games
/// for that day live in the sibling table. Postseason pages print a seed
/// line above each team name, so only the last line of the cell is kept.
pub fn schedule(html: &str, postseason: bool) -> Result<Schedule> {
    let document = Html::parse_document(html);
    let day_selector =
        Selector::parse("h4").map_err(|e| anyhow::anyhow!("Failed to create day selector: {}", e))?;
    let row_selector = Selector::parse("tbody tr")
        .map_err(|e| anyhow::anyhow!("Failed to create row selector: {}", e))?;
    let team_selector = Selector::parse("span.TeamName")
        .map_err(|e| anyhow::anyhow!("Failed to create team selector: {}", e))?;

    let mut schedule = Schedule::new();
    for day in document.select(&day_selector) {
        let Some(date) = day_label(&day) else {
            continue;
        };
        let Some(section) = day.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        for row in section.select(&row_selector) {
            let teams: Vec<String> =
                row.select(&team_selector).map(|cell| team_label(&cell, postseason)).collect();
            if teams.len() < 2 {
                warn!("Schedule row on {} lists {} team names", date, teams.len());
                continue;
            }
            schedule
                .entry(date.clone())
                .or_default()
                .push(Matchup { away: teams[0].clone(), home: teams[1].clone() });
        }
    }
    Ok(schedule)
}

fn competitor_name(competitor: &Value) -> Option<TeamName> {
    competitor.pointer("/team/displayName").and_then(Value::as_str).map(|name| name.to_lowercase())
}

fn record_summary(records: Option<&Vec<Value>>, index: usize) -> String {
    records
        .and_then(|records| records.get(index))
        .and_then(|record| record.get("summary"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// The date line of a day header, e.g. "September 4, 2025".
fn day_label(day: &ElementRef) -> Option<String> {
    let text: String = day.text().collect();
    let line = text.split('\n').nth(2)?.trim().to_string();
    (!line.is_empty()).then_some(line)
}

fn team_label(cell: &ElementRef, postseason: bool) -> String {
    let text: String = cell.text().collect();
    let label = if postseason { text.rsplit('\n').next().unwrap_or("") } else { text.as_str() };
    label.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stat_sheet_flattens_categories() {
        let payload = json!({
            "splits": {
                "categories": [
                    {
                        "stats": [
                            { "name": "rushingYards", "value": 412.0 },
                            { "name": "gamesPlayed", "value": 10.0 },
                            { "name": "displayValue", "value": "412" }
                        ]
                    },
                    { "stats": [{ "name": "sacks", "value": 3.5 }] }
                ]
            }
        });

        let sheet = stat_sheet(&payload);
        assert_eq!(sheet.get("rushingYards"), Some(412.0));
        assert_eq!(sheet.get("gamesPlayed"), Some(10.0));
        assert_eq!(sheet.get("sacks"), Some(3.5));
        assert_eq!(sheet.get("displayValue"), None);
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn test_stat_sheet_of_empty_payload_is_empty() {
        assert!(stat_sheet(&json!({})).is_empty());
        assert!(stat_sheet(&json!({ "splits": { "categories": [] } })).is_empty());
    }

    #[test]
    fn test_depth_chart_slots_lists_every_rank() {
        let payload = json!({
            "items": [
                {
                    "positions": {
                        "qb": {
                            "position": { "displayName": "Quarterback" },
                            "athletes": [
                                { "rank": 1, "athlete": { "$ref": "http://example.invalid/athletes/1" } },
                                { "rank": 2, "athlete": { "$ref": "http://example.invalid/athletes/2" } }
                            ]
                        },
                        "c": {
                            "position": { "displayName": "Center" },
                            "athletes": [
                                { "rank": 1, "athlete": { "$ref": "http://example.invalid/athletes/3" } },
                                { "rank": 1 }
                            ]
                        }
                    }
                }
            ]
        });

        let slots = depth_chart_slots(&payload);
        assert_eq!(slots.len(), 3);
        assert!(slots.iter().any(|slot| {
            slot.position == Position::Quarterback
                && slot.rank == "2"
                && slot.athlete_ref.ends_with("/athletes/2")
        }));
        assert!(slots.iter().any(|slot| slot.position == Position::Center));
    }

    #[test]
    fn test_depth_slot_defaults_to_healthy() {
        let payload = json!({
            "$ref": "http://example.invalid/athletes/4362887",
            "id": 4362887,
            "displayName": "Justin Fields",
            "injuries": []
        });

        let slot = depth_slot(&payload).unwrap();
        assert_eq!(slot.id, "4362887");
        assert_eq!(slot.name, "justin fields");
        assert_eq!(slot.status, PlayerStatus::Healthy);
        assert_eq!(slot.injury_date, None);
        assert_eq!(slot.api_ref.as_deref(), Some("http://example.invalid/athletes/4362887"));
    }

    #[test]
    fn test_depth_slot_reads_first_injury() {
        let payload = json!({
            "id": "15864",
            "displayName": "Hurt Player",
            "injuries": [
                { "status": "Questionable", "date": "2025-09-02T15:04Z" },
                { "status": "Out", "date": "2024-11-20T19:00Z" }
            ]
        });

        let slot = depth_slot(&payload).unwrap();
        assert_eq!(slot.status, PlayerStatus::Questionable);
        assert_eq!(slot.injury_date.as_deref(), Some("2025-09-02T15:04Z"));
        assert_eq!(slot.api_ref, None);
    }

    #[test]
    fn test_depth_slot_requires_a_name() {
        assert!(depth_slot(&json!({ "id": "15864" })).is_none());
    }

    #[test]
    fn test_player_details_flattens_charts() {
        let mut charts = DepthChart::new();
        charts.insert_slot(
            "chicago bears",
            Position::Quarterback,
            "1",
            DepthSlot {
                id: "11".to_string(),
                name: "starter qb".to_string(),
                status: PlayerStatus::Healthy,
                injury_date: None,
                api_ref: None,
            },
        );
        charts.insert_slot(
            "detroit lions",
            Position::RunningBack,
            "2",
            DepthSlot {
                id: "21".to_string(),
                name: "backup rb".to_string(),
                status: PlayerStatus::Questionable,
                injury_date: Some("2025-09-02T15:04Z".to_string()),
                api_ref: Some("http://example.invalid/athletes/21".to_string()),
            },
        );
        charts.insert_slot(
            "detroit lions",
            Position::Center,
            "not-a-rank",
            DepthSlot {
                id: "31".to_string(),
                name: "odd center".to_string(),
                status: PlayerStatus::Healthy,
                injury_date: None,
                api_ref: None,
            },
        );

        let details = player_details(&charts);
        assert_eq!(details.len(), 2);

        let starter = details.get("11").unwrap();
        assert_eq!(starter.team, "chicago bears");
        assert_eq!(starter.position, Position::Quarterback);
        assert_eq!(starter.depth, 1);

        let backup = details.get("21").unwrap();
        assert_eq!(backup.depth, 2);
        assert_eq!(backup.status, PlayerStatus::Questionable);
        assert!(details.get("31").is_none());
    }

    #[test]
    fn test_game_results_pairs_opponents() {
        let competition = json!({
            "competitors": [
                {
                    "team": { "displayName": "Dallas Cowboys" },
                    "homeAway": "home",
                    "score": "24",
                    "records": [
                        { "summary": "8-2" },
                        { "summary": "5-0" },
                        { "summary": "3-2" }
                    ],
                    "linescores": [{ "value": 7.0 }, { "value": 17.0 }]
                },
                {
                    "team": { "displayName": "New York Giants" },
                    "homeAway": "away",
                    "score": "17",
                    "records": [
                        { "summary": "4-6" },
                        { "summary": "3-2" },
                        { "summary": "1-4" }
                    ],
                    "linescores": [{ "value": 14.0 }, { "value": 3.0 }]
                }
            ]
        });

        let results = game_results(&competition);
        assert_eq!(results.len(), 2);

        let dallas = results.get("dallas cowboys").unwrap();
        assert_eq!(dallas.opponent, "new york giants");
        assert_eq!(dallas.home_away, "home");
        assert_eq!(dallas.score, "24");
        assert_eq!(dallas.records.overall, "8-2");
        assert_eq!(dallas.records.home, "5-0");
        assert_eq!(dallas.records.away, "3-2");
        assert_eq!(dallas.linescores.len(), 2);

        let giants = results.get("new york giants").unwrap();
        assert_eq!(giants.opponent, "dallas cowboys");
        assert_eq!(giants.home_away, "away");
    }

    #[test]
    fn test_game_results_requires_two_competitors() {
        let lopsided = json!({
            "competitors": [{ "team": { "displayName": "Dallas Cowboys" } }]
        });
        assert!(game_results(&lopsided).is_empty());
        assert!(game_results(&json!({})).is_empty());
    }

    const SCHEDULE_PAGE: &str = "<html><body>\
<div class=\"TableBase\">\
<h4 class=\"TableBase-title\">\nThursday\nSeptember 4, 2025\n</h4>\
<div class=\"TableBase-tableWrapper\"><table><tbody>\
<tr><td><span class=\"TeamName\"><a href=\"#\">Dallas</a></span></td>\
<td><span class=\"TeamName\"><a href=\"#\">Philadelphia</a></span></td></tr>\
</tbody></table></div>\
</div>\
<div class=\"TableBase\">\
<h4 class=\"TableBase-title\">\nSunday\nSeptember 7, 2025\n</h4>\
<div class=\"TableBase-tableWrapper\"><table><tbody>\
<tr><td><span class=\"TeamName\"><a href=\"#\">N.Y. Giants</a></span></td>\
<td><span class=\"TeamName\"><a href=\"#\">Washington</a></span></td></tr>\
<tr><td><span class=\"TeamName\"><a href=\"#\">Tampa Bay</a></span></td>\
<td><span class=\"TeamName\"><a href=\"#\">Atlanta</a></span></td></tr>\
</tbody></table></div>\
</div>\
</body></html>";

    #[test]
    fn test_schedule_groups_games_by_day() {
        let schedule = schedule(SCHEDULE_PAGE, false).unwrap();
        assert_eq!(schedule.len(), 2);

        let thursday = schedule.get("September 4, 2025").unwrap();
        assert_eq!(
            thursday,
            &vec![Matchup { away: "dallas".to_string(), home: "philadelphia".to_string() }]
        );

        let sunday = schedule.get("September 7, 2025").unwrap();
        assert_eq!(sunday.len(), 2);
        assert_eq!(sunday[0].away, "n.y. giants");
        assert_eq!(sunday[1].home, "atlanta");
    }

    const POSTSEASON_PAGE: &str = "<html><body>\
<div class=\"TableBase\">\
<h4 class=\"TableBase-title\">\nSaturday\nJanuary 10, 2026\n</h4>\
<div class=\"TableBase-tableWrapper\"><table><tbody>\
<tr><td><span class=\"TeamName\">5\nBuffalo</span></td>\
<td><span class=\"TeamName\">4\nBaltimore</span></td></tr>\
</tbody></table></div>\
</div>\
</body></html>";

    #[test]
    fn test_postseason_schedule_drops_seed_lines() {
        let schedule = schedule(POSTSEASON_PAGE, true).unwrap();
        let saturday = schedule.get("January 10, 2026").unwrap();
        assert_eq!(
            saturday,
            &vec![Matchup { away: "buffalo".to_string(), home: "baltimore".to_string() }]
        );
    }
}

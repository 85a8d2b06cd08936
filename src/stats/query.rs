// The three query operations over an immutable dataset.
//
// Every operation is a pure function of its arguments and the dataset.
// Caller input never produces an error: unknown teams, players, metrics,
// and positions degrade to empty results, and approximate resolutions are
// surfaced as advisory warnings.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use crate::protocol::{Direction, LeaderboardArgs, PlayerStatsArgs, QueryResult, Scope};
use crate::stats::alias;
use crate::stats::dataset::{Dataset, Table};
use crate::stats::loader::{BattingRow, PitchingRow};
use crate::stats::position::{position_string, PositionQuery};

/// Hard cap on leaderboard size. Caller limits are clamped, not rejected.
pub const MAX_LIMIT: usize = 25;

// ---------------------------------------------------------------------------
// Row abstraction shared by both categories
// ---------------------------------------------------------------------------

trait StatRow {
    fn player_name(&self) -> &str;
    fn team(&self) -> &str;
    fn stat(&self, field: &str) -> Option<f64>;
    fn value(&self, field: &str) -> Value;
}

impl StatRow for BattingRow {
    fn player_name(&self) -> &str {
        &self.player_name
    }
    fn team(&self) -> &str {
        &self.team
    }
    fn stat(&self, field: &str) -> Option<f64> {
        BattingRow::stat(self, field)
    }
    fn value(&self, field: &str) -> Value {
        BattingRow::value(self, field)
    }
}

impl StatRow for PitchingRow {
    fn player_name(&self) -> &str {
        &self.player_name
    }
    fn team(&self) -> &str {
        &self.team
    }
    fn stat(&self, field: &str) -> Option<f64> {
        PitchingRow::stat(self, field)
    }
    fn value(&self, field: &str) -> Value {
        PitchingRow::value(self, field)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Stringify a JSON value for exact-match filter comparison. Whole numbers
/// print without a trailing `.0` so `34` and `34.0` compare equal.
fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn push_unique(warnings: &mut Vec<String>, note: Option<String>) {
    if let Some(note) = note {
        if !warnings.contains(&note) {
            warnings.push(note);
        }
    }
}

/// Stable sort by the resolved metric. Ties keep dataset iteration order,
/// which is deterministic (sorted teams, file order within a team).
fn sort_ranked<R: StatRow>(rows: &mut [&R], field: &str, direction: Direction) {
    rows.sort_by(|a, b| {
        let av = a.stat(field).unwrap_or(f64::NAN);
        let bv = b.stat(field).unwrap_or(f64::NAN);
        let ord = av.partial_cmp(&bv).unwrap_or(Ordering::Equal);
        match direction {
            Direction::Asc => ord,
            Direction::Desc => ord.reverse(),
        }
    });
}

fn matches_filters<R: StatRow>(row: &R, filters: Option<&Map<String, Value>>) -> bool {
    match filters {
        Some(filters) => filters
            .iter()
            .all(|(field, expected)| stringify(&row.value(field)) == stringify(expected)),
        None => true,
    }
}

fn project<R: StatRow>(
    rows: &[&R],
    player: &str,
    filters: Option<&Map<String, Value>>,
    columns: &[String],
    league: bool,
) -> Vec<Value> {
    let wanted = player.trim();
    rows.iter()
        .filter(|r| r.player_name().eq_ignore_ascii_case(wanted))
        .filter(|r| matches_filters(**r, filters))
        .map(|r| {
            let mut out = Map::new();
            if league {
                out.insert("team".to_string(), Value::from(r.team().to_string()));
            }
            for column in columns {
                out.insert(column.clone(), r.value(column));
            }
            Value::Object(out)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Single-player stat lookup.
///
/// Name matching is case-insensitive and exact; in league scope a player
/// with rows on several teams returns one row per team, each prefixed with
/// the team code. Projected columns keep the caller's order under their
/// canonical keys.
pub fn get_player_stats(
    dataset: &Dataset,
    default_team: &str,
    args: &PlayerStatsArgs,
) -> QueryResult {
    let mut warnings = Vec::new();
    let mut columns = Vec::new();
    for token in &args.columns {
        let resolution = alias::resolve(token);
        push_unique(&mut warnings, resolution.note);
        columns.push(resolution.field);
    }

    let league = args.scope == Scope::League;
    let team = args.team.as_deref().unwrap_or(default_team).to_uppercase();
    let filters = args.filters.as_ref();

    let rows = match args.table {
        Table::Batting => {
            let selected: Vec<&BattingRow> = if league {
                dataset.all_batting().collect()
            } else {
                dataset.batting_for(&team).iter().collect()
            };
            project(&selected, &args.player, filters, &columns, league)
        }
        Table::Pitching => {
            let selected: Vec<&PitchingRow> = if league {
                dataset.all_pitching().collect()
            } else {
                dataset.pitching_for(&team).iter().collect()
            };
            project(&selected, &args.player, filters, &columns, league)
        }
    };

    QueryResult::new(rows, warnings)
}

/// Top-N leaderboard with qualifying thresholds and optional position
/// filtering (batting only).
///
/// Rows with a null value for the resolved metric are discarded before
/// ranking; the alias note, if any, is the single warning.
pub fn leaderboard(dataset: &Dataset, default_team: &str, args: &LeaderboardArgs) -> QueryResult {
    let resolution = alias::resolve(&args.metric);
    let field = resolution.field;
    let warnings: Vec<String> = resolution.note.into_iter().collect();

    let limit = args.limit.clamp(1, MAX_LIMIT);
    let league = args.scope == Scope::League;
    let team = args.team.as_deref().unwrap_or(default_team).to_uppercase();
    let qualifier = args.qualifier.unwrap_or_default();

    let rows = match args.table {
        Table::Batting => {
            let mut candidates: Vec<&BattingRow> = if league {
                dataset.all_batting().collect()
            } else {
                dataset.batting_for(&team).iter().collect()
            };
            if let Some(min_pa) = qualifier.min_pa {
                candidates.retain(|r| r.pa.is_some_and(|pa| pa >= min_pa));
            }
            if let Some(position) = &args.position {
                let query = PositionQuery::parse(position);
                candidates.retain(|r| query.matches(&r.pos_raw));
            }
            candidates.retain(|r| StatRow::stat(*r, &field).is_some());
            sort_ranked(&mut candidates, &field, args.direction);
            candidates.truncate(limit);

            candidates
                .iter()
                .map(|r| {
                    let mut out = Map::new();
                    out.insert("team".to_string(), Value::from(r.team.clone()));
                    out.insert("player".to_string(), Value::from(r.player_name.clone()));
                    out.insert(field.clone(), r.value(&field));
                    out.insert("pa".to_string(), r.value("pa"));
                    out.insert("pos".to_string(), Value::from(position_string(&r.pos_raw)));
                    Value::Object(out)
                })
                .collect()
        }
        Table::Pitching => {
            let mut candidates: Vec<&PitchingRow> = if league {
                dataset.all_pitching().collect()
            } else {
                dataset.pitching_for(&team).iter().collect()
            };
            if let Some(min_ip) = qualifier.min_ip {
                candidates.retain(|r| r.ip.is_some_and(|ip| ip >= min_ip));
            }
            candidates.retain(|r| StatRow::stat(*r, &field).is_some());
            sort_ranked(&mut candidates, &field, args.direction);
            candidates.truncate(limit);

            candidates
                .iter()
                .map(|r| {
                    let mut out = Map::new();
                    out.insert("team".to_string(), Value::from(r.team.clone()));
                    out.insert("player".to_string(), Value::from(r.player_name.clone()));
                    out.insert(field.clone(), r.value(&field));
                    out.insert("ip".to_string(), r.value("ip"));
                    Value::Object(out)
                })
                .collect()
        }
    };

    QueryResult::new(rows, warnings)
}

/// Sorted union of team codes present in either category.
pub fn teams(dataset: &Dataset) -> QueryResult {
    let rows = dataset.teams().into_iter().map(Value::from).collect();
    QueryResult::new(rows, Vec::new())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Wire protocol for the tool server.
//
// Requests are JSON text frames: an optional correlation `id`, a `tool`
// tag, and an `arguments` object. Responses echo the `id` and carry either
// a `result` or an `error`. The argument structs here define the callable
// surface; defaults are applied during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stats::dataset::Table;

/// Whether a query runs against one team's rows or the whole league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Team,
    League,
}

/// Leaderboard sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[serde(alias = "ascending")]
    Asc,
    #[serde(alias = "descending")]
    Desc,
}

/// Minimum-volume threshold for leaderboard inclusion. `min_pa` applies to
/// batting queries, `min_ip` to pitching; the off-category field is
/// ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Qualifier {
    #[serde(default, alias = "minPA")]
    pub min_pa: Option<f64>,
    #[serde(default, alias = "minIP")]
    pub min_ip: Option<f64>,
}

/// Arguments for `get_player_stats`.
#[derive(Debug, Deserialize)]
pub struct PlayerStatsArgs {
    pub table: Table,
    #[serde(default)]
    pub scope: Scope,
    /// Team code; `None` falls back to the configured default team.
    #[serde(default)]
    pub team: Option<String>,
    /// Cleaned player name, matched case-insensitively and exactly.
    pub player: String,
    /// Columns to project, in the caller's order. Tokens go through the
    /// metric alias resolver.
    pub columns: Vec<String>,
    /// Optional exact-match row filters, compared stringified.
    #[serde(default)]
    pub filters: Option<Map<String, Value>>,
}

/// Arguments for `leaderboard`. `direction` and `limit` are required.
#[derive(Debug, Deserialize)]
pub struct LeaderboardArgs {
    pub table: Table,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub team: Option<String>,
    pub metric: String,
    pub direction: Direction,
    pub limit: usize,
    #[serde(default)]
    pub qualifier: Option<Qualifier>,
    /// Free-form position filter, batting only.
    #[serde(default)]
    pub position: Option<String>,
}

/// The three callable operations.
#[derive(Debug, Deserialize)]
#[serde(tag = "tool", content = "arguments", rename_all = "snake_case")]
pub enum ToolCall {
    GetPlayerStats(PlayerStatsArgs),
    Leaderboard(LeaderboardArgs),
    Teams,
}

/// A full request frame.
#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub call: ToolCall,
}

/// Rows plus any advisory warnings produced while resolving the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    pub rows: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl QueryResult {
    pub fn new(rows: Vec<Value>, warnings: Vec<String>) -> Self {
        QueryResult { rows, warnings }
    }
}

/// A full response frame: exactly one of `result` / `error` is present.
#[derive(Debug, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QueryResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok(id: Option<Value>, result: QueryResult) -> Self {
        Response {
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn err(id: Option<Value>, message: impl Into<String>) -> Self {
        Response {
            id,
            result: None,
            error: Some(message.into()),
        }
    }
}

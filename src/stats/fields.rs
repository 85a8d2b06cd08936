// Raw cell value normalization.
//
// Season exports are loose about value encoding: empty cells, name fields
// carrying handedness markers, and the baseball tenths-of-an-inning
// notation for innings pitched. Everything here fails soft — a value that
// cannot be parsed becomes `None`, never a panic or an error.

use serde::{Deserialize, Serialize};

/// Handedness annotation carried as a marker on the raw name field.
///
/// `*` marks a left-handed batter, `#` a switch hitter; no marker means the
/// export does not say. This is an annotation from the source data, not a
/// verified fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bats {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "S")]
    Switch,
}

/// Innings pitched in both canonical units.
///
/// `outs` is the exact integer count; `innings` is the display value,
/// `outs / 3` rounded to 3 decimal places. The two are always consistent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Innings {
    pub outs: i64,
    pub innings: f64,
}

/// Parse a numeric cell. Empty, unparsable, or non-finite values yield
/// `None` — never zero, NaN, or an error.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse a rate cell. The exports already store rates as decimal fractions
/// (e.g. `.249`), so this is the numeric parse with no rescaling.
pub fn parse_percentage(raw: &str) -> Option<f64> {
    parse_number(raw)
}

/// Split a raw name field into the cleaned display name and the handedness
/// marker it carried. `*` is checked before `#`; the two never co-occur in
/// the source data.
pub fn parse_player_markers(raw: &str) -> (String, Option<Bats>) {
    let bats = if raw.contains('*') {
        Some(Bats::Left)
    } else if raw.contains('#') {
        Some(Bats::Switch)
    } else {
        None
    };
    let name: String = raw.chars().filter(|c| *c != '*' && *c != '#').collect();
    (name.trim().to_string(), bats)
}

/// Parse the innings-pitched notation into exact outs.
///
/// The tenths digit is not decimal arithmetic: `.1` means 1 out (one third
/// of an inning), `.2` means 2 outs, `.0` or no fraction means 0 outs. A
/// tenths digit outside {0, 1, 2} is malformed input; rather than reject
/// the row, the fraction is rounded to the nearest third (clamped to at
/// most 2 outs).
pub fn parse_innings_pitched(raw: &str) -> Option<Innings> {
    let value = parse_number(raw)?;
    if value < 0.0 {
        return None;
    }
    let whole = value.trunc() as i64;
    let tenths = ((value - value.trunc()) * 10.0).round() as i64;
    let partial_outs = match tenths {
        0 => 0,
        1 => 1,
        2 => 2,
        t => (((t as f64) / 10.0) * 3.0).round().min(2.0) as i64,
    };
    let outs = whole * 3 + partial_outs;
    Some(Innings {
        outs,
        innings: innings_from_outs(outs),
    })
}

/// Decimal innings for display: `outs / 3` rounded to 3 places.
pub fn innings_from_outs(outs: i64) -> f64 {
    ((outs as f64) / 3.0 * 1000.0).round() / 1000.0
}

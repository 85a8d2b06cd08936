// Position parsing: row position strings and free-form position queries.
//
// Season exports encode positions played with scorekeeping numbering
// (1=P .. 9=RF, D=DH), `/`-separated, with an optional leading `*` marking
// the primary position, e.g. `*4/DH3`. Query input is free-form: an
// abbreviation, a full word, or a group term like "outfield".

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical fielding positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "P")]
    Pitcher,
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    FirstBase,
    #[serde(rename = "2B")]
    SecondBase,
    #[serde(rename = "3B")]
    ThirdBase,
    #[serde(rename = "SS")]
    ShortStop,
    #[serde(rename = "LF")]
    LeftField,
    #[serde(rename = "CF")]
    CenterField,
    #[serde(rename = "RF")]
    RightField,
    #[serde(rename = "DH")]
    DesignatedHitter,
    #[serde(rename = "UT")]
    Utility,
}

/// The four infield positions, used by the utility heuristic and the
/// "infield" group query.
pub const INFIELD: [Position; 4] = [
    Position::FirstBase,
    Position::SecondBase,
    Position::ThirdBase,
    Position::ShortStop,
];

/// The three outfield positions, used by the "outfield" group query.
pub const OUTFIELD: [Position; 3] =
    [Position::LeftField, Position::CenterField, Position::RightField];

impl Position {
    /// Parse a canonical abbreviation ("C", "1B", "SS", ...).
    pub fn from_abbrev(s: &str) -> Option<Self> {
        match s {
            "P" => Some(Position::Pitcher),
            "C" => Some(Position::Catcher),
            "1B" => Some(Position::FirstBase),
            "2B" => Some(Position::SecondBase),
            "3B" => Some(Position::ThirdBase),
            "SS" => Some(Position::ShortStop),
            "LF" => Some(Position::LeftField),
            "CF" => Some(Position::CenterField),
            "RF" => Some(Position::RightField),
            "DH" => Some(Position::DesignatedHitter),
            "UT" => Some(Position::Utility),
            _ => None,
        }
    }

    /// Scorekeeping position code (1=P .. 9=RF).
    fn from_digit(d: char) -> Option<Self> {
        match d {
            '1' => Some(Position::Pitcher),
            '2' => Some(Position::Catcher),
            '3' => Some(Position::FirstBase),
            '4' => Some(Position::SecondBase),
            '5' => Some(Position::ThirdBase),
            '6' => Some(Position::ShortStop),
            '7' => Some(Position::LeftField),
            '8' => Some(Position::CenterField),
            '9' => Some(Position::RightField),
            _ => None,
        }
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::ShortStop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
            Position::Utility => "UT",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// Parse a row's raw position string into the set of canonical positions it
/// covers.
///
/// Digits map per scorekeeping numbering, `D` contributes DH, a literal
/// `UT` substring contributes UT. `*` (primary marker), `/`, `H` (pinch
/// hitter), and anything else unknown are ignored — never an error.
pub fn parse_row_positions(pos_raw: &str) -> BTreeSet<Position> {
    let mut positions = BTreeSet::new();
    let upper = pos_raw.to_uppercase();
    for c in upper.chars() {
        if let Some(pos) = Position::from_digit(c) {
            positions.insert(pos);
        } else if c == 'D' {
            positions.insert(Position::DesignatedHitter);
        }
    }
    if upper.contains("UT") {
        positions.insert(Position::Utility);
    }
    positions
}

/// Join a row's parsed positions into a display string, e.g. `"2B/3B/DH"`.
pub fn position_string(pos_raw: &str) -> String {
    parse_row_positions(pos_raw)
        .iter()
        .map(Position::abbrev)
        .collect::<Vec<_>>()
        .join("/")
}

/// A parsed free-form position query.
///
/// An empty target set with `utility` unset is a no-op filter that matches
/// every row, not a filter that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionQuery {
    pub targets: BTreeSet<Position>,
    /// Utility-predicate mode: matches rows whose raw position string
    /// literally contains "UT", or whose parsed positions include at least
    /// two distinct infield positions. The second clause is a heuristic for
    /// rotational infielders, not a verified utility designation.
    pub utility: bool,
}

impl PositionQuery {
    /// Parse a free-form query term (abbreviation, full word, or phrase).
    /// Case- and space-insensitive. Unrecognized input is treated as an
    /// already-canonical abbreviation; if that fails too, the query is a
    /// no-op filter.
    pub fn parse(term: &str) -> Self {
        let normalized: String = term
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        let single = |pos: Position| PositionQuery {
            targets: BTreeSet::from([pos]),
            utility: false,
        };

        match normalized.as_str() {
            "p" | "pitcher" => single(Position::Pitcher),
            "c" | "catcher" => single(Position::Catcher),
            "1b" | "first" | "firstbase" | "firstbaseman" => single(Position::FirstBase),
            "2b" | "second" | "secondbase" | "secondbaseman" => single(Position::SecondBase),
            "3b" | "third" | "thirdbase" | "thirdbaseman" => single(Position::ThirdBase),
            "ss" | "short" | "shortstop" => single(Position::ShortStop),
            "lf" | "leftfield" | "leftfielder" => single(Position::LeftField),
            "cf" | "centerfield" | "centerfielder" => single(Position::CenterField),
            "rf" | "rightfield" | "rightfielder" => single(Position::RightField),
            "dh" | "designatedhitter" => single(Position::DesignatedHitter),
            "of" | "outfield" | "outfielder" | "outfielders" => PositionQuery {
                targets: OUTFIELD.into_iter().collect(),
                utility: false,
            },
            "if" | "infield" | "infielder" | "infielders" => PositionQuery {
                targets: INFIELD.into_iter().collect(),
                utility: false,
            },
            "ut" | "util" | "utility" | "utilityman" | "utilityplayer" => PositionQuery {
                targets: BTreeSet::new(),
                utility: true,
            },
            _ => {
                // Assume the caller passed a canonical abbreviation.
                let targets = Position::from_abbrev(term.trim().to_uppercase().as_str())
                    .into_iter()
                    .collect();
                PositionQuery { targets, utility: false }
            }
        }
    }

    /// Whether a row with the given raw position string matches this query.
    pub fn matches(&self, pos_raw: &str) -> bool {
        let parsed = parse_row_positions(pos_raw);
        if self.utility {
            let infield_count = INFIELD.iter().filter(|p| parsed.contains(p)).count();
            return pos_raw.to_uppercase().contains("UT") || infield_count >= 2;
        }
        if self.targets.is_empty() {
            return true;
        }
        self.targets.iter().any(|p| parsed.contains(p))
    }
}

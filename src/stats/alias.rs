// Metric token resolution.
//
// Query input for a metric can be an original export header ("OPS+"), a
// lowercase or punctuated variant ("ops+"), a natural-language phrase
// ("most valuable"), or an already-canonical field name ("ops_plus").
// Resolution is total: every token resolves to exactly one field name,
// with an advisory note attached when the mapping is approximate.

/// Result of resolving a metric token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical field name to look up on rows.
    pub field: String,
    /// Human-readable advisory when the resolution is a substitution or a
    /// proxy. Surfaced to the caller as a non-fatal warning.
    pub note: Option<String>,
}

/// One alias table entry: token, canonical field, optional advisory note.
///
/// The table is a const slice scanned linearly — small enough that lookup
/// cost is irrelevant, and iteration order is fully deterministic.
type Entry = (&'static str, &'static str, Option<&'static str>);

const NOTE_BEST: &str =
    "overall-value request interpreted as WAR (wins above replacement), the closest \
     overall-value metric in this dataset";
const NOTE_WRC: &str =
    "wRC+ is not present in the source data; using OPS+ as the closest available \
     league- and park-adjusted proxy";
const NOTE_WOBA: &str =
    "wOBA is not present in the source data; using OBP as a related but not identical proxy";

const ALIASES: &[Entry] = &[
    // Export headers, batting.
    ("Age", "age", None),
    ("G", "g", None),
    ("PA", "pa", None),
    ("AB", "ab", None),
    ("R", "r", None),
    ("H", "h", None),
    ("2B", "doubles", None),
    ("3B", "triples", None),
    ("HR", "hr", None),
    ("RBI", "rbi", None),
    ("SB", "sb", None),
    ("CS", "cs", None),
    ("BB", "bb", None),
    ("SO", "so", None),
    ("BA", "ba", None),
    ("AVG", "ba", None),
    ("OBP", "obp", None),
    ("SLG", "slg", None),
    ("OPS", "ops", None),
    ("OPS+", "ops_plus", None),
    ("TB", "tb", None),
    ("GDP", "gdp", None),
    ("HBP", "hbp", None),
    ("SH", "sh", None),
    ("SF", "sf", None),
    ("IBB", "ibb", None),
    ("WAR", "war", None),
    // Export headers, pitching.
    ("W", "w", None),
    ("L", "l", None),
    ("W-L%", "wl_pct", None),
    ("ERA", "era", None),
    ("GS", "gs", None),
    ("GF", "gf", None),
    ("CG", "cg", None),
    ("SHO", "sho", None),
    ("SV", "sv", None),
    ("IP", "ip", None),
    ("ER", "er", None),
    ("BK", "bk", None),
    ("WP", "wp", None),
    ("BF", "bf", None),
    ("ERA+", "era_plus", None),
    ("FIP", "fip", None),
    ("WHIP", "whip", None),
    ("H9", "h9", None),
    ("HR9", "hr9", None),
    ("BB9", "bb9", None),
    ("SO9", "so9", None),
    ("SO/W", "so_w", None),
    // Common variants.
    ("K", "so", None),
    ("K/9", "so9", None),
    ("BB/9", "bb9", None),
    ("H/9", "h9", None),
    ("HR/9", "hr9", None),
    ("K/BB", "so_w", None),
    // Natural-language metric names.
    ("home runs", "hr", None),
    ("homers", "hr", None),
    ("batting average", "ba", None),
    ("average", "ba", None),
    ("on base percentage", "obp", None),
    ("slugging", "slg", None),
    ("stolen bases", "sb", None),
    ("steals", "sb", None),
    ("strikeouts", "so", None),
    ("walks", "bb", None),
    ("runs", "r", None),
    ("runs batted in", "rbi", None),
    ("wins", "w", None),
    ("losses", "l", None),
    ("saves", "sv", None),
    ("innings pitched", "ip", None),
    ("plate appearances", "pa", None),
    // Overall-value phrases: these are substitutions, so they carry a note.
    ("the best", "war", Some(NOTE_BEST)),
    ("best", "war", Some(NOTE_BEST)),
    ("best player", "war", Some(NOTE_BEST)),
    ("most valuable", "war", Some(NOTE_BEST)),
    ("mvp", "war", Some(NOTE_BEST)),
    ("wins above replacement", "war", Some(NOTE_BEST)),
    ("overall value", "war", Some(NOTE_BEST)),
    // Approximation proxies for metrics the source dataset does not carry.
    ("wRC+", "ops_plus", Some(NOTE_WRC)),
    ("wOBA", "obp", Some(NOTE_WOBA)),
];

/// Resolve a metric token to a canonical field name.
///
/// Lookup order: exact match, then uppercase-normalized match, else the
/// token passes through unchanged (assumed already canonical). Exact-first
/// keeps case-significant tokens like `"SO"` from being shadowed by
/// case-folded variants.
pub fn resolve(token: &str) -> Resolution {
    let trimmed = token.trim();

    for (alias, field, note) in ALIASES {
        if *alias == trimmed {
            return Resolution {
                field: (*field).to_string(),
                note: note.map(String::from),
            };
        }
    }

    let upper = trimmed.to_uppercase();
    for (alias, field, note) in ALIASES {
        if alias.to_uppercase() == upper {
            return Resolution {
                field: (*field).to_string(),
                note: note.map(String::from),
            };
        }
    }

    Resolution {
        field: trimmed.to_string(),
        note: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_header_match() {
        assert_eq!(resolve("OPS+").field, "ops_plus");
        assert_eq!(resolve("OPS+").note, None);
        assert_eq!(resolve("W-L%").field, "wl_pct");
        assert_eq!(resolve("2B").field, "doubles");
    }

    #[test]
    fn uppercase_normalized_fallback() {
        assert_eq!(resolve("ops+").field, "ops_plus");
        assert_eq!(resolve("era+").field, "era_plus");
        assert_eq!(resolve("Avg").field, "ba");
        assert_eq!(resolve("so/w").field, "so_w");
    }

    #[test]
    fn natural_language_phrases() {
        assert_eq!(resolve("home runs").field, "hr");
        assert_eq!(resolve("Batting Average").field, "ba");
        assert_eq!(resolve("Stolen Bases").field, "sb");
    }

    #[test]
    fn value_phrases_resolve_to_war_with_note() {
        for phrase in ["the best", "most valuable", "wins above replacement", "MVP"] {
            let r = resolve(phrase);
            assert_eq!(r.field, "war", "phrase {phrase:?}");
            assert!(r.note.is_some(), "phrase {phrase:?} should carry a note");
        }
    }

    #[test]
    fn proxy_aliases_always_carry_note() {
        let r = resolve("wRC+");
        assert_eq!(r.field, "ops_plus");
        assert!(r.note.as_deref().unwrap_or("").contains("proxy"));

        let r = resolve("woba");
        assert_eq!(r.field, "obp");
        assert!(r.note.is_some());
    }

    #[test]
    fn unknown_tokens_pass_through() {
        assert_eq!(resolve("ops_plus").field, "ops_plus");
        assert_eq!(resolve("xyzzy").field, "xyzzy");
        assert_eq!(resolve("xyzzy").note, None);
    }

    // Resolution is total: no input throws or fails.
    #[test]
    fn resolution_is_total() {
        for token in ["", "   ", "éçâ", "1234", "OPS+\n"] {
            let r = resolve(token);
            assert!(!r.field.is_empty() || token.trim().is_empty());
        }
    }
}

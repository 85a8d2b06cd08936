// Season CSV loading and normalization.
//
// Reads one per-team CSV per stat category, remaps the export's header
// tokens to canonical field names, normalizes every cell through the field
// parsers, and drops the per-team aggregate "Team Totals" rows. Readers are
// tolerant: ragged rows, unknown headers, and unparsable cells degrade to
// absent values rather than errors.

use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use super::fields::{
    parse_innings_pitched, parse_number, parse_percentage, parse_player_markers, Bats,
};

// ---------------------------------------------------------------------------
// Public row types
// ---------------------------------------------------------------------------

/// One batting line: a player's season with one team.
///
/// Every statistical field is nullable — an absent or unparsable source
/// cell is `None`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingRow {
    pub player_name: String,
    pub player_id: Option<String>,
    pub team: String,
    pub bats: Option<Bats>,
    /// Original position token string, e.g. `"*4/DH3"`.
    pub pos_raw: String,
    pub age: Option<f64>,
    pub g: Option<f64>,
    pub pa: Option<f64>,
    pub ab: Option<f64>,
    pub r: Option<f64>,
    pub h: Option<f64>,
    pub doubles: Option<f64>,
    pub triples: Option<f64>,
    pub hr: Option<f64>,
    pub rbi: Option<f64>,
    pub sb: Option<f64>,
    pub cs: Option<f64>,
    pub bb: Option<f64>,
    pub so: Option<f64>,
    pub ba: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub ops_plus: Option<f64>,
    pub tb: Option<f64>,
    pub gdp: Option<f64>,
    pub hbp: Option<f64>,
    pub sh: Option<f64>,
    pub sf: Option<f64>,
    pub ibb: Option<f64>,
    pub war: Option<f64>,
}

/// One pitching line: a pitcher's season with one team.
///
/// `ip_outs` is the canonical unit (exact integer outs); `ip` is the
/// derived decimal display value, always `ip_outs / 3` rounded to 3
/// places.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchingRow {
    pub player_name: String,
    pub player_id: Option<String>,
    pub team: String,
    pub bats: Option<Bats>,
    pub age: Option<f64>,
    pub w: Option<f64>,
    pub l: Option<f64>,
    pub wl_pct: Option<f64>,
    pub era: Option<f64>,
    pub g: Option<f64>,
    pub gs: Option<f64>,
    pub gf: Option<f64>,
    pub cg: Option<f64>,
    pub sho: Option<f64>,
    pub sv: Option<f64>,
    pub ip_outs: Option<i64>,
    pub ip: Option<f64>,
    pub h: Option<f64>,
    pub r: Option<f64>,
    pub er: Option<f64>,
    pub hr: Option<f64>,
    pub bb: Option<f64>,
    pub ibb: Option<f64>,
    pub so: Option<f64>,
    pub hbp: Option<f64>,
    pub bk: Option<f64>,
    pub wp: Option<f64>,
    pub bf: Option<f64>,
    pub era_plus: Option<f64>,
    pub fip: Option<f64>,
    pub whip: Option<f64>,
    pub h9: Option<f64>,
    pub hr9: Option<f64>,
    pub bb9: Option<f64>,
    pub so9: Option<f64>,
    pub so_w: Option<f64>,
    pub war: Option<f64>,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Header remapping
// ---------------------------------------------------------------------------

/// The export's "no id" sentinel for the player-id column.
const MISSING_ID_SENTINEL: &str = "-9999";

/// Source header token → canonical field name, batting exports.
const BATTING_HEADERS: &[(&str, &str)] = &[
    ("Rk", "rk"),
    ("Player", "player_name"),
    ("Name", "player_name"),
    ("Age", "age"),
    ("Pos", "pos"),
    ("G", "g"),
    ("PA", "pa"),
    ("AB", "ab"),
    ("R", "r"),
    ("H", "h"),
    ("2B", "doubles"),
    ("3B", "triples"),
    ("HR", "hr"),
    ("RBI", "rbi"),
    ("SB", "sb"),
    ("CS", "cs"),
    ("BB", "bb"),
    ("SO", "so"),
    ("BA", "ba"),
    ("OBP", "obp"),
    ("SLG", "slg"),
    ("OPS", "ops"),
    ("OPS+", "ops_plus"),
    ("TB", "tb"),
    ("GDP", "gdp"),
    ("HBP", "hbp"),
    ("SH", "sh"),
    ("SF", "sf"),
    ("IBB", "ibb"),
    ("WAR", "war"),
    ("Name-additional", "player_id"),
];

/// Source header token → canonical field name, pitching exports.
const PITCHING_HEADERS: &[(&str, &str)] = &[
    ("Rk", "rk"),
    ("Player", "player_name"),
    ("Name", "player_name"),
    ("Age", "age"),
    ("Pos", "pos"),
    ("W", "w"),
    ("L", "l"),
    ("W-L%", "wl_pct"),
    ("ERA", "era"),
    ("G", "g"),
    ("GS", "gs"),
    ("GF", "gf"),
    ("CG", "cg"),
    ("SHO", "sho"),
    ("SV", "sv"),
    ("IP", "ip"),
    ("H", "h"),
    ("R", "r"),
    ("ER", "er"),
    ("HR", "hr"),
    ("BB", "bb"),
    ("IBB", "ibb"),
    ("SO", "so"),
    ("HBP", "hbp"),
    ("BK", "bk"),
    ("WP", "wp"),
    ("BF", "bf"),
    ("ERA+", "era_plus"),
    ("FIP", "fip"),
    ("WHIP", "whip"),
    ("H9", "h9"),
    ("HR9", "hr9"),
    ("BB9", "bb9"),
    ("SO9", "so9"),
    ("SO/W", "so_w"),
    ("WAR", "war"),
    ("Name-additional", "player_id"),
];

/// Remap one header token. Unknown tokens pass through unchanged so extra
/// export columns are tolerated.
fn remap_header(map: &[(&str, &str)], token: &str) -> String {
    let trimmed = token.trim();
    for (src, canonical) in map {
        if *src == trimmed {
            return (*canonical).to_string();
        }
    }
    debug!("unrecognized header column '{trimmed}' passed through");
    trimmed.to_string()
}

/// Aggregate rows carry "Team Totals" (in some exports "Team Total") in the
/// name field; they are not player rows and never enter the dataset.
fn is_team_total(raw_name: &str) -> bool {
    raw_name.to_lowercase().contains("team total")
}

/// One parsed record with canonical-name cell access.
struct Cells<'a> {
    headers: &'a [String],
    record: &'a csv::StringRecord,
}

impl<'a> Cells<'a> {
    /// Cell value for a canonical field name. Missing trailing cells in
    /// ragged rows read as absent.
    fn get(&self, field: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == field)?;
        self.record.get(idx)
    }

    fn num(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(parse_number)
    }

    fn rate(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(parse_percentage)
    }

    fn player_id(&self) -> Option<String> {
        let raw = self.get("player_id")?.trim();
        if raw.is_empty() || raw == MISSING_ID_SENTINEL {
            None
        } else {
            Some(raw.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Reader-based loaders (private, enable testing without temp files)
// ---------------------------------------------------------------------------

pub(crate) fn load_batting_from_reader<R: Read>(
    rdr: R,
    team: &str,
) -> Result<Vec<BattingRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| remap_header(BATTING_HEADERS, h))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping malformed batting row for {team}: {e}");
                continue;
            }
        };
        let cells = Cells {
            headers: &headers,
            record: &record,
        };

        let raw_name = cells.get("player_name").unwrap_or("").to_string();
        if raw_name.trim().is_empty() {
            continue;
        }
        if is_team_total(&raw_name) {
            continue;
        }
        let (player_name, bats) = parse_player_markers(&raw_name);

        rows.push(BattingRow {
            player_name,
            player_id: cells.player_id(),
            team: team.to_string(),
            bats,
            pos_raw: cells.get("pos").unwrap_or("").trim().to_string(),
            age: cells.num("age"),
            g: cells.num("g"),
            pa: cells.num("pa"),
            ab: cells.num("ab"),
            r: cells.num("r"),
            h: cells.num("h"),
            doubles: cells.num("doubles"),
            triples: cells.num("triples"),
            hr: cells.num("hr"),
            rbi: cells.num("rbi"),
            sb: cells.num("sb"),
            cs: cells.num("cs"),
            bb: cells.num("bb"),
            so: cells.num("so"),
            ba: cells.rate("ba"),
            obp: cells.rate("obp"),
            slg: cells.rate("slg"),
            ops: cells.rate("ops"),
            ops_plus: cells.num("ops_plus"),
            tb: cells.num("tb"),
            gdp: cells.num("gdp"),
            hbp: cells.num("hbp"),
            sh: cells.num("sh"),
            sf: cells.num("sf"),
            ibb: cells.num("ibb"),
            war: cells.num("war"),
        });
    }
    Ok(rows)
}

pub(crate) fn load_pitching_from_reader<R: Read>(
    rdr: R,
    team: &str,
) -> Result<Vec<PitchingRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| remap_header(PITCHING_HEADERS, h))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping malformed pitching row for {team}: {e}");
                continue;
            }
        };
        let cells = Cells {
            headers: &headers,
            record: &record,
        };

        let raw_name = cells.get("player_name").unwrap_or("").to_string();
        if raw_name.trim().is_empty() {
            continue;
        }
        if is_team_total(&raw_name) {
            continue;
        }
        let (player_name, bats) = parse_player_markers(&raw_name);

        let innings = cells.get("ip").and_then(parse_innings_pitched);

        rows.push(PitchingRow {
            player_name,
            player_id: cells.player_id(),
            team: team.to_string(),
            bats,
            age: cells.num("age"),
            w: cells.num("w"),
            l: cells.num("l"),
            wl_pct: cells.rate("wl_pct"),
            era: cells.num("era"),
            g: cells.num("g"),
            gs: cells.num("gs"),
            gf: cells.num("gf"),
            cg: cells.num("cg"),
            sho: cells.num("sho"),
            sv: cells.num("sv"),
            ip_outs: innings.map(|i| i.outs),
            ip: innings.map(|i| i.innings),
            h: cells.num("h"),
            r: cells.num("r"),
            er: cells.num("er"),
            hr: cells.num("hr"),
            bb: cells.num("bb"),
            ibb: cells.num("ibb"),
            so: cells.num("so"),
            hbp: cells.num("hbp"),
            bk: cells.num("bk"),
            wp: cells.num("wp"),
            bf: cells.num("bf"),
            era_plus: cells.num("era_plus"),
            fip: cells.num("fip"),
            whip: cells.num("whip"),
            h9: cells.num("h9"),
            hr9: cells.num("hr9"),
            bb9: cells.num("bb9"),
            so9: cells.num("so9"),
            so_w: cells.num("so_w"),
            war: cells.num("war"),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Public path-based loaders
// ---------------------------------------------------------------------------

/// Load one team's batting CSV.
pub fn load_batting(path: &Path, team: &str) -> Result<Vec<BattingRow>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_batting_from_reader(file, team).map_err(|e| LoadError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load one team's pitching CSV.
pub fn load_pitching(path: &Path, team: &str) -> Result<Vec<PitchingRow>, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_pitching_from_reader(file, team).map_err(|e| LoadError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}

// ---------------------------------------------------------------------------
// Dynamic field access
// ---------------------------------------------------------------------------

fn num_value(v: Option<f64>) -> Value {
    match v {
        Some(n) => Value::from(n),
        None => Value::Null,
    }
}

impl BattingRow {
    /// Numeric stat lookup by canonical field name. `None` for null values
    /// and for unknown fields alike.
    pub fn stat(&self, field: &str) -> Option<f64> {
        match field {
            "age" => self.age,
            "g" => self.g,
            "pa" => self.pa,
            "ab" => self.ab,
            "r" => self.r,
            "h" => self.h,
            "doubles" => self.doubles,
            "triples" => self.triples,
            "hr" => self.hr,
            "rbi" => self.rbi,
            "sb" => self.sb,
            "cs" => self.cs,
            "bb" => self.bb,
            "so" => self.so,
            "ba" => self.ba,
            "obp" => self.obp,
            "slg" => self.slg,
            "ops" => self.ops,
            "ops_plus" => self.ops_plus,
            "tb" => self.tb,
            "gdp" => self.gdp,
            "hbp" => self.hbp,
            "sh" => self.sh,
            "sf" => self.sf,
            "ibb" => self.ibb,
            "war" => self.war,
            _ => None,
        }
    }

    /// Full dynamic lookup covering identity fields as well as stats.
    /// Unknown fields yield `Null`, matching the pass-through policy for
    /// unresolvable column tokens.
    pub fn value(&self, field: &str) -> Value {
        match field {
            "player_name" | "player" => Value::from(self.player_name.clone()),
            "player_id" => self
                .player_id
                .clone()
                .map(Value::from)
                .unwrap_or(Value::Null),
            "team" => Value::from(self.team.clone()),
            "bats" => serde_json::to_value(self.bats).unwrap_or(Value::Null),
            "pos" => Value::from(self.pos_raw.clone()),
            other => num_value(self.stat(other)),
        }
    }
}

impl PitchingRow {
    /// Numeric stat lookup by canonical field name.
    pub fn stat(&self, field: &str) -> Option<f64> {
        match field {
            "age" => self.age,
            "w" => self.w,
            "l" => self.l,
            "wl_pct" => self.wl_pct,
            "era" => self.era,
            "g" => self.g,
            "gs" => self.gs,
            "gf" => self.gf,
            "cg" => self.cg,
            "sho" => self.sho,
            "sv" => self.sv,
            "ip_outs" => self.ip_outs.map(|o| o as f64),
            "ip" => self.ip,
            "h" => self.h,
            "r" => self.r,
            "er" => self.er,
            "hr" => self.hr,
            "bb" => self.bb,
            "ibb" => self.ibb,
            "so" => self.so,
            "hbp" => self.hbp,
            "bk" => self.bk,
            "wp" => self.wp,
            "bf" => self.bf,
            "era_plus" => self.era_plus,
            "fip" => self.fip,
            "whip" => self.whip,
            "h9" => self.h9,
            "hr9" => self.hr9,
            "bb9" => self.bb9,
            "so9" => self.so9,
            "so_w" => self.so_w,
            "war" => self.war,
            _ => None,
        }
    }

    /// Full dynamic lookup covering identity fields as well as stats.
    pub fn value(&self, field: &str) -> Value {
        match field {
            "player_name" | "player" => Value::from(self.player_name.clone()),
            "player_id" => self
                .player_id
                .clone()
                .map(Value::from)
                .unwrap_or(Value::Null),
            "team" => Value::from(self.team.clone()),
            "bats" => serde_json::to_value(self.bats).unwrap_or(Value::Null),
            "ip_outs" => self.ip_outs.map(Value::from).unwrap_or(Value::Null),
            other => num_value(self.stat(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const BATTING_CSV: &str = "\
Rk,Player,Age,Pos,G,PA,AB,R,H,2B,3B,HR,RBI,SB,CS,BB,SO,BA,OBP,SLG,OPS,OPS+,TB,GDP,HBP,SH,SF,IBB,WAR,Name-additional
1,Pete Alonso,29,*3,162,695,608,91,162,31,1,34,88,3,1,70,172,.240,.329,.459,.788,121,279,13,9,0,8,3,2.9,alonspe01
2,Starling Marte#,35,9,94,370,337,36,88,15,2,7,40,16,4,19,74,.261,.322,.386,.708,102,130,9,6,0,4,0,0.3,martest01
3,Juan Soto*,25,7,157,713,576,128,166,31,4,41,109,7,4,129,119,.288,.419,.569,.988,178,328,9,4,0,4,9,7.9,sotoju01
4,Team Totals,28.9,,162,6070,5411,768,1361,258,21,207,735,124,33,540,1401,.252,.322,.420,.742,112,2270,120,61,14,44,24,,-9999";

    const PITCHING_CSV: &str = "\
Rk,Player,Age,W,L,W-L%,ERA,G,GS,GF,CG,SHO,SV,IP,H,R,ER,HR,BB,IBB,SO,HBP,BK,WP,BF,ERA+,FIP,WHIP,H9,HR9,BB9,SO9,SO/W,WAR,Name-additional
1,Luis Severino,30,11,7,.611,3.91,31,31,0,1,1,0,182.0,171,84,79,23,60,1,161,6,0,6,766,98,4.21,1.269,8.5,1.1,3.0,8.0,2.68,1.8,severlu01
2,David Peterson*,28,10,3,.769,2.90,21,21,0,0,0,0,121.0,106,44,39,9,47,2,101,4,0,3,505,133,3.76,1.264,7.9,0.7,3.5,7.5,2.15,2.8,peterda01
3,Team Totals,28.1,89,73,.549,3.96,162,162,160,2,1,47,1449.2,1344,677,638,171,523,22,1404,61,3,56,6079,97,4.05,1.288,8.3,1.1,3.2,8.7,2.68,,-9999";

    // -- Batting --

    #[test]
    fn batting_rows_loaded_and_normalized() {
        let rows = load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap();
        assert_eq!(rows.len(), 3);

        let alonso = &rows[0];
        assert_eq!(alonso.player_name, "Pete Alonso");
        assert_eq!(alonso.team, "NYM");
        assert_eq!(alonso.bats, None);
        assert_eq!(alonso.pos_raw, "*3");
        assert_eq!(alonso.hr, Some(34.0));
        assert_eq!(alonso.pa, Some(695.0));
        assert_eq!(alonso.ops_plus, Some(121.0));
        assert_eq!(alonso.ba, Some(0.240));
        assert_eq!(alonso.player_id.as_deref(), Some("alonspe01"));
    }

    #[test]
    fn name_markers_extracted() {
        let rows = load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[1].player_name, "Starling Marte");
        assert_eq!(rows[1].bats, Some(Bats::Switch));
        assert_eq!(rows[2].player_name, "Juan Soto");
        assert_eq!(rows[2].bats, Some(Bats::Left));
    }

    #[test]
    fn team_totals_rows_excluded() {
        let rows = load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap();
        assert!(rows.iter().all(|r| !r.player_name.to_lowercase().contains("team total")));

        let rows = load_pitching_from_reader(PITCHING_CSV.as_bytes(), "NYM").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn missing_id_sentinel_normalized_to_none() {
        let csv_data = "\
Player,PA,Name-additional
Some Guy,100,-9999
Known Guy,200,knowngu01";
        let rows = load_batting_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[0].player_id, None);
        assert_eq!(rows[1].player_id.as_deref(), Some("knowngu01"));
    }

    #[test]
    fn empty_cells_become_null_not_zero() {
        let csv_data = "\
Player,PA,HR,WAR
Part Timer,88,,";
        let rows = load_batting_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[0].pa, Some(88.0));
        assert_eq!(rows[0].hr, None);
        assert_eq!(rows[0].war, None);
    }

    #[test]
    fn ragged_rows_tolerated() {
        let csv_data = "\
Player,PA,HR,RBI
Short Row,100
Long Row,200,10,40,extra,cells";
        let rows = load_batting_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].pa, Some(100.0));
        assert_eq!(rows[0].hr, None);
        assert_eq!(rows[1].hr, Some(10.0));
    }

    #[test]
    fn unknown_headers_pass_through() {
        let csv_data = "\
Player,PA,xWOBA
Some Guy,100,.350";
        let rows = load_batting_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pa, Some(100.0));
    }

    // -- Pitching --

    #[test]
    fn pitching_rows_loaded_with_exact_outs() {
        let rows = load_pitching_from_reader(PITCHING_CSV.as_bytes(), "NYM").unwrap();
        let severino = &rows[0];
        assert_eq!(severino.player_name, "Luis Severino");
        assert_eq!(severino.ip_outs, Some(546));
        assert_eq!(severino.ip, Some(182.0));
        assert_eq!(severino.era, Some(3.91));
        assert_eq!(severino.era_plus, Some(98.0));
        assert_eq!(severino.wl_pct, Some(0.611));
        assert_eq!(severino.so_w, Some(2.68));
    }

    #[test]
    fn ip_and_outs_always_consistent() {
        let rows = load_pitching_from_reader(PITCHING_CSV.as_bytes(), "NYM").unwrap();
        for row in &rows {
            let (Some(outs), Some(ip)) = (row.ip_outs, row.ip) else {
                continue;
            };
            assert_eq!(crate::stats::fields::innings_from_outs(outs), ip);
        }
    }

    #[test]
    fn partial_innings_parsed_as_outs() {
        let csv_data = "\
Player,IP
Closer,62.2";
        let rows = load_pitching_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[0].ip_outs, Some(188));
        assert_eq!(rows[0].ip, Some(62.667));
    }

    // -- Dynamic access --

    #[test]
    fn stat_accessor_matches_fields() {
        let rows = load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[0].stat("hr"), Some(34.0));
        assert_eq!(rows[0].stat("ops_plus"), Some(121.0));
        assert_eq!(rows[0].stat("nonexistent"), None);
    }

    #[test]
    fn value_accessor_covers_identity_fields() {
        let rows = load_batting_from_reader(BATTING_CSV.as_bytes(), "NYM").unwrap();
        assert_eq!(rows[2].value("player_name"), Value::from("Juan Soto"));
        assert_eq!(rows[2].value("bats"), Value::from("L"));
        assert_eq!(rows[2].value("team"), Value::from("NYM"));
        assert_eq!(rows[2].value("nonexistent"), Value::Null);
    }

    #[test]
    fn empty_csv_returns_empty_vec() {
        let csv_data = "Player,PA,HR";
        let rows = load_batting_from_reader(csv_data.as_bytes(), "NYM").unwrap();
        assert!(rows.is_empty());
    }
}

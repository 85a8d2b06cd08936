// In-memory season dataset.
//
// Built once at startup by scanning a season root directory with one
// subdirectory per team (`season/NYM/batting.csv`, `season/NYM/pitching.csv`).
// Immutable afterwards; queries share it behind an `Arc` with no locking.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{info, warn};

use super::loader::{self, BattingRow, PitchingRow};

/// Category of statistics a query operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    Batting,
    Pitching,
}

/// All loaded rows for one season, keyed by team code.
///
/// `BTreeMap` keeps team iteration sorted, so league-wide row order and
/// `teams()` output are deterministic across loads.
#[derive(Debug, Default)]
pub struct Dataset {
    batting: BTreeMap<String, Vec<BattingRow>>,
    pitching: BTreeMap<String, Vec<PitchingRow>>,
}

impl Dataset {
    /// Scan a season root and load every team found under it.
    ///
    /// Each subdirectory name (uppercased) becomes a team code. A team may
    /// have either, both, or neither category file; whatever is missing or
    /// unreadable is skipped with a warning and never aborts the rest of
    /// the load. A missing season root yields an empty dataset.
    pub fn load(season_root: &Path) -> Self {
        let mut dataset = Dataset::default();

        let entries = match std::fs::read_dir(season_root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "season root {} not readable ({e}); starting with an empty dataset",
                    season_root.display()
                );
                return dataset;
            }
        };

        let mut team_dirs: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .collect();
        // Directory read order is OS-dependent; sort for reproducible loads.
        team_dirs.sort_by_key(|e| e.file_name());

        for entry in team_dirs {
            let team = entry.file_name().to_string_lossy().to_uppercase();
            let dir = entry.path();

            let batting_path = dir.join("batting.csv");
            if batting_path.exists() {
                match loader::load_batting(&batting_path, &team) {
                    Ok(rows) => {
                        info!("loaded {} batting rows for {team}", rows.len());
                        dataset.batting.insert(team.clone(), rows);
                    }
                    Err(e) => warn!("skipping batting for {team}: {e}"),
                }
            }

            let pitching_path = dir.join("pitching.csv");
            if pitching_path.exists() {
                match loader::load_pitching(&pitching_path, &team) {
                    Ok(rows) => {
                        info!("loaded {} pitching rows for {team}", rows.len());
                        dataset.pitching.insert(team.clone(), rows);
                    }
                    Err(e) => warn!("skipping pitching for {team}: {e}"),
                }
            }
        }

        dataset
    }

    /// Build a dataset directly from rows. Used by tests and any caller
    /// that sources rows outside the filesystem layout.
    pub fn from_rows(
        batting: BTreeMap<String, Vec<BattingRow>>,
        pitching: BTreeMap<String, Vec<PitchingRow>>,
    ) -> Self {
        Dataset { batting, pitching }
    }

    /// One team's batting rows. Empty for unknown teams, never an error.
    pub fn batting_for(&self, team: &str) -> &[BattingRow] {
        self.batting.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// One team's pitching rows. Empty for unknown teams, never an error.
    pub fn pitching_for(&self, team: &str) -> &[PitchingRow] {
        self.pitching.get(team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// League-wide batting rows: every team's rows in sorted team order,
    /// file order within a team.
    pub fn all_batting(&self) -> impl Iterator<Item = &BattingRow> {
        self.batting.values().flatten()
    }

    /// League-wide pitching rows in the same deterministic order.
    pub fn all_pitching(&self) -> impl Iterator<Item = &PitchingRow> {
        self.pitching.values().flatten()
    }

    /// Sorted union of team codes present in either category.
    pub fn teams(&self) -> Vec<String> {
        let mut teams: Vec<String> = self.batting.keys().cloned().collect();
        for team in self.pitching.keys() {
            if !teams.contains(team) {
                teams.push(team.clone());
            }
        }
        teams.sort();
        teams
    }

    pub fn batting_row_count(&self) -> usize {
        self.batting.values().map(Vec::len).sum()
    }

    pub fn pitching_row_count(&self) -> usize {
        self.pitching.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::loader::{load_batting_from_reader, load_pitching_from_reader};

    const NYM_BATTING: &str = "\
Player,Pos,PA,HR,RBI,OPS+
Pete Alonso,*3,695,34,88,121
Francisco Lindor#,*6,689,33,91,137";

    const ATL_PITCHING: &str = "\
Player,IP,ERA,SO
Chris Sale*,177.2,2.38,225";

    fn sample() -> Dataset {
        let mut batting = BTreeMap::new();
        batting.insert(
            "NYM".to_string(),
            load_batting_from_reader(NYM_BATTING.as_bytes(), "NYM").unwrap(),
        );
        let mut pitching = BTreeMap::new();
        pitching.insert(
            "ATL".to_string(),
            load_pitching_from_reader(ATL_PITCHING.as_bytes(), "ATL").unwrap(),
        );
        Dataset::from_rows(batting, pitching)
    }

    #[test]
    fn unknown_team_is_empty_not_error() {
        let ds = sample();
        assert!(ds.batting_for("LAD").is_empty());
        assert!(ds.pitching_for("NYM").is_empty());
    }

    #[test]
    fn teams_is_sorted_union_of_both_categories() {
        let ds = sample();
        assert_eq!(ds.teams(), vec!["ATL".to_string(), "NYM".to_string()]);
    }

    #[test]
    fn all_rows_concatenate_in_team_order() {
        let ds = sample();
        let names: Vec<&str> = ds.all_batting().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["Pete Alonso", "Francisco Lindor"]);
    }
}

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(pub i64);

/// One recorded fixture result. Immutable once produced by the result
/// source; consumers reorder and filter references, never fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    pub team1: String,
    pub team1_score: u32,
    pub team2: String,
    pub team2_score: u32,
    pub date: NaiveDate,
}

impl Match {
    pub fn involves_team(&self, team: &str) -> bool {
        self.team1 == team || self.team2 == team
    }
}

/// The five sortable columns, each with its own comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    Team1,
    Team1Score,
    Team2Score,
    Team2,
    Date,
}

impl SortKey {
    pub fn compare(self, a: &Match, b: &Match) -> Ordering {
        match self {
            SortKey::Team1 => a.team1.cmp(&b.team1),
            SortKey::Team1Score => a.team1_score.cmp(&b.team1_score),
            SortKey::Team2Score => a.team2_score.cmp(&b.team2_score),
            SortKey::Team2 => a.team2.cmp(&b.team2),
            SortKey::Date => a.date.cmp(&b.date),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "team1" => Some(SortKey::Team1),
            "team1Score" => Some(SortKey::Team1Score),
            "team2Score" => Some(SortKey::Team2Score),
            "team2" => Some(SortKey::Team2),
            "date" => Some(SortKey::Date),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Team1 => "team1",
            SortKey::Team1Score => "team1Score",
            SortKey::Team2Score => "team2Score",
            SortKey::Team2 => "team2",
            SortKey::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Team selection for the results view. `All` is the sentinel the UI
/// shows as the first dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamFilter {
    All,
    Team(String),
}

pub const ALL_TEAMS_LABEL: &str = "All";

impl TeamFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TEAMS_LABEL {
            TeamFilter::All
        } else {
            TeamFilter::Team(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TeamFilter::All => ALL_TEAMS_LABEL,
            TeamFilter::Team(name) => name,
        }
    }

    pub fn accepts(&self, m: &Match) -> bool {
        match self {
            TeamFilter::All => true,
            TeamFilter::Team(name) => m.involves_team(name),
        }
    }
}

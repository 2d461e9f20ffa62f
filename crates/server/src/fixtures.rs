use chrono::NaiveDate;
use shared::domain::{Match, MatchId};

fn record(id: i64, team1: &str, s1: u32, team2: &str, s2: u32, ymd: (i32, u32, u32)) -> Match {
    Match {
        id: MatchId(id),
        team1: team1.to_string(),
        team1_score: s1,
        team2: team2.to_string(),
        team2_score: s2,
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).expect("valid fixture date"),
    }
}

/// The full mock result table, in source order. Ids are stable; the
/// route serves this sequence verbatim.
pub(crate) fn mock_results() -> Vec<Match> {
    vec![
        record(1, "Team A", 2, "Team B", 1, (2024, 2, 10)),
        record(2, "Team A", 3, "Team C", 4, (2024, 2, 9)),
        record(3, "Team A", 1, "Team D", 2, (2024, 2, 8)),
        record(4, "Team B", 0, "Team C", 2, (2024, 2, 7)),
        record(5, "Team B", 4, "Team D", 4, (2024, 2, 6)),
        record(6, "Team C", 2, "Team D", 3, (2024, 2, 5)),
        record(7, "Team A", 1, "Team B", 3, (2024, 2, 4)),
        record(8, "Team A", 5, "Team C", 2, (2024, 2, 3)),
        record(9, "Team A", 0, "Team D", 0, (2024, 2, 2)),
        record(10, "Team B", 2, "Team C", 2, (2024, 2, 1)),
        record(11, "Team B", 3, "Team D", 1, (2024, 1, 31)),
        record(12, "Team C", 4, "Team D", 3, (2024, 1, 30)),
    ]
}

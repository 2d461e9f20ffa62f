use std::time::Duration;

use shared::domain::{Match, SortDirection, SortKey, TeamFilter, ALL_TEAMS_LABEL};
use tracing::warn;

use crate::source::ResultSource;

#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Optional artificial delay applied while `loading` is set, so a UI
    /// driving the view has a window to show its spinner.
    pub simulated_latency: Option<Duration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Ready,
}

/// Presentation-side state over one fetched result set.
///
/// The view owns its state outright; dropping it (or the future driving
/// `initialize`) discards any in-flight fetch, so a result can never be
/// applied to a dead view.
pub struct ResultsView {
    all: Vec<Match>,
    visible: Vec<Match>,
    selected_team: TeamFilter,
    sort_key: SortKey,
    sort_direction: SortDirection,
    loading: bool,
    phase: ViewPhase,
    options: ViewOptions,
}

impl ResultsView {
    pub fn new(options: ViewOptions) -> Self {
        Self {
            all: Vec::new(),
            visible: Vec::new(),
            selected_team: TeamFilter::All,
            sort_key: SortKey::Date,
            sort_direction: SortDirection::Descending,
            loading: true,
            phase: ViewPhase::Loading,
            options,
        }
    }

    /// Seeds the view from the result source. The fetch runs exactly once
    /// per view; a repeat call is a logged no-op. A failed fetch degrades
    /// to an empty table instead of raising.
    pub async fn initialize(&mut self, source: &dyn ResultSource) {
        if self.phase == ViewPhase::Ready {
            warn!("initialize called on an already-seeded view; ignoring");
            return;
        }

        self.loading = true;
        let all = match source.fetch_matches().await {
            Ok(matches) => matches,
            Err(error) => {
                warn!(%error, "result source unavailable; showing empty table");
                Vec::new()
            }
        };
        self.simulate_latency().await;

        self.all = all;
        self.visible = self.all.clone();
        self.loading = false;
        self.phase = ViewPhase::Ready;
    }

    /// Applies a team filter, re-deriving the visible rows from the full
    /// set. The active sort is not reapplied: filtering returns rows in
    /// source order.
    ///
    /// `team` is expected to be `All` or a name offered by
    /// [`unique_teams`](Self::unique_teams); any other name simply
    /// matches nothing.
    pub async fn set_team_filter(&mut self, team: TeamFilter) {
        self.loading = true;
        self.simulate_latency().await;

        self.visible = self
            .all
            .iter()
            .filter(|m| team.accepts(m))
            .cloned()
            .collect();
        self.selected_team = team;
        self.loading = false;
    }

    /// Sorts the visible rows in place. Repeated calls on the same column
    /// toggle the direction starting from ascending; switching columns
    /// resets to ascending. Equal keys keep their current relative order.
    pub fn set_sort(&mut self, column: SortKey) {
        let was_ascending =
            self.sort_key == column && self.sort_direction == SortDirection::Ascending;
        self.sort_direction = if was_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.sort_key = column;

        // sort_by is stable, and reversing the comparator (rather than the
        // sorted output) keeps equal-key rows in their original order for
        // the descending case too.
        match self.sort_direction {
            SortDirection::Ascending => self.visible.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Descending => self.visible.sort_by(|a, b| column.compare(b, a)),
        }
    }

    /// `"All"` followed by the distinct team names across the full set,
    /// in first-occurrence order.
    pub fn unique_teams(&self) -> Vec<String> {
        let mut teams = vec![ALL_TEAMS_LABEL.to_string()];
        for m in &self.all {
            for name in [&m.team1, &m.team2] {
                if !teams.iter().any(|t| t == name) {
                    teams.push(name.clone());
                }
            }
        }
        teams
    }

    pub fn all(&self) -> &[Match] {
        &self.all
    }

    pub fn visible(&self) -> &[Match] {
        &self.visible
    }

    pub fn selected_team(&self) -> &TeamFilter {
        &self.selected_team
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    async fn simulate_latency(&self) {
        if let Some(delay) = self.options.simulated_latency {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use client_core::{HttpResultSource, ResultsView, ViewOptions};
use shared::domain::{Match, SortKey, TeamFilter};

#[derive(Parser, Debug)]
struct Args {
    /// Results server base URL; falls back to API_BASE_URL, then localhost.
    #[arg(long)]
    server_url: Option<String>,
    /// Show only matches involving this team ("All" shows everything).
    #[arg(long)]
    team: Option<String>,
    /// Sort column: team1, team1Score, team2Score, team2 or date.
    /// Repeat the flag to toggle the direction.
    #[arg(long)]
    sort: Vec<String>,
    /// Simulated loading delay in milliseconds.
    #[arg(long)]
    latency_ms: Option<u64>,
}

fn resolve_base_url(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var("API_BASE_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let source = HttpResultSource::new(resolve_base_url(args.server_url));
    let mut view = ResultsView::new(ViewOptions {
        simulated_latency: args.latency_ms.map(Duration::from_millis),
    });
    view.initialize(&source).await;

    if let Some(team) = args.team {
        let options = view.unique_teams();
        if !options.iter().any(|t| t == &team) {
            bail!("unknown team {team:?}; available: {}", options.join(", "));
        }
        view.set_team_filter(TeamFilter::from_label(&team)).await;
    }

    for column in &args.sort {
        let Some(key) = SortKey::parse(column) else {
            bail!("unknown sort column {column:?}; expected one of team1, team1Score, team2Score, team2, date");
        };
        view.set_sort(key);
    }

    render(view.visible());
    Ok(())
}

fn render(matches: &[Match]) {
    println!("Sports Results");
    if matches.is_empty() {
        println!("No matches found.");
        return;
    }

    println!(
        "{:<10} {:>5}   {:>5} {:<10} {}",
        "Team 1", "Score", "Score", "Team 2", "Date"
    );
    for m in matches {
        println!(
            "{:<10} {:>5}   {:>5} {:<10} {}",
            m.team1,
            m.team1_score,
            m.team2_score,
            m.team2,
            m.date
        );
    }
}

//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use pickem_engine::{
    cli::{Commands, Pickem},
    commands::{
        contest::handle_score_contest,
        fantasy::{handle_fantasy_points, FantasyPointsParams},
        import::handle_import,
        season::handle_season_standings,
        weekly::{handle_awards, handle_period_status, handle_process_week, handle_standings},
    },
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let app = Pickem::parse();
    let db = app.db.as_deref();

    match app.command {
        Commands::Import { file, clear_db } => handle_import(db, &file, clear_db)?,

        Commands::ScoreContest { contest_id, json } => handle_score_contest(db, contest_id, json)?,

        Commands::ProcessWeek { period, json } => handle_process_week(db, &period, json)?,

        Commands::PeriodStatus { period } => handle_period_status(db, &period)?,

        Commands::Standings { period, json } => handle_standings(db, &period, json)?,

        Commands::SeasonStandings {
            season,
            season_type,
            json,
        } => handle_season_standings(db, season, season_type, json)?,

        Commands::Awards { period, json } => handle_awards(db, &period, json)?,

        Commands::FantasyPoints {
            file,
            season,
            week,
            format,
            json,
        } => handle_fantasy_points(
            db,
            FantasyPointsParams {
                file,
                season,
                week,
                format,
                as_json: json,
            },
        )?,
    }

    Ok(())
}

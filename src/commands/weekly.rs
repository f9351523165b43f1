//! Weekly commands: processing, status, live standings and awards.

use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    cli::PeriodArgs,
    engine::{live_standings, period_state, process_period, PickemStore, ProcessOutcome},
};

use super::{common::print_standings, open_database, resolve_period};

/// Handle the process-week command
pub fn handle_process_week(db_path: Option<&Path>, args: &PeriodArgs, as_json: bool) -> Result<()> {
    let period = resolve_period(args)?;
    let mut db = open_database(db_path).context("opening database")?;
    let report =
        process_period(&mut db, period).with_context(|| format!("processing {period}"))?;

    for excluded in &report.excluded {
        eprintln!("⚠ user {} excluded: {}", excluded.user_id, excluded.reason);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.outcome {
        ProcessOutcome::Pending => println!("{period}: games still in progress, nothing to do"),
        ProcessOutcome::AlreadyProcessed => println!("{period}: already processed"),
        ProcessOutcome::NoUsers => println!("{period}: no picks to award, nothing saved"),
        ProcessOutcome::Incomplete => println!(
            "{period}: {} users could not be scored, awards not saved",
            report.excluded.len()
        ),
        ProcessOutcome::Processed => {
            println!(
                "✓ {period}: scored {} picks, {} awards saved",
                report.scored_picks,
                report.awards.len()
            );
            for award in &report.awards {
                println!(
                    "  {:<16} user {:>6}  {:>4} pts  {}",
                    award.award_type, award.user_id, award.points, award.record
                );
            }
        }
    }
    Ok(())
}

/// Handle the period-status command
pub fn handle_period_status(db_path: Option<&Path>, args: &PeriodArgs) -> Result<()> {
    let period = resolve_period(args)?;
    let db = open_database(db_path).context("opening database")?;
    let state = period_state(&db, &period)?;
    println!("{period}: {state}");
    Ok(())
}

/// Handle the standings command
pub fn handle_standings(db_path: Option<&Path>, args: &PeriodArgs, as_json: bool) -> Result<()> {
    let period = resolve_period(args)?;
    let db = open_database(db_path).context("opening database")?;
    let live = live_standings(&db, &period)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&live)?);
        return Ok(());
    }

    println!("Standings for {period}");
    print_standings(&live.standings);
    if live.pending_picks > 0 {
        println!("({} picks on games still in progress)", live.pending_picks);
    }
    Ok(())
}

/// Handle the awards command
pub fn handle_awards(db_path: Option<&Path>, args: &PeriodArgs, as_json: bool) -> Result<()> {
    let period = resolve_period(args)?;
    let db = open_database(db_path).context("opening database")?;
    let awards = db.list_awards_for_period(&period)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&awards)?);
        return Ok(());
    }

    if awards.is_empty() {
        println!("No awards for {period}");
    }
    for award in &awards {
        println!(
            "{:<16} user {:>6}  {:>4} pts  {}",
            award.award_type, award.user_id, award.points, award.record
        );
    }
    Ok(())
}

//! ascent - session log summarizer.
//!
//! Parses a game session log and prints a run summary, either as plain
//! text or as JSON for downstream tooling.

use std::path::PathBuf;
use std::process::ExitCode;

use ascent_core::{parse_session_log, LogSummary};
use ascent_types::formatting::{
    format_compact, format_pct_ratio, format_signed, format_thousands, format_turn_range,
};
use ascent_types::ParsingConfig;
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Reconstruct a turn timeline from a game session log")]
struct Args {
    /// Path to the session log file
    log: PathBuf,

    /// Optional TOML config (challenge path, player name)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Emit the summary as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Also list every parsed turn
    #[arg(long)]
    turns: bool,
}

/// Initialize logging, filtered by ASCENT_LOG if set.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .with_env_var("ASCENT_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ParsingConfig::load(path)?,
        None => ParsingConfig::default(),
    };

    let session = parse_session_log(&args.log, &config)?;
    let summary = LogSummary::compute(&session);

    if args.json {
        serde_json::to_writer_pretty(std::io::stdout().lock(), &summary)?;
        println!();
        return Ok(());
    }

    print_summary(&summary);
    if args.turns {
        print_turns(&session);
    }
    Ok(())
}

fn print_summary(summary: &LogSummary) {
    println!("run: {}", summary.log_name);
    println!("turns spent: {}", format_thousands(i64::from(summary.total_turns)));
    println!(
        "substats: {} muscle / {} mysticality / {} moxie",
        format_signed(summary.stat_gain.muscle),
        format_signed(summary.stat_gain.mysticality),
        format_signed(summary.stat_gain.moxie),
    );
    println!(
        "meat: {} gained, {} spent (net {})",
        format_thousands(summary.meat.gained()),
        format_thousands(summary.meat.spent),
        format_compact(summary.meat.net()),
    );
    println!("mp gained: {}", format_thousands(summary.mp_gain.total()));
    if summary.free_runaways > 0 {
        println!("free runaways: {}", summary.free_runaways);
    }
    println!(
        "organs: {} fullness, {} drunkenness, {} spleen",
        summary.consumption.fullness_used,
        summary.consumption.drunkenness_used,
        summary.consumption.spleen_used,
    );

    println!();
    println!("levels:");
    for level in &summary.levels {
        println!(
            "  level {:2} at turn {:4}  ({} turns)",
            level.level, level.reached_turn, level.turns_on_level
        );
    }

    println!();
    println!("areas:");
    for area in &summary.areas {
        let spent = i64::from(area.end_turn() - area.start_turn());
        println!(
            "  {:9} {}  ({})",
            format_turn_range(area.start_turn(), area.end_turn().saturating_sub(1)),
            area.area,
            format_pct_ratio(spent, i64::from(summary.total_turns)),
        );
    }

    if !summary.top_items.is_empty() {
        println!();
        println!("item drops:");
        for tally in summary.top_items.iter().take(10) {
            println!("  {:4}x {}", tally.count, tally.name);
        }
    }

    if !summary.top_skills.is_empty() {
        println!();
        println!("skills cast:");
        for tally in summary.top_skills.iter().take(10) {
            println!("  {:4}x {}", tally.count, tally.name);
        }
    }
}

fn print_turns(session: &ascent_core::LogSession) {
    println!();
    println!("turns:");
    for turn in session.turns().iter().skip(1) {
        let name = if turn.name().is_empty() {
            String::new()
        } else {
            format!(": {}", turn.name())
        };
        println!(
            "  [{}] {}{}  (day {}, {:?})",
            turn.number(),
            turn.area(),
            name,
            turn.day,
            turn.version(),
        );
    }
}

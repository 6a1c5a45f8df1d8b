// Auction Countdown
// Main entry point

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;

use auction_countdown::models::schedule::REFRESH_PERIOD;
use auction_countdown::models::zoned::WeekdayTable;
use auction_countdown::services::clock::{Clock, SimulatedClock, SystemClock};
use auction_countdown::services::countdown::{
    CountdownTicker, OutputFormat, TerminalSink, TickOutcome,
};
use auction_countdown::services::deadline::DeadlineCalculator;
use auction_countdown::services::settings::SettingsService;

#[derive(Parser)]
#[command(
    name = "auction-countdown",
    version,
    about = "Countdown to the weekly Sunday 6 PM Eastern auction close"
)]
struct Cli {
    /// Render a single tick and exit
    #[arg(long)]
    once: bool,
    /// Pretend the clock starts at this RFC 3339 instant
    #[arg(long, value_name = "INSTANT")]
    at: Option<DateTime<Utc>>,
    /// Print one JSON object per tick
    #[arg(long)]
    json: bool,
    /// Settings file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.get()?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_filter.as_str()),
    )
    .init();

    log::info!("Starting Auction Countdown");
    log::debug!("Settings loaded from {}", settings_service.path().display());

    // No fallback zone if this fails.
    let calculator =
        DeadlineCalculator::auction_close().context("Failed to resolve the auction time zone")?;
    let schedule = calculator.schedule();
    log::info!(
        "Auction closes {} at {:02}:00 {}",
        WeekdayTable::SUNDAY_FIRST.token(schedule.weekday).unwrap_or("?"),
        schedule.hour,
        calculator.reader().zone()
    );

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Line
    };
    let mut sink = TerminalSink::new(io::stdout(), &settings, format);
    sink.show_fallback()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start timer runtime")?;

    match cli.at {
        Some(start) => {
            log::info!("Using simulated clock starting at {}", start);
            runtime.block_on(run(SimulatedClock::starting_at(start), calculator, sink, cli.once))
        }
        None => runtime.block_on(run(SystemClock, calculator, sink, cli.once)),
    }
}

async fn run<C: Clock>(
    clock: C,
    calculator: DeadlineCalculator,
    sink: TerminalSink<Stdout>,
    once: bool,
) -> Result<()> {
    let mut ticker = CountdownTicker::new(clock, calculator, sink);

    if once {
        if matches!(ticker.tick(), TickOutcome::Skipped) {
            tokio::time::sleep(REFRESH_PERIOD).await;
            ticker.tick();
        }
    } else {
        ticker
            .run_until(REFRESH_PERIOD, async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    log::warn!("Cannot listen for Ctrl-C ({}), running until killed", err);
                    std::future::pending::<()>().await;
                }
            })
            .await;
    }

    ticker.into_sink().finish()?;
    Ok(())
}

mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use std::time::Duration;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use tracing::{info, warn};
use zenith_radar::config::RadarSettings;
use zenith_radar::logging::{init_target, log_target, Verbosity};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let headless = args.headless || !is_terminal();
    init_tracing(&args, headless)?;

    let settings = RadarSettings::from_env()?;
    info!(size = %settings.radar.size, seed = ?settings.seed, headless, "starting station radar");

    let mut app = App::new(&settings)?;

    if headless {
        let plan = event::HeadlessPlan {
            ticks: args.ticks,
            idle: args.then_idle_ms.map(Duration::from_millis),
        };
        return event::run_headless(&mut app, plan, args.json);
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;

    // Clocks go before the screen does.
    app.quit();
    terminal::cleanup(true, true);

    if let Err(e) = &result {
        warn!(error = %e, "event loop exited with an error");
    }
    result
}

fn init_tracing(args: &CliArgs, headless: bool) -> Result<()> {
    let verbosity = match (args.debug, headless) {
        (true, _) => Verbosity::Debug,
        (false, true) => Verbosity::Normal,
        (false, false) => Verbosity::Quiet,
    };

    init_target(verbosity, &log_target(headless, args.log_file.as_deref()))?;
    Ok(())
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}

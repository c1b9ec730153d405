use std::io::Stdout;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use serde::Serialize;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::ui;
use zenith_radar::radar::{Marker, RadarPhase, TickReport};
use zenith_radar::RadarSize;

/// Frame pacing of the terminal loop. Matches the default sweep period.
const FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Virtual time driven through the radar in headless mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlessPlan {
    /// Sweep periods to run after activation.
    pub ticks: u64,
    /// Idle time simulated after deactivating, if any.
    pub idle: Option<Duration>,
}

#[derive(Debug, Serialize)]
pub struct HeadlessSummary {
    pub size: RadarSize,
    pub show_markers: bool,
    pub phase: RadarPhase,
    pub angle_degrees: f64,
    pub simulated_ms: u128,
    pub active: TickReport,
    pub idle: Option<TickReport>,
    pub visible_markers: usize,
    pub markers: Vec<Marker>,
}

/// Runs `plan` against the app's radar without sleeping.
pub fn simulate(app: &mut App, plan: HeadlessPlan) -> HeadlessSummary {
    let start = Instant::now();
    let sweep_period = app.radar.config().sweep.period;
    let active_for =
        sweep_period.saturating_mul(u32::try_from(plan.ticks).unwrap_or(u32::MAX));

    app.start(start);
    let active_end = start + active_for;
    let active = app.radar.advance(active_end);
    debug!(?active, "headless active window simulated");

    let idle = plan.idle.map(|idle| {
        app.radar.deactivate();
        let report = app.radar.advance(active_end + idle);
        debug!(?report, "headless idle window simulated");
        report
    });

    let simulated = active_for + plan.idle.unwrap_or_default();

    HeadlessSummary {
        size: app.radar.size(),
        show_markers: app.radar.show_markers(),
        phase: app.radar.phase(),
        angle_degrees: app.radar.angle_degrees(),
        simulated_ms: simulated.as_millis(),
        active,
        idle,
        visible_markers: app.radar.marker_glyphs().len(),
        markers: app.radar.markers().as_slice().to_vec(),
    }
}

/// Run the radar without a screen and print what it did.
pub fn run_headless(app: &mut App, plan: HeadlessPlan, json: bool) -> Result<()> {
    let summary = simulate(app, plan);
    info!(
        angle = summary.angle_degrees,
        sweep_ticks = summary.active.sweep_ticks,
        "headless simulation finished"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }

    app.quit();
    Ok(())
}

fn print_summary(summary: &HeadlessSummary) {
    println!("\nStation Radar");
    println!("=============");
    println!("Size: {}", summary.size.label());
    println!("State: {}", summary.phase.label());
    println!("Simulated: {} ms", summary.simulated_ms);
    println!("Sweep ticks: {}", summary.active.sweep_ticks);
    println!("Blink ticks: {}", summary.active.blink_ticks);
    if let Some(idle) = summary.idle {
        println!(
            "Ticks after deactivation: {}",
            idle.sweep_ticks + idle.blink_ticks
        );
    }
    println!("Sweep angle: {:.1}°", summary.angle_degrees);

    println!("\nMarkers ({} visible):", summary.visible_markers);
    for marker in &summary.markers {
        let state = if marker.blinking { "BLINK" } else { "steady" };
        println!(
            "- {} | ({:.0}, {:.0}) | {state}",
            marker.id, marker.x, marker.y
        );
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut frame = tokio::time::interval(FRAME_INTERVAL);
    frame.set_missed_tick_behavior(MissedTickBehavior::Skip);

    app.start(Instant::now());

    while app.running {
        frame.tick().await;
        app.update(Instant::now());

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Drain whatever arrived since the last frame without blocking.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code, Instant::now());
                }
                // Resizes are picked up by the next draw.
                _ => {}
            }
        }
    }

    Ok(())
}

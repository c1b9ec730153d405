use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use super::blink::{apply_blink_tick, BlinkSettings, RandomSource};
use super::clock::RecurringClock;
use super::geometry::{marker_point, sweep_trail, TrailLine};
use super::marker::MarkerSet;
use super::sweep::{SweepSettings, SweepState};
use super::RadarError;
use crate::domain::RadarSize;

/// Period of the expanding ring drawn around a blinking marker.
pub const PULSE_PERIOD: Duration = Duration::from_millis(1000);
/// Period of the brightness pulse of a blinking marker.
pub const FADE_PERIOD: Duration = Duration::from_millis(2000);
/// Opacity of a marker that is not blinking.
pub const STEADY_OPACITY: f64 = 0.7;

/// Marker opacity at `elapsed` since activation.
///
/// Blinking markers swing between 1.0 and 0.5 once per [`FADE_PERIOD`],
/// fully lit at the start of each cycle.
pub fn glyph_opacity(blinking: bool, elapsed: Duration) -> f64 {
    if !blinking {
        return STEADY_OPACITY;
    }
    let period = FADE_PERIOD.as_secs_f64();
    let phase = (elapsed.as_secs_f64() % period) / period;
    0.25f64.mul_add((phase * std::f64::consts::TAU).cos(), 0.75)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarConfig {
    pub size: RadarSize,
    pub show_markers: bool,
    pub sweep: SweepSettings,
    pub blink: BlinkSettings,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: RadarSize::Medium,
            show_markers: true,
            sweep: SweepSettings::default(),
            blink: BlinkSettings::default(),
        }
    }
}

impl RadarConfig {
    /// Rejects a sweep step or clock period the clocks cannot run with.
    pub fn validate(&self) -> Result<(), RadarError> {
        self.sweep.validate()?;
        self.blink.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RadarPhase {
    Inactive,
    Active,
}

impl RadarPhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inactive => "Inactive",
            Self::Active => "Active",
        }
    }
}

/// Ticks applied by one call to [`RadarView::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TickReport {
    pub sweep_ticks: u64,
    pub blink_ticks: u64,
}

impl TickReport {
    pub const fn is_empty(&self) -> bool {
        self.sweep_ticks == 0 && self.blink_ticks == 0
    }
}

/// Both clocks of an active view. Dropping this value is the teardown.
#[derive(Debug)]
struct ActiveClocks {
    sweep: RecurringClock,
    blink: RecurringClock,
    started_at: Instant,
}

/// What the widget draws for one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGlyph<'a> {
    pub id: &'a str,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub blinking: bool,
    /// Radius of the expanding ring, present only while blinking.
    pub pulse_radius: Option<f64>,
    /// Brightness in `[0.5, 1]`, see [`glyph_opacity`].
    pub opacity: f64,
}

/// A radar scope: markers, the beam angle and, while active, the two clocks
/// that drive them.
#[derive(Debug)]
pub struct RadarView {
    config: RadarConfig,
    markers: MarkerSet,
    sweep: SweepState,
    clocks: Option<ActiveClocks>,
    random: Box<dyn RandomSource>,
    elapsed: Duration,
}

impl RadarView {
    /// Builds an inactive view. Nothing ticks until [`Self::activate`].
    pub fn new(
        config: RadarConfig,
        markers: MarkerSet,
        random: Box<dyn RandomSource>,
    ) -> Result<Self, RadarError> {
        config.validate()?;
        Ok(Self {
            config,
            markers,
            sweep: SweepState::new(),
            clocks: None,
            random,
            elapsed: Duration::ZERO,
        })
    }

    pub const fn phase(&self) -> RadarPhase {
        if self.clocks.is_some() {
            RadarPhase::Active
        } else {
            RadarPhase::Inactive
        }
    }

    pub const fn is_active(&self) -> bool {
        self.clocks.is_some()
    }

    /// Starts both clocks from a fresh state: angle 0 and the initial blink
    /// flags. Activating an active view does nothing.
    pub fn activate(&mut self, now: Instant) {
        if self.clocks.is_some() {
            trace!("radar already active");
            return;
        }

        self.sweep.reset();
        self.markers.reset();
        self.elapsed = Duration::ZERO;
        self.clocks = Some(ActiveClocks {
            sweep: RecurringClock::start(self.config.sweep.period, now),
            blink: RecurringClock::start(self.config.blink.period, now),
            started_at: now,
        });

        debug!(
            sweep_period_ms = self.config.sweep.period.as_millis(),
            blink_period_ms = self.config.blink.period.as_millis(),
            markers = self.markers.len(),
            "radar activated"
        );
    }

    /// Cancels both clocks. No tick is applied after this returns.
    pub fn deactivate(&mut self) {
        if let Some(clocks) = self.clocks.take() {
            debug!(
                sweep_ticks = clocks.sweep.fired(),
                blink_ticks = clocks.blink.fired(),
                angle = self.sweep.angle_degrees(),
                "radar deactivated"
            );
        }
    }

    /// Applies every tick due at `now`. An inactive view is left untouched.
    pub fn advance(&mut self, now: Instant) -> TickReport {
        let Some(clocks) = self.clocks.as_mut() else {
            return TickReport::default();
        };

        let report = TickReport {
            sweep_ticks: clocks.sweep.due_ticks(now),
            blink_ticks: clocks.blink.due_ticks(now),
        };
        self.elapsed = self.elapsed.max(now.saturating_duration_since(clocks.started_at));

        self.sweep
            .advance(report.sweep_ticks, self.config.sweep.step_degrees);
        for _ in 0..report.blink_ticks {
            apply_blink_tick(&mut self.markers, self.random.as_mut());
        }

        if !report.is_empty() {
            trace!(
                sweep_ticks = report.sweep_ticks,
                blink_ticks = report.blink_ticks,
                angle = self.sweep.angle_degrees(),
                "radar advanced"
            );
        }
        report
    }

    pub const fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub const fn size(&self) -> RadarSize {
        self.config.size
    }

    pub fn set_size(&mut self, size: RadarSize) {
        self.config.size = size;
    }

    pub const fn show_markers(&self) -> bool {
        self.config.show_markers
    }

    pub fn set_show_markers(&mut self, show: bool) {
        self.config.show_markers = show;
    }

    pub const fn markers(&self) -> &MarkerSet {
        &self.markers
    }

    pub const fn angle_degrees(&self) -> f64 {
        self.sweep.angle_degrees()
    }

    /// Sweep ticks since the last activation, zero while inactive.
    pub fn sweep_ticks(&self) -> u64 {
        self.clocks.as_ref().map_or(0, |clocks| clocks.sweep.fired())
    }

    /// Blink ticks since the last activation, zero while inactive.
    pub fn blink_ticks(&self) -> u64 {
        self.clocks.as_ref().map_or(0, |clocks| clocks.blink.fired())
    }

    /// Time covered by the last [`Self::advance`] since activation.
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Progress of the blink pulse ring in `[0, 1)`.
    pub fn pulse_phase(&self) -> f64 {
        let period = PULSE_PERIOD.as_secs_f64();
        (self.elapsed.as_secs_f64() % period) / period
    }

    /// Canvas diameter in pixels for the current size tier.
    pub fn diameter(&self) -> f64 {
        f64::from(self.config.size.pixel_diameter())
    }

    pub fn sweep_trail(&self) -> Vec<TrailLine> {
        sweep_trail(self.sweep.angle_degrees())
    }

    /// Marker glyphs to draw, empty when markers are hidden.
    pub fn marker_glyphs(&self) -> Vec<MarkerGlyph<'_>> {
        if !self.config.show_markers {
            return Vec::new();
        }

        let diameter = self.diameter();
        let radius = f64::from(self.config.size.glyph_pixels()) / 2.0;
        let pulse = self.pulse_phase();

        self.markers
            .iter()
            .map(|marker| {
                let (x, y) = marker_point(marker.x, marker.y, diameter);
                MarkerGlyph {
                    id: &marker.id,
                    x,
                    y,
                    radius,
                    blinking: marker.blinking,
                    pulse_radius: marker.blinking.then(|| radius * (1.0 + pulse)),
                    opacity: glyph_opacity(marker.blinking, self.elapsed),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{glyph_opacity, RadarConfig, RadarPhase, RadarView, STEADY_OPACITY};
    use crate::radar::blink::BlinkSettings;
    use crate::radar::sweep::SweepSettings;
    use crate::radar::RadarError;
    use crate::domain::RadarSize;
    use crate::radar::blink::{ScriptedRandom, SeededRandom};
    use crate::radar::marker::MarkerSet;
    use std::time::{Duration, Instant};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn fleet_view(config: RadarConfig) -> RadarView {
        RadarView::new(config, MarkerSet::fleet(), Box::new(SeededRandom::new(9)))
            .expect("valid config")
    }

    #[test]
    fn new_view_is_inactive_and_ignores_time() {
        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());

        assert_eq!(view.phase(), RadarPhase::Inactive);
        assert!(view.advance(start + ms(5_000)).is_empty());
        assert!(view.angle_degrees().abs() < f64::EPSILON);
        assert_eq!(view.markers(), &MarkerSet::fleet());
    }

    #[test]
    fn active_view_sweeps_on_schedule() {
        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());
        view.activate(start);

        let report = view.advance(start + ms(500));
        assert_eq!(report.sweep_ticks, 10);
        assert_eq!(report.blink_ticks, 0);
        assert!((view.angle_degrees() - 20.0).abs() < 1e-9);

        let report = view.advance(start + ms(1_000));
        assert_eq!(report.sweep_ticks, 10);
        assert_eq!(report.blink_ticks, 1);
        assert_eq!(view.sweep_ticks(), 20);
        assert_eq!(view.blink_ticks(), 1);
    }

    #[test]
    fn deactivation_freezes_all_state() {
        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());
        view.activate(start);
        view.advance(start + ms(2_330));

        let angle = view.angle_degrees();
        let flags = view.markers().blink_flags();
        view.deactivate();

        for later in [2_350, 3_000, 60_000] {
            assert!(view.advance(start + ms(later)).is_empty());
        }
        assert_eq!(view.phase(), RadarPhase::Inactive);
        assert!((view.angle_degrees() - angle).abs() < f64::EPSILON);
        assert_eq!(view.markers().blink_flags(), flags);
        assert_eq!(view.sweep_ticks(), 0);
    }

    #[test]
    fn reactivation_restarts_from_zero() {
        let start = Instant::now();
        let mut view = RadarView::new(
            RadarConfig::default(),
            MarkerSet::fleet(),
            Box::new(ScriptedRandom::new([false])),
        )
        .expect("valid config");
        view.activate(start);
        view.advance(start + ms(1_230));
        assert!(view.angle_degrees() > 0.0);
        assert_eq!(view.markers().blinking_count(), 0);

        view.deactivate();
        let restart = start + ms(10_000);
        view.activate(restart);

        assert!(view.angle_degrees().abs() < f64::EPSILON);
        assert_eq!(view.markers(), &MarkerSet::fleet());
        assert_eq!(view.advance(restart + ms(49)).sweep_ticks, 0);
        assert_eq!(view.advance(restart + ms(50)).sweep_ticks, 1);
        assert!((view.angle_degrees() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn activating_twice_keeps_running_state() {
        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());
        view.activate(start);
        view.advance(start + ms(100));

        view.activate(start + ms(100));
        assert!((view.angle_degrees() - 4.0).abs() < 1e-9);
        assert_eq!(view.sweep_ticks(), 2);
    }

    #[test]
    fn hidden_markers_produce_no_glyphs() {
        let mut view = fleet_view(RadarConfig {
            show_markers: false,
            ..RadarConfig::default()
        });
        assert!(view.marker_glyphs().is_empty());

        view.set_show_markers(true);
        assert_eq!(view.marker_glyphs().len(), 5);
    }

    #[test]
    fn glyphs_scale_with_size_tier() {
        let mut view = fleet_view(RadarConfig {
            size: RadarSize::Large,
            ..RadarConfig::default()
        });

        let glyphs = view.marker_glyphs();
        let first = &glyphs[0];
        assert_eq!(first.id, "ZA451");
        assert!((first.x - 224.0).abs() < 1e-9);
        assert!((first.y - 224.0).abs() < 1e-9);
        assert!((first.radius - 4.0).abs() < 1e-9);
        assert!(first.pulse_radius.is_some());
        assert!(glyphs[1].pulse_radius.is_none());

        view.set_size(RadarSize::Small);
        assert!((view.marker_glyphs()[0].radius - 2.0).abs() < 1e-9);
    }

    #[test]
    fn pulse_phase_wraps_each_second() {
        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());
        view.activate(start);

        view.advance(start + ms(250));
        assert!((view.pulse_phase() - 0.25).abs() < 1e-9);

        view.advance(start + ms(1_750));
        assert!((view.pulse_phase() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn rejects_unusable_sweep_step() {
        for step_degrees in [f64::NAN, f64::INFINITY, 0.0, -2.0] {
            let config = RadarConfig {
                sweep: SweepSettings {
                    step_degrees,
                    ..SweepSettings::default()
                },
                ..RadarConfig::default()
            };
            let result =
                RadarView::new(config, MarkerSet::fleet(), Box::new(SeededRandom::new(1)));
            assert!(matches!(result, Err(RadarError::InvalidStep(_))));
        }
    }

    #[test]
    fn rejects_zero_periods() {
        let sweep = RadarConfig {
            sweep: SweepSettings {
                period: Duration::ZERO,
                ..SweepSettings::default()
            },
            ..RadarConfig::default()
        };
        let blink = RadarConfig {
            blink: BlinkSettings {
                period: Duration::ZERO,
            },
            ..RadarConfig::default()
        };

        assert_eq!(
            sweep.validate(),
            Err(RadarError::ZeroPeriod { clock: "sweep" })
        );
        assert_eq!(
            blink.validate(),
            Err(RadarError::ZeroPeriod { clock: "blink" })
        );
        assert!(
            RadarView::new(blink, MarkerSet::fleet(), Box::new(SeededRandom::new(1))).is_err()
        );
    }

    #[test]
    fn blinking_markers_pulse_in_brightness() {
        assert!((glyph_opacity(false, ms(700)) - STEADY_OPACITY).abs() < 1e-9);
        assert!((glyph_opacity(true, Duration::ZERO) - 1.0).abs() < 1e-9);
        assert!((glyph_opacity(true, ms(1_000)) - 0.5).abs() < 1e-9);
        assert!((glyph_opacity(true, ms(2_000)) - 1.0).abs() < 1e-9);

        let start = Instant::now();
        let mut view = fleet_view(RadarConfig::default());
        view.activate(start);
        view.advance(start + ms(500));

        let glyphs = view.marker_glyphs();
        assert!((glyphs[0].opacity - 0.75).abs() < 1e-9);
        assert!((glyphs[1].opacity - STEADY_OPACITY).abs() < 1e-9);
    }
}

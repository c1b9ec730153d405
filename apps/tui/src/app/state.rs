use std::time::Instant;

use throbber_widgets_tui::ThrobberState;
use tracing::info;
use zenith_radar::config::RadarSettings;
use zenith_radar::radar::{
    MarkerSet, RadarError, RadarView, RandomSource, SeededRandom, SystemRandom, TickReport,
};
use zenith_radar::RadarSize;

pub struct App {
    pub running: bool,
    pub show_help: bool,
    pub status_message: String,
    pub radar: RadarView,
    pub throbber_state: ThrobberState,
    pub last_report: TickReport,
}

pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(SystemRandom::default()),
    }
}

impl App {
    pub fn new(settings: &RadarSettings) -> Result<Self, RadarError> {
        Ok(Self {
            running: true,
            show_help: false,
            status_message: String::new(),
            radar: RadarView::new(
                settings.radar,
                MarkerSet::fleet(),
                random_source(settings.seed),
            )?,
            throbber_state: ThrobberState::default(),
            last_report: TickReport::default(),
        })
    }

    /// Brings the scope up. Called once the screen is ready.
    pub fn start(&mut self, now: Instant) {
        self.radar.activate(now);
    }

    pub fn update(&mut self, now: Instant) {
        self.last_report = self.radar.advance(now);
        if self.last_report.blink_ticks > 0 {
            self.throbber_state.calc_next();
        }
    }

    /// Space: stop the clocks, or restart them from a fresh sweep.
    pub fn toggle_scan(&mut self, now: Instant) {
        if self.radar.is_active() {
            self.radar.deactivate();
            self.status_message = "Scan paused".to_string();
        } else {
            self.radar.activate(now);
            self.status_message = "Scan restarted".to_string();
        }
        info!(phase = self.radar.phase().label(), "scan toggled");
    }

    pub fn toggle_markers(&mut self) {
        let show = !self.radar.show_markers();
        self.radar.set_show_markers(show);
        self.status_message = if show {
            "Markers shown".to_string()
        } else {
            "Markers hidden".to_string()
        };
    }

    pub fn select_size(&mut self, size: RadarSize) {
        self.radar.set_size(size);
        self.status_message = format!("Scope size: {}", size.label());
    }

    pub fn quit(&mut self) {
        self.radar.deactivate();
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::App;
    use std::time::{Duration, Instant};
    use zenith_radar::config::RadarSettings;
    use zenith_radar::RadarSize;

    fn seeded_app() -> App {
        App::new(&RadarSettings {
            seed: Some(3),
            ..RadarSettings::default()
        })
        .expect("valid settings")
    }

    #[test]
    fn app_starts_inactive_until_started() {
        let now = Instant::now();
        let mut app = seeded_app();
        app.update(now + Duration::from_secs(1));
        assert!(app.last_report.is_empty());

        app.start(now);
        app.update(now + Duration::from_millis(100));
        assert_eq!(app.last_report.sweep_ticks, 2);
    }

    #[test]
    fn toggle_scan_pauses_and_restarts() {
        let now = Instant::now();
        let mut app = seeded_app();
        app.start(now);
        app.update(now + Duration::from_millis(500));

        app.toggle_scan(now + Duration::from_millis(500));
        assert!(!app.radar.is_active());
        assert_eq!(app.status_message, "Scan paused");

        app.toggle_scan(now + Duration::from_millis(600));
        assert!(app.radar.is_active());
        assert!(app.radar.angle_degrees().abs() < f64::EPSILON);
    }

    #[test]
    fn size_and_marker_toggles_update_the_view() {
        let mut app = seeded_app();
        app.select_size(RadarSize::Large);
        app.toggle_markers();

        assert_eq!(app.radar.size(), RadarSize::Large);
        assert!(!app.radar.show_markers());
        assert_eq!(app.status_message, "Markers hidden");
    }

    #[test]
    fn quit_tears_down_the_clocks() {
        let mut app = seeded_app();
        app.start(Instant::now());
        app.quit();

        assert!(!app.running);
        assert!(!app.radar.is_active());
    }
}

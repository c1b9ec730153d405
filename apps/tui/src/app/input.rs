use std::time::Instant;

use crossterm::event::KeyCode;

use crate::app::state::App;
use zenith_radar::RadarSize;

pub fn handle_input(app: &mut App, key: KeyCode, now: Instant) {
    if handle_help_toggle(app, key) {
        return;
    }

    match key {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char(' ') => app.toggle_scan(now),
        KeyCode::Char('m') => app.toggle_markers(),
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            if let Some(size) = RadarSize::from_index(index) {
                app.select_size(size);
            }
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}

fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    if key == KeyCode::F(1) || key == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::handle_input;
    use crate::app::state::App;
    use crossterm::event::KeyCode;
    use std::time::Instant;
    use zenith_radar::config::RadarSettings;
    use zenith_radar::RadarSize;

    fn app() -> App {
        App::new(&RadarSettings {
            seed: Some(1),
            ..RadarSettings::default()
        })
        .expect("valid settings")
    }

    #[test]
    fn digits_select_size_tiers() {
        let mut app = app();
        let now = Instant::now();

        handle_input(&mut app, KeyCode::Char('3'), now);
        assert_eq!(app.radar.size(), RadarSize::Large);
        handle_input(&mut app, KeyCode::Char('1'), now);
        assert_eq!(app.radar.size(), RadarSize::Small);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        let now = Instant::now();

        handle_input(&mut app, KeyCode::Char('?'), now);
        assert!(app.show_help);

        handle_input(&mut app, KeyCode::Char('q'), now);
        assert!(app.running);

        handle_input(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);

        handle_input(&mut app, KeyCode::Char('q'), now);
        assert!(!app.running);
    }

    #[test]
    fn space_toggles_the_scan() {
        let mut app = app();
        let now = Instant::now();
        app.start(now);

        handle_input(&mut app, KeyCode::Char(' '), now);
        assert!(!app.radar.is_active());
        handle_input(&mut app, KeyCode::Char(' '), now);
        assert!(app.radar.is_active());
    }
}

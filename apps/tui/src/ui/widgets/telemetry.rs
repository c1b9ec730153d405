use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use zenith_radar::radar::{RadarPhase, RadarView};

fn info_line(label: &'static str, value: String, color: Color) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{label:<13}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(color)),
    ])
}

pub fn telemetry_lines(view: &RadarView) -> Vec<TextLine<'static>> {
    let phase_color = match view.phase() {
        RadarPhase::Active => Color::Green,
        RadarPhase::Inactive => Color::Red,
    };

    vec![
        info_line("State", view.phase().label().to_string(), phase_color),
        info_line(
            "Sweep angle",
            format!("{:5.1}°", view.angle_degrees()),
            Color::White,
        ),
        info_line(
            "Running",
            format!("{:.1} s", view.elapsed().as_secs_f64()),
            Color::White,
        ),
        info_line("Sweep ticks", view.sweep_ticks().to_string(), Color::White),
        info_line("Blink ticks", view.blink_ticks().to_string(), Color::White),
        info_line(
            "Blinking",
            format!("{}/{}", view.markers().blinking_count(), view.markers().len()),
            Color::Yellow,
        ),
        info_line("Scope", view.size().label().to_string(), Color::White),
        info_line(
            "Step",
            format!(
                "{}° / {} ms",
                view.config().sweep.step_degrees,
                view.config().sweep.period.as_millis()
            ),
            Color::White,
        ),
    ]
}

pub fn render_telemetry(view: &RadarView, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            "Sweep",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(telemetry_lines(view))).block(block);
    f.render_widget(paragraph, area);
}

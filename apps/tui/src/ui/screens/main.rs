use crate::app::App;
use crate::cli::CliArgs;
use crate::ui::widgets::markers::render_marker_table;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::radar::{render_radar, SCOPE_GREEN};
use crate::ui::widgets::telemetry::render_telemetry;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Scope and side panels
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);

    if app.show_help {
        render_help_popup(f, f.area());
    }
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = title_block.inner(area);
    f.render_widget(title_block, area);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Zenith Airways ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Station Radar",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(title, halves[0]);

    let clock = chrono::Utc::now().format("%H:%M:%S UTC").to_string();
    let clock = Paragraph::new(Span::styled(clock, Style::default().fg(Color::Gray)))
        .alignment(Alignment::Right);
    f.render_widget(clock, halves[1]);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let scope_block = Block::default()
        .title(format!("Radar · {}", app.radar.size().label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SCOPE_GREEN));
    let scope_area = scope_block.inner(columns[0]);
    f.render_widget(scope_block, columns[0]);
    render_radar(&app.radar, f, scope_area);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(9)])
        .split(columns[1]);

    render_marker_table(&app.radar, f, side[0]);
    render_telemetry(&app.radar, f, side[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = status_block.inner(area);
    f.render_widget(status_block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(1)])
        .split(inner);

    if app.radar.is_active() {
        let throbber = Throbber::default()
            .label("Scanning")
            .style(Style::default().fg(SCOPE_GREEN));
        let mut state = app.throbber_state.clone();
        f.render_stateful_widget(throbber, columns[0], &mut state);
    } else {
        f.render_widget(
            Paragraph::new(Span::styled("Idle", Style::default().fg(Color::Red))),
            columns[0],
        );
    }

    let message = if app.status_message.is_empty() && !app.radar.is_active() {
        "Scan paused. Press Space to restart"
    } else {
        app.status_message.as_str()
    };
    let status_paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Green)))
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, columns[1]);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let shortcuts_paragraph = Paragraph::new(shortcuts_line()).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}

const SHORTCUTS: [(&str, &str); 6] = [
    ("?", "Help"),
    ("Space", "Pause/Restart"),
    ("m", "Markers"),
    ("1-3", "Size"),
    ("Esc", "Close"),
    ("q", "Quit"),
];

fn shortcuts_line() -> TextLine<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let mut spans = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (index, (key, action)) in SHORTCUTS.iter().enumerate() {
        let separator = if index + 1 == SHORTCUTS.len() { "" } else { " | " };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(
            format!(": {action}{separator}"),
            Style::default().fg(Color::Gray),
        ));
    }
    TextLine::from(spans)
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        TextLine::from(Span::styled(
            "Zenith Airways Station Radar",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "The beam turns 2° every 50 ms by default. Once a second every aircraft marker is re-rolled: yellow markers are blinking.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled("Keyboard Shortcuts:", bold)),
    ];

    lines.extend([
        ("  ?", " - Toggle this help popup"),
        ("  Space", " - Pause the scan / restart it from 0°"),
        ("  m", " - Show or hide aircraft markers"),
        ("  1 2 3", " - Small, medium or large scope"),
        ("  Esc", " - Close help / clear status"),
        ("  q", " - Quit"),
    ]
    .into_iter()
    .map(|(key, text)| {
        TextLine::from(vec![
            Span::styled(key, key_style),
            Span::raw(text),
        ])
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled("CLI Options:", bold)));

    let help_text = CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

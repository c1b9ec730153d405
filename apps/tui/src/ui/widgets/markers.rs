use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use zenith_radar::radar::{Marker, RadarView};

pub fn marker_row(marker: &Marker) -> Row<'_> {
    let (status, style) = if marker.blinking {
        (
            "BLINK",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("steady", Style::default().fg(Color::Gray))
    };

    Row::new(vec![
        Cell::from(marker.id.as_str()),
        Cell::from(format!("{:>3.0}, {:>3.0}", marker.x, marker.y)),
        Cell::from(status).style(style),
    ])
}

pub fn render_marker_table(view: &RadarView, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Tracked Aircraft")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if !view.show_markers() {
        let paragraph = Paragraph::new("Markers hidden (m to show)")
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec!["Flight", "Position", "Status"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let rows = view.markers().iter().map(marker_row);

    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(6),
        ],
    )
    .header(header)
    .block(block);

    f.render_widget(table, area);
}

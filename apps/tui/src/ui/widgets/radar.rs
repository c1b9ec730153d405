use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker as CanvasMarker;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine, Points};
use ratatui::Frame;

use zenith_radar::radar::geometry::{polar_point, ring_radii};
use zenith_radar::radar::RadarView;

pub const SCOPE_GREEN: Color = Color::Rgb(34, 197, 94);
const GRID: Color = Color::Rgb(20, 70, 40);
const WARNING: Color = Color::Yellow;
const WARNING_RGB: (u8, u8, u8) = (234, 179, 8);
const STEADY_RGB: (u8, u8, u8) = (34, 197, 94);

/// Trail shade for an opacity in `[0, 0.3]`, blended over black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn trail_color(intensity: f64) -> Color {
    let alpha = (intensity / 0.3).clamp(0.0, 1.0) * 0.6;
    let blend = |channel: u8| (f64::from(channel) * alpha).round() as u8;
    Color::Rgb(blend(34), blend(197), blend(94))
}

/// Marker shade for an opacity in `[0, 1]`, blended over black.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn glyph_color(blinking: bool, opacity: f64) -> Color {
    let (r, g, b) = if blinking { WARNING_RGB } else { STEADY_RGB };
    let alpha = opacity.clamp(0.0, 1.0);
    let blend = |channel: u8| (f64::from(channel) * alpha).round() as u8;
    Color::Rgb(blend(r), blend(g), blend(b))
}

/// Area of `size` cells centered in `area`, clipped to it.
pub fn centered_scope(area: Rect, size: (u16, u16)) -> Rect {
    let width = size.0.min(area.width);
    let height = size.1.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_radar(view: &RadarView, f: &mut Frame<'_>, area: Rect) {
    let scope = centered_scope(area, view.size().cell_footprint());
    if scope.width < 4 || scope.height < 2 {
        return;
    }

    let diameter = view.diameter();
    let center = (diameter / 2.0, diameter / 2.0);
    let outer = diameter / 2.0;
    let trail = view.sweep_trail();
    let glyphs = view.marker_glyphs();
    let beam = view.angle_degrees();
    let center_radius = f64::from(view.size().glyph_pixels()) / 2.0;

    f.render_widget(
        Canvas::default()
            .marker(CanvasMarker::Braille)
            .paint(|ctx| {
                for radius in ring_radii(outer) {
                    ctx.draw(&Circle {
                        x: center.0,
                        y: center.1,
                        radius,
                        color: GRID,
                    });
                }

                ctx.draw(&CanvasLine {
                    x1: center.0,
                    y1: 0.0,
                    x2: center.0,
                    y2: diameter,
                    color: GRID,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: center.1,
                    x2: diameter,
                    y2: center.1,
                    color: GRID,
                });

                for line in &trail {
                    let (x2, y2) = polar_point(center, outer, line.angle_degrees);
                    ctx.draw(&CanvasLine {
                        x1: center.0,
                        y1: center.1,
                        x2,
                        y2,
                        color: trail_color(line.intensity),
                    });
                }

                ctx.layer();

                let (beam_x, beam_y) = polar_point(center, outer, beam);
                ctx.draw(&CanvasLine {
                    x1: center.0,
                    y1: center.1,
                    x2: beam_x,
                    y2: beam_y,
                    color: SCOPE_GREEN,
                });

                for glyph in &glyphs {
                    let color = glyph_color(glyph.blinking, glyph.opacity);
                    if let Some(pulse_radius) = glyph.pulse_radius {
                        ctx.draw(&Circle {
                            x: glyph.x,
                            y: glyph.y,
                            radius: pulse_radius,
                            color: WARNING,
                        });
                    }
                    ctx.draw(&Circle {
                        x: glyph.x,
                        y: glyph.y,
                        radius: glyph.radius,
                        color,
                    });
                    ctx.draw(&Points {
                        coords: &[(glyph.x, glyph.y)],
                        color,
                    });
                }

                ctx.draw(&Circle {
                    x: center.0,
                    y: center.1,
                    radius: center_radius,
                    color: SCOPE_GREEN,
                });
            })
            .x_bounds([0.0, diameter])
            .y_bounds([0.0, diameter]),
        scope,
    );
}

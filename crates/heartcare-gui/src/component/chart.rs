//! Dashboard charts drawn on a canvas.
//!
//! One [`ChartCanvas`] renders any [`ChartSpec`]: doughnut and pie as wedges,
//! bars vertical or horizontal against a value axis, lines optionally filled
//! and smoothed by the chart's tension.

use std::f32::consts::{FRAC_PI_2, TAU};

use heartcare_model::{ChartKind, ChartSpec};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{Canvas, container, row, text};
use iced::{Alignment, Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme};

use crate::theme::{ClinicalColors, SPACING_SM, SPACING_XS, to_color};

const LABEL_SIZE: f32 = 11.0;
const AXIS_TICKS: usize = 4;
const ARC_STEPS_PER_RADIAN: f32 = 24.0;
const DOUGHNUT_HOLE: f32 = 0.55;

/// Canvas program for one chart.
pub struct ChartCanvas<'a> {
    spec: &'a ChartSpec,
}

/// The chart canvas at a fixed height.
pub fn chart_canvas<'a, M: 'a>(spec: &'a ChartSpec, height: f32) -> Element<'a, M> {
    Canvas::new(ChartCanvas { spec })
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .into()
}

/// Color swatches with labels, for charts whose labels are not on an axis.
pub fn chart_legend<'a, M: 'a>(spec: &'a ChartSpec) -> Element<'a, M> {
    let mut legend = row![].spacing(SPACING_SM);
    for (index, (label, value)) in spec.points().enumerate() {
        let color = to_color(spec.color_at(index));
        let swatch = container(text(""))
            .width(Length::Fixed(10.0))
            .height(Length::Fixed(10.0))
            .style(move |_theme: &Theme| container::Style {
                background: Some(color.into()),
                ..Default::default()
            });
        legend = legend.push(
            row![swatch, text(format!("{label} ({})", format_value(value, ""))).size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        );
    }
    legend.wrap().into()
}

impl<M> canvas::Program<M> for ChartCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let ink = Ink::from_theme(theme);

        match self.spec.kind {
            ChartKind::Doughnut => draw_radial(&mut frame, self.spec, DOUGHNUT_HOLE, &ink),
            ChartKind::Pie => draw_radial(&mut frame, self.spec, 0.0, &ink),
            ChartKind::Bar {
                horizontal: false,
                value_suffix,
                ..
            } => draw_columns(&mut frame, self.spec, value_suffix, &ink),
            ChartKind::Bar {
                horizontal: true,
                value_suffix,
                ..
            } => draw_rows(&mut frame, self.spec, value_suffix, &ink),
            ChartKind::Line { fill, tension } => {
                draw_line(&mut frame, self.spec, fill, tension, &ink);
            }
        }

        vec![frame.into_geometry()]
    }
}

/// Theme colors used while drawing.
struct Ink {
    label: Color,
    grid: Color,
    surface: Color,
}

impl Ink {
    fn from_theme(theme: &Theme) -> Self {
        let clinical = theme.clinical();
        Self {
            label: clinical.text_muted,
            grid: clinical.border_subtle,
            surface: clinical.background_elevated,
        }
    }
}

// =============================================================================
// RADIAL
// =============================================================================

fn draw_radial(frame: &mut Frame, spec: &ChartSpec, hole: f32, ink: &Ink) {
    let center = frame.center();
    let radius = (frame.width().min(frame.height()) / 2.0 - 8.0).max(1.0);

    let angles = slice_angles(&spec.values);
    if angles.is_empty() {
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_color(ink.grid).with_width(2.0),
        );
        return;
    }

    for (index, (start, end)) in angles.into_iter().enumerate() {
        let path = wedge(center, radius, radius * hole, start, end);
        frame.fill(&path, to_color(spec.color_at(index)));
        frame.stroke(&path, Stroke::default().with_color(ink.surface).with_width(2.0));
    }
}

/// Start and end angle of each slice, clockwise from twelve o'clock.
///
/// Empty when the values sum to zero.
fn slice_angles(values: &[f64]) -> Vec<(f32, f32)> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    values
        .iter()
        .map(|value| {
            let sweep = (value.max(0.0) / total) as f32 * TAU;
            let slice = (start, start + sweep);
            start += sweep;
            slice
        })
        .collect()
}

/// Points along a circular arc, as a polyline.
fn arc_points(center: Point, radius: f32, start: f32, end: f32) -> Vec<Point> {
    let steps = (((end - start).abs() * ARC_STEPS_PER_RADIAN).ceil() as usize).max(1);
    (0..=steps)
        .map(|i| {
            let angle = start + (end - start) * i as f32 / steps as f32;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

fn wedge(center: Point, outer: f32, inner: f32, start: f32, end: f32) -> Path {
    Path::new(|builder| {
        let mut rim = arc_points(center, outer, start, end).into_iter();
        if inner > 0.0 {
            if let Some(first) = rim.next() {
                builder.move_to(first);
            }
            for point in rim {
                builder.line_to(point);
            }
            for point in arc_points(center, inner, end, start) {
                builder.line_to(point);
            }
        } else {
            builder.move_to(center);
            for point in rim {
                builder.line_to(point);
            }
        }
        builder.close();
    })
}

// =============================================================================
// AXES
// =============================================================================

/// Plot area inside the frame, leaving room for axis labels.
fn plot_area(frame: &Frame, left: f32, right: f32, bottom: f32) -> Rectangle {
    let top = 10.0;
    Rectangle {
        x: left,
        y: top,
        width: (frame.width() - left - right).max(1.0),
        height: (frame.height() - top - bottom).max(1.0),
    }
}

fn label(frame: &mut Frame, content: String, position: Point, color: Color) {
    frame.fill_text(canvas::Text {
        content,
        position,
        color,
        size: Pixels(LABEL_SIZE),
        ..Default::default()
    });
}

/// Rough rendered width of a label, for centering without text metrics.
fn label_width(content: &str) -> f32 {
    content.chars().count() as f32 * LABEL_SIZE * 0.55
}

fn format_value(value: f64, suffix: &str) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}{suffix}")
    } else {
        format!("{value:.1}{suffix}")
    }
}

/// Horizontal grid lines with value labels on the left.
fn value_grid(frame: &mut Frame, plot: Rectangle, max: f64, suffix: &str, ink: &Ink) {
    for tick in 0..=AXIS_TICKS {
        let fraction = tick as f32 / AXIS_TICKS as f32;
        let y = plot.y + plot.height * (1.0 - fraction);
        frame.stroke(
            &Path::line(Point::new(plot.x, y), Point::new(plot.x + plot.width, y)),
            Stroke::default().with_color(ink.grid).with_width(1.0),
        );
        let value = format_value(max * f64::from(fraction), suffix);
        let x = plot.x - label_width(&value) - 6.0;
        label(frame, value, Point::new(x, y - LABEL_SIZE / 2.0), ink.label);
    }
}

/// Value grid for horizontal bars: vertical lines, labels along the bottom.
fn value_grid_vertical(frame: &mut Frame, plot: Rectangle, max: f64, suffix: &str, ink: &Ink) {
    for tick in 0..=AXIS_TICKS {
        let fraction = tick as f32 / AXIS_TICKS as f32;
        let x = plot.x + plot.width * fraction;
        frame.stroke(
            &Path::line(Point::new(x, plot.y), Point::new(x, plot.y + plot.height)),
            Stroke::default().with_color(ink.grid).with_width(1.0),
        );
        let value = format_value(max * f64::from(fraction), suffix);
        let position = Point::new(x - label_width(&value) / 2.0, plot.y + plot.height + 6.0);
        label(frame, value, position, ink.label);
    }
}

fn ratio(value: f64, max: f64) -> f32 {
    if max <= 0.0 {
        0.0
    } else {
        (value / max).clamp(0.0, 1.0) as f32
    }
}

// =============================================================================
// BARS
// =============================================================================

fn draw_columns(frame: &mut Frame, spec: &ChartSpec, suffix: &str, ink: &Ink) {
    let plot = plot_area(frame, 44.0, 8.0, 24.0);
    let max = spec.value_max();
    value_grid(frame, plot, max, suffix, ink);

    let count = spec.values.len().max(1);
    let slot = plot.width / count as f32;
    let bar_width = slot * 0.6;

    for (index, (name, value)) in spec.points().enumerate() {
        let height = plot.height * ratio(value, max);
        let x = plot.x + slot * index as f32 + (slot - bar_width) / 2.0;
        frame.fill_rectangle(
            Point::new(x, plot.y + plot.height - height),
            Size::new(bar_width, height),
            to_color(spec.color_at(index)),
        );

        let center = plot.x + slot * (index as f32 + 0.5);
        let position = Point::new(center - label_width(name) / 2.0, plot.y + plot.height + 6.0);
        label(frame, name.to_string(), position, ink.label);
    }
}

fn draw_rows(frame: &mut Frame, spec: &ChartSpec, suffix: &str, ink: &Ink) {
    let plot = plot_area(frame, 120.0, 48.0, 24.0);
    let max = spec.value_max();
    value_grid_vertical(frame, plot, max, suffix, ink);

    let count = spec.values.len().max(1);
    let slot = plot.height / count as f32;
    let bar_height = slot * 0.6;

    for (index, (name, value)) in spec.points().enumerate() {
        let width = plot.width * ratio(value, max);
        let y = plot.y + slot * index as f32 + (slot - bar_height) / 2.0;
        frame.fill_rectangle(
            Point::new(plot.x, y),
            Size::new(width, bar_height),
            to_color(spec.color_at(index)),
        );

        let middle = y + bar_height / 2.0 - LABEL_SIZE / 2.0;
        let name_x = (plot.x - label_width(name) - 8.0).max(0.0);
        label(frame, name.to_string(), Point::new(name_x, middle), ink.label);
        label(
            frame,
            format_value(value, suffix),
            Point::new(plot.x + width + 6.0, middle),
            ink.label,
        );
    }
}

// =============================================================================
// LINES
// =============================================================================

fn draw_line(frame: &mut Frame, spec: &ChartSpec, fill: bool, tension: f32, ink: &Ink) {
    let plot = plot_area(frame, 44.0, 16.0, 24.0);
    let max = spec.value_max();
    value_grid(frame, plot, max, "", ink);

    let points = line_points(plot, &spec.values, max);
    let color = to_color(spec.color_at(0));

    for (index, (name, _)) in spec.points().enumerate() {
        if let Some(point) = points.get(index) {
            let position = Point::new(point.x - label_width(name) / 2.0, plot.y + plot.height + 6.0);
            label(frame, name.to_string(), position, ink.label);
        }
    }

    let (Some(first), Some(last)) = (points.first().copied(), points.last().copied()) else {
        return;
    };

    if fill {
        let baseline = plot.y + plot.height;
        let area = Path::new(|builder| {
            builder.move_to(Point::new(first.x, baseline));
            builder.line_to(first);
            smooth_segments(builder, &points, tension);
            builder.line_to(Point::new(last.x, baseline));
            builder.close();
        });
        frame.fill(&area, color.scale_alpha(0.2));
    }

    let curve = Path::new(|builder| {
        builder.move_to(first);
        smooth_segments(builder, &points, tension);
    });
    frame.stroke(&curve, Stroke::default().with_color(color).with_width(2.0));

    for point in &points {
        frame.fill(&Path::circle(*point, 3.5), color);
    }
}

/// Canvas positions of line values, spread evenly across the plot.
fn line_points(plot: Rectangle, values: &[f64], max: f64) -> Vec<Point> {
    let step = if values.len() > 1 {
        plot.width / (values.len() - 1) as f32
    } else {
        0.0
    };
    let offset = if values.len() > 1 { 0.0 } else { plot.width / 2.0 };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Point::new(
                plot.x + offset + step * index as f32,
                plot.y + plot.height * (1.0 - ratio(*value, max)),
            )
        })
        .collect()
}

/// Cubic segments through `points` (after the first), Catmull-Rom style.
/// A tension of zero draws straight lines.
fn smooth_segments(builder: &mut canvas::path::Builder, points: &[Point], tension: f32) {
    let k = tension / 2.0;
    for i in 1..points.len() {
        let p0 = points[i.saturating_sub(2)];
        let p1 = points[i - 1];
        let p2 = points[i];
        let p3 = points[(i + 1).min(points.len() - 1)];

        let c1 = Point::new(p1.x + (p2.x - p0.x) * k, p1.y + (p2.y - p0.y) * k);
        let c2 = Point::new(p2.x - (p3.x - p1.x) * k, p2.y - (p3.y - p1.y) * k);
        builder.bezier_curve_to(c1, c2, p2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slices_cover_the_circle() {
        let angles = slice_angles(&[437.0, 498.0, 312.0]);
        assert_eq!(angles.len(), 3);
        assert!((angles[0].0 + FRAC_PI_2).abs() < 1e-6);
        assert!((angles[2].1 - (TAU - FRAC_PI_2)).abs() < 1e-4);
        assert_eq!(angles[0].1, angles[1].0);
    }

    #[test]
    fn test_zero_total_has_no_slices() {
        assert!(slice_angles(&[0.0, 0.0]).is_empty());
        assert!(slice_angles(&[]).is_empty());
    }

    #[test]
    fn test_arc_endpoints() {
        let points = arc_points(Point::ORIGIN, 10.0, 0.0, FRAC_PI_2);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - 10.0).abs() < 1e-4 && first.y.abs() < 1e-4);
        assert!(last.x.abs() < 1e-4 && (last.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_value_labels() {
        assert_eq!(format_value(25.0, "%"), "25%");
        assert_eq!(format_value(7.5, "%"), "7.5%");
        assert_eq!(format_value(68.3, ""), "68.3");
    }

    #[test]
    fn test_line_points_span_the_plot() {
        let plot = Rectangle {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let points = line_points(plot, &[0.0, 50.0, 100.0], 100.0);
        assert_eq!(points[0], Point::new(0.0, 50.0));
        assert_eq!(points[1], Point::new(50.0, 25.0));
        assert_eq!(points[2], Point::new(100.0, 0.0));

        let single = line_points(plot, &[10.0], 100.0);
        assert_eq!(single[0].x, 50.0);
    }

    #[test]
    fn test_ratio_clamps() {
        assert_eq!(ratio(150.0, 100.0), 1.0);
        assert_eq!(ratio(-1.0, 100.0), 0.0);
        assert_eq!(ratio(5.0, 0.0), 0.0);
    }
}

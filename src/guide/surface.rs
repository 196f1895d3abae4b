//! Drawing surface that turns guide primitives into egui shapes.

use bevy::prelude::*;
use bevy_egui::egui;

use super::primitives::{Paint, Primitive, Style};
use crate::constants::ARC_DEGREES_PER_SEGMENT;
use crate::theme;

/// Receives the primitives of one render.
pub trait DrawSurface {
    fn submit(&mut self, primitives: &[Primitive]);
}

/// Paints primitives with an egui painter. Primitive coordinates are relative
/// to `origin`, the top-left corner of the preview area.
pub struct EguiSurface {
    painter: egui::Painter,
    origin: egui::Pos2,
}

impl EguiSurface {
    pub fn new(painter: egui::Painter, origin: egui::Pos2) -> Self {
        Self { painter, origin }
    }
}

impl DrawSurface for EguiSurface {
    fn submit(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            match primitive {
                Primitive::Label {
                    position,
                    text,
                    size,
                    style,
                } => {
                    if text.is_empty() || *size <= 0.0 {
                        continue;
                    }
                    self.painter.text(
                        to_screen(*position, self.origin),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(*size),
                        theme::bevy_to_egui(style.color),
                    );
                }
                other => {
                    if let Some(shape) = shape_for(other, self.origin) {
                        self.painter.add(shape);
                    }
                }
            }
        }
    }
}

fn to_screen(point: Vec2, origin: egui::Pos2) -> egui::Pos2 {
    egui::pos2(origin.x + point.x, origin.y + point.y)
}

fn to_screen_rect(bounds: Rect, origin: egui::Pos2) -> egui::Rect {
    egui::Rect::from_min_max(to_screen(bounds.min, origin), to_screen(bounds.max, origin))
}

fn stroke(style: &Style) -> egui::Stroke {
    egui::Stroke::new(style.width, theme::bevy_to_egui(style.color))
}

/// Points along the arc inscribed in `bounds`, starting at `start_deg` and
/// turning `sweep_deg` degrees.
pub fn arc_points(bounds: Rect, start_deg: f32, sweep_deg: f32, origin: egui::Pos2) -> Vec<egui::Pos2> {
    let segments = (sweep_deg.abs() / ARC_DEGREES_PER_SEGMENT).ceil().max(1.0) as usize;
    let center = bounds.center();
    let radii = bounds.half_size();

    (0..=segments)
        .map(|i| {
            let angle = (start_deg + sweep_deg * i as f32 / segments as f32).to_radians();
            to_screen(
                center + Vec2::new(radii.x * angle.cos(), radii.y * angle.sin()),
                origin,
            )
        })
        .collect()
}

/// Shape for every primitive except labels, which need the painter's fonts.
pub fn shape_for(primitive: &Primitive, origin: egui::Pos2) -> Option<egui::Shape> {
    match primitive {
        Primitive::Line { from, to, style } => Some(egui::Shape::line_segment(
            [to_screen(*from, origin), to_screen(*to, origin)],
            stroke(style),
        )),
        Primitive::Rect { bounds, style } => {
            let rect = to_screen_rect(*bounds, origin);
            Some(match style.paint {
                Paint::Stroke => {
                    egui::Shape::rect_stroke(rect, 0.0, stroke(style), egui::StrokeKind::Middle)
                }
                Paint::Fill => egui::Shape::rect_filled(rect, 0.0, theme::bevy_to_egui(style.color)),
            })
        }
        Primitive::Arc {
            bounds,
            start_deg,
            sweep_deg,
            style,
        } => {
            let points = arc_points(*bounds, *start_deg, *sweep_deg, origin);
            Some(match style.paint {
                Paint::Stroke => egui::Shape::line(points, stroke(style)),
                Paint::Fill => {
                    // Pie wedge; convex for sweeps up to 180°
                    let mut wedge = Vec::with_capacity(points.len() + 1);
                    wedge.push(to_screen(bounds.center(), origin));
                    wedge.extend(points);
                    egui::Shape::convex_polygon(
                        wedge,
                        theme::bevy_to_egui(style.color),
                        egui::Stroke::NONE,
                    )
                }
            })
        }
        Primitive::Label { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn close(a: egui::Pos2, b: egui::Pos2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_arc_points_quarter_circle() {
        // Circle of radius 10 centered at (10, 0), from 90° to 180°
        let bounds = Rect::new(0.0, -10.0, 20.0, 10.0);
        let points = arc_points(bounds, 90.0, 90.0, egui::Pos2::ZERO);

        assert_eq!(points.len(), 31);
        assert!(close(points[0], egui::pos2(10.0, 10.0)));
        assert!(close(points[30], egui::pos2(0.0, 0.0)));
        for point in &points {
            let distance = egui::vec2(point.x - 10.0, point.y).length();
            assert!((distance - 10.0).abs() < EPS);
        }
    }

    #[test]
    fn test_arc_points_offset_by_origin() {
        let bounds = Rect::new(0.0, 0.0, 2.0, 2.0);
        let points = arc_points(bounds, 0.0, 90.0, egui::pos2(100.0, 50.0));
        assert!(close(points[0], egui::pos2(102.0, 51.0)));
    }

    #[test]
    fn test_arc_points_zero_sweep_has_two_points() {
        let bounds = Rect::new(0.0, 0.0, 2.0, 2.0);
        assert_eq!(arc_points(bounds, 45.0, 0.0, egui::Pos2::ZERO).len(), 2);
    }

    #[test]
    fn test_line_shape_is_translated() {
        let line = Primitive::line(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 5.0),
            Style::stroke(Color::WHITE, 4.0),
        );
        let Some(egui::Shape::LineSegment { points, stroke }) =
            shape_for(&line, egui::pos2(20.0, 30.0))
        else {
            panic!("expected a line segment");
        };
        assert_eq!(points, [egui::pos2(20.0, 30.0), egui::pos2(30.0, 35.0)]);
        assert_eq!(stroke.width, 4.0);
    }

    #[test]
    fn test_rect_shape_stroke_and_fill() {
        let bounds = Rect::new(1.0, 2.0, 3.0, 4.0);
        let stroked = Primitive::Rect {
            bounds,
            style: Style::stroke(Color::WHITE, 2.0),
        };
        let filled = Primitive::Rect {
            bounds,
            style: Style::fill(Color::WHITE),
        };

        let Some(egui::Shape::Rect(stroked)) = shape_for(&stroked, egui::Pos2::ZERO) else {
            panic!("expected a rect");
        };
        assert_eq!(stroked.rect, egui::Rect::from_min_max(egui::pos2(1.0, 2.0), egui::pos2(3.0, 4.0)));
        assert_eq!(stroked.stroke.width, 2.0);
        assert_eq!(stroked.fill, egui::Color32::TRANSPARENT);

        let Some(egui::Shape::Rect(filled)) = shape_for(&filled, egui::Pos2::ZERO) else {
            panic!("expected a rect");
        };
        assert_eq!(filled.fill, egui::Color32::WHITE);
    }

    #[test]
    fn test_filled_arc_is_a_wedge() {
        let arc = Primitive::Arc {
            bounds: Rect::new(0.0, 0.0, 20.0, 20.0),
            start_deg: 0.0,
            sweep_deg: 90.0,
            style: Style::fill(Color::WHITE),
        };
        let Some(egui::Shape::Path(path)) = shape_for(&arc, egui::Pos2::ZERO) else {
            panic!("expected a path");
        };
        assert!(path.closed);
        assert_eq!(path.points[0], egui::pos2(10.0, 10.0));
        assert_eq!(path.points.len(), 32);
    }

    #[test]
    fn test_stroked_arc_is_open_path() {
        let arc = Primitive::Arc {
            bounds: Rect::new(0.0, 0.0, 20.0, 20.0),
            start_deg: 0.0,
            sweep_deg: 90.0,
            style: Style::stroke(Color::WHITE, 3.0),
        };
        let Some(egui::Shape::Path(path)) = shape_for(&arc, egui::Pos2::ZERO) else {
            panic!("expected a path");
        };
        assert!(!path.closed);
        assert_eq!(path.points.len(), 31);
    }

    #[test]
    fn test_labels_have_no_plain_shape() {
        let label = Primitive::Label {
            position: Vec2::ZERO,
            text: "13".into(),
            size: 10.0,
            style: Style::fill(Color::WHITE),
        };
        assert!(shape_for(&label, egui::Pos2::ZERO).is_none());
    }
}

//! Drawing primitives produced by the guide layout engine.
//!
//! All coordinates are surface-absolute pixels with the origin in the top-left
//! corner and y pointing down. Angles are in degrees, 0° along +x, positive
//! angles turning clockwise on screen.

use bevy::prelude::*;

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceSize {
    pub width: f32,
    pub height: f32,
}

impl SurfaceSize {
    /// Negative, NaN and infinite dimensions are clamped to zero.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: clamp_dimension(width),
            height: clamp_dimension(height),
        }
    }

    pub fn min_dimension(&self) -> f32 {
        self.width.min(self.height)
    }
}

fn clamp_dimension(value: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paint {
    #[default]
    Stroke,
    Fill,
}

/// Immutable paint settings attached to each primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Color,
    pub width: f32,
    pub paint: Paint,
}

impl Style {
    pub const fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            paint: Paint::Stroke,
        }
    }

    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            width: 0.0,
            paint: Paint::Fill,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Vec2,
        to: Vec2,
        style: Style,
    },
    /// Axis-aligned rectangle.
    Rect { bounds: Rect, style: Style },
    /// Elliptical arc inscribed in `bounds`.
    Arc {
        bounds: Rect,
        start_deg: f32,
        sweep_deg: f32,
        style: Style,
    },
    /// Text centered on `position`.
    Label {
        position: Vec2,
        text: String,
        size: f32,
        style: Style,
    },
}

impl Primitive {
    pub fn line(from: Vec2, to: Vec2, style: Style) -> Self {
        Primitive::Line { from, to, style }
    }
}

#[cfg(test)]
impl Primitive {
    pub fn style(&self) -> &Style {
        match self {
            Primitive::Line { style, .. }
            | Primitive::Rect { style, .. }
            | Primitive::Arc { style, .. }
            | Primitive::Label { style, .. } => style,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Primitive::Line { .. })
    }

    pub fn is_rect(&self) -> bool {
        matches!(self, Primitive::Rect { .. })
    }

    pub fn is_arc(&self) -> bool {
        matches!(self, Primitive::Arc { .. })
    }

    pub fn is_label(&self) -> bool {
        matches!(self, Primitive::Label { .. })
    }
}

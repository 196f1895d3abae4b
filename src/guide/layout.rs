//! Geometry for every composition guide.
//!
//! Pure functions only: the same surface size, mode and spiral policy always
//! produce the same primitives.

use bevy::prelude::*;

use super::mode::CompositionMode;
use super::primitives::{Primitive, Style, SurfaceSize};
use super::spiral::{golden_spiral, SpiralPolicy};
use crate::constants::GUIDE_LINE_WIDTH;
use crate::theme;

/// Computes the primitives for `mode` on a surface of `size`.
pub fn compute(size: SurfaceSize, mode: CompositionMode, spiral: &SpiralPolicy) -> Vec<Primitive> {
    match mode {
        CompositionMode::Central => central_cross(size),
        CompositionMode::RuleOfThirds => rule_of_thirds(size),
        CompositionMode::Diagonal => diagonals(size),
        CompositionMode::GoldenRatio => golden_spiral(size, spiral),
    }
}

fn guide_style() -> Style {
    Style::stroke(theme::GUIDE_LINE, GUIDE_LINE_WIDTH)
}

fn vertical(x: f32, size: SurfaceSize) -> Primitive {
    Primitive::line(Vec2::new(x, 0.0), Vec2::new(x, size.height), guide_style())
}

fn horizontal(y: f32, size: SurfaceSize) -> Primitive {
    Primitive::line(Vec2::new(0.0, y), Vec2::new(size.width, y), guide_style())
}

pub fn central_cross(size: SurfaceSize) -> Vec<Primitive> {
    vec![
        vertical(size.width / 2.0, size),
        horizontal(size.height / 2.0, size),
    ]
}

pub fn rule_of_thirds(size: SurfaceSize) -> Vec<Primitive> {
    let third_width = size.width / 3.0;
    let third_height = size.height / 3.0;
    vec![
        vertical(third_width, size),
        vertical(2.0 * third_width, size),
        horizontal(third_height, size),
        horizontal(2.0 * third_height, size),
    ]
}

pub fn diagonals(size: SurfaceSize) -> Vec<Primitive> {
    vec![
        Primitive::line(Vec2::ZERO, Vec2::new(size.width, size.height), guide_style()),
        Primitive::line(
            Vec2::new(size.width, 0.0),
            Vec2::new(0.0, size.height),
            guide_style(),
        ),
    ]
}

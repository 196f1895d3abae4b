//! Golden-ratio spiral built from Fibonacci squares.
//!
//! Each term of the sequence becomes a square with a quarter-circle arc
//! inscribed in it. After every square the local frame is moved to the far
//! corner and turned a quarter turn counter-clockwise, so consecutive squares
//! sit side by side and the arcs join into one spiral.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::primitives::{Primitive, Style, SurfaceSize};
use crate::constants::{
    LANDSCAPE_FIT_ANCHOR_X_PX, LANDSCAPE_FIT_EXTRA_TERMS, LANDSCAPE_FIT_START_TURNS,
    MAX_SPIRAL_LABELS, MIN_FIT_ANCHOR_FRACTION, MIN_FIT_CUTOFF_FRACTION, MIN_FIT_EXTRA_TERMS,
    MIN_FIT_SCALE_FRACTION, SPIRAL_ARC_WIDTH, SPIRAL_LABEL_SIZE_FACTOR, SPIRAL_SQUARE_WIDTH,
};
use crate::theme;

/// How the spiral is sized and placed on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpiralFit {
    /// Scale from the smaller dimension, anchor at a fixed fraction of the
    /// surface, stop once a square grows past a cutoff.
    #[default]
    FitToMinDimension,
    /// Lay the spiral's golden rectangle wide, as large as the surface
    /// allows, flush with the left and bottom edges.
    FitToLandscapeWidth,
}

impl SpiralFit {
    pub fn all() -> &'static [SpiralFit] {
        &[SpiralFit::FitToMinDimension, SpiralFit::FitToLandscapeWidth]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SpiralFit::FitToMinDimension => "Fit to smaller side",
            SpiralFit::FitToLandscapeWidth => "Fill landscape width",
        }
    }

    /// Number of terms generated after the `[1, 1]` seed.
    pub fn extra_terms(&self) -> usize {
        match self {
            SpiralFit::FitToMinDimension => MIN_FIT_EXTRA_TERMS,
            SpiralFit::FitToLandscapeWidth => LANDSCAPE_FIT_EXTRA_TERMS,
        }
    }
}

/// Spiral settings, persisted in the app config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiralPolicy {
    #[serde(default)]
    pub fit: SpiralFit,
    /// Outline the square that bounds each arc
    #[serde(default = "default_true")]
    pub show_squares: bool,
    /// Print the Fibonacci number inside the first few squares
    #[serde(default = "default_true")]
    pub show_labels: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SpiralPolicy {
    fn default() -> Self {
        Self {
            fit: SpiralFit::default(),
            show_squares: true,
            show_labels: true,
        }
    }
}

/// Fibonacci sequence seeded with `[1, 1]` followed by `extra_terms` terms.
pub fn fibonacci(extra_terms: usize) -> Vec<u64> {
    let mut terms = vec![1u64, 1];
    for _ in 0..extra_terms {
        let next = terms[terms.len() - 1] + terms[terms.len() - 2];
        terms.push(next);
    }
    terms
}

/// Local drawing frame: a translation followed by whole quarter turns.
///
/// Quarter turns keep the mapping exact, so rectangles stay axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub origin: Vec2,
    /// Positive turns are clockwise on a y-down surface
    pub quarter_turns: i32,
}

impl Frame {
    pub fn at(origin: Vec2) -> Self {
        Self {
            origin,
            quarter_turns: 0,
        }
    }

    fn rotate(&self, v: Vec2) -> Vec2 {
        match self.quarter_turns.rem_euclid(4) {
            0 => v,
            1 => Vec2::new(-v.y, v.x),
            2 => Vec2::new(-v.x, -v.y),
            _ => Vec2::new(v.y, -v.x),
        }
    }

    pub fn map_point(&self, local: Vec2) -> Vec2 {
        self.origin + self.rotate(local)
    }

    pub fn map_rect(&self, local: Rect) -> Rect {
        Rect::from_corners(self.map_point(local.min), self.map_point(local.max))
    }

    /// Maps a local angle in degrees into surface space, normalized to `[0, 360)`.
    pub fn map_angle(&self, local_deg: f32) -> f32 {
        (local_deg + 90.0 * self.quarter_turns as f32).rem_euclid(360.0)
    }

    pub fn translated(self, local_offset: Vec2) -> Self {
        Self {
            origin: self.map_point(local_offset),
            ..self
        }
    }

    pub fn rotated(self, quarter_turns: i32) -> Self {
        Self {
            quarter_turns: self.quarter_turns + quarter_turns,
            ..self
        }
    }
}

/// One square of the spiral, positioned by its local frame.
#[derive(Debug, Clone, Copy)]
struct Segment {
    index: usize,
    value: u64,
    side: f32,
    frame: Frame,
}

impl Segment {
    fn square(&self) -> Rect {
        self.frame.map_rect(Rect::new(0.0, 0.0, self.side, self.side))
    }
}

/// Walks the squares starting from the `start` frame. With a `cutoff`, the
/// walk stops after the first square whose side exceeds it.
fn walk(terms: &[u64], scale: f32, start: Frame, cutoff: Option<f32>) -> Vec<Segment> {
    let mut frame = start;
    let mut segments = Vec::with_capacity(terms.len());

    for (index, &value) in terms.iter().enumerate() {
        let side = value as f32 * scale;
        segments.push(Segment {
            index,
            value,
            side,
            frame,
        });

        frame = frame.translated(Vec2::splat(side)).rotated(-1);

        if cutoff.is_some_and(|limit| side > limit) {
            break;
        }
    }

    segments
}

/// Scale, starting frame and cutoff for a fit policy on a given surface.
fn placement(size: SurfaceSize, fit: SpiralFit, terms: &[u64]) -> (f32, Frame, Option<f32>) {
    match fit {
        SpiralFit::FitToMinDimension => {
            let min = size.min_dimension();
            let (fx, fy) = MIN_FIT_ANCHOR_FRACTION;
            (
                min * MIN_FIT_SCALE_FRACTION,
                Frame::at(Vec2::new(size.width * fx, size.height * fy)),
                Some(min * MIN_FIT_CUTOFF_FRACTION),
            )
        }
        SpiralFit::FitToLandscapeWidth => {
            // Turned so the golden rectangle's long side runs along x
            let start = Frame::at(Vec2::ZERO).rotated(LANDSCAPE_FIT_START_TURNS);
            let Some(bounds) = walk(terms, 1.0, start, None)
                .iter()
                .map(Segment::square)
                .reduce(|acc, square| acc.union(square))
            else {
                return (0.0, start, None);
            };

            let scale = landscape_scale(size, bounds.size());
            let anchor = Vec2::new(
                LANDSCAPE_FIT_ANCHOR_X_PX - bounds.min.x * scale,
                size.height - bounds.max.y * scale,
            );
            (scale, Frame { origin: anchor, ..start }, None)
        }
    }
}

/// Largest scale at which a box of `extent` units still fits on the surface
/// right of the anchor offset. Wide surfaces are limited by their height.
fn landscape_scale(size: SurfaceSize, extent: Vec2) -> f32 {
    if extent.x <= 0.0 || extent.y <= 0.0 {
        return 0.0;
    }
    let usable_width = (size.width - LANDSCAPE_FIT_ANCHOR_X_PX).max(0.0);
    (usable_width / extent.x).min(size.height / extent.y)
}

/// Squares, arcs and labels of the golden spiral for `size`.
pub fn golden_spiral(size: SurfaceSize, policy: &SpiralPolicy) -> Vec<Primitive> {
    let terms = fibonacci(policy.fit.extra_terms());
    let (scale, start, cutoff) = placement(size, policy.fit, &terms);
    let segments = walk(&terms, scale, start, cutoff);

    let square_style = Style::stroke(theme::SPIRAL_SQUARE, SPIRAL_SQUARE_WIDTH);
    let arc_style = Style::stroke(theme::SPIRAL_ARC, SPIRAL_ARC_WIDTH);
    let label_style = Style::fill(theme::SPIRAL_LABEL);
    let label_size = scale * SPIRAL_LABEL_SIZE_FACTOR;

    let mut primitives = Vec::with_capacity(segments.len() * 3);
    for segment in &segments {
        let side = segment.side;
        let frame = segment.frame;

        if policy.show_squares {
            primitives.push(Primitive::Rect {
                bounds: segment.square(),
                style: square_style,
            });
        }

        // Quarter circle of radius `side` around the square's local (side, 0) corner
        primitives.push(Primitive::Arc {
            bounds: frame.map_rect(Rect::new(0.0, -side, 2.0 * side, side)),
            start_deg: frame.map_angle(90.0),
            sweep_deg: 90.0,
            style: arc_style,
        });

        if policy.show_labels && segment.index < MAX_SPIRAL_LABELS {
            primitives.push(Primitive::Label {
                position: frame.map_point(Vec2::splat(side / 2.0)),
                text: segment.value.to_string(),
                size: label_size,
                style: label_style,
            });
        }
    }

    primitives
}

//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

// ============================================================================
// Stroke Widths
// ============================================================================

/// Stroke width for the straight guide lines (center, thirds, diagonals)
pub const GUIDE_LINE_WIDTH: f32 = 4.0;

/// Stroke width for the Fibonacci squares outlining each spiral segment
pub const SPIRAL_SQUARE_WIDTH: f32 = 2.0;

/// Stroke width for the spiral arcs
pub const SPIRAL_ARC_WIDTH: f32 = 3.0;

// ============================================================================
// Golden Spiral
// ============================================================================

/// Terms added after the seed `[1, 1]` when fitting to the smaller dimension
pub const MIN_FIT_EXTRA_TERMS: usize = 8;

/// Square side per Fibonacci unit, as a fraction of the smaller dimension
pub const MIN_FIT_SCALE_FRACTION: f32 = 0.025;

/// Spiral anchor as a fraction of (width, height)
pub const MIN_FIT_ANCHOR_FRACTION: (f32, f32) = (0.3, 0.7);

/// The spiral stops once a square side exceeds this fraction of the smaller dimension
pub const MIN_FIT_CUTOFF_FRACTION: f32 = 0.3;

/// Terms added after the seed `[1, 1]` when fitting to the landscape width
pub const LANDSCAPE_FIT_EXTRA_TERMS: usize = 5;

/// Horizontal pixel offset of the spiral's bounding box in landscape fit
pub const LANDSCAPE_FIT_ANCHOR_X_PX: f32 = 0.0;

/// Quarter turns applied to the first square in landscape fit (negative is counter-clockwise)
pub const LANDSCAPE_FIT_START_TURNS: i32 = -1;

/// Only the first few squares get a Fibonacci number label
pub const MAX_SPIRAL_LABELS: usize = 6;

/// Label text size relative to the spiral scale
pub const SPIRAL_LABEL_SIZE_FACTOR: f32 = 0.8;

/// Degrees per polyline segment when an arc is flattened for drawing
pub const ARC_DEGREES_PER_SEGMENT: f32 = 3.0;

//! Centralized color theme for the application.
//!
//! This module provides all colors used for the guide overlay and the UI.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

// ============================================================================
// Guide Colors
// ============================================================================

/// Red for the center cross, thirds grid and diagonals
pub const GUIDE_LINE: Color = Color::srgb(1.0, 0.0, 0.0);

/// White outline of each Fibonacci square
pub const SPIRAL_SQUARE: Color = Color::WHITE;

/// Yellow spiral arcs
pub const SPIRAL_ARC: Color = Color::srgb(1.0, 1.0, 0.0);

/// White Fibonacci number labels
pub const SPIRAL_LABEL: Color = Color::WHITE;

// ============================================================================
// Preview Surface
// ============================================================================

/// Backdrop shown where the camera preview would be
pub const PREVIEW_BACKGROUND: Color = Color::srgb(0.08, 0.08, 0.09);

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (spiral settings bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (preserving alpha)
pub fn bevy_to_egui(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgba_unmultiplied(
        (srgba.red * 255.0) as u8,
        (srgba.green * 255.0) as u8,
        (srgba.blue * 255.0) as u8,
        (srgba.alpha * 255.0) as u8,
    )
}

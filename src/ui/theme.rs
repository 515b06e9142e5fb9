// SimHire - ui/theme.rs
//
// Colour scheme, level/category colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::{Category, Level};
use egui::Color32;

/// Primary accent (selected chips, range fill, handles).
pub const ACCENT: Color32 = Color32::from_rgb(147, 51, 234); // Purple 600

/// Badge colour for an experience level.
pub fn level_colour(level: &Level) -> Color32 {
    match level {
        Level::Beginner => Color32::from_rgb(22, 163, 74),      // Green 600
        Level::Intermediate => Color32::from_rgb(202, 138, 4),  // Yellow 600
        Level::Advanced => Color32::from_rgb(220, 38, 38),      // Red 600
        Level::Unknown => Color32::from_rgb(107, 114, 128),     // Gray 500
    }
}

/// Badge colour for a listing category.
pub fn category_colour(category: &Category) -> Color32 {
    match category {
        Category::Tryout => ACCENT,
        Category::Apprenticeship => Color32::from_rgb(37, 99, 235), // Blue 600
    }
}

/// Unfilled part of the range track.
pub fn track_colour(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(75, 85, 99) // Gray 600
    } else {
        Color32::from_rgb(229, 231, 235) // Gray 200
    }
}

/// Handle fill on the range track.
pub fn handle_fill(dark_mode: bool) -> Color32 {
    if dark_mode {
        Color32::from_rgb(31, 41, 55) // Gray 800
    } else {
        Color32::WHITE
    }
}

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 280.0;
pub const DETAIL_PANE_HEIGHT: f32 = 200.0;
pub const CARD_SPACING: f32 = 8.0;
pub const RANGE_TRACK_HEIGHT: f32 = 28.0;
pub const RANGE_TRACK_THICKNESS: f32 = 4.0;
pub const RANGE_HANDLE_RADIUS: f32 = 8.0;

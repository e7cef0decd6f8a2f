//! Color Constants for the admin theme
//!
//! Neutral gray page background with white cards and a blue accent.

use eframe::egui::Color32;

/// Page background - Light gray
pub const PAGE_BG: Color32 = Color32::from_rgb(0xF3, 0xF4, 0xF6);

/// Top bar background - Slate
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x1F, 0x29, 0x37);

/// Card and form background - White
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);

/// Card border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xD1, 0xD5, 0xDB);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF9, 0xFA, 0xFB);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);

/// Primary action - Blue
pub const ACCENT: Color32 = Color32::from_rgb(0x25, 0x63, 0xEB);

/// Registration action - Green
pub const REGISTER: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Edit button - Yellow
pub const EDIT: Color32 = Color32::from_rgb(0xFA, 0xCC, 0x15);

/// Delete button - Red
pub const DANGER: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Success color - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x16, 0xA3, 0x4A);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x26, 0x26);

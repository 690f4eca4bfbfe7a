//! Color theme constants
//!
//! A dark palette: near-black page, slate cards, blue tag badges and
//! purple category pills.

use ratatui::style::Color;

// ============================================================================
// Surfaces
// ============================================================================

/// Page background
pub const COLOR_PAGE_BG: Color = Color::Rgb(17, 24, 39);

/// Card and navbar background
pub const COLOR_CARD_BG: Color = Color::Rgb(31, 41, 55);

/// Card border
pub const COLOR_BORDER: Color = Color::Rgb(55, 65, 81);

// ============================================================================
// Text
// ============================================================================

/// Headings and titles
pub const COLOR_TEXT: Color = Color::White;

/// Handles, excerpts, nav items
pub const COLOR_MUTED: Color = Color::Rgb(156, 163, 175);

/// Bios
pub const COLOR_SUBTLE: Color = Color::Rgb(209, 213, 219);

/// Image references, dates, key hints
pub const COLOR_DIM: Color = Color::Rgb(107, 114, 128);

/// Error message text
pub const COLOR_ERROR: Color = Color::Rgb(239, 68, 68);

// ============================================================================
// Badges
// ============================================================================

/// Post tag badge background
pub const COLOR_TAG_BG: Color = Color::Rgb(37, 99, 235);

/// Category pill background
pub const COLOR_CATEGORY_BG: Color = Color::Rgb(147, 51, 234);

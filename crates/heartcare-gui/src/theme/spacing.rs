//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

pub const BORDER_RADIUS_SM: f32 = 4.0;
pub const BORDER_RADIUS_MD: f32 = 8.0;
pub const BORDER_RADIUS_LG: f32 = 12.0;

/// Full/pill radius - badges
pub const BORDER_RADIUS_FULL: f32 = 9999.0;

// =============================================================================
// BORDER WIDTHS
// =============================================================================

pub const BORDER_WIDTH_THIN: f32 = 1.0;
pub const BORDER_WIDTH_MEDIUM: f32 = 2.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

pub const ICON_SIZE_SM: f32 = 16.0;
pub const ICON_SIZE_MD: f32 = 20.0;
pub const ICON_SIZE_LG: f32 = 28.0;

/// Maximum width of page content on wide windows
pub const CONTENT_MAX_WIDTH: f32 = 1200.0;

/// Alert dialog width
pub const MODAL_WIDTH: f32 = 420.0;

/// Diameter of the results gauge
pub const GAUGE_SIZE: f32 = 180.0;

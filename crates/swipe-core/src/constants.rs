//! Global constants for swipe-core

/// Fraction of the viewport width a drag must cover to change panels
pub const DEFAULT_PANEL_THRESHOLD: f32 = 0.1;

/// Duration of the snap transition in seconds
pub const DEFAULT_TRANSITION_DURATION: f32 = 0.5;

/// Panel selected at startup (1-based)
pub const DEFAULT_INITIAL_PANEL: usize = 2;

/// Number of panels in the default configuration
pub const DEFAULT_PANEL_COUNT: usize = 3;

/// Horizontal distance between default panel anchors
pub const DEFAULT_PANEL_SPACING: f32 = 1280.0;

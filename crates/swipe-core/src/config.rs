//! Swiper configuration
//!
//! Panel anchors and timing settings, serialized as RON so a host can ship
//! its layout alongside other assets. Configuration is validated before a
//! [`PanelSwiper`](crate::PanelSwiper) is built from it.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_INITIAL_PANEL, DEFAULT_PANEL_COUNT, DEFAULT_PANEL_SPACING, DEFAULT_PANEL_THRESHOLD,
    DEFAULT_TRANSITION_DURATION,
};

/// On-disk form; an omitted `number_of_panels` follows the anchor count
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ConfigData {
    anchors: Vec<Vec3>,
    number_of_panels: Option<usize>,
    panel_threshold: f32,
    transition_duration: f32,
    initial_panel: Option<usize>,
}

impl Default for ConfigData {
    fn default() -> Self {
        let config = SwiperConfig::default();
        Self {
            anchors: config.anchors,
            number_of_panels: None,
            panel_threshold: config.panel_threshold,
            transition_duration: config.transition_duration,
            initial_panel: config.initial_panel,
        }
    }
}

impl From<ConfigData> for SwiperConfig {
    fn from(data: ConfigData) -> Self {
        Self {
            number_of_panels: data.number_of_panels.unwrap_or(data.anchors.len()),
            anchors: data.anchors,
            panel_threshold: data.panel_threshold,
            transition_duration: data.transition_duration,
            initial_panel: data.initial_panel,
        }
    }
}

/// Panel layout and swipe behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "ConfigData")]
pub struct SwiperConfig {
    /// Home position of each panel, ordered left to right
    pub anchors: Vec<Vec3>,
    /// Declared panel count (must match `anchors.len()`)
    pub number_of_panels: usize,
    /// Fraction of the viewport width a drag must cover to change panels
    pub panel_threshold: f32,
    /// Snap transition duration in seconds (0 = instant)
    pub transition_duration: f32,
    /// Panel selected at startup (1-based). Defaults to the second panel,
    /// or the only panel when there is just one.
    pub initial_panel: Option<usize>,
}

impl Default for SwiperConfig {
    fn default() -> Self {
        Self::evenly_spaced(DEFAULT_PANEL_COUNT, DEFAULT_PANEL_SPACING)
    }
}

impl SwiperConfig {
    /// Create a config from anchors with default timing
    pub fn new(anchors: Vec<Vec3>) -> Self {
        Self {
            number_of_panels: anchors.len(),
            anchors,
            panel_threshold: DEFAULT_PANEL_THRESHOLD,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            initial_panel: None,
        }
    }

    /// Create `count` panels spaced `spacing` apart along X, starting at 0
    pub fn evenly_spaced(count: usize, spacing: f32) -> Self {
        let anchors = (0..count)
            .map(|i| Vec3::new(i as f32 * spacing, 0.0, 0.0))
            .collect();
        Self::new(anchors)
    }

    /// Set the drag threshold
    pub fn with_threshold(mut self, panel_threshold: f32) -> Self {
        self.panel_threshold = panel_threshold;
        self
    }

    /// Set the transition duration
    pub fn with_duration(mut self, transition_duration: f32) -> Self {
        self.transition_duration = transition_duration;
        self
    }

    /// Set the startup panel (1-based)
    pub fn with_initial_panel(mut self, index: usize) -> Self {
        self.initial_panel = Some(index);
        self
    }

    /// Startup panel after defaults are applied
    pub fn effective_initial_panel(&self) -> usize {
        self.initial_panel
            .unwrap_or_else(|| DEFAULT_INITIAL_PANEL.min(self.anchors.len()).max(1))
    }

    /// Check the config for inconsistencies
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.anchors.is_empty() {
            return Err(ConfigError::NoPanels);
        }
        if self.number_of_panels != self.anchors.len() {
            return Err(ConfigError::PanelCountMismatch {
                declared: self.number_of_panels,
                anchors: self.anchors.len(),
            });
        }
        if !(self.panel_threshold > 0.0 && self.panel_threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(self.panel_threshold));
        }
        if self.transition_duration.is_nan() || self.transition_duration < 0.0 {
            return Err(ConfigError::InvalidDuration(self.transition_duration));
        }
        let index = self.effective_initial_panel();
        if index == 0 || index > self.anchors.len() {
            return Err(ConfigError::InvalidInitialPanel {
                index,
                count: self.anchors.len(),
            });
        }
        Ok(())
    }

    /// Parse a config from RON text
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigError> {
        let config: SwiperConfig =
            ron::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty RON text
    pub fn to_ron_string(&self) -> Result<String, ConfigError> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_ron_str(&content)
    }

    /// Save the config to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = self.to_ron_string()?;
        std::fs::write(path.as_ref(), content).map_err(|e| ConfigError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("Deserialization error: {0}")]
    Deserialize(String),
    #[error("No panels configured")]
    NoPanels,
    #[error("Panel count mismatch: number_of_panels is {declared} but {anchors} anchors given")]
    PanelCountMismatch { declared: usize, anchors: usize },
    #[error("Panel threshold must be in (0, 1), got {0}")]
    InvalidThreshold(f32),
    #[error("Transition duration must be >= 0, got {0}")]
    InvalidDuration(f32),
    #[error("Initial panel {index} out of range 1..={count}")]
    InvalidInitialPanel { index: usize, count: usize },
}

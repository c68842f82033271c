//! Panel swiper state machine
//!
//! Tracks the container's rest position and the active panel, turns drag
//! input into live displacement, and decides on drag end whether to snap to
//! a neighboring panel or spring back.

use glam::Vec3;

use crate::config::{ConfigError, SwiperConfig};
use crate::transition::Transition;

/// Result of a finished drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Dragging is disabled
    Ignored,
    /// Drag was shorter than the threshold
    SnappedBack,
    /// Moved to the panel on the right
    Advanced { index: usize },
    /// Moved to the panel on the left
    Retreated { index: usize },
    /// Threshold crossed but already at the edge
    Blocked { index: usize },
}

/// Swipe-between-panels behavior bound to one container
#[derive(Debug, Clone)]
pub struct PanelSwiper {
    config: SwiperConfig,
    /// Container position when no drag or transition is in progress
    rest_position: Vec3,
    /// Position the host should render this frame
    position: Vec3,
    /// Active panel, 1-based
    current_index: usize,
    drag_enabled: bool,
    transition: Transition,
}

impl PanelSwiper {
    /// Create a swiper for a container currently at `initial_position`
    pub fn new(config: SwiperConfig, initial_position: Vec3) -> Result<Self, SwiperError> {
        config.validate()?;
        let current_index = config.effective_initial_panel();

        tracing::debug!(
            "PanelSwiper created with {} panels, starting at panel {}",
            config.anchors.len(),
            current_index
        );

        Ok(Self {
            config,
            rest_position: initial_position,
            position: initial_position,
            current_index,
            drag_enabled: true,
            transition: Transition::Idle,
        })
    }

    /// Create a swiper with the container already centered on its initial panel
    pub fn at_initial_panel(config: SwiperConfig) -> Result<Self, SwiperError> {
        config.validate()?;
        let anchor = config.anchors[config.effective_initial_panel() - 1];
        Self::new(config, select_target(anchor))
    }

    // ============== Accessors ==============

    /// Live container position
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Position the container settles at when idle
    pub fn rest_position(&self) -> Vec3 {
        self.rest_position
    }

    /// Active panel (1-based)
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of panels
    pub fn number_of_panels(&self) -> usize {
        self.config.anchors.len()
    }

    /// Panel anchors, left to right
    pub fn anchors(&self) -> &[Vec3] {
        &self.config.anchors
    }

    /// Configuration this swiper was built from
    pub fn config(&self) -> &SwiperConfig {
        &self.config
    }

    /// Whether drag input is accepted
    pub fn drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    /// Open or close the drag gate
    pub fn set_drag_enabled(&mut self, enabled: bool) {
        self.drag_enabled = enabled;
    }

    /// Whether a snap transition is running
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    /// Where the running transition will settle
    pub fn transition_target(&self) -> Option<Vec3> {
        self.transition.target()
    }

    // ============== Drag tracking ==============

    /// Pointer pressed and started dragging.
    ///
    /// Any running transition stops so the drag is the only writer of the
    /// live position.
    pub fn on_drag_start(&mut self) {
        if !self.drag_enabled {
            return;
        }
        if self.transition.is_animating() {
            tracing::debug!("Drag started mid-transition, cancelling transition");
            self.transition.cancel();
        }
    }

    /// Pointer moved while dragging. Returns whether the live position changed.
    pub fn on_drag_move(&mut self, press_x: f32, current_x: f32) -> bool {
        if !self.drag_enabled {
            return false;
        }
        self.transition.cancel();

        // Positive delta = dragging left, towards the next panel
        let delta = press_x - current_x;
        let allowed = if self.is_last_panel() {
            delta < 0.0
        } else if self.is_first_panel() {
            delta > 0.0
        } else {
            true
        };

        // A blocked direction holds the container at rest, including after
        // cancelling a transition part way
        self.position = if allowed {
            self.rest_position - Vec3::new(delta, 0.0, 0.0)
        } else {
            self.rest_position
        };
        allowed
    }

    /// Pointer released. Picks the new rest position and starts the snap.
    pub fn on_drag_end(
        &mut self,
        press_x: f32,
        current_x: f32,
        viewport_width: f32,
    ) -> SwipeOutcome {
        if !self.drag_enabled {
            return SwipeOutcome::Ignored;
        }

        let fraction = if viewport_width > 0.0 {
            (press_x - current_x) / viewport_width
        } else {
            f32::NAN
        };
        let fraction = if fraction.is_finite() {
            fraction
        } else {
            tracing::warn!(
                "Invalid drag (press {}, current {}, viewport {}), snapping back",
                press_x,
                current_x,
                viewport_width
            );
            0.0
        };

        let outcome = if fraction.abs() < self.config.panel_threshold {
            SwipeOutcome::SnappedBack
        } else if fraction > 0.0 {
            if self.current_index < self.number_of_panels() {
                self.current_index += 1;
                SwipeOutcome::Advanced {
                    index: self.current_index,
                }
            } else {
                SwipeOutcome::Blocked {
                    index: self.current_index,
                }
            }
        } else if self.current_index > 1 {
            self.current_index -= 1;
            SwipeOutcome::Retreated {
                index: self.current_index,
            }
        } else {
            SwipeOutcome::Blocked {
                index: self.current_index,
            }
        };

        let target = match outcome {
            SwipeOutcome::Advanced { index } | SwipeOutcome::Retreated { index } => {
                swipe_target(self.anchor(index))
            }
            _ => self.rest_position,
        };

        tracing::debug!(
            "Drag ended: fraction {:.3} -> {:?}, target {:?}",
            fraction,
            outcome,
            target
        );

        self.rest_position = target;
        self.start_transition(target);
        outcome
    }

    // ============== Panel selection ==============

    /// Jump to a panel by index (1-based). Returns `Ok(false)` if it is
    /// already the active panel.
    pub fn select_panel(&mut self, target_index: usize) -> Result<bool, SwiperError> {
        let count = self.number_of_panels();
        if target_index == 0 || target_index > count {
            tracing::warn!("Rejected panel selection {} (have {})", target_index, count);
            return Err(SwiperError::InvalidPanelIndex {
                index: target_index,
                count,
            });
        }
        if target_index == self.current_index {
            return Ok(false);
        }

        self.drag_enabled = true;

        let target = select_target(self.anchor(target_index));
        tracing::debug!(
            "Selecting panel {} (from {}), target {:?}",
            target_index,
            self.current_index,
            target
        );

        self.start_transition(target);
        self.rest_position = target;
        self.current_index = target_index;
        Ok(true)
    }

    // ============== Frame update ==============

    /// Advance the running transition by `dt` seconds.
    ///
    /// Returns `true` while the transition still needs frames.
    pub fn tick(&mut self, dt: f32) -> bool {
        if let Some(position) = self.transition.advance(dt) {
            tracing::trace!("Transition step: {:?}", position);
            self.position = position;
        }
        self.transition.is_animating()
    }

    fn start_transition(&mut self, end: Vec3) {
        // Replaces any transition still in flight
        self.transition = Transition::begin(self.position, end, self.config.transition_duration);
        if !self.transition.is_animating() {
            self.position = end;
        }
    }

    fn anchor(&self, index: usize) -> Vec3 {
        self.config.anchors[index - 1]
    }

    fn is_first_panel(&self) -> bool {
        self.current_index == 1
    }

    fn is_last_panel(&self) -> bool {
        self.current_index == self.number_of_panels()
    }
}

/// Container position that centers a panel reached by swiping
fn swipe_target(anchor: Vec3) -> Vec3 {
    Vec3::new(-anchor.x, 0.0, 0.0)
}

/// Container position that centers a panel picked by index
fn select_target(anchor: Vec3) -> Vec3 {
    Vec3::new(-anchor.x, -anchor.y, anchor.z)
}

/// Swiper errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwiperError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Panel index {index} out of range 1..={count}")]
    InvalidPanelIndex { index: usize, count: usize },
}

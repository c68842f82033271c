//! Panel Swiper Core
//!
//! Drag-to-swipe behavior for a horizontal row of panels. A drag that covers
//! enough of the viewport snaps the container to the neighboring panel; a
//! shorter drag springs back. Transitions are eased with smoothstep and
//! advanced by frame ticks supplied by the host.
//!
//! # Module Structure
//!
//! ```text
//! swipe-core/
//! ├── config.rs      # SwiperConfig, RON load/save, validation
//! ├── constants.rs   # Default values
//! ├── transition.rs  # Frame-driven eased transition state machine
//! └── swiper.rs      # PanelSwiper: drag tracker and panel selector
//! ```

pub mod config;
pub mod constants;
pub mod swiper;
pub mod transition;

// Re-exports for convenience
pub use config::{ConfigError, SwiperConfig};
pub use swiper::{PanelSwiper, SwipeOutcome, SwiperError};
pub use transition::{Transition, smoothstep};

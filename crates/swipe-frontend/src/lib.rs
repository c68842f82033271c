//! Panel Swiper Frontend
//!
//! egui host that renders a row of panels and drives a
//! [`swipe_core::PanelSwiper`] from pointer drags, panel buttons and frame
//! time.

pub mod app;
pub mod theme;

// Re-exports for convenience
pub use app::PanelSwiperApp;

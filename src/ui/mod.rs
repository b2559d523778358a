//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Styles resolved from the current theme
//! - Reusable widgets
//! - Page views
//! - Main render loop

pub mod render;
pub mod theme;
pub mod widgets;

pub use render::{content_area, hover_label, hover_targets, render};
pub use theme::Styles;

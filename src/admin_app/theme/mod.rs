//! Theme Module
//!
//! Color scheme and frame helpers for the admin views.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::admin_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::card_frame().show(ui, |ui| {
//!     // Product card content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;

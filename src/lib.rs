//! Procedural renderer for the diamond app icon.
//!
//! Produces two PNG files: `app_icon.png`, the logo on a dark vertical
//! gradient, and `app_icon_foreground.png`, the same logo on a transparent
//! canvas for use as an Android adaptive-icon foreground layer.

pub mod config;
pub mod icon_gen;
pub mod raster;
pub mod shape;

pub use config::{Color, IconConfig, Point};
pub use icon_gen::{
    render_opaque_icon, render_transparent_foreground, save_icon_set, IconSetPaths,
};

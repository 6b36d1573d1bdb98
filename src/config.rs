//! Icon configuration: colors, anchor point and the geometry constants of the
//! diamond logo.
//!
//! Every render operation receives an [`IconConfig`] instead of reading
//! module-level constants, so the renderer stays pure and any variant of the
//! logo can be produced in tests.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{path::Path, str::FromStr};

/// Side length of the reference design, in pixels.
pub const REFERENCE_SIZE: u32 = 1024;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, floored per channel.
    pub fn lerp(self, end: Color, ratio: f64) -> Color {
        let channel = |start: u8, end: u8| -> u8 {
            let start = start as f64;
            let end = end as f64;
            (start + (end - start) * ratio).floor().clamp(0.0, 255.0) as u8
        };

        Color {
            r: channel(self.r, end.r),
            g: channel(self.g, end.g),
            b: channel(self.b, end.b),
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    /// Parses any CSS color (`#f3ba2f`, `rgb(243, 186, 47)`, `gold`, ...).
    /// The alpha component, if any, is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let color = css_color::Srgb::from_str(s)
            .map_err(|_| anyhow::anyhow!("Invalid color: {}", s))?;

        let to_u8 = |c: f32| (c * 255.).round().clamp(0., 255.) as u8;
        Ok(Color::new(
            to_u8(color.red),
            to_u8(color.green),
            to_u8(color.blue),
        ))
    }
}

impl TryFrom<String> for Color {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Integer pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// All the constants that define the logo.
///
/// Geometry values are absolute pixel measurements for a canvas of `size`.
/// They are coupled to `size`: use [`IconConfig::scaled_to`] to change the
/// canvas size and keep the proportions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Canvas width and height.
    pub size: u32,
    /// Gradient color at the top row of the opaque icon.
    pub gradient_start: Color,
    /// Gradient color the bottom row tends towards.
    pub gradient_end: Color,
    /// Color of every highlighted shape.
    pub accent: Color,
    /// Fill of the inner diamond.
    pub cutout: Color,
    pub diamond_radius: i32,
    pub inner_radius: i32,
    /// Stroke width of the four spokes.
    pub spoke_width: u32,
    /// Half the side of the center square.
    pub square_half: i32,
    pub dot_radius: i32,
    /// Half the length of each accent line.
    pub accent_length: i32,
    pub accent_width: u32,
    /// Distance between an outer vertex and its accent line.
    pub accent_offset: i32,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: REFERENCE_SIZE,
            gradient_start: Color::new(25, 25, 28),
            gradient_end: Color::new(15, 15, 18),
            accent: Color::new(243, 186, 47),
            cutout: Color::new(30, 30, 35),
            diamond_radius: 280,
            inner_radius: 160,
            spoke_width: 18,
            square_half: 45,
            dot_radius: 25,
            accent_length: 60,
            accent_width: 12,
            accent_offset: 40,
        }
    }
}

impl IconConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: IconConfig = serde_json::from_str(&data)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if config.size == 0 {
            anyhow::bail!("Icon size must be at least 1 pixel: {}", path.display());
        }

        Ok(config)
    }

    /// The point every shape is laid out around: the canvas midpoint.
    pub fn anchor(&self) -> Point {
        let half = (self.size / 2) as i32;
        Point::new(half, half)
    }

    /// Returns a copy rendered at `size` with all geometry scaled by the same
    /// factor. Stroke widths never drop below one pixel.
    ///
    /// A zero-sized config has no proportions to keep, so its geometry is
    /// copied unchanged.
    pub fn scaled_to(&self, size: u32) -> Self {
        let factor = if self.size == 0 {
            1.0
        } else {
            size as f64 / self.size as f64
        };
        let length = |v: i32| (v as f64 * factor).round() as i32;
        let width = |v: u32| ((v as f64 * factor).round() as u32).max(1);

        Self {
            size,
            diamond_radius: length(self.diamond_radius),
            inner_radius: length(self.inner_radius),
            spoke_width: width(self.spoke_width),
            square_half: length(self.square_half),
            dot_radius: length(self.dot_radius),
            accent_length: length(self.accent_length),
            accent_width: width(self.accent_width),
            accent_offset: length(self.accent_offset),
            ..self.clone()
        }
    }
}

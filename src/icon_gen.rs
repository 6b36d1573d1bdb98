//! Renders the app icon and its adaptive-icon foreground and writes both as PNG.

use crate::{
    config::{Color, IconConfig},
    raster::{self, Canvas, Paint},
    shape,
};
use anyhow::{Context, Result};
use clap::Parser;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

pub const DEFAULT_OUTPUT_DIR: &str = "assets/icon";
pub const APP_ICON_FILE: &str = "app_icon.png";
pub const FOREGROUND_FILE: &str = "app_icon_foreground.png";

#[derive(Debug, Parser)]
#[clap(
    name = "diamond-icon",
    about = "Render the diamond app icon and its Android adaptive-icon foreground"
)]
pub struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// JSON file overriding colors and geometry. Missing fields keep their defaults.
    #[clap(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render at this size instead. All geometry is scaled to match.
    #[clap(short, long, value_name = "PX", value_parser = clap::value_parser!(u32).range(1..))]
    pub size: Option<u32>,

    /// The accent color (CSS color format)
    #[clap(long, value_name = "COLOR")]
    pub accent: Option<String>,
}

/// Paths of the files written by [`save_icon_set`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSetPaths {
    pub app_icon: PathBuf,
    pub foreground: PathBuf,
}

pub fn generate_icons(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;

    let paths = save_icon_set(&args.output, &config)?;

    println!();
    println!("✅ Icons generated successfully!");
    println!("  - {}", paths.app_icon.display());
    println!("  - {}", paths.foreground.display());
    println!();
    println!("To apply the icons, run:");
    println!("  flutter pub get");
    println!("  flutter pub run flutter_launcher_icons");

    Ok(())
}

/// Layer the CLI options over the defaults: config file, then size, then accent.
pub fn resolve_config(args: &Args) -> Result<IconConfig> {
    let mut config = match &args.config {
        Some(path) => IconConfig::from_json_file(path)?,
        None => IconConfig::default(),
    };

    if let Some(size) = args.size {
        config = config.scaled_to(size);
    }

    if let Some(accent) = &args.accent {
        config.accent = accent
            .parse::<Color>()
            .context("Failed to parse --accent")?;
    }

    Ok(config)
}

/// The app icon: gradient background with the logo on top.
pub fn render_opaque_icon(config: &IconConfig) -> RgbImage {
    let mut canvas = RgbImage::new(config.size, config.size);

    raster::fill_vertical_gradient(&mut canvas, config.gradient_start, config.gradient_end);
    raster::paint_shapes(&mut canvas, &shape::logo_shapes(config));

    canvas
}

/// The adaptive-icon foreground: the logo alone on a fully transparent canvas.
pub fn render_transparent_foreground(config: &IconConfig) -> RgbaImage {
    // New buffers are zeroed, i.e. transparent
    let mut canvas = RgbaImage::new(config.size, config.size);

    raster::paint_shapes(&mut canvas, &shape::logo_shapes(config));

    canvas
}

/// Render both icons and write them into `out_dir`, creating it if needed.
pub fn save_icon_set(out_dir: &Path, config: &IconConfig) -> Result<IconSetPaths> {
    create_dir_all(out_dir)
        .with_context(|| format!("Can't create output directory {}", out_dir.display()))?;

    let paths = IconSetPaths {
        app_icon: out_dir.join(APP_ICON_FILE),
        foreground: out_dir.join(FOREGROUND_FILE),
    };

    println!("Generating {}...", APP_ICON_FILE);
    let icon = render_opaque_icon(config);
    save_png(&icon, &paths.app_icon)?;
    println!("✓ Generated {}", paths.app_icon.display());

    println!("Generating {} for Android...", FOREGROUND_FILE);
    let foreground = render_transparent_foreground(config);
    save_png(&foreground, &paths.foreground)?;
    println!("✓ Generated {}", paths.foreground.display());

    Ok(paths)
}

/// Encode a canvas as PNG, keeping its channel layout (RGB or RGBA).
fn save_png<P: Paint>(canvas: &Canvas<P>, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);

    write_png(
        canvas.as_raw(),
        &mut out_file,
        canvas.width(),
        canvas.height(),
        P::COLOR_TYPE,
    )
    .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file.flush()?;

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(
    image_data: &[u8],
    w: W,
    width: u32,
    height: u32,
    color_type: ColorType,
) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, color_type)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};
    use tempfile::TempDir;

    const GOLD: Rgb<u8> = Rgb([243, 186, 47]);
    const CUTOUT: Rgb<u8> = Rgb([30, 30, 35]);

    fn args(output: PathBuf) -> Args {
        Args {
            output,
            config: None,
            size: None,
            accent: None,
        }
    }

    #[test]
    fn test_opaque_icon_gradient_ends() {
        let icon = render_opaque_icon(&IconConfig::default());

        assert_eq!(icon.dimensions(), (1024, 1024));
        assert_eq!(*icon.get_pixel(0, 0), Rgb([25, 25, 28]));
        assert_eq!(*icon.get_pixel(1023, 0), Rgb([25, 25, 28]));
        assert_eq!(*icon.get_pixel(0, 1023), Rgb([15, 15, 18]));
        assert_eq!(*icon.get_pixel(100, 100), Rgb([24, 24, 27]));
    }

    #[test]
    fn test_center_square_wins_at_center() {
        let icon = render_opaque_icon(&IconConfig::default());
        assert_eq!(*icon.get_pixel(512, 512), GOLD);
    }

    #[test]
    fn test_outer_vertices_are_accent() {
        let icon = render_opaque_icon(&IconConfig::default());
        for (x, y) in [(512, 232), (792, 512), (512, 792), (232, 512)] {
            assert_eq!(*icon.get_pixel(x, y), GOLD, "vertex ({x}, {y})");
        }
    }

    #[test]
    fn test_logo_regions() {
        let icon = render_opaque_icon(&IconConfig::default());

        // Inside the inner diamond, away from the spokes and the square
        assert_eq!(*icon.get_pixel(600, 470), CUTOUT);
        // Ring between the two diamonds
        assert_eq!(*icon.get_pixel(712, 492), GOLD);
        // Spoke on the horizontal axis
        assert_eq!(*icon.get_pixel(620, 512), GOLD);
        // Accent line above the top vertex
        assert_eq!(*icon.get_pixel(512, 192), GOLD);
        assert_eq!(*icon.get_pixel(460, 192), GOLD);
        // Gap between the top dot and its accent line
        assert_ne!(*icon.get_pixel(512, 203), GOLD);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = IconConfig::default();
        assert_eq!(render_opaque_icon(&config), render_opaque_icon(&config));
        assert_eq!(
            render_transparent_foreground(&config),
            render_transparent_foreground(&config)
        );
    }

    #[test]
    fn test_foreground_transparency() {
        let foreground = render_transparent_foreground(&IconConfig::default());

        assert_eq!(foreground.dimensions(), (1024, 1024));
        for (x, y) in [(0, 0), (0, 1023), (1023, 0), (1023, 1023)] {
            assert_eq!(foreground.get_pixel(x, y)[3], 0, "corner ({x}, {y})");
        }
        assert_eq!(*foreground.get_pixel(512, 512), Rgba([243, 186, 47, 255]));
        assert_eq!(*foreground.get_pixel(600, 470), Rgba([30, 30, 35, 255]));
    }

    #[test]
    fn test_foreground_matches_icon_where_painted() {
        let config = IconConfig::default();
        let icon = render_opaque_icon(&config);
        let foreground = render_transparent_foreground(&config);

        for (x, y, pixel) in foreground.enumerate_pixels() {
            if pixel[3] == 255 {
                assert_eq!(pixel.0[..3], icon.get_pixel(x, y).0[..]);
            }
        }
    }

    #[test]
    fn test_save_icon_set_twice() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let out_dir = temp_dir.path().join("assets").join("icon");
        let config = IconConfig::default().scaled_to(64);

        let first = save_icon_set(&out_dir, &config).expect("First run failed");
        let second = save_icon_set(&out_dir, &config).expect("Second run failed");
        assert_eq!(first, second);

        let icon = image::open(&first.app_icon).expect("Failed to decode app icon");
        assert_eq!(icon.color(), ColorType::Rgb8);
        assert_eq!((icon.width(), icon.height()), (64, 64));

        let foreground = image::open(&first.foreground).expect("Failed to decode foreground");
        assert_eq!(foreground.color(), ColorType::Rgba8);
        assert_eq!((foreground.width(), foreground.height()), (64, 64));
    }

    #[test]
    fn test_save_icon_set_fails_when_output_is_a_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = save_icon_set(&blocker.join("icon"), &IconConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_config_precedence() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("icon.json");
        std::fs::write(&config_path, r##"{ "accent": "#112233", "dot_radius": 50 }"##).unwrap();

        let mut args = args(temp_dir.path().to_path_buf());
        args.config = Some(config_path);
        args.size = Some(512);

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.size, 512);
        assert_eq!(config.dot_radius, 25);
        assert_eq!(config.accent, Color::new(0x11, 0x22, 0x33));

        args.accent = Some("#ffffff".to_string());
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.accent, Color::new(255, 255, 255));
    }

    #[test]
    fn test_resolve_config_rejects_zero_size_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("icon.json");
        std::fs::write(&config_path, r#"{ "size": 0 }"#).unwrap();

        let mut args = args(temp_dir.path().to_path_buf());
        args.config = Some(config_path);
        args.size = Some(64);

        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_oversized_geometry_is_clipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("icon.json");
        std::fs::write(
            &config_path,
            r#"{
                "size": 64,
                "diamond_radius": 2147483647,
                "inner_radius": 1000000,
                "spoke_width": 4294967295,
                "square_half": 5000,
                "dot_radius": 2147483647,
                "accent_length": 2147483647,
                "accent_width": 1,
                "accent_offset": 2147483647
            }"#,
        )
        .unwrap();

        let mut args = args(temp_dir.path().to_path_buf());
        args.config = Some(config_path);
        let config = resolve_config(&args).unwrap();

        let icon = render_opaque_icon(&config);
        assert_eq!(icon.dimensions(), (64, 64));
        // The center square alone already covers the whole canvas
        assert!(icon.pixels().all(|p| *p == GOLD));

        let foreground = render_transparent_foreground(&config);
        assert!(foreground.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_negative_geometry_renders() {
        let config = IconConfig {
            size: 64,
            diamond_radius: -20,
            inner_radius: -10,
            square_half: -4,
            dot_radius: -3,
            accent_length: -5,
            accent_offset: -70,
            ..IconConfig::default().scaled_to(64)
        };

        let icon = render_opaque_icon(&config);
        assert_eq!(icon.dimensions(), (64, 64));
        assert_eq!(*icon.get_pixel(32, 32), GOLD);
        assert_eq!(*icon.get_pixel(0, 0), Rgb([25, 25, 28]));

        let foreground = render_transparent_foreground(&config);
        assert_eq!(foreground.get_pixel(0, 0)[3], 0);
        assert_eq!(foreground.get_pixel(32, 32)[3], 255);
    }

    #[test]
    fn test_resolve_config_rejects_bad_accent() {
        let mut args = args(PathBuf::from(DEFAULT_OUTPUT_DIR));
        args.accent = Some("definitely-not-a-color".to_string());
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["diamond-icon"]);
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert!(args.config.is_none());
        assert!(args.size.is_none());
        assert!(args.accent.is_none());
    }

    #[test]
    fn test_args_reject_zero_size() {
        assert!(Args::try_parse_from(["diamond-icon", "--size", "0"]).is_err());
    }
}

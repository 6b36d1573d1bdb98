use image::{io::Reader as ImageReader, ColorType, GenericImageView};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/icon/app_icon.png".to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    println!("Color mode: {:?}", img.color());

    if width == 0 || height == 0 {
        println!("\n⚠ Empty image, nothing to sample");
        return;
    }

    let center = img.get_pixel(width / 2, height / 2);
    println!("\nCenter pixel (x={}, y={}):", width / 2, height / 2);
    println!(
        "  RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );

    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];

    println!("\nCorner pixels:");
    let mut transparent_corners = 0;
    for (x, y) in corners {
        let p = img.get_pixel(x, y);
        println!("  ({}, {}): [{}, {}, {}, {}]", x, y, p[0], p[1], p[2], p[3]);
        if p[3] == 0 {
            transparent_corners += 1;
        }
    }

    match img.color() {
        ColorType::Rgb8 => println!("\n✓ Opaque app icon (RGB)"),
        ColorType::Rgba8 if transparent_corners == corners.len() && center[3] == 255 => {
            println!("\n✓ Adaptive-icon foreground (RGBA, transparent background)")
        }
        ColorType::Rgba8 => println!("\n⚠ RGBA image but background is not fully transparent"),
        other => println!("\n⚠ Unexpected color mode: {:?}", other),
    }
}

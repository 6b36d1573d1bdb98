//! Painting primitives on top of `image` buffers.
//!
//! Painting overwrites pixels, there is no blending. Anything that falls
//! outside the canvas is skipped, so shapes larger than the canvas are
//! clipped instead of panicking.

use crate::{config::Color, shape::Shape};
use image::{ImageBuffer, Pixel, PixelWithColorType, Rgb, Rgba};

/// Pixel formats the logo can be painted on.
pub trait Paint: Pixel<Subpixel = u8> + PixelWithColorType + 'static {
    fn from_color(color: Color) -> Self;
}

impl Paint for Rgb<u8> {
    fn from_color(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl Paint for Rgba<u8> {
    fn from_color(color: Color) -> Self {
        Rgba([color.r, color.g, color.b, 255])
    }
}

pub type Canvas<P> = ImageBuffer<P, Vec<u8>>;

/// Fill every row with the interpolation between `start` and `end` at
/// `y / height`.
pub fn fill_vertical_gradient<P: Paint>(canvas: &mut Canvas<P>, start: Color, end: Color) {
    let height = canvas.height();

    for y in 0..height {
        let ratio = y as f64 / height as f64;
        let pixel = P::from_color(start.lerp(end, ratio));
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

/// Paint shapes in order.
pub fn paint_shapes<P: Paint>(canvas: &mut Canvas<P>, shapes: &[Shape]) {
    for shape in shapes {
        paint_shape(canvas, shape);
    }
}

pub fn paint_shape<P: Paint>(canvas: &mut Canvas<P>, shape: &Shape) {
    let pixel = P::from_color(shape.color());

    match shape {
        Shape::Polygon { points, .. } => {
            let vertices: Vec<(f64, f64)> =
                points.iter().map(|p| (p.x as f64, p.y as f64)).collect();
            fill_polygon(canvas, &vertices, pixel);
        }
        Shape::Line {
            from, to, width, ..
        } => draw_line(
            canvas,
            (from.x as f64, from.y as f64),
            (to.x as f64, to.y as f64),
            *width,
            pixel,
        ),
        Shape::Rectangle { min, max, .. } => {
            fill_rect(canvas, min.x as i64, min.y as i64, max.x as i64, max.y as i64, pixel)
        }
        Shape::Ellipse { min, max, .. } => fill_ellipse(
            canvas,
            (min.x as f64, min.y as f64),
            (max.x as f64, max.y as f64),
            pixel,
        ),
    }
}

fn plot<P: Paint>(canvas: &mut Canvas<P>, x: i64, y: i64, pixel: P) {
    if x >= 0 && y >= 0 && x < canvas.width() as i64 && y < canvas.height() as i64 {
        canvas.put_pixel(x as u32, y as u32, pixel);
    }
}

/// Paint the horizontal run `x0..=x1` on row `y`, clipped to the canvas.
fn fill_span<P: Paint>(canvas: &mut Canvas<P>, y: i64, x0: i64, x1: i64, pixel: P) {
    if y < 0 || y >= canvas.height() as i64 {
        return;
    }
    let x0 = x0.max(0);
    let x1 = x1.min(canvas.width() as i64 - 1);
    for x in x0..=x1 {
        canvas.put_pixel(x as u32, y as u32, pixel);
    }
}

/// Scanline fill of a convex polygon. Pixels whose center lies on an edge
/// are painted.
pub fn fill_polygon<P: Paint>(canvas: &mut Canvas<P>, vertices: &[(f64, f64)], pixel: P) {
    if vertices.is_empty() {
        return;
    }

    let (min_y, max_y) = vertices
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
            (lo.min(y), hi.max(y))
        });

    let first_row = (min_y.ceil() as i64).max(0);
    let last_row = (max_y.floor() as i64).min(canvas.height() as i64 - 1);

    for row in first_row..=last_row {
        let y = row as f64;
        let mut left = f64::INFINITY;
        let mut right = f64::NEG_INFINITY;

        for (i, &(ax, ay)) in vertices.iter().enumerate() {
            let (bx, by) = vertices[(i + 1) % vertices.len()];

            if y < ay.min(by) || y > ay.max(by) {
                continue;
            }

            if ay == by {
                left = left.min(ax.min(bx));
                right = right.max(ax.max(bx));
            } else {
                let x = ax + (y - ay) / (by - ay) * (bx - ax);
                left = left.min(x);
                right = right.max(x);
            }
        }

        if left <= right {
            fill_span(canvas, row, left.ceil() as i64, right.floor() as i64, pixel);
        }
    }
}

/// Stroke a segment. Wide lines are painted as the rectangle that extends
/// `width / 2` on both sides of the segment.
pub fn draw_line<P: Paint>(
    canvas: &mut Canvas<P>,
    from: (f64, f64),
    to: (f64, f64),
    width: u32,
    pixel: P,
) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);

    if width <= 1 {
        let steps = dx.abs().max(dy.abs()).ceil() as i64;
        let Some((t0, t1)) = visible_range(canvas, from, (dx, dy)) else {
            return;
        };
        let first_step = ((t0 * steps as f64).floor() as i64).max(0);
        let last_step = ((t1 * steps as f64).ceil() as i64).min(steps);

        for step in first_step..=last_step {
            let t = if steps == 0 { 0.0 } else { step as f64 / steps as f64 };
            let x = (from.0 + dx * t).round() as i64;
            let y = (from.1 + dy * t).round() as i64;
            plot(canvas, x, y, pixel);
        }
        return;
    }

    let half = width as f64 / 2.0;

    if length == 0.0 {
        let (x, y) = from;
        let vertices = [
            (x - half, y - half),
            (x + half, y - half),
            (x + half, y + half),
            (x - half, y + half),
        ];
        fill_polygon(canvas, &vertices, pixel);
        return;
    }

    // Unit normal scaled to half the stroke width
    let nx = -dy / length * half;
    let ny = dx / length * half;

    let vertices = [
        (from.0 + nx, from.1 + ny),
        (to.0 + nx, to.1 + ny),
        (to.0 - nx, to.1 - ny),
        (from.0 - nx, from.1 - ny),
    ];
    fill_polygon(canvas, &vertices, pixel);
}

/// Parameter interval `t0..=t1` of `from + t * delta` that lies within one
/// pixel of the canvas, or `None` when the segment misses it entirely.
fn visible_range<P: Paint>(
    canvas: &Canvas<P>,
    from: (f64, f64),
    delta: (f64, f64),
) -> Option<(f64, f64)> {
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    let axes = [
        (from.0, delta.0, canvas.width() as f64),
        (from.1, delta.1, canvas.height() as f64),
    ];

    for (start, d, extent) in axes {
        let (lo, hi) = (-1.0, extent);
        if d == 0.0 {
            if start < lo || start > hi {
                return None;
            }
            continue;
        }

        let (a, b) = ((lo - start) / d, (hi - start) / d);
        t0 = t0.max(a.min(b));
        t1 = t1.min(a.max(b));
    }

    (t0 <= t1).then_some((t0, t1))
}

pub fn fill_rect<P: Paint>(canvas: &mut Canvas<P>, x0: i64, y0: i64, x1: i64, y1: i64, pixel: P) {
    let (x0, x1) = (x0.min(x1), x0.max(x1));
    let (y0, y1) = (y0.min(y1).max(0), y0.max(y1).min(canvas.height() as i64 - 1));

    for y in y0..=y1 {
        fill_span(canvas, y, x0, x1, pixel);
    }
}

/// Fill the ellipse inscribed in the box `min..=max`.
pub fn fill_ellipse<P: Paint>(
    canvas: &mut Canvas<P>,
    min: (f64, f64),
    max: (f64, f64),
    pixel: P,
) {
    let center_x = (min.0 + max.0) / 2.0;
    let center_y = (min.1 + max.1) / 2.0;
    let radius_x = (max.0 - min.0).abs() / 2.0;
    let radius_y = (max.1 - min.1).abs() / 2.0;

    // Degenerate boxes collapse to a line or a single pixel
    if radius_x == 0.0 || radius_y == 0.0 {
        fill_rect(
            canvas,
            min.0.round() as i64,
            min.1.round() as i64,
            max.0.round() as i64,
            max.1.round() as i64,
            pixel,
        );
        return;
    }

    let first_row = ((center_y - radius_y).ceil() as i64).max(0);
    let last_row = ((center_y + radius_y).floor() as i64).min(canvas.height() as i64 - 1);

    for row in first_row..=last_row {
        let dy = (row as f64 - center_y) / radius_y;
        let reach = radius_x * (1.0 - dy * dy).max(0.0).sqrt();
        fill_span(
            canvas,
            row,
            (center_x - reach).ceil() as i64,
            (center_x + reach).floor() as i64,
            pixel,
        );
    }
}

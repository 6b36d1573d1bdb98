//! The logo as an ordered list of draw instructions.
//!
//! [`logo_shapes`] only describes geometry and colors; painting is done by
//! [`crate::raster`]. Later shapes are painted over earlier ones.

use crate::config::{Color, IconConfig, Point};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled convex polygon.
    Polygon { points: Vec<Point>, color: Color },
    /// Straight segment with a stroke width.
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: u32,
    },
    /// Filled axis-aligned rectangle, both corners inclusive.
    Rectangle { min: Point, max: Point, color: Color },
    /// Filled ellipse inscribed in the bounding box `min..=max`.
    Ellipse { min: Point, max: Point, color: Color },
}

impl Shape {
    pub fn color(&self) -> Color {
        match self {
            Shape::Polygon { color, .. }
            | Shape::Line { color, .. }
            | Shape::Rectangle { color, .. }
            | Shape::Ellipse { color, .. } => *color,
        }
    }
}

/// Vertices of a diamond in top, right, bottom, left order.
pub fn diamond(center: Point, radius: i32) -> [Point; 4] {
    [
        center.offset(0, -radius),
        center.offset(radius, 0),
        center.offset(0, radius),
        center.offset(-radius, 0),
    ]
}

/// Build the draw list for the diamond logo.
pub fn logo_shapes(config: &IconConfig) -> Vec<Shape> {
    let center = config.anchor();
    let accent = config.accent;

    let outer = diamond(center, config.diamond_radius);
    let inner = diamond(center, config.inner_radius);

    let mut shapes = vec![
        Shape::Polygon {
            points: outer.to_vec(),
            color: accent,
        },
        // Darker cutout gives the logo some depth
        Shape::Polygon {
            points: inner.to_vec(),
            color: config.cutout,
        },
    ];

    // Spokes from the center to the inner vertices
    shapes.extend(inner.iter().map(|&vertex| Shape::Line {
        from: center,
        to: vertex,
        color: accent,
        width: config.spoke_width,
    }));

    let half = config.square_half;
    shapes.push(Shape::Rectangle {
        min: center.offset(-half, -half),
        max: center.offset(half, half),
        color: accent,
    });

    let dot = config.dot_radius;
    shapes.extend(outer.iter().map(|&vertex| Shape::Ellipse {
        min: vertex.offset(-dot, -dot),
        max: vertex.offset(dot, dot),
        color: accent,
    }));

    shapes.extend(accent_lines(config, &outer));

    shapes
}

/// One short line outside each outer vertex, perpendicular to the direction
/// pointing away from the center.
fn accent_lines(config: &IconConfig, outer: &[Point; 4]) -> Vec<Shape> {
    let [top, right, bottom, left] = *outer;
    let len = config.accent_length;
    let off = config.accent_offset;

    let segments = [
        (top.offset(-len, -off), top.offset(len, -off)),
        (bottom.offset(-len, off), bottom.offset(len, off)),
        (left.offset(-off, -len), left.offset(-off, len)),
        (right.offset(off, -len), right.offset(off, len)),
    ];

    segments
        .into_iter()
        .map(|(from, to)| Shape::Line {
            from,
            to,
            color: config.accent,
            width: config.accent_width,
        })
        .collect()
}

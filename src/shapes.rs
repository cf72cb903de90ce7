//! Shape renderer: resolved dimensions to ordered draw primitives.
//!
//! Coordinates are canvas pixels with the origin at the top-left corner of
//! the `size × size` canvas. Pens, colors and opacity are not decided here;
//! `render::paint` sets them per pass.

use tracing::debug;

use crate::geometry::Dimensions;
use crate::model::{FillStyle, ReticleSettings, ShapeName};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate about `pivot` by `degrees` (clockwise on screen, y points down).
    pub fn rotated(self, pivot: Point, degrees: f64) -> Point {
        if degrees == 0.0 {
            return self;
        }
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One drawing instruction for the external paint surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line(Point, Point),
    Ellipse {
        center: Point,
        rx: f64,
        ry: f64,
        filled: bool,
    },
    Point(Point),
    Path { points: Vec<Point>, closed: bool },
}

/// Which of the two per-frame passes is being produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    /// Wider border drawn underneath, in the outline color.
    Outline,
    /// The reticle itself.
    Main,
}

/// Shape selector carrying only the parameters each shape uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rotation in degrees.
    Crosshair { angle: f64 },
    Circle {
        fill: FillStyle,
        outline_thickness: u32,
    },
    TShape,
    /// Arm angle from horizontal, in degrees [0, 90].
    XShape { angle: f64 },
    /// Rotation in degrees.
    Diamond { angle: f64 },
    /// Persisted name nothing knows how to draw.
    Unrecognized(String),
}

impl Shape {
    pub fn from_settings(settings: &ReticleSettings) -> Self {
        let angle = settings.effective_angle();
        match &settings.shape {
            ShapeName::Crosshair => Shape::Crosshair { angle },
            ShapeName::Circle => Shape::Circle {
                fill: settings.fill_style,
                outline_thickness: settings.outline_thickness,
            },
            ShapeName::TShape => Shape::TShape,
            ShapeName::XShape => Shape::XShape { angle },
            ShapeName::Diamond => Shape::Diamond { angle },
            ShapeName::Other(name) => Shape::Unrecognized(name.clone()),
        }
    }

    /// Whether the outline pen is the outline thickness alone rather than
    /// added on top of the main thickness.
    pub fn is_area(&self) -> bool {
        matches!(self, Shape::Circle { .. })
    }
}

/// Produce the primitives for one pass of `shape`.
pub fn render(shape: &Shape, dims: &Dimensions, pass: Pass) -> Vec<Primitive> {
    let mut out = match shape {
        Shape::Crosshair { angle } => crosshair(dims, *angle),
        Shape::Circle {
            fill,
            outline_thickness,
        } => circle(dims, *fill, *outline_thickness, pass),
        Shape::TShape => t_shape(dims),
        Shape::XShape { angle } => x_shape(dims, *angle),
        Shape::Diamond { angle } => diamond(dims, *angle),
        Shape::Unrecognized(name) => {
            debug!(shape = %name, "unrecognized shape, nothing to draw");
            return Vec::new();
        }
    };
    if pass == Pass::Main {
        out.extend(center_dot(dims));
    }
    out
}

fn center(dims: &Dimensions) -> Point {
    Point::new(dims.center_f, dims.center_f)
}

fn crosshair(dims: &Dimensions, angle: f64) -> Vec<Primitive> {
    let c = dims.center_f;
    let g = dims.gap_f;
    let s = dims.size_f;
    let pivot = center(dims);
    let seg = |x1, y1, x2, y2| {
        Primitive::Line(
            Point::new(x1, y1).rotated(pivot, angle),
            Point::new(x2, y2).rotated(pivot, angle),
        )
    };

    vec![
        seg(c, 0.0, c, c - g), // top
        seg(c, c + g, c, s),   // bottom
        seg(0.0, c, c - g, c), // left
        seg(c + g, c, s, c),   // right
    ]
}

fn circle(dims: &Dimensions, fill: FillStyle, outline_thickness: u32, pass: Pass) -> Vec<Primitive> {
    let radius = (dims.size_f - 2.0) / 2.0;
    let primitive = match pass {
        Pass::Outline => {
            let r = radius + outline_thickness as f64 / 2.0;
            Primitive::Ellipse {
                center: center(dims),
                rx: r,
                ry: r,
                filled: false,
            }
        }
        Pass::Main => Primitive::Ellipse {
            center: center(dims),
            rx: radius,
            ry: radius,
            filled: fill == FillStyle::Full,
        },
    };
    vec![primitive]
}

fn t_shape(dims: &Dimensions) -> Vec<Primitive> {
    let c = dims.center_f;
    let g = dims.gap_f;
    let len = dims.arm_length() as f64;

    vec![
        Primitive::Line(Point::new(c - g - len, c), Point::new(c - g, c)),
        Primitive::Line(Point::new(c + g, c), Point::new(c + g + len, c)),
        Primitive::Line(Point::new(c, c + g), Point::new(c, c + g + len)),
    ]
}

fn x_shape(dims: &Dimensions, angle: f64) -> Vec<Primitive> {
    let c = dims.center_f;
    let len = dims.arm_length() as f64;
    let (sin, cos) = angle.to_radians().sin_cos();
    // only isotropic at 45°
    let gap_x = dims.gap_f * cos;
    let gap_y = dims.gap_f * sin;

    [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)]
        .iter()
        .map(|&(sx, sy)| {
            let inner = Point::new(c + sx * gap_x, c + sy * gap_y);
            let outer = Point::new(inner.x + sx * len * cos, inner.y + sy * len * sin);
            Primitive::Line(outer, inner)
        })
        .collect()
}

fn diamond(dims: &Dimensions, angle: f64) -> Vec<Primitive> {
    let c = dims.center_f;
    let r = dims.gap_f + dims.arm_length() as f64;
    let pivot = center(dims);

    let points = [
        Point::new(c, c - r), // top
        Point::new(c + r, c), // right
        Point::new(c, c + r), // bottom
        Point::new(c - r, c), // left
    ]
    .iter()
    .map(|p| p.rotated(pivot, angle))
    .collect();

    vec![Primitive::Path {
        points,
        closed: true,
    }]
}

fn center_dot(dims: &Dimensions) -> Option<Primitive> {
    if !dims.dot_enabled {
        return None;
    }
    let at = center(dims);
    if dims.dot_size == 1 {
        return Some(Primitive::Point(at));
    }
    let r = dims.dot_size as f64 / 2.0;
    Some(Primitive::Ellipse {
        center: at,
        rx: r,
        ry: r,
        filled: true,
    })
}

//! Paint surface abstraction and a recording implementation.

use crate::model::Color;
use crate::shapes::Point;

/// Line end style. Reticle strokes are always flat so arms end exactly at
/// their computed endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapStyle {
    #[default]
    Flat,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: Color,
    pub width: f64,
    pub cap: CapStyle,
}

impl Pen {
    pub fn flat(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            cap: CapStyle::Flat,
        }
    }
}

/// External surface accepting primitive drawing operations.
///
/// Filled ellipses use the current pen color as brush.
pub trait Canvas {
    /// Alpha [0.0, 1.0] for everything drawn until the next call.
    fn set_opacity(&mut self, opacity: f64);
    fn set_pen(&mut self, pen: Pen);
    fn draw_line(&mut self, from: Point, to: Point);
    fn draw_ellipse(&mut self, center: Point, rx: f64, ry: f64, filled: bool);
    fn draw_point(&mut self, at: Point);
    fn draw_path(&mut self, points: &[Point], closed: bool);
}

/// One recorded canvas call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetOpacity(f64),
    SetPen(Pen),
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

impl DrawOp {
    pub fn is_state_change(&self) -> bool {
        matches!(self, DrawOp::SetOpacity(_) | DrawOp::SetPen(_))
    }
}

/// Canvas that records every call, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Recorded pens, in order.
    pub fn pens(&self) -> Vec<Pen> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::SetPen(pen) => Some(*pen),
                _ => None,
            })
            .collect()
    }

    /// Number of drawing operations (state changes excluded).
    pub fn shape_count(&self) -> usize {
        self.ops.iter().filter(|op| !op.is_state_change()).count()
    }

    /// Replay the recording onto another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for op in &self.ops {
            match op {
                DrawOp::SetOpacity(o) => canvas.set_opacity(*o),
                DrawOp::SetPen(pen) => canvas.set_pen(*pen),
                DrawOp::Line(a, b) => canvas.draw_line(*a, *b),
                DrawOp::Ellipse {
                    center,
                    rx,
                    ry,
                    filled,
                } => canvas.draw_ellipse(*center, *rx, *ry, *filled),
                DrawOp::Point(p) => canvas.draw_point(*p),
                DrawOp::Path { points, closed } => canvas.draw_path(points, *closed),
            }
        }
    }
}

impl Canvas for DrawList {
    fn set_opacity(&mut self, opacity: f64) {
        self.ops.push(DrawOp::SetOpacity(opacity));
    }

    fn set_pen(&mut self, pen: Pen) {
        self.ops.push(DrawOp::SetPen(pen));
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.ops.push(DrawOp::Line(from, to));
    }

    fn draw_ellipse(&mut self, center: Point, rx: f64, ry: f64, filled: bool) {
        self.ops.push(DrawOp::Ellipse {
            center,
            rx,
            ry,
            filled,
        });
    }

    fn draw_point(&mut self, at: Point) {
        self.ops.push(DrawOp::Point(at));
    }

    fn draw_path(&mut self, points: &[Point], closed: bool) {
        self.ops.push(DrawOp::Path {
            points: points.to_vec(),
            closed,
        });
    }
}

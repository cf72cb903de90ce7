//! [`Canvas`] over an `egui::Painter`.
//!
//! The host owns the window; this only translates reticle canvas coordinates
//! into screen points offset by `origin`.

use egui::{Color32, Painter, Pos2, Shape, Stroke};

use super::canvas::{Canvas, Pen};
use crate::model::{Color, DEFAULT_COLOR};
use crate::shapes::Point;

pub struct EguiCanvas {
    painter: Painter,
    origin: Pos2,
    pen: Pen,
}

impl EguiCanvas {
    /// `origin` is where the reticle canvas' top-left corner lands.
    pub fn new(painter: Painter, origin: Pos2) -> Self {
        Self {
            painter,
            origin,
            pen: Pen::flat(Color::from_tuple(DEFAULT_COLOR), 1.0),
        }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x as f32, self.origin.y + p.y as f32)
    }

    fn color(&self) -> Color32 {
        let c = self.pen.color;
        Color32::from_rgb(c.r, c.g, c.b)
    }

    fn stroke(&self) -> Stroke {
        Stroke::new(self.pen.width as f32, self.color())
    }
}

impl Canvas for EguiCanvas {
    fn set_opacity(&mut self, opacity: f64) {
        self.painter.set_opacity(opacity.clamp(0.0, 1.0) as f32);
    }

    fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], self.stroke());
    }

    // Reticle ellipses are always circular; rx is used for both axes.
    fn draw_ellipse(&mut self, center: Point, rx: f64, _ry: f64, filled: bool) {
        let center = self.pos(center);
        if filled {
            self.painter.circle_filled(center, rx as f32, self.color());
        } else {
            self.painter.circle_stroke(center, rx as f32, self.stroke());
        }
    }

    fn draw_point(&mut self, at: Point) {
        self.painter.circle_filled(self.pos(at), 0.5, self.color());
    }

    fn draw_path(&mut self, points: &[Point], closed: bool) {
        let points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        let shape = if closed {
            Shape::closed_line(points, self.stroke())
        } else {
            Shape::line(points, self.stroke())
        };
        self.painter.add(shape);
    }
}

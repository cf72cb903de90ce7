//! Painting a reticle onto an external surface.
//!
//! A [`Reticle`] is the immutable snapshot built from one settings record.
//! [`paint`] drives any [`Canvas`] through the two passes:
//!
//! ```text
//! outline enabled?  set_opacity(outline) → set_pen(outline) → render(Outline)
//! always            set_opacity(main)    → set_pen(main)    → render(Main)
//! ```
//!
//! Opacity is applied per layer by the canvas, never baked into primitives.

pub mod canvas;
pub mod egui_canvas;

pub use canvas::{CapStyle, Canvas, DrawList, DrawOp, Pen};
pub use egui_canvas::EguiCanvas;

use crate::geometry::{resolve, Dimensions};
use crate::model::{Color, ReticleSettings};
use crate::percent_to_alpha;
use crate::shapes::{render, Pass, Primitive, Shape};

/// Outline layer style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineStyle {
    pub color: Color,
    pub thickness: u32,
    /// Layer alpha [0.0, 1.0].
    pub opacity: f64,
}

/// Everything needed to draw one frame, rebuilt whenever settings change.
#[derive(Debug, Clone, PartialEq)]
pub struct Reticle {
    pub shape: Shape,
    pub dims: Dimensions,
    pub color: Color,
    pub thickness: u32,
    /// Layer alpha [0.0, 1.0].
    pub opacity: f64,
    pub outline: Option<OutlineStyle>,
}

impl Reticle {
    pub fn from_settings(settings: &ReticleSettings) -> Self {
        let outline = settings.outline_enabled.then(|| OutlineStyle {
            color: settings.outline_color,
            thickness: settings.outline_thickness,
            opacity: percent_to_alpha(settings.outline_opacity),
        });

        Self {
            shape: Shape::from_settings(settings),
            dims: resolve(settings),
            color: settings.color,
            thickness: settings.thickness,
            opacity: percent_to_alpha(settings.opacity),
            outline,
        }
    }

    /// Canvas edge length in pixels.
    pub fn size(&self) -> u32 {
        self.dims.size
    }

    pub fn main_pen(&self) -> Pen {
        Pen::flat(self.color, self.thickness as f64)
    }

    /// Area shapes stroke at the outline thickness alone; skeleton shapes
    /// widen the main stroke by it.
    pub fn outline_pen(&self) -> Option<Pen> {
        self.outline.map(|o| {
            let width = if self.shape.is_area() {
                o.thickness
            } else {
                self.thickness.saturating_add(o.thickness)
            };
            Pen::flat(o.color, width as f64)
        })
    }

    /// Record the frame into a fresh [`DrawList`].
    pub fn frame(&self) -> DrawList {
        let mut list = DrawList::default();
        paint(self, &mut list);
        list
    }
}

/// Paint `reticle` onto `canvas`: outline pass first (if enabled), then the
/// main pass.
pub fn paint<C: Canvas + ?Sized>(reticle: &Reticle, canvas: &mut C) {
    if let (Some(outline), Some(pen)) = (reticle.outline, reticle.outline_pen()) {
        canvas.set_opacity(outline.opacity);
        canvas.set_pen(pen);
        draw_all(canvas, &render(&reticle.shape, &reticle.dims, Pass::Outline));
    }

    canvas.set_opacity(reticle.opacity);
    canvas.set_pen(reticle.main_pen());
    draw_all(canvas, &render(&reticle.shape, &reticle.dims, Pass::Main));
}

fn draw_all<C: Canvas + ?Sized>(canvas: &mut C, primitives: &[Primitive]) {
    for primitive in primitives {
        match primitive {
            Primitive::Line(from, to) => canvas.draw_line(*from, *to),
            Primitive::Ellipse {
                center,
                rx,
                ry,
                filled,
            } => canvas.draw_ellipse(*center, *rx, *ry, *filled),
            Primitive::Point(p) => canvas.draw_point(*p),
            Primitive::Path { points, closed } => canvas.draw_path(points, *closed),
        }
    }
}

use shapekit_core::{BoundingBox, Point};

use super::{checked_margin, DesignerShape};
use crate::renderer::{Paint, Surface};

/// Circle inscribed in a square box.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCircle {
    rect: BoundingBox,
}

impl DesignCircle {
    pub fn new(rect: BoundingBox) -> Self {
        Self { rect }
    }

    pub fn at(center: Point, diameter: i32) -> Option<Self> {
        BoundingBox::centered_at(center, diameter, diameter).map(Self::new)
    }

    pub fn radius(&self) -> f64 {
        f64::from(self.rect.width) / 2.0
    }
}

impl DesignerShape for DesignCircle {
    fn bounds(&self) -> BoundingBox {
        self.rect
    }

    /// Inclusive distance test against the exact box center and a radius
    /// of `width / 2.0`. Nothing is rounded, so odd widths keep their
    /// half-pixel center.
    fn contains_point(&self, p: Point) -> bool {
        let (cx, cy) = self.rect.center_f64();
        let dx = f64::from(p.x) - cx;
        let dy = f64::from(p.y) - cy;
        let r = self.radius();
        dx * dx + dy * dy <= r * r
    }

    fn offset(&mut self, dx: i32, dy: i32) {
        self.rect = self.rect.translated(dx, dy);
    }

    fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool {
        match checked_margin(&self.rect, canvas, delta) {
            Some(rect) => {
                self.rect = rect;
                true
            }
            None => false,
        }
    }

    fn render(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.draw_ellipse(&self.rect, paint);
    }
}

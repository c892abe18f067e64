use shapekit_core::{BoundingBox, Point};

use super::{checked_margin, DesignerShape};
use crate::renderer::{Paint, Surface};

/// Isosceles triangle inscribed in its box: apex at the top center, base
/// along the bottom edge.
///
/// The vertex list is derived from the box and rebuilt on every change.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignTriangle {
    rect: BoundingBox,
    polygon: [Point; 3],
}

/// Height of an equilateral triangle with the given side, rounded.
pub fn equilateral_height(width: i32) -> i32 {
    (f64::from(width) * 3f64.sqrt() / 2.0).round() as i32
}

fn vertices(rect: &BoundingBox) -> [Point; 3] {
    [
        Point::new(rect.mid_x(), rect.top()),
        rect.bottom_right(),
        rect.bottom_left(),
    ]
}

impl DesignTriangle {
    /// Triangle occupying exactly `rect`.
    pub fn new(rect: BoundingBox) -> Self {
        Self {
            rect,
            polygon: vertices(&rect),
        }
    }

    /// Equilateral triangle of side `size` whose box is centered at `center`.
    pub fn at(center: Point, size: i32) -> Option<Self> {
        BoundingBox::centered_at(center, size, equilateral_height(size)).map(Self::new)
    }

    pub fn polygon(&self) -> &[Point; 3] {
        &self.polygon
    }

    fn set_rect(&mut self, rect: BoundingBox) {
        self.rect = rect;
        self.polygon = vertices(&rect);
    }
}

impl DesignerShape for DesignTriangle {
    fn bounds(&self) -> BoundingBox {
        self.rect
    }

    // Even-odd ray casting.
    fn contains_point(&self, p: Point) -> bool {
        let px = f64::from(p.x);
        let py = f64::from(p.y);
        let mut inside = false;
        let mut j = self.polygon.len() - 1;
        for i in 0..self.polygon.len() {
            let (xi, yi) = (f64::from(self.polygon[i].x), f64::from(self.polygon[i].y));
            let (xj, yj) = (f64::from(self.polygon[j].x), f64::from(self.polygon[j].y));
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }

    fn offset(&mut self, dx: i32, dy: i32) {
        self.set_rect(self.rect.translated(dx, dy));
    }

    fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool {
        match checked_margin(&self.rect, canvas, delta) {
            Some(rect) => {
                self.set_rect(rect);
                true
            }
            None => false,
        }
    }

    fn render(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.draw_polygon(&self.polygon, paint);
    }
}

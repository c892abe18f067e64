use shapekit_core::{BoundingBox, Point};

use super::{checked_margin, DesignerShape};
use crate::renderer::{Paint, Surface};

#[derive(Debug, Clone, PartialEq)]
pub struct DesignRectangle {
    rect: BoundingBox,
}

impl DesignRectangle {
    pub fn new(rect: BoundingBox) -> Self {
        Self { rect }
    }

    /// Square of side `size` centered at `center`.
    pub fn at(center: Point, size: i32) -> Option<Self> {
        BoundingBox::centered_at(center, size, size).map(Self::new)
    }
}

impl DesignerShape for DesignRectangle {
    fn bounds(&self) -> BoundingBox {
        self.rect
    }

    fn contains_point(&self, p: Point) -> bool {
        self.rect.contains_point(p)
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
        surface.draw_rect(&self.rect, paint);
    }
}

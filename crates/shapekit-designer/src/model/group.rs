use shapekit_core::{BoundingBox, Point};
use tracing::debug;

use super::{DesignerShape, DrawingObject, Shape};
use crate::renderer::{Paint, Surface};

/// Composite shape owning an ordered list of children.
///
/// The box is always the union of the children's boxes and is recomputed
/// after every structural change; it is never set directly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DesignGroup {
    children: Vec<DrawingObject>,
    rect: BoundingBox,
}

impl DesignGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_children(children: Vec<DrawingObject>) -> Self {
        let mut group = Self {
            children,
            rect: BoundingBox::empty(),
        };
        group.update_rect();
        group
    }

    pub fn add_child(&mut self, child: DrawingObject) {
        self.children.push(child);
        self.update_rect();
    }

    pub fn children(&self) -> &[DrawingObject] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> std::slice::IterMut<'_, DrawingObject> {
        self.children.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn update_rect(&mut self) {
        self.rect = self
            .children
            .iter()
            .fold(BoundingBox::empty(), |acc, child| acc.union(&child.bounds()));
    }
}

impl DesignerShape for DesignGroup {
    fn bounds(&self) -> BoundingBox {
        self.rect
    }

    fn contains_point(&self, p: Point) -> bool {
        self.children.iter().any(|child| child.contains_point(p))
    }

    fn offset(&mut self, dx: i32, dy: i32) {
        for child in &mut self.children {
            child.shape.offset(dx, dy);
        }
        self.rect = self.rect.translated(dx, dy);
    }

    /// All children must accept `delta`. When child `i` rejects it, children
    /// `0..i` are put back to the boxes they had before the call, in reverse
    /// order. Restoring from a snapshot also covers a child that started
    /// outside the canvas, where resizing back by `-delta` would be rejected.
    fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool {
        let before: Vec<Shape> = self.children.iter().map(|c| c.shape.clone()).collect();
        for i in 0..self.children.len() {
            if !self.children[i].shape.resize(canvas, delta) {
                debug!(child = i, delta, "group resize rejected, rolling back");
                for (done, shape) in self.children[..i].iter_mut().zip(before).rev() {
                    done.shape = shape;
                }
                return false;
            }
        }
        self.update_rect();
        true
    }

    fn render(&self, surface: &mut dyn Surface, paint: &Paint) {
        surface.draw_rect(&self.rect, paint);
        for child in &self.children {
            child.paint(surface);
        }
    }
}

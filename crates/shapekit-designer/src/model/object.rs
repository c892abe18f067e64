use shapekit_core::{BoundingBox, Color, Point};

use super::{DesignerShape, Shape, ShapeType};
use crate::renderer::{FillStyle, LineStyle, Paint, Surface};

/// A shape together with its stored color and selection state.
///
/// This is the unit held by [`crate::Storage`] and by groups. Selection
/// changes on a group cascade to every descendant.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingObject {
    pub shape: Shape,
    color: Color,
    selected: bool,
    pub movable: bool,
}

impl DrawingObject {
    pub fn new(shape: Shape, color: Color) -> Self {
        Self {
            shape,
            color,
            selected: false,
            movable: true,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.set_selected(selected);
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape.shape_type()
    }

    /// Color as displayed: the selection color while selected.
    pub fn color(&self) -> Color {
        if self.selected {
            Color::SELECTED
        } else {
            self.color
        }
    }

    /// Color as stored, regardless of selection.
    pub fn stored_color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the flag on this node and on every descendant.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if let Some(group) = self.shape.as_group_mut() {
            for child in group.children_mut() {
                child.set_selected(selected);
            }
        }
    }

    pub fn toggle_selected(&mut self) {
        self.set_selected(!self.selected);
    }

    pub fn deactivate(&mut self) {
        self.set_selected(false);
    }

    pub fn bounds(&self) -> BoundingBox {
        self.shape.bounds()
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.shape.contains_point(p)
    }

    pub fn translate(&mut self, canvas: &BoundingBox, dx: i32, dy: i32) -> bool {
        self.movable && self.shape.translate(canvas, dx, dy)
    }

    pub fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool {
        self.shape.resize(canvas, delta)
    }

    /// Paint used for this node's own outline and fill.
    pub fn paint_style(&self) -> Paint {
        match self.shape {
            Shape::Group(_) => Paint {
                fill: self.color(),
                fill_style: if self.selected {
                    FillStyle::Hatched
                } else {
                    FillStyle::None
                },
                border: if self.selected {
                    Color::SELECTED
                } else {
                    Color::BLACK
                },
                line_style: LineStyle::Dashed,
            },
            _ => Paint {
                fill: self.color(),
                fill_style: FillStyle::Solid,
                border: Color::BORDER,
                line_style: LineStyle::Solid,
            },
        }
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        self.shape.render(surface, &self.paint_style());
    }
}

//! Shape model: the closed set of shape variants, the per-node state that
//! wraps them, and the bounded transform operations.
//!
//! Every variant implements [`DesignerShape`]. [`Shape`] dispatches to the
//! variant and is what the rest of the crate stores.

use shapekit_core::{BoundingBox, Point};

use crate::renderer::{Paint, Surface};

mod circle;
mod group;
mod object;
mod rectangle;
mod triangle;

pub use circle::DesignCircle;
pub use group::DesignGroup;
pub use object::DrawingObject;
pub use rectangle::DesignRectangle;
pub use triangle::DesignTriangle;

pub trait DesignerShape {
    fn bounds(&self) -> BoundingBox;

    /// Exact hit test for the variant's outline.
    fn contains_point(&self, p: Point) -> bool;

    /// Shifts the shape without any bounds check.
    fn offset(&mut self, dx: i32, dy: i32);

    /// Grows or shrinks every side by `delta`. Returns `false` and leaves the
    /// shape untouched when the result would leave `canvas` or fall below
    /// the minimum size.
    fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool;

    fn render(&self, surface: &mut dyn Surface, paint: &Paint);

    /// Moves the shape by `(dx, dy)` if the moved box stays inside `canvas`.
    fn translate(&mut self, canvas: &BoundingBox, dx: i32, dy: i32) -> bool {
        let moved = self.bounds().checked_translated(dx, dy);
        if !moved.is_some_and(|rect| rect.is_within(canvas)) {
            return false;
        }
        self.offset(dx, dy);
        true
    }
}

/// Box produced by applying `delta` to `rect`, if it is a legal resting box.
pub(crate) fn checked_margin(
    rect: &BoundingBox,
    canvas: &BoundingBox,
    delta: i32,
) -> Option<BoundingBox> {
    rect.with_margin(delta)
        .filter(|candidate| candidate.is_within(canvas) && candidate.has_min_size())
}

/// Primitive shape kinds a user can place directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Triangle,
}

impl ShapeKind {
    /// Builds a primitive of this kind centered at `center`, `size` wide.
    /// `None` when the box would not fit in `i32` coordinates.
    pub fn create(self, center: Point, size: i32) -> Option<Shape> {
        match self {
            ShapeKind::Circle => DesignCircle::at(center, size).map(Shape::Circle),
            ShapeKind::Rectangle => DesignRectangle::at(center, size).map(Shape::Rectangle),
            ShapeKind::Triangle => DesignTriangle::at(center, size).map(Shape::Triangle),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "rectangle" | "rect" => Ok(ShapeKind::Rectangle),
            "triangle" => Ok(ShapeKind::Triangle),
            other => Err(format!("unknown shape kind '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Circle,
    Rectangle,
    Triangle,
    Group,
}

impl ShapeType {
    /// Element name used for the variant in saved documents.
    pub fn tag(self) -> &'static str {
        match self {
            ShapeType::Circle => "Circle",
            ShapeType::Rectangle => "Rectangle",
            ShapeType::Triangle => "Triangle",
            ShapeType::Group => "Group",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(DesignCircle),
    Rectangle(DesignRectangle),
    Triangle(DesignTriangle),
    Group(DesignGroup),
}

impl DesignerShape for Shape {
    fn bounds(&self) -> BoundingBox {
        match self {
            Shape::Circle(s) => s.bounds(),
            Shape::Rectangle(s) => s.bounds(),
            Shape::Triangle(s) => s.bounds(),
            Shape::Group(s) => s.bounds(),
        }
    }

    fn contains_point(&self, p: Point) -> bool {
        match self {
            Shape::Circle(s) => s.contains_point(p),
            Shape::Rectangle(s) => s.contains_point(p),
            Shape::Triangle(s) => s.contains_point(p),
            Shape::Group(s) => s.contains_point(p),
        }
    }

    fn offset(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Circle(s) => s.offset(dx, dy),
            Shape::Rectangle(s) => s.offset(dx, dy),
            Shape::Triangle(s) => s.offset(dx, dy),
            Shape::Group(s) => s.offset(dx, dy),
        }
    }

    fn resize(&mut self, canvas: &BoundingBox, delta: i32) -> bool {
        match self {
            Shape::Circle(s) => s.resize(canvas, delta),
            Shape::Rectangle(s) => s.resize(canvas, delta),
            Shape::Triangle(s) => s.resize(canvas, delta),
            Shape::Group(s) => s.resize(canvas, delta),
        }
    }

    fn render(&self, surface: &mut dyn Surface, paint: &Paint) {
        match self {
            Shape::Circle(s) => s.render(surface, paint),
            Shape::Rectangle(s) => s.render(surface, paint),
            Shape::Triangle(s) => s.render(surface, paint),
            Shape::Group(s) => s.render(surface, paint),
        }
    }

    fn translate(&mut self, canvas: &BoundingBox, dx: i32, dy: i32) -> bool {
        match self {
            Shape::Circle(s) => s.translate(canvas, dx, dy),
            Shape::Rectangle(s) => s.translate(canvas, dx, dy),
            Shape::Triangle(s) => s.translate(canvas, dx, dy),
            Shape::Group(s) => s.translate(canvas, dx, dy),
        }
    }
}

impl Shape {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Circle(_) => ShapeType::Circle,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Triangle(_) => ShapeType::Triangle,
            Shape::Group(_) => ShapeType::Group,
        }
    }

    pub fn as_group(&self) -> Option<&DesignGroup> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_group_mut(&mut self) -> Option<&mut DesignGroup> {
        match self {
            Shape::Group(g) => Some(g),
            _ => None,
        }
    }
}

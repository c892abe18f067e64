//! Rendering contract for shapes.
//!
//! The model never rasterizes anything itself. A UI layer implements
//! [`Surface`] over its toolkit and calls [`crate::DesignerState::paint`];
//! each shape issues primitive draw calls with its final, validated
//! geometry and a [`Paint`] describing fill and border.

use shapekit_core::{BoundingBox, Color, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillStyle {
    Solid,
    /// Sparse hatch pattern, used for selected groups.
    Hatched,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fill: Color,
    pub fill_style: FillStyle,
    pub border: Color,
    pub line_style: LineStyle,
}

/// Drawing surface supplied by the UI layer.
pub trait Surface {
    /// Ellipse inscribed in `rect`.
    fn draw_ellipse(&mut self, rect: &BoundingBox, paint: &Paint);

    fn draw_rect(&mut self, rect: &BoundingBox, paint: &Paint);

    /// Closed polygon through `points`.
    fn draw_polygon(&mut self, points: &[Point], paint: &Paint);
}

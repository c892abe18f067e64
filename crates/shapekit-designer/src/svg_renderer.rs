//! SVG surface for designer shapes
//! Collects draw calls as SVG elements so a design can be rendered
//! without a GUI toolkit.
//! Features:
//! - Solid and dashed borders
//! - Translucent fill for hatched (selected group) areas
//! - Output sized to the editor window

use shapekit_core::{BoundingBox, Point};

use crate::renderer::{FillStyle, LineStyle, Paint, Surface};

const DASH_PATTERN: &str = "6 4";
const HATCH_OPACITY: f32 = 0.25;

/// Surface that records primitives as SVG elements.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    width: i32,
    height: i32,
    elements: Vec<String>,
}

impl SvgSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Complete SVG document.
    pub fn to_svg(&self) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        );
        for element in &self.elements {
            svg.push_str("  ");
            svg.push_str(element);
            svg.push('\n');
        }
        svg.push_str("</svg>\n");
        svg
    }
}

/// Presentation attributes shared by every element.
fn style_attrs(paint: &Paint) -> String {
    let mut attrs = match paint.fill_style {
        FillStyle::Solid => format!("fill=\"{}\"", paint.fill),
        FillStyle::Hatched => format!(
            "fill=\"{}\" fill-opacity=\"{}\"",
            paint.fill, HATCH_OPACITY
        ),
        FillStyle::None => "fill=\"none\"".to_string(),
    };
    attrs.push_str(&format!(" stroke=\"{}\"", paint.border));
    if paint.line_style == LineStyle::Dashed {
        attrs.push_str(&format!(" stroke-dasharray=\"{}\"", DASH_PATTERN));
    }
    attrs
}

impl Surface for SvgSurface {
    fn draw_ellipse(&mut self, rect: &BoundingBox, paint: &Paint) {
        let (cx, cy) = rect.center_f64();
        self.elements.push(format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {}/>",
            cx,
            cy,
            f64::from(rect.width) / 2.0,
            f64::from(rect.height) / 2.0,
            style_attrs(paint)
        ));
    }

    fn draw_rect(&mut self, rect: &BoundingBox, paint: &Paint) {
        self.elements.push(format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            style_attrs(paint)
        ));
    }

    fn draw_polygon(&mut self, points: &[Point], paint: &Paint) {
        let coords = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        self.elements.push(format!(
            "<polygon points=\"{}\" {}/>",
            coords,
            style_attrs(paint)
        ));
    }
}

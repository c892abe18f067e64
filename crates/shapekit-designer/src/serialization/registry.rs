use std::collections::HashMap;

use shapekit_core::{BoundingBox, Color, MIN_SIZE};

use super::decode_items;
use super::xml::XmlElement;
use crate::error::{DesignError, DesignResult};
use crate::model::{
    DesignCircle, DesignGroup, DesignRectangle, DesignTriangle, DrawingObject, Shape, ShapeType,
};

/// Builds a node from its element. The registry is passed along so
/// composite variants can decode their children.
pub type DecodeFn = fn(&XmlElement, &ShapeRegistry) -> DesignResult<DrawingObject>;

/// Maps element tags to shape constructors.
#[derive(Clone)]
pub struct ShapeRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl ShapeRegistry {
    pub fn empty() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Registry with every built-in variant.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(ShapeType::Circle.tag(), decode_circle);
        registry.register(ShapeType::Rectangle.tag(), decode_rectangle);
        registry.register(ShapeType::Triangle.tag(), decode_triangle);
        registry.register(ShapeType::Group.tag(), decode_group);
        registry
    }

    /// Registers `decode` for `tag`, replacing any earlier entry.
    pub fn register(&mut self, tag: &'static str, decode: DecodeFn) {
        self.decoders.insert(tag, decode);
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.decoders.contains_key(tag)
    }

    pub fn decode(&self, element: &XmlElement) -> DesignResult<DrawingObject> {
        let decode = self
            .decoders
            .get(element.name.as_str())
            .ok_or_else(|| DesignError::UnknownVariantTag {
                tag: element.name.clone(),
            })?;
        decode(element, self)
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.decoders.keys().collect();
        tags.sort();
        f.debug_struct("ShapeRegistry").field("tags", &tags).finish()
    }
}

// A primitive's box must be representable and at least MIN_SIZE on each side.
fn decode_rect(element: &XmlElement) -> DesignResult<BoundingBox> {
    let rect = element.required_child("rect")?;
    let bounds = BoundingBox::new(
        rect.required_i32("left")?,
        rect.required_i32("top")?,
        rect.required_i32("width")?,
        rect.required_i32("height")?,
    );
    if !bounds.is_representable() {
        return Err(DesignError::malformed(format!(
            "<{}> rect {:?} exceeds the coordinate range",
            element.name, bounds
        )));
    }
    if !bounds.has_min_size() {
        return Err(DesignError::malformed(format!(
            "<{}> rect is {}x{}, below the minimum size {}",
            element.name, bounds.width, bounds.height, MIN_SIZE
        )));
    }
    Ok(bounds)
}

// A missing color falls back to black.
fn decode_color(element: &XmlElement) -> DesignResult<Color> {
    match element.attr("color") {
        Some(value) => Ok(Color::from_hex(value)?),
        None => Ok(Color::BLACK),
    }
}

fn decode_circle(element: &XmlElement, _: &ShapeRegistry) -> DesignResult<DrawingObject> {
    let shape = Shape::Circle(DesignCircle::new(decode_rect(element)?));
    Ok(DrawingObject::new(shape, decode_color(element)?))
}

fn decode_rectangle(element: &XmlElement, _: &ShapeRegistry) -> DesignResult<DrawingObject> {
    let shape = Shape::Rectangle(DesignRectangle::new(decode_rect(element)?));
    Ok(DrawingObject::new(shape, decode_color(element)?))
}

// The saved vertices are ignored; the polygon is rebuilt from the box.
fn decode_triangle(element: &XmlElement, _: &ShapeRegistry) -> DesignResult<DrawingObject> {
    let shape = Shape::Triangle(DesignTriangle::new(decode_rect(element)?));
    Ok(DrawingObject::new(shape, decode_color(element)?))
}

fn decode_group(element: &XmlElement, registry: &ShapeRegistry) -> DesignResult<DrawingObject> {
    let items = element.required_child("items")?;
    let children = decode_items(items, registry)?;
    let cover = children.iter().try_fold(BoundingBox::empty(), |acc, child| {
        acc.checked_union(&child.bounds())
    });
    if cover.is_none() {
        return Err(DesignError::malformed(
            "<Group> children span more than the coordinate range",
        ));
    }
    let shape = Shape::Group(DesignGroup::from_children(children));
    Ok(DrawingObject::new(shape, decode_color(element)?))
}

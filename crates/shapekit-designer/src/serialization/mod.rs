//! XML persistence for designs.
//!
//! A document is a `storage` root holding one `items` list. Each shape is an
//! element named by its variant tag with a `color` attribute and a `rect`
//! child. Triangles also carry their vertices under `polygon/points`, which
//! is written for readers of the file and ignored on load. Groups nest
//! their children under their own `items` element.
//!
//! ```xml
//! <storage>
//!   <items count_elements="1">
//!     <Circle color="#00ff00">
//!       <rect left="75" top="75" width="50" height="50"/>
//!     </Circle>
//!   </items>
//! </storage>
//! ```

mod registry;
pub mod xml;

use std::path::Path;

use tracing::warn;

pub use registry::{DecodeFn, ShapeRegistry};
pub use xml::XmlElement;

use crate::error::{DesignError, DesignResult};
use crate::model::{DrawingObject, Shape};

pub const ROOT_TAG: &str = "storage";
pub const ITEMS_TAG: &str = "items";

/// Encodes one node and its subtree.
pub fn encode_object(object: &DrawingObject) -> XmlElement {
    let rect = object.bounds();
    let mut element = XmlElement::new(object.shape_type().tag())
        .with_attr("color", object.stored_color().to_hex())
        .with_child(
            XmlElement::new("rect")
                .with_attr("left", rect.x)
                .with_attr("top", rect.y)
                .with_attr("width", rect.width)
                .with_attr("height", rect.height),
        );

    match &object.shape {
        Shape::Triangle(triangle) => {
            let mut points = XmlElement::new("points").with_attr("count_points", 3);
            for p in triangle.polygon() {
                points.push_child(XmlElement::new("point").with_attr("x", p.x).with_attr("y", p.y));
            }
            element.push_child(XmlElement::new("polygon").with_child(points));
        }
        Shape::Group(group) => {
            element.push_child(encode_items(group.children()));
        }
        Shape::Circle(_) | Shape::Rectangle(_) => {}
    }
    element
}

/// `items` element listing `objects` in order.
pub fn encode_items<'a>(objects: impl IntoIterator<Item = &'a DrawingObject>) -> XmlElement {
    let children: Vec<XmlElement> = objects.into_iter().map(encode_object).collect();
    let mut items = XmlElement::new(ITEMS_TAG).with_attr("count_elements", children.len());
    items.children = children;
    items
}

/// Decodes every shape element under an `items` element.
///
/// A `count_elements` value that disagrees with the actual number of
/// elements is logged and otherwise ignored.
pub fn decode_items(
    items: &XmlElement,
    registry: &ShapeRegistry,
) -> DesignResult<Vec<DrawingObject>> {
    if let Some(declared) = items.attr("count_elements") {
        if declared.trim().parse::<usize>().ok() != Some(items.children.len()) {
            warn!(
                declared,
                actual = items.children.len(),
                "items count does not match element count"
            );
        }
    }
    items
        .children
        .iter()
        .map(|element| registry.decode(element))
        .collect()
}

pub fn to_xml_string<'a>(
    objects: impl IntoIterator<Item = &'a DrawingObject>,
) -> DesignResult<String> {
    let root = XmlElement::new(ROOT_TAG).with_child(encode_items(objects));
    xml::write_document(&root)
}

/// Decodes a whole document. Nothing is returned unless every shape in it
/// decodes.
pub fn from_xml_str(content: &str, registry: &ShapeRegistry) -> DesignResult<Vec<DrawingObject>> {
    let root = xml::parse_document(content)?;
    if root.name != ROOT_TAG {
        return Err(DesignError::malformed(format!(
            "expected <{}> root, found <{}>",
            ROOT_TAG, root.name
        )));
    }
    decode_items(root.required_child(ITEMS_TAG)?, registry)
}

pub fn save_to_file<'a>(
    path: impl AsRef<Path>,
    objects: impl IntoIterator<Item = &'a DrawingObject>,
) -> DesignResult<()> {
    let content = to_xml_string(objects)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_from_file(
    path: impl AsRef<Path>,
    registry: &ShapeRegistry,
) -> DesignResult<Vec<DrawingObject>> {
    let content = std::fs::read_to_string(path)?;
    from_xml_str(&content, registry)
}

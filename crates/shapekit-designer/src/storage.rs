//! Top-level shape collection.
//!
//! Items are kept in insertion order, which is also the z-order: later items
//! are painted above earlier ones and win hit tests.

use std::path::Path;

use shapekit_core::{Color, Point};
use tracing::info;

use crate::error::DesignResult;
use crate::model::{DesignGroup, DrawingObject, Shape};
use crate::serialization::{self, ShapeRegistry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Storage {
    items: Vec<DrawingObject>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DrawingObject> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DrawingObject> {
        self.items.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawingObject> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, DrawingObject> {
        self.items.iter_mut()
    }

    /// Appends `item` on top and returns its index.
    pub fn add_item(&mut self, item: DrawingObject) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Option<DrawingObject> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes every item matching `predicate`. Returns how many were removed.
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&DrawingObject) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected top-level items. Children of groups are not visited.
    pub fn active_items(&self) -> impl Iterator<Item = &DrawingObject> + '_ {
        self.items.iter().filter(|item| item.is_selected())
    }

    pub fn active_items_mut(&mut self) -> impl Iterator<Item = &mut DrawingObject> + '_ {
        self.items.iter_mut().filter(|item| item.is_selected())
    }

    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    pub fn deactivate_all(&mut self) {
        for item in &mut self.items {
            item.deactivate();
        }
    }

    /// Removes every selected top-level item. Returns how many were removed.
    pub fn delete_all_active(&mut self) -> usize {
        self.remove_where(|item| item.is_selected())
    }

    /// Moves every selected top-level item into a new unselected group,
    /// appended on top. Items keep their relative order inside the group.
    ///
    /// Returns the group's index, or `None` when nothing is selected.
    pub fn group_active(&mut self) -> Option<usize> {
        if self.active_count() == 0 {
            return None;
        }

        let (mut active, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is_selected());
        self.items = rest;

        for item in &mut active {
            item.deactivate();
        }
        let count = active.len();
        let group = DrawingObject::new(
            Shape::Group(DesignGroup::from_children(active)),
            Color::BLACK,
        );
        let index = self.add_item(group);
        info!(count, index, "grouped active items");
        Some(index)
    }

    /// Index of the topmost item whose outline contains `p`.
    pub fn item_at(&self, p: Point) -> Option<usize> {
        self.items.iter().rposition(|item| item.contains_point(p))
    }

    pub fn to_xml(&self) -> DesignResult<String> {
        serialization::to_xml_string(&self.items)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> DesignResult<()> {
        serialization::save_to_file(path, &self.items)
    }

    /// Replaces the contents with the document at `path`. On error the
    /// current items are kept.
    pub fn load_from_file(
        &mut self,
        path: impl AsRef<Path>,
        registry: &ShapeRegistry,
    ) -> DesignResult<()> {
        self.items = serialization::load_from_file(path, registry)?;
        Ok(())
    }

    /// Like [`Storage::load_from_file`] for a document already in memory.
    pub fn load_from_str(&mut self, content: &str, registry: &ShapeRegistry) -> DesignResult<()> {
        self.items = serialization::from_xml_str(content, registry)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Storage {
    type Item = &'a DrawingObject;
    type IntoIter = std::slice::Iter<'a, DrawingObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<DrawingObject> for Storage {
    fn from_iter<I: IntoIterator<Item = DrawingObject>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

//! Shape operations (click, key commands, recolor, group) for designer state.

use shapekit_core::{Color, Point};
use tracing::{debug, info};

use super::DesignerState;
use crate::commands::KeyCommand;
use crate::model::{DesignerShape, DrawingObject};

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The shape at this index had its selection toggled.
    Toggled(usize),
    /// A new shape was added at this index.
    Created(usize),
    /// Nothing was hit and a new shape would not fit the canvas.
    Rejected,
}

impl DesignerState {
    /// Handles a click at `point`. `multi` is the multi-select modifier.
    ///
    /// A hit on a shape toggles it, first clearing other selections unless
    /// `multi` is held or the shape is already selected. A click on empty
    /// canvas places a shape of the current tool and color there.
    pub fn click(&mut self, point: Point, multi: bool) -> ClickOutcome {
        if let Some(index) = self.storage.item_at(point) {
            let already_selected = self
                .storage
                .get(index)
                .is_some_and(|item| item.is_selected());
            if !multi && !already_selected {
                self.storage.deactivate_all();
            }
            if let Some(item) = self.storage.get_mut(index) {
                item.toggle_selected();
            }
            return ClickOutcome::Toggled(index);
        }

        let canvas = self.canvas_rect();
        let shape = self
            .tool
            .create(point, self.tool_settings.initial_size)
            .filter(|shape| shape.bounds().is_within(&canvas));
        let Some(shape) = shape else {
            debug!(x = point.x, y = point.y, "new shape does not fit the canvas");
            return ClickOutcome::Rejected;
        };
        let item = DrawingObject::new(shape, self.current_color).with_selected(multi);

        let index = self.storage.add_item(item);
        if !multi {
            self.storage.deactivate_all();
        }
        self.mark_modified();
        ClickOutcome::Created(index)
    }

    /// Applies a key command to the selected shapes. Returns how many
    /// shapes changed; rejected moves and resizes are skipped silently.
    pub fn apply_command(&mut self, command: KeyCommand) -> usize {
        let canvas = self.canvas_rect();
        let changed = if command == KeyCommand::Delete {
            self.storage.delete_all_active()
        } else if let Some((dx, dy)) = command.move_offset(self.tool_settings.move_step) {
            self.storage
                .active_items_mut()
                .map(|item| item.translate(&canvas, dx, dy))
                .filter(|moved| *moved)
                .count()
        } else if let Some(delta) = command.resize_delta(self.tool_settings.resize_step) {
            self.storage
                .active_items_mut()
                .map(|item| item.resize(&canvas, delta))
                .filter(|resized| *resized)
                .count()
        } else {
            0
        };

        debug!(%command, changed, "applied key command");
        if changed > 0 {
            self.mark_modified();
        }
        changed
    }

    /// Makes `color` current. When it differs from the current color, the
    /// selected shapes are recolored and the selection is cleared.
    pub fn set_color(&mut self, color: Color) {
        if color == self.current_color {
            return;
        }
        let mut recolored = 0;
        for item in self.storage.active_items_mut() {
            item.set_color(color);
            recolored += 1;
        }
        self.storage.deactivate_all();
        self.current_color = color;
        if recolored > 0 {
            self.mark_modified();
        }
    }

    pub fn deselect_all(&mut self) {
        self.storage.deactivate_all();
    }

    /// Check if grouping is possible (at least 2 items selected).
    pub fn can_group(&self) -> bool {
        self.storage.active_count() > 1
    }

    /// Groups the selected shapes. Returns the new group's index.
    pub fn group_selected(&mut self) -> Option<usize> {
        if !self.can_group() {
            return None;
        }
        let index = self.storage.group_active()?;
        self.mark_modified();
        info!(index, "grouped selection");
        Some(index)
    }
}

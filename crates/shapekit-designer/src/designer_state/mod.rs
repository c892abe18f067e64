//! Editor session: the state behind one design window.
//!
//! This module is split into submodules:
//! - `shapes`: clicks, key commands, recoloring and grouping
//! - `file_io`: save/load operations

mod file_io;
mod shapes;

use std::path::PathBuf;

use shapekit_core::{BoundingBox, Color};
use shapekit_settings::{CanvasSettings, Config, ToolSettings};

use crate::model::ShapeKind;
use crate::renderer::Surface;
use crate::serialization::ShapeRegistry;
use crate::storage::Storage;

pub use shapes::ClickOutcome;

const UNTITLED: &str = "Untitled";

/// Designer state for UI integration.
///
/// The UI layer forwards clicks, key commands, color and tool choices and
/// window resizes; the session applies them to its [`Storage`].
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub storage: Storage,
    pub tool_settings: ToolSettings,
    pub canvas_settings: CanvasSettings,
    pub current_file_path: Option<PathBuf>,
    pub is_modified: bool,
    pub design_name: String,
    tool: ShapeKind,
    current_color: Color,
    window_width: i32,
    window_height: i32,
    registry: ShapeRegistry,
}

impl DesignerState {
    /// Creates a new designer state with default settings.
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let canvas = config.canvas.clone();
        let width = canvas.initial_window_width.max(canvas.min_window_width);
        let height = canvas.initial_window_height.max(canvas.min_window_height);
        Self {
            storage: Storage::new(),
            tool_settings: config.tools.clone(),
            current_color: config.tools.initial_color,
            canvas_settings: canvas,
            current_file_path: None,
            is_modified: false,
            design_name: UNTITLED.to_string(),
            tool: ShapeKind::default(),
            window_width: width,
            window_height: height,
            registry: ShapeRegistry::builtin(),
        }
    }

    /// Drawable region: the window below the header strip.
    pub fn canvas_rect(&self) -> BoundingBox {
        let header = self.canvas_settings.header_height;
        BoundingBox::new(0, header, self.window_width, self.window_height - header)
    }

    pub fn window_size(&self) -> (i32, i32) {
        (self.window_width, self.window_height)
    }

    /// Smallest window that keeps every shape on the canvas.
    pub fn minimum_window_size(&self) -> (i32, i32) {
        self.storage.iter().fold(
            (
                self.canvas_settings.min_window_width,
                self.canvas_settings.min_window_height,
            ),
            |(w, h), item| {
                let corner = item.bounds().bottom_right();
                (w.max(corner.x), h.max(corner.y))
            },
        )
    }

    /// Resizes the window, clamped to [`DesignerState::minimum_window_size`].
    /// Returns the size actually applied.
    pub fn resize_window(&mut self, width: i32, height: i32) -> (i32, i32) {
        let (min_w, min_h) = self.minimum_window_size();
        self.window_width = width.max(min_w);
        self.window_height = height.max(min_h);
        self.window_size()
    }

    pub fn tool(&self) -> ShapeKind {
        self.tool
    }

    pub fn set_tool(&mut self, tool: ShapeKind) {
        self.tool = tool;
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Registry used by [`DesignerState::load_from_file`]; extend it to
    /// load additional element tags.
    pub fn registry_mut(&mut self) -> &mut ShapeRegistry {
        &mut self.registry
    }

    /// Paints every top-level shape in z-order.
    pub fn paint(&self, surface: &mut dyn Surface) {
        for item in &self.storage {
            item.paint(surface);
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

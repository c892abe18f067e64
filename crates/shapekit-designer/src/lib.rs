//! # ShapeKit Designer
//!
//! This crate provides the shape model behind the ShapeKit editor: shapes
//! placed on a bounded canvas, moved and resized under containment rules,
//! grouped into composites and persisted as XML.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Shapes**: Circles, rectangles, triangles and recursive groups
//! - **Transforms**: Bounded translate and resize; a group resize either
//!   applies to every child or to none
//! - **Storage**: Top-level shapes in z-order with selection queries,
//!   deletion and grouping
//!
//! ### Persistence and Output
//! - **Serialization**: XML documents decoded through a tag registry
//! - **Rendering**: A [`Surface`] draw-call contract and an SVG surface
//!
//! ### Session
//! - **DesignerState**: Clicks, key commands, colors, tools and file I/O for
//!   one design window
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session)
//!   ├── Storage (top-level shapes)
//!   │     └── DrawingObject (shape + color + selection)
//!   │           └── Shape (Circle | Rectangle | Triangle | Group)
//!   ├── ShapeRegistry (tag -> decoder)
//!   └── Surface (rendering collaborator)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_core::Point;
//! use shapekit_designer::{ClickOutcome, DesignerState, KeyCommand};
//!
//! let mut state = DesignerState::new();
//! let outcome = state.click(Point::new(100, 200), true);
//! assert_eq!(outcome, ClickOutcome::Created(0));
//!
//! state.apply_command(KeyCommand::Grow);
//! assert_eq!(state.storage.get(0).unwrap().bounds().width, 60);
//! ```

pub mod commands;
pub mod designer_state;
pub mod error;
pub mod model;
pub mod renderer;
pub mod serialization;
pub mod storage;
pub mod svg_renderer;

pub use commands::KeyCommand;
pub use designer_state::{ClickOutcome, DesignerState};
pub use error::{DesignError, DesignResult};
pub use model::{
    DesignCircle, DesignGroup, DesignRectangle, DesignTriangle, DesignerShape, DrawingObject,
    Shape, ShapeKind, ShapeType,
};
pub use renderer::{FillStyle, LineStyle, Paint, Surface};
pub use serialization::{ShapeRegistry, XmlElement};
pub use storage::Storage;
pub use svg_renderer::SvgSurface;

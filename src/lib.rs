//! # ShapeKit
//!
//! A shape editor model: circles, rectangles and triangles placed on a
//! bounded canvas, moved and resized under containment rules, grouped into
//! composites and saved as XML.
//!
//! ## Architecture
//!
//! ShapeKit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Geometry primitives, colors, core errors
//! 2. **shapekit-designer** - Shape model, transforms, storage, XML, session
//! 3. **shapekit-settings** - Editor configuration
//! 4. **shapekit** - Headless driver that runs editing scripts
//!
//! ## Features
//!
//! - **Bounded Transforms**: Moves and resizes never leave the canvas
//! - **Atomic Group Resize**: A group resizes every child or none
//! - **XML Persistence**: Registry-driven decoding of saved designs
//! - **SVG Output**: Render a design without a GUI toolkit

pub mod args;
pub mod script;

pub use args::Args;
pub use shapekit_designer as designer;
pub use shapekit_settings::Config;

use anyhow::Context;
use shapekit_designer::{DesignerState, SvgSurface};
use tracing::info;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support, falling back to `level`
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{}'", level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(())
}

/// Runs the driver: load config and design, run the script, write outputs.
pub fn run(args: &Args) -> anyhow::Result<DesignerState> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    let mut state = DesignerState::from_config(&config);

    if let Some(path) = &args.load {
        state.load_from_file(path)?;
    }

    if let Some(path) = &args.script {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        let commands = script::parse_script(&source)
            .with_context(|| format!("invalid script {}", path.display()))?;
        info!(path = %path.display(), commands = commands.len(), "running script");
        script::run_script(&mut state, &commands)?;
    }

    if let Some(path) = &args.save {
        state.save_to_file(path)?;
    }

    if let Some(path) = &args.svg {
        let (width, height) = state.window_size();
        let mut surface = SvgSurface::new(width, height);
        state.paint(&mut surface);
        std::fs::write(path, surface.to_svg())
            .with_context(|| format!("failed to write SVG to {}", path.display()))?;
        info!(path = %path.display(), elements = surface.element_count(), "wrote SVG");
    }

    Ok(state)
}

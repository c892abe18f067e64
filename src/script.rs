//! Line-oriented editing scripts.
//!
//! Each non-empty line is one command. A `#` at the start of a line or
//! followed by whitespace starts a comment, so colors like `#00ff00` are
//! left alone.
//!
//! ```text
//! tool rectangle
//! color #00ff00
//! click 200 300 multi
//! key grow
//! group
//! window 1024 768
//! save out.xml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use shapekit_core::{Color, Point};
use shapekit_designer::{DesignerState, KeyCommand, ShapeKind};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    Tool(ShapeKind),
    Color(Color),
    Click { point: Point, multi: bool },
    Key(KeyCommand),
    Group,
    Deselect,
    Window { width: i32, height: i32 },
    Save(PathBuf),
    Load(PathBuf),
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>, ScriptError> {
    let mut commands = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = strip_comment(raw).trim();
        if text.is_empty() {
            continue;
        }
        let command = parse_command(text).map_err(|message| ScriptError { line, message })?;
        commands.push(ScriptLine { line, command });
    }
    Ok(commands)
}

fn strip_comment(raw: &str) -> &str {
    if raw.trim_start().starts_with('#') {
        return "";
    }
    raw.char_indices()
        .find(|&(i, c)| c == '#' && raw[i + 1..].chars().next().is_none_or(char::is_whitespace))
        .map_or(raw, |(i, _)| &raw[..i])
}

fn parse_command(text: &str) -> Result<ScriptCommand, String> {
    let mut words = text.split_whitespace();
    let keyword = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();

    let command = match (keyword, args.as_slice()) {
        ("tool", [kind]) => ScriptCommand::Tool(kind.parse()?),
        ("color", [value]) => {
            ScriptCommand::Color(Color::from_hex(value).map_err(|e| e.to_string())?)
        }
        ("click", [x, y]) => ScriptCommand::Click {
            point: Point::new(int(x)?, int(y)?),
            multi: false,
        },
        ("click", [x, y, "multi"]) => ScriptCommand::Click {
            point: Point::new(int(x)?, int(y)?),
            multi: true,
        },
        ("key", [name]) => ScriptCommand::Key(name.parse()?),
        ("group", []) => ScriptCommand::Group,
        ("deselect", []) => ScriptCommand::Deselect,
        ("window", [w, h]) => ScriptCommand::Window {
            width: int(w)?,
            height: int(h)?,
        },
        ("save", [path]) => ScriptCommand::Save(PathBuf::from(path)),
        ("load", [path]) => ScriptCommand::Load(PathBuf::from(path)),
        _ => return Err(format!("cannot parse '{}'", text)),
    };
    Ok(command)
}

fn int(value: &str) -> Result<i32, String> {
    value
        .parse()
        .map_err(|_| format!("'{}' is not an integer", value))
}

/// Runs one command against the session.
pub fn execute(state: &mut DesignerState, command: &ScriptCommand) -> anyhow::Result<()> {
    debug!(?command, "executing script command");
    match command {
        ScriptCommand::Tool(kind) => state.set_tool(*kind),
        ScriptCommand::Color(color) => state.set_color(*color),
        ScriptCommand::Click { point, multi } => {
            state.click(*point, *multi);
        }
        ScriptCommand::Key(key) => {
            state.apply_command(*key);
        }
        ScriptCommand::Group => {
            state.group_selected();
        }
        ScriptCommand::Deselect => state.deselect_all(),
        ScriptCommand::Window { width, height } => {
            state.resize_window(*width, *height);
        }
        ScriptCommand::Save(path) => state.save_to_file(path)?,
        ScriptCommand::Load(path) => state.load_from_file(path)?,
    }
    Ok(())
}

/// Runs every command in order, stopping at the first failure.
pub fn run_script(state: &mut DesignerState, commands: &[ScriptLine]) -> anyhow::Result<()> {
    for entry in commands {
        execute(state, &entry.command).with_context(|| format!("script line {}", entry.line))?;
    }
    Ok(())
}

//! Interpreter that traces an L-System command string onto a [`DrawingSurface`].
//!
//! The entry point is [`TurtleInterpreter`]. Configure it with a
//! [`TurtleConfig`], optionally adjust symbol-to-operation mappings via
//! [`TurtleInterpreter::set_op`] or [`TurtleInterpreter::with_map`], then
//! call [`TurtleInterpreter::interpret`] with a surface, or
//! [`TurtleInterpreter::sketch`] to collect a [`Sketch`] directly.

use std::collections::HashMap;

use crate::errors::InterpreterError;
use crate::log::{debug, warn};
use crate::sketch::{Sketch, SketchCanvas};
use crate::surface::DrawingSurface;
use crate::turtle::{standard_symbols, TurtleFrame, TurtleOp};

/// Step distance of the canonical configuration.
pub const DEFAULT_STEP_DISTANCE: f32 = 10.0;

/// Turn angle in degrees of the canonical configuration.
pub const DEFAULT_TURN_ANGLE: f32 = 22.5;

/// Initial counter-clockwise heading offset of the canonical configuration.
/// The offset is applied as a relative turn; on a fresh [`SketchCanvas`],
/// which points along +X, it makes growth proceed upward.
pub const DEFAULT_HEADING_OFFSET: f32 = 90.0;

/// Configuration for one interpretation run.
///
/// Values are taken as given: zero or negative distances and angles are not
/// validated and simply produce degenerate drawings.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    /// Distance covered by every `F`/`f` move.
    pub step_distance: f32,

    /// Angle in degrees applied by every `+`/`-` turn.
    pub turn_angle: f32,

    /// Treat `{`/`}` as leaf markers instead of fill brackets: both become
    /// no-ops and no fill call reaches the surface.
    pub leaf_mode: bool,

    /// One-off counter-clockwise turn issued before the scan starts. Zero
    /// disables it entirely.
    pub initial_heading_offset: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            step_distance: DEFAULT_STEP_DISTANCE,
            turn_angle: DEFAULT_TURN_ANGLE,
            leaf_mode: false,
            initial_heading_offset: DEFAULT_HEADING_OFFSET,
        }
    }
}

impl TurtleConfig {
    /// The earliest observed behavior: long steps, right angles, no initial
    /// orientation.
    pub fn legacy() -> Self {
        Self {
            step_distance: 100.0,
            turn_angle: 90.0,
            leaf_mode: false,
            initial_heading_offset: 0.0,
        }
    }
}

/// Interprets expanded L-System command strings against a drawing surface.
pub struct TurtleInterpreter {
    op_map: HashMap<char, TurtleOp>,
    config: TurtleConfig,
}

impl TurtleInterpreter {
    /// Creates an interpreter with the given configuration and the
    /// [`standard_symbols`] alphabet preloaded.
    pub fn new(config: TurtleConfig) -> Self {
        Self {
            op_map: standard_symbols(),
            config,
        }
    }

    /// Replaces the entire symbol-to-operation map in one step (builder
    /// pattern).
    ///
    /// Symbols absent from `map` are treated as [`TurtleOp::Ignore`].
    pub fn with_map(mut self, map: HashMap<char, TurtleOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`TurtleOp`] to a symbol, extending or overriding
    /// the current map.
    pub fn set_op(&mut self, symbol: char, op: TurtleOp) {
        self.op_map.insert(symbol, op);
    }

    /// Interprets `commands` left to right, issuing drawing calls to
    /// `surface`.
    ///
    /// Each character dispatches through the symbol map; unmapped characters
    /// are silently skipped. Every effect of the scan is observable on the
    /// surface, and the resulting call sequence is a deterministic function
    /// of `commands` and the configuration.
    ///
    /// # Branches
    ///
    /// `[` snapshots the cursor (position and heading, read back from the
    /// surface) onto a branch stack; `]` pops the most recent snapshot and
    /// restores the cursor through [`DrawingSurface::set_position`] and
    /// [`DrawingSurface::set_heading`], which never draw. A `]` with no
    /// matching `[` stops the scan at once with
    /// [`InterpreterError::EmptyStack`]; whatever was drawn before the
    /// failure stays on the surface. Branches still open when the input ends
    /// are tolerated and their frames discarded.
    ///
    /// # Fill regions
    ///
    /// `{`/`}` bracket a fill region on the surface. With
    /// [`TurtleConfig::leaf_mode`] set, both are no-ops, for grammars whose
    /// braces denote leaves rather than fillable regions.
    pub fn interpret<S>(&self, commands: &str, surface: &mut S) -> Result<(), InterpreterError>
    where
        S: DrawingSurface + ?Sized,
    {
        debug!(
            commands = commands.chars().count(),
            "interpreting command string"
        );

        let mut stack: Vec<TurtleFrame> = Vec::new();

        if self.config.initial_heading_offset != 0.0 {
            surface.turn_left(self.config.initial_heading_offset);
        }

        for (index, symbol) in commands.chars().enumerate() {
            let op = self
                .op_map
                .get(&symbol)
                .copied()
                .unwrap_or(TurtleOp::Ignore);

            match op {
                // --- SPATIAL ---
                TurtleOp::Draw => surface.forward(self.config.step_distance),
                TurtleOp::Move => surface.jump(self.config.step_distance),
                TurtleOp::TurnLeft => surface.turn_left(self.config.turn_angle),
                TurtleOp::TurnRight => surface.turn_right(self.config.turn_angle),
                TurtleOp::TurnAround => surface.turn_left(180.0),

                // --- FLOW ---
                TurtleOp::Push => {
                    stack.push(TurtleFrame {
                        position: surface.position(),
                        heading: surface.heading(),
                    });
                }
                TurtleOp::Pop => {
                    let frame = stack.pop().ok_or(InterpreterError::EmptyStack { index })?;
                    surface.set_position(frame.position);
                    surface.set_heading(frame.heading);
                }

                // --- FILL ---
                TurtleOp::BeginFill => {
                    if !self.config.leaf_mode {
                        surface.begin_fill();
                    }
                }
                TurtleOp::EndFill => {
                    if !self.config.leaf_mode {
                        surface.end_fill();
                    }
                }

                TurtleOp::Ignore => {}
            }
        }

        if !stack.is_empty() {
            warn!(
                open_branches = stack.len(),
                "command string ended with unclosed branches"
            );
        }

        Ok(())
    }

    /// Interprets `commands` onto a fresh [`SketchCanvas`] and returns the
    /// finished [`Sketch`].
    pub fn sketch(&self, commands: &str) -> Result<Sketch, InterpreterError> {
        let mut canvas = SketchCanvas::new();
        self.interpret(commands, &mut canvas)?;
        Ok(canvas.into_sketch())
    }
}

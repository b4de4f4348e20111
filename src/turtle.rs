//! Turtle operations and branch frames for sketch interpretation.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A saved branch state: the cursor snapshot taken when a branch opens.
///
/// Frames are plain values. Once pushed they are never aliased by the live
/// cursor, so drawing inside the branch cannot disturb the restore point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleFrame {
    /// Cursor position at the moment the branch opened.
    pub position: Vec2,

    /// Cursor heading in degrees at the moment the branch opened.
    pub heading: f32,
}

impl TurtleFrame {
    /// Returns the unit vector pointing along the frame's heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.heading.to_radians())
    }
}

/// Operations that can be performed by the sketching turtle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    // --- Spatial Navigation ---
    /// Move forward, drawing a line (`F`).
    Draw,
    /// Move forward without drawing (`f`).
    Move,
    /// Rotate the heading counter-clockwise by the configured angle (`+`).
    TurnLeft,
    /// Rotate the heading clockwise by the configured angle (`-`).
    TurnRight,
    /// Reverse the heading, turning 180 degrees (`|`).
    TurnAround,

    // --- Flow Control ---
    /// Save the cursor state onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed cursor state (`]`).
    Pop,

    // --- Fill Regions ---
    /// Start collecting a fill region (`{`).
    BeginFill,
    /// Commit the fill region collected so far (`}`).
    EndFill,

    /// No-op for symbols with no registered meaning.
    Ignore,
}

/// Returns the conventional symbol-to-operation table.
///
/// Every character outside this table is interpreted as [`TurtleOp::Ignore`],
/// which keeps the alphabet open for grammars that carry extra symbols.
/// See the crate README for the full symbol reference.
pub fn standard_symbols() -> HashMap<char, TurtleOp> {
    HashMap::from([
        // Spatial
        ('F', TurtleOp::Draw),
        ('f', TurtleOp::Move),
        ('+', TurtleOp::TurnLeft),
        ('-', TurtleOp::TurnRight),
        ('|', TurtleOp::TurnAround),
        // Flow
        ('[', TurtleOp::Push),
        (']', TurtleOp::Pop),
        // Fill
        ('{', TurtleOp::BeginFill),
        ('}', TurtleOp::EndFill),
    ])
}

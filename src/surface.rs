//! The drawing capability consumed by the interpreter.

use glam::Vec2;

/// A 2D pen-and-cursor drawing surface.
///
/// The surface owns all cursor state: position, heading in degrees, and any
/// fill region being collected. The interpreter only reads the cursor (to
/// snapshot branch frames) and issues the mutations below; it never holds
/// cursor state of its own. Counter-clockwise turns are "left".
pub trait DrawingSurface {
    /// Draws a line segment of `distance` along the current heading,
    /// advancing the cursor to the segment's far end.
    fn forward(&mut self, distance: f32);

    /// Advances the cursor by `distance` along the current heading without
    /// drawing anything.
    fn jump(&mut self, distance: f32);

    /// Rotates the heading counter-clockwise by `angle` degrees.
    fn turn_left(&mut self, angle: f32);

    /// Rotates the heading clockwise by `angle` degrees.
    fn turn_right(&mut self, angle: f32);

    /// Returns the current cursor position.
    fn position(&self) -> Vec2;

    /// Returns the current cursor heading in degrees.
    fn heading(&self) -> f32;

    /// Teleports the cursor to `position`. Used to restore a branch frame;
    /// implementations must not draw during the move.
    fn set_position(&mut self, position: Vec2);

    /// Points the cursor at `heading` degrees.
    fn set_heading(&mut self, heading: f32);

    /// Starts collecting a fill region at the current position.
    fn begin_fill(&mut self);

    /// Commits the fill region collected since
    /// [`begin_fill`](Self::begin_fill). Without an open region this is a
    /// no-op.
    fn end_fill(&mut self);
}

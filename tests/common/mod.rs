use glam::Vec2;
use lsys_sketch::DrawingSurface;

/// One mutating surface call, as observed by [`TraceSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Forward(f32),
    Jump(f32),
    TurnLeft(f32),
    TurnRight(f32),
    SetPosition(Vec2),
    SetHeading(f32),
    BeginFill,
    EndFill,
}

/// Headless surface that models the cursor and records every mutating call
/// in order. Cursor reads are answered but not recorded.
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub position: Vec2,
    pub heading: f32,
    pub calls: Vec<Call>,
}

impl TraceSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawingSurface for TraceSurface {
    fn forward(&mut self, distance: f32) {
        self.position += Vec2::from_angle(self.heading.to_radians()) * distance;
        self.calls.push(Call::Forward(distance));
    }

    fn jump(&mut self, distance: f32) {
        self.position += Vec2::from_angle(self.heading.to_radians()) * distance;
        self.calls.push(Call::Jump(distance));
    }

    fn turn_left(&mut self, angle: f32) {
        self.heading = (((self.heading + angle) % 360.0) + 360.0) % 360.0;
        self.calls.push(Call::TurnLeft(angle));
    }

    fn turn_right(&mut self, angle: f32) {
        self.heading = (((self.heading - angle) % 360.0) + 360.0) % 360.0;
        self.calls.push(Call::TurnRight(angle));
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn heading(&self) -> f32 {
        self.heading
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.calls.push(Call::SetPosition(position));
    }

    fn set_heading(&mut self, heading: f32) {
        self.heading = heading;
        self.calls.push(Call::SetHeading(heading));
    }

    fn begin_fill(&mut self) {
        self.calls.push(Call::BeginFill);
    }

    fn end_fill(&mut self) {
        self.calls.push(Call::EndFill);
    }
}

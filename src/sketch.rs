use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::surface::DrawingSurface;

/// Fill regions with fewer vertices than this cannot enclose area and are
/// discarded on commit.
const MIN_FILL_VERTICES: usize = 3;

/// Wraps a heading into `[0, 360)`.
///
/// The trailing modulo is load-bearing: for a tiny negative remainder the
/// `+ 360.0` rounds up to exactly `360.0`, which must fold back to `0.0`.
fn normalize_heading(heading: f32) -> f32 {
    ((heading % 360.0) + 360.0) % 360.0
}

/// A straight drawn stroke from `start` to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    /// Euclidean length of the stroke.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

/// A committed fill polygon: every position the cursor visited while the
/// region was open, in visit order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillRegion {
    pub vertices: Vec<Vec2>,
}

/// The complete, engine-agnostic record of one interpreted drawing.
///
/// This structure represents the "Phenotype" traced from an expanded
/// L-System string: an ordered list of drawn line segments plus any
/// committed fill polygons, ready to be ingested by renderers, pen plotters,
/// or game engines.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sketch {
    /// Drawn line segments, in draw order.
    pub segments: Vec<Segment>,

    /// Committed fill regions, in commit order.
    pub fills: Vec<FillRegion>,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn add_fill(&mut self, fill: FillRegion) {
        self.fills.push(fill);
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.fills.is_empty()
    }

    /// Axis-aligned bounds over all recorded geometry as `(min, max)`
    /// corners, or `None` for an empty sketch.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let mut points = self
            .segments
            .iter()
            .flat_map(|s| [s.start, s.end])
            .chain(self.fills.iter().flat_map(|f| f.vertices.iter().copied()));
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

/// A headless [`DrawingSurface`] that records into a [`Sketch`].
///
/// The canvas owns the cursor: position, heading in degrees (kept in
/// `[0, 360)`), and the fill region being collected, if any. A fresh canvas
/// starts at the origin pointing along +X.
#[derive(Debug, Default)]
pub struct SketchCanvas {
    position: Vec2,
    heading: f32,
    active_fill: Option<Vec<Vec2>>,
    sketch: Sketch,
}

impl SketchCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sketch recorded so far.
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// Finishes the canvas. A fill region still open at this point was
    /// never committed and is dropped.
    pub fn into_sketch(self) -> Sketch {
        self.sketch
    }

    fn destination(&self, distance: f32) -> Vec2 {
        self.position + Vec2::from_angle(self.heading.to_radians()) * distance
    }

    /// While a fill is open, every position change contributes a vertex,
    /// whether or not it drew a line.
    fn record_fill_vertex(&mut self) {
        if let Some(vertices) = &mut self.active_fill {
            vertices.push(self.position);
        }
    }
}

impl DrawingSurface for SketchCanvas {
    fn forward(&mut self, distance: f32) {
        let to = self.destination(distance);
        self.sketch.add_segment(Segment {
            start: self.position,
            end: to,
        });
        self.position = to;
        self.record_fill_vertex();
    }

    fn jump(&mut self, distance: f32) {
        self.position = self.destination(distance);
        self.record_fill_vertex();
    }

    fn turn_left(&mut self, angle: f32) {
        self.heading = normalize_heading(self.heading + angle);
    }

    fn turn_right(&mut self, angle: f32) {
        self.heading = normalize_heading(self.heading - angle);
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn heading(&self) -> f32 {
        self.heading
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.record_fill_vertex();
    }

    fn set_heading(&mut self, heading: f32) {
        self.heading = normalize_heading(heading);
    }

    fn begin_fill(&mut self) {
        // A second begin while a region is open restarts the region.
        self.active_fill = Some(vec![self.position]);
    }

    fn end_fill(&mut self) {
        if let Some(vertices) = self.active_fill.take() {
            if vertices.len() >= MIN_FILL_VERTICES {
                self.sketch.add_fill(FillRegion { vertices });
            }
        }
    }
}

//! # lsys-sketch
//!
//! A sovereign interpretation crate that traces fully-expanded L-System
//! command strings into engine-agnostic 2D sketches.
//!
//! It decouples the *Genotype* (the expanded command string) from the
//! *Phenotype* (the rendered picture), producing a [`Sketch`] of line
//! segments and fill polygons that can be ingested by renderers, pen
//! plotters, or game engines. All drawing goes through the
//! [`DrawingSurface`] capability, so interpretation is headless,
//! deterministic, and free of process-wide state.

pub mod errors;
pub mod interpreter;
mod log;
pub mod sketch;
pub mod surface;
pub mod turtle;

pub use errors::*;
pub use interpreter::*;
pub use sketch::*;
pub use surface::*;
pub use turtle::*;

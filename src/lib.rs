//! # chaos-trails
//!
//! Interactively navigable viewer for Lorenz-type strange attractors.
//!
//! A single particle is advanced through the Lorenz equations with forward
//! Euler, leaving a bounded trail of line segments behind it. Each segment
//! is colored by its length (a speed readout through a configurable hue
//! sweep) and projected through a free-look perspective camera onto the
//! window.
//!
//! ## Quick Start
//!
//! ```ignore
//! use chaos_trails::prelude::*;
//!
//! fn main() -> Result<(), ViewerError> {
//!     Viewer::new()
//!         .with_coefficients(Coefficients { rho: 32.0, ..Default::default() })
//!         .with_trail_capacity(50_000)
//!         .run()
//! }
//! ```
//!
//! ## Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | W / S | move forward / back |
//! | A / D | strafe left / right |
//! | left drag | look (yaw/pitch) |
//! | scroll | zoom (field of view) |
//! | R | reset camera |
//! | C | clear trail |
//! | O / L | sigma up / down |
//! | I / K | rho up / down |
//! | U / J | beta up / down |
//!
//! Changing a coefficient clears the trail, restarts the particle, re-runs
//! the focal-point calibration, and resets the camera, all before the next
//! frame renders.
//!
//! ## Structure
//!
//! The numeric core ([`attractor`], [`trail`], [`color`], [`camera`],
//! [`sim`]) is plain CPU code with no GPU types in it; the [`gpu`] module
//! only knows how to draw a batch of colored 2D lines. [`Viewer`] wires the
//! two together under a winit event loop.

pub mod attractor;
pub mod camera;
pub mod color;
pub mod error;
pub mod gpu;
pub mod input;
pub mod sim;
pub mod time;
pub mod trail;
mod viewer;

pub use attractor::Coefficients;
pub use camera::{Camera, Viewport};
pub use color::{HueSweep, Rgba};
pub use error::{GpuError, ViewerError};
pub use glam::{DVec2, DVec3};
pub use sim::{CoefficientChange, Simulation};
pub use trail::{Segment, TrailBuffer};
pub use viewer::Viewer;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::attractor::Coefficients;
    pub use crate::camera::{Camera, Viewport};
    pub use crate::color::{HueSweep, Rgba};
    pub use crate::error::ViewerError;
    pub use crate::sim::Simulation;
    pub use crate::trail::{Segment, TrailBuffer};
    pub use crate::viewer::Viewer;
    pub use crate::{DVec2, DVec3};
}

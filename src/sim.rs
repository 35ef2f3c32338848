//! Simulation context: particle, coefficients, trail, and focal point.
//!
//! One instance is owned by the frame loop and mutated in place; nothing in
//! here is shared or locked. Coefficient changes go through
//! [`Simulation::reconfigure`] so the trail clear, particle reset, and focal
//! recalibration always happen together before the next frame renders.

use glam::DVec3;

use crate::attractor::{self, Coefficients};
use crate::trail::TrailBuffer;

/// Starting position of the simulated particle.
const INITIAL_POSITION: DVec3 = DVec3::new(1.0, 1.0, 1.0);

/// The numeric state advanced every frame.
#[derive(Debug)]
pub struct Simulation {
    coefficients: Coefficients,
    particle: DVec3,
    trail: TrailBuffer,
    focal: DVec3,
}

impl Simulation {
    /// Build the context and run the focal-point warm-up.
    pub fn new(coefficients: Coefficients, trail_capacity: usize) -> Self {
        let mut particle = INITIAL_POSITION;
        let focal = attractor::calibrate_focal(&mut particle, &coefficients);
        Self {
            coefficients,
            particle,
            trail: TrailBuffer::new(trail_capacity),
            focal,
        }
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn particle(&self) -> DVec3 {
        self.particle
    }

    pub fn focal(&self) -> DVec3 {
        self.focal
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// One integration step; records the traversed segment in the trail.
    pub fn advance(&mut self, dt: f64) {
        let prev = self.particle;
        attractor::step(&mut self.particle, &self.coefficients, dt);
        self.trail.push(prev, self.particle);
    }

    /// Drop the trail without touching particle or coefficients.
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Swap in new coefficients: clears the trail (old segment colors were
    /// normalized for the old system), restarts the particle, and re-runs
    /// the focal warm-up. Returns the new focal point so the caller can
    /// reset the camera against it. Completes before the next render step
    /// reads any state.
    pub fn reconfigure(&mut self, coefficients: Coefficients) -> DVec3 {
        self.coefficients = coefficients;
        self.particle = INITIAL_POSITION;
        self.trail.clear();
        self.focal = attractor::calibrate_focal(&mut self.particle, &self.coefficients);
        self.focal
    }

    /// Apply a clamped nudge to one coefficient and reconfigure.
    ///
    /// Prints the new value, matching the viewer's interactive feedback.
    pub fn nudge(&mut self, change: CoefficientChange) -> DVec3 {
        let mut c = self.coefficients;
        match change {
            CoefficientChange::SigmaUp => c.nudge_sigma(0.5),
            CoefficientChange::SigmaDown => c.nudge_sigma(-0.5),
            CoefficientChange::RhoUp => c.nudge_rho(1.0),
            CoefficientChange::RhoDown => c.nudge_rho(-1.0),
            CoefficientChange::BetaUp => c.nudge_beta(0.1),
            CoefficientChange::BetaDown => c.nudge_beta(-0.1),
        }
        match change {
            CoefficientChange::SigmaUp | CoefficientChange::SigmaDown => {
                println!("Sigma: {}", c.sigma)
            }
            CoefficientChange::RhoUp | CoefficientChange::RhoDown => {
                println!("Rho: {}", c.rho)
            }
            CoefficientChange::BetaUp | CoefficientChange::BetaDown => {
                println!("Beta: {}", c.beta)
            }
        }
        self.reconfigure(c)
    }
}

/// The six interactive coefficient adjustments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientChange {
    SigmaUp,
    SigmaDown,
    RhoUp,
    RhoDown,
    BetaUp,
    BetaDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_records_segment() {
        let mut sim = Simulation::new(Coefficients::default(), 16);
        let before = sim.particle();
        sim.advance(0.003);
        let after = sim.particle();

        assert_eq!(sim.trail().len(), 1);
        let seg = sim.trail().iter().next().unwrap();
        assert_eq!(seg.p1, before);
        assert_eq!(seg.p2, after);
        assert_eq!(seg.length, before.distance(after));
    }

    #[test]
    fn test_calibration_leaves_trail_empty() {
        let sim = Simulation::new(Coefficients::default(), 16);
        assert!(sim.trail().is_empty());
    }

    #[test]
    fn test_reconfigure_is_atomic() {
        let mut sim = Simulation::new(Coefficients::default(), 16);
        for _ in 0..10 {
            sim.advance(0.003);
        }
        assert_eq!(sim.trail().len(), 10);
        let old_focal = sim.focal();

        let new = Coefficients {
            rho: 40.0,
            ..Coefficients::default()
        };
        let focal = sim.reconfigure(new);

        assert!(sim.trail().is_empty());
        assert_eq!(sim.coefficients(), new);
        assert_eq!(focal, sim.focal());
        // Different rho moves the z average of the trajectory
        assert_ne!(old_focal, focal);
    }

    #[test]
    fn test_reconfigure_determinism() {
        let c = Coefficients::default();
        let mut a = Simulation::new(c, 8);
        let mut b = Simulation::new(c, 8);
        a.reconfigure(c);
        b.reconfigure(c);
        assert_eq!(a.particle(), b.particle());
        assert_eq!(a.focal(), b.focal());
    }

    #[test]
    fn test_nudge_clamps_and_reconfigures() {
        let mut sim = Simulation::new(
            Coefficients {
                sigma: 90.0,
                ..Coefficients::default()
            },
            8,
        );
        sim.advance(0.003);
        sim.nudge(CoefficientChange::SigmaUp);

        // Clamped at the upper bound, but the reconfigure still ran
        assert_eq!(sim.coefficients().sigma, 90.0);
        assert!(sim.trail().is_empty());
    }
}

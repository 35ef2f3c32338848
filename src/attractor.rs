//! Lorenz system integration.
//!
//! The attractor is defined by three coupled differential equations:
//!   dx/dt = σ(y - x)
//!   dy/dt = x(ρ - z) - y
//!   dz/dt = xy - βz
//!
//! With classic parameters σ=10, ρ=28, β=8/3 the system exhibits
//! deterministic chaos - nearby trajectories diverge exponentially
//! while remaining bounded within the attractor's shape. The particle is
//! advanced with explicit forward Euler at a fixed step, which is plenty
//! for a visual trail even though it is not a high-order scheme.

use glam::DVec3;

/// Warm-up step size used when calibrating the focal point.
const CALIBRATION_DT: f64 = 0.005;
/// Warm-up step count. Long enough to average out the initial transient.
const CALIBRATION_STEPS: u32 = 30_000;

/// The three scalar coefficients of the Lorenz equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub sigma: f64,
    pub rho: f64,
    pub beta: f64,
}

impl Default for Coefficients {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        }
    }
}

impl Coefficients {
    /// Nudge sigma by `delta`, keeping it inside [0.5, 90].
    pub fn nudge_sigma(&mut self, delta: f64) {
        self.sigma = (self.sigma + delta).clamp(0.5, 90.0);
    }

    /// Nudge rho by `delta`, keeping it inside [1, 60].
    pub fn nudge_rho(&mut self, delta: f64) {
        self.rho = (self.rho + delta).clamp(1.0, 60.0);
    }

    /// Nudge beta by `delta`. Beta is unbounded.
    pub fn nudge_beta(&mut self, delta: f64) {
        self.beta += delta;
    }
}

/// Advance `pos` by one forward-Euler step of size `dt`.
///
/// Total and deterministic: identical inputs produce bit-identical output.
pub fn step(pos: &mut DVec3, c: &Coefficients, dt: f64) {
    let dx = c.sigma * (pos.y - pos.x);
    let dy = pos.x * (c.rho - pos.z) - pos.y;
    let dz = pos.x * pos.y - c.beta * pos.z;
    pos.x += dx * dt;
    pos.y += dy * dt;
    pos.z += dz * dt;
}

/// Run the warm-up integration and return the time-averaged position.
///
/// The average is used as the camera focal point so the visible trail stays
/// centered regardless of where the initial transient wandered. The particle
/// is advanced in place, so after calibration it is already sitting on the
/// attractor. No trail segments are recorded here.
pub fn calibrate_focal(pos: &mut DVec3, c: &Coefficients) -> DVec3 {
    let mut sum = DVec3::ZERO;
    for _ in 0..CALIBRATION_STEPS {
        step(pos, c, CALIBRATION_DT);
        sum += *pos;
    }
    sum / CALIBRATION_STEPS as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_is_deterministic() {
        let c = Coefficients::default();
        let start = DVec3::new(1.0, 1.0, 1.0);

        let mut a = start;
        let mut b = start;
        for _ in 0..1000 {
            step(&mut a, &c, 0.003);
            step(&mut b, &c, 0.003);
        }

        // Bit-identical, not approximately equal
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
    }

    #[test]
    fn test_single_step_matches_equations() {
        let c = Coefficients {
            sigma: 10.0,
            rho: 28.0,
            beta: 8.0 / 3.0,
        };
        let mut p = DVec3::new(1.0, 1.0, 1.0);
        step(&mut p, &c, 0.1);

        // dx = 10*(1-1) = 0, dy = 1*(28-1) - 1 = 26, dz = 1*1 - 8/3 = -5/3
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 1.0 + 26.0 * 0.1);
        assert_eq!(p.z, 1.0 + (1.0 - 8.0 / 3.0) * 0.1);
    }

    #[test]
    fn test_trajectory_stays_bounded() {
        let c = Coefficients::default();
        let mut p = DVec3::new(1.0, 1.0, 1.0);
        for _ in 0..50_000 {
            step(&mut p, &c, 0.003);
        }
        // The classic attractor lives well inside this box
        assert!(p.length() < 200.0, "trajectory escaped: {p:?}");
    }

    #[test]
    fn test_calibration_averages_trajectory() {
        let c = Coefficients::default();
        let mut p = DVec3::new(1.0, 1.0, 1.0);
        let focal = calibrate_focal(&mut p, &c);

        // For rho=28 the wings are symmetric about x=y=0 and the z average
        // sits near rho-1. Loose bounds; the exact value is chaotic.
        assert!(focal.x.abs() < 10.0);
        assert!(focal.y.abs() < 10.0);
        assert!((focal.z - (c.rho - 1.0)).abs() < 10.0);

        // Particle was advanced in place
        assert_ne!(p, DVec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_nudge_bounds() {
        let mut c = Coefficients::default();

        for _ in 0..1000 {
            c.nudge_sigma(0.5);
        }
        assert_eq!(c.sigma, 90.0);
        for _ in 0..1000 {
            c.nudge_sigma(-0.5);
        }
        assert_eq!(c.sigma, 0.5);

        for _ in 0..1000 {
            c.nudge_rho(1.0);
        }
        assert_eq!(c.rho, 60.0);
        for _ in 0..1000 {
            c.nudge_rho(-1.0);
        }
        assert_eq!(c.rho, 1.0);
    }
}

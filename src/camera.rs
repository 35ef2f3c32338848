//! Free-look camera and perspective projection to screen pixels.
//!
//! The projection is deliberately hand-rolled rather than matrix-based: each
//! segment endpoint is translated by the focal point and camera position,
//! rotated by yaw then pitch, and perspective-divided against a depth offset
//! of half the viewport height. There is no near-plane clip; a point whose
//! offset depth lands near zero projects to an extreme coordinate and the
//! rasterizer clips it.

use glam::{DVec2, DVec3};

/// Degrees of field of view applied after a reset.
pub const DEFAULT_FOV: f64 = 60.0;
/// Field-of-view bounds for zoom.
const FOV_MIN: f64 = 10.0;
const FOV_MAX: f64 = 110.0;
/// Fov degrees per scroll line.
const FOV_STEP: f64 = 1.0;
/// Radians of yaw/pitch per pixel of drag.
const ROTATION_SPEED: f64 = 0.01;
/// World units per forward/back move.
const FORWARD_SPEED: f64 = 10.0;
/// World units per strafe move.
const STRAFE_SPEED: f64 = 5.0;

/// Viewport pixel dimensions and the derived projection scales.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Half-width: horizontal projection scale and screen center x.
    pub fn scale_x(&self) -> f64 {
        self.width as f64 / 2.0
    }

    /// Half-height: vertical projection scale and screen center y.
    pub fn scale_y(&self) -> f64 {
        self.height as f64 / 2.0
    }

    /// Half-height again, reused as the camera-to-viewport depth offset.
    pub fn scale_z(&self) -> f64 {
        self.height as f64 / 2.0
    }
}

/// Camera state: position, orientation, field of view, and the fixed focal
/// point the trail is centered on.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Camera position in world space.
    pub position: DVec3,
    /// Horizontal rotation angle in radians.
    pub yaw: f64,
    /// Vertical rotation angle in radians.
    pub pitch: f64,
    /// Field of view in degrees.
    pub fov: f64,
    /// Time-averaged trajectory position, subtracted before the camera
    /// offset so the attractor sits at the view center.
    pub focal: DVec3,
}

impl Camera {
    /// Camera looking at `focal` from the reset pose.
    pub fn new(focal: DVec3) -> Self {
        let mut camera = Self {
            position: DVec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov: DEFAULT_FOV,
            focal,
        };
        camera.reset(focal);
        camera
    }

    /// Return to the default pose for the given focal point: position at the
    /// focal x/y with z = 0, level orientation, default fov.
    pub fn reset(&mut self, focal: DVec3) {
        self.focal = focal;
        self.position = DVec3::new(focal.x, focal.y, 0.0);
        self.yaw = 0.0;
        self.pitch = 0.0;
        self.fov = DEFAULT_FOV;
    }

    /// Project a world-space point to screen pixels.
    pub fn project_point(&self, p: DVec3, viewport: &Viewport) -> DVec2 {
        let focal_length = 1.0 / ((self.fov / 2.0).to_radians().tan());

        let t = p - self.focal - self.position;

        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let rx = t.x * cos_yaw - t.z * sin_yaw;
        let rz = t.x * sin_yaw + t.z * cos_yaw;

        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let ry = t.y * cos_pitch - rz * sin_pitch;
        let rz = t.y * sin_pitch + rz * cos_pitch;

        let depth = rz + viewport.scale_z();
        DVec2::new(
            (rx / depth) * focal_length * viewport.scale_x() + viewport.scale_x(),
            (ry / depth) * focal_length * viewport.scale_y() + viewport.scale_y(),
        )
    }

    /// Project both segment endpoints independently, yielding a 2D screen
    /// line.
    pub fn project_segment(&self, p1: DVec3, p2: DVec3, viewport: &Viewport) -> (DVec2, DVec2) {
        (
            self.project_point(p1, viewport),
            self.project_point(p2, viewport),
        )
    }

    /// Move along the view direction; `steps` is +1 forward, -1 back
    /// (fractional values scale the move).
    pub fn move_forward(&mut self, steps: f64) {
        let dir = DVec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        );
        self.position += dir * (FORWARD_SPEED * steps);
    }

    /// Strafe sideways; `steps` is +1 right, -1 left.
    pub fn strafe(&mut self, steps: f64) {
        let dir = DVec3::new(self.yaw.cos(), 0.0, -self.yaw.sin());
        self.position += dir * (STRAFE_SPEED * steps);
    }

    /// Apply a left-drag look delta in pixels.
    pub fn look(&mut self, dx: f64, dy: f64) {
        self.yaw += ROTATION_SPEED * dx;
        self.pitch += ROTATION_SPEED * dy;
    }

    /// Apply a scroll delta in lines. Scrolling up narrows the field of
    /// view, clamped to [10, 110] degrees.
    pub fn zoom(&mut self, lines: f64) {
        self.fov = (self.fov - FOV_STEP * lines).clamp(FOV_MIN, FOV_MAX);
    }
}

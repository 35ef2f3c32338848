//! Viewer builder and window driver.
//!
//! One winit event loop owns everything: input is drained at the top of each
//! frame, then the particle advances one fixed step, then every live trail
//! segment is colored, projected, and drawn. Frame pacing comes from the
//! vsync'd present.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::KeyCode,
    window::{Window, WindowId},
};

use crate::attractor::Coefficients;
use crate::camera::Camera;
use crate::color::HueSweep;
use crate::error::ViewerError;
use crate::gpu::{GpuState, LineVertex};
use crate::input::Input;
use crate::sim::{CoefficientChange, Simulation};
use crate::time::Time;

/// Integration step per rendered frame.
const FRAME_DT: f64 = 0.003;
/// Segments kept in the trail by default.
const DEFAULT_TRAIL_CAPACITY: usize = 50_000;

const WINDOW_TITLE: &str = "Trails";

/// An attractor-trail viewer, configured by chaining and started with
/// [`run`](Viewer::run).
///
/// ```ignore
/// use chaos_trails::prelude::*;
///
/// Viewer::new()
///     .with_coefficients(Coefficients { rho: 32.0, ..Default::default() })
///     .with_sweep(HueSweep::PURPLE)
///     .run()
/// ```
pub struct Viewer {
    width: u32,
    height: u32,
    trail_capacity: usize,
    step: f64,
    coefficients: Coefficients,
    sweep: HueSweep,
}

impl Viewer {
    pub fn new() -> Self {
        Self {
            width: 1280,
            height: 720,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            step: FRAME_DT,
            coefficients: Coefficients::default(),
            sweep: HueSweep::FULL,
        }
    }

    /// Initial window size in logical pixels.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Maximum number of trail segments kept alive.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero; a trail must hold at least one segment.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity >= 1, "trail capacity must be at least 1");
        self.trail_capacity = capacity;
        self
    }

    /// Integration step per frame.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Starting Lorenz coefficients.
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Length-to-hue mapping preset.
    pub fn with_sweep(mut self, sweep: HueSweep) -> Self {
        self.sweep = sweep;
        self
    }

    /// Open the window and block until it closes.
    ///
    /// Runs the focal-point calibration before the first frame.
    pub fn run(self) -> Result<(), ViewerError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(&self);
        event_loop.run_app(&mut app)?;

        match app.startup_error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    width: u32,
    height: u32,
    sim: Simulation,
    camera: Camera,
    sweep: HueSweep,
    step: f64,
    input: Input,
    time: Time,
    /// Scratch vertex list, reused across frames.
    vertices: Vec<LineVertex>,
    startup_error: Option<ViewerError>,
}

impl App {
    fn new(viewer: &Viewer) -> Self {
        // Warm-up integration happens here, before any window exists
        let sim = Simulation::new(viewer.coefficients, viewer.trail_capacity);
        let camera = Camera::new(sim.focal());

        Self {
            window: None,
            gpu: None,
            width: viewer.width,
            height: viewer.height,
            sim,
            camera,
            sweep: viewer.sweep,
            step: viewer.step,
            input: Input::new(),
            time: Time::new(),
            vertices: Vec::with_capacity(viewer.trail_capacity * 2),
            startup_error: None,
        }
    }

    /// Apply everything the user did since the last frame.
    fn drain_input(&mut self, event_loop: &ActiveEventLoop) {
        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
        }
        if self.input.key_pressed(KeyCode::KeyR) {
            self.camera.reset(self.sim.focal());
        }
        if self.input.key_pressed(KeyCode::KeyC) {
            self.sim.clear_trail();
        }

        let nudges = [
            (KeyCode::KeyO, CoefficientChange::SigmaUp),
            (KeyCode::KeyL, CoefficientChange::SigmaDown),
            (KeyCode::KeyI, CoefficientChange::RhoUp),
            (KeyCode::KeyK, CoefficientChange::RhoDown),
            (KeyCode::KeyU, CoefficientChange::BetaUp),
            (KeyCode::KeyJ, CoefficientChange::BetaDown),
        ];
        for (key, change) in nudges {
            if self.input.key_pressed(key) {
                let focal = self.sim.nudge(change);
                self.camera.reset(focal);
            }
        }

        if self.input.key_held(KeyCode::KeyW) {
            self.camera.move_forward(1.0);
        }
        if self.input.key_held(KeyCode::KeyS) {
            self.camera.move_forward(-1.0);
        }
        if self.input.key_held(KeyCode::KeyA) {
            self.camera.strafe(-1.0);
        }
        if self.input.key_held(KeyCode::KeyD) {
            self.camera.strafe(1.0);
        }

        let drag = self.input.drag_delta();
        if drag != glam::Vec2::ZERO {
            self.camera.look(drag.x as f64, drag.y as f64);
        }

        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            self.camera.zoom(scroll as f64);
        }

        self.input.begin_frame();
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.drain_input(event_loop);

        if self.time.update() {
            if let Some(window) = &self.window {
                window.set_title(&format!("{} - {:.0} FPS", WINDOW_TITLE, self.time.fps()));
            }
        }

        self.sim.advance(self.step);

        let Some(gpu) = &mut self.gpu else {
            return;
        };

        let viewport = gpu.viewport();
        self.vertices.clear();
        for segment in self.sim.trail().iter() {
            let color = self.sweep.color(segment.length);
            let rgba = [
                color.r as f32 / 255.0,
                color.g as f32 / 255.0,
                color.b as f32 / 255.0,
                color.a as f32 / 255.0,
            ];
            let (a, b) = self.camera.project_segment(segment.p1, segment.p2, &viewport);
            self.vertices.push(LineVertex {
                position: [a.x as f32, a.y as f32],
                color: rgba,
            });
            self.vertices.push(LineVertex {
                position: [b.x as f32, b.y as f32],
                color: rgba,
            });
        }

        match gpu.render(&self.vertices) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(winit::dpi::LogicalSize::new(self.width, self.height));

            let window = match event_loop.create_window(window_attrs) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    self.startup_error = Some(e.into());
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let capacity = self.sim.trail().capacity();
            match pollster::block_on(GpuState::new(window, capacity)) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    self.startup_error = Some(e.into());
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }
}

use std::time::Duration;

use glam::Vec2;

use crate::renderer::framebuffer::Color;

/// Scene and display constants. Built once at startup and passed by
/// reference into the loop and renderers; nothing is reconfigured at
/// runtime.
#[derive(Debug, Clone, Copy)]
pub struct VisConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Target frame rate the redraw throttle paces to.
    pub fps: u32,
    /// Radius of the solid black shadow disk, in pixels.
    pub black_hole_radius: i32,
    /// Radius of the grey horizon ring, also the lensing distance threshold.
    pub event_horizon_radius: f32,
    /// How far past the horizon ring the lensing influence reaches.
    pub light_bend_strength: f32,
    pub max_particles: usize,
    pub particle_size: i32,
    pub stars_count: usize,
    /// Fixed orbit radius shared by every accretion-disk particle.
    pub orbit_radius: f32,
    /// Two-color palette particles draw from at construction.
    pub palette: [Color; 2],
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            screen_width: 1000,
            screen_height: 800,
            fps: 60,
            black_hole_radius: 50,
            event_horizon_radius: 120.0,
            light_bend_strength: 30.0,
            max_particles: 1000,
            particle_size: 3,
            stars_count: 300,
            orbit_radius: 150.0,
            palette: [Color::RED, Color::YELLOW],
        }
    }
}

impl VisConfig {
    /// Fixed center point, computed once and immutable for the program's
    /// lifetime.
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.screen_width as f32 / 2.0,
            self.screen_height as f32 / 2.0,
        )
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }
}

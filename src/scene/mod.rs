pub mod disk;
pub mod effects;
pub mod lensing;
pub mod starfield;

use glam::Vec2;
use rand::Rng;

use crate::config::VisConfig;
use crate::renderer::framebuffer::{Canvas, Color};
use disk::AccretionDisk;
use starfield::Starfield;

/// All animated state: the starfield, the accretion disk, the fixed center
/// point and the frame counter driving the glow.
pub struct Scene {
    config: VisConfig,
    center: Vec2,
    starfield: Starfield,
    disk: AccretionDisk,
    pub frame: u64,
}

impl Scene {
    pub fn new<R: Rng>(config: VisConfig, rng: &mut R) -> Self {
        let center = config.center();
        let starfield = Starfield::new(
            rng,
            config.stars_count,
            config.screen_width as f32,
            config.screen_height as f32,
        );
        let disk = AccretionDisk::new(
            rng,
            config.max_particles,
            center,
            &config.palette,
            config.particle_size,
            config.orbit_radius,
        );
        Self {
            config,
            center,
            starfield,
            disk,
            frame: 0,
        }
    }

    /// One frame: clear, move the stars, bend the ones near the horizon,
    /// then paint back to front. The frame counter ticks at the end.
    pub fn advance(&mut self, canvas: &mut Canvas) {
        canvas.clear(Color::BLACK);

        self.starfield.update();
        lensing::apply(
            &mut self.starfield.stars,
            self.center,
            self.config.event_horizon_radius,
            self.config.light_bend_strength,
        );
        self.starfield.draw(canvas);

        effects::draw_black_hole(
            canvas,
            self.center,
            self.config.black_hole_radius,
            self.config.event_horizon_radius as i32,
        );
        self.disk.update_and_draw(canvas, self.center);
        effects::draw_pulsar(canvas, self.center, self.config.black_hole_radius, self.frame);

        self.frame += 1;
    }
}

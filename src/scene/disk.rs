use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use crate::renderer::framebuffer::{Canvas, Color};

/// One accretion-disk particle on an exact circular orbit around the center.
pub struct Particle {
    pub pos: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub color: Color,
    pub size: i32,
}

impl Particle {
    pub fn new(center: Vec2, angle: f32, speed: f32, color: Color, size: i32) -> Self {
        Self {
            pos: center,
            angle,
            speed,
            color,
            size,
        }
    }

    pub fn spawn<R: Rng>(rng: &mut R, center: Vec2, palette: &[Color; 2], size: i32) -> Self {
        Self::new(
            center,
            rng.random_range(0.0..TAU),
            rng.random_range(0.02..0.05),
            palette[rng.random_range(0..palette.len())],
            size,
        )
    }

    /// Advance the orbit by one step and recompute the position from the
    /// center. The angle grows without bound; only its sine/cosine matter.
    pub fn update(&mut self, center: Vec2, orbit_radius: f32) {
        self.angle += self.speed;
        self.pos = center + orbit_radius * Vec2::from_angle(self.angle);
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_circle(self.pos.x as i32, self.pos.y as i32, self.size, self.color);
    }
}

/// The rotating ring of particles around the hole. Particles are created
/// once with randomized phase and rate and never destroyed.
pub struct AccretionDisk {
    pub particles: Vec<Particle>,
    orbit_radius: f32,
}

impl AccretionDisk {
    pub fn new<R: Rng>(
        rng: &mut R,
        count: usize,
        center: Vec2,
        palette: &[Color; 2],
        particle_size: i32,
        orbit_radius: f32,
    ) -> Self {
        Self {
            particles: (0..count)
                .map(|_| Particle::spawn(rng, center, palette, particle_size))
                .collect(),
            orbit_radius,
        }
    }

    /// Each particle steps its orbit and is drawn immediately, in collection
    /// order.
    pub fn update_and_draw(&mut self, canvas: &mut Canvas, center: Vec2) {
        for particle in &mut self.particles {
            particle.update(center, self.orbit_radius);
            particle.draw(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{AccretionDisk, Particle};
    use crate::renderer::framebuffer::{Canvas, Color};

    const PALETTE: [Color; 2] = [Color::RED, Color::YELLOW];

    #[test]
    fn single_step_from_zero_angle() {
        let center = Vec2::new(500.0, 400.0);
        let mut particle = Particle::new(center, 0.0, 0.05, Color::RED, 3);
        particle.update(center, 150.0);

        assert!((particle.angle - 0.05).abs() < 1e-6);
        let expected = center + 150.0 * Vec2::new(0.05f32.cos(), 0.05f32.sin());
        assert!((particle.pos - expected).length() < 1e-4);
    }

    #[test]
    fn position_always_sits_on_the_orbit() {
        let center = Vec2::new(500.0, 400.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut disk = AccretionDisk::new(&mut rng, 50, center, &PALETTE, 3, 150.0);
        let mut canvas = Canvas::new(1000, 800);
        for _ in 0..500 {
            disk.update_and_draw(&mut canvas, center);
        }
        for particle in &disk.particles {
            let expected = center + 150.0 * Vec2::from_angle(particle.angle);
            assert!((particle.pos - expected).length() < 1e-3);
            assert!(((particle.pos - center).length() - 150.0).abs() < 1e-2);
        }
    }

    #[test]
    fn spawn_draws_from_the_palette() {
        let mut rng = StdRng::seed_from_u64(9);
        let center = Vec2::new(500.0, 400.0);
        for _ in 0..100 {
            let particle = Particle::spawn(&mut rng, center, &PALETTE, 3);
            assert!(PALETTE.contains(&particle.color));
            assert!(particle.angle >= 0.0 && particle.angle < std::f32::consts::TAU);
            assert!((0.02..0.05).contains(&particle.speed));
        }
    }
}

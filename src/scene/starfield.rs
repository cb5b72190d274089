use glam::Vec2;
use rand::Rng;

use crate::renderer::framebuffer::{Canvas, Color};

/// A single background star drifting diagonally across the screen.
pub struct Star {
    pub pos: Vec2,
    pub size: i32,
    pub speed: f32,
}

impl Star {
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height)),
            size: rng.random_range(1..=3),
            speed: rng.random_range(0.1..0.5),
        }
    }

    /// Advance both axes by `speed`, wrapping a coordinate back to 0 once it
    /// reaches the screen extent. Position stays inside `[0, w) x [0, h)`.
    pub fn update(&mut self, width: f32, height: f32) {
        self.pos.x += self.speed;
        if self.pos.x >= width {
            self.pos.x = 0.0;
        }
        self.pos.y += self.speed;
        if self.pos.y >= height {
            self.pos.y = 0.0;
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.fill_circle(self.pos.x as i32, self.pos.y as i32, self.size, Color::WHITE);
    }
}

/// Fixed-count collection of stars, created once and mutated every frame.
pub struct Starfield {
    pub stars: Vec<Star>,
    width: f32,
    height: f32,
}

impl Starfield {
    pub fn new<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        Self {
            stars: (0..count).map(|_| Star::spawn(rng, width, height)).collect(),
            width,
            height,
        }
    }

    pub fn update(&mut self) {
        for star in &mut self.stars {
            star.update(self.width, self.height);
        }
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        for star in &self.stars {
            star.draw(canvas);
        }
    }
}

//! Stateless draw passes for the hole itself and the central glow.

use glam::Vec2;

use crate::renderer::framebuffer::{Canvas, Color};

/// Stroke width of the grey horizon ring.
const HORIZON_STROKE: i32 = 5;

/// How far past the shadow radius the glow swells at full intensity.
const PULSE_RANGE: f32 = 30.0;

/// Solid shadow disk plus the grey event-horizon ring around it.
pub fn draw_black_hole(canvas: &mut Canvas, center: Vec2, shadow_radius: i32, horizon_radius: i32) {
    let cx = center.x as i32;
    let cy = center.y as i32;
    canvas.fill_circle(cx, cy, shadow_radius, Color::BLACK);
    canvas.stroke_circle(cx, cy, horizon_radius, HORIZON_STROKE, Color::GREY);
}

/// Glow intensity in [0, 1], sinusoidal with a period of 20*pi frames.
pub fn pulse_intensity(frame: u64) -> f32 {
    ((frame as f32 / 10.0).sin() + 1.0) * 0.5
}

/// Oscillating glow at the center: red at minimum intensity, yellow at
/// maximum, radius swelling with the same phase.
pub fn draw_pulsar(canvas: &mut Canvas, center: Vec2, shadow_radius: i32, frame: u64) {
    let intensity = pulse_intensity(frame);
    let radius = shadow_radius + (intensity * PULSE_RANGE) as i32;
    let color = Color::new(255, (intensity * 255.0) as u8, 0);
    canvas.fill_circle(center.x as i32, center.y as i32, radius, color);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::{draw_black_hole, draw_pulsar, pulse_intensity};
    use crate::renderer::framebuffer::{Canvas, Color};

    #[test]
    fn intensity_stays_in_unit_range() {
        for frame in 0..1000 {
            let i = pulse_intensity(frame);
            assert!((0.0..=1.0).contains(&i), "frame {frame}: {i}");
        }
    }

    #[test]
    fn pulse_repeats_every_twenty_pi_frames() {
        // Period is 20*pi ~ 62.83 frames; rounding to 63 keeps both the
        // radius offset and the green channel within a small tolerance.
        for frame in [0u64, 17, 100, 400] {
            let a = pulse_intensity(frame);
            let b = pulse_intensity(frame + 63);
            assert!((a - b).abs() < 0.02);

            let green_a = (a * 255.0) as i32;
            let green_b = (b * 255.0) as i32;
            assert!((green_a - green_b).abs() <= 3);

            let radius_a = 50 + (a * 30.0) as i32;
            let radius_b = 50 + (b * 30.0) as i32;
            assert!((radius_a - radius_b).abs() <= 1);
        }
    }

    #[test]
    fn frame_zero_glow_is_half_intensity() {
        let mut canvas = Canvas::new(200, 200);
        draw_pulsar(&mut canvas, Vec2::new(100.0, 100.0), 50, 0);
        // sin(0) gives intensity 0.5: radius 65, color (255, 127, 0).
        assert_eq!(canvas.pixel(100, 100), Color::new(255, 127, 0));
        assert_eq!(canvas.pixel(100 + 64, 100), Color::new(255, 127, 0));
        assert_eq!(canvas.pixel(100 + 66, 100), Color::BLACK);
    }

    #[test]
    fn black_hole_ring_sits_at_the_horizon_radius() {
        let mut canvas = Canvas::new(300, 300);
        canvas.clear(Color::WHITE);
        draw_black_hole(&mut canvas, Vec2::new(150.0, 150.0), 50, 120);
        assert_eq!(canvas.pixel(150, 150), Color::BLACK);
        assert_eq!(canvas.pixel(150 + 118, 150), Color::GREY);
        assert_eq!(canvas.pixel(150 + 110, 150), Color::WHITE);
    }
}

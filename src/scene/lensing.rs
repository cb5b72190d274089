//! Radial distortion applied to stars near the event horizon.

use glam::Vec2;

use super::starfield::Star;

/// Pull every star inside the influence radius toward `center`.
///
/// For a star at distance `d < horizon_radius + bend_strength` the offset
/// from the center is scaled by
/// `(horizon_radius + bend_strength - d) / bend_strength`.
///
/// The overwrite is permanent: a star that lingers inside the influence
/// radius keeps losing distance frame after frame, and within the horizon
/// itself the factor exceeds 1, so stars there get flung outward past their
/// prior offset. Both artifacts are part of the look.
pub fn apply(stars: &mut [Star], center: Vec2, horizon_radius: f32, bend_strength: f32) {
    let influence = horizon_radius + bend_strength;
    for star in stars {
        let offset = star.pos - center;
        let distance = offset.length();
        if distance < influence {
            let factor = (influence - distance) / bend_strength;
            star.pos = center + offset * factor;
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::apply;
    use crate::scene::starfield::Star;

    const CENTER: Vec2 = Vec2::new(500.0, 400.0);
    const HORIZON: f32 = 120.0;
    const BEND: f32 = 30.0;

    fn star_at(pos: Vec2) -> Star {
        Star {
            pos,
            size: 1,
            speed: 0.2,
        }
    }

    #[test]
    fn beyond_influence_radius_is_a_no_op() {
        let pos = CENTER + Vec2::new(150.0, 0.0);
        let mut stars = [star_at(pos)];
        apply(&mut stars, CENTER, HORIZON, BEND);
        assert_eq!(stars[0].pos, pos);
    }

    #[test]
    fn inside_the_bend_band_distance_strictly_decreases() {
        // Factor stays below 1 between the horizon and the influence edge.
        for d in [121.0, 130.0, 149.0] {
            let mut stars = [star_at(CENTER + Vec2::new(d, 0.0))];
            apply(&mut stars, CENTER, HORIZON, BEND);
            let after = (stars[0].pos - CENTER).length();
            assert!(after < d, "distance {d} grew to {after}");
        }
    }

    #[test]
    fn boundary_distance_shrinks_to_near_zero() {
        // d just inside the influence edge: factor is (150 - d) / 30.
        let mut stars = [star_at(CENTER + Vec2::new(149.0, 0.0))];
        apply(&mut stars, CENTER, HORIZON, BEND);
        let after = (stars[0].pos - CENTER).length();
        assert!((after - 149.0 / 30.0).abs() < 1e-3);
    }

    #[test]
    fn star_at_the_exact_center_stays_put() {
        // Factor is 5 there, but the offset it scales is zero.
        let mut stars = [star_at(CENTER)];
        apply(&mut stars, CENTER, HORIZON, BEND);
        assert_eq!(stars[0].pos, CENTER);
    }

    #[test]
    fn deep_inside_the_horizon_the_factor_overshoots() {
        // d = 60: factor = 90 / 30 = 3, so the star lands farther out.
        let mut stars = [star_at(CENTER + Vec2::new(60.0, 0.0))];
        apply(&mut stars, CENTER, HORIZON, BEND);
        assert!((stars[0].pos.x - (CENTER.x + 180.0)).abs() < 1e-3);
        assert!((stars[0].pos.y - CENTER.y).abs() < 1e-3);
    }

    #[test]
    fn displacement_is_cumulative_across_passes() {
        let mut stars = [star_at(CENTER + Vec2::new(130.0, 0.0))];
        apply(&mut stars, CENTER, HORIZON, BEND);
        let first = (stars[0].pos - CENTER).length();
        apply(&mut stars, CENTER, HORIZON, BEND);
        let second = (stars[0].pos - CENTER).length();
        assert!(first < 130.0);
        assert_ne!(first, second);
    }
}

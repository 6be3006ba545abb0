//! The wound-bed region and its closure envelope.

use glam::Vec2;
use rand::Rng;

use crate::easing::ease_in_out_cubic;

/// Fraction of the original wound still open at progress `t`.
///
/// Starts fully open at 1.0 and eases down to a residual scar fraction
/// of 0.05 at `t = 1`. Monotonically non-increasing; inputs outside
/// `[0, 1]` are clamped.
pub fn openness(t: f32) -> f32 {
    1.0 - 0.95 * ease_in_out_cubic(t.clamp(0.0, 1.0))
}

/// The elliptical region cells scatter in.
#[derive(Clone, Copy, Debug)]
pub struct WoundBed {
    pub center: Vec2,
    /// Semi-axes of the ellipse.
    pub radii: Vec2,
}

impl WoundBed {
    pub fn new(center: Vec2, radii: Vec2) -> Self {
        Self { center, radii }
    }

    /// Returns a copy with both semi-axes scaled by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            center: self.center,
            radii: self.radii * factor,
        }
    }

    /// Whether `p` lies inside the ellipse.
    pub fn contains(&self, p: Vec2) -> bool {
        let d = (p - self.center) / self.radii;
        d.length_squared() <= 1.0
    }

    /// Uniformly samples a point inside the ellipse.
    ///
    /// Rejection-samples the unit disc, then stretches by the semi-axes.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vec2 {
        loop {
            let x: f32 = rng.random_range(-1.0..=1.0);
            let y: f32 = rng.random_range(-1.0..=1.0);
            if x * x + y * y <= 1.0 {
                return self.center + Vec2::new(x * self.radii.x, y * self.radii.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn openness_spans_open_to_residual_scar() {
        assert_eq!(openness(0.0), 1.0);
        assert!((openness(1.0) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn openness_clamps_out_of_range_progress() {
        assert_eq!(openness(-1.0), openness(0.0));
        assert_eq!(openness(2.0), openness(1.0));
    }

    #[test]
    fn openness_never_increases() {
        let mut prev = openness(0.0);
        for i in 1..=500 {
            let o = openness(i as f32 / 500.0);
            assert!(o <= prev, "openness rose at step {i}");
            prev = o;
        }
    }

    #[test]
    fn random_points_land_inside_the_bed() {
        let bed = WoundBed::new(Vec2::new(3.0, -2.0), Vec2::new(40.0, 25.0));
        // Check against a hair of slack; mapping disc samples through the
        // center offset can push boundary points out by an ulp.
        let inflated = bed.scaled(1.001);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = bed.random_point(&mut rng);
            assert!(inflated.contains(p), "{p:?} escaped the bed");
        }
    }

    #[test]
    fn scaling_shrinks_the_contained_region() {
        let bed = WoundBed::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let small = bed.scaled(0.5);
        let p = Vec2::new(7.0, 0.0);
        assert!(bed.contains(p));
        assert!(!small.contains(p));
        assert_eq!(small.radii, Vec2::new(5.0, 5.0));
    }
}

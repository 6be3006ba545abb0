//! Pure easing curves over `[0, 1] -> [0, 1]`.
//!
//! The quadratic pair shapes the cell population envelopes; the cubic
//! pair drives wound closure and viewer fades.

/// Quadratic ease-out: fast start, decelerating toward 1.
#[inline]
pub fn ease_out_quad(x: f32) -> f32 {
    x * (2.0 - x)
}

/// Quadratic ease-in: slow start, accelerating toward 1.
#[inline]
pub fn ease_in_quad(x: f32) -> f32 {
    x * x
}

/// Cubic ease-out: sharper deceleration than [`ease_out_quad`].
#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    let u = 1.0 - x;
    1.0 - u * u * u
}

/// Cubic ease-in-out: slow at both ends, steep through the middle.
#[inline]
pub fn ease_in_out_cubic(x: f32) -> f32 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        let u = 2.0 - 2.0 * x;
        1.0 - u * u * u / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [fn(f32) -> f32; 4] =
        [ease_out_quad, ease_in_quad, ease_out_cubic, ease_in_out_cubic];

    #[test]
    fn endpoints_are_fixed() {
        for f in CURVES {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
        }
    }

    #[test]
    fn midpoints_match_the_closed_forms() {
        assert_eq!(ease_out_quad(0.5), 0.75);
        assert_eq!(ease_in_quad(0.5), 0.25);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
    }

    #[test]
    fn curves_stay_inside_the_unit_square() {
        for i in 0..=1000 {
            let x = i as f32 / 1000.0;
            for f in CURVES {
                let y = f(x);
                assert!((0.0..=1.0).contains(&y), "f({x}) = {y} out of range");
            }
        }
    }

    #[test]
    fn curves_never_decrease() {
        for f in CURVES {
            let mut prev = f(0.0);
            for i in 1..=1000 {
                let y = f(i as f32 / 1000.0);
                assert!(y >= prev, "curve dipped at step {i}");
                prev = y;
            }
        }
    }
}

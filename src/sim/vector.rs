//! Double precision 2D vectors
//!
//! Arithmetic and lengths come from `glam::DVec2`; the one operation glam
//! doesn't have is rescaling to an exact length with a zero guard.

use crate::consts::LENGTH_EPSILON;

/// World and screen coordinates are both carried as `f64` pairs
pub type Vec2 = glam::DVec2;

/// Rescale a vector to a requested length
pub trait SetLength {
    /// Parallel vector with length `length`, or zero if `self` is (nearly) zero.
    ///
    /// The zero check happens first, so a non-finite `length` on a zero vector
    /// still yields zero.
    fn set_length(self, length: f64) -> Self;
}

impl SetLength for Vec2 {
    #[inline]
    fn set_length(self, length: f64) -> Self {
        let current = self.length();
        if current < LENGTH_EPSILON {
            return Vec2::ZERO;
        }
        self * (length / current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_length_scales_parallel() {
        let v = Vec2::new(3.0, 4.0).set_length(10.0);
        assert!((v - Vec2::new(6.0, 8.0)).length() < 1e-12);
    }

    #[test]
    fn test_set_length_zero_vector() {
        assert_eq!(Vec2::ZERO.set_length(5.0), Vec2::ZERO);
        assert_eq!(Vec2::new(1e-6, 0.0).set_length(5.0), Vec2::ZERO);
    }

    #[test]
    fn test_set_length_zero_vector_infinite_length() {
        // Self-interaction asks for an infinite magnitude along a zero vector
        assert_eq!(Vec2::ZERO.set_length(f64::INFINITY), Vec2::ZERO);
    }

    #[test]
    fn test_set_length_negative_flips() {
        let v = Vec2::new(0.0, 2.0).set_length(-1.0);
        assert!((v - Vec2::new(0.0, -1.0)).length() < 1e-12);
    }
}

//! Closeness score between two coordinate pairs
//!
//! Straight Euclidean distance over the raw numbers, in "degrees". This is not
//! a geographic distance and callers should treat it as a dimensionless score.

use crate::coord::Coordinates;

/// Euclidean distance between `a` and `b`, rounded to 2 decimal digits
pub fn closeness_score(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lng = a.lng - b.lng;
    round_to_hundredths(d_lat.hypot(d_lng))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_same_point_is_zero() {
        let p = Coordinates::new(12.34, -56.78);
        assert_eq!(closeness_score(p, p), 0.0);
    }

    #[test]
    fn test_pythagorean_triple() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(3.0, 4.0);
        assert_relative_eq!(closeness_score(a, b), 5.0);
    }

    #[test]
    fn test_symmetric() {
        let a = Coordinates::new(10.0, 20.0);
        let b = Coordinates::new(-33.3, 101.7);
        assert_eq!(closeness_score(a, b), closeness_score(b, a));
    }

    #[test]
    fn test_rounded_to_two_digits() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 1.0);
        // sqrt(2) = 1.41421...
        assert_relative_eq!(closeness_score(a, b), 1.41);
    }

    #[test]
    fn test_no_wraparound() {
        // Opposite sides of the antimeridian are far apart in this model
        let a = Coordinates::new(0.0, 179.0);
        let b = Coordinates::new(0.0, -179.0);
        assert_relative_eq!(closeness_score(a, b), 358.0);
    }
}

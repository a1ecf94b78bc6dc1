//! Random Euclidean TSP instances.

use rand::Rng;

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// An immutable set of cities.
#[derive(Debug, Clone, PartialEq)]
pub struct TspInstance {
    points: Vec<Point>,
}

impl TspInstance {
    /// Builds an instance from explicit coordinates.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Generates `n` cities with coordinates drawn uniformly from `[0, 1)`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let points = (0..n)
            .map(|_| Point::new(rng.random::<f64>(), rng.random::<f64>()))
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.points[a].distance(&self.points[b])
    }

    /// Length of the closed tour visiting cities in `order`.
    ///
    /// Includes the edge from the last city back to the first.
    pub fn tour_length(&self, order: &[usize]) -> f64 {
        match order {
            [] | [_] => 0.0,
            [first, .., last] => {
                let open: f64 = order
                    .windows(2)
                    .map(|w| self.distance(w[0], w[1]))
                    .sum();
                open + self.distance(*last, *first)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_random_points_in_unit_square() {
        let mut rng = create_rng(42);
        let inst = TspInstance::random(50, &mut rng);
        assert_eq!(inst.len(), 50);
        for p in inst.points() {
            assert!((0.0..1.0).contains(&p.x));
            assert!((0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn test_unit_square_tour() {
        let inst = TspInstance::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);
        assert!((inst.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
        // Crossing tour uses both diagonals.
        let crossing = 2.0 + 2.0 * 2f64.sqrt();
        assert!((inst.tour_length(&[0, 2, 1, 3]) - crossing).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_tours() {
        let inst = TspInstance::from_points(vec![Point::new(0.3, 0.4)]);
        assert_eq!(inst.tour_length(&[]), 0.0);
        assert_eq!(inst.tour_length(&[0]), 0.0);
    }

    #[test]
    fn test_two_city_tour_goes_there_and_back() {
        let inst = TspInstance::from_points(vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)]);
        assert!((inst.tour_length(&[0, 1]) - 10.0).abs() < 1e-12);
    }
}

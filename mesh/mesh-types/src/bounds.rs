//! Axis-aligned bounds accumulated over vertex positions.

use nalgebra::{Point3, Vector3};

/// Component-wise minimum and maximum over a set of points.
///
/// Starts out [empty](Self::empty) (inverted, `min > max`) and grows as
/// points are added. Partial boxes merge with [`union`](Self::union) in any
/// order, so a vertex buffer can be reduced in parallel chunks.
///
/// # Example
///
/// ```
/// use mesh_types::{Aabb, Point3, Vector3};
///
/// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 4.0, 2.0)];
/// let aabb = Aabb::from_points(points.iter());
///
/// assert_eq!(aabb.size(), Vector3::new(10.0, 4.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Smallest x, y, z seen.
    pub min: Point3<f64>,
    /// Largest x, y, z seen.
    pub max: Point3<f64>,
}

impl Aabb {
    /// Box containing nothing; the identity for [`union`](Self::union).
    ///
    /// ```
    /// use mesh_types::{Aabb, Point3};
    ///
    /// let mut aabb = Aabb::empty();
    /// assert!(aabb.is_empty());
    ///
    /// aabb.expand_to_include(&Point3::new(1.0, 2.0, 3.0));
    /// assert!(!aabb.is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Bounds of a point sequence; empty if there are no points.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        points.fold(Self::empty(), |mut aabb, point| {
            aabb.expand_to_include(point);
            aabb
        })
    }

    /// No point has been added (`min > max` on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Per-axis extents, `max - min`.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Grow to include a point.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = self.min.inf(point);
        self.max = self.max.sup(point);
    }

    /// Smallest box enclosing both.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (_, true) => *self,
            _ => Self {
                min: self.min.inf(&other.min),
                max: self.max.sup(&other.max),
            },
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(min: [f64; 3], max: [f64; 3]) -> Aabb {
        Aabb::from_points([Point3::from(min), Point3::from(max)].iter())
    }

    #[test]
    fn from_points_takes_componentwise_extremes() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 5.0, 3.0),
            Point3::new(-2.0, 8.0, 1.0),
        ];

        let aabb = Aabb::from_points(points.iter());
        assert_eq!(aabb.min, Point3::new(-2.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(10.0, 8.0, 3.0));
        assert_eq!(aabb.size(), Vector3::new(12.0, 8.0, 3.0));
    }

    #[test]
    fn no_points_is_empty() {
        let aabb = Aabb::from_points(std::iter::empty());
        assert!(aabb.is_empty());
        assert_eq!(aabb, Aabb::default());
    }

    #[test]
    fn single_point_is_not_empty() {
        let aabb = Aabb::from_points([Point3::new(1.0, 1.0, 1.0)].iter());
        assert!(!aabb.is_empty());
        assert_eq!(aabb.size(), Vector3::zeros());
    }

    #[test]
    fn union_with_empty_is_identity() {
        let a = boxed([0.0; 3], [5.0; 3]);
        assert_eq!(a.union(&Aabb::empty()), a);
        assert_eq!(Aabb::empty().union(&a), a);
    }

    #[test]
    fn union_is_order_independent() {
        let a = boxed([0.0; 3], [5.0; 3]);
        let b = boxed([3.0, -3.0, 3.0], [10.0; 3]);
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(0.0, -3.0, 0.0));
        assert_eq!(u.max, Point3::new(10.0, 10.0, 10.0));
        assert_eq!(u, b.union(&a));
    }
}

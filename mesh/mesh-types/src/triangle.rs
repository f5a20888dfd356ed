//! Triangle type for per-face geometric terms.

use nalgebra::{Point3, Vector3};

/// A triangle with resolved vertex positions.
///
/// This is the per-face view the metric and validation passes work on.
/// Vertex order is the face's winding: the right-hand rule over
/// `v0 -> v1 -> v2` gives the outward normal.
///
/// # Example
///
/// ```
/// use mesh_types::{Triangle, Point3};
///
/// let tri = Triangle::new(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// );
///
/// assert!((tri.area() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Create a triangle from coordinate arrays.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_arrays(v0: [f64; 3], v1: [f64; 3], v2: [f64; 3]) -> Self {
        Self {
            v0: Point3::new(v0[0], v0[1], v0[2]),
            v1: Point3::new(v1[0], v1[1], v1[2]),
            v2: Point3::new(v2[0], v2[1], v2[2]),
        }
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// Its magnitude is twice the triangle area; its direction is the
    /// winding normal.
    ///
    /// ```
    /// use mesh_types::{Triangle, Point3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    /// );
    /// assert!((tri.normal_unnormalized().norm() - 4.0).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.cross(&e2)
    }

    /// Area: half the magnitude of the edge cross product.
    ///
    /// Always non-negative.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.normal_unnormalized().norm() * 0.5
    }

    /// Signed volume of the tetrahedron spanned by the origin and this face.
    ///
    /// `v0 · (v1 × v2) / 6`. Summed over a closed, outward-wound surface this
    /// yields the enclosed volume; a face with reversed winding contributes
    /// with the opposite sign.
    ///
    /// ```
    /// use mesh_types::Triangle;
    ///
    /// let tri = Triangle::from_arrays([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]);
    /// assert!((tri.signed_volume() - 1.0 / 6.0).abs() < 1e-12);
    /// assert!((tri.reversed().signed_volume() + 1.0 / 6.0).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        let (v0, v1, v2) = (&self.v0, &self.v1, &self.v2);
        // Using mul_add for better numerical accuracy
        let cross = Vector3::new(
            v1.y.mul_add(v2.z, -(v1.z * v2.y)),
            v1.z.mul_add(v2.x, -(v1.x * v2.z)),
            v1.x.mul_add(v2.y, -(v1.y * v2.x)),
        );
        v0.z.mul_add(cross.z, v0.x.mul_add(cross.x, v0.y * cross.y)) / 6.0
    }

    /// Check if the triangle's area falls below `threshold`.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, threshold: f64) -> bool {
        self.area() < threshold
    }

    /// Same triangle with reversed winding.
    #[inline]
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            v0: self.v0,
            v1: self.v2,
            v2: self.v1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn triangle_area_right_angle() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
        assert_relative_eq!(tri.area(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn triangle_area_ignores_winding() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [3.0, 0.0, 0.0], [0.0, 4.0, 0.0]);
        assert_relative_eq!(tri.area(), tri.reversed().area(), epsilon = 1e-12);
    }

    #[test]
    fn cross_product_follows_winding() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert_relative_eq!(tri.normal_unnormalized().z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(tri.reversed().normal_unnormalized().z, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert!(tri.is_degenerate(1e-8));
        assert!(tri.area().abs() < f64::EPSILON);
    }

    #[test]
    fn coincident_vertices_are_degenerate() {
        let tri = Triangle::from_arrays([1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [2.0, 0.0, 5.0]);
        assert!(tri.is_degenerate(1e-8));
    }

    #[test]
    fn small_but_real_triangle_is_not_degenerate() {
        // Area 5e-7, above a 1e-8 threshold
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1e-3, 0.0, 0.0], [0.0, 1e-3, 0.0]);
        assert!(!tri.is_degenerate(1e-8));
    }

    #[test]
    fn signed_volume_changes_sign_with_winding() {
        let tri = Triangle::from_arrays([1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]);
        assert_relative_eq!(tri.signed_volume(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tri.reversed().signed_volume(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn face_through_origin_has_no_volume() {
        let tri = Triangle::from_arrays([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);
        assert!(tri.signed_volume().abs() < f64::EPSILON);
    }
}

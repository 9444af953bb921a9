//! Point aliases and per-axis displacement tables.

use nalgebra::{Vector2, Vector3};

/// 3D lattice point. Hashable, value-equal and closed under `+`.
pub type Point3 = Vector3<i32>;
/// 2D grid/screen point.
pub type Point2 = Vector2<i32>;

/// Coordinate axis of a 3D point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Displacement of length `s` along this axis (sign carried by `s`).
    #[inline]
    pub fn scaled(self, s: i32) -> Point3 {
        let mut v = Point3::zeros();
        v[self.index()] = s;
        v
    }
}

/// Signed displacements `[+unit, -unit]` along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisVectors {
    pub x: [Point3; 2],
    pub y: [Point3; 2],
    pub z: [Point3; 2],
}

impl AxisVectors {
    #[inline]
    pub fn along(&self, axis: Axis) -> [Point3; 2] {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }
}

/// Squared Euclidean norm, widened to avoid overflow. Monotone in the
/// Euclidean distance from the origin, so it serves as an exact sort key.
#[inline]
pub fn sq_norm(p: &Point3) -> i128 {
    p.iter().map(|&c| i128::from(c) * i128::from(c)).sum()
}

/// L1 (taxicab) distance from the origin.
#[inline]
pub fn l1_norm(p: &Point3) -> i32 {
    p.iter().map(|c| c.abs()).sum()
}

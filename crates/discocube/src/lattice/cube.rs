//! Basis vectors and cube-corner expansion.

use super::types::{Axis, AxisVectors, Point3};

/// The six cube-face normals scaled to `unit`: `+x, -x, +y, -y, +z, -z`.
///
/// Translating a point by each of these reaches its lattice neighbours when
/// `unit` equals the lattice spacing.
pub fn basis_vectors(unit: i32) -> [Point3; 6] {
    let mut out = [Point3::zeros(); 6];
    for (k, axis) in Axis::ALL.into_iter().enumerate() {
        out[2 * k] = axis.scaled(unit);
        out[2 * k + 1] = axis.scaled(-unit);
    }
    out
}

/// Per-axis signed displacements used to build cube corners.
pub fn axis_vectors(unit: i32) -> AxisVectors {
    let pm = |a: Axis| [a.scaled(unit), a.scaled(-unit)];
    AxisVectors {
        x: pm(Axis::X),
        y: pm(Axis::Y),
        z: pm(Axis::Z),
    }
}

/// The 8 corners of the cube of half-edge `unit` centred at `origin`.
///
/// Corners are produced by offsetting along x, then y, then z; corner `i`
/// takes the negative offset on axis `k` iff bit `k` of `i` is set.
pub fn make_cube(origin: Point3, unit: i32) -> [Point3; 8] {
    let ax = axis_vectors(unit);
    let mut corners = [origin; 8];
    let mut len = 1;
    for axis in Axis::ALL {
        let [plus, minus] = ax.along(axis);
        for i in 0..len {
            let p = corners[i];
            corners[i] = p + plus;
            corners[i + len] = p + minus;
        }
        len *= 2;
    }
    corners
}

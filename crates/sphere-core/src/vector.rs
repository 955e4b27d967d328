use glam::DVec3;

/// Unit vector in the direction of `v`, or the zero vector when `v` has no
/// usable length.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    v.normalize_or_zero()
}

/// Rotate `point` about `axis` by `angle` radians (Rodrigues' rotation formula).
///
/// `axis` is expected to be unit length. A zero axis leaves the point
/// untouched.
#[inline]
pub fn rotate(point: DVec3, axis: DVec3, angle: f64) -> DVec3 {
    if axis == DVec3::ZERO {
        return point;
    }
    let (sin_a, cos_a) = angle.sin_cos();
    let cross = axis.cross(point);
    let dot = axis.dot(point);
    point * cos_a + cross * sin_a + axis * (dot * (1.0 - cos_a))
}

use std::ops::{Neg, Add, Sub, Mul, Div};
use std::fmt;

use crate::math;
use crate::vector::Vec3;

/// A rotation stored as w + xi + yj + zk. Construction never normalizes;
/// the operations that only make sense for unit quaternions say so.
#[repr(C)]
#[derive(PartialEq, Clone, Copy, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}
impl Quaternion {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };

    /// The no-rotation quaternion.
    pub const IDENTITY: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub fn len(&self) -> f32 {
        math::fast_sqrt(self.len_sq())
    }

    pub fn len_sq(&self) -> f32 {
        self.x*self.x + self.y*self.y + self.z*self.z + self.w*self.w
    }

    pub fn inv_len(&self) -> f32 {
        math::fast_inv_sqrt(self.len_sq())
    }

    /// The zero quaternion has no direction and normalizes to garbage.
    pub fn normalized(&self) -> Self {
        *self * self.inv_len()
    }

    pub fn is_normalized(&self) -> bool {
        (1.0 - self.len_sq()).abs() < 0.001
    }

    /// Rotation of `angle` radians about `axis`. The axis is normalized
    /// here, so its length does not scale the rotation.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let sin = half.sin();
        let cos = half.cos();

        let a = axis.normalized();

        Self::new(
            sin * a.x,
            sin * a.y,
            sin * a.z,
            cos,
        )
    }

    /// Rotation from heading, attitude and bank angles in radians,
    /// combined in that fixed order.
    pub fn from_euler_angle(heading: f32, attitude: f32, bank: f32) -> Self {
        let sx = (heading * 0.5).sin();
        let sy = (attitude * 0.5).sin();
        let sz = (bank * 0.5).sin();
        let cx = (heading * 0.5).cos();
        let cy = (attitude * 0.5).cos();
        let cz = (bank * 0.5).cos();

        Self::new(
            sx*cy*cz - cx*sy*sz,
            cx*sy*cz + sx*cy*sz,
            cx*cy*sz - sx*sy*cz,
            cx*cy*cz + sx*sy*sz,
        )
    }

    /// Extracts (heading, attitude, bank) in radians, assuming `self` is a
    /// unit quaternion. The asin argument is not clamped; input that has
    /// drifted off unit length can produce a NaN bank.
    pub fn to_euler_angle(&self) -> Vec3 {
        let xx = self.x * self.x;
        let yy = self.y * self.y;
        let zz = self.z * self.z;

        Vec3::new(
            (2.0 * (self.x*self.w - self.y*self.z)).atan2(1.0 - 2.0 * (xx + zz)),
            (2.0 * (self.y*self.w + self.x*self.z)).atan2(1.0 - 2.0 * (yy + zz)),
            (2.0 * (self.x*self.y + self.z*self.w)).asin(),
        )
    }
}

impl Neg for Quaternion {
    type Output = Self;

    /// Flips the vector part and keeps w. For a unit quaternion this is
    /// the inverse rotation; it is not a componentwise negation.
    fn neg(self) -> Self::Output {
        Self::new(
            -self.x,
            -self.y,
            -self.z,
            self.w,
        )
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self::new(
            self.x + other.x,
            self.y + other.y,
            self.z + other.z,
            self.w + other.w,
        )
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. Not commutative: `q2 * q1` is the rotation that
    /// applies `q1` first, then `q2`.
    fn mul(self, other: Self) -> Self::Output {
        let ax = self.x;
        let ay = self.y;
        let az = self.z;
        let aw = self.w;

        let bx = other.x;
        let by = other.y;
        let bz = other.z;
        let bw = other.w;

        Self::new(
            aw*bx + ax*bw + ay*bz - az*by,
            aw*by + ay*bw + az*bx - ax*bz,
            aw*bz + az*bw + ax*by - ay*bx,
            aw*bw - ax*bx - ay*by - az*bz,
        )
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;

    fn mul(self, s: f32) -> Self::Output {
        Self::new(
            self.x * s,
            self.y * s,
            self.z * s,
            self.w * s,
        )
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;

    /// Rotates `vec`. Only valid when `self` is a unit quaternion; no
    /// normalization is performed here.
    fn mul(self, vec: Vec3) -> Self::Output {
        let qv = Vec3::new(self.x, self.y, self.z);

        let mut res = qv.cross(vec) * (2.0 * self.w);
        res = res + vec * (math::square(self.w) - qv.dot(qv));
        res = res + qv * (2.0 * qv.dot(vec));

        res
    }
}

impl Div<f32> for Quaternion {
    type Output = Self;

    fn div(self, s: f32) -> Self::Output {
        let inv_s = 1.0 / s;

        self * inv_s
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "
            \rx: {}
            \ry: {},
            \rz: {}
            \rw: {}\n",
            self.x,
            self.y,
            self.z,
            self.w
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Mat4x4;
    use crate::vector::Vec4;
    use crate::random::Randf32;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{PI, FRAC_PI_2};

    #[test]
    fn identity_is_neutral() {
        assert!(Quaternion::IDENTITY * Quaternion::IDENTITY == Quaternion::IDENTITY);

        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.77);
        assert!(q * Quaternion::IDENTITY == q);
        assert!(Quaternion::IDENTITY * q == q);
    }

    #[test]
    fn zero_is_additive_identity() {
        let q = Quaternion::new(0.5, -0.25, 0.125, 1.0);

        assert!(Quaternion::ZERO + q == q);
        assert!(q - Quaternion::ZERO == q);
        assert!(Quaternion::ZERO.len_sq() == 0.0);
    }

    #[test]
    fn rotating_by_identity_returns_vector() {
        let v = Vec3::new(1.5, -2.0, 0.25);
        assert!(Quaternion::IDENTITY * v == v);
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let q1 = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let q2 = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);

        assert!(q1 * q2 != q2 * q1);
    }

    #[test]
    fn mul_composes_rotations() {
        let q1 = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let q2 = Quaternion::from_axis_angle(Vec3::new(1.0, 0.0, 0.0), FRAC_PI_2);
        let v = Vec3::new(1.0, 0.0, 0.0);

        let once = (q2 * q1) * v;
        let stepped = q2 * (q1 * v);

        assert_abs_diff_eq!(once.x, stepped.x, epsilon = 1e-4);
        assert_abs_diff_eq!(once.y, stepped.y, epsilon = 1e-4);
        assert_abs_diff_eq!(once.z, stepped.z, epsilon = 1e-4);

        // x rotated about z, then the result about x: ends up on the z axis.
        assert_abs_diff_eq!(once.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_about_z_maps_x_to_y() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2);
        let rotated = q * Vec3::new(1.0, 0.0, 0.0);

        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rotated.z, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_preserves_length() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.3, -1.0, 0.5), 1.9);
        let v = Vec3::new(2.0, 3.0, 4.0);

        assert_abs_diff_eq!((q * v).len(), v.len(), epsilon = 1e-4);
    }

    #[test]
    fn axis_length_does_not_scale_rotation() {
        let a = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), 1.0);
        let b = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 9.0), 1.0);

        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-4);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-4);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-4);
        assert_abs_diff_eq!(a.w, b.w, epsilon = 1e-4);
    }

    #[test]
    fn matrix_matches_independent_reference() {
        use cgmath::{InnerSpace, Rad};

        let cases = [
            (Vec3::new(0.0, 0.0, 1.0), FRAC_PI_2),
            (Vec3::new(1.0, 2.0, -0.5), 2.2),
            (Vec3::new(-3.0, 0.2, 0.4), -1.7),
            (Vec3::new(0.0, 1.0, 0.0), -3.0),
            (Vec3::new(5.0, -5.0, 5.0), 0.01),
        ];

        for (axis, angle) in cases {
            let quat = Quaternion::from_axis_angle(axis, angle);
            let ours: [[f32; 4]; 4] = Mat4x4::from(quat).into();

            let unit = cgmath::Vector3::new(axis.x, axis.y, axis.z).normalize();
            let reference: [[f32; 4]; 4] = cgmath::Matrix4::from_axis_angle(unit, Rad(angle)).into();

            for c in 0..4 {
                for r in 0..4 {
                    assert_abs_diff_eq!(ours[c][r], reference[c][r], epsilon = 1e-4);
                }
            }
        }
    }

    #[test]
    fn matrix_agrees_with_rotation_operator() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, -2.0, 0.5), 2.2);
        let mat = Mat4x4::from(q);

        let v = Vec3::new(0.7, -1.3, 2.1);
        let rotated = q * v;
        let applied = Vec4::new(v.x, v.y, v.z, 0.0) * mat;

        assert_abs_diff_eq!(applied.x, rotated.x, epsilon = 1e-5);
        assert_abs_diff_eq!(applied.y, rotated.y, epsilon = 1e-5);
        assert_abs_diff_eq!(applied.z, rotated.z, epsilon = 1e-5);
        assert!(applied.w == 0.0);
    }

    #[test]
    fn identity_matrix_from_identity_quaternion() {
        assert!(Mat4x4::from(Quaternion::IDENTITY) == Mat4x4::identity());
    }

    #[test]
    fn euler_roundtrip_single_axis() {
        for angle in [-1.4f32, -0.8, -0.2, 0.3, 0.9, 1.4] {
            let heading = Quaternion::from_euler_angle(angle, 0.0, 0.0).to_euler_angle();
            assert_abs_diff_eq!(heading.x, angle, epsilon = 1e-3);
            assert_abs_diff_eq!(heading.y, 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(heading.z, 0.0, epsilon = 1e-3);

            let attitude = Quaternion::from_euler_angle(0.0, angle, 0.0).to_euler_angle();
            assert_abs_diff_eq!(attitude.x, 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(attitude.y, angle, epsilon = 1e-3);
            assert_abs_diff_eq!(attitude.z, 0.0, epsilon = 1e-3);

            let bank = Quaternion::from_euler_angle(0.0, 0.0, angle).to_euler_angle();
            assert_abs_diff_eq!(bank.x, 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(bank.y, 0.0, epsilon = 1e-3);
            assert_abs_diff_eq!(bank.z, angle, epsilon = 1e-3);
        }
    }

    #[test]
    fn euler_of_identity_is_zero() {
        let angles = Quaternion::IDENTITY.to_euler_angle();
        assert!(angles == Vec3::zero());
    }

    #[test]
    fn from_euler_is_normalized() {
        assert!(Quaternion::from_euler_angle(0.3, -0.8, 1.1).is_normalized());
        assert!(Quaternion::from_euler_angle(0.0, 0.0, 0.0) == Quaternion::IDENTITY);
    }

    #[test]
    fn norm_laws() {
        assert!(Quaternion::IDENTITY.len_sq() == 1.0);
        assert!(Quaternion::IDENTITY.is_normalized());

        let mut rand = Randf32::seed(7);
        for _ in 0..100 {
            let q = Quaternion::new(
                rand.next_in(-10.0..10.0),
                rand.next_in(-10.0..10.0),
                rand.next_in(-10.0..10.0),
                rand.next_in(-10.0..10.0),
            );
            if q.len_sq() == 0.0 {
                continue;
            }
            assert!(q.normalized().is_normalized());
        }
    }

    #[test]
    fn len_tracks_ieee_sqrt() {
        let q = Quaternion::new(1.5, -2.0, 0.25, 4.0);

        assert_abs_diff_eq!(q.len(), q.len_sq().sqrt(), epsilon = 1e-3);
        assert_abs_diff_eq!(q.inv_len(), 1.0 / q.len_sq().sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn negate_flips_vector_part_only() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);

        assert!(-q == Quaternion::new(-1.0, -2.0, -3.0, 4.0));
        assert!(q + (-q) == Quaternion::new(0.0, 0.0, 0.0, 8.0));
    }

    #[test]
    fn negate_inverts_unit_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.2, 0.9, -0.4), 1.3);
        let v = Vec3::new(1.0, 2.0, 3.0);

        let back = (-q) * (q * v);
        assert_abs_diff_eq!(back.x, v.x, epsilon = 1e-4);
        assert_abs_diff_eq!(back.y, v.y, epsilon = 1e-4);
        assert_abs_diff_eq!(back.z, v.z, epsilon = 1e-4);
    }

    #[test]
    fn scalar_divide_is_reciprocal_multiply() {
        let q = Quaternion::new(1.0, -2.0, 3.0, -4.0);
        let r = (q / 2.5) * 2.5;

        assert_abs_diff_eq!(r.x, q.x, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, q.y, epsilon = 1e-6);
        assert_abs_diff_eq!(r.z, q.z, epsilon = 1e-6);
        assert_abs_diff_eq!(r.w, q.w, epsilon = 1e-6);

        // Dividing by zero propagates infinity instead of failing.
        assert!((q / 0.0).x.is_infinite());
    }

    #[test]
    fn half_turn_about_z() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), PI);
        let rotated = q * Vec3::new(1.0, 0.0, 0.0);

        assert_abs_diff_eq!(rotated.x, -1.0, epsilon = 1e-4);
        assert_abs_diff_eq!(rotated.y, 0.0, epsilon = 1e-4);
    }
}

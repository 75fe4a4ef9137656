mod ops;

use std::fmt;

use crate::{vec4, Vec3f, Vec4f};

/// Quaternions whose length deviates from 1 by more than this are reported by debug builds when
/// used for rotation.
const UNIT_TOLERANCE: f32 = 1e-3;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are stored as a [`Vec4f`] with an `x`, `y`, `z` and `w` component. `x`, `y` and
/// `z` form the *vector part* (see [`Quat::vector`]) and `w` is the *scalar part* (see
/// [`Quat::scalar`]). A [`Quat`] converts to and from its [`Vec4f`] without loss.
///
/// `q` and `-q` represent the same rotation.
///
/// # Examples
///
/// ```
/// # use vmath::*;
/// # use approx::assert_abs_diff_eq;
/// use std::f32::consts::FRAC_PI_2;
///
/// let quarter_turn = Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2);
/// assert_abs_diff_eq!(quarter_turn.rotate(Vec3f::X), Vec3f::Y, epsilon = 1e-4);
///
/// // Rotations compose via multiplication; the right-hand side is applied first.
/// let half_turn = quarter_turn * quarter_turn;
/// assert_abs_diff_eq!(half_turn * Vec3f::X, -Vec3f::X, epsilon = 1e-4);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quat {
    vec: Vec4f,
}

unsafe impl bytemuck::Zeroable for Quat {}
unsafe impl bytemuck::Pod for Quat {}

impl Quat {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self::from_vec(Vec4f::W);

    /// Creates a quaternion from a 4-dimensional vector.
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vec4f) -> Self {
        Self { vec }
    }

    #[inline]
    pub const fn from_components(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_vec(vec4(x, y, z, w))
    }

    /// Creates a quaternion that rotates by `radians` around `axis`.
    ///
    /// `axis` must be of unit length, otherwise the result is not a unit quaternion. Positive
    /// angles rotate counterclockwise when looking down the axis towards the origin.
    pub fn from_axis_angle(axis: Vec3f, radians: f32) -> Self {
        let (sin, cos) = (radians * 0.5).sin_cos();
        Self::from_vec((axis * sin).extend(cos))
    }

    pub fn from_rotation_x(radians: f32) -> Self {
        Self::from_axis_angle(Vec3f::X, radians)
    }

    pub fn from_rotation_y(radians: f32) -> Self {
        Self::from_axis_angle(Vec3f::Y, radians)
    }

    pub fn from_rotation_z(radians: f32) -> Self {
        Self::from_axis_angle(Vec3f::Z, radians)
    }

    /// Creates a quaternion representing a rotation around the X, Y, and Z axis.
    ///
    /// The result is `qx * qy * qz`, so the Z rotation is applied to vectors first.
    #[doc(alias = "euler")]
    pub fn from_rotation_xyz(x: f32, y: f32, z: f32) -> Self {
        Self::from_rotation_x(x) * Self::from_rotation_y(y) * Self::from_rotation_z(z)
    }

    /// Returns the underlying `(x, y, z, w)` vector.
    #[inline]
    pub const fn into_vec(self) -> Vec4f {
        self.vec
    }

    #[inline]
    pub const fn as_vec(&self) -> &Vec4f {
        &self.vec
    }

    /// Returns the vector (imaginary) part `(x, y, z)` of this quaternion.
    #[doc(alias = "xyz")]
    #[inline]
    pub fn vector(&self) -> Vec3f {
        self.vec.truncate()
    }

    /// Returns the scalar (real) part `w` of this quaternion.
    #[inline]
    pub const fn scalar(&self) -> f32 {
        self.vec.w()
    }

    /// Computes the 4-dimensional dot product of `self` and `other`.
    ///
    /// For unit quaternions, the sign of the result tells whether the two lie on the same
    /// hemisphere.
    pub fn dot(self, other: Self) -> f32 {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> f32 {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, rotating a vector with this quaternion will produce a
    /// distorted result. When using quaternions to model rotations, it is advisable to ensure
    /// that quaternions are always of length one.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> f32 {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// Like [`Vector::normalize`][crate::Vector::normalize], `self` must not be zero.
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    /// Returns the conjugate of `self`, which negates the vector part.
    ///
    /// For unit quaternions, this is the inverse rotation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
    /// assert_eq!(q.conjugate(), Quat::from_components(-1.0, -2.0, -3.0, 4.0));
    /// ```
    #[doc(alias = "inverse")]
    pub fn conjugate(self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        Self::from_components(-x, -y, -z, w)
    }

    /// Replaces `self` with its conjugate and returns it for chaining.
    pub fn conjugate_mut(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Rotates `v` by this quaternion.
    ///
    /// `self` must be a unit quaternion; otherwise, the result is not a rotation of `v` (debug
    /// builds log a warning). The result equals the vector part of `self * (v, 0) * self⁻¹`, but is
    /// computed with two cross products instead of two quaternion multiplications.
    ///
    /// The `Mul<Vec3f>` impl of [`Quat`] performs the same operation.
    pub fn rotate(self, v: Vec3f) -> Vec3f {
        if cfg!(debug_assertions) && (self.length() - 1.0).abs() > UNIT_TOLERANCE {
            log::warn!(
                "rotating by non-unit quaternion {self:?} (length {})",
                self.length()
            );
        }

        let u = self.vector();
        let t = u.cross(v) * 2.0;
        v + t * self.scalar() + u.cross(t)
    }

    /// Normalized linear interpolation between `self` and `other`.
    ///
    /// If the quaternions lie on opposite hemispheres (`self.dot(other) < 0.0`), `self` is negated
    /// first so that the interpolation follows the shorter arc. The interpolated quaternion is
    /// then normalized. Unlike *slerp*, the angular velocity is not constant over `t`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// # use approx::assert_abs_diff_eq;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_rotation_z(FRAC_PI_2);
    /// let mid = a.nlerp(b, 0.5);
    /// assert_abs_diff_eq!(mid * Vec3f::X, vec3(1.0, 1.0, 0.0).normalize(), epsilon = 1e-4);
    /// ```
    pub fn nlerp(self, other: Self, t: f32) -> Self {
        let from = if self.dot(other) < 0.0 { -self } else { self };
        Self::from_vec(from.vec.lerp(other.vec, t).normalize())
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec4f> for Quat {
    #[inline]
    fn from(vec: Vec4f) -> Self {
        Self::from_vec(vec)
    }
}

impl From<Quat> for Vec4f {
    #[inline]
    fn from(quat: Quat) -> Self {
        quat.vec
    }
}

impl fmt::Debug for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z, w] = self.vec.into_array();
        f.debug_tuple("Quat")
            .field(&x)
            .field(&y)
            .field(&z)
            .field(&w)
            .finish()
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vec, f)
    }
}

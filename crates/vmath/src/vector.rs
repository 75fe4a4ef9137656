use std::{array, fmt};

use crate::DimensionMismatch;

mod ops;

/// A 2-dimensional vector.
pub type Vec2f = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3f = Vector<3>;
/// A 4-dimensional vector.
///
/// Also the storage of a [`Quat`][crate::Quat].
pub type Vec4f = Vector<4>;

/// An `N`-element column vector of [`f32`]s.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices via
///   [`TryFrom`].
/// - [`Vector::ZERO`] (also returned by [`Default`]) is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction, where the dimension has that axis.
///
/// # Element Access
///
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - Named accessors `x()`, `y()`, `z()` and `w()`, and the matching `set_*` methods, exist for
///   each axis the dimension has. Using `z()` on a [`Vec2f`] is a compile error.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`], as well as the
///   [`AsRef`] and [`AsMut`] impls, give access to the underlying elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow uploading vectors to
///   GPU buffers without copying.
///
/// # Arithmetic
///
/// All arithmetic takes its operands by value and returns a new vector. The compound assignment
/// operators (`+=`, `*=`, ...) and the `*_mut`/`*_assign` methods are in-place variants; they read
/// every input before writing, so `v += v` doubles `v`.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<const N: usize>([f32; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([0.0; N]);

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(elem: f32) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = Vector::from_fn(|i| i as f32 + 100.0);
    /// assert_eq!(v, vec3(100.0, 101.0, 102.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f32,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec3(1.0, 2.0, 3.0).map(|e| e * 10.0);
    /// assert_eq!(v, vec3(10.0, 20.0, 30.0));
    /// ```
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f32) -> f32,
    {
        Self(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise using a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec2(1.0, 5.0).zip_with(vec2(3.0, 2.0), f32::max);
    /// assert_eq!(v, vec2(3.0, 5.0));
    /// ```
    pub fn zip_with<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(f32, f32) -> f32,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f32; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.as_mut_array()[1] = 777.0;
    /// assert_eq!(v, [1.0, 777.0, 3.0]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [f32; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub const fn into_array(self) -> [f32; N] {
        self.0
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the vectors
    ///   is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// # use approx::assert_relative_eq;
    /// assert_eq!(vec2(1.0, 2.0).dot(vec2(3.0, 4.0)), 11.0);
    /// assert_relative_eq!(Vec2f::Y.dot(-Vec2f::Y), -1.0);
    /// ```
    pub fn dot(self, other: Self) -> f32 {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    pub fn length2(&self) -> f32 {
        self.dot(*self)
    }

    /// Returns the length (Euclidean norm) of this [`Vector`].
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> f32 {
        self.length2().sqrt()
    }

    /// Multiplies every element by `factor`.
    ///
    /// Same as `self * factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        self * factor
    }

    /// Scales this vector by the reciprocal of its length, resulting in a unit vector.
    ///
    /// `self` must not have zero length. Normalizing a zero vector yields non-finite elements
    /// (debug builds additionally log a warning). Use [`Vector::try_normalize`] when the input
    /// might be degenerate.
    ///
    /// The squared length is computed in [`f32`], so it overflows to infinity for vectors longer
    /// than about `1.8e19`. Such vectors normalize to [`Vector::ZERO`] instead of a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self {
        let length2 = self.length2();
        if cfg!(debug_assertions) && length2 == 0.0 {
            log::warn!("normalizing zero-length vector {self:?}");
        }
        self * (1.0 / length2.sqrt())
    }

    /// Normalizes `self` in place and returns it for chaining.
    ///
    /// Has the same precondition as [`Vector::normalize`].
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Returns a normalized copy of `self`, or [`None`] if `self` has zero (or non-finite) length.
    ///
    /// Like [`Vector::normalize`], this also returns [`None`] for finite vectors whose squared
    /// length overflows [`f32`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(vec2(0.0, 3.0).try_normalize(), Some(Vec2f::Y));
    /// assert_eq!(Vec2f::ZERO.try_normalize(), None);
    /// ```
    pub fn try_normalize(self) -> Option<Self> {
        let recip = 1.0 / self.length();
        if recip.is_finite() && recip > 0.0 {
            Some(self * recip)
        } else {
            None
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// Computes `self * (1 - t) + other * t`. `t` is not clamped, so values outside of `0.0..=1.0`
    /// extrapolate.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mid = Vec3f::X.lerp(Vec3f::Y, 0.5);
    /// assert_eq!(mid, vec3(0.5, 0.5, 0.0));
    /// ```
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self * (1.0 - t) + other * t
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use vmath::*;
    /// use std::f32::consts::TAU;
    ///
    /// let a = Vec3f::Y;
    /// let b = Vec3f::X;
    /// assert_relative_eq!(a.abs_angle_to(b), TAU / 4.0);  // quarter turn
    /// assert_relative_eq!(a.abs_angle_to(-a), TAU / 2.0); // half a turn
    /// ```
    pub fn abs_angle_to(self, other: Self) -> f32 {
        let cos = self.dot(other) / (self.length() * other.length());
        // Rounding can push `cos` slightly outside of the domain of `acos`.
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Element-wise minimum between `self` and `other`.
    pub fn min(self, other: Self) -> Self {
        self.zip_with(other, f32::min)
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), b.max(a));
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn max(self, other: Self) -> Self {
        self.zip_with(other, f32::max)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

macro_rules! accessors {
    ($n:literal: $($get:ident / $set:ident = $i:literal),+) => {
        impl Vector<$n> {
            $(
                #[doc = concat!("Returns the `", stringify!($get), "` element (index ", stringify!($i), ").")]
                #[inline]
                pub const fn $get(&self) -> f32 {
                    self.0[$i]
                }

                #[doc = concat!("Sets the `", stringify!($get), "` element (index ", stringify!($i), ").")]
                #[inline]
                pub fn $set(&mut self, value: f32) {
                    self.0[$i] = value;
                }
            )+
        }
    };
}

accessors!(2: x / set_x = 0, y / set_y = 1);
accessors!(3: x / set_x = 0, y / set_y = 1, z / set_z = 2);
accessors!(4: x / set_x = 0, y / set_y = 1, z / set_z = 2, w / set_w = 3);

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);

    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: f32) -> Vec3f {
        let [x, y] = self.0;
        vec3(x, y, value)
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is equivalent to the Z coordinate of the cross product of `self` and `other`
    /// (extended with Z=0 in the third dimension).
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    /// assert_eq!(Vec2f::Y.perp_dot(Vec2f::X), -1.0);
    /// ```
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> f32 {
        self.extend(0.0).cross(other.extend(0.0)).z()
    }

    /// Computes the (signed) clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use approx::assert_relative_eq;
    /// # use vmath::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> f32 {
        -self.perp_dot(other).atan2(self.dot(other))
    }
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vec2f {
        let [x, y, _] = self.0;
        vec2(x, y)
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    pub fn extend(self, value: f32) -> Vec4f {
        let [x, y, z] = self.0;
        vec4(x, y, z, value)
    }

    /// Computes the right-handed cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector. Parallel inputs (including `a.cross(a)`) yield the zero vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let x = Vec3f::X;
    /// let y = Vec3f::Y;
    /// let z = Vec3f::Z;
    /// assert_eq!(x.cross(y), z);
    /// assert_eq!(y.cross(x), -z);
    /// assert_eq!(x.cross(x), Vec3f::ZERO);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Replaces `self` with `self.cross(other)` and returns it for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let mut v = Vec3f::X;
    /// v.cross_assign(Vec3f::Y).cross_assign(Vec3f::X);
    /// assert_eq!(v, Vec3f::Y);
    ///
    /// // Crossing a vector with itself always yields zero.
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.cross_assign(v);
    /// assert_eq!(v, Vec3f::ZERO);
    /// ```
    pub fn cross_assign(&mut self, other: Self) -> &mut Self {
        *self = self.cross(other);
        self
    }
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);

    /// Removes the last element of this vector, yielding a vector with 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vmath::*;
    /// let v = vec4(-1.0, 2.0, 3.5, 99.0).truncate();
    /// assert_eq!(v, vec3(-1.0, 2.0, 3.5));
    /// ```
    #[doc(alias = "xyz")]
    pub fn truncate(self) -> Vec3f {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(value: [f32; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[f32]> for Vector<N> {
    type Error = DimensionMismatch;

    fn try_from(slice: &[f32]) -> Result<Self, Self::Error> {
        <[f32; N]>::try_from(slice)
            .map(Self)
            .map_err(|_| DimensionMismatch {
                expected: N,
                actual: slice.len(),
            })
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as `⟨x, y, ...⟩`.
///
/// Formatting flags like precision are applied to every element.
impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("⟨")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str("⟩")
    }
}

impl<const N: usize> AsRef<[f32]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl<const N: usize> AsRef<[f32; N]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f32; N] {
        &self.0
    }
}

impl<const N: usize> AsMut<[f32]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32] {
        &mut self.0
    }
}

impl<const N: usize> AsMut<[f32; N]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [f32; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2f`] from its two elements.
#[inline]
pub const fn vec2(x: f32, y: f32) -> Vec2f {
    Vector([x, y])
}

/// Constructs a [`Vec3f`] from its three elements.
#[inline]
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3f {
    Vector([x, y, z])
}

/// Constructs a [`Vec4f`] from its four elements.
#[inline]
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4f {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X[2], 0.0);
        assert_eq!(Vec3f::X.y(), 0.0);
        assert_eq!(Vec3f::Y.y(), 1.0);
        assert_eq!(Vec3f::Y.z(), 0.0);
        assert_eq!(Vec4f::W.w(), 1.0);

        let mut v = vec2(0.0, 1.0);
        v.set_x(777.0);
        assert_eq!(v.x(), 777.0);
        assert_eq!(v[0], 777.0);
        assert_eq!(v.y(), 1.0);
        v[1] = 9.0;
        assert_eq!(v.y(), 9.0);
        assert_eq!(v, [777.0, 9.0]);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = Vec3f::X;
        let i = 3;
        let _ = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "⟨0, 0, 0, 1⟩");
        assert_eq!(format!("{}", vec2(1.0, 2.5)), "⟨1, 2.5⟩");
        assert_eq!(format!("{:.2}", vec3(1.0, -2.0, 0.5)), "⟨1.00, -2.00, 0.50⟩");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec2(1.0, 2.0).dot(vec2(3.0, 4.0)), 11.0);
        assert_eq!(vec2(1.0, 2.0).dot(vec2(1.0, 2.0)), 5.0);
        assert_eq!(vec3(1.0, 3.0, -5.0).dot(vec3(4.0, -2.0, -1.0)), 3.0);
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).dot(vec4(5.0, 6.0, 7.0, 8.0)), 70.0);

        assert_eq!(Vec2f::X.dot(Vec2f::X), 1.0);
        assert_eq!(Vec2f::X.dot(Vec2f::Y), 0.0);
        assert_eq!(Vec2f::Y.dot(Vec2f::X), 0.0);
    }

    #[test]
    fn scale() {
        assert_eq!(vec2(3.0, 4.0).scale(0.5), vec2(1.5, 2.0));
        assert_eq!(vec3(1.0, -2.0, 3.0) * 2.0, vec3(2.0, -4.0, 6.0));
        assert_eq!(2.0 * vec4(1.0, 2.0, 3.0, 4.0), vec4(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn normalize() {
        assert_abs_diff_eq!(vec2(1.0, 2.0).normalize(), vec2(0.447213, 0.894427), epsilon = EPS);
        assert_abs_diff_eq!(vec3(3.0, 0.0, 4.0).normalize(), vec3(0.6, 0.0, 0.8), epsilon = EPS);
        assert_abs_diff_eq!(vec4(2.0, 2.0, 2.0, 2.0).normalize().length(), 1.0, epsilon = EPS);

        let mut v = vec3(0.0, -5.0, 0.0);
        v.normalize_mut();
        assert_eq!(v, -Vec3f::Y);
    }

    #[test]
    fn normalize_zero_is_not_finite() {
        let v = Vec3f::ZERO.normalize();
        assert!(v.as_slice().iter().all(|e| !e.is_finite()));
        assert_eq!(Vec3f::ZERO.try_normalize(), None);
        assert_eq!(vec2(f32::INFINITY, 0.0).try_normalize(), None);
    }

    #[test]
    fn normalize_overflowing_length() {
        let v = vec3(1e20, 0.0, 0.0);
        assert_eq!(v.length2(), f32::INFINITY);
        assert_eq!(v.normalize(), Vec3f::ZERO);
        assert_eq!(v.try_normalize(), None);

        // Still representable.
        assert_abs_diff_eq!(vec3(1e18, 0.0, 0.0).normalize(), Vec3f::X, epsilon = EPS);
    }

    #[test]
    fn cross() {
        assert_eq!(
            vec3(1.0, 2.0, 3.0).cross(vec3(4.0, 5.0, 6.0)),
            vec3(-3.0, 6.0, -3.0)
        );
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);

        let a = vec3(1.0, 2.0, 3.0);
        assert_eq!(a.cross(a * 2.0), Vec3f::ZERO);
    }

    #[test]
    fn lerp() {
        assert_eq!(Vec3f::X.lerp(Vec3f::Y, 0.5), vec3(0.5, 0.5, 0.0));
        assert_eq!(Vec3f::X.lerp(Vec3f::Y, 0.0), Vec3f::X);
        assert_eq!(Vec3f::X.lerp(Vec3f::Y, 1.0), Vec3f::Y);
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(2.0, 4.0), 0.25), vec2(0.5, 1.0));
        // unclamped
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(1.0, 1.0), 2.0), vec2(2.0, 2.0));
        assert_eq!(vec2(0.0, 0.0).lerp(vec2(1.0, 1.0), -1.0), vec2(-1.0, -1.0));
    }

    #[test]
    fn in_place_aliasing() {
        let a = vec3(1.0, -2.0, 3.5);

        let mut v = a;
        v += v;
        assert_eq!(v, a * 2.0);

        let mut v = a;
        v -= v;
        assert_eq!(v, Vec3f::ZERO);

        let mut v = a;
        v *= v;
        assert_eq!(v, vec3(1.0, 4.0, 12.25));

        let mut v = a;
        v.cross_assign(v);
        assert_eq!(v, Vec3f::ZERO);
    }

    #[test]
    fn truncate_extend() {
        assert_eq!(vec2(1.0, 2.0).extend(3.0).extend(4.0), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(vec4(1.0, 2.0, 3.0, 4.0).truncate().truncate(), vec2(1.0, 2.0));
    }

    #[test]
    fn try_from_slice() {
        let v = Vec3f::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));

        let err = Vec2f::try_from(&[1.0, 2.0, 3.0][..]).unwrap_err();
        assert_eq!(
            err,
            DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn abs_angle() {
        assert_relative_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
        assert_relative_eq!(Vec3f::X.abs_angle_to(Vec3f::Y), TAU / 4.0);

        assert_relative_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_relative_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
        assert_relative_eq!(Vec3f::Y.abs_angle_to(-Vec3f::X), TAU / 4.0);

        assert_relative_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_relative_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
        assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
        assert_relative_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), -TAU / 2.0);
    }

    #[test]
    fn min_max_clamp() {
        let v = vec3(-2.0, 0.5, 7.0);
        assert_eq!(v.clamp(Vec3f::ZERO, Vec3f::splat(1.0)), vec3(0.0, 0.5, 1.0));
        assert_eq!(v.min(Vec3f::ZERO), vec3(-2.0, 0.0, 0.0));
    }
}

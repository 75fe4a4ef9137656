//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq for Vector<N> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<const N: usize> PartialEq<[f32; N]> for Vector<N> {
    fn eq(&self, other: &[f32; N]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [f32; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> PartialEq<[f32]> for Vector<N> {
    fn eq(&self, other: &[f32]) -> bool {
        self.0.eq(other)
    }
}

impl<const N: usize> PartialEq<&[f32]> for Vector<N> {
    fn eq(&self, other: &&[f32]) -> bool {
        self.0.eq(*other)
    }
}

/// Vectors compare equal when every pair of corresponding elements does.
impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<const N: usize> UlpsEq for Vector<N> {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

/// Element-wise negation.
impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(f32::neg)
    }
}

/// Element-wise addition.
impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l + r)
    }
}

/// Element-wise addition.
impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |l, r| l - r)
    }
}

/// Element-wise subtraction.
impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Element-wise multiplication.
impl<const N: usize> Mul for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Element-wise multiplication.
impl<const N: usize> MulAssign for Vector<N> {
    fn mul_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs *= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Scalar-Vector multiplication (scaling).
impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        rhs * self
    }
}

/// Vector-Scalar multiplication (scaling).
impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Element-wise division.
impl<const N: usize> Div for Vector<N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.zip_with(rhs, |a, b| a / b)
    }
}

/// Element-wise division.
impl<const N: usize> DivAssign for Vector<N> {
    fn div_assign(&mut self, rhs: Self) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs /= rhs);
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_abs_diff_ne, assert_relative_eq, assert_ulps_eq, AbsDiffEq};

    use crate::*;

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, -5.0, 0.5);
        assert_eq!(a + b, vec3(5.0, -3.0, 3.5));
        assert_eq!(a - b, vec3(-3.0, 7.0, 2.5));
        assert_eq!(a * b, vec3(4.0, -10.0, 1.5));
        assert_eq!(a / vec3(2.0, 4.0, 1.0), vec3(0.5, 0.5, 3.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));

        assert_eq!(vec2(1.0, 2.0) - vec2(0.5, 0.5), vec2(0.5, 1.5));
        assert_eq!(
            vec4(1.0, 2.0, 3.0, 4.0) - Vec4f::splat(1.0),
            vec4(0.0, 1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn assign() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        assert_eq!(v, vec2(2.0, 3.0));
        v -= vec2(0.5, 0.5);
        assert_eq!(v, vec2(1.5, 2.5));
        v *= 2.0;
        assert_eq!(v, vec2(3.0, 5.0));
        v /= 2.0;
        assert_eq!(v, vec2(1.5, 2.5));
        v /= v;
        assert_eq!(v, vec2(1.0, 1.0));
    }

    #[test]
    fn compare() {
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v, [1.0, 2.0, 3.0]);
        assert_eq!([1.0, 2.0, 3.0], v);
        assert_eq!(v, &[1.0, 2.0, 3.0][..]);
        assert_ne!(v, vec3(1.0, 2.0, 3.5));
        assert_ne!(Vec2f::splat(f32::NAN), Vec2f::splat(f32::NAN));
    }

    #[test]
    fn approx_eq() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = a + Vec3f::splat(1e-5);
        assert_abs_diff_eq!(a, b, epsilon = 1e-4);
        assert_abs_diff_ne!(a, b, epsilon = 1e-6);
        assert_abs_diff_ne!(a, vec3(1.0, 2.0, 3.1), epsilon = 1e-2);
        assert_relative_eq!(vec2(1000.0, 0.0), vec2(1000.001, 0.0), max_relative = 1e-5);
        assert_ulps_eq!(vec2(1.0, 0.0), vec2(1.0 + f32::EPSILON, -0.0));
        assert!(!Vec2f::splat(f32::NAN).abs_diff_eq(&Vec2f::splat(f32::NAN), 1.0));
    }
}

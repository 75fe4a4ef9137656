use std::ops::{Index, Mul, MulAssign, Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Quat, Vec3f, Vec4f};

/// Hamilton product.
///
/// The resulting rotation applies `rhs` first, then `self`.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let [ax, ay, az, aw] = self.into_vec().into_array();
        let [bx, by, bz, bw] = rhs.into_vec().into_array();

        #[rustfmt::skip]
        let product = Quat::from_components(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        );
        product
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates a vector (see [`Quat::rotate`]).
impl Mul<Vec3f> for Quat {
    type Output = Vec3f;

    fn mul(self, rhs: Vec3f) -> Self::Output {
        self.rotate(rhs)
    }
}

/// Negates every component; the result represents the same rotation.
impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_vec(-self.into_vec())
    }
}

impl Index<usize> for Quat {
    type Output = f32;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_vec()[index]
    }
}

/// Compares the components; `q` and `-q` are *not* considered equal.
impl AbsDiffEq for Quat {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        Vec4f::abs_diff_eq(self.as_vec(), other.as_vec(), epsilon)
    }
}

impl RelativeEq for Quat {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        Vec4f::relative_eq(self.as_vec(), other.as_vec(), epsilon, max_relative)
    }
}

impl UlpsEq for Quat {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        Vec4f::ulps_eq(self.as_vec(), other.as_vec(), epsilon, max_ulps)
    }
}

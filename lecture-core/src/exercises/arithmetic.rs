//! Arithmetic helpers.

use std::ops::Neg;

/// Sign of `x`: `1`, `-1` or `0`.
///
/// ```
/// use lecture_core::exercises::sign;
///
/// assert_eq!(sign(2), 1);
/// assert_eq!(sign(-2), -1);
/// assert_eq!(sign(0), 0);
/// ```
pub fn sign<T: PartialOrd + Default>(x: T) -> i32 {
    let zero = T::default();
    if x > zero {
        1
    } else if x < zero {
        -1
    } else {
        0
    }
}

/// Linear interpolation between `x` (at `t = 0`) and `y` (at `t = 1`).
///
/// ```
/// use lecture_core::exercises::lerp;
///
/// assert_eq!(lerp(1.0, 3.0, 0.0), 1.0);
/// assert_eq!(lerp(1.0, 3.0, 1.0), 3.0);
/// assert_eq!(lerp(1.0, 3.0, 0.5), 2.0);
/// ```
pub fn lerp(x: f64, y: f64, t: f64) -> f64 {
    (1.0 - t) * x + t * y
}

pub fn negate<T: Neg<Output = T>>(x: T) -> T {
    -x
}

/// Absolute value of `x`.
pub fn abs<T: PartialOrd + Default + Neg<Output = T>>(x: T) -> T {
    if x < T::default() {
        -x
    } else {
        x
    }
}

//! Numeric pixel types.
//!
//! A pixel type is a primitive number. Integer and real pixel types differ in
//! how they accept foreign scalars: integer types convert them with integer
//! semantics (truncating, like a C cast), real types with real semantics
//! (integer pixels round to the nearest value when given a real).

use std::fmt::{Debug};

use num_traits::{Num};

/// Implemented by primitive numbers that can be stored in an [`Img`].
///
/// [`Img`]: super::Img
pub trait Pixel: 'static + Copy + Debug + PartialOrd + Num {
    /// Converts an integer, wrapping if it doesn't fit.
    fn from_integer(value: i64) -> Self;

    /// Converts a real. Integer types round to nearest and saturate.
    fn from_real(value: f64) -> Self;

    /// The value as an `i64`, truncating any fractional part.
    fn integer_long(self) -> i64;

    /// The value as an `f64`.
    fn real_double(self) -> f64;

    /// `-self`. Integer types negate in 64 bits and wrap on the way back.
    fn negate(self) -> Self;

    /// `self + u`. Integer types wrap on overflow.
    fn wrapping_add(self, u: Self) -> Self;

    /// `self - u`. Integer types wrap on overflow.
    fn wrapping_sub(self, u: Self) -> Self;

    /// `self * u`. Integer types wrap on overflow.
    fn wrapping_mul(self, u: Self) -> Self;

    /// `self / u`. Integer types wrap on overflow and panic if `u` is zero.
    fn wrapping_div(self, u: Self) -> Self;

    /// Construct a `Self` with the same type as `self`, from an integer.
    fn create_variable(value: i64) -> Self { Self::from_integer(value) }
}

/// A [`Pixel`] that holds whole numbers. Scalars of type `i32` and `i64` mix
/// with images of these.
pub trait IntegerPixel: Pixel {}

/// A [`Pixel`] that holds real numbers. Scalars of type `f32` and `f64` mix
/// with images of these.
pub trait RealPixel: Pixel {}

macro_rules! impl_integer_pixel {
    ($($t:ty),*) => {$(
        impl Pixel for $t {
            #[inline(always)]
            fn from_integer(value: i64) -> Self { value as $t }
            #[inline(always)]
            fn from_real(value: f64) -> Self { value.round() as $t }
            #[inline(always)]
            fn integer_long(self) -> i64 { self as i64 }
            #[inline(always)]
            fn real_double(self) -> f64 { self as f64 }
            #[inline(always)]
            fn negate(self) -> Self { (self as i64).wrapping_neg() as $t }
            #[inline(always)]
            fn wrapping_add(self, u: Self) -> Self { <$t>::wrapping_add(self, u) }
            #[inline(always)]
            fn wrapping_sub(self, u: Self) -> Self { <$t>::wrapping_sub(self, u) }
            #[inline(always)]
            fn wrapping_mul(self, u: Self) -> Self { <$t>::wrapping_mul(self, u) }
            #[inline(always)]
            fn wrapping_div(self, u: Self) -> Self { <$t>::wrapping_div(self, u) }
        }

        impl IntegerPixel for $t {}
    )*};
}

macro_rules! impl_real_pixel {
    ($($t:ty),*) => {$(
        impl Pixel for $t {
            #[inline(always)]
            fn from_integer(value: i64) -> Self { value as $t }
            #[inline(always)]
            fn from_real(value: f64) -> Self { value as $t }
            #[inline(always)]
            fn integer_long(self) -> i64 { self as i64 }
            #[inline(always)]
            fn real_double(self) -> f64 { self as f64 }
            #[inline(always)]
            fn negate(self) -> Self { -self }
            #[inline(always)]
            fn wrapping_add(self, u: Self) -> Self { self + u }
            #[inline(always)]
            fn wrapping_sub(self, u: Self) -> Self { self - u }
            #[inline(always)]
            fn wrapping_mul(self, u: Self) -> Self { self * u }
            #[inline(always)]
            fn wrapping_div(self, u: Self) -> Self { self / u }
        }

        impl RealPixel for $t {}
    )*};
}

impl_integer_pixel!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_real_pixel!(f32, f64);

// ----------------------------------------------------------------------------

/// A scalar that can be converted to a pixel of type `T`.
///
/// `i32` and `i64` convert to every [`IntegerPixel`]; `f32` and `f64` convert
/// to every [`RealPixel`].
pub trait Scalar<T: Pixel>: Copy {
    fn to_pixel(self) -> T;
}

impl<T: IntegerPixel> Scalar<T> for i32 {
    #[inline(always)]
    fn to_pixel(self) -> T { T::from_integer(self as i64) }
}

impl<T: IntegerPixel> Scalar<T> for i64 {
    #[inline(always)]
    fn to_pixel(self) -> T { T::from_integer(self) }
}

impl<T: RealPixel> Scalar<T> for f32 {
    #[inline(always)]
    fn to_pixel(self) -> T { T::from_real(self as f64) }
}

impl<T: RealPixel> Scalar<T> for f64 {
    #[inline(always)]
    fn to_pixel(self) -> T { T::from_real(self) }
}

// ----------------------------------------------------------------------------

/// Arithmetic between a pixel and a foreign scalar. The result has the pixel's
/// type.
///
/// Integer pixels compute in 64 bits and convert the result back with
/// [`Pixel::from_integer()`]; real pixels compute in `f64` and convert back
/// with [`Pixel::from_real()`].
///
/// ```
/// use imgview::PixelExt;
/// assert_eq!(1.0f64.plus(2.0f32), 3.0);
/// assert_eq!(10i8.divided_by(3i64), 3);
/// assert_eq!(3i32.minus_from(2), -1);
/// assert_eq!(100i8.plus(100), -56);
/// ```
pub trait PixelExt: Pixel {
    /// `self + value`.
    fn plus<S: Scalar<Self> + Widen>(self, value: S) -> Self { combine(self, value, i64::wrapping_add, |a, b| a + b) }

    /// `self - value`.
    fn minus<S: Scalar<Self> + Widen>(self, value: S) -> Self { combine(self, value, i64::wrapping_sub, |a, b| a - b) }

    /// `self * value`.
    fn times<S: Scalar<Self> + Widen>(self, value: S) -> Self { combine(self, value, i64::wrapping_mul, |a, b| a * b) }

    /// `self / value`.
    fn divided_by<S: Scalar<Self> + Widen>(self, value: S) -> Self { combine(self, value, i64::wrapping_div, |a, b| a / b) }

    /// `value - self`, computed in `Self`.
    fn minus_from<S: Scalar<Self>>(self, value: S) -> Self { value.to_pixel().wrapping_sub(self) }

    /// `value / self`, computed in `Self`.
    fn divided_into<S: Scalar<Self>>(self, value: S) -> Self { value.to_pixel().wrapping_div(self) }
}

impl<T: Pixel> PixelExt for T {}

/// A scalar that can be widened to `i64` or `f64` without loss.
pub trait Widen: Copy {
    fn widen(self) -> Wide;
}

/// A widened scalar.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Wide {
    Integer(i64),
    Real(f64),
}

impl Widen for i32 { fn widen(self) -> Wide { Wide::Integer(self as i64) } }
impl Widen for i64 { fn widen(self) -> Wide { Wide::Integer(self) } }
impl Widen for f32 { fn widen(self) -> Wide { Wide::Real(self as f64) } }
impl Widen for f64 { fn widen(self) -> Wide { Wide::Real(self) } }

fn combine<T: Pixel, S: Widen>(
    t: T,
    s: S,
    integer: impl Fn(i64, i64) -> i64,
    real: impl Fn(f64, f64) -> f64,
) -> T {
    match s.widen() {
        Wide::Integer(s) => T::from_integer(integer(t.integer_long(), s)),
        Wide::Real(s) => T::from_real(real(t.real_double(), s)),
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_real() {
        let rt = 1.0f64;
        assert_eq!(rt + rt, 2.0);
        assert_eq!(rt.plus(1.0), 2.0);
        assert_eq!(rt.plus(2.0f32), 3.0);
    }

    #[test]
    fn subtract_real() {
        let rt = 1.0f64;
        assert_eq!(rt.minus(2.0), -1.0);
        assert_eq!(rt.minus(3.0f32), -2.0);
        assert_eq!(rt.minus_from(2.0), 1.0);
        assert_eq!(rt.minus_from(3.0f32), 2.0);
    }

    #[test]
    fn div_real() {
        assert_eq!(1.0f64.divided_by(2.0), 0.5);
        assert_eq!(4.0f64.divided_into(2.0), 0.5);
        assert_eq!(9.0f64.divided_into(3.0f32), 1.0 / 3.0);
    }

    #[test]
    fn integer() {
        assert_eq!(1i64.plus(1), 2);
        assert_eq!(1i64.plus(2i64), 3);
        assert_eq!(1i32.minus(3i64), -2);
        assert_eq!(1i32.minus_from(3i64), 2);
        assert_eq!(1i16.times(3i64), 3);
        assert_eq!(10i8.divided_by(2), 5);
        assert_eq!(10i8.divided_by(3i64), 3);
        assert_eq!(10i8.divided_into(50), 5);
        assert_eq!(10i8.divided_into(37i64), 3);
    }

    #[test]
    fn wrap_and_round() {
        assert_eq!(i8::from_integer(300), 44);
        assert_eq!(u8::from_real(2.5), 3);
        assert_eq!(i32::from_real(-2.4), -2);
        assert_eq!(u8::from_real(300.0), 255);
        assert_eq!(5u8.negate(), 251);
        assert_eq!((-1i32).negate(), 1);
        assert_eq!(1.5f32.negate(), -1.5);
        assert_eq!(i64::create_variable(7), 7);
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(Pixel::wrapping_add(250u8, 10), 4);
        assert_eq!(3u8.minus_from(2), 255);
        assert_eq!(Pixel::wrapping_mul(16u8, 17), 16);
        assert_eq!(Pixel::wrapping_div(i8::MIN, -1), i8::MIN);
        assert_eq!(i64::MAX.plus(1), i64::MIN);
        assert_eq!(i64::MIN.minus(1i64), i64::MAX);
        assert_eq!(2.5f32.wrapping_add(1.0), 3.5);
    }
}

//! Pixel-wise arithmetic.
//!
//! For each arithmetic operator in [`std::ops`] this module contains a type of
//! the same name that cannot be instantiated and that implements [`Binary`].
//! For example, [`Add`] corresponds to [`std::ops::Add`]. This can be passed
//! as a type parameter to generic code, e.g. [`View::binary()`].
//!
//! The operators themselves are implemented for every [`View`] in this crate
//! by the macro [`impl_ops_for_view`]:
//!
//! - `view op rhs` copies `view` into a new [`Img`] and combines it with
//!   `rhs`. The result has the interval of `view`.
//! - `img op= rhs` combines in place.
//! - `scalar op view` combines a constant with `view`, the constant being the
//!   left operand. The constant is an `i32` for integer images and an `f64`
//!   for real images, so that literals such as `10 - &a` need no suffix.
//! - `-view` negates, and `!mask` inverts a `View<T=bool>`.
//!
//! `rhs` can be anything that implements [`IntoOperand`]: another `View` with
//! the same dimensions as `view`, or a scalar. Integer images take `i32` and
//! `i64` scalars; real images take `f32` and `f64` scalars.
//!
//! Integer arithmetic wraps on overflow, like the `wrapping_*` methods of the
//! primitive integers.
//!
//! ```
//! use imgview::{Img, View};
//! let a = Img::new(&[3], [1i16, 2, 3]);
//! assert_eq!((&a + 1).as_slice(), [2, 3, 4]);
//! assert_eq!((10 - &a).as_slice(), [9, 8, 7]);
//! assert_eq!((&a * &a).as_slice(), [1, 4, 9]);
//! assert_eq!((-&a).as_slice(), [-1, -2, -3]);
//! assert_eq!((2.0 * &Img::new(&[1], [1.5f64])).as_slice(), [3.0]);
//! ```
//!
//! [`View::binary()`]: super::View::binary()
//! [`Img`]: super::Img

use super::{Error, Result, Pixel, IntegerPixel, RealPixel, Scalar, View, ViewMut, Img, ImgView, ImgViewMut};
use super::error::{or_panic};

/// A function that combines two `T`s.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T> {
    fn call(t: T, u: T) -> T;
}

// ----------------------------------------------------------------------------

pub enum Add {}

impl<T: Pixel> Binary<T> for Add {
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.wrapping_add(u) }
}

// ----------------------------------------------------------------------------

pub enum Sub {}

impl<T: Pixel> Binary<T> for Sub {
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.wrapping_sub(u) }
}

// ----------------------------------------------------------------------------

pub enum Mul {}

impl<T: Pixel> Binary<T> for Mul {
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.wrapping_mul(u) }
}

// ----------------------------------------------------------------------------

pub enum Div {}

impl<T: Pixel> Binary<T> for Div {
    #[inline(always)]
    fn call(t: T, u: T) -> T { t.wrapping_div(u) }
}

// ----------------------------------------------------------------------------

/// The right-hand side of a pixel-wise operation.
pub enum Operand<'a, T> {
    /// The same value at every position.
    Constant(T),

    /// A `View` whose dimensions must match the left-hand side.
    View(&'a dyn View<T=T>),
}

/// Implemented by types that can be the right-hand side of a pixel-wise
/// operation on `View<T=T>`s.
///
/// The macro [`impl_ops_for_view`] implements this for `View`s. It is
/// implemented for `i32` and `i64` when `T` is an [`IntegerPixel`] and for
/// `f32` and `f64` when `T` is a [`RealPixel`].
pub trait IntoOperand<T> {
    /// Call `f` with `self` as an [`Operand`].
    fn with_operand<R>(self, f: impl FnOnce(Operand<'_, T>) -> R) -> R;
}

impl<'a, T> IntoOperand<T> for Operand<'a, T> {
    fn with_operand<R>(self, f: impl FnOnce(Operand<'_, T>) -> R) -> R { f(self) }
}

macro_rules! impl_scalar_operand {
    ($bound:ident: $($s:ty),*) => {$(
        impl<T: $bound> IntoOperand<T> for $s {
            #[inline(always)]
            fn with_operand<R>(self, f: impl FnOnce(Operand<'_, T>) -> R) -> R {
                f(Operand::Constant(Scalar::<T>::to_pixel(self)))
            }
        }
    )*};
}

impl_scalar_operand!(IntegerPixel: i32, i64);
impl_scalar_operand!(RealPixel: f32, f64);

// ----------------------------------------------------------------------------

/// Replace each element `t` of `target` with `B::call(t, u)`, where `u` is the
/// corresponding element of `rhs`.
///
/// If `rhs` is a `View` it must have the same number of dimensions and the
/// same size along each axis as `target`. The mins may differ: positions are
/// paired by their offset from each min.
pub fn loop_binary<B, T, W>(target: &mut W, rhs: Operand<'_, T>) -> Result<()> where
    B: Binary<T>,
    T: Pixel,
    W: ViewMut<T=T> + ?Sized,
{
    let interval = target.interval().clone();
    match rhs {
        Operand::Constant(u) => {
            interval.each_position(|pos| {
                let t = target.at_mut(pos);
                *t = B::call(*t, u);
            });
        },
        Operand::View(v) => {
            if v.num_dimensions() != interval.num_dimensions() {
                return Err(Error::DimensionMismatch {
                    expected: interval.num_dimensions(),
                    got: v.num_dimensions(),
                });
            }
            interval.check_dimensions(v.interval())?;
            let shift: Vec<i64> = (0..interval.num_dimensions())
                .map(|d| v.interval().min(d) - interval.min(d))
                .collect();
            let mut v_pos = vec![0; shift.len()];
            interval.each_position(|pos| {
                for (d, &x) in pos.iter().enumerate() { v_pos[d] = x + shift[d]; }
                let t = target.at_mut(pos);
                *t = B::call(*t, v.at(&v_pos));
            });
        },
    }
    Ok(())
}

/// An [`Img`] with the interval of `rhs` holding `B::call(constant, u)` for
/// each element `u` of `rhs`.
pub fn constant_binary<B, T, V>(constant: T, rhs: &V) -> Img<T> where
    B: Binary<T>,
    T: Pixel,
    V: View<T=T> + ?Sized,
{
    Img::from_interval_fn(rhs.interval().clone(), |pos| B::call(constant, rhs.at(pos)))
}

/// `-t` for each element `t` of `v`.
pub fn negate<V: View + ?Sized>(v: &V) -> Img<V::T> where V::T: Pixel {
    Img::from_interval_fn(v.interval().clone(), |pos| v.at(pos).negate())
}

/// `!b` for each element `b` of `v`.
pub fn not<V: View<T=bool> + ?Sized>(v: &V) -> Img<bool> {
    Img::from_interval_fn(v.interval().clone(), |pos| !v.at(pos))
}

// ----------------------------------------------------------------------------

/// Implement one of the [`std::ops`] arithmetic traits for a type that
/// implements [`View`].
///
/// You perhaps want to use [`impl_ops_for_view`] instead, which calls this.
///
/// The generic parameters of the type are listed in brackets, each followed by
/// a comma.
///
/// [`View`]: super::View
/// [`impl_ops_for_view`]: crate::impl_ops_for_view
#[macro_export]
macro_rules! impl_op_for_view {
    ($op:ident for [$($gen:tt)*] $v:ty { $method:ident }) => {
        impl<$($gen)* RHS_> std::ops::$op<RHS_> for $v where
            $v: $crate::View,
            <$v as $crate::RandomAccessible>::T: $crate::Pixel,
            RHS_: $crate::IntoOperand<<$v as $crate::RandomAccessible>::T>,
        {
            type Output = $crate::Img<<$v as $crate::RandomAccessible>::T>;
            #[track_caller]
            fn $method(self, rhs: RHS_) -> Self::Output {
                $crate::View::binary::<$crate::ops::$op>(&self, rhs)
                    .unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

/// Implement the arithmetic operators for a type that implements [`View`], and
/// for references to it. Also implements [`IntoOperand`], so that the type can
/// be the right-hand side of an operator.
///
/// ```
/// use imgview::{Interval, RandomAccessible, View, impl_ops_for_view};
///
/// /// The sum of the coordinates at every position.
/// pub struct Ramp(Interval);
///
/// impl RandomAccessible for Ramp {
///     type T = i64;
///     fn num_dimensions(&self) -> usize { self.0.num_dimensions() }
///     fn at(&self, pos: &[i64]) -> i64 { pos.iter().sum() }
/// }
///
/// impl View for Ramp {
///     fn interval(&self) -> &Interval { &self.0 }
/// }
///
/// impl_ops_for_view!([] Ramp);
///
/// let r = Ramp(Interval::from_dimensions(&[2, 2]));
/// assert_eq!((&r + &r).as_slice(), [0, 2, 2, 4]);
/// ```
///
/// [`View`]: super::View
#[macro_export]
macro_rules! impl_ops_for_view {
    ([$($gen:tt)*] $v:ty) => {
        $crate::impl_op_for_view! { Add for [$($gen)*] $v { add } }
        $crate::impl_op_for_view! { Sub for [$($gen)*] $v { sub } }
        $crate::impl_op_for_view! { Mul for [$($gen)*] $v { mul } }
        $crate::impl_op_for_view! { Div for [$($gen)*] $v { div } }
        $crate::impl_op_for_view! { Add for ['r_, $($gen)*] &'r_ $v { add } }
        $crate::impl_op_for_view! { Sub for ['r_, $($gen)*] &'r_ $v { sub } }
        $crate::impl_op_for_view! { Mul for ['r_, $($gen)*] &'r_ $v { mul } }
        $crate::impl_op_for_view! { Div for ['r_, $($gen)*] &'r_ $v { div } }

        impl<$($gen)*> std::ops::Neg for $v where
            $v: $crate::View,
            <$v as $crate::RandomAccessible>::T: $crate::Pixel,
        {
            type Output = $crate::Img<<$v as $crate::RandomAccessible>::T>;
            fn neg(self) -> Self::Output { $crate::ops::negate(&self) }
        }

        impl<'r_, $($gen)*> std::ops::Neg for &'r_ $v where
            $v: $crate::View,
            <$v as $crate::RandomAccessible>::T: $crate::Pixel,
        {
            type Output = $crate::Img<<$v as $crate::RandomAccessible>::T>;
            fn neg(self) -> Self::Output { $crate::ops::negate(self) }
        }

        impl<$($gen)*> std::ops::Not for $v where
            $v: $crate::View<T=bool>,
        {
            type Output = $crate::Img<bool>;
            fn not(self) -> Self::Output { $crate::ops::not(&self) }
        }

        impl<'r_, $($gen)*> std::ops::Not for &'r_ $v where
            $v: $crate::View<T=bool>,
        {
            type Output = $crate::Img<bool>;
            fn not(self) -> Self::Output { $crate::ops::not(self) }
        }

        impl<$($gen)*> $crate::IntoOperand<<$v as $crate::RandomAccessible>::T> for $v where
            $v: $crate::View,
        {
            fn with_operand<R_>(
                self,
                f: impl FnOnce($crate::ops::Operand<'_, <$v as $crate::RandomAccessible>::T>) -> R_,
            ) -> R_ {
                f($crate::ops::Operand::View(&self))
            }
        }

        impl<'r_, $($gen)*> $crate::IntoOperand<<$v as $crate::RandomAccessible>::T> for &'r_ $v where
            $v: $crate::View,
        {
            fn with_operand<R_>(
                self,
                f: impl FnOnce($crate::ops::Operand<'_, <$v as $crate::RandomAccessible>::T>) -> R_,
            ) -> R_ {
                f($crate::ops::Operand::View(self))
            }
        }
    };
}

// ----------------------------------------------------------------------------

macro_rules! impl_op_assign {
    ($op:ident, $method:ident, $b:ident for $v:ident<$($a:lifetime,)? T>) => {
        impl<$($a,)? T: Pixel, R: IntoOperand<T>> std::ops::$op<R> for $v<$($a,)? T> {
            #[track_caller]
            fn $method(&mut self, rhs: R) {
                or_panic(rhs.with_operand(|rhs| loop_binary::<$b, _, _>(self, rhs)));
            }
        }
    };
}

macro_rules! impl_op_assigns {
    ($v:ident<$($a:lifetime,)? T>) => {
        impl_op_assign!(AddAssign, add_assign, Add for $v<$($a,)? T>);
        impl_op_assign!(SubAssign, sub_assign, Sub for $v<$($a,)? T>);
        impl_op_assign!(MulAssign, mul_assign, Mul for $v<$($a,)? T>);
        impl_op_assign!(DivAssign, div_assign, Div for $v<$($a,)? T>);
    };
}

impl_op_assigns!(Img<T>);
impl_op_assigns!(ImgViewMut<'a, T>);

// ----------------------------------------------------------------------------

macro_rules! impl_scalar_lhs {
    ($bound:ident: $s:ty, [$($gen:tt)*] $v:ty) => {
        impl_scalar_lhs!(@op Add, add, $bound: $s, [$($gen)*] $v);
        impl_scalar_lhs!(@op Sub, sub, $bound: $s, [$($gen)*] $v);
        impl_scalar_lhs!(@op Mul, mul, $bound: $s, [$($gen)*] $v);
        impl_scalar_lhs!(@op Div, div, $bound: $s, [$($gen)*] $v);
    };
    (@op $op:ident, $method:ident, $bound:ident: $s:ty, [$($gen:tt)*] $v:ty) => {
        impl<$($gen)* T: $bound> std::ops::$op<$v> for $s {
            type Output = Img<T>;
            fn $method(self, rhs: $v) -> Img<T> {
                constant_binary::<$op, T, _>(Scalar::<T>::to_pixel(self), &rhs)
            }
        }
    };
}

macro_rules! impl_scalar_lhs_for_views {
    ($bound:ident: $($s:ty),*) => {$(
        impl_scalar_lhs!($bound: $s, [] Img<T>);
        impl_scalar_lhs!($bound: $s, ['a,] &'a Img<T>);
        impl_scalar_lhs!($bound: $s, ['a,] ImgView<'a, T>);
        impl_scalar_lhs!($bound: $s, ['a, 'b,] &'b ImgView<'a, T>);
    )*};
}

// One scalar type per family, so that a bare literal on the left infers it.
impl_scalar_lhs_for_views!(IntegerPixel: i32);
impl_scalar_lhs_for_views!(RealPixel: f64);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Interval, Strided, Mask, RandomAccessible, SL};

    fn ramp_f64() -> Img<f64> { Img::from_fn(&[3, 4], |pos| (pos[0] + 3 * pos[1]) as f64 + 1.0) }

    fn ramp_i32() -> Img<i32> { Img::from_fn(&[3, 4], |pos| (pos[0] + 3 * pos[1]) as i32 + 1) }

    /// Combine two views with `f` position by position, bypassing the
    /// operators.
    fn expected<T: Pixel>(a: &Img<T>, b: &Img<T>, f: impl Fn(T, T) -> T) -> Vec<T> {
        a.as_slice().iter().zip(b.as_slice()).map(|(&x, &y)| f(x, y)).collect()
    }

    #[test]
    fn plus() {
        let a = ramp_f64();
        let b = ramp_f64().apply(|x| x * 0.5);
        assert_eq!((&a + &b).as_slice(), expected(&a, &b, |x, y| x + y).as_slice());
        assert_eq!((&a + 2.0).as_slice(), expected(&a, &Img::filled(&[3, 4], 2.0), |x, y| x + y).as_slice());
        assert_eq!((2.0 + &a).as_slice(), (&a + 2.0).as_slice());
        let mut c = a.clone();
        c += &b;
        assert_eq!(c, &a + &b);
        c += 1.0;
        assert_eq!(c.at(&[0, 0]), 1.0 + 0.5 + 1.0);
    }

    #[test]
    fn minus() {
        let a = ramp_i32();
        let b = Img::filled(&[3, 4], 2);
        assert_eq!((&a - &b).as_slice(), expected(&a, &b, |x, y| x - y).as_slice());
        assert_eq!((&a - 2).as_slice(), (&a - &b).as_slice());
        assert_eq!((2 - &a).as_slice(), expected(&b, &a, |x, y| x - y).as_slice());
        assert_eq!((2 - a.view()).as_slice(), (2 - &a).as_slice());
        let mut c = a.clone();
        c -= 2i64;
        assert_eq!(c, &a - 2);
    }

    #[test]
    fn times() {
        let a = ramp_i32();
        assert_eq!((&a * &a).as_slice(), expected(&a, &a, |x, y| x * y).as_slice());
        assert_eq!((3 * &a).as_slice(), (&a * 3).as_slice());
        let mut c = a.clone();
        c *= &a;
        assert_eq!(c, &a * &a);
    }

    #[test]
    fn div() {
        let a = ramp_f64();
        let b = Img::filled(&[3, 4], 4.0);
        assert_eq!((&a / &b).as_slice(), expected(&a, &b, |x, y| x / y).as_slice());
        assert_eq!((&a / 4.0).as_slice(), (&a / &b).as_slice());
        assert_eq!((4.0 / &a).as_slice(), expected(&b, &a, |x, y| x / y).as_slice());
        let i = ramp_i32();
        assert_eq!((12 / &i).at(&[1, 1]), 12 / 5);
        let mut c = a.clone();
        c /= 2.0;
        assert_eq!(c.at(&[2, 3]), 6.0);
    }

    #[test]
    fn integer_overflow_wraps() {
        let a = Img::new(&[2], [250u8, 1]);
        assert_eq!((&a + 10).as_slice(), [4, 11]);
        assert_eq!((&a * 2).as_slice(), [244, 2]);
        assert_eq!((2 - &Img::new(&[1], [3u8])).as_slice(), [255]);
        assert_eq!((&Img::new(&[1], [i8::MIN]) - 1).as_slice(), [i8::MAX]);
        assert_eq!((&Img::new(&[1], [i32::MIN]) / -1).as_slice(), [i32::MIN]);
        let mut c = a.clone();
        c += &a;
        assert_eq!(c.as_slice(), [244, 2]);
    }

    #[test]
    fn scalar_on_the_left_infers_literals() {
        let a = Img::new(&[3], [1i16, 2, 3]);
        assert_eq!((10 - &a).as_slice(), [9, 8, 7]);
        assert_eq!((10 - a.view()).as_slice(), [9, 8, 7]);
        let k = 4;
        assert_eq!((k * &a).as_slice(), [4, 8, 12]);
        let r = Img::new(&[2], [1.0f32, 4.0]);
        assert_eq!((1.0 / &r).as_slice(), [1.0, 0.25]);
    }

    #[test]
    fn result_keeps_left_min() {
        let a = ramp_i32().translate(&[10, 20]).unwrap();
        let b = ramp_i32().translate(&[-5, 0]).unwrap();
        let c = &a + &b;
        assert_eq!(c.interval(), a.interval());
        assert_eq!(c[[10, 20]], 2);
        assert_eq!(c[[12, 23]], 24);
        let d = b.view() + &a;
        assert_eq!(d.interval(), b.interval());
    }

    #[test]
    fn mismatch() {
        let a = ramp_i32();
        let b = Img::<i32>::zeros(&[4, 3]);
        assert_eq!(
            a.add_view(&b).unwrap_err(),
            Error::SizeMismatch { axis: 0, expected: 3, got: 4 },
        );
        let c = Img::<i32>::zeros(&[3]);
        assert_eq!(
            a.sub_view(&c).unwrap_err(),
            Error::DimensionMismatch { expected: 2, got: 1 },
        );
        assert!(a.mul_view(a.view()).is_ok());
        assert!(a.div_view(1).is_ok());
    }

    #[test]
    #[should_panic(expected = "dimension 0 mismatch")]
    fn mismatch_panics() {
        let _ = ramp_i32() + Img::<i32>::zeros(&[4, 3]);
    }

    #[test]
    fn on_slices() {
        let mut a = ramp_i32();
        let row = a.slice((SL, 1)).unwrap().copy();
        {
            let mut v = a.slice_mut((SL, 0)).unwrap();
            v += &row;
            v *= 2;
        }
        assert_eq!(a.slice((SL, 0)).unwrap().copy().as_slice(), [10, 14, 18]);
        let b = a.view().invert_axis(1).unwrap() - a.view().invert_axis(1).unwrap();
        assert!(b.elements_equal(0).all_set());
        assert_eq!(b.interval(), &Interval::new([0, -3], [2, 0]).unwrap());
    }

    #[test]
    fn neg_and_not() {
        let a = Img::new(&[3], [1u8, 0, 255]);
        assert_eq!((-&a).as_slice(), [255, 0, 1]);
        let m = a.elements_equal(0);
        assert_eq!((!&m).as_slice(), [true, false, true]);
        assert_eq!((!m.view()).as_slice(), [true, false, true]);
        let f = Img::new(&[2], [1.5f32, -2.0]);
        assert_eq!((-f).as_slice(), [-1.5, 2.0]);
    }

    #[test]
    fn constant_operand() {
        let a = Img::new(&[2], [3u8, 4]);
        let b = a.binary::<Add>(Operand::Constant(200u8)).unwrap();
        assert_eq!(b.as_slice(), [203, 204]);
        assert_eq!((a.map(|x| x * 2) + 1).as_slice(), [7, 9]);
    }
}

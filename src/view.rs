use std::cmp::{Ordering};
use std::collections::{HashSet};
use std::hash::{Hash};

use super::{Error, Result, Interval, Positions, Pixel, Img};
use super::{Binary, IntoOperand, impl_ops_for_view};
use super::{Crop, Extension, Extended, Interpolator, Interpolant, NLinear, Rotated};

/// Implemented by types that compute a `Self::T` at every integer position
/// of an n-dimensional space. The space need not be bounded.
///
/// Bounded data additionally implements [`View`].
pub trait RandomAccessible {
    /// The element type.
    type T: Clone;

    /// The number of coordinates in a position.
    fn num_dimensions(&self) -> usize;

    /// Compute the element at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` has the wrong length, or if `Self` is bounded and
    /// `pos` is out of bounds.
    fn at(&self, pos: &[i64]) -> Self::T;

    /// Restrict `self` to `interval`, giving a [`View`].
    ///
    /// ```
    /// use imgview::{Img, View, RandomAccessible, Interval};
    /// let a = Img::new(&[5], [0, 1, 2, 3, 4]);
    /// let e = a.extend_zero();
    /// let c = e.view_interval(Interval::new([-1], [1]).unwrap()).unwrap();
    /// assert_eq!(c.iter().collect::<Vec<_>>(), [0, 0, 1]);
    /// ```
    fn view_interval(self, interval: Interval) -> Result<Crop<Self>> where Self: Sized {
        Crop::new(self, interval)
    }

    /// Copy the elements of `self` into `target`, at the positions of
    /// `target`.
    fn burn_in<W: ViewMut<T=Self::T> + ?Sized>(&self, target: &mut W) -> Result<()> where Self: Sized {
        if target.num_dimensions() != self.num_dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.num_dimensions(),
                got: target.num_dimensions(),
            });
        }
        let interval = target.interval().clone();
        interval.each_position(|pos| { *target.at_mut(pos) = self.at(pos); });
        Ok(())
    }

    /// Copy the elements of `self` at the positions of `interval` into a new
    /// [`Img`].
    fn burn_in_interval(&self, interval: &Interval) -> Result<Img<Self::T>> where Self: Sized {
        if interval.num_dimensions() != self.num_dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.num_dimensions(),
                got: interval.num_dimensions(),
            });
        }
        Ok(Img::from_interval_fn(interval.clone(), |pos| self.at(pos)))
    }

    /// Creates a real-valued accessor that samples `self` with
    /// `interpolator`.
    fn interpolate<I: Interpolator<Self>>(self, interpolator: I) -> Interpolant<Self, I> where Self: Sized {
        Interpolant::new(self, interpolator)
    }
}

impl<V: RandomAccessible + ?Sized> RandomAccessible for &V {
    type T = V::T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { V::num_dimensions(self) }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> Self::T { V::at(self, pos) }
}

impl<V: RandomAccessible + ?Sized> RandomAccessible for &mut V {
    type T = V::T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { V::num_dimensions(self) }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> Self::T { V::at(self, pos) }
}

// ----------------------------------------------------------------------------

/// A [`RandomAccessible`] that is defined only on an [`Interval`].
///
/// `View`s are lightweight. Many of them alias the storage of an [`Img`] and
/// are cheap to create; others compute their elements on demand, like an
/// [`Iterator`]. Call [`copy()`] to materialise a `View` into an `Img`.
///
/// ### Arithmetic
///
/// All implementations of `View` defined in this crate whose elements are
/// [`Pixel`]s define `+`, `-`, `*` and `/` to mean pixel-wise arithmetic. The
/// right-hand side can be another `View` with the same dimensions (its min
/// can differ) or a scalar. The result is a new `Img` with the interval of
/// the left-hand side.
///
/// ```
/// use imgview::{Img, View};
/// let a = Img::new(&[3], [1.0, 2.0, 3.0]);
/// let b = &a * 2.0 + &a;
/// assert_eq!(b.as_slice(), [3.0, 6.0, 9.0]);
/// ```
///
/// You are encouraged to define your `View`s similarly, using the macro
/// [`impl_ops_for_view`].
///
/// ### Ownership
///
/// If `V` implements `View`, then so do `&V` and `&mut V`. `&dyn View<T=T>`
/// is also a `View`; all methods that take type parameters require `Self:
/// Sized`.
///
/// [`copy()`]: Self::copy()
pub trait View: RandomAccessible {
    /// The positions at which `self` is defined.
    fn interval(&self) -> &Interval;

    /// The number of elements.
    fn len(&self) -> usize { self.interval().len() }

    fn is_empty(&self) -> bool { self.interval().is_empty() }

    fn dimensions(&self) -> Vec<u64> { self.interval().dimensions() }

    fn min_as_longs(&self) -> Vec<i64> { self.interval().min_as_longs() }

    fn max_as_longs(&self) -> Vec<i64> { self.interval().max_as_longs() }

    fn min_as_ints(&self) -> Vec<i32> { self.interval().min_as_ints() }

    fn max_as_ints(&self) -> Vec<i32> { self.interval().max_as_ints() }

    fn is_zero_min(&self) -> bool { self.interval().is_zero_min() }

    /// Materialises `self` into an [`Img`] with the same interval.
    ///
    /// This method calls [`self.at()`] exactly once for each position.
    ///
    /// [`self.at()`]: RandomAccessible::at()
    fn copy(&self) -> Img<Self::T> {
        Img::from_interval_fn(self.interval().clone(), |pos| self.at(pos))
    }

    /// Apply `f` to every element in flat order, i.e. with axis 0 varying
    /// fastest.
    ///
    /// ```
    /// use imgview::{Img, View};
    /// let a = Img::new(&[5], [0, 1, 2, 3, 4]);
    /// let mut total = 0;
    /// a.each(|x| { total += x; });
    /// assert_eq!(total, 10);
    /// ```
    fn each(&self, mut f: impl FnMut(Self::T)) where Self: Sized {
        self.interval().each_position(|pos| f(self.at(pos)));
    }

    /// An [`Iterator`] over the elements in flat order.
    fn iter(&self) -> Iter<'_, Self> where Self: Sized {
        Iter {view: self, positions: self.interval().positions()}
    }

    /// Creates a `View` that applies `f` to the elements of `Self`.
    ///
    /// There is no guarantee that the elements will be passed to `f` in a
    /// particular order, only once, or at all.
    ///
    /// ```
    /// use imgview::{Img, View};
    /// let a = Img::new(&[5], [0, 1, 2, 3, 4]).map(|x| x * x).copy();
    /// assert_eq!(a.as_slice(), [0, 1, 4, 9, 16]);
    /// ```
    fn map<U: Clone, F>(self, f: F) -> Map<Self, F> where
        Self: Sized,
        F: Fn(Self::T) -> U,
    {
        Map(self, f)
    }

    /// Creates a `View` that converts every element to another pixel type,
    /// through `f64`.
    fn convert_to<U: Pixel>(self) -> Map<Self, fn(Self::T) -> U> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.map(convert::<Self::T, U> as fn(Self::T) -> U)
    }

    /// Creates a `View` of pairs. `other` must have the same dimensions as
    /// `self`; positions are paired by their offset from each min. The result
    /// has the interval of `self`.
    ///
    /// ```
    /// use imgview::{Img, RandomAccessible, View};
    /// let a = Img::new(&[2], ["apple", "body"]);
    /// let b = Img::new(&[2], [1, 2]).translate(&[5]).unwrap();
    /// let ab = a.zip(b).unwrap();
    /// assert_eq!(ab.at(&[1]), ("body", 2));
    /// ```
    fn zip<W: View>(self, other: W) -> Result<Zip<Self, W>> where Self: Sized {
        Zip::new(self, other)
    }

    // ------------------------------------------------------------------------

    /// An `Img<bool>` holding `pred(t)` for every element `t`.
    fn test_elements(&self, pred: impl Fn(Self::T) -> bool) -> Img<bool> where Self: Sized {
        Img::from_interval_fn(self.interval().clone(), |pos| pred(self.at(pos)))
    }

    /// An `Img<bool>` that is `true` where the element equals `value`.
    fn elements_equal(&self, value: Self::T) -> Img<bool> where
        Self: Sized,
        Self::T: PartialEq,
    {
        self.test_elements(|t| t == value)
    }

    /// An `Img<bool>` that is `true` where `self` and `other` agree. The
    /// result has the interval of `self`.
    fn elements_equal_to<W: View<T=Self::T> + ?Sized>(&self, other: &W) -> Result<Img<bool>> where
        Self: Sized,
        Self::T: PartialEq,
    {
        self.interval().check_dimensions(other.interval())?;
        let shift: Vec<i64> = (0..self.num_dimensions())
            .map(|d| other.interval().min(d) - self.interval().min(d))
            .collect();
        let mut other_pos = vec![0; shift.len()];
        Ok(Img::from_interval_fn(self.interval().clone(), |pos| {
            for (d, &x) in pos.iter().enumerate() { other_pos[d] = x + shift[d]; }
            self.at(pos) == other.at(&other_pos)
        }))
    }

    /// An `Img<i8>` holding the sign of each element's comparison with
    /// `reference`: `1` where the element is larger, `-1` where it is smaller
    /// and `0` otherwise.
    ///
    /// ```
    /// use imgview::{Img, View};
    /// let a = Img::new(&[3], [1, 5, 9]);
    /// assert_eq!(a.compare_elements_to(5).as_slice(), [-1, 0, 1]);
    /// assert_eq!(a.elements_larger_than(5).as_slice(), [false, false, true]);
    /// ```
    fn compare_elements_to(&self, reference: Self::T) -> Img<i8> where
        Self: Sized,
        Self::T: PartialOrd,
    {
        Img::from_interval_fn(self.interval().clone(), |pos| {
            match self.at(pos).partial_cmp(&reference) {
                Some(Ordering::Less) => -1,
                Some(Ordering::Greater) => 1,
                _ => 0,
            }
        })
    }

    fn elements_larger_than(&self, reference: Self::T) -> Img<bool> where
        Self: Sized,
        Self::T: PartialOrd,
    {
        self.compare_elements_to(reference).elements_equal(1)
    }

    fn elements_smaller_than(&self, reference: Self::T) -> Img<bool> where
        Self: Sized,
        Self::T: PartialOrd,
    {
        self.compare_elements_to(reference).elements_equal(-1)
    }

    fn elements_larger_than_or_equal(&self, reference: Self::T) -> Img<bool> where
        Self: Sized,
        Self::T: PartialOrd,
    {
        self.compare_elements_to(reference).test_elements(|c| c >= 0)
    }

    fn elements_smaller_than_or_equal(&self, reference: Self::T) -> Img<bool> where
        Self: Sized,
        Self::T: PartialOrd,
    {
        self.compare_elements_to(reference).test_elements(|c| c <= 0)
    }

    /// The distinct elements, in the order they are first seen.
    ///
    /// ```
    /// use imgview::{Img, View};
    /// let a = Img::new(&[2, 3], [3, 1, 3, 2, 1, 1]);
    /// assert_eq!(a.unique(), [3, 1, 2]);
    /// ```
    fn unique(&self) -> Vec<Self::T> where
        Self: Sized,
        Self::T: Hash + Eq,
    {
        let mut seen = HashSet::new();
        let mut ret = Vec::new();
        self.each(|t| if seen.insert(t.clone()) { ret.push(t); });
        ret
    }

    /// Like [`unique()`](View::unique()), for elements that are only
    /// `PartialEq`, such as reals. Takes time proportional to the number of
    /// elements times the number of distinct elements.
    ///
    /// ```
    /// use imgview::{Img, View};
    /// let a = Img::new(&[4], [0.5, 2.0, 0.5, -1.0]);
    /// assert_eq!(a.unique_by_eq(), [0.5, 2.0, -1.0]);
    /// ```
    fn unique_by_eq(&self) -> Vec<Self::T> where
        Self: Sized,
        Self::T: PartialEq,
    {
        let mut ret = Vec::new();
        self.each(|t| if !ret.contains(&t) { ret.push(t); });
        ret
    }

    /// Returns `true` if `pred` holds for every element.
    fn all(&self, pred: impl FnMut(Self::T) -> bool) -> bool where Self: Sized {
        self.iter().all(pred)
    }

    /// Returns `true` if `pred` holds for some element.
    fn any(&self, pred: impl FnMut(Self::T) -> bool) -> bool where Self: Sized {
        self.iter().any(pred)
    }

    /// Apply `f` to every element as an `f64`, storing the results in a new
    /// `Img<f64>`.
    fn apply(&self, f: impl Fn(f64) -> f64) -> Img<f64> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.apply_as(f)
    }

    /// Apply `f` to every element as an `f64`, storing the results in a new
    /// `Img<U>`.
    fn apply_as<U: Pixel>(&self, f: impl Fn(f64) -> f64) -> Img<U> where
        Self: Sized,
        Self::T: Pixel,
    {
        Img::from_interval_fn(self.interval().clone(), |pos| U::from_real(f(self.at(pos).real_double())))
    }

    /// `e` raised to the power of every element.
    fn exp(&self) -> Img<f64> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.apply(f64::exp)
    }

    // ------------------------------------------------------------------------

    /// Combines `self` with `rhs` pixel-wise using `B`, giving a new [`Img`]
    /// with the interval of `self`.
    ///
    /// This is what the arithmetic operators call. Unlike the operators, it
    /// reports a dimension mismatch as an error.
    fn binary<B: Binary<Self::T>>(&self, rhs: impl IntoOperand<Self::T>) -> Result<Img<Self::T>> where
        Self: Sized,
        Self::T: Pixel,
    {
        let mut ret = self.copy();
        rhs.with_operand(|rhs| super::ops::loop_binary::<B, _, _>(&mut ret, rhs))?;
        Ok(ret)
    }

    /// `self + rhs`, reporting mismatched dimensions as an error.
    fn add_view(&self, rhs: impl IntoOperand<Self::T>) -> Result<Img<Self::T>> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.binary::<super::ops::Add>(rhs)
    }

    /// `self - rhs`, reporting mismatched dimensions as an error.
    fn sub_view(&self, rhs: impl IntoOperand<Self::T>) -> Result<Img<Self::T>> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.binary::<super::ops::Sub>(rhs)
    }

    /// `self * rhs`, reporting mismatched dimensions as an error.
    fn mul_view(&self, rhs: impl IntoOperand<Self::T>) -> Result<Img<Self::T>> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.binary::<super::ops::Mul>(rhs)
    }

    /// `self / rhs`, reporting mismatched dimensions as an error.
    fn div_view(&self, rhs: impl IntoOperand<Self::T>) -> Result<Img<Self::T>> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.binary::<super::ops::Div>(rhs)
    }

    // ------------------------------------------------------------------------

    /// Extend `self` to the whole space, filling positions outside
    /// [`interval()`] according to `mode`.
    ///
    /// [`interval()`]: Self::interval()
    fn extend(self, mode: Extension<Self::T>) -> Extended<Self> where Self: Sized {
        Extended::new(self, mode)
    }

    /// Extend `self` with zeros.
    fn extend_zero(self) -> Extended<Self> where Self: Sized {
        self.extend(Extension::Zero)
    }

    /// Extend `self` with a constant.
    fn extend_value(self, value: Self::T) -> Extended<Self> where Self: Sized {
        self.extend(Extension::Value(value))
    }

    /// Extend `self` by repeating its border elements.
    fn extend_border(self) -> Extended<Self> where Self: Sized {
        self.extend(Extension::Border)
    }

    /// Extend `self` by mirroring it about its border elements.
    fn extend_mirror(self) -> Extended<Self> where Self: Sized {
        self.extend(Extension::Mirror)
    }

    /// Rotate `self` by `angle` degrees about `axis`, around the center of
    /// its interval.
    ///
    /// Positions outside `self` read as zero, and sampling is n-linear. See
    /// [`rotate_with()`] for the general form.
    ///
    /// [`rotate_with()`]: Self::rotate_with()
    fn rotate(self, angle: f64, axis: usize) -> Result<Rotated<Interpolant<Extended<Self>, NLinear>>> where
        Self: Sized,
        Self::T: Pixel,
    {
        self.rotate_with(angle, axis, Extension::Zero, NLinear)
    }

    /// Rotate `self` by `angle` degrees about `axis`, around the center of
    /// its interval.
    ///
    /// `self` must be 2- or 3-dimensional. A 2-dimensional `self` is rotated
    /// in its plane and `axis` must be `2`. The result is a lazy `View` whose
    /// interval is the smallest one containing the rotated corners of
    /// `self`.
    fn rotate_with<I>(
        self,
        angle: f64,
        axis: usize,
        extension: Extension<Self::T>,
        interpolator: I,
    ) -> Result<Rotated<Interpolant<Extended<Self>, I>>> where
        Self: Sized,
        Self::T: Pixel,
        I: Interpolator<Extended<Self>>,
    {
        let interval = self.interval().clone();
        Rotated::new(self.extend(extension).interpolate(interpolator), &interval, angle, axis)
    }
}

impl<V: View + ?Sized> View for &V {
    #[inline(always)]
    fn interval(&self) -> &Interval { V::interval(self) }
}

impl<V: View + ?Sized> View for &mut V {
    #[inline(always)]
    fn interval(&self) -> &Interval { V::interval(self) }
}

fn convert<T: Pixel, U: Pixel>(t: T) -> U { U::from_real(t.real_double()) }

// ----------------------------------------------------------------------------

/// A [`View`] that is backed by memory.
pub trait ViewMut: View {
    /// Mutably borrow the element at `pos`.
    fn at_mut(&mut self, pos: &[i64]) -> &mut Self::T;

    /// Apply `f` to every element in flat order.
    fn each_mut(&mut self, mut f: impl FnMut(&mut Self::T)) where Self: Sized {
        let interval = self.interval().clone();
        interval.each_position(|pos| f(self.at_mut(pos)));
    }

    /// Overwrite every element with `value`.
    fn fill(&mut self, value: Self::T) where Self: Sized {
        self.each_mut(|t| *t = value.clone());
    }
}

impl<V: ViewMut + ?Sized> ViewMut for &mut V {
    #[inline(always)]
    fn at_mut(&mut self, pos: &[i64]) -> &mut Self::T { V::at_mut(self, pos) }
}

// ----------------------------------------------------------------------------

/// Methods of `View<T=bool>`s, which act as masks.
///
/// ```
/// use imgview::{Img, View, Mask};
/// let a = Img::new(&[4], [1, 2, 3, 4]);
/// assert!(a.elements_larger_than(0).all_set());
/// assert!(!a.elements_larger_than(3).all_set());
/// assert!((!a.elements_larger_than(3)).any_set());
/// ```
pub trait Mask: View<T=bool> {
    /// Returns `true` if every element is `true`.
    fn all_set(&self) -> bool where Self: Sized { self.all(|b| b) }

    /// Returns `true` if some element is `true`.
    fn any_set(&self) -> bool where Self: Sized { self.any(|b| b) }
}

impl<V: View<T=bool>> Mask for V {}

// ----------------------------------------------------------------------------

/// The return type of [`View::iter()`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    view: &'a V,
    positions: Positions<'a>,
}

impl<'a, V: View> Iterator for Iter<'a, V> {
    type Item = V::T;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions.next().map(|pos| self.view.at(&pos))
    }
}

// ----------------------------------------------------------------------------

/// The return type of [`View::map()`].
#[derive(Debug, Copy, Clone)]
pub struct Map<V, F>(V, F);

impl<V: View, U: Clone, F: Fn(V::T) -> U> RandomAccessible for Map<V, F> {
    type T = U;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { self.0.num_dimensions() }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> Self::T { self.1(self.0.at(pos)) }
}

impl<V: View, U: Clone, F: Fn(V::T) -> U> View for Map<V, F> {
    #[inline(always)]
    fn interval(&self) -> &Interval { self.0.interval() }
}

impl_ops_for_view!([V, F,] Map<V, F>);

// ----------------------------------------------------------------------------

/// The return type of [`View::zip()`].
#[derive(Debug, Clone)]
pub struct Zip<V, W> {
    v: V,
    w: W,
    shift: Box<[i64]>,
}

impl<V: View, W: View> Zip<V, W> {
    fn new(v: V, w: W) -> Result<Self> {
        v.interval().check_dimensions(w.interval())?;
        let shift = (0..v.num_dimensions())
            .map(|d| w.interval().min(d) - v.interval().min(d))
            .collect();
        Ok(Self {v, w, shift})
    }
}

impl<V: View, W: View> RandomAccessible for Zip<V, W> {
    type T = (V::T, W::T);

    fn num_dimensions(&self) -> usize { self.v.num_dimensions() }

    fn at(&self, pos: &[i64]) -> Self::T {
        let w_pos: Vec<i64> = pos.iter().zip(self.shift.iter()).map(|(x, s)| x + s).collect();
        (self.v.at(pos), self.w.at(&w_pos))
    }
}

impl<V: View, W: View> View for Zip<V, W> {
    fn interval(&self) -> &Interval { self.v.interval() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Img<i32> { Img::from_fn(&[3, 2], |pos| (pos[0] + 10 * pos[1]) as i32) }

    #[test]
    fn unique_keeps_first_seen_order() {
        let a = Img::from_fn(&[300, 200], |pos| ((7 * pos[0] + pos[1]) % 5) as u8);
        assert_eq!(a.unique(), [0, 2, 4, 1, 3]);
        let mask = (&a).map(|x| x > 2);
        assert_eq!(mask.unique(), [false, true]);
        let b = Img::from_fn(&[3, 2], |pos| ((pos[0] % 2) as f64) * 0.5);
        assert_eq!(b.unique_by_eq(), [0.0, 0.5]);
        assert_eq!(Img::<i32>::zeros(&[0]).unique(), Vec::<i32>::new());
    }

    #[test]
    fn copy_keeps_min() {
        let a = ramp().translate(&[1, -1]).unwrap();
        let b = a.map(|x| x + 1).copy();
        assert_eq!(b.interval(), &Interval::new([1, -1], [3, 0]).unwrap());
        assert_eq!(b.as_slice(), [1, 2, 3, 11, 12, 13]);
    }

    #[test]
    fn iter_is_flat_order() {
        assert_eq!(ramp().iter().collect::<Vec<_>>(), [0, 1, 2, 10, 11, 12]);
        assert_eq!((&ramp()).len(), 6);
    }

    #[test]
    fn dyn_view() {
        let a = ramp();
        let v: &dyn View<T=i32> = &a;
        assert_eq!(v.at(&[2, 1]), 12);
        assert_eq!(v.copy().as_slice(), a.as_slice());
        assert_eq!(v.dimensions(), [3, 2]);
    }

    #[test]
    fn predicates() {
        let a = ramp();
        assert_eq!(a.elements_equal(11).as_slice(), [false, false, false, false, true, false]);
        assert_eq!(a.elements_smaller_than(2).as_slice(), [true, true, false, false, false, false]);
        assert_eq!(a.elements_larger_than_or_equal(11).as_slice(), [false, false, false, false, true, true]);
        assert_eq!(a.elements_smaller_than_or_equal(1).as_slice(), [true, true, false, false, false, false]);
        assert!(a.all(|x| x >= 0));
        assert!(!a.any(|x| x > 12));
        assert!(a.test_elements(|x| x % 10 < 3).all_set());
    }

    #[test]
    fn elements_equal_to() {
        let a = ramp();
        let mut b = ramp().translate(&[4, 4]).unwrap();
        b[[5, 5]] = 0;
        let eq = a.elements_equal_to(&b).unwrap();
        assert_eq!(eq.interval(), a.interval());
        assert_eq!(eq.as_slice(), [true, true, true, true, false, true]);
        let c = Img::<i32>::zeros(&[2, 3]);
        assert_eq!(
            a.elements_equal_to(&c).unwrap_err(),
            Error::SizeMismatch { axis: 0, expected: 3, got: 2 },
        );
    }

    #[test]
    fn apply_and_convert() {
        let a = Img::new(&[3], [0u8, 1, 2]);
        let e = a.exp();
        assert_eq!(e.at(&[0]), 1.0);
        assert!((e.at(&[2]) - 2f64.exp()).abs() < 1e-12);
        let h: Img<i16> = a.apply_as(|x| x * 100.5);
        assert_eq!(h.as_slice(), [0, 101, 201]);
        let f = a.convert_to::<f32>().copy();
        assert_eq!(f.as_slice(), [0.0, 1.0, 2.0]);
    }

    #[test]
    fn burn_in() {
        let a = ramp();
        let mut target = Img::<i32>::zeros(&[2, 2]);
        a.burn_in(&mut target).unwrap();
        assert_eq!(target.as_slice(), [0, 1, 10, 11]);
        let b = (&a).extend_zero().burn_in_interval(&Interval::new([2, 1], [3, 1]).unwrap()).unwrap();
        assert_eq!(b.as_slice(), [12, 0]);
        assert!(a.burn_in_interval(&Interval::from_dimensions(&[2])).is_err());
    }

    #[test]
    fn fill() {
        let mut a = ramp();
        a.view_mut().fill(7);
        assert!(a.elements_equal(7).all_set());
    }
}

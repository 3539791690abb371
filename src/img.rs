use super::{Result, Interval, Layout, Pixel, RandomAccessible, View, ViewMut, IntoSelectors, impl_ops_for_view};

/// A dense n-dimensional image of `T`s.
///
/// The elements are stored in a [`Box<[T]>`] with axis 0 varying fastest.
/// The interval of an `Img` need not start at the origin; see
/// [`translate()`].
///
/// [`translate()`]: Self::translate()
#[derive(Debug, Clone, PartialEq)]
pub struct Img<T> {
    layout: Layout,
    items: Box<[T]>,
}

impl<T> Img<T> {
    fn new_inner(interval: Interval, items: Box<[T]>) -> Self {
        assert_eq!(interval.len(), items.len(), "Wrong number of items");
        Self {layout: Layout::dense(interval), items}
    }

    /// Constructs a zero-min `Img` with dimensions `dims` given its elements.
    ///
    /// # Panics
    ///
    /// Panics if the number of elements is not the product of `dims`.
    ///
    /// ```
    /// use imgview::{Img};
    /// let a = Img::new(&[3, 2], [0.0, 1.0, -1.0, 2.0, 3.0, -2.0]);
    /// assert_eq!(a[[0, 0]], 0.0);
    /// assert_eq!(a[[1, 0]], 1.0);
    /// assert_eq!(a[[2, 0]], -1.0);
    /// assert_eq!(a[[0, 1]], 2.0);
    /// assert_eq!(a[[1, 1]], 3.0);
    /// assert_eq!(a[[2, 1]], -2.0);
    /// ```
    pub fn new(dims: &[u64], items: impl Into<Box<[T]>>) -> Self {
        Self::new_inner(Interval::from_dimensions(dims), items.into())
    }

    /// Construct a zero-min `Img` with dimensions `dims` from a function of
    /// the position.
    ///
    /// ```
    /// use imgview::{Img};
    /// let a = Img::from_fn(&[10], |pos| pos[0] % 3 == 0);
    /// assert_eq!(a.as_slice(), [true, false, false, true, false, false, true, false, false, true]);
    /// ```
    pub fn from_fn(dims: &[u64], f: impl FnMut(&[i64]) -> T) -> Self {
        Self::from_interval_fn(Interval::from_dimensions(dims), f)
    }

    /// Construct an `Img` covering `interval` from a function of the
    /// position.
    pub fn from_interval_fn(interval: Interval, mut f: impl FnMut(&[i64]) -> T) -> Self {
        let mut items = Vec::with_capacity(interval.len());
        interval.each_position(|pos| items.push(f(pos)));
        Self::new_inner(interval, items.into())
    }

    /// Returns the elements in flat order.
    pub fn as_slice(&self) -> &[T] { &self.items }

    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.items }

    /// Returns the raw elements.
    pub fn into_raw(self) -> Box<[T]> { self.items }

    pub fn layout(&self) -> &Layout { &self.layout }

    /// Shift the interval of `self` by `offset` without moving any of the
    /// elements.
    pub fn translate(self, offset: &[i64]) -> Result<Self> {
        Ok(Self {layout: self.layout.translate(offset)?, items: self.items})
    }

    /// Shift the interval of `self` to start at the origin.
    pub fn zero_min(self) -> Self {
        Self {layout: self.layout.zero_min(), items: self.items}
    }

    /// Borrow `self` as an [`ImgView`].
    pub fn view(&self) -> ImgView<'_, T> {
        ImgView {layout: self.layout.clone(), items: &self.items}
    }

    /// Mutably borrow `self` as an [`ImgViewMut`].
    pub fn view_mut(&mut self) -> ImgViewMut<'_, T> {
        ImgViewMut {layout: self.layout.clone(), items: &mut self.items}
    }

    /// Select part of `self`. See [`Strided::slice()`].
    pub fn slice(&self, selectors: impl IntoSelectors) -> Result<ImgView<'_, T>> {
        self.view().slice(selectors)
    }

    /// Mutably select part of `self`. See [`Strided::slice()`].
    pub fn slice_mut(&mut self, selectors: impl IntoSelectors) -> Result<ImgViewMut<'_, T>> {
        self.view_mut().slice(selectors)
    }
}

impl<T: Clone> Img<T> {
    /// A zero-min `Img` with every element equal to `value`.
    pub fn filled(dims: &[u64], value: T) -> Self {
        Self::from_fn(dims, |_| value.clone())
    }
}

impl<T: Pixel> Img<T> {
    /// A zero-min `Img` of zeros.
    pub fn zeros(dims: &[u64]) -> Self { Self::filled(dims, T::zero()) }
}

impl<T> std::convert::AsRef<[T]> for Img<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Img<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T: Clone> RandomAccessible for Img<T> {
    type T = T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { self.layout.num_dimensions() }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> T { self.items[self.layout.location(pos)].clone() }
}

impl<T: Clone> View for Img<T> {
    #[inline(always)]
    fn interval(&self) -> &Interval { self.layout.interval() }

    fn copy(&self) -> Img<T> { self.clone() }
}

impl<T: Clone> ViewMut for Img<T> {
    #[inline(always)]
    fn at_mut(&mut self, pos: &[i64]) -> &mut T { &mut self.items[self.layout.location(pos)] }
}

impl_ops_for_view!([T,] Img<T>);

// ----------------------------------------------------------------------------

/// Implemented by views that alias the elements of an [`Img`] through a
/// [`Layout`]. Every method returns a view of the same elements; none of
/// them copies anything.
///
/// `Img` itself does not implement `Strided`; call [`Img::view()`] or
/// [`Img::view_mut()`] first.
pub trait Strided: Sized {
    fn layout(&self) -> &Layout;

    /// Replace the layout of `self`. `layout` must only address elements of
    /// the underlying buffer.
    #[doc(hidden)]
    fn with_layout(self, layout: Layout) -> Self;

    /// Fix axis `axis` at `pos`, removing the axis.
    ///
    /// ```
    /// use imgview::{Img, View, Strided};
    /// let a = Img::from_fn(&[3, 4], |pos| pos[0] + 10 * pos[1]);
    /// let row = a.view().hyper_slice(1, 2).unwrap();
    /// assert_eq!(row.iter().collect::<Vec<_>>(), [20, 21, 22]);
    /// ```
    fn hyper_slice(self, axis: usize, pos: i64) -> Result<Self> {
        let layout = self.layout().hyper_slice(axis, pos)?;
        Ok(self.with_layout(layout))
    }

    /// Shift every coordinate by `offset`.
    fn translate(self, offset: &[i64]) -> Result<Self> {
        let layout = self.layout().translate(offset)?;
        Ok(self.with_layout(layout))
    }

    /// Shift the coordinates so that the min is the origin.
    fn zero_min(self) -> Self {
        let layout = self.layout().zero_min();
        self.with_layout(layout)
    }

    /// Mirror axis `axis`, so that coordinate `x` reads what `-x` read
    /// before.
    fn invert_axis(self, axis: usize) -> Result<Self> {
        let layout = self.layout().invert_axis(axis)?;
        Ok(self.with_layout(layout))
    }

    /// Keep every `steps[d]`th position along each axis `d`. The result is
    /// zero-min.
    fn subsample(self, steps: &[i64]) -> Result<Self> {
        let layout = self.layout().subsample(steps)?;
        Ok(self.with_layout(layout))
    }

    /// Restrict to `interval`, which must lie within the current interval.
    fn restrict(self, interval: &Interval) -> Result<Self> {
        let layout = self.layout().interval_view(interval)?;
        Ok(self.with_layout(layout))
    }

    /// Swap axes `a` and `b`.
    fn permute(self, a: usize, b: usize) -> Result<Self> {
        let layout = self.layout().permute(a, b)?;
        Ok(self.with_layout(layout))
    }

    /// Append an axis of length 1 at coordinate 0.
    fn add_dimension(self) -> Self {
        let layout = self.layout().add_dimension();
        self.with_layout(layout)
    }

    /// NumPy-like selection of part of `self`.
    ///
    /// Each selector applies to one axis: an integer fixes the axis at that
    /// coordinate and removes it, a [`Slice`] or Rust range keeps a possibly
    /// reversed and stepped part of the axis, and [`ALL`] stands for as many
    /// full axes as needed. Missing trailing selectors select whole axes.
    ///
    /// ```
    /// use imgview::{Img, RandomAccessible, View, Strided, Slice, ALL, SL};
    /// let a = Img::from_fn(&[3, 4, 5], |pos| pos[0] + 10 * pos[1] + 100 * pos[2]);
    /// let b = a.view().slice((ALL, 2)).unwrap();
    /// assert_eq!(b.dimensions(), [3, 4]);
    /// let c = a.view().slice((1, -SL, Slice::inclusive(0, 4).step(2))).unwrap();
    /// assert_eq!(c.at(&[0, 0]), 31);
    /// assert_eq!(c.at(&[0, 1]), 231);
    /// ```
    ///
    /// [`Slice`]: super::Slice
    /// [`ALL`]: super::ALL
    fn slice(self, selectors: impl IntoSelectors) -> Result<Self> {
        super::select::select(self, selectors.into_selectors())
    }
}

// ----------------------------------------------------------------------------

/// A borrowed view of the elements of an [`Img`].
#[derive(Debug, Clone)]
pub struct ImgView<'a, T> {
    layout: Layout,
    items: &'a [T],
}

impl<'a, T> Strided for ImgView<'a, T> {
    fn layout(&self) -> &Layout { &self.layout }
    fn with_layout(self, layout: Layout) -> Self { Self {layout, items: self.items} }
}

impl<'a, T: Clone> RandomAccessible for ImgView<'a, T> {
    type T = T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { self.layout.num_dimensions() }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> T { self.items[self.layout.location(pos)].clone() }
}

impl<'a, T: Clone> View for ImgView<'a, T> {
    #[inline(always)]
    fn interval(&self) -> &Interval { self.layout.interval() }

    fn copy(&self) -> Img<T> {
        let mut items = Vec::with_capacity(self.layout.interval().len());
        self.layout.each_location(|i| items.push(self.items[i].clone()));
        Img::new_inner(self.layout.interval().clone(), items.into())
    }
}

impl_ops_for_view!(['a, T,] ImgView<'a, T>);

// ----------------------------------------------------------------------------

/// A mutably borrowed view of the elements of an [`Img`].
#[derive(Debug)]
pub struct ImgViewMut<'a, T> {
    layout: Layout,
    items: &'a mut [T],
}

impl<'a, T> ImgViewMut<'a, T> {
    /// Borrow `self` as an [`ImgView`].
    pub fn view(&self) -> ImgView<'_, T> {
        ImgView {layout: self.layout.clone(), items: &*self.items}
    }

    /// Reborrow `self` for a shorter lifetime.
    pub fn reborrow(&mut self) -> ImgViewMut<'_, T> {
        ImgViewMut {layout: self.layout.clone(), items: &mut *self.items}
    }
}

impl<'a, T> Strided for ImgViewMut<'a, T> {
    fn layout(&self) -> &Layout { &self.layout }
    fn with_layout(self, layout: Layout) -> Self { Self {layout, items: self.items} }
}

impl<'a, T: Clone> RandomAccessible for ImgViewMut<'a, T> {
    type T = T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { self.layout.num_dimensions() }
    #[inline(always)]
    fn at(&self, pos: &[i64]) -> T { self.items[self.layout.location(pos)].clone() }
}

impl<'a, T: Clone> View for ImgViewMut<'a, T> {
    #[inline(always)]
    fn interval(&self) -> &Interval { self.layout.interval() }
}

impl<'a, T: Clone> ViewMut for ImgViewMut<'a, T> {
    #[inline(always)]
    fn at_mut(&mut self, pos: &[i64]) -> &mut T { &mut self.items[self.layout.location(pos)] }

    fn each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        let items = &mut *self.items;
        self.layout.each_location(|i| f(&mut items[i]));
    }
}

impl_ops_for_view!(['a, T,] ImgViewMut<'a, T>);

// ----------------------------------------------------------------------------

macro_rules! impl_index {
    ($v:ident<$($a:lifetime,)? T>) => {
        impl<$($a,)? T, const N: usize> std::ops::Index<[i64; N]> for $v<$($a,)? T> {
            type Output = T;
            #[track_caller]
            fn index(&self, pos: [i64; N]) -> &T { &self.items[self.layout.location(&pos)] }
        }

        impl<$($a,)? T> std::ops::Index<&[i64]> for $v<$($a,)? T> {
            type Output = T;
            #[track_caller]
            fn index(&self, pos: &[i64]) -> &T { &self.items[self.layout.location(pos)] }
        }
    };
}

macro_rules! impl_index_mut {
    ($v:ident<$($a:lifetime,)? T>) => {
        impl<$($a,)? T, const N: usize> std::ops::IndexMut<[i64; N]> for $v<$($a,)? T> {
            #[track_caller]
            fn index_mut(&mut self, pos: [i64; N]) -> &mut T { &mut self.items[self.layout.location(&pos)] }
        }

        impl<$($a,)? T> std::ops::IndexMut<&[i64]> for $v<$($a,)? T> {
            #[track_caller]
            fn index_mut(&mut self, pos: &[i64]) -> &mut T { &mut self.items[self.layout.location(pos)] }
        }
    };
}

impl_index!(Img<T>);
impl_index_mut!(Img<T>);
impl_index!(ImgView<'a, T>);
impl_index!(ImgViewMut<'a, T>);
impl_index_mut!(ImgViewMut<'a, T>);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Error};

    fn ramp() -> Img<i64> { Img::from_fn(&[3, 4, 5], |pos| pos[0] + 10 * pos[1] + 100 * pos[2]) }

    #[test]
    #[should_panic]
    fn wrong_number_of_items() {
        Img::new(&[2, 2], [1, 2, 3]);
    }

    #[test]
    fn index() {
        let mut a = ramp();
        assert_eq!(a[[2, 3, 4]], 432);
        assert_eq!(a[&[1i64, 1, 1][..]], 111);
        a[[0, 0, 0]] = -1;
        assert_eq!(a.as_slice()[0], -1);
        let a = a.translate(&[1, 1, 1]).unwrap();
        assert_eq!(a[[3, 4, 5]], 432);
        assert_eq!(a.zero_min()[[2, 3, 4]], 432);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_out_of_bounds() {
        let a = ramp();
        let _x = a[[3, 0, 0]];
    }

    #[test]
    fn views_alias() {
        let mut a = ramp();
        {
            let mut v = a.view_mut().hyper_slice(2, 1).unwrap().hyper_slice(1, 2).unwrap();
            assert_eq!(v.dimensions(), [3]);
            v[[1]] = 0;
            v.each_mut(|x| *x += 1);
        }
        assert_eq!(a[[0, 2, 1]], 121);
        assert_eq!(a[[1, 2, 1]], 1);
        assert_eq!(a[[2, 2, 1]], 123);
    }

    #[test]
    fn primitives() {
        let a = ramp();
        let v = a.view().hyper_slice(0, 1).unwrap().invert_axis(0).unwrap();
        assert_eq!(v.interval(), &Interval::new([-3, 0], [0, 4]).unwrap());
        assert_eq!(v.at(&[-3, 2]), 231);
        let v = v.restrict(&Interval::new([-2, 1], [-1, 3]).unwrap()).unwrap();
        assert_eq!(v.copy().as_slice(), [121, 111, 221, 211, 321, 311]);
        let v = v.subsample(&[1, 2]).unwrap();
        assert_eq!(v.copy().as_slice(), [121, 111, 321, 311]);
        let v = v.permute(0, 1).unwrap();
        assert_eq!(v.copy().as_slice(), [121, 321, 111, 311]);
        assert_eq!(v.add_dimension().dimensions(), [2, 2, 1]);
        assert_eq!(
            a.view().hyper_slice(3, 0).unwrap_err(),
            Error::AxisOutOfRange { axis: 3, ndims: 3 },
        );
    }

    #[test]
    fn copy_strided() {
        let a = ramp();
        let v = a.view().translate(&[5, 5, 5]).unwrap();
        let b = v.copy();
        assert_eq!(b.interval(), v.interval());
        assert_eq!(b.as_slice(), a.as_slice());
        assert_eq!(Img::filled(&[2], 'x').as_slice(), ['x', 'x']);
    }
}

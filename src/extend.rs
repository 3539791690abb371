//! Out-of-bounds strategies, and cropping of unbounded data.

use num_traits::{Zero};

use super::{Error, Result, Interval, RandomAccessible, View, impl_ops_for_view};
use super::error::{or_panic};

/// What an [`Extended`] returns outside the interval of its source.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Extension<T> {
    /// Zero everywhere outside.
    Zero,

    /// A constant everywhere outside.
    Value(T),

    /// The nearest element on the border.
    Border,

    /// The source reflected about its border elements, without repeating
    /// them. An axis of `n > 1` elements repeats with period `2 * (n - 1)`.
    Mirror,
}

impl<T> Default for Extension<T> {
    fn default() -> Self { Self::Zero }
}

// ----------------------------------------------------------------------------

/// A [`View`] extended to every integer position. The return type of
/// [`View::extend()`].
///
/// ```
/// use imgview::{Img, View, RandomAccessible};
/// let a = Img::new(&[4], [1, 2, 3, 4]);
/// assert_eq!((&a).extend_zero().at(&[-1]), 0);
/// assert_eq!((&a).extend_border().at(&[9]), 4);
/// assert_eq!((&a).extend_mirror().at(&[-2]), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Extended<V: View> {
    source: V,
    mode: Extension<V::T>,
}

impl<V: View> Extended<V> {
    pub fn new(source: V, mode: Extension<V::T>) -> Self { Self {source, mode} }

    pub fn source(&self) -> &V { &self.source }

    pub fn mode(&self) -> &Extension<V::T> { &self.mode }

    /// The position inside the source that `pos` reads, or `None` if `pos`
    /// is outside and `self` has a constant extension.
    fn resolve(&self, pos: &[i64]) -> Option<Vec<i64>> {
        let interval = self.source.interval();
        or_panic(interval.check_length(pos.len()));
        if interval.contains(pos) { return Some(pos.to_vec()); }
        match self.mode {
            Extension::Zero | Extension::Value(_) => None,
            Extension::Border => Some(pos.iter().enumerate().map(|(d, &x)| {
                x.clamp(interval.min(d), interval.max(d))
            }).collect()),
            Extension::Mirror => Some(pos.iter().enumerate().map(|(d, &x)| {
                let n = interval.dimension(d) as i64;
                if n <= 1 { return interval.min(d); }
                let period = 2 * (n - 1);
                let r = (x - interval.min(d)).rem_euclid(period);
                interval.min(d) + if r < n { r } else { period - r }
            }).collect()),
        }
    }
}

impl<V: View> RandomAccessible for Extended<V> where V::T: Zero {
    type T = V::T;

    fn num_dimensions(&self) -> usize { self.source.num_dimensions() }

    fn at(&self, pos: &[i64]) -> Self::T {
        match self.resolve(pos) {
            Some(inside) => self.source.at(&inside),
            None => match &self.mode {
                Extension::Value(v) => v.clone(),
                _ => V::T::zero(),
            },
        }
    }
}

// ----------------------------------------------------------------------------

/// A [`RandomAccessible`] restricted to an [`Interval`]. The return type of
/// [`RandomAccessible::view_interval()`].
#[derive(Debug, Clone)]
pub struct Crop<A> {
    source: A,
    interval: Interval,
}

impl<A: RandomAccessible> Crop<A> {
    pub fn new(source: A, interval: Interval) -> Result<Self> {
        if interval.num_dimensions() != source.num_dimensions() {
            return Err(Error::DimensionMismatch {
                expected: source.num_dimensions(),
                got: interval.num_dimensions(),
            });
        }
        Ok(Self {source, interval})
    }

    pub fn source(&self) -> &A { &self.source }
}

impl<A: RandomAccessible> RandomAccessible for Crop<A> {
    type T = A::T;

    fn num_dimensions(&self) -> usize { self.interval.num_dimensions() }

    #[track_caller]
    fn at(&self, pos: &[i64]) -> Self::T {
        or_panic(self.interval.check_length(pos.len()));
        for (d, &x) in pos.iter().enumerate() {
            or_panic(self.interval.check_position(d, x));
        }
        self.source.at(pos)
    }
}

impl<A: RandomAccessible> View for Crop<A> {
    fn interval(&self) -> &Interval { &self.interval }
}

impl_ops_for_view!([A,] Crop<A>);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Img};

    fn five() -> Img<i32> { Img::new(&[5], [0, 1, 2, 3, 4]) }

    #[test]
    fn constant() {
        let a = five();
        let z = (&a).extend_zero();
        assert_eq!(z.at(&[-1]), 0);
        assert_eq!(z.at(&[2]), 2);
        let v = (&a).extend_value(-7);
        assert_eq!(v.at(&[5]), -7);
        assert_eq!(v.at(&[4]), 4);
    }

    #[test]
    fn border() {
        let a = five().translate(&[10]).unwrap();
        let b = (&a).extend_border();
        assert_eq!(b.at(&[-3]), 0);
        assert_eq!(b.at(&[12]), 2);
        assert_eq!(b.at(&[99]), 4);
    }

    #[test]
    fn mirror() {
        let m = five().extend_mirror();
        let got: Vec<i32> = (-4..10).map(|x| m.at(&[x])).collect();
        assert_eq!(got, [4, 3, 2, 1, 0, 1, 2, 3, 4, 3, 2, 1, 0, 1]);
        let one = Img::new(&[1], [9]).extend_mirror();
        assert_eq!(one.at(&[-5]), 9);
    }

    #[test]
    fn mirror_2d() {
        let a = Img::from_fn(&[2, 3], |pos| (pos[0] + 10 * pos[1]) as i32);
        let m = a.extend_mirror();
        assert_eq!(m.at(&[-1, -1]), 11);
        assert_eq!(m.at(&[2, 3]), 10);
    }

    #[test]
    fn crop() {
        let a = five();
        let e = (&a).extend_zero();
        let c = (&e).view_interval(Interval::new([3], [6]).unwrap()).unwrap();
        assert_eq!(c.iter().collect::<Vec<_>>(), [3, 4, 0, 0]);
        assert_eq!(c.len(), 4);
        assert_eq!(
            (&e).view_interval(Interval::from_dimensions(&[2, 2])).unwrap_err(),
            Error::DimensionMismatch { expected: 1, got: 2 },
        );
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn crop_out_of_bounds() {
        let c = five().extend_zero().view_interval(Interval::new([0], [1]).unwrap()).unwrap();
        c.at(&[2]);
    }

    #[test]
    fn central_difference() {
        let a = Img::new(&[5], [0, 1, 4, 9, 16]);
        let e = (&a).extend_border();
        let iv = a.interval().clone();
        let right = (&e).view_interval(iv.translate(&[1]).unwrap()).unwrap();
        let left = (&e).view_interval(iv.translate(&[-1]).unwrap()).unwrap();
        let d = right - left;
        assert_eq!(d.as_slice(), [1, 4, 8, 12, 7]);
        assert_eq!(d.interval(), &Interval::new([1], [5]).unwrap());
    }
}

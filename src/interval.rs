//! Integer intervals, the run-time replacement for static index sizes.

use std::fmt::{self, Debug, Display};

use super::{Error, Result};

/// An n-dimensional box of integer positions, `min[d] ..= max[d]` on each
/// axis `d`.
///
/// An axis with `max == min - 1` is empty. A 0-dimensional `Interval` contains
/// exactly one position, the empty one.
///
/// ```
/// use imgview::Interval;
/// let iv = Interval::new([1, 2], [3, 2]).unwrap();
/// assert_eq!(iv.dimensions(), [3, 1]);
/// assert_eq!(iv.len(), 3);
/// assert!(!iv.is_zero_min());
/// ```
#[derive(Clone, Hash, PartialEq, Eq)]
pub struct Interval {
    min: Box<[i64]>,
    max: Box<[i64]>,
}

impl Interval {
    /// Constructs an `Interval` from its inclusive bounds.
    pub fn new(min: impl Into<Vec<i64>>, max: impl Into<Vec<i64>>) -> Result<Self> {
        let (min, max) = (min.into(), max.into());
        if min.len() != max.len() {
            return Err(Error::DimensionMismatch { expected: min.len(), got: max.len() });
        }
        for (d, (&lo, &hi)) in min.iter().zip(&max).enumerate() {
            let size = hi as i128 - lo as i128 + 1;
            if size < 0 {
                return Err(Error::InvalidInterval {
                    reason: format!("axis {}: max {} < min {} - 1", d, hi, lo),
                });
            }
            if size > u64::MAX as i128 {
                return Err(Error::InvalidInterval {
                    reason: format!("axis {}: {}..={} has more than u64::MAX positions", d, lo, hi),
                });
            }
        }
        Ok(Self {min: min.into(), max: max.into()})
    }

    /// A zero-min `Interval` with the given size on each axis.
    pub fn from_dimensions(dims: &[u64]) -> Self {
        Self {
            min: vec![0; dims.len()].into(),
            max: dims.iter().map(|&n| n as i64 - 1).collect(),
        }
    }

    /// Constructs an `Interval` from bounds already known to be valid.
    pub(crate) fn from_parts(min: Vec<i64>, max: Vec<i64>) -> Self {
        debug_assert_eq!(min.len(), max.len());
        Self {min: min.into(), max: max.into()}
    }

    /// The smallest integer `Interval` containing the real box
    /// `min ..= max`.
    pub fn smallest_containing(min: &[f64], max: &[f64]) -> Self {
        assert_eq!(min.len(), max.len(), "Real bounds have different lengths");
        Self {
            min: min.iter().map(|x| x.floor() as i64).collect(),
            max: max.iter().map(|x| x.ceil() as i64).collect(),
        }
    }

    pub fn num_dimensions(&self) -> usize { self.min.len() }

    pub fn min(&self, d: usize) -> i64 { self.min[d] }

    pub fn max(&self, d: usize) -> i64 { self.max[d] }

    /// The number of positions along axis `d`.
    pub fn dimension(&self, d: usize) -> u64 { (self.max[d].wrapping_sub(self.min[d]) as u64).wrapping_add(1) }

    pub fn dimensions(&self) -> Vec<u64> {
        (0..self.num_dimensions()).map(|d| self.dimension(d)).collect()
    }

    pub fn min_as_longs(&self) -> Vec<i64> { self.min.to_vec() }

    pub fn max_as_longs(&self) -> Vec<i64> { self.max.to_vec() }

    pub fn min_as_ints(&self) -> Vec<i32> { self.min.iter().map(|&x| x as i32).collect() }

    pub fn max_as_ints(&self) -> Vec<i32> { self.max.iter().map(|&x| x as i32).collect() }

    /// The total number of positions.
    pub fn len(&self) -> usize {
        (0..self.num_dimensions()).map(|d| self.dimension(d) as usize).product()
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn is_zero_min(&self) -> bool { self.min.iter().all(|&x| x == 0) }

    /// Shift this `Interval` so that its min is the origin.
    pub fn zero_min(&self) -> Self {
        Self {
            min: vec![0; self.num_dimensions()].into(),
            max: (0..self.num_dimensions()).map(|d| self.max[d] - self.min[d]).collect(),
        }
    }

    /// Shift this `Interval` by `offset`.
    pub fn translate(&self, offset: &[i64]) -> Result<Self> {
        self.check_length(offset.len())?;
        let shift = |bounds: &[i64]| -> Result<Box<[i64]>> {
            bounds.iter().zip(offset).enumerate().map(|(d, (&x, &o))| {
                x.checked_add(o).ok_or_else(|| Error::InvalidInterval {
                    reason: format!("axis {}: {} + {} overflows", d, x, o),
                })
            }).collect()
        };
        Ok(Self {min: shift(&self.min)?, max: shift(&self.max)?})
    }

    /// The positions contained in both `self` and `other`.
    pub fn intersect(&self, other: &Self) -> Result<Self> {
        self.check_length(other.num_dimensions())?;
        let min: Vec<i64> = self.min.iter().zip(other.min.iter()).map(|(a, b)| *a.max(b)).collect();
        let max: Vec<i64> = self.max.iter().zip(other.max.iter())
            .zip(&min)
            .map(|((a, b), lo)| (*a.min(b)).max(lo - 1))
            .collect();
        Ok(Self {min: min.into(), max: max.into()})
    }

    pub fn contains(&self, pos: &[i64]) -> bool {
        pos.len() == self.num_dimensions()
            && pos.iter().enumerate().all(|(d, &x)| self.min[d] <= x && x <= self.max[d])
    }

    /// Returns `true` if every position of `other` is in `self`.
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.num_dimensions() == self.num_dimensions() && (
            other.is_empty()
            || (0..self.num_dimensions()).all(|d| {
                self.min[d] <= other.min[d] && other.max[d] <= self.max[d]
            })
        )
    }

    /// Returns `true` if `other` has the same size as `self` on every axis.
    /// The mins may differ.
    pub fn equal_dimensions(&self, other: &Self) -> bool {
        self.check_dimensions(other).is_ok()
    }

    pub(crate) fn check_length(&self, len: usize) -> Result<()> {
        if len != self.num_dimensions() {
            return Err(Error::DimensionMismatch { expected: self.num_dimensions(), got: len });
        }
        Ok(())
    }

    /// Checks that `other` has the same number and sizes of axes.
    pub(crate) fn check_dimensions(&self, other: &Self) -> Result<()> {
        self.check_length(other.num_dimensions())?;
        for d in 0..self.num_dimensions() {
            if self.dimension(d) != other.dimension(d) {
                return Err(Error::SizeMismatch {
                    axis: d,
                    expected: self.dimension(d),
                    got: other.dimension(d),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn check_axis(&self, axis: usize) -> Result<()> {
        if axis >= self.num_dimensions() {
            return Err(Error::AxisOutOfRange { axis, ndims: self.num_dimensions() });
        }
        Ok(())
    }

    pub(crate) fn check_position(&self, axis: usize, position: i64) -> Result<()> {
        self.check_axis(axis)?;
        if position < self.min[axis] || position > self.max[axis] {
            return Err(Error::OutOfBounds {
                axis,
                position,
                min: self.min[axis],
                max: self.max[axis],
            });
        }
        Ok(())
    }

    /// Call `f` on every position in flat order, i.e. with axis 0 varying
    /// fastest. The slice passed to `f` is reused between calls.
    pub fn each_position(&self, mut f: impl FnMut(&[i64])) {
        if self.is_empty() { return; }
        let n = self.num_dimensions();
        let mut pos = self.min.to_vec();
        loop {
            f(&pos);
            let mut d = 0;
            loop {
                if d == n { return; }
                if pos[d] < self.max[d] { pos[d] += 1; break; }
                pos[d] = self.min[d];
                d += 1;
            }
        }
    }

    /// An [`Iterator`] over the positions of `self` in flat order.
    ///
    /// ```
    /// use imgview::Interval;
    /// let iv = Interval::from_dimensions(&[2, 2]);
    /// let all: Vec<_> = iv.positions().collect();
    /// assert_eq!(all, [vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
    /// ```
    pub fn positions(&self) -> Positions<'_> {
        Positions {
            interval: self,
            next: if self.is_empty() { None } else { Some(self.min.to_vec()) },
        }
    }
}

impl Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interval({:?} ..= {:?})", self.min, self.max)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for d in 0..self.num_dimensions() {
            if d > 0 { write!(f, ", ")?; }
            write!(f, "{}..={}", self.min[d], self.max[d])?;
        }
        write!(f, "]")
    }
}

// ----------------------------------------------------------------------------

/// The return type of [`Interval::positions()`].
#[derive(Debug, Clone)]
pub struct Positions<'a> {
    interval: &'a Interval,
    next: Option<Vec<i64>>,
}

impl<'a> Iterator for Positions<'a> {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut pos = current.clone();
        for d in 0..pos.len() {
            if pos[d] < self.interval.max[d] {
                pos[d] += 1;
                self.next = Some(pos);
                return Some(current);
            }
            pos[d] = self.interval.min[d];
        }
        Some(current)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        let iv = Interval::new([1, -2, 0], [3, 2, 0]).unwrap();
        assert_eq!(iv.num_dimensions(), 3);
        assert_eq!(iv.dimensions(), [3, 5, 1]);
        assert_eq!(iv.len(), 15);
        assert_eq!(iv.zero_min(), Interval::from_dimensions(&[3, 5, 1]));
        assert_eq!(iv.min_as_ints(), [1, -2, 0]);
        assert_eq!(iv.max_as_longs(), [3, 2, 0]);
    }

    #[test]
    fn invalid() {
        assert!(Interval::new([0, 0], [1]).is_err());
        assert!(Interval::new([3], [1]).is_err());
        assert!(Interval::new([3], [2]).unwrap().is_empty());
    }

    #[test]
    fn extreme_bounds() {
        let too_big = Interval::new([i64::MIN], [i64::MAX]);
        assert!(matches!(too_big, Err(Error::InvalidInterval { .. })));
        assert_eq!(Interval::new([i64::MIN], [i64::MIN]).unwrap().len(), 1);
        assert!(Interval::new([i64::MIN + 1], [i64::MIN]).unwrap().is_empty());
        assert!(Interval::new([0], [i64::MIN]).is_err());
        let wide = Interval::new([i64::MIN], [i64::MAX - 1]).unwrap();
        assert_eq!(wide.dimension(0), u64::MAX);
        let top = Interval::new([i64::MAX - 1], [i64::MAX]).unwrap();
        assert!(matches!(top.translate(&[1]), Err(Error::InvalidInterval { .. })));
        assert_eq!(top.translate(&[-1]).unwrap(), Interval::new([i64::MAX - 2], [i64::MAX - 1]).unwrap());
    }

    #[test]
    fn zero_dimensional() {
        let iv = Interval::from_dimensions(&[]);
        assert_eq!(iv.len(), 1);
        let mut count = 0;
        iv.each_position(|pos| { assert!(pos.is_empty()); count += 1; });
        assert_eq!(count, 1);
        assert_eq!(iv.positions().count(), 1);
    }

    #[test]
    fn flat_order() {
        let iv = Interval::new([1, 5], [2, 7]).unwrap();
        let mut visited = Vec::new();
        iv.each_position(|pos| visited.push(pos.to_vec()));
        assert_eq!(visited, [
            [1, 5], [2, 5],
            [1, 6], [2, 6],
            [1, 7], [2, 7],
        ]);
        assert_eq!(iv.positions().collect::<Vec<_>>(), visited);
    }

    #[test]
    fn translate_and_intersect() {
        let a = Interval::from_dimensions(&[4, 4]);
        let b = a.translate(&[2, -1]).unwrap();
        assert_eq!(b, Interval::new([2, -1], [5, 2]).unwrap());
        assert_eq!(a.intersect(&b).unwrap(), Interval::new([2, 0], [3, 2]).unwrap());
        assert!(a.equal_dimensions(&b));
        assert!(!a.contains_interval(&b));
        assert!(a.contains(&[3, 3]));
        assert!(!a.contains(&[4, 0]));
        assert!(a.translate(&[1]).is_err());
    }

    #[test]
    fn smallest_containing() {
        let iv = Interval::smallest_containing(&[-0.5, 1.0], &[2.2, 3.0]);
        assert_eq!(iv, Interval::new([-1, 1], [3, 3]).unwrap());
    }
}

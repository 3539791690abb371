//! Strided layouts: where the positions of a view live in a buffer.
//!
//! Every view primitive (hyperslice, translation, axis inversion,
//! subsampling, restriction, permutation) is a cheap transformation of a
//! [`Layout`]. None of them touches the buffer.

use super::{Error, Result, Interval};

/// The position-to-buffer map of a memory-backed view.
///
/// The buffer index of position `p` is
/// ```text
/// offset + Σ (p[d] - min[d]) × strides[d]
/// ```
/// Strides are signed, so that an inverted axis walks the buffer backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    offset: isize,
    interval: Interval,
    strides: Box<[isize]>,
}

impl Layout {
    /// A dense layout of `interval` with axis 0 varying fastest.
    pub fn dense(interval: Interval) -> Self {
        let mut strides = Vec::with_capacity(interval.num_dimensions());
        let mut stride = 1isize;
        for d in 0..interval.num_dimensions() {
            strides.push(stride);
            stride *= interval.dimension(d) as isize;
        }
        Self {offset: 0, interval, strides: strides.into()}
    }

    pub fn interval(&self) -> &Interval { &self.interval }

    pub fn offset(&self) -> isize { self.offset }

    pub fn strides(&self) -> &[isize] { &self.strides }

    pub fn num_dimensions(&self) -> usize { self.interval.num_dimensions() }

    /// The buffer index of `pos`, or an error if `pos` is outside the
    /// interval.
    pub fn try_location(&self, pos: &[i64]) -> Result<usize> {
        self.interval.check_length(pos.len())?;
        let mut location = self.offset;
        for (d, &x) in pos.iter().enumerate() {
            self.interval.check_position(d, x)?;
            location += (x - self.interval.min(d)) as isize * self.strides[d];
        }
        Ok(location as usize)
    }

    /// The buffer index of `pos`.
    ///
    /// Panics if `pos` is outside the interval.
    #[inline]
    #[track_caller]
    pub fn location(&self, pos: &[i64]) -> usize {
        super::error::or_panic(self.try_location(pos))
    }

    /// Call `f` on the buffer index of every position, in flat order.
    pub fn each_location(&self, mut f: impl FnMut(usize)) {
        if self.interval.is_empty() { return; }
        let n = self.num_dimensions();
        let dims = self.interval.dimensions();
        let mut counters = vec![0u64; n];
        let mut location = self.offset;
        loop {
            f(location as usize);
            let mut d = 0;
            loop {
                if d == n { return; }
                counters[d] += 1;
                location += self.strides[d];
                if counters[d] < dims[d] { break; }
                location -= self.strides[d] * dims[d] as isize;
                counters[d] = 0;
                d += 1;
            }
        }
    }

    /// The buffer indices of all positions, in flat order.
    pub fn locations(&self) -> Vec<usize> {
        let mut ret = Vec::with_capacity(self.interval.len());
        self.each_location(|i| ret.push(i));
        ret
    }

    /// Returns `true` if no two positions share a buffer index.
    pub fn is_injective(&self) -> bool {
        let mut locations = self.locations();
        locations.sort_unstable();
        locations.windows(2).all(|w| w[0] != w[1])
    }

    // ------------------------------------------------------------------------

    /// Fix axis `axis` at absolute coordinate `pos`, removing the axis.
    pub fn hyper_slice(&self, axis: usize, pos: i64) -> Result<Self> {
        self.interval.check_position(axis, pos)?;
        let offset = self.offset + (pos - self.interval.min(axis)) as isize * self.strides[axis];
        let mut min = self.interval.min_as_longs();
        let mut max = self.interval.max_as_longs();
        let mut strides = self.strides.to_vec();
        min.remove(axis);
        max.remove(axis);
        strides.remove(axis);
        Ok(Self {offset, interval: Interval::from_parts(min, max), strides: strides.into()})
    }

    /// Shift every coordinate by `offset`.
    pub fn translate(&self, offset: &[i64]) -> Result<Self> {
        Ok(Self {
            offset: self.offset,
            interval: self.interval.translate(offset)?,
            strides: self.strides.clone(),
        })
    }

    /// Shift the coordinates so that the min is the origin.
    pub fn zero_min(&self) -> Self {
        Self {
            offset: self.offset,
            interval: self.interval.zero_min(),
            strides: self.strides.clone(),
        }
    }

    /// Mirror axis `axis`, mapping coordinate `x` to `-x`.
    pub fn invert_axis(&self, axis: usize) -> Result<Self> {
        self.interval.check_axis(axis)?;
        let (lo, hi) = (self.interval.min(axis), self.interval.max(axis));
        let mut min = self.interval.min_as_longs();
        let mut max = self.interval.max_as_longs();
        let mut strides = self.strides.to_vec();
        min[axis] = hi.checked_neg().ok_or_else(|| Error::InvalidInterval {
            reason: format!("axis {}: cannot invert coordinate {}", axis, hi),
        })?;
        max[axis] = lo.checked_neg().ok_or_else(|| Error::InvalidInterval {
            reason: format!("axis {}: cannot invert coordinate {}", axis, lo),
        })?;
        strides[axis] = -strides[axis];
        Ok(Self {
            offset: self.offset + (hi - lo) as isize * self.strides[axis],
            interval: Interval::from_parts(min, max),
            strides: strides.into(),
        })
    }

    /// Keep every `steps[d]`th position on each axis `d`, starting at the
    /// min. The result is zero-min.
    pub fn subsample(&self, steps: &[i64]) -> Result<Self> {
        self.interval.check_length(steps.len())?;
        let n = self.num_dimensions();
        let mut max = Vec::with_capacity(n);
        let mut strides = Vec::with_capacity(n);
        for (d, &step) in steps.iter().enumerate() {
            if step <= 0 { return Err(Error::NonPositiveStep { axis: d, step }); }
            let dim = self.interval.dimension(d) as i64;
            let new_dim = if dim == 0 { 0 } else { (dim - 1) / step + 1 };
            max.push(new_dim - 1);
            strides.push(self.strides[d] * step as isize);
        }
        Ok(Self {
            offset: self.offset,
            interval: Interval::from_parts(vec![0; n], max),
            strides: strides.into(),
        })
    }

    /// Restrict to `interval`, which must be contained in the current
    /// interval. Coordinates are unchanged.
    pub fn interval_view(&self, interval: &Interval) -> Result<Self> {
        self.interval.check_length(interval.num_dimensions())?;
        if !interval.is_empty() {
            for d in 0..self.num_dimensions() {
                self.interval.check_position(d, interval.min(d))?;
                self.interval.check_position(d, interval.max(d))?;
            }
        }
        let mut offset = self.offset;
        for d in 0..self.num_dimensions() {
            offset += (interval.min(d) - self.interval.min(d)) as isize * self.strides[d];
        }
        Ok(Self {offset, interval: interval.clone(), strides: self.strides.clone()})
    }

    /// Swap axes `a` and `b`.
    pub fn permute(&self, a: usize, b: usize) -> Result<Self> {
        self.interval.check_axis(a)?;
        self.interval.check_axis(b)?;
        let mut min = self.interval.min_as_longs();
        let mut max = self.interval.max_as_longs();
        let mut strides = self.strides.to_vec();
        min.swap(a, b);
        max.swap(a, b);
        strides.swap(a, b);
        Ok(Self {offset: self.offset, interval: Interval::from_parts(min, max), strides: strides.into()})
    }

    /// Append an axis `0 ..= 0`.
    pub fn add_dimension(&self) -> Self {
        let mut min = self.interval.min_as_longs();
        let mut max = self.interval.max_as_longs();
        let mut strides = self.strides.to_vec();
        min.push(0);
        max.push(0);
        strides.push(0);
        Self {offset: self.offset, interval: Interval::from_parts(min, max), strides: strides.into()}
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn dense(dims: &[u64]) -> Layout { Layout::dense(Interval::from_dimensions(dims)) }

    #[test]
    fn dense_is_column_major() {
        let l = dense(&[3, 4, 5]);
        assert_eq!(l.strides(), [1, 3, 12]);
        assert_eq!(l.location(&[2, 1, 1]), 2 + 3 + 12);
        assert_eq!(l.locations(), (0..60).collect::<Vec<_>>());
        assert!(l.is_injective());
    }

    #[test]
    fn hyper_slice() {
        let l = dense(&[3, 4, 5]).hyper_slice(1, 2).unwrap();
        assert_eq!(l.interval(), &Interval::from_dimensions(&[3, 5]));
        assert_eq!(l.location(&[1, 1]), 1 + 2 * 3 + 12);
        assert_eq!(
            dense(&[3, 4]).hyper_slice(1, 4),
            Err(Error::OutOfBounds { axis: 1, position: 4, min: 0, max: 3 }),
        );
        assert!(dense(&[3]).hyper_slice(1, 0).is_err());
    }

    #[test]
    fn invert_and_translate() {
        let l = dense(&[5]).invert_axis(0).unwrap();
        assert_eq!(l.interval(), &Interval::new([-4], [0]).unwrap());
        assert_eq!(l.location(&[-4]), 4);
        assert_eq!(l.location(&[0]), 0);
        let l = l.translate(&[4]).unwrap();
        assert_eq!(l.locations(), [4, 3, 2, 1, 0]);
    }

    #[test]
    fn subsample() {
        let l = dense(&[5]).interval_view(&Interval::new([1], [4]).unwrap()).unwrap();
        let l = l.subsample(&[2]).unwrap();
        assert_eq!(l.interval(), &Interval::from_dimensions(&[2]));
        assert_eq!(l.locations(), [1, 3]);
        assert_eq!(dense(&[5]).subsample(&[0]), Err(Error::NonPositiveStep { axis: 0, step: 0 }));
        assert_eq!(dense(&[0]).subsample(&[3]).unwrap().interval().len(), 0);
    }

    #[test]
    fn interval_view() {
        let l = dense(&[4, 4]);
        let iv = Interval::new([1, 2], [2, 3]).unwrap();
        let sub = l.interval_view(&iv).unwrap();
        assert_eq!(sub.location(&[1, 2]), 1 + 2 * 4);
        assert_eq!(sub.locations(), [9, 10, 13, 14]);
        assert!(l.interval_view(&Interval::new([1, 2], [4, 3]).unwrap()).is_err());
    }

    #[test]
    fn permute_and_add_dimension() {
        let l = dense(&[2, 3]).permute(0, 1).unwrap();
        assert_eq!(l.interval(), &Interval::from_dimensions(&[3, 2]));
        assert_eq!(l.locations(), [0, 2, 4, 1, 3, 5]);
        let l = dense(&[2]).add_dimension();
        assert_eq!(l.interval(), &Interval::from_dimensions(&[2, 1]));
        assert_eq!(l.location(&[1, 0]), 1);
    }
}

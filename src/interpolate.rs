//! Sampling integer-indexed data at real coordinates.

use super::{Pixel, RandomAccessible};
use super::error::{or_panic};

/// Implemented by types that compute a `Self::T` at every real position of an
/// n-dimensional space.
pub trait RealRandomAccessible {
    type T: Clone;

    fn num_dimensions(&self) -> usize;

    /// Compute the element at `pos`.
    fn at_real(&self, pos: &[f64]) -> Self::T;
}

impl<R: RealRandomAccessible + ?Sized> RealRandomAccessible for &R {
    type T = R::T;
    #[inline(always)]
    fn num_dimensions(&self) -> usize { R::num_dimensions(self) }
    #[inline(always)]
    fn at_real(&self, pos: &[f64]) -> Self::T { R::at_real(self, pos) }
}

// ----------------------------------------------------------------------------

/// A way of estimating the value of `A` between its integer positions.
pub trait Interpolator<A: RandomAccessible> {
    fn interpolate(&self, source: &A, pos: &[f64]) -> A::T;
}

/// Reads the nearest integer position. Halves round up.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NearestNeighbor;

impl<A: RandomAccessible> Interpolator<A> for NearestNeighbor {
    fn interpolate(&self, source: &A, pos: &[f64]) -> A::T {
        let nearest: Vec<i64> = pos.iter().map(|x| (x + 0.5).floor() as i64).collect();
        source.at(&nearest)
    }
}

/// Weights the `2^n` integer positions surrounding a real position by their
/// proximity. The sum is computed in `f64`.
///
/// Corners with weight zero are not read, so sampling exactly at an integer
/// position reads only that position.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NLinear;

impl<A: RandomAccessible> Interpolator<A> for NLinear where A::T: Pixel {
    fn interpolate(&self, source: &A, pos: &[f64]) -> A::T {
        let n = pos.len();
        let base: Vec<i64> = pos.iter().map(|x| x.floor() as i64).collect();
        let frac: Vec<f64> = pos.iter().zip(&base).map(|(x, &b)| x - b as f64).collect();
        let mut corner = vec![0; n];
        let mut sum = 0.0;
        for bits in 0..1usize << n {
            let mut weight = 1.0;
            for d in 0..n {
                if bits & (1 << d) == 0 {
                    corner[d] = base[d];
                    weight *= 1.0 - frac[d];
                } else {
                    corner[d] = base[d] + 1;
                    weight *= frac[d];
                }
            }
            if weight != 0.0 { sum += weight * source.at(&corner).real_double(); }
        }
        A::T::from_real(sum)
    }
}

// ----------------------------------------------------------------------------

/// A [`RandomAccessible`] made real-valued by an [`Interpolator`]. The
/// return type of [`RandomAccessible::interpolate()`].
///
/// ```
/// use imgview::{Img, View, RandomAccessible, RealRandomAccessible, NLinear};
/// let a = Img::new(&[2], [10.0, 20.0]);
/// let r = a.extend_border().interpolate(NLinear);
/// assert_eq!(r.at_real(&[0.25]), 12.5);
/// assert_eq!(r.at_real(&[7.0]), 20.0);
/// ```
#[derive(Debug, Clone)]
pub struct Interpolant<A, I> {
    source: A,
    interpolator: I,
}

impl<A: RandomAccessible, I: Interpolator<A>> Interpolant<A, I> {
    pub fn new(source: A, interpolator: I) -> Self { Self {source, interpolator} }

    pub fn source(&self) -> &A { &self.source }
}

impl<A: RandomAccessible, I: Interpolator<A>> RealRandomAccessible for Interpolant<A, I> {
    type T = A::T;

    fn num_dimensions(&self) -> usize { self.source.num_dimensions() }

    #[track_caller]
    fn at_real(&self, pos: &[f64]) -> Self::T {
        if pos.len() != self.num_dimensions() {
            or_panic(Err(super::Error::DimensionMismatch {
                expected: self.num_dimensions(),
                got: pos.len(),
            }))
        }
        self.interpolator.interpolate(&self.source, pos)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Img, View};

    #[test]
    fn nearest_neighbor() {
        let a = Img::new(&[3], [1, 2, 3]);
        let r = (&a).extend_zero().interpolate(NearestNeighbor);
        assert_eq!(r.at_real(&[0.49]), 1);
        assert_eq!(r.at_real(&[0.5]), 2);
        assert_eq!(r.at_real(&[-0.7]), 0);
        assert_eq!(r.at_real(&[2.2]), 3);
    }

    #[test]
    fn bilinear() {
        let a = Img::new(&[2, 2], [0.0, 1.0, 2.0, 3.0]);
        let r = (&a).extend_zero().interpolate(NLinear);
        assert_eq!(r.at_real(&[0.5, 0.5]), 1.5);
        assert_eq!(r.at_real(&[1.0, 0.25]), 1.5);
        assert_eq!(r.at_real(&[1.0, 1.0]), 3.0);
        assert_eq!(r.at_real(&[1.5, 1.0]), 1.5);
    }

    #[test]
    fn integer_pixels_round() {
        let a = Img::new(&[2], [0u8, 3]);
        let r = a.extend_border().interpolate(NLinear);
        assert_eq!(r.at_real(&[0.5]), 2);
        assert_eq!(r.at_real(&[0.4]), 1);
    }

    #[test]
    fn exact_positions_stay_in_bounds() {
        let a = Img::new(&[2], [4.0f32, 8.0]);
        let r = (&a).interpolate(NLinear);
        assert_eq!(r.at_real(&[1.0]), 8.0);
    }

    #[test]
    #[should_panic(expected = "mismatch")]
    fn wrong_dimensionality() {
        let a = Img::new(&[2], [4.0, 8.0]);
        a.extend_zero().interpolate(NLinear).at_real(&[0.0, 0.0]);
    }
}

//! Rotation of 2- and 3-dimensional data about a coordinate axis.

use nalgebra::{Matrix3, Matrix4, Vector3, Vector4};
use tracing::{debug};

use super::{Error, Result, Interval, RandomAccessible, View, RealRandomAccessible, impl_ops_for_view};
use super::error::{or_panic};

/// Bounding-box coordinates closer than this to an integer are snapped to it.
const SNAP: f64 = 1e-9;

/// A rotated copy of a [`RealRandomAccessible`], sampled on an integer grid.
/// The return type of [`View::rotate()`].
///
/// The rotation is about an axis through the center of the source interval.
/// The result is lazy: each `at()` maps its position back into the source
/// and samples there.
///
/// ```
/// use imgview::{Img, View};
/// let a = Img::new(&[2, 2], [1, 2, 3, 4]);
/// let r = a.rotate(90.0, 2).unwrap();
/// assert_eq!(r.copy().as_slice(), [2, 4, 1, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Rotated<R> {
    source: R,
    interval: Interval,
    transform: Matrix4<f64>,
    inverse: Matrix4<f64>,
}

impl<R: RealRandomAccessible> Rotated<R> {
    /// Rotate `source` by `angle` degrees about `axis`, around the center of
    /// `interval`.
    ///
    /// `interval` must have 2 or 3 dimensions, matching `source`. With 2
    /// dimensions the rotation is in the plane, and `axis` must be `2`.
    pub fn new(source: R, interval: &Interval, angle: f64, axis: usize) -> Result<Self> {
        let ndims = interval.num_dimensions();
        if source.num_dimensions() != ndims {
            return Err(Error::DimensionMismatch { expected: source.num_dimensions(), got: ndims });
        }
        match ndims {
            2 if axis != 2 => return Err(Error::AxisOutOfRange { axis, ndims: 3 }),
            3 if axis > 2 => return Err(Error::AxisOutOfRange { axis, ndims }),
            2 | 3 => {},
            _ => return Err(Error::UnsupportedDimensionality { ndims, supported: "2 or 3" }),
        }
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for d in 0..ndims {
            min[d] = interval.min(d) as f64;
            max[d] = interval.max(d) as f64;
        }
        let mut center = Vector3::from_fn(|d, _| (min[d] + max[d]) / 2.0);
        center[axis] = 0.0;

        let transform = Matrix4::new_translation(&center)
            * rotation_matrix(angle, axis).to_homogeneous()
            * Matrix4::new_translation(&-center);
        let inverse = transform.try_inverse().ok_or(Error::SingularTransform)?;

        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        for bits in 0..8 {
            let corner = Vector4::from_fn(|d, _| match d {
                3 => 1.0,
                _ if bits & (1 << d) == 0 => min[d],
                _ => max[d],
            });
            let image = transform * corner;
            for d in 0..3 {
                lo[d] = lo[d].min(snap(image[d]));
                hi[d] = hi[d].max(snap(image[d]));
            }
        }
        let bounding_box = Interval::smallest_containing(&lo[..ndims], &hi[..ndims]);
        debug!(?bounding_box, angle, axis, "rotated");

        Ok(Self {source, interval: bounding_box, transform, inverse})
    }

    pub fn source(&self) -> &R { &self.source }

    /// The homogeneous matrix mapping source coordinates to `self`'s.
    ///
    /// For 2-dimensional data the third coordinate is zero.
    pub fn transform(&self) -> &Matrix4<f64> { &self.transform }
}

/// The rotation by `-angle` degrees about `axis`. Rotating the sampling grid
/// the opposite way rotates the data by `angle`.
fn rotation_matrix(angle: f64, axis: usize) -> Matrix3<f64> {
    let (s, c) = (-angle).to_radians().sin_cos();
    match axis {
        0 => Matrix3::new(
            1.0, 0.0, 0.0,
            0.0, c, -s,
            0.0, s, c,
        ),
        1 => Matrix3::new(
            c, 0.0, s,
            0.0, 1.0, 0.0,
            -s, 0.0, c,
        ),
        _ => Matrix3::new(
            c, -s, 0.0,
            s, c, 0.0,
            0.0, 0.0, 1.0,
        ),
    }
}

fn snap(x: f64) -> f64 {
    let r = x.round();
    if (x - r).abs() < SNAP { r } else { x }
}

impl<R: RealRandomAccessible> RandomAccessible for Rotated<R> {
    type T = R::T;

    fn num_dimensions(&self) -> usize { self.interval.num_dimensions() }

    #[track_caller]
    fn at(&self, pos: &[i64]) -> Self::T {
        or_panic(self.interval.check_length(pos.len()));
        let p = Vector4::from_fn(|d, _| match d {
            3 => 1.0,
            _ => pos.get(d).map_or(0.0, |&x| x as f64),
        });
        let q = self.inverse * p;
        self.source.at_real(&q.as_slice()[..pos.len()])
    }
}

impl<R: RealRandomAccessible> View for Rotated<R> {
    fn interval(&self) -> &Interval { &self.interval }
}

impl_ops_for_view!([R,] Rotated<R>);

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::{Img, Extension, NearestNeighbor};

    fn ramp() -> Img<i32> { Img::from_fn(&[3, 3], |pos| (pos[0] + 3 * pos[1] + 1) as i32) }

    #[test]
    fn zero_is_identity() {
        let a = Img::from_fn(&[4, 3], |pos| (pos[0] * 7 + pos[1]) as f64);
        let r = (&a).rotate(0.0, 2).unwrap();
        assert_eq!(r.interval(), a.interval());
        assert_eq!(r.copy(), a);

        let v = Img::from_fn(&[2, 3, 4], |pos| (pos[0] + 2 * pos[1] + 6 * pos[2]) as f32);
        for axis in 0..3 {
            assert_eq!((&v).rotate(0.0, axis).unwrap().copy(), v);
        }
    }

    #[test]
    fn quarter_turn() {
        let a = ramp();
        let r = (&a).rotate(90.0, 2).unwrap();
        assert_eq!(r.interval(), a.interval());
        assert_eq!(r.at(&[0, 2]), a[[0, 0]]);
        assert_eq!(r.at(&[2, 2]), a[[0, 2]]);
        let expected = Img::from_fn(&[3, 3], |pos| (2 - pos[1] + 3 * pos[0] + 1) as i32);
        assert_eq!(r.copy(), expected);
    }

    #[test]
    fn quarter_turn_3d() {
        let v = Img::from_fn(&[1, 3, 3], |pos| (pos[1] + 3 * pos[2] + 1) as i32);
        let r = (&v).rotate(90.0, 0).unwrap();
        assert_eq!(r.interval(), v.interval());
        let expected = Img::from_fn(&[1, 3, 3], |pos| (2 - pos[2] + 3 * pos[1] + 1) as i32);
        assert_eq!(r.copy(), expected);
    }

    #[test]
    fn diagonal_grows() {
        let a = Img::<f64>::filled(&[5, 5], 1.0);
        let r = (&a).rotate(45.0, 2).unwrap();
        assert_eq!(r.interval(), &Interval::new([-1, -1], [5, 5]).unwrap());
        assert!((r.at(&[2, 2]) - 1.0).abs() < 1e-9);
        assert_eq!(r.at(&[-1, -1]), 0.0);
    }

    #[test]
    fn full_turn() {
        let a = ramp();
        let r = (&a).rotate_with(360.0, 2, Extension::Border, NearestNeighbor).unwrap();
        assert_eq!(r.copy(), a);
    }

    #[test]
    fn errors() {
        let line = Img::new(&[3], [1, 2, 3]);
        assert_eq!(
            (&line).rotate(10.0, 0).unwrap_err(),
            Error::UnsupportedDimensionality { ndims: 1, supported: "2 or 3" },
        );
        assert_eq!(
            ramp().rotate(10.0, 0).unwrap_err(),
            Error::AxisOutOfRange { axis: 0, ndims: 3 },
        );
        let v = Img::<u8>::zeros(&[2, 2, 2]);
        assert_eq!(v.rotate(10.0, 3).unwrap_err(), Error::AxisOutOfRange { axis: 3, ndims: 3 });
    }

    #[test]
    fn arithmetic() {
        let a = ramp();
        let r = (&a).rotate(90.0, 2).unwrap();
        let twice = &r + &r;
        assert_eq!(twice.at(&[0, 2]), 2);
    }
}

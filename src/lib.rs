//! A pure-Rust library for manipulating n-dimensional images through
//! lightweight views.
//!
//! [`Img<T>`] owns a dense buffer of `T` values together with an
//! [`Interval`], the inclusive bounding box of the positions at which it is
//! defined. Positions are `&[i64]`s, axis 0 varies fastest in memory, and the
//! min of an `Interval` need not be the origin.
//!
//! Trait [`View`] is the main way to access and manipulate images. Unlike
//! `Img`, a `View` need not store anything: it may alias the buffer of an
//! `Img` through a strided [`Layout`] ([`ImgView`], [`ImgViewMut`]), or
//! compute its elements on demand ([`View::map()`], [`Rotated`], [`Crop`]).
//! Call [`View::copy()`] to materialise a `View` into an `Img`.
//!
//! Three families of operation are built on top:
//!
//! - Arithmetic. `+`, `-`, `*` and `/` work pixel-wise between views and
//!   between a view and a scalar, in either order. See [`ops`].
//! - Slicing. [`Strided::slice()`] takes a tuple of [`Selector`]s, in the
//!   manner of NumPy, and returns a view of the same buffer.
//! - Rotation. [`View::rotate()`] returns a lazy view of a 2- or
//!   3-dimensional image rotated about an axis.
//!
//! ```
//! use imgview::{Img, RandomAccessible, View, Slice, SL, ALL};
//! let a = Img::from_fn(&[4, 3], |pos| (pos[0] + 10 * pos[1]) as i32);
//! let row = a.slice((ALL, 1)).unwrap();
//! assert_eq!(row.iter().collect::<Vec<_>>(), [10, 11, 12, 13]);
//! let b = a.slice((-SL, Slice::inclusive(1, 2))).unwrap();
//! assert_eq!((&b + 1).at(&[0, 1]), 14);
//! ```

mod error;
pub use error::{Error, Result};

mod interval;
pub use interval::{Interval, Positions};

mod pixel;
pub use pixel::{Pixel, IntegerPixel, RealPixel, Scalar, PixelExt, Widen, Wide};

mod layout;
pub use layout::{Layout};

pub mod view;
pub use view::{RandomAccessible, View, ViewMut, Mask};

mod img;
pub use img::{Img, ImgView, ImgViewMut, Strided};

mod select;
pub use select::{Selector, Slice, ALL, SL, IntoSelectors};

pub mod ops;
pub use ops::{Binary, Operand, IntoOperand};

mod extend;
pub use extend::{Extension, Extended, Crop};

mod interpolate;
pub use interpolate::{RealRandomAccessible, Interpolator, Interpolant, NearestNeighbor, NLinear};

mod rotate;
pub use rotate::{Rotated};

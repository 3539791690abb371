//! NumPy-like selection of parts of strided views.
//!
//! A selection is a list of [`Selector`]s, one per axis. See
//! [`Strided::slice()`] for the entry point.

use std::fmt::{self, Debug};
use std::ops::{Neg, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use tracing::{trace};

use super::{Error, Result, Interval, Strided};

/// A possibly unbounded, possibly stepped range of coordinates along one
/// axis. Both bounds are inclusive.
///
/// A negative `step` walks the range from `max` down to `min`.
///
/// ```
/// use imgview::{Img, View, Slice, SL};
/// let a = Img::new(&[5], [0, 1, 2, 3, 4]);
/// let values = |s: Slice| a.slice((s,)).unwrap().iter().collect::<Vec<_>>();
/// assert_eq!(values(-SL), [4, 3, 2, 1, 0]);
/// assert_eq!(values(Slice::inclusive(1, 3)), [1, 2, 3]);
/// assert_eq!(values(Slice::exclusive(0, 5).step(2)), [0, 2, 4]);
/// assert_eq!(values(Slice::full().step(-2)), [4, 2, 0]);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub step: i64,
}

/// The whole axis.
pub const SL: Slice = Slice::full();

impl Slice {
    /// The whole axis.
    pub const fn full() -> Self { Self {min: None, max: None, step: 1} }

    /// The coordinates `min ..= max`.
    pub const fn inclusive(min: i64, max: i64) -> Self {
        Self {min: Some(min), max: Some(max), step: 1}
    }

    /// The coordinates `start .. stop`.
    pub const fn exclusive(start: i64, stop: i64) -> Self {
        Self {min: Some(start), max: Some(stop - 1), step: 1}
    }

    /// The coordinates from `min` to the end of the axis.
    pub const fn from_min(min: i64) -> Self { Self {min: Some(min), max: None, step: 1} }

    /// The coordinates from the start of the axis to `max`, inclusive.
    pub const fn to_max(max: i64) -> Self { Self {min: None, max: Some(max), step: 1} }

    /// Replace the step.
    pub const fn step(self, step: i64) -> Self { Self {step, ..self} }
}

impl Default for Slice {
    fn default() -> Self { Self::full() }
}

impl Neg for Slice {
    type Output = Self;
    fn neg(self) -> Self { Self {step: -self.step, ..self} }
}

impl Debug for Slice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let bound = |b: Option<i64>| b.map_or_else(String::new, |b| b.to_string());
        write!(f, "{}..={}", bound(self.min), bound(self.max))?;
        if self.step != 1 { write!(f, ";{}", self.step)?; }
        Ok(())
    }
}

impl From<Range<i64>> for Slice {
    fn from(r: Range<i64>) -> Self { Self::exclusive(r.start, r.end) }
}

impl From<RangeInclusive<i64>> for Slice {
    fn from(r: RangeInclusive<i64>) -> Self { Self::inclusive(*r.start(), *r.end()) }
}

impl From<RangeFrom<i64>> for Slice {
    fn from(r: RangeFrom<i64>) -> Self { Self::from_min(r.start) }
}

impl From<RangeTo<i64>> for Slice {
    fn from(r: RangeTo<i64>) -> Self { Self::to_max(r.end - 1) }
}

impl From<RangeToInclusive<i64>> for Slice {
    fn from(r: RangeToInclusive<i64>) -> Self { Self::to_max(r.end) }
}

impl From<RangeFull> for Slice {
    fn from(_: RangeFull) -> Self { Self::full() }
}

// ----------------------------------------------------------------------------

/// What to select along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Fix the axis at this coordinate, removing it.
    Index(i64),

    /// As many whole axes as are not otherwise selected. At most one `All`
    /// may appear in a selection.
    All,

    /// Keep part of the axis.
    Range(Slice),
}

/// Stands for all axes that are not otherwise selected.
pub const ALL: Selector = Selector::All;

impl From<i64> for Selector {
    fn from(i: i64) -> Self { Self::Index(i) }
}

impl From<i32> for Selector {
    fn from(i: i32) -> Self { Self::Index(i as i64) }
}

impl From<Slice> for Selector {
    fn from(s: Slice) -> Self { Self::Range(s) }
}

macro_rules! impl_from_range {
    ($($r:ty),*) => {$(
        impl From<$r> for Selector {
            fn from(r: $r) -> Self { Self::Range(r.into()) }
        }
    )*};
}

impl_from_range!(
    Range<i64>, RangeInclusive<i64>, RangeFrom<i64>,
    RangeTo<i64>, RangeToInclusive<i64>, RangeFull
);

// ----------------------------------------------------------------------------

/// Implemented by lists of [`Selector`]s.
///
/// Tuples of up to six values that convert to `Selector` can be mixed freely:
/// `(1, ALL, -SL, 2..5)`.
pub trait IntoSelectors {
    fn into_selectors(self) -> Vec<Selector>;
}

impl IntoSelectors for Vec<Selector> {
    fn into_selectors(self) -> Vec<Selector> { self }
}

impl IntoSelectors for &[Selector] {
    fn into_selectors(self) -> Vec<Selector> { self.to_vec() }
}

impl<const N: usize> IntoSelectors for [Selector; N] {
    fn into_selectors(self) -> Vec<Selector> { self.to_vec() }
}

impl IntoSelectors for () {
    fn into_selectors(self) -> Vec<Selector> { Vec::new() }
}

macro_rules! impl_into_selectors_for_tuple {
    ($($s:ident),*) => {
        impl<$($s: Into<Selector>),*> IntoSelectors for ($($s,)*) {
            #[allow(non_snake_case)]
            fn into_selectors(self) -> Vec<Selector> {
                let ($($s,)*) = self;
                vec![$($s.into()),*]
            }
        }
    };
}

impl_into_selectors_for_tuple!(A);
impl_into_selectors_for_tuple!(A, B);
impl_into_selectors_for_tuple!(A, B, C);
impl_into_selectors_for_tuple!(A, B, C, D);
impl_into_selectors_for_tuple!(A, B, C, D, E);
impl_into_selectors_for_tuple!(A, B, C, D, E, F);

// ----------------------------------------------------------------------------

/// Replace a single `ALL` with enough whole-axis slices to select every axis,
/// and pad a short selection with whole-axis slices.
fn expand(selectors: Vec<Selector>, ndims: usize) -> Result<Vec<Selector>> {
    let all_count = selectors.iter().filter(|s| **s == Selector::All).count();
    if all_count > 1 { return Err(Error::AmbiguousAll); }
    let mentioned = selectors.len() - all_count;
    if mentioned > ndims {
        return Err(Error::TooManySelectors { selectors: mentioned, ndims });
    }
    let split = selectors.iter().position(|s| *s == Selector::All).unwrap_or(selectors.len());
    let mut ret = vec![Selector::Range(SL); ndims];
    ret[..split].copy_from_slice(&selectors[..split]);
    let suffix = &selectors[(split + 1).min(selectors.len())..];
    ret[ndims - suffix.len()..].copy_from_slice(suffix);
    Ok(ret)
}

/// The result of resolving a [`Slice`] against an axis: the coordinate of the
/// first element `m`, of the last element `big_m`, and the step.
///
/// An unbounded slice of an empty axis selects the whole (empty) axis, in
/// ascending order whatever the sign of the step.
fn bounds(slice: &Slice, interval: &Interval, axis: usize) -> Result<(i64, i64, i64)> {
    if let (Some(min), Some(max)) = (slice.min, slice.max) {
        if max < min { return Err(Error::ReversedBounds { min, max }); }
    }
    if slice.step == 0 { return Err(Error::ZeroStep); }
    if interval.dimension(axis) == 0 && slice.min.is_none() && slice.max.is_none() {
        return Ok((interval.min(axis), interval.max(axis), slice.step.saturating_abs()));
    }
    let (m, big_m) = if slice.step < 0 {
        (slice.max.unwrap_or(interval.max(axis)), slice.min.unwrap_or(interval.min(axis)))
    } else {
        (slice.min.unwrap_or(interval.min(axis)), slice.max.unwrap_or(interval.max(axis)))
    };
    if (big_m < m && slice.step > 0) || (big_m > m && slice.step < 0) {
        return Err(Error::InconsistentRange { min: m, max: big_m, step: slice.step });
    }
    interval.check_position(axis, m)?;
    interval.check_position(axis, big_m)?;
    Ok((m, big_m, slice.step))
}

/// Apply `selectors` to `view`.
pub(crate) fn select<S: Strided>(view: S, selectors: Vec<Selector>) -> Result<S> {
    let ndims = view.layout().num_dimensions();
    let selectors = expand(selectors, ndims)?;
    trace!(?selectors, "expanded selection");

    let mut view = view;
    for (axis, s) in selectors.iter().enumerate().rev() {
        if let Selector::Index(pos) = *s {
            view = view.hyper_slice(axis, pos)?;
        }
    }

    let slices: Vec<Slice> = selectors.iter().filter_map(|s| match s {
        Selector::Range(slice) => Some(*slice),
        _ => None,
    }).collect();
    if slices.is_empty() { return Ok(view); }

    let mut min = Vec::with_capacity(slices.len());
    let mut max = Vec::with_capacity(slices.len());
    let mut steps = Vec::with_capacity(slices.len());
    for (axis, slice) in slices.iter().enumerate() {
        let (m, big_m, step) = bounds(slice, view.layout().interval(), axis)?;
        if step < 0 && big_m < m {
            let mut offset = vec![0; slices.len()];
            offset[axis] = m.checked_add(big_m).ok_or_else(|| Error::InvalidInterval {
                reason: format!("axis {}: cannot reverse {}..={}", axis, big_m, m),
            })?;
            view = view.invert_axis(axis)?.translate(&offset)?;
            trace!(axis, m, big_m, "inverted axis");
            min.push(big_m);
            max.push(m);
            steps.push(step.saturating_neg());
        } else {
            min.push(m);
            max.push(big_m);
            steps.push(step);
        }
    }

    let view = view.restrict(&Interval::new(min, max)?)?;
    if steps.iter().any(|&s| s > 1) {
        trace!(?steps, "subsampling");
        return view.subsample(&steps);
    }
    Ok(view)
}

// ----------------------------------------------------------------------------

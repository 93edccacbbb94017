//! A module containing [`Range`], [`BoundKind`] and the constructor
//! functions for ranges.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether an end-point of a [`Range`] is part of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundKind {
	/// The end-point is excluded from the range.
	Open,
	/// The end-point is included in the range.
	Closed,
	/// The range is unbounded on this side. Only ever found next to an
	/// infinite end-point.
	Infinite,
}

/// The error returned when constructing a [`Range`] whose lower point is
/// larger than its upper point (or when either point is NaN).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("lower point {lower:?} can not be larger than upper point {upper:?}")]
pub struct InvalidRangeError {
	/// The lower point that was given.
	pub lower: f64,
	/// The upper point that was given.
	pub upper: f64,
}

/// A contiguous span of the real line with independently open, closed
/// or infinite bounds on each side.
///
/// Ranges are immutable once built. If the lower point is `-inf` the
/// lower bound is always [`BoundKind::Infinite`], no matter what was
/// requested, and likewise for an upper point of `+inf`.
///
/// # Examples
/// ```
/// use intersect_intervals::{BoundKind, Range};
///
/// let range = Range::open_closed(2.0, 5.0).unwrap();
/// assert_eq!(range.to_string(), "(2.0..5.0]");
///
/// let unbounded = Range::closed(f64::NEG_INFINITY, 1.0).unwrap();
/// assert_eq!(unbounded.lower_bound(), BoundKind::Infinite);
///
/// assert!(Range::closed(3.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RangeParts"))]
pub struct Range {
	lower_point: f64,
	lower_bound: BoundKind,
	upper_point: f64,
	upper_bound: BoundKind,
}

impl Range {
	/// Makes a new [`Range`] from its two end-points and their bound
	/// kinds.
	///
	/// Returns an [`InvalidRangeError`] if `lower_point > upper_point`
	/// or if either point is NaN.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::{BoundKind, Range};
	///
	/// let range =
	/// 	Range::new(1.0, BoundKind::Closed, f64::INFINITY, BoundKind::Closed)
	/// 		.unwrap();
	///
	/// assert_eq!(range.upper_bound(), BoundKind::Infinite);
	/// assert_eq!(range.to_string(), "[1.0..inf)");
	/// ```
	pub fn new(
		lower_point: f64,
		lower_bound: BoundKind,
		upper_point: f64,
		upper_bound: BoundKind,
	) -> Result<Range, InvalidRangeError> {
		// NaN fails this as well
		if !(lower_point <= upper_point) {
			return Err(InvalidRangeError {
				lower: lower_point,
				upper: upper_point,
			});
		}

		Ok(Range::new_unchecked(
			lower_point,
			lower_bound,
			upper_point,
			upper_bound,
		))
	}

	/// Builds a range without checking the point order, only normalizing
	/// infinite end-points.
	pub(crate) fn new_unchecked(
		lower_point: f64,
		lower_bound: BoundKind,
		upper_point: f64,
		upper_bound: BoundKind,
	) -> Range {
		Range {
			lower_point,
			lower_bound: if lower_point == f64::NEG_INFINITY {
				BoundKind::Infinite
			} else {
				lower_bound
			},
			upper_point,
			upper_bound: if upper_point == f64::INFINITY {
				BoundKind::Infinite
			} else {
				upper_bound
			},
		}
	}

	/// A closed range containing only `point`, `[point..point]`.
	pub fn singleton(point: f64) -> Result<Range, InvalidRangeError> {
		Range::new(point, BoundKind::Closed, point, BoundKind::Closed)
	}

	/// An open-open range, `(lower..upper)`.
	pub fn open(lower: f64, upper: f64) -> Result<Range, InvalidRangeError> {
		Range::new(lower, BoundKind::Open, upper, BoundKind::Open)
	}

	/// A closed-closed range, `[lower..upper]`.
	pub fn closed(lower: f64, upper: f64) -> Result<Range, InvalidRangeError> {
		Range::new(lower, BoundKind::Closed, upper, BoundKind::Closed)
	}

	/// An open-closed range, `(lower..upper]`.
	pub fn open_closed(
		lower: f64,
		upper: f64,
	) -> Result<Range, InvalidRangeError> {
		Range::new(lower, BoundKind::Open, upper, BoundKind::Closed)
	}

	/// A closed-open range, `[lower..upper)`.
	pub fn closed_open(
		lower: f64,
		upper: f64,
	) -> Result<Range, InvalidRangeError> {
		Range::new(lower, BoundKind::Closed, upper, BoundKind::Open)
	}

	/// The lower end-point of the range.
	pub fn lower_point(&self) -> f64 {
		self.lower_point
	}

	/// The upper end-point of the range.
	pub fn upper_point(&self) -> f64 {
		self.upper_point
	}

	/// The bound kind of the lower end-point.
	pub fn lower_bound(&self) -> BoundKind {
		self.lower_bound
	}

	/// The bound kind of the upper end-point.
	pub fn upper_bound(&self) -> BoundKind {
		self.upper_bound
	}

	/// Returns `true` if `lower_point <= point <= upper_point`.
	///
	/// This ignores the bound kinds, so the end-points of open ranges are
	/// reported as contained. Use [`Range::contains_strict()`] for exact
	/// membership.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::Range;
	///
	/// let range = Range::open(2.0, 5.0).unwrap();
	///
	/// assert_eq!(range.contains(2.0), true);
	/// assert_eq!(range.contains_strict(2.0), false);
	/// ```
	pub fn contains(&self, point: f64) -> bool {
		point >= self.lower_point && point <= self.upper_point
	}

	/// Returns `true` if `point` is inside the range, respecting open
	/// end-points.
	pub fn contains_strict(&self, point: f64) -> bool {
		let above_lower = match self.lower_bound {
			BoundKind::Closed => point >= self.lower_point,
			BoundKind::Open | BoundKind::Infinite => point > self.lower_point,
		};
		let below_upper = match self.upper_bound {
			BoundKind::Closed => point <= self.upper_point,
			BoundKind::Open | BoundKind::Infinite => point < self.upper_point,
		};

		above_lower && below_upper
	}

	/// Returns `true` if both end-points are the same point.
	pub fn is_singleton(&self) -> bool {
		self.lower_point == self.upper_point
	}

	/// Returns the range common to `self` and `other`, or `None` if they
	/// share no point.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::Range;
	///
	/// let a = Range::closed(2.0, 7.0).unwrap();
	/// let b = Range::open_closed(2.5, 6.5).unwrap();
	/// let c = Range::closed_open(7.0, 9.0).unwrap();
	///
	/// assert_eq!(a.overlap(&b), Some(b));
	/// assert_eq!(a.overlap(&c), Some(Range::singleton(7.0).unwrap()));
	/// assert_eq!(b.overlap(&c), None);
	/// ```
	pub fn overlap(&self, other: &Range) -> Option<Range> {
		let (lower_point, lower_bound) = if self.lower_point > other.lower_point
		{
			(self.lower_point, self.lower_bound)
		} else if self.lower_point < other.lower_point {
			(other.lower_point, other.lower_bound)
		} else {
			(self.lower_point, tie_bound(self.lower_bound, other.lower_bound))
		};

		let (upper_point, upper_bound) = if self.upper_point < other.upper_point
		{
			(self.upper_point, self.upper_bound)
		} else if self.upper_point > other.upper_point {
			(other.upper_point, other.upper_bound)
		} else {
			(other.upper_point, tie_bound(self.upper_bound, other.upper_bound))
		};

		if !(lower_point <= upper_point) {
			return None;
		}

		let overlap = Range::new_unchecked(
			lower_point,
			lower_bound,
			upper_point,
			upper_bound,
		);

		// a single open point holds nothing
		if overlap.is_singleton()
			&& (overlap.lower_bound == BoundKind::Open
				|| overlap.upper_bound == BoundKind::Open)
		{
			return None;
		}

		Some(overlap)
	}
}

fn tie_bound(a: BoundKind, b: BoundKind) -> BoundKind {
	if a == BoundKind::Open || b == BoundKind::Open {
		BoundKind::Open
	} else {
		BoundKind::Closed
	}
}

impl fmt::Display for Range {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = match self.lower_bound {
			BoundKind::Closed => '[',
			BoundKind::Open | BoundKind::Infinite => '(',
		};
		let close = match self.upper_bound {
			BoundKind::Closed => ']',
			BoundKind::Open | BoundKind::Infinite => ')',
		};

		write!(
			f,
			"{open}{:?}..{:?}{close}",
			self.lower_point, self.upper_point
		)
	}
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RangeParts {
	lower_point: f64,
	lower_bound: BoundKind,
	upper_point: f64,
	upper_bound: BoundKind,
}

#[cfg(feature = "serde")]
impl TryFrom<RangeParts> for Range {
	type Error = InvalidRangeError;

	fn try_from(parts: RangeParts) -> Result<Self, Self::Error> {
		Range::new(
			parts.lower_point,
			parts.lower_bound,
			parts.upper_point,
			parts.upper_bound,
		)
	}
}

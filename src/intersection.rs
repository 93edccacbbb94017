//! A module containing [`Intersection`].

use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::range::BoundKind;
use crate::{IntervalSet, Range};

/// The default distance [`Intersection::nearest()`] moves away from an
/// open end-point.
pub const DEFAULT_ACCURACY: f64 = 0.01;

/// The error returned by [`Intersection::nearest()`] when the
/// intersection holds no ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("intersection of intervals is empty")]
pub struct EmptyIntersectionError;

/// The intersection of several [`IntervalSet`]s, with support for
/// snapping points to their nearest value inside it.
///
/// # Examples
/// ```
/// use intersect_intervals::{Intersection, IntervalSet, Range};
///
/// // (-inf..1] U [2..+inf)
/// let first = IntervalSet::from_ranges([
/// 	Range::closed(f64::NEG_INFINITY, 1.0).unwrap(),
/// 	Range::closed(2.0, f64::INFINITY).unwrap(),
/// ]);
/// // [0..3] U [5..+inf)
/// let second = IntervalSet::from_ranges([
/// 	Range::closed(0.0, 3.0).unwrap(),
/// 	Range::closed(5.0, f64::INFINITY).unwrap(),
/// ]);
///
/// let intersection = Intersection::new([first, second]);
///
/// assert_eq!(
/// 	intersection.to_string(),
/// 	"Intersection{[0.0..1.0], [2.0..3.0], [5.0..inf)}"
/// );
/// assert_eq!(intersection.nearest(4.5), Ok(5.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
	inner: IntervalSet,
	accuracy: f64,
}

impl Intersection {
	/// Intersects the given sets using [`DEFAULT_ACCURACY`] for
	/// [`Intersection::nearest()`].
	///
	/// No sets gives an empty intersection and a single set is taken as
	/// it is. Otherwise every range of each following set is intersected
	/// with the running result (see [`IntervalSet::intersect_with()`])
	/// and the pieces become the new running result.
	pub fn new(sets: impl IntoIterator<Item = IntervalSet>) -> Self {
		Intersection::with_accuracy(sets, DEFAULT_ACCURACY)
	}

	/// Like [`Intersection::new()`], but [`Intersection::nearest()`]
	/// moves `accuracy` away from open end-points.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::{Intersection, IntervalSet, Range};
	///
	/// let intersection = Intersection::with_accuracy(
	/// 	[IntervalSet::from_ranges([Range::open(1.0, 2.0).unwrap()])],
	/// 	0.25,
	/// );
	///
	/// assert_eq!(intersection.nearest(0.0), Ok(1.25));
	/// assert_eq!(intersection.nearest(3.0), Ok(1.75));
	/// ```
	pub fn with_accuracy(
		sets: impl IntoIterator<Item = IntervalSet>,
		accuracy: f64,
	) -> Self {
		let mut sets = sets.into_iter();
		let Some(first_set) = sets.next() else {
			debug!("no interval sets given, intersection is empty");
			return Intersection {
				inner: IntervalSet::new(),
				accuracy,
			};
		};

		let result = sets.fold(first_set, |running, set| {
			let mut next = IntervalSet::new();
			for range in set.iter() {
				next.merge_all(running.intersect_with(*range));
			}

			debug!(
				"intersected {} ranges with {} ranges into {} ranges",
				running.len(),
				set.len(),
				next.len()
			);

			next
		});

		debug!("intersection holds {} ranges", result.len());

		Intersection {
			inner: result,
			accuracy,
		}
	}

	/// Adds a range straight into the intersection without intersecting
	/// it with anything.
	///
	/// Like [`IntervalSet::merge()`] nothing checks that the range is
	/// disjoint from the others, and `false` is returned if a range with
	/// the same end-points is already present.
	pub fn add(&mut self, range: Range) -> bool {
		self.inner.merge(range)
	}

	/// Returns a copy of the ranges in the intersection in ascending
	/// order.
	pub fn snapshot(&self) -> Vec<Range> {
		self.ranges().copied().collect()
	}

	/// Returns an iterator over the ranges in the intersection in
	/// ascending order.
	pub fn ranges(&self) -> impl DoubleEndedIterator<Item = &Range> {
		self.inner.iter()
	}

	/// Returns the number of ranges in the intersection.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the intersection holds no ranges.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// The distance [`Intersection::nearest()`] moves away from open
	/// end-points.
	pub fn accuracy(&self) -> f64 {
		self.accuracy
	}

	/// Returns the value inside the intersection that is nearest to
	/// `point`.
	///
	/// The search looks at the stored range ordered just below `point`
	/// and the one ordered just above it:
	///
	/// - if either range contains `point` (end-points included, whatever
	///   their bound kind, see [`Range::contains()`]), `point` itself is
	///   returned.
	/// - with nothing above, the upper end of the range below is
	///   returned, and with nothing below, the lower end of the range
	///   above. An open end-point is moved inwards by
	///   [`Intersection::accuracy()`].
	/// - if `point` falls in the gap between them, the side whose facing
	///   end-point is strictly closer wins. That side then answers with
	///   its *lower* point. The range below moves it up by the accuracy if
	///   its lower bound is open, the range above moves it down by the
	///   accuracy if its upper bound is open.
	///
	/// Returns an [`EmptyIntersectionError`] if the intersection holds no
	/// ranges.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::{
	/// 	EmptyIntersectionError, Intersection, IntervalSet, Range,
	/// };
	///
	/// let intersection = Intersection::new([
	/// 	IntervalSet::from_ranges([Range::open_closed(2.5, 6.5).unwrap()]),
	/// 	IntervalSet::from_ranges([Range::closed(2.0, 7.0).unwrap()]),
	/// ]);
	///
	/// assert_eq!(intersection.nearest(1.0), Ok(2.51));
	/// assert_eq!(intersection.nearest(4.0), Ok(4.0));
	/// assert_eq!(intersection.nearest(8.0), Ok(6.5));
	///
	/// let empty = Intersection::new(Vec::<IntervalSet>::new());
	/// assert_eq!(empty.nearest(1.0), Err(EmptyIntersectionError));
	/// ```
	pub fn nearest(&self, point: f64) -> Result<f64, EmptyIntersectionError> {
		if self.is_empty() {
			return Err(EmptyIntersectionError);
		}

		let (lower, higher) = self.inner.neighbours(point);

		let contains = |range: Option<&Range>| {
			range.is_some_and(|range| range.contains(point))
		};

		let result = match (lower, higher) {
			_ if contains(lower) || contains(higher) => {
				trace!("{point} is inside a range");
				point
			}
			(None, None) => return Err(EmptyIntersectionError),
			(Some(lower), None) => {
				trace!("{point} is above every range, snapping to {lower}");
				match lower.upper_bound() {
					BoundKind::Open => lower.upper_point() - self.accuracy,
					_ => lower.upper_point(),
				}
			}
			(None, Some(higher)) => {
				trace!("{point} is below every range, snapping to {higher}");
				match higher.lower_bound() {
					BoundKind::Open => higher.lower_point() + self.accuracy,
					_ => higher.lower_point(),
				}
			}
			(Some(lower), Some(higher)) => {
				let lower_distance = (lower.upper_point() - point).abs();
				let higher_distance = (higher.lower_point() - point).abs();

				if lower_distance < higher_distance {
					trace!("{point} is in a gap, snapping to {lower}");
					match lower.lower_bound() {
						BoundKind::Open => lower.lower_point() + self.accuracy,
						_ => lower.lower_point(),
					}
				} else {
					trace!("{point} is in a gap, snapping to {higher}");
					match higher.upper_bound() {
						BoundKind::Open => higher.lower_point() - self.accuracy,
						_ => higher.lower_point(),
					}
				}
			}
		};

		Ok(result)
	}
}

impl fmt::Display for Intersection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Intersection{{{}}}", self.ranges().format(", "))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn c(lower: f64, upper: f64) -> Range {
		Range::closed(lower, upper).unwrap()
	}
	fn oc(lower: f64, upper: f64) -> Range {
		Range::open_closed(lower, upper).unwrap()
	}
	fn co(lower: f64, upper: f64) -> Range {
		Range::closed_open(lower, upper).unwrap()
	}
	fn set<const N: usize>(ranges: [Range; N]) -> IntervalSet {
		IntervalSet::from_ranges(ranges)
	}

	fn three_sets() -> [IntervalSet; 3] {
		[
			set([
				c(f64::NEG_INFINITY, 1.0),
				c(2.0, 10.0),
				c(16.0, f64::INFINITY),
			]),
			set([c(-18.0, -15.0), c(-13.0, 0.0), oc(3.0, 20.0), c(22.0, 23.0)]),
			set([
				c(-18.0, -16.0),
				c(-13.0, -7.0),
				c(-4.0, -2.0),
				c(1.0, 2.0),
				c(3.0, 5.0),
				c(8.0, 11.0),
				c(14.0, 17.0),
				co(19.0, 23.0),
			]),
		]
	}
	fn basic() -> Intersection {
		Intersection::new(three_sets())
	}

	#[test]
	fn three_set_intersection() {
		assert_eq!(
			basic().snapshot(),
			[
				c(-18.0, -16.0),
				c(-13.0, -7.0),
				c(-4.0, -2.0),
				oc(3.0, 5.0),
				c(8.0, 10.0),
				c(16.0, 17.0),
				c(19.0, 20.0),
				co(22.0, 23.0),
			]
		);
	}

	#[test]
	fn nearest_tests() {
		assert_nearest(basic(), 4.5, Ok(4.5));
		assert_nearest(basic(), 3.08, Ok(3.08));
		assert_nearest(basic(), 100.0, Ok(22.99));
		assert_nearest(basic(), -20.0, Ok(-18.0));

		assert_nearest(basic(), -18.0, Ok(-18.0));
	}
	fn assert_nearest(
		intersection: Intersection,
		point: f64,
		result: Result<f64, EmptyIntersectionError>,
	) {
		assert_eq!(intersection.nearest(point), result);
	}

	#[test]
	fn nearest_open_end_point_counts_as_contained() {
		// 3.0 is excluded from (3..5] but still snaps to itself
		assert_nearest(basic(), 3.0, Ok(3.0));
		// same for the open upper end of the last range
		assert_nearest(basic(), 23.0, Ok(23.0));
		assert_nearest(basic(), 22.5, Ok(22.5));
	}

	#[test]
	fn nearest_in_gap() {
		// closer to (3..5], answered with its open lower point
		assert_nearest(basic(), 6.0, Ok(3.01));
		// equally far, the range above wins
		assert_nearest(basic(), 18.0, Ok(19.0));
		// closer to [8..10]
		assert_nearest(basic(), 7.5, Ok(8.0));
		// closer to [22..23), whose open upper bound moves the answer down
		assert_nearest(basic(), 21.8, Ok(21.99));
		// closer to [-4..-2]
		assert_nearest(basic(), -1.0, Ok(-4.0));
	}

	#[test]
	fn nearest_is_identity_inside_ranges() {
		let intersection = basic();
		for range in intersection.ranges() {
			let middle = (range.lower_point() + range.upper_point()) / 2.0;
			for point in [range.lower_point(), middle, range.upper_point()] {
				let nearest = intersection.nearest(point);
				if nearest != Ok(point) {
					dbg!(range, point, &nearest);
					panic!("nearest() moved a contained point!");
				}
			}
		}
	}

	#[test]
	fn open_lower_bound_is_nudged() {
		let intersection =
			Intersection::new([set([oc(2.5, 6.5)]), set([c(2.0, 7.0)])]);

		assert_eq!(intersection.snapshot(), [oc(2.5, 6.5)]);
		assert_nearest(intersection, 1.0, Ok(2.51));
	}

	#[test]
	fn infinite_bound_intersection() {
		let intersection = Intersection::new([
			set([c(f64::NEG_INFINITY, 5.0)]),
			set([co(3.0, 5.0)]),
		]);

		assert_eq!(intersection.snapshot(), [co(3.0, 5.0)]);
	}

	#[test]
	fn unbounded_results_keep_infinite_bounds() {
		let intersection = Intersection::new([
			set([c(f64::NEG_INFINITY, 1.0), c(2.0, f64::INFINITY)]),
			set([c(f64::NEG_INFINITY, 0.0), c(5.0, f64::INFINITY)]),
		]);

		let snapshot = intersection.snapshot();
		assert_eq!(
			snapshot,
			[c(f64::NEG_INFINITY, 0.0), c(5.0, f64::INFINITY)]
		);
		assert_eq!(snapshot[0].lower_bound(), BoundKind::Infinite);
		assert_eq!(snapshot[1].upper_bound(), BoundKind::Infinite);

		// infinite is not open, so nothing is nudged
		assert_nearest(intersection.clone(), f64::NEG_INFINITY, Ok(f64::NEG_INFINITY));
		assert_nearest(intersection, 1e9, Ok(1e9));
	}

	#[test]
	fn disjoint_sets_give_empty_intersection() {
		let intersection = Intersection::new([
			set([c(-100.0, 1.0), c(5.0, 10.0)]),
			set([c(2.0, 3.0), co(4.0, 5.0)]),
		]);

		assert!(intersection.is_empty());
		assert!(intersection.snapshot().is_empty());
		assert_nearest(intersection, 3.0, Err(EmptyIntersectionError));
	}

	#[test]
	fn no_sets_and_single_set() {
		let empty = Intersection::new(Vec::<IntervalSet>::new());
		assert!(empty.is_empty());
		assert_nearest(empty.clone(), 0.0, Err(EmptyIntersectionError));
		assert_eq!(empty.to_string(), "Intersection{}");

		let [first, ..] = three_sets();
		let single = Intersection::new([first.clone()]);
		assert_eq!(single.snapshot(), first.into_iter().collect::<Vec<_>>());
	}

	#[test]
	fn intersection_is_associative() {
		let [first, second, third] = three_sets();

		let all_at_once =
			Intersection::new([first.clone(), second.clone(), third.clone()]);
		let pairwise = Intersection::new([
			Intersection::new([first, second]).snapshot().into_iter().collect(),
			third,
		]);

		assert_eq!(all_at_once.snapshot(), pairwise.snapshot());
	}

	#[test]
	fn self_intersection_is_identity() {
		for set in three_sets() {
			let intersection = Intersection::new([set.clone(), set.clone()]);
			assert_eq!(
				intersection.snapshot(),
				set.into_iter().collect::<Vec<_>>()
			);
		}
	}

	#[test]
	fn add_grows_intersection() {
		let mut intersection = Intersection::new([set([c(0.0, 1.0)])]);

		assert!(intersection.add(c(5.0, 6.0)));
		assert!(intersection.add(co(2.0, 3.0)));
		assert!(!intersection.add(c(2.0, 3.0)));

		assert_eq!(intersection.len(), 3);
		assert_eq!(
			intersection.snapshot(),
			[c(0.0, 1.0), co(2.0, 3.0), c(5.0, 6.0)]
		);
		assert_eq!(
			intersection.to_string(),
			"Intersection{[0.0..1.0], [2.0..3.0), [5.0..6.0]}"
		);
		assert_nearest(intersection.clone(), 10.0, Ok(6.0));
		assert_nearest(intersection, 2.5, Ok(2.5));
	}

	#[test]
	fn added_ranges_match_a_built_intersection() {
		let mut added = Intersection::new(Vec::<IntervalSet>::new());
		for range in basic().ranges() {
			assert!(added.add(*range));
		}

		assert_eq!(added, basic());
		assert!(!added.add(co(-13.0, -7.0)));
		assert_eq!(added.snapshot(), basic().snapshot());
	}

	#[test]
	fn with_accuracy_tests() {
		let intersection =
			Intersection::with_accuracy([set([co(0.0, 1.0)])], 0.5);

		assert_eq!(intersection.accuracy(), 0.5);
		assert_nearest(intersection, 2.0, Ok(0.5));
		assert_eq!(basic().accuracy(), DEFAULT_ACCURACY);
	}
}

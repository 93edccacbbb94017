//! A module containing [`IntervalSet`].

use alloc::vec::Vec;
use core::fmt;

use btree_monstrousity::btree_map::{
	IntoIter as BTreeMapIntoIter, SearchBoundCustom,
};
use btree_monstrousity::BTreeMap;
use itertools::Itertools;

use crate::utils::{range_comp, starts_comp};
use crate::range::BoundKind;
use crate::Range;

/// An ordered set of disjoint [`Range`]s based on [`BTreeMap`],
/// representing their union.
///
/// The ranges are kept sorted by lower point and then upper point.
///
/// # Disjointness
///
/// The ranges in a set are assumed to be pairwise non-overlapping, but
/// this is **not** checked when merging since
/// [`IntervalSet::intersect_with()`] relies on it only for its early
/// exit. Callers must supply disjoint ranges, [`IntervalSet::is_disjoint()`]
/// can be used to check a set in debug code.
///
/// Two ranges with the same end-points but different bound kinds sort
/// as equal, so merging the second of them leaves the set untouched.
///
/// # Examples
/// ```
/// use intersect_intervals::{IntervalSet, Range};
///
/// let set = IntervalSet::from_ranges([
/// 	Range::closed(10.0, 25.0).unwrap(),
/// 	Range::closed(f64::NEG_INFINITY, 1.0).unwrap(),
/// 	Range::open_closed(2.0, 5.0).unwrap(),
/// ]);
///
/// assert_eq!(set.to_string(), "{(-inf..1.0], (2.0..5.0], [10.0..25.0]}");
/// ```
///
/// [`BTreeMap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSet {
	inner: BTreeMap<Range, ()>,
}

impl IntervalSet {
	/// Makes a new, empty [`IntervalSet`].
	pub fn new() -> Self {
		IntervalSet {
			inner: BTreeMap::new(),
		}
	}

	/// Makes a new [`IntervalSet`] from the given ranges using
	/// [`IntervalSet::merge()`].
	pub fn from_ranges(ranges: impl IntoIterator<Item = Range>) -> Self {
		let mut set = IntervalSet::new();
		for range in ranges {
			set.merge(range);
		}
		return set;
	}

	/// Adds a range to the set without checking it against the ranges
	/// already stored.
	///
	/// Returns `false` if a range with the same end-points was already
	/// in the set, in which case the set is left unchanged.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::{IntervalSet, Range};
	///
	/// let mut set = IntervalSet::new();
	///
	/// assert_eq!(set.merge(Range::closed(1.0, 2.0).unwrap()), true);
	/// assert_eq!(set.merge(Range::open(1.0, 2.0).unwrap()), false);
	/// assert_eq!(set.len(), 1);
	/// ```
	pub fn merge(&mut self, range: Range) -> bool {
		if self.inner.contains_key(range_comp(range)) {
			return false;
		}

		self.inner.insert(range, (), starts_comp());
		true
	}

	/// Adds every range of `other` to the set using
	/// [`IntervalSet::merge()`].
	pub fn merge_all(&mut self, other: IntervalSet) {
		for range in other {
			self.merge(range);
		}
	}

	/// Returns a new set holding the overlap of every range in the set
	/// with the given range. See [`Range::overlap()`] for how each
	/// overlap is formed.
	///
	/// # Examples
	/// ```
	/// use intersect_intervals::{IntervalSet, Range};
	///
	/// let set = IntervalSet::from_ranges([
	/// 	Range::closed(-13.0, 0.0).unwrap(),
	/// 	Range::open_closed(3.0, 20.0).unwrap(),
	/// 	Range::closed(22.0, 23.0).unwrap(),
	/// ]);
	///
	/// let intersected = set.intersect_with(Range::closed(-4.0, 5.0).unwrap());
	///
	/// assert_eq!(intersected.to_string(), "{[-4.0..0.0], (3.0..5.0]}");
	/// ```
	pub fn intersect_with(&self, range: Range) -> IntervalSet {
		self.iter()
			.take_while(|stored| stored.lower_point() <= range.upper_point())
			.filter(|stored| stored.upper_point() >= range.lower_point())
			.filter_map(|stored| stored.overlap(&range))
			.collect()
	}

	/// Returns `true` if no two ranges in the set share a point.
	///
	/// This is quadratic in the number of ranges and meant for
	/// assertions, nothing in this crate calls it on its own.
	pub fn is_disjoint(&self) -> bool {
		let ranges: Vec<&Range> = self.iter().collect();

		ranges
			.iter()
			.tuple_combinations()
			.all(|(a, b)| a.overlap(b).is_none())
	}

	/// Returns the number of ranges in the set.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Returns `true` if the set contains no ranges.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns an iterator over every range in the set in ascending
	/// order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Range> {
		self.inner.iter().map(first)
	}

	/// Returns the first range in the set, if any.
	pub fn first(&self) -> Option<&Range> {
		self.inner.first_key_value().map(first)
	}

	/// Returns the last range in the set, if any.
	pub fn last(&self) -> Option<&Range> {
		self.inner.last_key_value().map(first)
	}

	/// Returns the greatest range ordered at or below the singleton
	/// `[point..point]` and the least range ordered at or above it.
	pub(crate) fn neighbours(
		&self,
		point: f64,
	) -> (Option<&Range>, Option<&Range>) {
		let key = Range::new_unchecked(
			point,
			BoundKind::Closed,
			point,
			BoundKind::Closed,
		);

		let lower_cursor = self
			.inner
			.upper_bound(range_comp(key), SearchBoundCustom::Included);
		let higher_cursor = self
			.inner
			.lower_bound(range_comp(key), SearchBoundCustom::Included);

		(lower_cursor.key(), higher_cursor.key())
	}
}

// Helper Functions ==========================

fn first<A, B>((a, _): (A, B)) -> A {
	a
}

// Trait Impls ==========================

impl Default for IntervalSet {
	fn default() -> Self {
		IntervalSet::new()
	}
}

impl FromIterator<Range> for IntervalSet {
	fn from_iter<T: IntoIterator<Item = Range>>(iter: T) -> Self {
		IntervalSet::from_ranges(iter)
	}
}

impl IntoIterator for IntervalSet {
	type Item = Range;
	type IntoIter = IntoIter;
	fn into_iter(self) -> Self::IntoIter {
		return IntoIter {
			inner: self.inner.into_iter(),
		};
	}
}
/// An owning iterator over the ranges of an [`IntervalSet`].
///
/// This `struct` is created by the [`into_iter`] method on
/// [`IntervalSet`] (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
pub struct IntoIter {
	inner: BTreeMapIntoIter<Range, ()>,
}
impl Iterator for IntoIter {
	type Item = Range;
	fn next(&mut self) -> Option<Self::Item> {
		self.inner.next().map(first)
	}
}

impl fmt::Display for IntervalSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{{{}}}", self.iter().format(", "))
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::fmt;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use crate::{IntervalSet, Range};

	impl Serialize for IntervalSet {
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for range in self.iter() {
				seq.serialize_element(range)?;
			}
			seq.end()
		}
	}

	impl<'de> Deserialize<'de> for IntervalSet {
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(IntervalSetVisitor)
		}
	}

	struct IntervalSetVisitor;

	impl<'de> Visitor<'de> for IntervalSetVisitor {
		type Value = IntervalSet;

		fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
			formatter.write_str("an IntervalSet")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut set = IntervalSet::new();
			while let Some(range) = access.next_element::<Range>()? {
				set.merge(range);
			}
			Ok(set)
		}
	}
}

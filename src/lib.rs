//! This crate provides [`IntervalSet`] and [`Intersection`], Data
//! Structures for intersecting several unions of disjoint real-number
//! ranges and snapping points to the nearest value inside the result,
//! based off [`BTreeMap`].
//!
//! ## Example
//!
//! ```rust
//! use intersect_intervals::{Intersection, IntervalSet, Range};
//!
//! // (-inf..1] U [2..10] U [16..+inf)
//! let allowed = IntervalSet::from_ranges([
//! 	Range::closed(f64::NEG_INFINITY, 1.0).unwrap(),
//! 	Range::closed(2.0, 10.0).unwrap(),
//! 	Range::closed(16.0, f64::INFINITY).unwrap(),
//! ]);
//! // [-13..0] U (3..20]
//! let available = IntervalSet::from_ranges([
//! 	Range::closed(-13.0, 0.0).unwrap(),
//! 	Range::open_closed(3.0, 20.0).unwrap(),
//! ]);
//!
//! let intersection = Intersection::new([allowed, available]);
//!
//! assert_eq!(
//! 	intersection.to_string(),
//! 	"Intersection{[-13.0..0.0], (3.0..10.0], [16.0..20.0]}"
//! );
//! assert_eq!(intersection.nearest(5.0), Ok(5.0));
//! assert_eq!(intersection.nearest(-20.0), Ok(-13.0));
//! assert_eq!(intersection.nearest(25.0), Ok(20.0));
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Bounds
//!
//! Each end of a [`Range`] is [`Open`], [`Closed`] or [`Infinite`]. A
//! range reaching `-inf` or `+inf` always gets an [`Infinite`] bound on
//! that side, which prints like an open bound but is kept apart from it.
//!
//! ### Invalid Ranges
//!
//! A range whose lower point is larger than its upper point cannot be
//! built, the constructors return an [`InvalidRangeError`]. Ranges such as
//! `(4..4)` can be built even though they hold no point.
//!
//! ### Ordering
//!
//! Ranges are stored sorted by lower point, then upper point. The bound
//! kinds are not part of that order, so `[1..2]` and `(1..2)` sort as
//! equal and a set only ever keeps the first of them.
//!
//! ### Disjointness
//!
//! The ranges of an [`IntervalSet`] are assumed to share no point. This is
//! not checked (see [`IntervalSet::is_disjoint()`]) and the results of
//! intersecting sets that break it are unspecified.
//!
//! ### Nearest Points
//!
//! [`Intersection::nearest()`] snaps a point into the intersection. Open
//! end-points are never returned as-is, they are moved inwards by the
//! intersection's accuracy ([`DEFAULT_ACCURACY`] unless set with
//! [`Intersection::with_accuracy()`]).
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`Range`], [`BoundKind`]
//!   and [`IntervalSet`]. Deserializing a [`Range`] goes through
//!   [`Range::new()`] so invalid ranges are rejected.
//!
//! [`btreemap`]: https://doc.rust-lang.org/std/collections/struct.BTreeMap.html
//! [`Open`]: BoundKind::Open
//! [`Closed`]: BoundKind::Closed
//! [`Infinite`]: BoundKind::Infinite

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

extern crate alloc;

pub(crate) mod utils;

pub mod intersection;
pub mod interval_set;
pub mod range;

pub use crate::intersection::{
	EmptyIntersectionError, Intersection, DEFAULT_ACCURACY,
};
pub use crate::interval_set::IntervalSet;
pub use crate::range::{BoundKind, InvalidRangeError, Range};

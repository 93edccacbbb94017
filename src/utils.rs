use core::cmp::Ordering;

use crate::Range;

/// Orders ranges by lower point then upper point. Bound kinds are not
/// looked at, so `[1..2]` and `(1..2)` compare equal.
pub(crate) fn cmp_ranges(a: &Range, b: &Range) -> Ordering {
	a.lower_point()
		.total_cmp(&b.lower_point())
		.then_with(|| a.upper_point().total_cmp(&b.upper_point()))
}

pub(crate) fn starts_comp() -> impl FnMut(&Range, &Range) -> Ordering {
	|inner_range: &Range, new_range: &Range| cmp_ranges(new_range, inner_range)
}

pub(crate) fn range_comp(range: Range) -> impl FnMut(&Range) -> Ordering {
	move |inner_range: &Range| cmp_ranges(&range, inner_range)
}

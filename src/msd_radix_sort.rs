#![cfg(feature = "alloc")]

use crate::{
	radix::{Radix, distribute, max_digit_count},
	stack::grow,
};
use ndarray::{ArrayViewMut1, s};

/// Sorts `v` using most significant digit radix sort, which is *O*(*kn*) worst-case where *k* is
/// the digit count of the greatest element.
///
/// Distributes `v` into buckets by its most significant digit, then refines every bucket of more
/// than one element recursively by the next less significant digit.
pub fn msd_radix_sort<A: Radix>(v: ArrayViewMut1<'_, A>) {
	// Empty arrays and arrays of zeros are sorted already.
	let Some(place) = max_digit_count(v.iter()).and_then(|digits| digits.checked_sub(1)) else {
		return;
	};
	log::trace!("msd radix sort of {} elements from place {place}", v.len());

	recurse(v, place);
}

/// Sorts `v` whose elements agree on all digits more significant than `place`.
fn recurse<A: Radix>(mut v: ArrayViewMut1<'_, A>, place: u32) {
	if v.len() < 2 {
		return;
	}

	let ends = distribute(v.view_mut(), place);
	let Some(next) = place.checked_sub(1) else {
		return;
	};

	let mut start = 0;
	for end in ends {
		if end - start > 1 {
			grow(|| recurse(v.slice_mut(s![start..end]), next));
		}
		start = end;
	}
}

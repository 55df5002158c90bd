#![cfg(feature = "alloc")]

use crate::radix::{Radix, distribute, max_digit_count};
use ndarray::ArrayViewMut1;

/// Sorts `v` using least significant digit radix sort, which is *O*(*kn*) best-case and
/// worst-case where *k* is the digit count of the greatest element.
///
/// Performs one stable bucket pass per decimal digit, from the least to the most significant one.
/// Since every pass is stable, so is the sort. Empty arrays and arrays of zeros need no pass.
pub fn lsd_radix_sort<A: Radix>(mut v: ArrayViewMut1<'_, A>) {
	let digits = max_digit_count(v.iter()).unwrap_or(0);
	log::trace!("lsd radix sort of {} elements in {digits} passes", v.len());

	for place in 0..digits {
		distribute(v.view_mut(), place);
	}
}

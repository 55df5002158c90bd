#![cfg(feature = "alloc")]

use crate::stack::grow;
use ndarray::{ArrayViewMut1, Axis};

#[cfg(not(feature = "std"))]
extern crate alloc as no_std_alloc;
#[cfg(not(feature = "std"))]
use no_std_alloc::vec::Vec;

/// Sorts `v` using top-down merge sort, which is *O*(*n* \* log(*n*)) best-case and worst-case.
///
/// Splits `v` into a left half of ⌈*n*/2⌉ and a right half of ⌊*n*/2⌋ elements, sorts both
/// recursively, and merges them. This sort is stable.
pub fn merge_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len <= 1 {
		return;
	}

	let mid = len.div_ceil(2);
	let (left, right) = v.view_mut().split_at(Axis(0), mid);
	grow(|| merge_sort(left, is_less));
	grow(|| merge_sort(right, is_less));

	merge(v, mid, is_less);
}

/// Merges non-decreasing runs `v[..mid]` and `v[mid..]` and stores the result into `v[..]`.
///
/// The merge order is first recorded into freshly allocated temporary storage as the source
/// position of every element. Then `v` is permuted accordingly.
fn merge<T, F>(v: ArrayViewMut1<'_, T>, mid: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	let mut order = Vec::with_capacity(len);

	let mut left = 0;
	let mut right = mid;
	while left < mid && right < len {
		// Consume the lesser side.
		// If equal, prefer the left run to maintain stability.
		if is_less(&v[right], &v[left]) {
			order.push(right);
			right += 1;
		} else {
			order.push(left);
			left += 1;
		}
	}
	// At most one of both runs has unconsumed elements.
	order.extend(left..mid);
	order.extend(right..len);

	permute(v, &mut order);
}

/// Moves the element at `order[i]` to position `i` for every `i` by swapping elements in place.
///
/// `order` must be a permutation of `0..v.len()`. It is left in an unspecified state.
fn permute<T>(mut v: ArrayViewMut1<'_, T>, order: &mut [usize]) {
	for i in 0..v.len() {
		// Elements before `i` are already in place. If the element at `order[i]` has been swapped
		// away, follow where it went.
		let mut index = order[i];
		while index < i {
			index = order[index];
		}
		order[i] = index;
		v.swap(i, index);
	}
}

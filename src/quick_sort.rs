use crate::stack::grow;
use ndarray::{ArrayViewMut1, Axis};
use rand::Rng;

/// Sorts `v` using randomized quicksort, which is *O*(*n* \* log(*n*)) best-case and *O*(*n*^2)
/// worst-case.
///
/// Draws a single pivot index from `rng` over the whole of `v` and moves that pivot to the right
/// boundary. Every partitioning, including the first, then pivots on the last element of its
/// range. Nothing is drawn for fewer than two elements.
pub fn quick_sort<T, F, R>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, rng: &mut R)
where
	F: FnMut(&T, &T) -> bool,
	R: Rng + ?Sized,
{
	let len = v.len();
	if len < 2 {
		return;
	}

	let pivot = rng.random_range(0..len);
	log::trace!("quick sort of {len} elements pivots on index {pivot} first");
	v.swap(pivot, len - 1);

	recurse(v, is_less);
}

/// Partitions `v` around its last element and sorts both sides recursively.
fn recurse<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	if len < 2 {
		return;
	}

	let mid = partition(v.view_mut(), is_less);

	// Split the slice into `left`, `pivot`, and `right`.
	let (left, right) = v.split_at(Axis(0), mid);
	let (_pivot, right) = right.split_at(Axis(0), 1);

	grow(|| recurse(left, is_less));
	grow(|| recurse(right, is_less));
}

/// Partitions `v` around its last element using two pointers scanning towards each other.
///
/// Returns the final position of the pivot. Elements left of it are less than or equal to the
/// pivot, elements right of it are greater than or equal to it.
///
/// Requires `v` to hold at least one element.
fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let last = v.len() - 1;

	let mid = {
		let (mut rest, pivot) = v.view_mut().split_at(Axis(0), last);
		let pivot = &pivot[0];

		// INVARIANTS:
		// - rest[..left] <= pivot
		// - rest[right..] >= pivot
		let mut left = 0;
		let mut right = last;
		while left < right {
			// Find the first element greater than the pivot.
			while left < right && !is_less(pivot, &rest[left]) {
				left += 1;
			}
			// Find the last element less than the pivot.
			while left < right && !is_less(&rest[right - 1], pivot) {
				right -= 1;
			}
			// Swap the found pair of elements.
			if left < right {
				rest.swap(left, right - 1);
				left += 1;
				right -= 1;
			}
		}
		left
	};

	// Place the pivot between the two partitions.
	v.swap(mid, last);
	mid
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{partition, quick_sort};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;
	use rand::{RngCore, SeedableRng, rngs::StdRng};

	#[quickcheck]
	fn sorted(xs: Vec<u32>, seed: u64) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(
			array.view_mut(),
			&mut u32::lt,
			&mut StdRng::seed_from_u64(seed),
		);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn sorted_with_duplicates(xs: Vec<u8>, seed: u64) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u8::lt, &mut StdRng::seed_from_u64(seed));
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn partitioned(xs: Vec<u32>) {
		if xs.is_empty() {
			return;
		}
		let mut array = Array1::from_vec(xs);
		let pivot = array[array.len() - 1];
		let mid = partition(array.view_mut(), &mut u32::lt);
		assert_eq!(array[mid], pivot);
		assert!(array.iter().take(mid).all(|&x| x <= pivot));
		assert!(array.iter().skip(mid + 1).all(|&x| x >= pivot));
	}

	#[test]
	fn reproducible() {
		let xs = Array1::from_iter((0..64u32).map(|x| x.wrapping_mul(2_654_435_761) % 97));
		let mut count = [0; 2];
		for count in &mut count {
			let mut array = xs.clone();
			quick_sort(
				array.view_mut(),
				&mut |a: &u32, b: &u32| {
					*count += 1;
					a < b
				},
				&mut StdRng::seed_from_u64(0x600dc0de),
			);
		}
		assert_eq!(count[0], count[1]);
	}

	#[test]
	fn draws_nothing_for_short_arrays() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut empty = Array1::<u32>::from_vec(vec![]);
		quick_sort(empty.view_mut(), &mut u32::lt, &mut rng);
		let mut single = Array1::from_vec(vec![3u32]);
		quick_sort(single.view_mut(), &mut u32::lt, &mut rng);
		assert_eq!(single, Array1::from_vec(vec![3]));
		assert_eq!(rng.next_u64(), StdRng::seed_from_u64(7).next_u64());
	}

	#[test]
	fn sorted_input_is_worst_case() {
		let len = 200;
		let mut array = Array1::from_iter(0..len);
		let mut count = 0;
		quick_sort(
			array.view_mut(),
			&mut |a: &usize, b: &usize| {
				count += 1;
				a < b
			},
			&mut StdRng::seed_from_u64(0),
		);
		assert_eq!(array, Array1::from_iter(0..len));
		assert!(count <= len * (len + 1) / 2);
	}
}

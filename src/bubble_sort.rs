use ndarray::ArrayViewMut1;

/// Sorts `v` using bubble sort, which is *O*(*n*) best-case and *O*(*n*^2) worst-case.
///
/// Every pass bubbles the greatest element of the unsorted prefix to its end. Only strictly
/// out-of-order neighbors are swapped, hence equal elements never pass each other. A pass without
/// any swap proves the prefix sorted and ends the sort.
pub fn bubble_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	let mut passes = 0;

	for end in (1..len).rev() {
		passes += 1;
		let mut swapped = false;
		for j in 0..end {
			if is_less(&v[j + 1], &v[j]) {
				v.swap(j, j + 1);
				swapped = true;
			}
		}
		if !swapped {
			break;
		}
	}

	log::trace!("bubble sort of {len} elements took {passes} passes");
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::bubble_sort;
	use crate::fixture::{Item, items};
	use ndarray::Array1;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		bubble_sort(array.view_mut(), &mut u32::lt);
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u8>) {
		let mut sorted = items(&xs);
		sorted.sort();
		let mut array = Array1::from_vec(items(&xs));
		bubble_sort(array.view_mut(), &mut Item::lt);
		for (a, s) in array.iter().zip(&sorted) {
			assert_eq!(a.index, s.index);
			assert_eq!(a.value, s.value);
		}
	}

	#[test]
	fn stops_after_one_pass_when_sorted() {
		let mut array = Array1::from_iter(0..100u32);
		let mut count = 0;
		bubble_sort(array.view_mut(), &mut |a: &u32, b: &u32| {
			count += 1;
			a < b
		});
		assert_eq!(count, 99);
		assert_eq!(array, Array1::from_iter(0..100u32));
	}
}

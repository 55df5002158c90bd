use core::{cell::Cell, cmp::Ordering};

/// Counts the comparisons a sort performs.
///
/// Comparator functions wrapped by [`wrap`](Self::wrap) forward every comparison and increment
/// this counter once per call. The counter is borrowed by the wrapped comparator, so it can be
/// read as soon as the sort returns.
///
/// # Examples
///
/// ```
/// use ndarray_classic_sort::{ComparisonCounter, Sort1Ext, ndarray::arr1};
///
/// let mut v = arr1(&[1, 2, 3, 4, 5]);
/// let counter = ComparisonCounter::new();
///
/// v.insertion_sort_by(counter.wrap(|a: &i32, b: &i32| a.cmp(b)));
/// assert_eq!(counter.count(), 4);
/// ```
#[derive(Debug, Default)]
pub struct ComparisonCounter {
	count: Cell<usize>,
}

impl ComparisonCounter {
	/// Creates a counter without any counted comparisons.
	#[must_use]
	pub const fn new() -> Self {
		Self {
			count: Cell::new(0),
		}
	}
	/// Returns the number of comparisons performed through wrapped comparators so far.
	#[must_use]
	pub fn count(&self) -> usize {
		self.count.get()
	}
	/// Wraps `compare` into a comparator counting its calls.
	pub fn wrap<T, F>(&self, mut compare: F) -> impl FnMut(&T, &T) -> Ordering
	where
		T: ?Sized,
		F: FnMut(&T, &T) -> Ordering,
	{
		move |a: &T, b: &T| {
			self.count.set(self.count.get() + 1);
			compare(a, b)
		}
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::ComparisonCounter;
	use crate::{
		Sort1Ext,
		fixture::{by_name, members, members_by_name},
	};
	use rand::{SeedableRng, rngs::StdRng};

	#[test]
	fn counts_every_call() {
		let counter = ComparisonCounter::new();
		let mut compare = counter.wrap(u8::cmp);
		for _ in 0..3 {
			compare(&1, &2);
		}
		drop(compare);
		assert_eq!(counter.count(), 3);
	}

	#[test]
	fn bubble_sort_comparisons() {
		let mut members = members();
		let counter = ComparisonCounter::new();
		members.bubble_sort_by(counter.wrap(by_name));
		assert_eq!(members, members_by_name());
		assert!(counter.count() <= 44, "Number of comparisons: {}", counter.count());
	}

	#[test]
	fn insertion_sort_comparisons() {
		let mut members = members();
		let counter = ComparisonCounter::new();
		members.insertion_sort_by(counter.wrap(by_name));
		assert_eq!(members, members_by_name());
		assert!(counter.count() <= 30, "Number of comparisons: {}", counter.count());
	}

	#[test]
	fn selection_sort_comparisons() {
		let mut members = members();
		let counter = ComparisonCounter::new();
		members.selection_sort_by(counter.wrap(by_name));
		assert_eq!(members, members_by_name());
		assert!(counter.count() <= 45, "Number of comparisons: {}", counter.count());
	}

	#[test]
	fn quick_sort_comparisons() {
		let mut members = members();
		let counter = ComparisonCounter::new();
		members.quick_sort_by(
			counter.wrap(by_name),
			&mut StdRng::seed_from_u64(0x600dc0de),
		);
		assert_eq!(members, members_by_name());
		assert!(counter.count() <= 45, "Number of comparisons: {}", counter.count());
	}

	#[test]
	fn quick_sort_comparisons_for_any_seed() {
		for seed in 0..64 {
			let mut members = members();
			let counter = ComparisonCounter::new();
			members.quick_sort_by(counter.wrap(by_name), &mut StdRng::seed_from_u64(seed));
			assert_eq!(members, members_by_name());
			assert!(counter.count() <= 45, "Number of comparisons: {}", counter.count());
		}
	}

	#[test]
	fn merge_sort_comparisons() {
		let mut members = members();
		let counter = ComparisonCounter::new();
		members.merge_sort_by(counter.wrap(by_name));
		assert_eq!(members, members_by_name());
		assert!(counter.count() <= 48, "Number of comparisons: {}", counter.count());
	}

	#[test]
	fn sorted_input_comparisons() {
		let counter = ComparisonCounter::new();
		let mut sorted = members_by_name();
		sorted.bubble_sort_by(counter.wrap(by_name));
		assert_eq!(counter.count(), sorted.len() - 1);

		let counter = ComparisonCounter::new();
		sorted.insertion_sort_by(counter.wrap(by_name));
		assert_eq!(counter.count(), sorted.len() - 1);
		assert_eq!(sorted, members_by_name());
	}

	#[test]
	fn short_arrays_need_no_comparison() {
		let counter = ComparisonCounter::new();
		let mut rng = StdRng::seed_from_u64(0x600dc0de);
		for len in 0..2 {
			let mut members = members().slice_move(ndarray::s![..len]);
			let expected = members.clone();
			members.bubble_sort_by(counter.wrap(by_name));
			members.insertion_sort_by(counter.wrap(by_name));
			members.selection_sort_by(counter.wrap(by_name));
			members.quick_sort_by(counter.wrap(by_name), &mut rng);
			members.merge_sort_by(counter.wrap(by_name));
			assert_eq!(members, expected);
		}
		assert_eq!(counter.count(), 0);
	}

	#[test]
	fn wraps_unsized_elements() {
		let counter = ComparisonCounter::new();
		let mut compare = counter.wrap(|a: &str, b: &str| a.len().cmp(&b.len()));
		compare("Afiq", "Saikrishna");
		drop(compare);
		assert_eq!(counter.count(), 1);
	}
}

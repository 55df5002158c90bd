//! Classic textbook sorting algorithms (e.g., [bubble], [insertion], [selection], [quick],
//! [merge], and [radix] sort) for non-contiguous (sub)views into one-dimensional arrays of
//! [`ndarray`].
//!
//! Every algorithm is implemented as taught, not as fast as possible: Stability, in-place
//! mutation, the pivot rule, and the digit extraction follow the textbook variant, so their
//! comparison counts can be reasoned about and verified with a [`ComparisonCounter`].
//!
//! # Example
//!
//! ```
//! use ndarray_classic_sort::{ndarray::arr2, Sort1Ext};
//!
//! // 2-dimensional array of 4 rows and 5 columns.
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],   // row 0, axis 0
//!                    [ 8, 3, 2,  4,  8],   // row 1, axis 0
//!                    [38, 9, 3,  0,  3],   // row 2, axis 0
//!                    [ 4, 9, 0,  8, -1]]); // row 3, axis 0
//! //                    \     \       \
//! //                  column 0 \    column 4         axis 1
//! //                         column 2                axis 1
//!
//! // Mutable subview into the last column.
//! let mut column = v.column_mut(4);
//!
//! // Due to row-major memory layout, columns are non-contiguous
//! // and hence cannot be sorted by viewing them as mutable slices.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Instead, sorting is specifically implemented for non-contiguous
//! // mutable (sub)views.
//! column.insertion_sort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! //                                   \
//! //                                 column 4 sorted, others untouched
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *k* the digit count of its greatest
//! element.
//!
//! | Sort      | Best             | Worst            | Space        | Stable |
//! |-----------|------------------|------------------|--------------|--------|
//! | Bubble    | *O*(*n*)         | *O*(*n*^2)       | *O*(1)       | yes    |
//! | Insertion | *O*(*n*)         | *O*(*n*^2)       | *O*(1)       | yes    |
//! | Selection | *O*(*n*^2)       | *O*(*n*^2)       | *O*(1)       | no     |
//! | Quick     | *O*(*n* log *n*) | *O*(*n*^2)       | *O*(*n*)     | no     |
//! | Merge     | *O*(*n* log *n*) | *O*(*n* log *n*) | *O*(*n*)     | yes    |
//! | LSD Radix | *O*(*kn*)        | *O*(*kn*)        | *O*(*n*)     | yes    |
//! | MSD Radix | *O*(*kn*)        | *O*(*kn*)        | *O*(*n* + *k*) | no   |
//!
//! The space of quicksort is its recursion depth, which is only logarithmic on average.
//!
//! [bubble]: https://en.wikipedia.org/wiki/Bubble_sort
//! [insertion]: https://en.wikipedia.org/wiki/Insertion_sort
//! [selection]: https://en.wikipedia.org/wiki/Selection_sort
//! [quick]: https://en.wikipedia.org/wiki/Quicksort
//! [merge]: https://en.wikipedia.org/wiki/Merge_sort
//! [radix]: https://en.wikipedia.org/wiki/Radix_sort
//!
//! # Checked Sorts
//!
//! The methods of [`Sort1Ext`] borrow the array, the comparator, and the randomness source, none
//! of which can be absent. The [`checked`] module provides the same sorts for optional arguments,
//! reporting an absent one as [`Error::InvalidArgument`] before touching any element.
//!
//! # Logging
//!
//! Sorts report details like the chosen pivot or the number of radix passes via the [`log`] facade
//! on trace level. Rejected checked sorts are reported on debug level.
//!
//! # Features
//!
//!   * `alloc` for `merge_sort`/`merge_sort_by` and the radix sorts. Enabled by `std`.
//!   * `std` for the standard library. Enabled by `default`.
//!   * `stacker` for growing the stack on deep recursion (e.g., quicksort on sorted input).
//!     Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod bubble_sort;
mod counter;
mod error;
mod insertion_sort;
mod lsd_radix_sort;
mod merge_sort;
mod msd_radix_sort;
mod quick_sort;
mod radix;
mod selection_sort;
mod stack;

pub mod checked;

#[cfg(feature = "std")]
#[cfg(test)]
mod fixture;

#[cfg(feature = "alloc")]
use crate::{
	lsd_radix_sort::lsd_radix_sort, merge_sort::merge_sort, msd_radix_sort::msd_radix_sort,
};

use crate::{
	bubble_sort::bubble_sort, insertion_sort::insertion_sort, quick_sort::quick_sort,
	selection_sort::selection_sort,
};
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1};
use rand::Rng;

pub use crate::{
	counter::ComparisonCounter,
	error::{Argument, Error},
	radix::Radix,
};
pub use ndarray;
pub use rand;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing classic [sorting] algorithms.
///
/// Every comparing sort comes in two flavors: One for [`Ord`] elements and one suffixed with `_by`
/// accepting a comparator function. The comparator function must define a total ordering for the
/// elements in the array. If the ordering is not total, the order of the elements is unspecified.
///
/// [sorting]: https://en.wikipedia.org/wiki/Sorting_algorithm
pub trait Sort1Ext<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array with bubble sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place, *O*(*n*) best-case,
	/// and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.bubble_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn bubble_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with bubble sort using a comparator function.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place, *O*(*n*) best-case,
	/// and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Every pass over the unsorted prefix swaps strictly out-of-order neighbors, which moves the
	/// greatest element of the prefix to its end. The sort ends early after a pass without swaps,
	/// so an already sorted array costs *n* - 1 comparisons.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.bubble_sort_by(|a, b| a.cmp(b));
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.bubble_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn bubble_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array with insertion sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place, *O*(*n*) best-case,
	/// and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.insertion_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with insertion sort using a comparator function.
	///
	/// This sort is stable (i.e., does not reorder equal elements), in-place, *O*(*n*) best-case,
	/// and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// Each element is shifted to the left past all strictly greater elements before it. An
	/// already sorted array costs *n* - 1 comparisons.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.insertion_sort_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	/// ```
	fn insertion_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array with selection sort, but might not preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, and *O*(*n*^2)
	/// best-case and worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.selection_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn selection_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with selection sort using a comparator function, but might not preserve
	/// the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, and *O*(*n*^2)
	/// best-case and worst-case.
	///
	/// # Current Implementation
	///
	/// For every position, the remaining elements are scanned for the minimum, which is then
	/// swapped into place. Of equal minima the last one is chosen. Always costs
	/// *n*(*n* - 1)/2 comparisons.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.selection_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn selection_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array with randomized quicksort, but might not preserve the order of equal
	/// elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, *O*(*n* log *n*)
	/// best-case, and *O*(*n*^2) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	/// use rand::{SeedableRng, rngs::StdRng};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.quick_sort(&mut StdRng::seed_from_u64(0x600dc0de));
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	fn quick_sort<R>(&mut self, rng: &mut R)
	where
		A: Ord,
		R: Rng + ?Sized,
		S: DataMut;
	/// Sorts the array with randomized quicksort using a comparator function, but might not
	/// preserve the order of equal elements.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place, *O*(*n* log *n*)
	/// best-case, and *O*(*n*^2) worst-case.
	///
	/// # Current Implementation
	///
	/// A single pivot is drawn uniformly from the whole array using `rng` and moved to its end.
	/// Two pointers scan towards each other from both ends, swapping pairs of elements on the
	/// wrong side of the pivot until they cross, where the pivot is swapped into its final
	/// position. Both sides are sorted recursively, pivoting on their last element. Seeding `rng`
	/// makes the sort deterministic. Arrays of fewer than two elements draw nothing from `rng`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	/// use rand::{SeedableRng, rngs::StdRng};
	///
	/// let mut rng = StdRng::seed_from_u64(7);
	/// let mut v = arr1(&[5, 4, 1, 3, 2]);
	/// v.quick_sort_by(|a, b| a.cmp(b), &mut rng);
	/// assert!(v == arr1(&[1, 2, 3, 4, 5]));
	///
	/// // reverse sorting
	/// v.quick_sort_by(|a, b| b.cmp(a), &mut rng);
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	fn quick_sort_by<F, R>(&mut self, compare: F, rng: &mut R)
	where
		F: FnMut(&A, &A) -> Ordering,
		R: Rng + ?Sized,
		S: DataMut;

	/// Sorts the array with merge sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* log *n*)
	/// best-case and worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.merge_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array with merge sort using a comparator function.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* log *n*)
	/// best-case and worst-case.
	///
	/// # Current Implementation
	///
	/// The array is split into halves of ⌈*n*/2⌉ and ⌊*n*/2⌋ elements, which are sorted
	/// recursively and merged, preferring the left half on ties. Every merge allocates temporary
	/// storage of the merged length.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
	/// v.merge_sort_by(|a, b| a.0.cmp(&b.0));
	/// assert!(v == arr1(&[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));
	/// ```
	#[cfg(feature = "alloc")]
	fn merge_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;

	/// Sorts the array of unsigned integers with least significant digit radix sort.
	///
	/// This sort is stable (i.e., does not reorder equal elements) and *O*(*kn*) best-case and
	/// worst-case, where *k* is the decimal digit count of the greatest element.
	///
	/// # Current Implementation
	///
	/// For every decimal digit from the least to the most significant one, the elements are
	/// distributed into ten buckets by that digit and collected back in bucket order. Digits are
	/// extracted by integer division. Empty arrays and arrays of zeros need no pass.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[54u32, 28, 58, 84, 20, 122, 85, 3]);
	///
	/// v.lsd_radix_sort();
	/// assert!(v == arr1(&[3, 20, 28, 54, 58, 84, 85, 122]));
	/// ```
	#[cfg(feature = "alloc")]
	fn lsd_radix_sort(&mut self)
	where
		A: Radix,
		S: DataMut;
	/// Sorts the array of unsigned integers with most significant digit radix sort.
	///
	/// This sort is *O*(*kn*) worst-case, where *k* is the decimal digit count of the greatest
	/// element.
	///
	/// # Current Implementation
	///
	/// The elements are distributed into ten buckets by their most significant digit and
	/// collected back in bucket order. Every bucket of more than one element is then refined
	/// recursively by the next less significant digit. Digits are extracted by integer division.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_classic_sort::{ndarray::arr1, Sort1Ext};
	///
	/// let mut v = arr1(&[54u64, 28, 58, 84, 20, 122, 85, 3]);
	///
	/// v.msd_radix_sort();
	/// assert!(v == arr1(&[3, 20, 28, 54, 58, 84, 85, 122]));
	/// ```
	#[cfg(feature = "alloc")]
	fn msd_radix_sort(&mut self)
	where
		A: Radix,
		S: DataMut;
}

impl<A, S> Sort1Ext<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn bubble_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		bubble_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn bubble_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		bubble_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn insertion_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn insertion_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		insertion_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn selection_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		selection_sort(self.view_mut(), &mut A::lt);
	}
	#[inline]
	fn selection_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		selection_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[inline]
	fn quick_sort<R>(&mut self, rng: &mut R)
	where
		A: Ord,
		R: Rng + ?Sized,
		S: DataMut,
	{
		quick_sort(self.view_mut(), &mut A::lt, rng);
	}
	#[inline]
	fn quick_sort_by<F, R>(&mut self, mut compare: F, rng: &mut R)
	where
		F: FnMut(&A, &A) -> Ordering,
		R: Rng + ?Sized,
		S: DataMut,
	{
		quick_sort(
			self.view_mut(),
			&mut |a: &A, b: &A| compare(a, b) == Less,
			rng,
		);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		merge_sort(self.view_mut(), &mut A::lt);
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn merge_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		merge_sort(self.view_mut(), &mut |a: &A, b: &A| compare(a, b) == Less);
	}

	#[cfg(feature = "alloc")]
	#[inline]
	fn lsd_radix_sort(&mut self)
	where
		A: Radix,
		S: DataMut,
	{
		lsd_radix_sort(self.view_mut());
	}
	#[cfg(feature = "alloc")]
	#[inline]
	fn msd_radix_sort(&mut self)
	where
		A: Radix,
		S: DataMut,
	{
		msd_radix_sort(self.view_mut());
	}
}

//! Sorts validating that every argument is present before touching any element.
//!
//! These functions take their arguments as [`Option`]s and return
//! [`Error::InvalidArgument`] naming the first absent one instead of sorting. Since
//! validation precedes sorting, the array is left unchanged whenever an error is returned.
//!
//! # Examples
//!
//! ```
//! use ndarray_classic_sort::{
//! 	checked, ndarray::{Array1, arr1}, Argument, Error,
//! };
//! use std::cmp::Ordering;
//!
//! let mut v = arr1(&[3, 1, 2]);
//!
//! let missing = checked::bubble_sort(Some(&mut v), None::<fn(&i32, &i32) -> Ordering>);
//! assert_eq!(missing, Err(Error::InvalidArgument(Argument::Comparator)));
//! assert_eq!(v, arr1(&[3, 1, 2]));
//!
//! checked::bubble_sort(Some(&mut v), Some(i32::cmp))?;
//! assert_eq!(v, arr1(&[1, 2, 3]));
//!
//! let missing = checked::lsd_radix_sort(None::<&mut Array1<u32>>);
//! assert_eq!(missing.err(), Some(Error::InvalidArgument(Argument::Array)));
//! # Ok::<(), Error>(())
//! ```

use crate::{
	Sort1Ext,
	error::{Argument, Error, require},
};
use core::cmp::Ordering;
use ndarray::{ArrayBase, DataMut, Ix1};
use rand::Rng;

#[cfg(feature = "alloc")]
use crate::radix::Radix;
#[cfg(feature = "alloc")]
use ndarray::ArrayViewMut1;

/// Sorts `v` with bubble sort, see [`Sort1Ext::bubble_sort_by`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` or `compare` is absent.
pub fn bubble_sort<A, S, F>(
	v: Option<&mut ArrayBase<S, Ix1>>,
	compare: Option<F>,
) -> Result<(), Error>
where
	S: DataMut<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
{
	let v = require(v, Argument::Array)?;
	let compare = require(compare, Argument::Comparator)?;
	v.bubble_sort_by(compare);
	Ok(())
}

/// Sorts `v` with insertion sort, see [`Sort1Ext::insertion_sort_by`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` or `compare` is absent.
pub fn insertion_sort<A, S, F>(
	v: Option<&mut ArrayBase<S, Ix1>>,
	compare: Option<F>,
) -> Result<(), Error>
where
	S: DataMut<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
{
	let v = require(v, Argument::Array)?;
	let compare = require(compare, Argument::Comparator)?;
	v.insertion_sort_by(compare);
	Ok(())
}

/// Sorts `v` with selection sort, see [`Sort1Ext::selection_sort_by`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` or `compare` is absent.
pub fn selection_sort<A, S, F>(
	v: Option<&mut ArrayBase<S, Ix1>>,
	compare: Option<F>,
) -> Result<(), Error>
where
	S: DataMut<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
{
	let v = require(v, Argument::Array)?;
	let compare = require(compare, Argument::Comparator)?;
	v.selection_sort_by(compare);
	Ok(())
}

/// Sorts `v` with randomized quicksort, see [`Sort1Ext::quick_sort_by`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v`, `compare`, or `rng` is absent.
pub fn quick_sort<A, S, F, R>(
	v: Option<&mut ArrayBase<S, Ix1>>,
	compare: Option<F>,
	rng: Option<&mut R>,
) -> Result<(), Error>
where
	S: DataMut<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
	R: Rng + ?Sized,
{
	let v = require(v, Argument::Array)?;
	let compare = require(compare, Argument::Comparator)?;
	let rng = require(rng, Argument::Random)?;
	v.quick_sort_by(compare, rng);
	Ok(())
}

/// Sorts `v` with merge sort, see [`Sort1Ext::merge_sort_by`].
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` or `compare` is absent.
#[cfg(feature = "alloc")]
pub fn merge_sort<A, S, F>(
	v: Option<&mut ArrayBase<S, Ix1>>,
	compare: Option<F>,
) -> Result<(), Error>
where
	S: DataMut<Elem = A>,
	F: FnMut(&A, &A) -> Ordering,
{
	let v = require(v, Argument::Array)?;
	let compare = require(compare, Argument::Comparator)?;
	v.merge_sort_by(compare);
	Ok(())
}

/// Sorts `v` with least significant digit radix sort, see [`Sort1Ext::lsd_radix_sort`].
///
/// Returns the sorted array as view.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` is absent.
#[cfg(feature = "alloc")]
pub fn lsd_radix_sort<A, S>(
	v: Option<&mut ArrayBase<S, Ix1>>,
) -> Result<ArrayViewMut1<'_, A>, Error>
where
	A: Radix,
	S: DataMut<Elem = A>,
{
	let v = require(v, Argument::Array)?;
	v.lsd_radix_sort();
	Ok(v.view_mut())
}

/// Sorts `v` with most significant digit radix sort, see [`Sort1Ext::msd_radix_sort`].
///
/// Returns the sorted array as view.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `v` is absent.
#[cfg(feature = "alloc")]
pub fn msd_radix_sort<A, S>(
	v: Option<&mut ArrayBase<S, Ix1>>,
) -> Result<ArrayViewMut1<'_, A>, Error>
where
	A: Radix,
	S: DataMut<Elem = A>,
{
	let v = require(v, Argument::Array)?;
	v.msd_radix_sort();
	Ok(v.view_mut())
}

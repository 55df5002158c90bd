/// Unsigned integers sortable by their decimal digits.
///
/// Digits are extracted by repeated integer division by ten, never by formatting.
pub trait Radix: Copy + Ord {
	/// Returns the decimal digit at `place`, where place `0` is the least significant digit.
	///
	/// Places beyond the most significant digit yield `0`.
	fn digit(self, place: u32) -> usize;
	/// Returns the number of decimal digits, which is `0` for `0`.
	fn digit_count(self) -> u32;
}

macro_rules! impl_radix {
	($($t:ty),*) => {$(
		impl Radix for $t {
			#[inline]
			fn digit(self, place: u32) -> usize {
				let mut rest = self;
				for _ in 0..place {
					rest /= 10;
				}
				(rest % 10) as usize
			}
			#[inline]
			fn digit_count(self) -> u32 {
				let mut rest = self;
				let mut count = 0;
				while rest != 0 {
					rest /= 10;
					count += 1;
				}
				count
			}
		}
	)*};
}

impl_radix!(u8, u16, u32, u64, u128, usize);

#[cfg(feature = "alloc")]
pub use self::buckets::distribute;

#[cfg(feature = "alloc")]
mod buckets {
	use super::Radix;
	use ndarray::ArrayViewMut1;

	#[cfg(not(feature = "std"))]
	extern crate alloc as no_std_alloc;
	#[cfg(not(feature = "std"))]
	use no_std_alloc::vec::Vec;

	/// Number of decimal digit values and thus buckets per pass.
	pub const RADIX: usize = 10;

	/// Performs one bucket pass over `v` at digit `place`.
	///
	/// Appends every element in order to the bucket of its digit, then concatenates the buckets
	/// back into `v` in digit order. Elements of equal digit keep their relative order. The buckets
	/// are dropped afterwards.
	///
	/// Returns the bucket end indices in `v` (i.e., indices past the last element in each bucket).
	pub fn distribute<A: Radix>(mut v: ArrayViewMut1<'_, A>, place: u32) -> [usize; RADIX] {
		let mut buckets: [Vec<A>; RADIX] = Default::default();
		for &x in v.iter() {
			buckets[x.digit(place)].push(x);
		}

		let mut ends = [0; RADIX];
		let mut dest = v.iter_mut();
		let mut end = 0;
		for (bucket, bucket_end) in buckets.iter().zip(&mut ends) {
			for (&x, slot) in bucket.iter().zip(dest.by_ref()) {
				*slot = x;
			}
			end += bucket.len();
			*bucket_end = end;
		}
		ends
	}
}

/// Returns the digit count of the greatest element, `None` if `v` is empty.
#[cfg(feature = "alloc")]
pub fn max_digit_count<'a, A: Radix + 'a>(v: impl IntoIterator<Item = &'a A>) -> Option<u32> {
	v.into_iter().copied().max().map(A::digit_count)
}

use core::fmt;

/// The argument of a checked sort that was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
	/// The array to sort.
	Array,
	/// The comparator function.
	Comparator,
	/// The randomness source picking pivots.
	Random,
}

impl fmt::Display for Argument {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Array => "array",
			Self::Comparator => "comparator",
			Self::Random => "randomness source",
		})
	}
}

/// The error the [`checked`](crate::checked) sorts can generate.
///
/// Validation happens before any element is touched, so the array is left as it was whenever an
/// error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
	/// A required argument was absent, it contains which one.
	InvalidArgument(Argument),
}

impl core::error::Error for Error {}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidArgument(argument) => write!(f, "Cannot pass in an absent {argument}"),
		}
	}
}

/// Unwraps a required argument or reports it as [`Error::InvalidArgument`].
pub(crate) fn require<T>(value: Option<T>, argument: Argument) -> Result<T, Error> {
	value.ok_or_else(|| {
		log::debug!("rejecting sort with absent {argument}");
		Error::InvalidArgument(argument)
	})
}

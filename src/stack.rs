/// Remaining stack below which a new stack segment is allocated.
#[cfg(feature = "stacker")]
const RED_ZONE: usize = 64 * 1024;
/// Size of every newly allocated stack segment.
#[cfg(feature = "stacker")]
const STACK_SIZE: usize = 1024 * 1024;

/// Runs `f`, growing the stack beforehand if little of it remains.
///
/// Without the `stacker` feature this simply calls `f`.
#[cfg(feature = "stacker")]
#[inline]
pub fn grow<R, F: FnOnce() -> R>(f: F) -> R {
	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

/// Runs `f`.
#[cfg(not(feature = "stacker"))]
#[inline(always)]
pub fn grow<R, F: FnOnce() -> R>(f: F) -> R {
	f()
}

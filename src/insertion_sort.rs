use ndarray::ArrayViewMut1;

/// Sorts `v` using insertion sort, which is *O*(*n*) best-case and *O*(*n*^2) worst-case.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		shift_tail(&mut v, i, is_less);
	}
}

/// Shifts the element at `tail` to the left until it encounters a smaller or equal element.
///
/// Every greater element it passes moves one place to the right. Stopping at equal elements keeps
/// the sort stable.
fn shift_tail<T, F>(v: &mut ArrayViewMut1<'_, T>, tail: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut hole = tail;
	while hole > 0 && is_less(&v[hole], &v[hole - 1]) {
		v.swap(hole - 1, hole);
		hole -= 1;
	}
}

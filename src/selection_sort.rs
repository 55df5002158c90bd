use ndarray::ArrayViewMut1;

/// Sorts `v` using selection sort, which is *O*(*n*^2) best-case and worst-case.
///
/// Scanning for the minimum prefers later equal elements, so the sort is unstable.
pub fn selection_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for i in 0..len.saturating_sub(1) {
		let mut min = i;
		for j in i + 1..len {
			// `v[j] <= v[min]`
			if !is_less(&v[min], &v[j]) {
				min = j;
			}
		}
		v.swap(i, min);
	}
}

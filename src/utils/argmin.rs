/// Returns the index of the minimum value approved by `filter` in the slice
/// `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned.
///
/// # Arguments
/// - `vec`: the slice of elements.
/// - `filter`: a closure that takes as arguments the index of the element and
///   the element itself and returns `true` if the element may be selected.
///
/// # Examples
/// ```
/// # use tree_analyzer::utils::math::filtered_argmin;
/// let v = vec![3, 1, 4, 1, 5];
/// let index = filtered_argmin(&v, |i, _| i != 1);
/// assert_eq!(index, Some(3));
/// ```
pub fn filtered_argmin<T: std::cmp::PartialOrd + Copy, F: Fn(usize, T) -> bool>(
    vec: &[T],
    filter: F,
) -> Option<usize> {
    let mut min = None;
    let mut argmin = None;

    for (i, &elem) in vec.iter().enumerate() {
        if filter(i, elem) && min.map_or(true, |min| elem < min) {
            argmin = Some(i);
            min = Some(elem);
        }
    }

    argmin
}

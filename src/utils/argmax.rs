/// Returns the index of the maximum value in the slice `vec` if found, [`None`] otherwise.
///
/// In case of ties, the smallest index is returned.
///
/// # Arguments
/// - `vec`: the slice of elements.
///
/// # Examples
/// ```
/// # use tree_analyzer::utils::math::argmax;
/// let v = vec![1, 2, 5, 2, 5];
/// let index = argmax(&v);
/// assert_eq!(index, Some(2));
/// ```
pub fn argmax<T: std::cmp::PartialOrd + Copy>(vec: &[T]) -> Option<usize> {
    if vec.is_empty() {
        return None;
    }
    let mut max = vec[0];
    let mut argmax = Some(0);
    for (i, &elem) in vec.iter().enumerate().skip(1) {
        if elem > max {
            argmax = Some(i);
            max = elem;
        }
    }
    argmax
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        let v: Vec<usize> = Vec::new();
        assert_eq!(argmax(&v), None);
    }

    #[test]
    fn test_single_element_min() {
        let v = vec![usize::MIN];
        assert_eq!(argmax(&v), Some(0));
    }

    #[test]
    fn test_normal() {
        let v = vec![2, 1, 5, 3];
        assert_eq!(argmax(&v), Some(2));
    }

    #[test]
    fn test_duplicates() {
        let v = vec![2, 5, 1, 3, 5];
        assert_eq!(argmax(&v), Some(1));
    }

    #[test]
    fn test_options() {
        let v = vec![Some(1), None, Some(3), Some(3)];
        assert_eq!(argmax(&v), Some(2));
    }
}

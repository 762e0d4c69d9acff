/// Returns true if any item of `iter` equals `key`.
pub fn linear_search<'a, T: PartialEq + 'a>(iter: impl IntoIterator<Item = &'a T>, key: &T) -> bool {
    iter.into_iter().any(|item| item == key)
}

/// Returns true if the sorted slice `sequence` contains `key`.
///
/// The result is unspecified if `sequence` is not sorted in ascending order.
pub fn binary_search<T: PartialOrd>(sequence: &[T], key: &T) -> bool {
    let i = sequence.partition_point(|item| item < key);
    sequence.get(i).is_some_and(|item| item == key)
}

use crate::search::contains;

/// All elements of `first` followed by all elements of `second`.
pub fn concat<T: Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(first.len() + second.len());
    result.extend_from_slice(first);
    result.extend_from_slice(second);
    result
}

/// The elements that `first` and `second` do not have in common.
///
/// This is the elements of `first` that are absent from `second`, followed
/// by the elements of `second` that are absent from `first`. Both parts
/// keep their original order. Repeated values are not collapsed: each
/// qualifying occurrence gets its own entry.
pub fn get_uncommon_elements<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let only_first = first.iter().filter(|item| !contains(second, *item));
    let only_second = second.iter().filter(|item| !contains(first, *item));
    only_first.chain(only_second).cloned().collect()
}

use std::hash::Hash;

use ahash::{HashSet, HashSetExt};

use crate::error;

/// Remove every element equal to `target` from `seq`, in place.
///
/// The remaining elements keep their relative order.
pub fn erase_all_of<T: PartialEq>(seq: &mut Vec<T>, target: &T) {
    seq.retain(|item| item != target);
}

/// A copy of `seq` holding only the first occurrence of each value.
///
/// ```
/// use vecutil::erase_duplicate_elements;
///
/// assert_eq!(
///     erase_duplicate_elements(&[1, 2, 1, 3, 4, 4, 5, 1]),
///     vec![1, 2, 3, 4, 5]
/// );
/// ```
pub fn erase_duplicate_elements<T>(seq: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(seq.len());
    seq.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Multiset difference: `first` with one matching element removed for each
/// element of `second`.
///
/// Elements of `second` are processed left to right, each removing the
/// first remaining equal element of `first` if there is one. So
/// `[1, 1, 1, 2, 3]` minus `[1, 1]` is `[1, 2, 3]`.
pub fn difference<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: PartialEq + Clone,
{
    let mut result = first.to_vec();
    for item in second {
        if let Some(index) = result.iter().position(|candidate| candidate == item) {
            result.remove(index);
        }
    }
    result
}

/// Remove and return the first element of `seq`.
///
/// All other elements shift down by one position.
pub fn pop_front<T>(seq: &mut Vec<T>) -> error::Result<T> {
    if seq.is_empty() {
        return Err(error::Error::empty_input("pop_front"));
    }
    Ok(seq.remove(0))
}

use rand::Rng;

use crate::error;

/// Returned by [`find_element_index`] when the element is absent.
pub const NOT_FOUND: usize = usize::MAX;

/// Check whether `seq` contains an element equal to `element`.
pub fn contains<T: PartialEq>(seq: &[T], element: &T) -> bool {
    seq.iter().any(|item| item == element)
}

/// The index of the first element equal to `element`, if any.
pub fn position<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    seq.iter().position(|item| item == element)
}

/// The index of the first element equal to `element`.
///
/// Returns [`NOT_FOUND`] if there is no such element. Use [`position`] to
/// get an `Option` instead.
pub fn find_element_index<T: PartialEq>(seq: &[T], element: &T) -> usize {
    position(seq, element).unwrap_or(NOT_FOUND)
}

/// The smallest element of `seq`.
///
/// If several elements are equally small, the first one is returned.
pub fn find_min<T: Ord>(seq: &[T]) -> error::Result<&T> {
    seq.iter()
        .min()
        .ok_or_else(|| error::Error::empty_input("find_min"))
}

/// An element of `seq` chosen uniformly at random.
///
/// The generator is supplied by the caller; seed it to get reproducible
/// picks.
pub fn get_random_element<'a, T, R>(seq: &'a [T], rng: &mut R) -> error::Result<&'a T>
where
    R: Rng + ?Sized,
{
    if seq.is_empty() {
        return Err(error::Error::empty_input("get_random_element"));
    }
    Ok(&seq[rng.gen_range(0..seq.len())])
}

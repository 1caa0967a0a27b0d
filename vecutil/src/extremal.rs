use strum_macros::{Display, EnumString, VariantNames};

use crate::error;

/// The end of a sequence an extremal search starts scanning from.
///
/// This decides which element wins when several are equally large: the
/// first one encountered in scan order. It converts from and to the
/// strings `"beginning"` and `"end"`; any other string fails to parse.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchFrom {
    /// Scan left to right.
    #[default]
    Beginning,
    /// Scan right to left.
    End,
}

/// The element of `seq` for which `size_fn` is largest.
///
/// Among equally large elements the one met first while scanning from
/// `search_from` wins.
pub fn find_largest_element<T, K, F>(
    seq: &[T],
    size_fn: F,
    search_from: SearchFrom,
) -> error::Result<&T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    largest_or_error(seq, size_fn, search_from, "find_largest_element")
}

/// The longest inner sequence of `seq_of_seqs`.
///
/// Anything that views as a slice works as an inner sequence: vectors,
/// arrays, boxed slices.
///
/// ```
/// use vecutil::{get_largest_vector_element, SearchFrom};
///
/// let rows = vec![vec![1, 2], vec![1, 2, 3, 4], vec![1]];
/// let longest = get_largest_vector_element(&rows, SearchFrom::Beginning).unwrap();
/// assert_eq!(longest, &vec![1, 2, 3, 4]);
/// ```
pub fn get_largest_vector_element<T, S>(
    seq_of_seqs: &[S],
    search_from: SearchFrom,
) -> error::Result<&S>
where
    S: AsRef<[T]>,
{
    largest_or_error(
        seq_of_seqs,
        |s| s.as_ref().len(),
        search_from,
        "get_largest_vector_element",
    )
}

/// The longest string of `seq`, measured in characters.
pub fn get_longest_string_element<S>(seq: &[S], search_from: SearchFrom) -> error::Result<&S>
where
    S: AsRef<str>,
{
    largest_or_error(
        seq,
        |s| s.as_ref().chars().count(),
        search_from,
        "get_longest_string_element",
    )
}

fn largest_or_error<'a, T, K, F>(
    seq: &'a [T],
    size_fn: F,
    search_from: SearchFrom,
    operation: &'static str,
) -> error::Result<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let largest = match search_from {
        SearchFrom::Beginning => first_largest(seq.iter(), size_fn),
        SearchFrom::End => first_largest(seq.iter().rev(), size_fn),
    };
    largest.ok_or_else(|| error::Error::empty_input(operation))
}

// strictly-greater comparison keeps the earliest of equal sizes
fn first_largest<'a, T: 'a, K: Ord>(
    mut items: impl Iterator<Item = &'a T>,
    mut size_fn: impl FnMut(&T) -> K,
) -> Option<&'a T> {
    let first = items.next()?;
    let mut largest_size = size_fn(first);
    let mut largest = first;
    for item in items {
        let size = size_fn(item);
        if size > largest_size {
            largest_size = size;
            largest = item;
        }
    }
    Some(largest)
}

use crate::extremal::{get_largest_vector_element, SearchFrom};

/// Transpose rows into columns.
///
/// Column `c` of the result holds element `c` of every row long enough to
/// have one, in row order. Rows may have different lengths; shorter rows
/// contribute nothing to the columns they lack, so the result is as ragged
/// as the input.
///
/// ```
/// use vecutil::reorient_2d_vector;
///
/// let table = vec![
///     vec!["Name", "Age"],
///     vec!["Alice", "30"],
///     vec!["Bob", "25"],
/// ];
/// assert_eq!(
///     reorient_2d_vector(&table),
///     vec![vec!["Name", "Alice", "Bob"], vec!["Age", "30", "25"]]
/// );
/// ```
pub fn reorient_2d_vector<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    if rows.is_empty() {
        return Vec::new();
    }
    let width = get_largest_vector_element(rows, SearchFrom::Beginning).map_or(0, |row| row.len());
    let mut columns = (0..width)
        .map(|_| Vec::with_capacity(rows.len()))
        .collect::<Vec<_>>();
    for row in rows {
        for (column, item) in columns.iter_mut().zip(row) {
            column.push(item.clone());
        }
    }
    columns
}

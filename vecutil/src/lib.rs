//! Free functions over sequences.
//!
//! Every function here is stateless and works on a slice (or, for the few
//! that edit in place, a `Vec`): searching, filtering, multiset
//! difference, reduction, transposition, string-to-number conversion and
//! random picks.
//!
//! Operations that have no answer for an empty sequence, such as
//! [`find_min`] or [`pop_front`], return [`Error::EmptyInput`] instead of
//! panicking.
//!
//! ```
//! use vecutil::{difference, erase_duplicate_elements, find_min};
//!
//! assert_eq!(difference(&[1, 1, 2, 3, 4, 5], &[1, 3, 5]), vec![1, 2, 4]);
//! assert_eq!(erase_duplicate_elements(&[3, 1, 3, 2]), vec![3, 1, 2]);
//! assert_eq!(find_min(&[4, 2, 9]).unwrap(), &2);
//! assert!(find_min::<i32>(&[]).is_err());
//! ```

mod combine;
mod convert;
pub mod error;
mod extremal;
mod filter;
mod reduce;
mod reshape;
mod search;

pub use combine::{concat, get_uncommon_elements};
pub use convert::{
    convert_string_vector, parse_all, vec_of_strings_to_vec_of_ints,
    vec_of_strings_to_vec_of_long_long_ints,
};
pub use error::{Error, Result};
pub use extremal::{
    find_largest_element, get_largest_vector_element, get_longest_string_element, SearchFrom,
};
pub use filter::{difference, erase_all_of, erase_duplicate_elements, pop_front};
pub use reduce::{multiply_all, product, sum, sum_all};
pub use reshape::reorient_2d_vector;
pub use search::{contains, find_element_index, find_min, get_random_element, position, NOT_FOUND};

// compiles the README examples as doctests
#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

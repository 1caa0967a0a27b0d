use std::ops::{Add, Mul};

use num_traits::{One, Zero};

/// Add up all elements of `seq`, starting from `init`.
///
/// An empty sequence yields `init`.
pub fn sum_all<T>(seq: &[T], init: T) -> T
where
    T: Add<Output = T> + Clone,
{
    seq.iter().cloned().fold(init, |acc, item| acc + item)
}

/// Add up all elements of `seq`, starting from zero.
pub fn sum<T>(seq: &[T]) -> T
where
    T: Add<Output = T> + Zero + Clone,
{
    sum_all(seq, T::zero())
}

/// Multiply all elements of `seq`, starting from `init`.
///
/// An empty sequence yields `init`.
pub fn multiply_all<T>(seq: &[T], init: T) -> T
where
    T: Mul<Output = T> + Clone,
{
    seq.iter().cloned().fold(init, |acc, item| acc * item)
}

/// Multiply all elements of `seq`, starting from one.
pub fn product<T>(seq: &[T]) -> T
where
    T: Mul<Output = T> + One + Clone,
{
    multiply_all(seq, T::one())
}

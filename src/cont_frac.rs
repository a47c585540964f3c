//! Folding of finite continued-fraction coefficient sequences.
//!
//! A finite coefficient sequence is read as an infinite periodic stream:
//! when the sequence is exhausted it restarts from the beginning. Folding
//! that stream with the continued-fraction step `x + 1/v` evaluates the
//! periodic continued fraction `[a0; a1, a2, ..., (a0, a1, ...)]`.
//!
//! REF: <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//!      <https://crypto.stanford.edu/pbc/notes/contfrac/>

use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, Float};
use std::fmt;
use std::mem::swap;

/// Default iteration cap for the fold.
pub const MAX_ITERATIONS: usize = 50;

/// Default fixed-point precision threshold for early stop.
pub const PRECISION: f64 = 1e-8;

/// Errors raised by [fold_cyclic].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoldError {
    /// The input sequence had no elements.
    EmptySequence,
    /// An intermediate value left the finite domain, e.g. after a
    /// division by zero in the reducer.
    NonFinite,
}

impl fmt::Display for FoldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FoldError::EmptySequence => write!(f, "sequence cannot be empty"),
            FoldError::NonFinite => write!(f, "folded value is not finite"),
        }
    }
}

impl std::error::Error for FoldError {}

/// Iterator reading a slice cyclically, restarting at the front whenever
/// the end is reached. Never terminates for a non-empty slice.
#[derive(Debug, Clone)]
pub struct Cyclic<'a, T> {
    items: &'a [T],
    pos: usize,
}

impl<'a, T> Cyclic<'a, T> {
    #[inline]
    pub fn new(items: &'a [T]) -> Self {
        Cyclic { items, pos: 0 }
    }
}

impl<'a, T> Iterator for Cyclic<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.items.is_empty() {
            return None;
        }
        let item = &self.items[self.pos];
        self.pos = (self.pos + 1) % self.items.len();
        Some(item)
    }
}

/// The continued-fraction folding step `next + 1/current`.
#[inline]
pub fn cfrac_step<T: Float>(current: T, next: T) -> T {
    next + current.recip()
}

/// Fold a coefficient sequence into a scalar with the default iteration
/// cap and precision.
///
/// See [fold_cyclic_with] for the algorithm.
pub fn fold_cyclic<F>(seq: &[f64], reducer: F) -> Result<f64, FoldError>
where
    F: Fn(f64, f64) -> f64,
{
    fold_cyclic_with(seq, reducer, MAX_ITERATIONS, PRECISION)
}

/// Fold a coefficient sequence into a scalar.
///
/// The value starts at the first element. Each step takes the next element
/// `x` of the cyclic stream and replaces the value with `reducer(value, x)`,
/// for at most `max_iterations - 1` steps. The fold stops early once the
/// value is a fixed point of its own step, i.e. when
/// `|value - reducer(value, x)| < precision`.
///
/// A single-element sequence degenerates to repeated self-application of
/// the reducer, converging to its fixed point when one exists.
pub fn fold_cyclic_with<T, F>(
    seq: &[T],
    reducer: F,
    max_iterations: usize,
    precision: T,
) -> Result<T, FoldError>
where
    T: Float,
    F: Fn(T, T) -> T,
{
    let mut coeffs = Cyclic::new(seq);
    let mut value = *coeffs.next().ok_or(FoldError::EmptySequence)?;

    for &x in coeffs.take(max_iterations.saturating_sub(1)) {
        value = reducer(value, x);
        if !value.is_finite() {
            return Err(FoldError::NonFinite);
        }
        if (value - reducer(value, x)).abs() < precision {
            break;
        }
    }

    Ok(value)
}

/// Iterator of the exact convergents `p_k / q_k` of a coefficient slice,
/// by the recurrence `p_k = a_k p_{k-1} + p_{k-2}` (likewise for `q`).
#[derive(Debug, Clone)]
pub struct Convergents<'a, T> {
    coeffs: std::slice::Iter<'a, T>,
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul> Iterator for Convergents<'a, T> {
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let p = a.checked_mul(&self.pm1).and_then(|v| v.checked_add(&self.pm2))?;
        let q = a.checked_mul(&self.qm1).and_then(|v| v.checked_add(&self.qm2))?;

        swap(&mut self.pm2, &mut self.pm1);
        swap(&mut self.qm2, &mut self.qm1);
        self.pm1 = p.clone();
        self.qm1 = q.clone();

        Some(Ratio::new(p, q))
    }
}

/// Returns the convergents of a finite coefficient slice.
pub fn convergents<T: Integer + Clone + CheckedAdd + CheckedMul>(coeffs: &[T]) -> Convergents<'_, T> {
    Convergents {
        coeffs: coeffs.iter(),
        pm1: T::one(),
        pm2: T::zero(),
        qm1: T::zero(),
        qm2: T::one(),
    }
}

//! Approximation table, sequence enumeration and the matcher.

use crate::cont_frac::{fold_cyclic, FoldError};
use crate::surd::Surd;
use std::collections::BTreeMap;
use std::fmt;

/// Range of the surd offset `a` in the default table.
pub const A_RANGE: (i64, i64) = (-10, 10);
/// Range of the surd base `b` in the default table.
pub const B_RANGE: (i64, i64) = (1, 10);
/// Range of the surd denominator `c` in the default table.
pub const C_RANGE: (i64, i64) = (1, 10);

/// Default matching tolerance.
pub const TOLERANCE: f64 = 1e-8;

/// Precomputed mapping from surd triples to their rounded values.
/// Built once over the default ranges, immutable afterward.
#[derive(Debug, Clone)]
pub struct ApproximationTable {
    entries: BTreeMap<Surd, f64>,
}

impl ApproximationTable {
    /// Build the table by evaluating `f` over every triple in
    /// [A_RANGE] x [B_RANGE] x [C_RANGE]. Triples where `f` returns
    /// `None` are skipped.
    pub fn build<F>(f: F) -> Self
    where
        F: Fn(i64, i64, i64) -> Option<f64>,
    {
        let mut entries = BTreeMap::new();
        for a in A_RANGE.0..=A_RANGE.1 {
            for b in B_RANGE.0..=B_RANGE.1 {
                for c in C_RANGE.0..=C_RANGE.1 {
                    if let Some(value) = f(a, b, c) {
                        entries.insert(Surd::new(a, b, c), value);
                    }
                }
            }
        }
        ApproximationTable { entries }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn get(&self, key: &Surd) -> Option<f64> {
        self.entries.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Surd, f64)> + '_ {
        self.entries.iter().map(|(k, &v)| (k, v))
    }
}

/// Lazy lexicographic enumeration of `[start, end]^len`, the search space
/// of coefficient sequences. Works like an odometer: the rightmost
/// position increments first.
#[derive(Debug, Clone)]
pub struct Sequences {
    start: i64,
    end: i64,
    digits: Vec<i64>,
    remaining: Option<usize>, // None when the count overflows usize
    done: bool,
}

/// Enumerate every sequence of `len` integers drawn from `[start, end]`,
/// in lexicographic order.
pub fn generate_sequences(start: i64, end: i64, len: usize) -> Sequences {
    let span = if end < start { 0 } else { (end - start + 1) as usize };
    let remaining = span.checked_pow(len as u32);
    Sequences {
        start,
        end,
        digits: vec![start; len],
        remaining,
        done: end < start && len > 0,
    }
}

impl Iterator for Sequences {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.digits.clone();
        if let Some(n) = self.remaining.as_mut() {
            *n -= 1;
        }

        // advance the odometer
        let mut i = self.digits.len();
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.digits[i] < self.end {
                self.digits[i] += 1;
                for d in self.digits[i + 1..].iter_mut() {
                    *d = self.start;
                }
                break;
            }
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            match self.remaining {
                Some(n) => (n, Some(n)),
                None => (usize::MAX, None),
            }
        }
    }
}

/// A sequence whose folded value landed within tolerance of a table entry.
/// A single sequence may produce several of these, one per matching key.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub seq: Vec<i64>,
    pub key: Surd,
    pub value: f64,
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence: (")?;
        let mut it = self.seq.iter();
        if let Some(first) = it.next() {
            write!(f, "{}", first)?;
            for v in it {
                write!(f, ", {}", v)?;
            }
        }
        write!(
            f,
            "), Matches with: ({}, {}, {}), Value: {}",
            self.key.a, self.key.b, self.key.c, self.value
        )
    }
}

/// Fold every candidate sequence and scan the whole table for entries
/// within `tolerance` of the folded value. Every entry in range is
/// recorded; there is no early exit.
///
/// Fold errors (an empty candidate, a non-finite value) are fatal and
/// abort the search.
pub fn find_matches<I, F>(
    sequences: I,
    reducer: F,
    approximations: &ApproximationTable,
    tolerance: f64,
) -> Result<Vec<Match>, FoldError>
where
    I: IntoIterator<Item = Vec<i64>>,
    F: Fn(f64, f64) -> f64,
{
    let mut matches = Vec::new();
    for seq in sequences {
        let coeffs: Vec<f64> = seq.iter().map(|&x| x as f64).collect();
        let value = fold_cyclic(&coeffs, &reducer)?;
        for (key, approx) in approximations.iter() {
            if (value - approx).abs() < tolerance {
                matches.push(Match {
                    seq: seq.clone(),
                    key: *key,
                    value: approx,
                });
            }
        }
    }
    Ok(matches)
}

//! Brute-force search for finite continued-fraction coefficient sequences
//! whose folded value matches a quadratic surd `(a + sqrt(b)) / c`, with
//! typeset table output for every match.
//!
//! The pipeline is: [search::ApproximationTable] precomputes the closed-form
//! targets, [search::Sequences] enumerates the candidate space,
//! [cont_frac::fold_cyclic] evaluates each candidate, [search::find_matches]
//! collects everything within tolerance, and [render::render_match] typesets
//! each match through the external LaTeX toolchain.

pub mod cont_frac;
pub mod latex;
pub mod render;
pub mod search;
pub mod surd;

pub use cont_frac::{cfrac_step, convergents, fold_cyclic, FoldError};
pub use search::{find_matches, generate_sequences, ApproximationTable, Match};
pub use surd::Surd;

//! LaTeX emission for matched sequences.
//!
//! Pure string building only; running the toolchain lives in [crate::render].

use crate::surd::Surd;

/// Emission of an inline LaTeX fragment for a value.
pub trait EmitLatex {
    fn emit_latex(&self) -> String;
}

impl EmitLatex for Surd {
    /// The algebraic form `\(\frac{a + \sqrt{b}}{c}\)`.
    fn emit_latex(&self) -> String {
        format!(
            r"\(\frac{{{} + \sqrt{{{}}}}}{{{}}}\)",
            self.a, self.b, self.c
        )
    }
}

impl EmitLatex for [i64] {
    /// The nested continued-fraction form of a coefficient sequence.
    ///
    /// At most four continuation terms are typeset; longer sequences end
    /// in `\ddots`.
    fn emit_latex(&self) -> String {
        let mut out = String::from(r"\(");
        let first = match self.first() {
            Some(v) => v,
            None => {
                out.push_str(r"\)");
                return out;
            }
        };
        out.push_str(&first.to_string());

        if self.len() > 1 {
            let truncated = self.len() > 5;
            let shown = if truncated { &self[1..5] } else { &self[1..] };
            for n in shown {
                out.push_str(&format!(r" + \frac{{1}}{{{}", n));
            }
            if truncated {
                out.push_str(r" + \ddots");
            }
            for _ in 0..shown.len() {
                out.push('}');
            }
        }

        out.push_str(r"\)");
        out
    }
}

/// Decimal presentation of a matched value, 8 places with a trailing
/// ellipsis.
pub fn decimal_str(value: f64) -> String {
    format!("{:.8}...", value)
}

/// Comma-separated presentation of a coefficient sequence.
pub fn sequence_str(seq: &[i64]) -> String {
    seq.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A standalone LaTeX article containing the two-column match table.
pub fn table_document(sequence: &str, decimal: &str, algebraic: &str, cont_frac: &str) -> String {
    format!(
        r"\documentclass{{article}}
\usepackage{{amsmath}}
\usepackage{{amsfonts}}
\usepackage{{graphicx}}
\pagestyle{{empty}} % Suppress page numbering
\begin{{document}}

\begin{{table}}[h]
\centering
\begin{{tabular}}{{ll}}
Sequence      & {} \\
Decimal       & {} \\
Algebraic form & {} \\
Continued fraction & {}
\end{{tabular}}
\end{{table}}

\end{{document}}
",
        sequence, decimal, algebraic, cont_frac
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surd_latex_test() {
        assert_eq!(
            Surd::new(1, 5, 2).emit_latex(),
            r"\(\frac{1 + \sqrt{5}}{2}\)"
        );
        assert_eq!(
            Surd::new(-3, 2, 10).emit_latex(),
            r"\(\frac{-3 + \sqrt{2}}{10}\)"
        );
    }

    #[test]
    fn cont_frac_latex_test() {
        assert_eq!([7i64].emit_latex(), r"\(7\)");
        assert_eq!(
            [1i64, 2, 3].emit_latex(),
            r"\(1 + \frac{1}{2 + \frac{1}{3}}\)"
        );
        assert_eq!(
            [1i64, 1, 1, 1, 1].emit_latex(),
            r"\(1 + \frac{1}{1 + \frac{1}{1 + \frac{1}{1 + \frac{1}{1}}}}\)"
        );
    }

    #[test]
    fn cont_frac_latex_truncation_test() {
        // only the first four continuation terms are shown
        assert_eq!(
            [1i64, 2, 3, 4, 5, 6, 7].emit_latex(),
            r"\(1 + \frac{1}{2 + \frac{1}{3 + \frac{1}{4 + \frac{1}{5 + \ddots}}}}\)"
        );
    }

    #[test]
    fn decimal_str_test() {
        assert_eq!(decimal_str(1.61803399), "1.61803399...");
        assert_eq!(decimal_str(2.0), "2.00000000...");
    }

    #[test]
    fn table_document_test() {
        let doc = table_document("1, 1, 1", "1.61803399...", r"\(x\)", r"\(y\)");
        assert!(doc.starts_with(r"\documentclass{article}"));
        assert!(doc.contains(r"\begin{tabular}{ll}"));
        assert!(doc.contains(r"Sequence      & 1, 1, 1 \\"));
        assert!(doc.contains("Decimal       & 1.61803399..."));
        assert!(doc.contains(r"\end{document}"));
    }
}

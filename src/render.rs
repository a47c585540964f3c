//! Best-effort rendering of matches through the LaTeX toolchain.
//!
//! Each match is typeset in a scoped temporary directory and pushed through
//! `latex` -> `dvipdf` -> `pdfcrop` -> `convert` to a cropped PNG. The tools
//! must be on PATH; their exit statuses are deliberately ignored, so a
//! missing tool leaves a missing image rather than a failed run. Only local
//! I/O surfaces errors.

use crate::latex::{decimal_str, sequence_str, table_document, EmitLatex};
use crate::search::Match;
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// File name of the PNG produced for a match, `table_<seq>_<key>.png`
/// with hyphen-joined components.
pub fn image_name(m: &Match) -> String {
    let mut name = String::from("table_");
    for (i, n) in m.seq.iter().enumerate() {
        if i > 0 {
            name.push('-');
        }
        let _ = write!(name, "{}", n);
    }
    let _ = write!(name, "_{}-{}-{}.png", m.key.a, m.key.b, m.key.c);
    name
}

/// Typeset one match into `output_dir` and return the image path.
///
/// The returned path may not exist if any pipeline stage failed; that is
/// part of the contract.
pub fn render_match(m: &Match, output_dir: &Path) -> io::Result<PathBuf> {
    let tmp = TempDir::new()?;
    let tex_file = tmp.path().join("table.tex");
    let dvi_file = tmp.path().join("table.dvi");
    let pdf_file = tmp.path().join("table.pdf");
    let cropped_file = tmp.path().join("table-cropped.pdf");
    let png_file = output_dir.join(image_name(m));

    let document = table_document(
        &sequence_str(&m.seq),
        &decimal_str(m.value),
        &m.key.emit_latex(),
        &m.seq.emit_latex(),
    );
    fs::write(&tex_file, document)?;

    // Exit codes unchecked: absent tools leave absent artifacts.
    let _ = Command::new("latex")
        .arg("-output-directory")
        .arg(tmp.path())
        .arg(&tex_file)
        .status();
    let _ = Command::new("dvipdf").arg(&dvi_file).arg(&pdf_file).status();
    let _ = Command::new("pdfcrop")
        .arg(&pdf_file)
        .arg(&cropped_file)
        .status();
    let _ = Command::new("convert")
        .args(&["-density", "300", "-background", "white", "-flatten"])
        .arg(&cropped_file)
        .arg(&png_file)
        .status();

    Ok(png_file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surd::Surd;

    fn golden_match() -> Match {
        Match {
            seq: vec![1, 1, 1],
            key: Surd::new(1, 5, 2),
            value: 1.61803399,
        }
    }

    #[test]
    fn image_name_test() {
        assert_eq!(image_name(&golden_match()), "table_1-1-1_1-5-2.png");

        let m = Match {
            seq: vec![10, -2, 3],
            key: Surd::new(-10, 1, 10),
            value: -0.9,
        };
        assert_eq!(image_name(&m), "table_10--2-3_-10-1-10.png");
    }

    #[test]
    fn render_match_path_test() {
        // the toolchain may be absent; the call must still succeed and
        // report where the image would land
        let out = TempDir::new().unwrap();
        let png = render_match(&golden_match(), out.path()).unwrap();
        assert_eq!(png, out.path().join("table_1-1-1_1-5-2.png"));
    }
}

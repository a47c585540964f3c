use std::fs;
use std::path::Path;
use std::process;

use surd_search::cont_frac::cfrac_step;
use surd_search::render::render_match;
use surd_search::search::{find_matches, generate_sequences, ApproximationTable, TOLERANCE};
use surd_search::surd::Surd;

fn main() {
    let (range_start, range_end) = (1, 10);
    let seq_length = 5;

    let approximations = ApproximationTable::build(|a, b, c| Surd::new(a, b, c).eval());
    eprintln!("approximation table: {} entries", approximations.len());

    let sequences = generate_sequences(range_start, range_end, seq_length);
    eprintln!("searching {} sequences of length {}", sequences.size_hint().0, seq_length);

    let matches = match find_matches(sequences, cfrac_step::<f64>, &approximations, TOLERANCE) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("search failed: {}", e);
            process::exit(1);
        }
    };

    for m in &matches {
        println!("{}", m);
    }
    eprintln!("{} matches found", matches.len());

    let output_dir = Path::new("output");
    if let Err(e) = fs::create_dir_all(output_dir) {
        eprintln!("cannot create {}: {}", output_dir.display(), e);
        process::exit(1);
    }
    for m in &matches {
        if let Err(e) = render_match(m, output_dir) {
            eprintln!("render failed for {}: {}", m, e);
        }
    }
}

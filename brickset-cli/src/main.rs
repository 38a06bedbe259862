//! brickset CLI
//!
//! Runs a fixed demonstration sequence of catalog queries over the bundled
//! set data and prints the results line-oriented to stdout.

mod error;

use brickset_catalog::{parse_sets, SetCatalog};
use error::CliError;

/// Set data bundled into the binary, one JSON array of set records.
const BRICKSET_DATA: &str = include_str!("../data/brickset.json");

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let catalog = SetCatalog::from_sets(parse_sets(BRICKSET_DATA)?);
    log::debug!("Loaded {} sets", catalog.len());

    println!("{}", catalog.count_with_tag("Microscale"));

    for name in catalog.names_with_theme("Star Wars") {
        println!("{name}");
    }

    for name in catalog.top_names_by_pieces(2) {
        println!("{name}");
    }

    println!("{}", catalog.count_with_packaging("polybag")?);

    for name in catalog.names_in_piece_range(1000, 2000) {
        println!("{name}");
    }

    for name in catalog.names_at_least_weight(2.0) {
        println!("{name}");
    }

    Ok(())
}

use std::path::PathBuf;

use name_gen_core::extract::extract_to_file;

const USAGE: &str = "usage: name-gen-extract <places.csv> <output_dir> <ISO2 code>...";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(csv_path), Some(output_dir)) = (args.next(), args.next()) else {
        return Err(USAGE.into());
    };
    // Two-letter country codes, e.g. UZ QA ZW
    let codes: Vec<String> = args.collect();
    if codes.is_empty() {
        return Err(USAGE.into());
    }

    let (path, places) = extract_to_file(&PathBuf::from(csv_path), &PathBuf::from(output_dir), &codes)?;
    for place in &places {
        println!("{place}");
    }
    println!("{} names in list, written to {}.", places.len(), path.display());

    Ok(())
}

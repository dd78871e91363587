use ged_reader::{GedReaderConfig, Result, derive_relationships, read_gedcom, validate};
use log::info;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = env::args().nth(1).unwrap_or_else(|| "My-Family.ged".to_string());
    let config = GedReaderConfig::default();

    info!("Reading GEDCOM records from: {path}");
    let (mut collection, mut violations) = read_gedcom(Path::new(&path), &config)?;
    info!(
        "Parsed {} individuals and {} families",
        collection.individual_count(),
        collection.family_count()
    );

    derive_relationships(&mut collection);
    violations.extend(validate(&collection, &config));
    info!("Found {} violations", violations.len());

    for violation in &violations {
        println!("{violation}");
    }

    Ok(())
}

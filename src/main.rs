use std::path::PathBuf;

use csv_id_sort::outcome::SortOutcome;
use csv_id_sort::sort::IdSort;

const INPUT_FILE: &str = "players.csv";

fn main() -> Result<(), anyhow::Error> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let id_sort = IdSort::new(PathBuf::from(INPUT_FILE));
    match id_sort.run()? {
        SortOutcome::Rewritten { valid, invalid } => {
            println!(
                "✅ Data sorted with invalid identifiers fixed and {} unrepairable rows moved to the bottom in {} ({} valid rows)",
                invalid, INPUT_FILE, valid,
            );
        }
        SortOutcome::NothingToWrite => {
            println!("❌ Sorting failed or file was empty. Nothing was written.");
        }
    }
    Ok(())
}

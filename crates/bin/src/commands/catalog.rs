//! Destination search and hotel listings.

use egytravel::catalog;

use crate::cli::SearchArgs;
use crate::output::{OutputFormat, print_json, print_table};

/// Run the `search` command
pub fn search(args: &SearchArgs, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let query = args.query.as_deref().unwrap_or_default();
    let matches = catalog::search_locations(query);

    match format {
        OutputFormat::Human => {
            if matches.is_empty() {
                println!("No destinations match \"{query}\".");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = matches
                .iter()
                .map(|location| vec![location.name.to_string(), location.description.to_string()])
                .collect();
            print_table(&["DESTINATION", "DESCRIPTION"], &rows);
        }
        OutputFormat::Json => print_json(&matches)?,
    }
    Ok(())
}

/// Run the `hotels` command
pub fn hotels(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let hotels = catalog::hotels();

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = hotels
                .iter()
                .map(|hotel| {
                    vec![
                        hotel.id.to_string(),
                        hotel.title.to_string(),
                        hotel.location.to_string(),
                        format!("${}", hotel.price),
                        format!("{:.1}", hotel.rating),
                    ]
                })
                .collect();
            print_table(&["ID", "TITLE", "LOCATION", "PRICE", "RATING"], &rows);
        }
        OutputFormat::Json => print_json(hotels)?,
    }
    Ok(())
}

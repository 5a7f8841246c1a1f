use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use void_core::Planet;
use void_events::{Voyage, VoyageConfig};

pub fn run(system: &str, tier: u32, count: u32, seed: u64, log: bool) -> Result<(), String> {
    let mut voyage = Voyage::new(VoyageConfig::default().with_seed(seed));
    let planets = voyage
        .chart_system(system, tier, count)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} '{system}' {}",
        "System".bold(),
        format!("(tier {tier}, seed={seed})").dimmed()
    );
    println!();

    if planets.is_empty() {
        println!("  No planets charted.");
    } else {
        print_table(&planets);
    }

    if log {
        super::print_log(voyage.log());
    }

    Ok(())
}

fn print_table(planets: &[Planet]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Type", "Size", "Tier", "Resource"]);
    for planet in planets {
        table.add_row(vec![
            planet.name.clone(),
            planet.planet_type.to_string(),
            planet.size.to_string(),
            planet.tier.to_string(),
            planet.resource().to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} planets", planets.len());
}

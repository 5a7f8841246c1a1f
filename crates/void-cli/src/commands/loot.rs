use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use void_core::PlanetType;
use void_events::loot::{applicable_rarities, generate_loot};

pub struct LootArgs {
    pub tier: u32,
    pub size: u32,
    pub resource: Option<String>,
    pub planet_type: String,
    pub bonus: u32,
    pub seed: u64,
    pub json: bool,
}

pub fn run(args: LootArgs) -> Result<(), String> {
    let resource = match args.resource {
        Some(name) => name,
        None => PlanetType::parse(&args.planet_type)
            .map_err(|e| e.to_string())?
            .resource()
            .to_string(),
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let drops = generate_loot(args.tier, args.size, &resource, args.bonus, &mut rng);

    if args.json {
        let json = serde_json::to_string_pretty(&drops).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let bands: Vec<String> = applicable_rarities(args.tier)
        .iter()
        .map(|r| r.to_string())
        .collect();
    println!(
        "  {} {resource} {}",
        "Loot".bold(),
        format!(
            "(tier {}, size {}, bonus {}, seed={})",
            args.tier, args.size, args.bonus, args.seed
        )
        .dimmed()
    );
    if bands.is_empty() {
        println!("  Reachable bands: {}", "none".dimmed());
    } else {
        println!("  Reachable bands: {}", bands.join(", "));
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Item", "Quantity", "Note"]);
    for drop in &drops {
        let note = if drop.consolation { "minor traces" } else { "" };
        table.add_row(vec![
            drop.item.clone(),
            drop.quantity.to_string(),
            note.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

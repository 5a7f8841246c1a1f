use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use void_core::{Alien, Planet, PlanetType};
use void_events::{EncounterAction, Voyage, VoyageConfig};

pub struct EncounterArgs {
    pub alien: String,
    pub strength: u32,
    pub aggression: u32,
    pub planet_type: String,
    pub tier: u32,
    pub size: u32,
    pub action: String,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub log: bool,
}

pub fn run(args: EncounterArgs) -> Result<(), String> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let config = VoyageConfig::from_json(&text)
                .map_err(|e| format!("{}: {e}", path.display()))?;
            debug!(path = %path.display(), seed = config.seed, "loaded voyage config");
            config
        }
        None => VoyageConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let planet_type = PlanetType::parse(&args.planet_type).map_err(|e| e.to_string())?;
    let action = EncounterAction::parse(&args.action).map_err(|e| e.to_string())?;
    let alien = Alien::new(args.alien, args.strength, args.aggression);
    let mut planet = Planet::new("Landing Site", planet_type, args.size, args.tier);

    let seed = config.seed;
    let mut voyage = Voyage::new(config);
    let event = void_events::aggressive_alien_encounter(&alien, &planet, voyage.tuning());

    println!("  {}", event.title().bold().underline());
    println!("  {}", event.description());
    println!();
    for (i, choice) in event.choices().iter().enumerate() {
        let marker = if i == action.index() { "▶" } else { " " };
        println!(
            "  {marker} {} {}",
            choice.label,
            format!("({}%)", choice.success_chance).dimmed()
        );
    }
    println!("  {}", format!("seed={seed}").dimmed());
    println!();

    let resolution = voyage
        .explore(&mut planet, &alien, action)
        .map_err(|e| e.to_string())?;
    super::print_resolution(&resolution, voyage.player());
    if args.log {
        super::print_log(voyage.log());
    }

    Ok(())
}

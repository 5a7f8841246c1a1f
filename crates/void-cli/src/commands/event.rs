use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::debug;

use void_events::{Event, Voyage, VoyageConfig, derelict_ship};

pub fn run(
    file: Option<&Path>,
    choice: Option<usize>,
    seed: u64,
    log: bool,
) -> Result<(), String> {
    let mut event = match file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            let event =
                Event::from_json(&text).map_err(|e| format!("{}: {e}", path.display()))?;
            debug!(path = %path.display(), title = event.title(), "loaded event");
            event
        }
        None => derelict_ship(),
    };

    println!("  {}", event.title().bold().underline());
    println!("  {}", event.description());
    println!();
    for (i, c) in event.choices().iter().enumerate() {
        println!(
            "  {}. {} {}",
            i + 1,
            c.label,
            format!("({}%)", c.success_chance).dimmed()
        );
    }
    println!();

    let Some(number) = choice else {
        println!("  Pick a choice with --choice <N>.");
        return Ok(());
    };
    let index = number
        .checked_sub(1)
        .ok_or_else(|| "choices are numbered from 1".to_string())?;

    let mut voyage = Voyage::new(VoyageConfig::default().with_seed(seed));
    let resolution = voyage
        .encounter(&mut event, index)
        .map_err(|e| e.to_string())?;
    super::print_resolution(&resolution, voyage.player());
    if log {
        super::print_log(voyage.log());
    }

    Ok(())
}

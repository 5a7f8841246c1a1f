pub mod encounter;
pub mod event;
pub mod loot;
pub mod odds;
pub mod planets;

use colored::Colorize;
use void_core::{Player, StatKind};
use void_events::{Resolution, VoyageLog};

/// Print the verdict, narration, and ship status after a resolution.
fn print_resolution(resolution: &Resolution, player: &Player) {
    let verdict = if resolution.success {
        "SUCCESS".green().bold()
    } else {
        "FAILURE".red().bold()
    };
    println!(
        "  {verdict} {}",
        format!("(rolled {} on d100)", resolution.roll).dimmed()
    );
    println!();
    for line in resolution.narration.lines() {
        println!("  {line}");
    }
    if !resolution.narration.is_empty() {
        println!();
    }
    print_status(player);
}

/// Print hull, fuel, and cargo.
fn print_status(player: &Player) {
    let hull = format!("{}/{}", player.health(), player.max_stat(StatKind::Health));
    let hull = if player.is_alive() {
        hull.normal()
    } else {
        hull.red().bold()
    };
    println!("  {} {hull}  {} {}", "Hull".bold(), "Fuel".bold(), player.fuel());
    if !player.inventory().is_empty() {
        println!("  {}", "Cargo".bold());
        for (item, amount) in player.inventory() {
            println!("    {amount:>4} × {item}");
        }
    }
}

/// Print the captain's log as markdown.
fn print_log(log: &VoyageLog) {
    println!();
    print!("{}", log.export_markdown());
}

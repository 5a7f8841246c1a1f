use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use void_events::choice::MAX_CHANCE;
use void_events::resolver::roll_chance;

pub fn run(chance: u32, trials: u32, seed: u64) -> Result<(), String> {
    if chance > MAX_CHANCE {
        return Err(format!("chance must be between 0 and {MAX_CHANCE}, got {chance}"));
    }
    if trials == 0 {
        return Err("need at least one trial".into());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let successes = (0..trials)
        .filter(|_| roll_chance(chance, &mut rng).0)
        .count();
    let rate = successes as f64 / f64::from(trials) * 100.0;

    println!(
        "  {} {chance}% {}",
        "Odds".bold(),
        format!("({trials} trials, seed={seed})").dimmed()
    );
    println!("  {successes} successes, empirical rate {rate:.2}%");

    Ok(())
}

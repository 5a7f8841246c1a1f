//! CLI frontend for the Last in the Void encounter engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "void",
    about = "Last in the Void — encounters, planets, and loot from the command line",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log resolution details to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart a star system and list its planets
    Planets {
        /// System name
        #[arg(long, default_value = "Kepler")]
        system: String,

        /// System tier (planets get tiers below it, minimum 2)
        #[arg(short, long, default_value = "3")]
        tier: u32,

        /// Number of planets
        #[arg(short, long, default_value = "5")]
        count: u32,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the captain's log afterwards
        #[arg(long)]
        log: bool,
    },

    /// Roll the loot table for a source
    Loot {
        /// Source tier (caps rarity bands)
        #[arg(short, long, default_value = "3")]
        tier: u32,

        /// Source size
        #[arg(long, default_value = "40")]
        size: u32,

        /// Base resource name (overrides --planet-type)
        #[arg(short, long)]
        resource: Option<String>,

        /// Planet type used to pick the resource: gas, mineral, organic, star, event
        #[arg(short, long, default_value = "gas")]
        planet_type: String,

        /// Quantity bonus (e.g. a defeated alien's strength)
        #[arg(short, long, default_value = "0")]
        bonus: u32,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print drops as JSON
        #[arg(long)]
        json: bool,
    },

    /// Confront a hostile alien on a planet
    Encounter {
        /// Alien name
        #[arg(short, long, default_value = "Xenomorph")]
        alien: String,

        /// Alien strength
        #[arg(long, default_value = "50")]
        strength: u32,

        /// Alien aggression (0-100)
        #[arg(long, default_value = "50")]
        aggression: u32,

        /// Planet type: gas, mineral, organic, star, event
        #[arg(short, long, default_value = "mineral")]
        planet_type: String,

        /// Planet tier
        #[arg(short, long, default_value = "3")]
        tier: u32,

        /// Planet size
        #[arg(long, default_value = "40")]
        size: u32,

        /// What to do: attack or flee
        #[arg(short = 'x', long, default_value = "attack")]
        action: String,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON voyage config
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the captain's log afterwards
        #[arg(long)]
        log: bool,
    },

    /// Play a scripted event (the derelict ship unless --file is given)
    Event {
        /// JSON event definition
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Choice number, starting at 1 (omit to list choices)
        #[arg(short, long)]
        choice: Option<usize>,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Print the captain's log afterwards
        #[arg(long)]
        log: bool,
    },

    /// Measure how often a choice with the given chance succeeds
    Odds {
        /// Success chance in percent (0-100)
        chance: u32,

        /// Number of trials
        #[arg(short, long, default_value = "10000")]
        trials: u32,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Planets {
            system,
            tier,
            count,
            seed,
            log,
        } => commands::planets::run(&system, tier, count, seed, log),
        Commands::Loot {
            tier,
            size,
            resource,
            planet_type,
            bonus,
            seed,
            json,
        } => commands::loot::run(commands::loot::LootArgs {
            tier,
            size,
            resource,
            planet_type,
            bonus,
            seed,
            json,
        }),
        Commands::Encounter {
            alien,
            strength,
            aggression,
            planet_type,
            tier,
            size,
            action,
            seed,
            config,
            log,
        } => commands::encounter::run(commands::encounter::EncounterArgs {
            alien,
            strength,
            aggression,
            planet_type,
            tier,
            size,
            action,
            seed,
            config,
            log,
        }),
        Commands::Event {
            file,
            choice,
            seed,
            log,
        } => commands::event::run(file.as_deref(), choice, seed, log),
        Commands::Odds {
            chance,
            trials,
            seed,
        } => commands::odds::run(chance, trials, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

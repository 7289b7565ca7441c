//! Pointbuy - Entry Point
//!
//! Parses the command line, merges it over the saved settings, and prints
//! one or more generated characters.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

use pointbuy::catalog::{export_default_catalog, Archetype, Catalog};
use pointbuy::character::{character_json, format_character};
use pointbuy::config::{load_settings, save_settings, settings_path, GeneratorSettings};
use pointbuy::generator::{generate_batch, generate_character, GenerationRequest};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ArchetypeArg {
    Generalist,
    Warrior,
    Scholar,
    Negotiator,
    Scout,
}

impl From<ArchetypeArg> for Archetype {
    fn from(arg: ArchetypeArg) -> Self {
        match arg {
            ArchetypeArg::Generalist => Archetype::Generalist,
            ArchetypeArg::Warrior => Archetype::Warrior,
            ArchetypeArg::Scholar => Archetype::Scholar,
            ArchetypeArg::Negotiator => Archetype::Negotiator,
            ArchetypeArg::Scout => Archetype::Scout,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pointbuy", version)]
#[command(about = "Generate point-budget tabletop RPG characters")]
struct Cli {
    /// Character points to spend
    #[arg(short, long, value_parser = clap::value_parser!(i32).range(1..))]
    points: Option<i32>,

    /// Technology level of the setting
    #[arg(short, long, allow_negative_numbers = true)]
    tl: Option<i32>,

    /// Allow cinematic and superhuman content (`--allow-super=false` to forbid)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_super: Option<bool>,

    /// Allow magic and the occult (`--allow-supernatural=false` to forbid)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_supernatural: Option<bool>,

    /// Character name
    #[arg(short, long)]
    name: Option<String>,

    /// Archetype that biases attribute and skill picks
    #[arg(short, long, value_enum)]
    archetype: Option<ArchetypeArg>,

    /// RNG seed for reproducible characters
    #[arg(long)]
    seed: Option<u64>,

    /// Number of characters to generate
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Print JSON instead of a text sheet
    #[arg(long)]
    json: bool,

    /// Directory with catalog overrides (advantages.ron, disadvantages.ron, skills.ron)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Write the built-in catalog as RON files to this directory and exit
    #[arg(long, value_name = "DIR")]
    export_catalog: Option<PathBuf>,

    /// Store the effective options as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl Cli {
    /// Command line options layered over the saved settings
    fn merge_into(&self, mut settings: GeneratorSettings) -> GeneratorSettings {
        if let Some(points) = self.points {
            settings.default_points = points;
        }
        if let Some(tl) = self.tl {
            settings.default_tech_level = tl;
        }
        if let Some(allow) = self.allow_super {
            settings.allow_super = allow;
        }
        if let Some(allow) = self.allow_supernatural {
            settings.allow_supernatural = allow;
        }
        if let Some(name) = &self.name {
            settings.default_name = name.clone();
        }
        if let Some(archetype) = self.archetype {
            settings.default_archetype = archetype.into();
        }
        if let Some(dir) = &self.catalog {
            settings.catalog_dir = Some(dir.clone());
        }
        settings
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::info!("Starting Pointbuy v{}", env!("CARGO_PKG_VERSION"));

    if let Some(dir) = &cli.export_catalog {
        export_default_catalog(dir)
            .with_context(|| format!("exporting catalog to {}", dir.display()))?;
        println!("Catalog written to {}", dir.display());
        return Ok(());
    }

    let settings = cli.merge_into(load_settings());
    if cli.save_settings {
        save_settings(&settings).context("saving settings")?;
        log::info!("Defaults stored in {:?}", settings_path());
    }

    let catalog = Catalog::new(settings.catalog_dir.as_deref());
    let request = settings.request();

    let characters = match cli.seed {
        Some(seed) => generate_batch(&catalog, &request, seed, cli.count as usize),
        None => {
            let mut rng = StdRng::from_entropy();
            (0..cli.count)
                .map(|_| generate_character(&catalog, &request, &mut rng))
                .collect()
        }
    };

    print_characters(&characters, cli.json)
}

fn print_characters(characters: &[pointbuy::Character], json: bool) -> Result<()> {
    for character in characters {
        if json {
            println!("{}", character_json(character).context("serializing character")?);
        } else {
            println!("{}", format_character(character));
        }
    }
    Ok(())
}

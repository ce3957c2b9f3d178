use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bravais_zone::lattice::{BravaisLattice, BrillouinZone};
use bravais_zone::storage::{GroupIo, StorageFile};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

#[derive(Parser)]
#[command(name = "bravais-zone")]
#[command(about = "Complete Bravais lattice bases and compute their Brillouin zones")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a lattice and its Brillouin zone from the supplied unit vectors
    Zone {
        /// Unit vectors as rows, e.g. "1,0;0.5,0.866" (1 or 2 rows)
        #[arg(short, long)]
        units: String,

        /// Save the zone to this storage file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Group name inside the storage file
        #[arg(short, long, default_value = "brillouin_zone")]
        group: String,
    },
    /// Load a Brillouin zone from a storage file and print it
    Inspect {
        /// Input storage file
        #[arg(short, long)]
        input: PathBuf,

        /// Group name inside the storage file
        #[arg(short, long, default_value = "brillouin_zone")]
        group: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting bravais-zone v{}", bravais_zone::VERSION);

    match cli.command {
        Commands::Zone {
            units,
            output,
            group,
        } => build_zone(&units, output.as_deref(), &group),
        Commands::Inspect { input, group } => inspect_zone(&input, &group),
    }
}

fn parse_units(units: &str) -> Result<Vec<Vec<f64>>> {
    units
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|entry| {
                    entry
                        .trim()
                        .parse::<f64>()
                        .with_context(|| format!("invalid number '{}' in units", entry.trim()))
                })
                .collect::<Result<Vec<f64>>>()
        })
        .collect()
}

fn build_zone(units: &str, output: Option<&Path>, group: &str) -> Result<()> {
    let rows = parse_units(units)?;
    let lattice = BravaisLattice::from_rows(&rows).context("failed to build the bravais lattice")?;
    let zone = BrillouinZone::from_lattice(lattice).context("failed to build the brillouin zone")?;
    print_zone(&zone);

    if let Some(path) = output {
        let mut file = StorageFile::new();
        zone.write_to(file.root_mut(), group)?;
        file.save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("Saved brillouin zone to {}:/{}", path.display(), group);
    }
    Ok(())
}

fn inspect_zone(input: &Path, group: &str) -> Result<()> {
    let file = StorageFile::load(input).with_context(|| format!("failed to read {}", input.display()))?;
    let zone = BrillouinZone::read_from(file.root(), group)
        .with_context(|| format!("failed to read group '{}' from {}", group, input.display()))?;
    info!("Loaded brillouin zone from {}:/{}", input.display(), group);
    print_zone(&zone);
    Ok(())
}

fn print_zone(zone: &BrillouinZone) {
    let lattice = zone.lattice();
    println!("Dimension: {}", lattice.dim());
    println!("Cell volume: {:.6}", lattice.cell_volume());
    println!("Units (rows):{}", lattice.units());
    println!("Reciprocal basis (rows):{}", zone.reciprocal_basis());
    println!("Reciprocal basis inverse:{}", zone.reciprocal_basis_inverse());
}

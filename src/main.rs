use clap::{Parser, Subcommand, ValueEnum};
use orrery::domain::ordering::by_radius;
use orrery::{Catalog, CatalogError, Planet, encode_catalog, encode_system, load_catalog};

#[derive(Parser)]
#[command(name = "orrery")]
#[command(version)]
#[command(about = "Inspect and order solar system catalogs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every system in a catalog file
    #[clap(visible_alias = "s")]
    Show {
        /// Catalog file in the line-oriented text format
        file: String,
        /// Emit JSON instead of the text format
        #[arg(long)]
        json: bool,
    },
    /// List one system's planets in ascending order
    #[clap(visible_alias = "p")]
    Planets {
        /// Catalog file in the line-oriented text format
        file: String,
        /// Name of the solar system to inspect
        system: String,
        /// Sort key
        #[arg(long, value_enum, default_value = "size")]
        order: Order,
        /// Emit JSON instead of one planet per line
        #[arg(long)]
        json: bool,
    },
    /// Sort a system's planets and moons by radius and print it
    Sort {
        /// Catalog file in the line-oriented text format
        file: String,
        /// Name of the solar system to sort
        system: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    /// Ascending by planet radius
    Size,
    /// Ascending by orbit radius
    Orbit,
}

fn show(file: &str, json: bool) -> Result<(), CatalogError> {
    let catalog = load_catalog(file)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&catalog).map_err(std::io::Error::other)?);
    } else {
        print!("{}", encode_catalog(&catalog));
    }
    Ok(())
}

fn planets(file: &str, system: &str, order: Order, json: bool) -> Result<(), CatalogError> {
    let mut catalog = load_catalog(file)?;
    if !catalog.select_solar_system(system) {
        return Err(CatalogError::SystemNotFound(system.to_string()));
    }
    let planets: Vec<Planet> = match order {
        Order::Size => catalog.planets_by_radius()?,
        Order::Orbit => catalog.planets_by_orbit_radius()?,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&planets).map_err(std::io::Error::other)?);
    } else {
        for planet in &planets {
            println!("{planet}");
        }
    }
    Ok(())
}

fn sort(file: &str, system: &str) -> Result<(), CatalogError> {
    let mut catalog: Catalog = load_catalog(file)?;
    catalog.sort_solar_system(system, by_radius, by_radius)?;
    let sorted = catalog
        .solar_system(system)
        .ok_or_else(|| CatalogError::SystemNotFound(system.to_string()))?;
    print!("{}", encode_system(sorted));
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { file, json } => show(&file, json),
        Commands::Planets { file, system, order, json } => planets(&file, &system, order, json),
        Commands::Sort { file, system } => sort(&file, &system),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

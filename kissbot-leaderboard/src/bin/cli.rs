use anyhow::Context;
use clap::{Parser, Subcommand};
use kissbot_leaderboard::format::if_empty_zero_width_space;
use kissbot_leaderboard::{collapse_and_format, resolve, resolve_one, Catalog, Category};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "leaderboard-cli")]
#[command(about = "KissBot Leaderboard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog path (YAML, or JSON by extension)
    #[arg(short, long, default_value = "catalog.yaml")]
    catalog: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a name against the catalog entities
    Resolve {
        /// Search query
        query: String,

        /// Resolve against category labels instead of entities
        #[arg(long)]
        categories: bool,
    },

    /// Print the collapsed label for a set of categories
    Format {
        /// Category ids or labels, shortened names allowed
        categories: Vec<String>,
    },

    /// Validate the catalog
    Check,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load(&cli.catalog)
        .inspect_err(|e| tracing::warn!("Rejected catalog {}: {}", cli.catalog, e))
        .with_context(|| format!("loading catalog {}", cli.catalog))?;

    match cli.command {
        Commands::Resolve { query, categories } => {
            let matches: Vec<&str> = if categories {
                resolve(&query, catalog.categories())
                    .into_iter()
                    .map(|c| c.label())
                    .collect()
            } else {
                resolve(&query, catalog.entities())
                    .into_iter()
                    .map(|name| name.as_str())
                    .collect()
            };

            match matches.len() {
                0 => println!("❌ \"{}\" is not recognized", query),
                1 => println!("✅ {}", matches[0]),
                n => {
                    println!("⚠️ \"{}\" is ambiguous ({} matches):", query, n);
                    for (i, name) in matches.iter().enumerate() {
                        println!("   {}. {}", i + 1, name);
                    }
                }
            }
        }

        Commands::Format { categories } => {
            let held = categories
                .iter()
                .map(|search| match catalog.category(search) {
                    Some(category) => Ok(category),
                    None => resolve_one(search, catalog.categories()),
                })
                .collect::<Result<Vec<&Category>, _>>()?;

            let label = collapse_and_format(held, catalog.reference_tree());
            println!("{}", if_empty_zero_width_space(label));
        }

        Commands::Check => {
            println!("📊 Catalog {}:", cli.catalog);
            println!("   Metrics: {}", catalog.metrics().len());
            println!("   Categories: {}", catalog.categories().len());
            println!("   Entities: {}", catalog.entities().len());
            println!(
                "   Full label: {}",
                collapse_and_format(catalog.categories(), catalog.reference_tree())
            );
        }
    }

    Ok(())
}

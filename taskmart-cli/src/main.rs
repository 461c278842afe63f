//! taskmart: command-line shell over the catalogue loader and ranking
//! engine. This is presentation glue only; all ranking semantics live in
//! taskmart-core.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use taskmart_core::{RankOptions, RankedTask, Status, Tag, rank_with};
use taskmart_ingest::{Catalogue, CatalogueCache, CatalogueSource};

mod config;

// One catalogue load per process; every command works off the cached
// snapshot.
static CATALOGUE: CatalogueCache = CatalogueCache::new();

#[derive(Parser, Debug)]
#[command(name = "taskmart", version, about = "Task storefront ranking CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the catalogue for the given filters and print the result
    Rank {
        /// Catalogue CSV path or URL (default: taskmart.toml, then data/tasks.csv)
        #[arg(long)]
        source: Option<String>,

        /// Audience status filter: Single, Parents, or Couple
        #[arg(long)]
        status: Option<String>,

        /// Category tag filter; repeat to select several
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Order tag-filtered results by title relevance ahead of impact
        #[arg(long)]
        relevance: bool,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Load the catalogue and print a summary
    Catalogue {
        /// Catalogue CSV path or URL
        #[arg(long)]
        source: Option<String>,
    },

    /// Print the closed status and category vocabularies
    Tags,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let cfg = config::load_config()?;

    match cli.command {
        Command::Rank {
            source,
            status,
            tags,
            relevance,
            json,
        } => {
            let source = resolve_source(source, &cfg);
            let catalogue = CATALOGUE.get_or_load(&source).await;

            let status = status.as_deref().map(Status::parse);
            let tags: Vec<Tag> = tags.iter().map(|t| Tag::parse(t)).collect();
            let options = RankOptions {
                title_relevance: relevance,
            };

            let ranked = rank_with(&catalogue.tasks, status, &tags, &options);
            if json {
                println!("{}", serde_json::to_string_pretty(&ranked)?);
            } else {
                print_ranked(&ranked, status, &tags);
            }
        }

        Command::Catalogue { source } => {
            let source = resolve_source(source, &cfg);
            let catalogue = CATALOGUE.get_or_load(&source).await;
            print_summary(catalogue, &source);
        }

        Command::Tags => {
            println!("Statuses:");
            for status in Status::ALL {
                println!("  {}", status.as_str());
            }
            println!("\nCategory tags:");
            for tag in Tag::ALL {
                println!("  {}", tag.as_str());
            }
        }
    }

    Ok(())
}

// Tracing is opt-in via RUST_LOG.
fn init_tracing() {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| EnvFilter::try_new(raw.trim()).ok())
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

/// Flag wins over config, config over the built-in default.
fn resolve_source(flag: Option<String>, cfg: &config::Config) -> CatalogueSource {
    let raw = flag.unwrap_or_else(|| cfg.catalogue.source.clone());
    CatalogueSource::parse(&raw)
}

fn print_ranked(ranked: &[RankedTask], status: Option<Status>, tags: &[Tag]) {
    let status_label = status.map(|s| s.as_str()).unwrap_or("any");
    let tag_labels: Vec<&str> = tags.iter().map(|t| t.as_str()).collect();
    println!(
        "Top tasks (status: {}, tags: [{}])\n",
        status_label,
        tag_labels.join(", ")
    );

    if ranked.is_empty() {
        println!("No tasks matched the current selection.");
        return;
    }

    for (i, r) in ranked.iter().enumerate() {
        let badge = if r.is_popular { " [popular]" } else { "" };
        let score = r
            .priority_score
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>2}. [{:<6}] {}{} | {} | score={}",
            i + 1,
            r.task.impact.as_str(),
            r.task.title,
            badge,
            r.task.duration_label(),
            score
        );
    }
}

fn print_summary(catalogue: &Catalogue, source: &CatalogueSource) {
    println!(
        "Loaded {} tasks from {} at {}\n",
        catalogue.len(),
        source,
        catalogue.loaded_at.to_rfc3339()
    );

    println!("By status:");
    for status in Status::ALL {
        let count = catalogue
            .tasks
            .iter()
            .filter(|t| t.has_status(status))
            .count();
        println!("  {:<8} {}", status.as_str(), count);
    }

    println!("\nBy category:");
    for tag in Tag::ALL {
        let count = catalogue
            .tasks
            .iter()
            .filter(|t| t.categories.contains(&tag))
            .count();
        println!("  {:<22} {}", tag.as_str(), count);
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

mod config;

/// Pre-render recipe cards to static HTML.
#[derive(Parser)]
#[clap(name = "render-cards")]
struct Opt {
    /// JSON file holding a record or an array of records
    input: PathBuf,
    /// Write to this file instead of stdout
    #[clap(long, short)]
    output: Option<PathBuf>,
    /// Wrap the cards in a complete HTML document
    #[clap(long)]
    document: bool,
    /// Configuration file, recipe-card.toml by default
    #[clap(long)]
    config: Option<PathBuf>,
}

/// Wrap `cards` in a document if either the flag or the configuration asks for it.
fn finish(cards: String, document: bool, config: &config::Config) -> String {
    if document || config.document {
        card::page::document(&config.title, &cards)
    } else {
        cards
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let opts = Opt::parse();
    let config = config::Config::new(opts.config.as_deref())?;

    let content = std::fs::read_to_string(&opts.input)
        .with_context(|| format!("reading {}", opts.input.display()))?;
    let records: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", opts.input.display()))?;

    let registry = card::Registry::with_recipe_card()?;
    let cards = card::page::render(&registry, &records)?;

    let html = finish(cards, opts.document, &config);

    match opts.output {
        Some(path) => {
            std::fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

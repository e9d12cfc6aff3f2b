use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use longbox::data::loader::load_file;
use longbox::state::CatalogState;

/// Load a catalog snapshot, print its statistics, and list the comics
/// passing the given filters.
#[derive(Debug, Parser)]
#[command(
    name = "longbox",
    about = "Comic catalog statistics and filtering",
    after_help = "The statistics always describe the full eligible catalog; the filters only narrow the printed list."
)]
struct Cli {
    /// Catalog snapshot: .json (API envelope or record array) or .csv
    snapshot: PathBuf,

    /// Case-insensitive title search
    #[arg(long, default_value = "")]
    search: String,

    /// Keep only comics listing this character (exact name)
    #[arg(long)]
    character: Option<String>,

    /// Keep only comics with this format tag (e.g. "comic")
    #[arg(long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Print the detail block for one comic id instead of the list
    #[arg(long, value_name = "ID")]
    id: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let raw = load_file(&cli.snapshot)
        .with_context(|| format!("loading {}", cli.snapshot.display()))?;

    let mut state = CatalogState::default();
    state.load(raw);

    if let Some(catalog) = state.catalog() {
        log::info!(
            "Loaded {} comics ({} characters, {} format tags)",
            catalog.len(),
            catalog.character_names.len(),
            catalog.kinds.len()
        );
    }

    if let Some(id) = cli.id {
        return print_detail(&state, id);
    }

    state.set_search_text(cli.search);
    if let Some(name) = cli.character {
        state.set_character(name);
    }
    if let Some(kind) = cli.kind {
        state.set_kind(kind);
    }

    if let Some(stats) = state.stats() {
        println!("{stats}");
        println!();
    }

    let total = state.catalog().map(|catalog| catalog.len()).unwrap_or(0);
    let visible: Vec<_> = state.visible().collect();
    println!("{} of {} comics match", visible.len(), total);
    for comic in visible {
        println!("  {comic}");
    }

    Ok(())
}

/// Detail view for a single comic, looked up in the cleaned catalog (the
/// filters do not apply here).
fn print_detail(state: &CatalogState, id: u64) -> Result<()> {
    let comic = state
        .catalog()
        .and_then(|catalog| catalog.comics.iter().find(|comic| comic.id == id))
        .with_context(|| format!("no comic with id {id} in the snapshot"))?;

    println!("{comic}");
    match &comic.description {
        Some(description) if !description.is_empty() => println!("{description}"),
        _ => println!("No description available."),
    }
    println!("Issue Number: {}", comic.issue_number);
    println!("Page Count: {}", comic.page_count);
    match comic.prices.first() {
        Some(price) => println!("Price: {}", price.amount),
        None => println!("Price: N/A"),
    }
    if let Some(thumbnail) = &comic.thumbnail {
        println!("Cover: {}", thumbnail.url());
    }

    Ok(())
}

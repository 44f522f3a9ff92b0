mod catalog;
mod cli;
mod codec;
mod config;
mod display;
mod error;
mod menu;
mod persist;
mod product;
mod resolver;

use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

use catalog::ProductStore;
use cli::Command;
use codec::create_codec;
use config::Config;
use menu::Menu;
use product::SortKey;

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::parse();
    let config = Config::load(&args.config)?;
    let path = config.catalog_path(args.file.as_deref())?;
    let mut store = ProductStore::open(&path, create_codec(config.format))
        .with_context(|| format!("Failed to open catalog: {}", path.display()))?;

    match args.command {
        Command::Add { fields } => run_add(&mut store, fields.into())?,
        Command::Remove { id } => run_remove(&mut store, id)?,
        Command::Update { fields, id } => run_update(&mut store, id, fields.into())?,
        Command::Sort { by, save } => run_sort(&mut store, by, save)?,
        Command::Search { query } => run_search(&store, &query)?,
        Command::List => run_list(&store)?,
        Command::Menu => {
            let stdin = io::stdin();
            Menu::new(&mut store, stdin.lock(), io::stdout()).run()?;
        }
    }

    store.close();
    Ok(())
}

fn run_add(store: &mut ProductStore, fields: product::ProductFields) -> Result<()> {
    let product = store.add(fields)?;
    println!(
        "Added product {} to {}",
        format!("#{}", product.product_id).green(),
        store.path().display()
    );
    Ok(())
}

fn run_remove(store: &mut ProductStore, id: u64) -> Result<()> {
    ensure_exists(store, id)?;
    store.remove(id)?;
    println!("Removed product #{}", id);
    Ok(())
}

fn run_update(store: &mut ProductStore, id: u64, fields: product::ProductFields) -> Result<()> {
    ensure_exists(store, id)?;
    store.update(id, fields)?;
    println!("Updated product #{}", id);
    if let Some(product) = store.get(id) {
        display::write_product(&mut io::stdout(), product)?;
    }
    Ok(())
}

fn run_sort(store: &mut ProductStore, key: SortKey, save: bool) -> Result<()> {
    store.sort(key);
    if save {
        store.save()?;
    }
    display::write_products(&mut io::stdout(), store.products())?;
    Ok(())
}

fn run_list(store: &ProductStore) -> Result<()> {
    if store.is_empty() {
        println!("Catalog {} is empty.", store.path().display());
        return Ok(());
    }
    display::write_products(&mut io::stdout(), store.products())?;
    Ok(())
}

fn run_search(store: &ProductStore, query: &str) -> Result<()> {
    let found = store.search(query);
    if found.is_empty() {
        println!("No matching products found.");
        return Ok(());
    }
    display::write_products(&mut io::stdout(), &found)?;
    Ok(())
}

fn ensure_exists(store: &ProductStore, id: u64) -> Result<()> {
    if !store.contains(id) {
        anyhow::bail!("Product ID {} not found", id);
    }
    Ok(())
}

//! CLI command implementations
//!
//! Commands are thin clients over the store: build input, run exactly one
//! store operation, then translate the store's error field into the exit
//! code. Form-side validation runs here, before anything is submitted,
//! through the same validator that gates collaborator payloads.

use std::fs;

use serde_json::{json, Value};
use tracing::info;

use crate::api::{ApiConfig, HttpApi, ProductApi};
use crate::schema::{validate, Product, ProductPatch};
use crate::store::ProductStore;

use super::args::{AddArgs, Cli, Command, UpdateArgs};
use super::errors::{CliError, CliResult};

/// Fixed category set offered by the product form.
///
/// A UI affordance only: the validator accepts any non-empty category, so
/// collections loaded from the collaborator may carry labels outside this
/// list.
pub const CATEGORIES: [&str; 3] = ["Bottle", "Chair", "Table"];

/// Parse arguments, run one store operation, report the outcome
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    setup_tracing();

    let config = load_config(&cli)?;
    let mut store = ProductStore::new(HttpApi::new(config));

    match cli.command {
        Command::List => list(&mut store).await,
        Command::Add(args) => add(&mut store, args).await,
        Command::Update(args) => update(&mut store, args).await,
        Command::Delete { serial } => delete(&mut store, &serial).await,
    }
}

/// Tracing setup; RUST_LOG controls verbosity, default info
fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

/// Resolve the API config: file if given, then the base-url flag on top
fn load_config(cli: &Cli) -> CliResult<ApiConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| CliError::Config(format!("{}: {}", path.display(), err)))?;
            serde_json::from_str(&raw)
                .map_err(|err| CliError::Config(format!("{}: {}", path.display(), err)))?
        }
        None => ApiConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    Ok(config)
}

async fn list<A: ProductApi>(store: &mut ProductStore<A>) -> CliResult<()> {
    store.load().await;
    finish(store)?;
    print_products(store.products());
    Ok(())
}

async fn add<A: ProductApi>(store: &mut ProductStore<A>, args: AddArgs) -> CliResult<()> {
    check_category(&args.category)?;

    let candidate = candidate_from_args(&args);
    let product = validate(&candidate)?;
    let serial = product.product_serial_number.clone();

    store.add(product).await;
    finish(store)?;

    info!(%serial, "product created");
    println!("added {}", serial);
    Ok(())
}

async fn update<A: ProductApi>(store: &mut ProductStore<A>, args: UpdateArgs) -> CliResult<()> {
    if let Some(category) = &args.category {
        check_category(category)?;
    }

    let patch = patch_from_args(&args);
    if patch.is_empty() {
        return Err(CliError::Operation("no fields to update".into()));
    }

    store.update(&args.serial, patch).await;
    finish(store)?;

    println!("updated {}", args.serial);
    Ok(())
}

async fn delete<A: ProductApi>(store: &mut ProductStore<A>, serial: &str) -> CliResult<()> {
    store.delete(serial).await;
    finish(store)?;

    println!("deleted {}", serial);
    Ok(())
}

/// Convert the store's error field into the command result
fn finish<A: ProductApi>(store: &ProductStore<A>) -> CliResult<()> {
    match store.error() {
        Some(message) => Err(CliError::Operation(message.to_string())),
        None => Ok(()),
    }
}

fn check_category(category: &str) -> CliResult<()> {
    if CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CliError::UnknownCategory(
            category.to_string(),
            CATEGORIES.join(", "),
        ))
    }
}

/// Assemble the untyped form candidate; the validator is the gate, so no
/// constraints are checked here
fn candidate_from_args(args: &AddArgs) -> Value {
    let mut candidate = json!({
        "productSerialNumber": args.serial,
        "productName": args.name,
        "companyName": args.company,
        "category": args.category,
        "stock": args.stock,
        "price": args.price,
    });
    if let Some(d) = args.wholesale_discount {
        candidate["wholesaleDiscount"] = json!(d);
    }
    if let Some(d) = args.normal_discount {
        candidate["normalDiscount"] = json!(d);
    }
    if let Some(d) = args.special_discount {
        candidate["specialDiscount"] = json!(d);
    }
    candidate
}

fn patch_from_args(args: &UpdateArgs) -> ProductPatch {
    ProductPatch {
        product_serial_number: None,
        product_name: args.name.clone(),
        company_name: args.company.clone(),
        category: args.category.clone(),
        stock: args.stock,
        price: args.price,
        wholesale_discount: args.wholesale_discount,
        normal_discount: args.normal_discount,
        special_discount: args.special_discount,
    }
}

fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("no products");
        return;
    }

    println!(
        "{:<18} {:<20} {:<16} {:<10} {:>8} {:>10}",
        "SERIAL", "NAME", "COMPANY", "CATEGORY", "STOCK", "PRICE"
    );
    for product in products {
        println!(
            "{:<18} {:<20} {:<16} {:<10} {:>8} {:>10.2}",
            product.product_serial_number,
            product.product_name,
            product.company_name,
            product.category,
            product.stock,
            product.price,
        );
    }
}

//! CLI argument definitions using clap
//!
//! Commands:
//! - stockdesk list
//! - stockdesk add --serial SN-1 --name Widget --company Acme --category Bottle --stock 10 --price 5
//! - stockdesk update SN-1 --price 50
//! - stockdesk delete SN-1

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// stockdesk - a typed client-side store for a product-management API
#[derive(Parser, Debug)]
#[command(name = "stockdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the product API; overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and print the product collection
    List,

    /// Validate a new product and submit it for creation
    Add(AddArgs),

    /// Submit a partial update for the product with the given serial number
    Update(UpdateArgs),

    /// Delete the product with the given serial number
    Delete {
        /// Product serial number
        serial: String,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Product serial number
    #[arg(long)]
    pub serial: String,

    /// Product name
    #[arg(long)]
    pub name: String,

    /// Company name
    #[arg(long)]
    pub company: String,

    /// Category (one of: Bottle, Chair, Table)
    #[arg(long)]
    pub category: String,

    /// Units on hand, at least 1
    #[arg(long)]
    pub stock: f64,

    /// Unit price, at least 1
    #[arg(long)]
    pub price: f64,

    /// Wholesale discount, positive when given
    #[arg(long)]
    pub wholesale_discount: Option<f64>,

    /// Normal discount, positive when given
    #[arg(long)]
    pub normal_discount: Option<f64>,

    /// Special discount, positive when given
    #[arg(long)]
    pub special_discount: Option<f64>,
}

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Serial number of the product to update
    pub serial: String,

    /// New product name
    #[arg(long)]
    pub name: Option<String>,

    /// New company name
    #[arg(long)]
    pub company: Option<String>,

    /// New category (one of: Bottle, Chair, Table)
    #[arg(long)]
    pub category: Option<String>,

    /// New stock level
    #[arg(long)]
    pub stock: Option<f64>,

    /// New unit price
    #[arg(long)]
    pub price: Option<f64>,

    /// New wholesale discount
    #[arg(long)]
    pub wholesale_discount: Option<f64>,

    /// New normal discount
    #[arg(long)]
    pub normal_discount: Option<f64>,

    /// New special discount
    #[arg(long)]
    pub special_discount: Option<f64>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

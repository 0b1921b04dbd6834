//! CLI module for stockdesk
//!
//! Stands in for the product-management UI: each invocation drives exactly
//! one store operation and presents the resulting state. Running one
//! operation per process also keeps operations from overlapping, which the
//! store itself does not guard against.
//!
//! Commands:
//! - list: fetch and print the product collection
//! - add: validate a new product from flags and submit it
//! - update: submit a partial update for one serial number
//! - delete: remove a product by serial number

mod args;
mod commands;
mod errors;

pub use args::{AddArgs, Cli, Command, UpdateArgs};
pub use commands::{run, CATEGORIES};
pub use errors::{CliError, CliResult};

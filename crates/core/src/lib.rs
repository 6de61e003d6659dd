//! Spintax expansion with tabular variables.
//!
//! - [`spintax`]: expand and check templates
//! - [`dataset`]: load `;`-separated variable tables
//! - [`generate`]: run many expansions, simple or one per data row
//! - [`export`]: write results as CSV or JSON
//! - [`config`]: TOML profiles with generation defaults

pub mod config;
pub mod dataset;
pub mod export;
pub mod generate;
pub mod spintax;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

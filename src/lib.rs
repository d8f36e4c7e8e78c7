// src/lib.rs
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod host;
pub mod output;
pub mod permutator;
pub mod strategies;
pub mod types;
pub mod utils;
pub mod wordlist;

pub use cli::Args;
pub use engine::PermutationEngine;
pub use permutator::Permutator;
pub use types::{Config, HostRecord, RunStats, RustPermuteError};
pub use wordlist::Wordlist;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Solana transaction summaries from the Helius enhanced transactions API
//!
//! ```no_run
//! use solparse::{config::Config, fetcher::HeliusFetcher, get_transaction_summary};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let fetcher = HeliusFetcher::new(&config)?;
//! let summary = get_transaction_summary(&fetcher, "5h6xBEauJ3PK6SWCZ1PGjBvj8vDdWG3KpwATGy1ARAXFSDwt8GFXM7W5Ncn16wmqokgpiKRLuS83KUxyZyv2sUYv").await?;
//! println!("{}", solparse::render::SummaryReport::new(&summary));
//! # Ok(())
//! # }
//! ```


pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalizer;
pub mod raw;
pub mod render;
pub mod summary;
pub mod view;

pub use error::{FetchError, SummaryError};
pub use normalizer::{NativeTransfer, TokenTransfer, TransactionSummary};
pub use summary::get_transaction_summary;

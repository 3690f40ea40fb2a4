pub mod config;
pub mod error;
pub mod fetcher;
pub mod rpc;

pub use config::{FetcherConfig, Network};
pub use error::{CoreError, RequestFailure};
pub use fetcher::{FetchOutcome, TransactionFetcher};

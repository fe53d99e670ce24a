//! Fetch adapters - PageFetcher implementations.

mod mock;
mod reqwest_fetcher;

pub use mock::MockPageFetcher;
pub use reqwest_fetcher::ReqwestPageFetcher;

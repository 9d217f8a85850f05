//! HTTP client layer: `Client` with options merging and retry policies.

pub mod client;
pub mod options;
pub mod params;
pub mod retry;

pub use client::{Client, ClientBuilder};
pub use options::{ClientOptions, RequestTimeout};
pub use params::{ParamValue, SearchParams};
pub use retry::{RetryConfig, RetryPolicy};

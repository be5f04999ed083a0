//! HTTP layer: `WhmcsHttp` transport and reply interpretation.
//!
//! [`response`] is transport-independent and always compiled; the reqwest
//! client needs the `http` feature.

#[cfg(feature = "http")]
pub mod client;
pub mod response;

#[cfg(feature = "http")]
pub use client::WhmcsHttp;
pub use response::{interpret, RawResponse, ResponseBody};

//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Domain records and the normalizers that build them
//! - `wire.rs`: Raw serde structs matching WHMCS replies
//! - `convert.rs`: `TryFrom` conversions with validation
//! - `params.rs`: Request parameter builders
//! - `client.rs`: Sub-client with one async method per action (`http` feature)
//!
//! Small slices (`payment`, `affiliate`) keep conversions and builders in `mod.rs`.

pub mod affiliate;
pub mod client;
pub mod invoice;
pub mod order;
pub mod payment;
pub mod product;
pub mod registration;
pub mod service;
pub mod transaction;

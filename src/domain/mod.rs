//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Domain types and the source traits fetch tickets run against
//! - `wire.rs` — Raw serde structs matching API responses
//! - `convert.rs` — `From` conversions from wire to domain types
//! - `client.rs` — Sub-client with HTTP methods
//! - controllers (`table.rs`, `detail`) — state machines that apply fetch results

pub mod detail;
pub mod filter;
pub mod market;
pub mod price_history;

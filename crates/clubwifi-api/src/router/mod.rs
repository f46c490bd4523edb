// MikroTik RouterOS v7 REST API surface.
//
// `client.rs` holds transport mechanics (auth, URL building, error-body
// parsing); `hotspot.rs` adds the captive-portal operations as inherent
// methods; `models.rs` holds the raw wire types.

pub mod client;
pub mod hotspot;
pub mod models;

pub use client::RouterClient;

// LHU club membership API surface.

pub mod client;
pub mod models;

pub use client::MembershipClient;

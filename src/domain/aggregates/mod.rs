//! Aggregates module

pub mod client;
pub mod contract;

pub use client::{Client, ClientKind, NewClient};
pub use contract::{Contract, NewContract};

//! Application layer
//!
//! Orchestrates use cases over the repositories.

pub mod client_service;
pub mod contract_service;
pub mod dto;

pub use client_service::ClientService;
pub use contract_service::{filter_by_updated_after, ContractService};
pub use dto::*;
